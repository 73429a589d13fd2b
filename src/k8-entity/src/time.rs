use chrono::DateTime;
use chrono::Utc;

use k8_types::Time;

use crate::TranslateError;

pub use k8_types::TIME_FORMAT;

/// Canonical text of a native timestamp.
/// The zero sentinel means "never observed" and has no text.
pub fn format_time(time: &Time) -> Option<String> {
    if time.is_zero() {
        None
    } else {
        Some(time.inner().format(TIME_FORMAT).to_string())
    }
}

/// same as [`format_time`] for timestamps the native object may omit
pub fn format_optional_time(time: Option<&Time>) -> Option<String> {
    time.and_then(format_time)
}

/// Inverse of [`format_time`], absent or empty text is the zero sentinel
pub fn parse_time(text: Option<&str>) -> Result<Time, TranslateError> {
    match text {
        None | Some("") => Ok(Time::zero()),
        Some(text) => DateTime::parse_from_rfc3339(text)
            .map(|time| Time(time.with_timezone(&Utc)))
            .map_err(|source| TranslateError::InvalidTime {
                value: text.to_owned(),
                source,
            }),
    }
}

/// Inverse of [`format_optional_time`]
pub fn parse_optional_time(text: Option<&str>) -> Result<Option<Time>, TranslateError> {
    match text {
        None => Ok(None),
        Some(text) => parse_time(Some(text)).map(Some),
    }
}

#[cfg(test)]
mod test {

    use chrono::TimeZone;
    use chrono::Utc;

    use k8_types::Time;

    use crate::TranslateError;

    use super::{format_optional_time, format_time, parse_optional_time, parse_time};

    #[test]
    fn test_zero_time_is_absent() {
        assert_eq!(format_time(&Time::zero()), None);
        assert_eq!(format_optional_time(Some(&Time::zero())), None);
        assert_eq!(format_optional_time(None), None);
    }

    #[test]
    fn test_epoch_is_not_zero() {
        let epoch = Time(Utc.timestamp_opt(0, 0).single().expect("epoch"));
        assert_eq!(format_time(&epoch).as_deref(), Some("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn test_time_round_trip() {
        let time = Time(
            Utc.with_ymd_and_hms(2022, 11, 3, 14, 5, 9)
                .single()
                .expect("time"),
        );
        let text = format_time(&time).expect("text");
        assert_eq!(text, "2022-11-03T14:05:09Z");
        assert_eq!(parse_time(Some(&text)).expect("parse"), time);
    }

    #[test]
    fn test_parse_absent_and_invalid() {
        assert!(parse_time(None).expect("absent").is_zero());
        assert!(parse_time(Some("")).expect("empty").is_zero());
        assert_eq!(parse_optional_time(None).expect("absent"), None);

        let error = parse_time(Some("yesterday")).expect_err("invalid");
        assert!(matches!(error, TranslateError::InvalidTime { .. }));
    }
}
