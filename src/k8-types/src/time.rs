use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::de::Deserializer;
use serde::Deserialize;
use serde::Serialize;
use serde::Serializer;

/// wire format used by the api server for timestamps
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Timestamp as found in object metadata and status.
/// Zero value (`0001-01-01T00:00:00Z`) means the time was never set, it
/// is encoded as `null` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(pub DateTime<Utc>);

impl Time {
    /// unset sentinel
    pub fn zero() -> Self {
        let midnight = NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self(midnight)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn inner(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<DateTime<Utc>> for Time {
    fn from(time: DateTime<Utc>) -> Self {
        Self(time)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_zero() {
            serializer.serialize_none()
        } else {
            serializer.collect_str(self)
        }
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(Self::zero()),
            Some(text) => DateTime::parse_from_rfc3339(text)
                .map(|time| Self(time.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
        }
    }
}
