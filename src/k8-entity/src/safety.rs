//!
//! Log-and-degrade helpers for reverse translations.
//!
//! Reverse translations return `Result`; callers that prefer an absent value
//! over an error wrap the call here. The failure is logged with the entity
//! name and the call site, and the result is always `None`, never a
//! partially built object.
//!
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe, Location};

use tracing::warn;

use crate::TranslateError;

/// Turn a failed translation into `None`, logging the failure
#[track_caller]
pub fn recover<T>(name: &str, result: Result<T, TranslateError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let location = Location::caller();
            warn!(entity = name, %err, %location, "translation unavailable");
            None
        }
    }
}

/// Same as [`recover`] but also contains panics raised by `translate`
#[track_caller]
pub fn guard<T, F>(name: &str, translate: F) -> Option<T>
where
    F: FnOnce() -> Result<T, TranslateError>,
{
    let location = Location::caller();
    match catch_unwind(AssertUnwindSafe(translate)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(err)) => {
            warn!(entity = name, %err, %location, "translation unavailable");
            None
        }
        Err(payload) => {
            let panic = panic_message(payload.as_ref());
            warn!(entity = name, %panic, %location, "recovered from translation panic");
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod test {

    use crate::TranslateError;

    use super::{guard, panic_message, recover};

    #[test]
    fn test_recover_ok() {
        assert_eq!(recover("web", Ok::<_, TranslateError>(5)), Some(5));
        assert_eq!(
            recover::<u8>("web", Err(TranslateError::MissingField("spec.replicas"))),
            None
        );
    }

    #[test]
    fn test_guard_contains_panic() {
        assert_eq!(guard::<u8, _>("broken", || panic!("dereferenced absent field")), None);
    }

    #[test]
    fn test_guard_passes_errors_and_values() {
        assert_eq!(guard("ok", || Ok::<_, TranslateError>("value")), Some("value"));
        assert_eq!(
            guard::<u8, _>("bad", || Err(TranslateError::MissingField("spec"))),
            None
        );
    }

    #[test]
    fn test_panic_message() {
        assert_eq!(panic_message(&"static text"), "static text");
        assert_eq!(panic_message(&"owned text".to_owned()), "owned text");
        assert_eq!(panic_message(&7_u8), "unknown panic");
    }
}
