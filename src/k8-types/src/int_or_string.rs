use std::{convert::Infallible, fmt, str::FromStr};

/// See: https://github.com/kubernetes/apimachinery/blob/master/pkg/util/intstr/intstr.go
/// Holds either an int32 or a string, ports and rollout surge values use it.
/// Serialized as the bare inner value.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Int32OrString {
    Int(i32),
    String(String),
}

impl Default for Int32OrString {
    fn default() -> Self {
        Int32OrString::Int(0)
    }
}
impl FromStr for Int32OrString {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i32>() {
            Ok(i) => Ok(Int32OrString::Int(i)),
            Err(_) => Ok(Int32OrString::String(s.to_string())),
        }
    }
}

impl Int32OrString {
    /// numeric value, `None` for named values
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Int32OrString::Int(i) => Some(*i),
            Int32OrString::String(_) => None,
        }
    }

    /// true for the numeric zero, which is also the default
    pub fn is_zero(&self) -> bool {
        matches!(self, Int32OrString::Int(0))
    }
}

impl fmt::Display for Int32OrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Int32OrString::Int(i) => write!(f, "{}", i),
            Int32OrString::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Int32OrString {
    fn from(s: &str) -> Self {
        Int32OrString::String(s.to_owned())
    }
}

impl From<i32> for Int32OrString {
    fn from(f: i32) -> Self {
        Int32OrString::Int(f)
    }
}

impl<'de> serde::Deserialize<'de> for Int32OrString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Unexpected};

        struct IntOrStringVisitor;

        impl serde::de::Visitor<'_> for IntOrStringVisitor {
            type Value = Int32OrString;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a 32-bit integer or a string")
            }

            fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
                i32::try_from(v)
                    .map(Int32OrString::Int)
                    .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
            }

            fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
                i32::try_from(v)
                    .map(Int32OrString::Int)
                    .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Int32OrString::String(v.to_owned()))
            }

            fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(Int32OrString::String(v))
            }
        }

        deserializer.deserialize_any(IntOrStringVisitor)
    }
}

impl serde::Serialize for Int32OrString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Int32OrString::Int(i) => i.serialize(serializer),
            Int32OrString::String(s) => s.serialize(serializer),
        }
    }
}
