use std::io::Error as IoError;

use serde_json::Error as JsonError;
use serde_yaml::Error as SerdeYamlError;
use thiserror::Error;

/// Failure translating a single object between its native and canonical form
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid timestamp `{value}`: {source}")]
    InvalidTime {
        value: String,
        source: chrono::ParseError,
    },
    #[error("unsupported value `{value}` for `{field}`")]
    UnsupportedValue { field: &'static str, value: String },
    #[error("container `{0}` reports more than one state")]
    AmbiguousContainerState(String),
    #[error("malformed object: {0}")]
    Malformed(#[from] JsonError),
}

impl TranslateError {
    pub fn unsupported<V: Into<String>>(field: &'static str, value: V) -> Self {
        Self::UnsupportedValue {
            field,
            value: value.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] IoError),
    #[error("Yaml error: {0}")]
    SerdeError(#[from] SerdeYamlError),
}
