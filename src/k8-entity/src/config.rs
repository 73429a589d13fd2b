use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::ConfigError;

pub const DEFAULT_INGRESS_PORT: i32 = 8080;
pub const DEFAULT_INGRESS_PATH: &str = "/";
pub const DEFAULT_INGRESS_PATH_TYPE: &str = "Prefix";

/// Settings for the adapters, read from yaml
///
/// ```yaml
/// route:
///   ingress-port: 8080
///   path: /
///   path-type: Prefix
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TranslatorConfig {
    pub route: RouteDefaults,
}

impl TranslatorConfig {
    pub fn from_file<T: AsRef<Path>>(path: T) -> Result<Self, ConfigError> {
        let file = File::open(path.as_ref())?;
        Ok(serde_yaml::from_reader(file)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// values injected when writing ingress objects from a canonical route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RouteDefaults {
    /// used by v1beta1 ingress when route has no target port
    pub ingress_port: i32,
    /// used by v1 ingress when route has no path
    pub path: String,
    /// used by v1 ingress when route has no path type
    pub path_type: String,
}

impl Default for RouteDefaults {
    fn default() -> Self {
        Self {
            ingress_port: DEFAULT_INGRESS_PORT,
            path: DEFAULT_INGRESS_PATH.to_owned(),
            path_type: DEFAULT_INGRESS_PATH_TYPE.to_owned(),
        }
    }
}

#[cfg(test)]
mod test {

    use super::RouteDefaults;
    use super::TranslatorConfig;

    #[test]
    fn test_default_config() {
        let config = TranslatorConfig::default();
        assert_eq!(config.route.ingress_port, 8080);
        assert_eq!(config.route.path, "/");
        assert_eq!(config.route.path_type, "Prefix");
    }

    #[test]
    fn test_partial_yaml() {
        let config = TranslatorConfig::from_yaml(
            r#"
route:
  ingress-port: 9090
"#,
        )
        .expect("config");

        assert_eq!(
            config.route,
            RouteDefaults {
                ingress_port: 9090,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_empty_yaml() {
        let config = TranslatorConfig::from_yaml("{}").expect("config");
        assert_eq!(config, TranslatorConfig::default());
    }

    #[test]
    fn test_missing_file() {
        assert!(TranslatorConfig::from_file("/nonexistent/translator.yaml").is_err());
    }
}
