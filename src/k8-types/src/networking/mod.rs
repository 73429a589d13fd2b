//!
//! Ingress objects, both the current `networking.k8s.io/v1` api
//! and the legacy `extensions/v1beta1` one
//!
pub mod ingress;
pub mod ingress_v1beta1;

use serde::Deserialize;
use serde::Serialize;

/// tls section, identical in both ingress versions
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IngressTls {
    pub hosts: Vec<String>,
    pub secret_name: Option<String>,
}
