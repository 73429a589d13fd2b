use serde::Deserialize;
use serde::Serialize;

use crate::{Crd, CrdNames, DefaultHeader, Int32OrString, Spec, Status, Time};

const ROUTE_API: Crd = Crd {
    group: "route.openshift.io",
    version: "v1",
    names: CrdNames {
        kind: "Route",
        plural: "routes",
        singular: "route",
    },
};

/// only services can be targeted by a route
pub const TARGET_KIND_SERVICE: &str = "Service";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteSpec {
    pub host: String,
    pub path: String,
    pub to: RouteTargetReference,
    pub alternate_backends: Vec<RouteTargetReference>,
    pub port: Option<RoutePort>,
    pub tls: Option<TlsConfig>,
    pub wildcard_policy: Option<String>,
}

impl Spec for RouteSpec {
    type Status = RouteStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &ROUTE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteTargetReference {
    pub kind: String,
    pub name: String,
    pub weight: Option<i32>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RoutePort {
    pub target_port: Int32OrString,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TlsConfig {
    pub termination: String,
    pub certificate: Option<String>,
    pub key: Option<String>,
    pub ca_certificate: Option<String>,
    pub destination_ca_certificate: Option<String>,
    pub insecure_edge_termination_policy: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteStatus {
    pub ingress: Vec<RouteIngress>,
}

impl Status for RouteStatus {}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteIngress {
    pub host: String,
    pub router_name: String,
    pub wildcard_policy: Option<String>,
    pub conditions: Vec<RouteIngressCondition>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteIngressCondition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    pub reason: String,
    pub message: String,
    pub last_transition_time: Option<Time>,
}
