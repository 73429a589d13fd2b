use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

use crate::Crd;
use crate::CrdNames;
use crate::DefaultHeader;
use crate::Int32OrString;
use crate::Spec;
use crate::Status;

const SERVICE_API: Crd = Crd {
    group: "core",
    version: "v1",
    names: CrdNames {
        kind: "Service",
        plural: "services",
        singular: "service",
    },
};

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceSpec {
    #[serde(rename = "clusterIP")]
    pub cluster_ip: String,
    pub r#type: Option<LoadBalancerType>,
    pub external_name: Option<String>,
    pub ports: Vec<ServicePort>,
    pub selector: Option<HashMap<String, String>>,
}

impl Spec for ServiceSpec {
    type Status = ServiceStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &SERVICE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    pub name: Option<String>,
    pub protocol: Option<String>,
    pub node_port: Option<u16>,
    pub port: u16,
    pub target_port: Option<Int32OrString>,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceStatus {
    pub load_balancer: LoadBalancerStatus,
}

impl Status for ServiceStatus {}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Clone)]
pub enum LoadBalancerType {
    ExternalName,
    #[allow(clippy::upper_case_acronyms)]
    ClusterIP,
    NodePort,
    LoadBalancer,
}

impl LoadBalancerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExternalName => "ExternalName",
            Self::ClusterIP => "ClusterIP",
            Self::NodePort => "NodePort",
            Self::LoadBalancer => "LoadBalancer",
        }
    }
}

impl std::str::FromStr for LoadBalancerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ExternalName" => Ok(Self::ExternalName),
            "ClusterIP" => Ok(Self::ClusterIP),
            "NodePort" => Ok(Self::NodePort),
            "LoadBalancer" => Ok(Self::LoadBalancer),
            other => Err(other.to_owned()),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancerStatus {
    pub ingress: Vec<LoadBalancerIngress>,
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerIngress {
    pub hostname: Option<String>,
    pub ip: Option<String>,
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use crate::Int32OrString;

    use super::LoadBalancerType;
    use super::ServiceSpec;

    #[test]
    fn test_service_spec_decode() {
        let spec: ServiceSpec = serde_json::from_value(json!({
            "clusterIP": "10.0.0.1",
            "type": "NodePort",
            "ports": [ { "port": 80, "targetPort": "http", "nodePort": 30080 } ]
        }))
        .expect("spec");

        assert_eq!(spec.r#type, Some(LoadBalancerType::NodePort));
        assert_eq!(
            spec.ports[0].target_port,
            Some(Int32OrString::String("http".to_owned()))
        );
        assert_eq!("ClusterIP".parse::<LoadBalancerType>(), Ok(LoadBalancerType::ClusterIP));
        assert!("Bogus".parse::<LoadBalancerType>().is_err());
    }
}
