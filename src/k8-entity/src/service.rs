use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use k8_types::core::service as native;
use k8_types::{DefaultHeader, Int32OrString, K8Obj};

use crate::{Metadata, TranslateError};

pub const SERVICE_KIND: &str = "Service";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Service {
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: ServiceSpec,
    #[serde(default)]
    pub status: ServiceStatus,
}

impl_entity!(Service, SERVICE_KIND);

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    /// `ClusterIP`, `NodePort`, `LoadBalancer` or `ExternalName`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(rename = "clusterIP", default, skip_serializing_if = "String::is_empty")]
    pub cluster_ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ServicePort>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_port: Option<Int32OrString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_port: Option<u16>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceStatus {
    pub load_balancer: LoadBalancer,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadBalancer {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ingress: Vec<LoadBalancerIngress>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerIngress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

impl Service {
    pub fn from_service(service: &K8Obj<native::ServiceSpec>) -> Self {
        let spec = &service.spec;
        Self {
            metadata: Metadata::from_object_meta(SERVICE_KIND, &service.metadata),
            spec: ServiceSpec {
                type_: spec.r#type.as_ref().map(|ty| ty.as_str().to_owned()),
                cluster_ip: spec.cluster_ip.clone(),
                external_name: spec.external_name.clone(),
                ports: spec
                    .ports
                    .iter()
                    .map(|port| ServicePort {
                        name: port.name.clone(),
                        protocol: port.protocol.clone(),
                        port: port.port,
                        target_port: port.target_port.clone(),
                        node_port: port.node_port,
                    })
                    .collect(),
                selector: spec
                    .selector
                    .as_ref()
                    .map(|selector| selector.clone().into_iter().collect()),
            },
            status: ServiceStatus {
                load_balancer: LoadBalancer {
                    ingress: service
                        .status
                        .load_balancer
                        .ingress
                        .iter()
                        .map(|ingress| LoadBalancerIngress {
                            ip: ingress.ip.clone(),
                            hostname: ingress.hostname.clone(),
                        })
                        .collect(),
                },
            },
        }
    }

    pub fn to_service(&self) -> Result<K8Obj<native::ServiceSpec>, TranslateError> {
        let r#type = match self.spec.type_.as_deref() {
            Some(ty) => Some(
                ty.parse::<native::LoadBalancerType>()
                    .map_err(|value| TranslateError::unsupported("spec.type", value))?,
            ),
            None => None,
        };

        let spec = native::ServiceSpec {
            cluster_ip: self.spec.cluster_ip.clone(),
            r#type,
            external_name: self.spec.external_name.clone(),
            ports: self
                .spec
                .ports
                .iter()
                .map(|port| native::ServicePort {
                    name: port.name.clone(),
                    protocol: port.protocol.clone(),
                    node_port: port.node_port,
                    port: port.port,
                    target_port: port.target_port.clone(),
                })
                .collect(),
            selector: self
                .spec
                .selector
                .as_ref()
                .map(|selector| selector.clone().into_iter().collect()),
        };

        let status = native::ServiceStatus {
            load_balancer: native::LoadBalancerStatus {
                ingress: self
                    .status
                    .load_balancer
                    .ingress
                    .iter()
                    .map(|ingress| native::LoadBalancerIngress {
                        hostname: ingress.hostname.clone(),
                        ip: ingress.ip.clone(),
                    })
                    .collect(),
            },
        };

        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            spec,
            DefaultHeader::default(),
            status,
        ))
    }

    pub fn from_services(services: &[K8Obj<native::ServiceSpec>]) -> Vec<Self> {
        services.iter().map(Self::from_service).collect()
    }
}
