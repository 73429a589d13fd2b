use serde::Deserialize;
use serde::Serialize;

use crate::core::service::LoadBalancerStatus;
use crate::{Crd, CrdNames, DefaultHeader, Int32OrString, Spec, Status};

use super::IngressTls;

const INGRESS_V1BETA1_API: Crd = Crd {
    group: "extensions",
    version: "v1beta1",
    names: CrdNames {
        kind: "Ingress",
        plural: "ingresses",
        singular: "ingress",
    },
};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IngressSpec {
    pub ingress_class_name: Option<String>,
    pub backend: Option<IngressBackend>,
    pub tls: Vec<IngressTls>,
    pub rules: Vec<IngressRule>,
}

impl Spec for IngressSpec {
    type Status = IngressStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &INGRESS_V1BETA1_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IngressRule {
    pub host: String,
    pub http: Option<HttpIngressRuleValue>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpIngressRuleValue {
    pub paths: Vec<HttpIngressPath>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpIngressPath {
    pub path: String,
    pub path_type: Option<String>,
    pub backend: IngressBackend,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IngressBackend {
    pub service_name: String,
    pub service_port: Int32OrString,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IngressStatus {
    pub load_balancer: LoadBalancerStatus,
}

impl Status for IngressStatus {}

#[cfg(test)]
mod test {

    use serde_json::json;

    use crate::Int32OrString;
    use crate::K8Obj;

    use super::IngressSpec;

    #[test]
    fn test_ingress_v1beta1_decode() {
        let ingress: K8Obj<IngressSpec> = serde_json::from_value(json!({
            "apiVersion": "extensions/v1beta1",
            "kind": "Ingress",
            "metadata": { "name": "web" },
            "spec": {
                "rules": [ {
                    "host": "web.example.com",
                    "http": { "paths": [ {
                        "path": "/api",
                        "backend": { "serviceName": "web", "servicePort": 80 }
                    } ] }
                } ]
            }
        }))
        .expect("ingress");

        let rule = &ingress.spec.rules[0];
        assert_eq!(rule.host, "web.example.com");
        let path = &rule.http.as_ref().expect("http").paths[0];
        assert_eq!(path.backend.service_port, Int32OrString::Int(80));
        assert!(path.path_type.is_none());
    }
}
