//!
//! # Route
//!
//! One canonical shape for three routing dialects: OpenShift `Route`,
//! `networking.k8s.io/v1` `Ingress` and the legacy `extensions/v1beta1` `Ingress`.
//!
//! An ingress can carry many rules and paths, only the first path of the first
//! rule is translated. Ingress without any http path is rejected.
//! OpenShift routes have no notion of path type or ingress class, those are
//! never read from nor written to a route.
//!
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use k8_types::networking::ingress as v1;
use k8_types::networking::ingress_v1beta1 as v1beta1;
use k8_types::openshift::route as openshift;
use k8_types::{DefaultHeader, Int32OrString, K8Obj};

use crate::batch::{translate_batch, BatchResult};
use crate::config::RouteDefaults;
use crate::{Metadata, TranslateError};

pub const ROUTE_KIND: &str = "Route";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Route {
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: RouteSpec,
}

impl_entity!(Route, ROUTE_KIND);

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteSpec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub host: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_type: Option<String>,
    #[serde(default)]
    pub to: RouteTarget,
    #[serde(default)]
    pub port: RoutePort,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingress_class_name: Option<String>,
}

/// service receiving the traffic
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteTarget {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoutePort {
    #[serde(default)]
    pub target_port: Int32OrString,
}

impl RoutePort {
    pub fn new<P: Into<Int32OrString>>(target_port: P) -> Self {
        Self {
            target_port: target_port.into(),
        }
    }
}

impl Route {
    pub fn from_openshift(route: &K8Obj<openshift::RouteSpec>) -> Self {
        Self {
            metadata: Metadata::from_object_meta(ROUTE_KIND, &route.metadata),
            spec: RouteSpec::from_openshift(&route.spec),
        }
    }

    /// OpenShift route decoded without schema, typically from a dynamic client
    pub fn from_unstructured(object: &Value) -> Result<Self, TranslateError> {
        let metadata = match object.get("metadata") {
            Some(meta) => Metadata::from_unstructured(ROUTE_KIND, meta)?,
            None => return Err(TranslateError::MissingField("metadata")),
        };
        let spec: openshift::RouteSpec = match object.get("spec") {
            Some(spec) => serde_json::from_value(spec.clone())?,
            None => openshift::RouteSpec::default(),
        };

        Ok(Self {
            metadata,
            spec: RouteSpec::from_openshift(&spec),
        })
    }

    pub fn to_openshift(&self) -> Result<K8Obj<openshift::RouteSpec>, TranslateError> {
        let port = if self.spec.port.target_port.is_zero() {
            None
        } else {
            Some(openshift::RoutePort {
                target_port: self.spec.port.target_port.clone(),
            })
        };

        let spec = openshift::RouteSpec {
            host: self.spec.host.clone(),
            path: self.spec.path.clone(),
            to: openshift::RouteTargetReference {
                kind: openshift::TARGET_KIND_SERVICE.to_owned(),
                name: self.spec.to.name.clone(),
                weight: None,
            },
            port,
            ..Default::default()
        };

        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            spec,
            DefaultHeader::default(),
            Default::default(),
        ))
    }

    pub fn from_ingress(ingress: &K8Obj<v1::IngressSpec>) -> Result<Self, TranslateError> {
        let rule = ingress
            .spec
            .rules
            .first()
            .ok_or(TranslateError::MissingField("spec.rules"))?;
        let path = rule
            .http
            .as_ref()
            .and_then(|http| http.paths.first())
            .ok_or(TranslateError::MissingField("spec.rules.http.paths"))?;
        let service = path
            .backend
            .service
            .as_ref()
            .ok_or(TranslateError::MissingField("spec.rules.http.paths.backend.service"))?;

        let target_port = if service.port.number != 0 {
            Int32OrString::Int(service.port.number)
        } else if !service.port.name.is_empty() {
            Int32OrString::String(service.port.name.clone())
        } else {
            Int32OrString::default()
        };

        Ok(Self {
            metadata: Metadata::from_object_meta(ROUTE_KIND, &ingress.metadata),
            spec: RouteSpec {
                host: rule.host.clone(),
                path: path.path.clone(),
                path_type: Some(path.path_type.clone()).filter(|path_type| !path_type.is_empty()),
                to: RouteTarget {
                    name: service.name.clone(),
                },
                port: RoutePort { target_port },
                ingress_class_name: ingress.spec.ingress_class_name.clone(),
            },
        })
    }

    pub fn to_ingress(&self) -> Result<K8Obj<v1::IngressSpec>, TranslateError> {
        self.to_ingress_with(&RouteDefaults::default())
    }

    /// empty path and path type are replaced by the configured defaults
    pub fn to_ingress_with(
        &self,
        defaults: &RouteDefaults,
    ) -> Result<K8Obj<v1::IngressSpec>, TranslateError> {
        let path = if self.spec.path.is_empty() {
            defaults.path.clone()
        } else {
            self.spec.path.clone()
        };
        let path_type = match self.spec.path_type.as_deref() {
            None | Some("") => defaults.path_type.clone(),
            Some(path_type) => path_type.to_owned(),
        };
        let port = match &self.spec.port.target_port {
            Int32OrString::Int(number) => v1::ServiceBackendPort {
                number: *number,
                ..Default::default()
            },
            Int32OrString::String(name) => v1::ServiceBackendPort {
                name: name.clone(),
                ..Default::default()
            },
        };

        let spec = v1::IngressSpec {
            ingress_class_name: self.spec.ingress_class_name.clone(),
            rules: vec![v1::IngressRule {
                host: self.spec.host.clone(),
                http: Some(v1::HttpIngressRuleValue {
                    paths: vec![v1::HttpIngressPath {
                        path,
                        path_type,
                        backend: v1::IngressBackend {
                            service: Some(v1::IngressServiceBackend {
                                name: self.spec.to.name.clone(),
                                port,
                            }),
                            resource: None,
                        },
                    }],
                }),
            }],
            ..Default::default()
        };

        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            spec,
            DefaultHeader::default(),
            Default::default(),
        ))
    }

    pub fn from_ingress_v1beta1(
        ingress: &K8Obj<v1beta1::IngressSpec>,
    ) -> Result<Self, TranslateError> {
        let rule = ingress
            .spec
            .rules
            .first()
            .ok_or(TranslateError::MissingField("spec.rules"))?;
        let path = rule
            .http
            .as_ref()
            .and_then(|http| http.paths.first())
            .ok_or(TranslateError::MissingField("spec.rules.http.paths"))?;

        Ok(Self {
            metadata: Metadata::from_object_meta(ROUTE_KIND, &ingress.metadata),
            spec: RouteSpec {
                host: rule.host.clone(),
                path: path.path.clone(),
                path_type: path.path_type.clone(),
                to: RouteTarget {
                    name: path.backend.service_name.clone(),
                },
                port: RoutePort {
                    target_port: path.backend.service_port.clone(),
                },
                ingress_class_name: ingress.spec.ingress_class_name.clone(),
            },
        })
    }

    pub fn to_ingress_v1beta1(&self) -> Result<K8Obj<v1beta1::IngressSpec>, TranslateError> {
        self.to_ingress_v1beta1_with(&RouteDefaults::default())
    }

    /// missing target port is replaced by the configured ingress port
    pub fn to_ingress_v1beta1_with(
        &self,
        defaults: &RouteDefaults,
    ) -> Result<K8Obj<v1beta1::IngressSpec>, TranslateError> {
        let service_port = if self.spec.port.target_port.is_zero() {
            Int32OrString::Int(defaults.ingress_port)
        } else {
            self.spec.port.target_port.clone()
        };

        let spec = v1beta1::IngressSpec {
            ingress_class_name: self.spec.ingress_class_name.clone(),
            rules: vec![v1beta1::IngressRule {
                host: self.spec.host.clone(),
                http: Some(v1beta1::HttpIngressRuleValue {
                    paths: vec![v1beta1::HttpIngressPath {
                        path: self.spec.path.clone(),
                        path_type: self.spec.path_type.clone(),
                        backend: v1beta1::IngressBackend {
                            service_name: self.spec.to.name.clone(),
                            service_port,
                        },
                    }],
                }),
            }],
            ..Default::default()
        };

        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            spec,
            DefaultHeader::default(),
            Default::default(),
        ))
    }

    pub fn collect_openshift(routes: &[K8Obj<openshift::RouteSpec>]) -> Vec<Self> {
        routes.iter().map(Self::from_openshift).collect()
    }

    pub fn collect_unstructured(routes: &[Value]) -> BatchResult<Self> {
        translate_batch(routes, Self::from_unstructured)
    }

    pub fn collect_ingresses(ingresses: &[K8Obj<v1::IngressSpec>]) -> BatchResult<Self> {
        translate_batch(ingresses, Self::from_ingress)
    }

    pub fn collect_ingresses_v1beta1(
        ingresses: &[K8Obj<v1beta1::IngressSpec>],
    ) -> BatchResult<Self> {
        translate_batch(ingresses, Self::from_ingress_v1beta1)
    }
}

impl RouteSpec {
    fn from_openshift(spec: &openshift::RouteSpec) -> Self {
        Self {
            host: spec.host.clone(),
            path: spec.path.clone(),
            path_type: None,
            to: RouteTarget {
                name: spec.to.name.clone(),
            },
            port: RoutePort {
                target_port: spec
                    .port
                    .as_ref()
                    .map(|port| port.target_port.clone())
                    .unwrap_or_default(),
            },
            ingress_class_name: None,
        }
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use k8_types::networking::ingress as v1;
    use k8_types::networking::ingress_v1beta1 as v1beta1;
    use k8_types::openshift::route as openshift;
    use k8_types::{Int32OrString, K8Obj};

    use crate::config::RouteDefaults;
    use crate::{Metadata, TranslateError};

    use super::{Route, RoutePort, RouteSpec, RouteTarget, ROUTE_KIND};

    fn openshift_route() -> K8Obj<openshift::RouteSpec> {
        serde_json::from_value(json!({
            "apiVersion": "route.openshift.io/v1",
            "kind": "Route",
            "metadata": { "name": "web", "namespace": "shop", "uid": "42" },
            "spec": {
                "host": "web.apps.example.com",
                "path": "/shop",
                "to": { "kind": "Service", "name": "web" },
                "port": { "targetPort": 8443 }
            }
        }))
        .expect("route")
    }

    fn ingress_v1beta1() -> K8Obj<v1beta1::IngressSpec> {
        serde_json::from_value(json!({
            "apiVersion": "extensions/v1beta1",
            "kind": "Ingress",
            "metadata": { "name": "web", "namespace": "shop" },
            "spec": {
                "ingressClassName": "nginx",
                "rules": [
                    {
                        "host": "web.example.com",
                        "http": { "paths": [
                            { "path": "/", "backend": { "serviceName": "web", "servicePort": 80 } },
                            { "path": "/admin", "backend": { "serviceName": "admin", "servicePort": 81 } }
                        ] }
                    },
                    {
                        "host": "other.example.com",
                        "http": { "paths": [
                            { "path": "/", "backend": { "serviceName": "other", "servicePort": 82 } }
                        ] }
                    }
                ]
            }
        }))
        .expect("ingress")
    }

    fn canonical() -> Route {
        Route {
            metadata: Metadata::new(ROUTE_KIND, "web"),
            spec: RouteSpec {
                host: "web.example.com".to_owned(),
                to: RouteTarget {
                    name: "web".to_owned(),
                },
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_from_openshift() {
        let route = Route::from_openshift(&openshift_route());

        assert_eq!(route.metadata.kind, ROUTE_KIND);
        assert_eq!(route.spec.host, "web.apps.example.com");
        assert_eq!(route.spec.path, "/shop");
        assert_eq!(route.spec.to.name, "web");
        assert_eq!(route.spec.port.target_port, Int32OrString::Int(8443));
        assert_eq!(route.spec.path_type, None);
        assert_eq!(route.spec.ingress_class_name, None);
    }

    #[test]
    fn test_openshift_never_gets_ingress_class() {
        let mut route = canonical();
        route.spec.ingress_class_name = Some("nginx".to_owned());
        route.spec.path_type = Some("Exact".to_owned());

        let native = route.to_openshift().expect("route");
        let value = serde_json::to_value(&native).expect("json");
        assert!(value["spec"].get("ingressClassName").is_none());
        assert!(value["spec"].get("pathType").is_none());

        let back = Route::from_openshift(&native);
        assert_eq!(back.spec.ingress_class_name, None);
        assert_eq!(back.spec.path_type, None);
    }

    #[test]
    fn test_openshift_round_trip() {
        let native = openshift_route();
        let back = Route::from_openshift(&native)
            .to_openshift()
            .expect("route");
        assert_eq!(back, native);
    }

    #[test]
    fn test_openshift_without_port() {
        let route = canonical();
        let native = route.to_openshift().expect("route");
        assert!(native.spec.port.is_none());
        assert_eq!(native.spec.to.kind, "Service");
        assert_eq!(Route::from_openshift(&native), route);
    }

    #[test]
    fn test_from_unstructured() {
        let route = Route::from_unstructured(&json!({
            "metadata": { "name": "web", "namespace": "shop", "labels": { "tier": 1 } },
            "spec": { "host": "web.apps.example.com", "to": { "kind": "Service", "name": "web" } }
        }))
        .expect("route");

        assert_eq!(route.metadata.name, "web");
        assert_eq!(route.metadata.labels.get("tier").map(String::as_str), Some("1"));
        assert_eq!(route.spec.host, "web.apps.example.com");
        assert_eq!(route.spec.port, RoutePort::default());
    }

    #[test]
    fn test_unstructured_without_name() {
        let error = Route::from_unstructured(&json!({ "metadata": {}, "spec": {} }))
            .expect_err("name required");
        assert!(matches!(error, TranslateError::MissingField("metadata.name")));

        let error = Route::from_unstructured(&json!({
            "metadata": { "name": "web" },
            "spec": { "host": 5 }
        }))
        .expect_err("malformed spec");
        assert!(matches!(error, TranslateError::Malformed(_)));
    }

    #[test]
    fn test_from_ingress_v1beta1_takes_first_path() {
        let route = Route::from_ingress_v1beta1(&ingress_v1beta1()).expect("route");

        assert_eq!(route.spec.host, "web.example.com");
        assert_eq!(route.spec.path, "/");
        assert_eq!(route.spec.to.name, "web");
        assert_eq!(route.spec.port.target_port, Int32OrString::Int(80));
        assert_eq!(route.spec.ingress_class_name.as_deref(), Some("nginx"));
    }

    #[test]
    fn test_ingress_v1beta1_without_paths_is_rejected() {
        let mut ingress = ingress_v1beta1();
        ingress.spec.rules[0].http = None;
        assert!(matches!(
            Route::from_ingress_v1beta1(&ingress),
            Err(TranslateError::MissingField("spec.rules.http.paths"))
        ));

        ingress.spec.rules.clear();
        assert!(matches!(
            Route::from_ingress_v1beta1(&ingress),
            Err(TranslateError::MissingField("spec.rules"))
        ));
    }

    #[test]
    fn test_to_ingress_v1beta1_default_port() {
        let native = canonical().to_ingress_v1beta1().expect("ingress");
        let path = &native.spec.rules[0].http.as_ref().expect("http").paths[0];
        assert_eq!(path.backend.service_port, Int32OrString::Int(8080));
        assert_eq!(path.backend.service_name, "web");

        let defaults = RouteDefaults {
            ingress_port: 9000,
            ..Default::default()
        };
        let native = canonical().to_ingress_v1beta1_with(&defaults).expect("ingress");
        let path = &native.spec.rules[0].http.as_ref().expect("http").paths[0];
        assert_eq!(path.backend.service_port, Int32OrString::Int(9000));
    }

    #[test]
    fn test_to_ingress_defaults() {
        let native = canonical().to_ingress().expect("ingress");
        let path = &native.spec.rules[0].http.as_ref().expect("http").paths[0];
        assert_eq!(path.path, "/");
        assert_eq!(path.path_type, "Prefix");
        let service = path.backend.service.as_ref().expect("service");
        assert_eq!(service.name, "web");
        assert_eq!(native.api_version, "networking.k8s.io/v1");
    }

    #[test]
    fn test_reverse_defaulting_is_idempotent() {
        let route = canonical();
        assert_eq!(
            route.to_ingress().expect("first"),
            route.to_ingress().expect("second")
        );
        assert_eq!(
            route.to_ingress_v1beta1().expect("first"),
            route.to_ingress_v1beta1().expect("second")
        );

        // defaults injected once stay stable through another round
        let once = Route::from_ingress(&route.to_ingress().expect("ingress")).expect("route");
        let twice = Route::from_ingress(&once.to_ingress().expect("ingress")).expect("route");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_ingress_round_trip() {
        let native: K8Obj<v1::IngressSpec> = serde_json::from_value(json!({
            "apiVersion": "networking.k8s.io/v1",
            "kind": "Ingress",
            "metadata": { "name": "web", "namespace": "shop" },
            "spec": {
                "ingressClassName": "nginx",
                "rules": [ {
                    "host": "web.example.com",
                    "http": { "paths": [ {
                        "path": "/api",
                        "pathType": "Exact",
                        "backend": { "service": { "name": "web", "port": { "name": "http" } } }
                    } ] }
                } ]
            }
        }))
        .expect("ingress");

        let route = Route::from_ingress(&native).expect("route");
        assert_eq!(route.spec.port.target_port, Int32OrString::String("http".to_owned()));
        assert_eq!(route.spec.path_type.as_deref(), Some("Exact"));
        assert_eq!(route.to_ingress().expect("ingress"), native);
    }

    #[test]
    fn test_ingress_resource_backend_rejected() {
        let native: K8Obj<v1::IngressSpec> = serde_json::from_value(json!({
            "metadata": { "name": "bucket" },
            "spec": { "rules": [ { "http": { "paths": [ {
                "path": "/",
                "pathType": "Prefix",
                "backend": { "resource": { "kind": "StorageBucket", "name": "assets" } }
            } ] } } ] }
        }))
        .expect("ingress");

        assert!(Route::from_ingress(&native).is_err());
    }

    #[test]
    fn test_canonical_wire_shape() {
        let mut route = canonical();
        route.spec.port = RoutePort::new(8080);
        route.spec.ingress_class_name = Some("nginx".to_owned());

        assert_eq!(
            serde_json::to_value(&route).expect("json"),
            json!({
                "metadata": { "kind": "Route", "name": "web" },
                "spec": {
                    "host": "web.example.com",
                    "to": { "name": "web" },
                    "port": { "targetPort": 8080 },
                    "ingressClassName": "nginx"
                }
            })
        );
    }

    #[test]
    fn test_collect_ingresses_v1beta1() {
        let mut broken = ingress_v1beta1();
        broken.metadata.name = "broken".to_owned();
        broken.spec.rules.clear();

        let result = Route::collect_ingresses_v1beta1(&[ingress_v1beta1(), broken]);
        assert_eq!(result.items.len(), 1);
        assert!(result.rejected.contains("broken"));
    }
}
