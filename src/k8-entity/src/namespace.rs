use serde::Deserialize;
use serde::Serialize;

use k8_types::core::namespace as core;
use k8_types::openshift::project as openshift;
use k8_types::{DefaultHeader, K8Obj, ObjectMeta};

use crate::{Metadata, TranslateError};

pub const NAMESPACE_KIND: &str = "Namespace";

/// tenant boundary, either a plain namespace or an OpenShift project
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: NamespaceSpec,
    #[serde(default)]
    pub status: NamespaceStatus,
}

impl_entity!(Namespace, NAMESPACE_KIND);

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceSpec {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub finalizers: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceStatus {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phase: String,
}

/// cluster scoped object is its own namespace
fn own_metadata(meta: &ObjectMeta) -> Metadata {
    let mut metadata = Metadata::from_object_meta(NAMESPACE_KIND, meta);
    metadata.namespace = metadata.name.clone();
    metadata
}

fn cluster_scoped(metadata: &Metadata) -> ObjectMeta {
    let mut meta = metadata.to_object_meta();
    meta.namespace.clear();
    meta
}

impl Namespace {
    pub fn from_namespace(namespace: &K8Obj<core::NamespaceSpec>) -> Self {
        Self {
            metadata: own_metadata(&namespace.metadata),
            spec: NamespaceSpec {
                finalizers: namespace.spec.finalizers.clone(),
            },
            status: NamespaceStatus {
                phase: namespace.status.phase.clone(),
            },
        }
    }

    pub fn to_namespace(&self) -> Result<K8Obj<core::NamespaceSpec>, TranslateError> {
        Ok(K8Obj::from_parts(
            cluster_scoped(&self.metadata),
            core::NamespaceSpec {
                finalizers: self.spec.finalizers.clone(),
            },
            DefaultHeader::default(),
            core::NamespaceStatus {
                phase: self.status.phase.clone(),
            },
        ))
    }

    pub fn from_project(project: &K8Obj<openshift::ProjectSpec>) -> Self {
        Self {
            metadata: own_metadata(&project.metadata),
            spec: NamespaceSpec {
                finalizers: project.spec.finalizers.clone(),
            },
            status: NamespaceStatus {
                phase: project.status.phase.clone(),
            },
        }
    }

    pub fn to_project(&self) -> Result<K8Obj<openshift::ProjectSpec>, TranslateError> {
        Ok(K8Obj::from_parts(
            cluster_scoped(&self.metadata),
            openshift::ProjectSpec {
                finalizers: self.spec.finalizers.clone(),
            },
            DefaultHeader::default(),
            openshift::ProjectStatus {
                phase: self.status.phase.clone(),
            },
        ))
    }

    pub fn from_namespaces(namespaces: &[K8Obj<core::NamespaceSpec>]) -> Vec<Self> {
        namespaces.iter().map(Self::from_namespace).collect()
    }

    pub fn from_projects(projects: &[K8Obj<openshift::ProjectSpec>]) -> Vec<Self> {
        projects.iter().map(Self::from_project).collect()
    }
}
