use serde::Serialize;

use crate::certificate::Certificate;
use crate::config_map::ConfigMap;
use crate::deployment::Deployment;
use crate::namespace::Namespace;
use crate::pod::Pod;
use crate::replica_set::ReplicaSet;
use crate::route::Route;
use crate::secret::Secret;
use crate::service::Service;
use crate::service_account::ServiceAccount;
use crate::Metadata;

/// Canonical entity, the kind tag is fixed per adapter
pub trait Entity {
    const KIND: &'static str;

    fn metadata(&self) -> &Metadata;

    fn name(&self) -> &str {
        &self.metadata().name
    }
}

/// implement `Entity` and `Named` for canonical struct with `metadata` field
macro_rules! impl_entity {
    ($entity:ident, $kind:expr) => {
        impl crate::Entity for $entity {
            const KIND: &'static str = $kind;

            fn metadata(&self) -> &crate::Metadata {
                &self.metadata
            }
        }

        impl crate::Named for $entity {
            fn item_name(&self) -> &str {
                &self.metadata.name
            }
        }
    };
}

/// Any canonical entity, used where callers handle kinds generically
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum AnyEntity {
    Certificate(Certificate),
    ConfigMap(ConfigMap),
    Deployment(Deployment),
    Namespace(Namespace),
    Pod(Pod),
    ReplicaSet(ReplicaSet),
    Route(Route),
    Secret(Secret),
    Service(Service),
    ServiceAccount(ServiceAccount),
}

impl AnyEntity {
    pub fn metadata(&self) -> &Metadata {
        match self {
            Self::Certificate(entity) => entity.metadata(),
            Self::ConfigMap(entity) => entity.metadata(),
            Self::Deployment(entity) => entity.metadata(),
            Self::Namespace(entity) => entity.metadata(),
            Self::Pod(entity) => entity.metadata(),
            Self::ReplicaSet(entity) => entity.metadata(),
            Self::Route(entity) => entity.metadata(),
            Self::Secret(entity) => entity.metadata(),
            Self::Service(entity) => entity.metadata(),
            Self::ServiceAccount(entity) => entity.metadata(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Certificate(_) => Certificate::KIND,
            Self::ConfigMap(_) => ConfigMap::KIND,
            Self::Deployment(_) => Deployment::KIND,
            Self::Namespace(_) => Namespace::KIND,
            Self::Pod(_) => Pod::KIND,
            Self::ReplicaSet(_) => ReplicaSet::KIND,
            Self::Route(_) => Route::KIND,
            Self::Secret(_) => Secret::KIND,
            Self::Service(_) => Service::KIND,
            Self::ServiceAccount(_) => ServiceAccount::KIND,
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata().name
    }
}

macro_rules! any_entity_from {
    ($($entity:ident),*) => {
        $(
            impl From<$entity> for AnyEntity {
                fn from(entity: $entity) -> Self {
                    Self::$entity(entity)
                }
            }
        )*
    };
}

any_entity_from!(
    Certificate,
    ConfigMap,
    Deployment,
    Namespace,
    Pod,
    ReplicaSet,
    Route,
    Secret,
    Service,
    ServiceAccount
);
