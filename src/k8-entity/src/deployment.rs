//!
//! # Deployment
//!
//! apps/v1 `Deployment` and OpenShift `DeploymentConfig` share one canonical shape.
//! Replicas stay optional in the canonical form, a `DeploymentConfig` always has them.
//!
use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use k8_types::app::deployment as apps;
use k8_types::openshift::deployment_config as openshift;
use k8_types::{DefaultHeader, Int32OrString, K8Obj, LabelSelector};

use crate::batch::{translate_batch, BatchResult};
use crate::condition::{map_conditions, unmap_conditions, Condition};
use crate::pod::PodTemplate;
use crate::{Metadata, TranslateError};

pub const DEPLOYMENT_KIND: &str = "Deployment";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: DeploymentSpec,
    #[serde(default)]
    pub status: DeploymentStatus,
}

impl_entity!(Deployment, DEPLOYMENT_KIND);

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub selector: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<DeploymentStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_ready_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PodTemplate>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentStrategy {
    /// absent when the native strategy names no type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<StrategyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_surge: Option<Int32OrString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<Int32OrString>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    Rolling,
    Recreate,
    Custom,
}

impl StrategyType {
    /// apps/v1 has no custom strategy
    fn from_apps(name: &str) -> Result<Self, TranslateError> {
        match name {
            apps::STRATEGY_ROLLING_UPDATE => Ok(Self::Rolling),
            apps::STRATEGY_RECREATE => Ok(Self::Recreate),
            other => Err(TranslateError::unsupported("spec.strategy.type", other)),
        }
    }

    fn to_apps(self) -> Result<&'static str, TranslateError> {
        match self {
            Self::Rolling => Ok(apps::STRATEGY_ROLLING_UPDATE),
            Self::Recreate => Ok(apps::STRATEGY_RECREATE),
            Self::Custom => Err(TranslateError::unsupported(
                "spec.strategy.type",
                openshift::STRATEGY_CUSTOM,
            )),
        }
    }

    fn from_openshift(name: &str) -> Result<Self, TranslateError> {
        match name {
            openshift::STRATEGY_ROLLING => Ok(Self::Rolling),
            openshift::STRATEGY_RECREATE => Ok(Self::Recreate),
            openshift::STRATEGY_CUSTOM => Ok(Self::Custom),
            other => Err(TranslateError::unsupported("spec.strategy.type", other)),
        }
    }

    fn to_openshift(self) -> &'static str {
        match self {
            Self::Rolling => openshift::STRATEGY_ROLLING,
            Self::Recreate => openshift::STRATEGY_RECREATE,
            Self::Custom => openshift::STRATEGY_CUSTOM,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentStatus {
    #[serde(skip_serializing_if = "is_zero")]
    pub observed_generation: i64,
    pub replicas: i32,
    pub updated_replicas: i32,
    pub ready_replicas: i32,
    pub available_replicas: i32,
    pub unavailable_replicas: i32,
    /// only reported by `DeploymentConfig`
    #[serde(skip_serializing_if = "is_zero")]
    pub latest_version: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl Deployment {
    pub fn from_deployment(deployment: &K8Obj<apps::DeploymentSpec>) -> Result<Self, TranslateError> {
        let spec = &deployment.spec;
        let strategy = match &spec.strategy {
            Some(strategy) => Some(DeploymentStrategy {
                type_: strategy
                    .type_
                    .as_deref()
                    .map(StrategyType::from_apps)
                    .transpose()?,
                max_surge: strategy
                    .rolling_update
                    .as_ref()
                    .and_then(|rolling| rolling.max_surge.clone()),
                max_unavailable: strategy
                    .rolling_update
                    .as_ref()
                    .and_then(|rolling| rolling.max_unavailable.clone()),
            }),
            None => None,
        };
        let template = Some(&spec.template)
            .filter(|template| **template != Default::default())
            .map(PodTemplate::from_native);

        let status = &deployment.status;
        Ok(Self {
            metadata: Metadata::from_object_meta(DEPLOYMENT_KIND, &deployment.metadata),
            spec: DeploymentSpec {
                replicas: spec.replicas,
                selector: spec.selector.match_labels.clone().into_iter().collect(),
                strategy,
                min_ready_seconds: spec.min_ready_seconds,
                paused: spec.paused,
                template,
            },
            status: DeploymentStatus {
                observed_generation: status.observed_generation,
                replicas: status.replicas,
                updated_replicas: status.updated_replicas,
                ready_replicas: status.ready_replicas,
                available_replicas: status.available_replicas,
                unavailable_replicas: status.unavailable_replicas,
                latest_version: 0,
                conditions: map_conditions(&status.conditions),
            },
        })
    }

    pub fn to_deployment(&self) -> Result<K8Obj<apps::DeploymentSpec>, TranslateError> {
        let strategy = match &self.spec.strategy {
            Some(strategy) => {
                let rolling_update =
                    if strategy.max_surge.is_none() && strategy.max_unavailable.is_none() {
                        None
                    } else {
                        Some(apps::RollingUpdateDeployment {
                            max_surge: strategy.max_surge.clone(),
                            max_unavailable: strategy.max_unavailable.clone(),
                        })
                    };
                Some(apps::DeploymentStrategy {
                    rolling_update,
                    type_: strategy
                        .type_
                        .map(|type_| type_.to_apps().map(str::to_owned))
                        .transpose()?,
                })
            }
            None => None,
        };
        let template = match &self.spec.template {
            Some(template) => template.to_native()?,
            None => Default::default(),
        };

        let spec = apps::DeploymentSpec {
            min_ready_seconds: self.spec.min_ready_seconds,
            paused: self.spec.paused,
            replicas: self.spec.replicas,
            selector: LabelSelector {
                match_labels: self.spec.selector.clone().into_iter().collect(),
            },
            strategy,
            template,
        };

        let status = apps::DeploymentStatus {
            available_replicas: self.status.available_replicas,
            conditions: unmap_conditions(&self.status.conditions)?,
            observed_generation: self.status.observed_generation,
            ready_replicas: self.status.ready_replicas,
            replicas: self.status.replicas,
            unavailable_replicas: self.status.unavailable_replicas,
            updated_replicas: self.status.updated_replicas,
        };

        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            spec,
            DefaultHeader::default(),
            status,
        ))
    }

    /// Zero `minReadySeconds` and unset `paused` are not reported.
    /// A strategy without type and parameters counts as no strategy.
    pub fn from_deployment_config(
        config: &K8Obj<openshift::DeploymentConfigSpec>,
    ) -> Result<Self, TranslateError> {
        let spec = &config.spec;
        let native_strategy = &spec.strategy;
        let strategy = if native_strategy.type_.is_empty() && native_strategy.rolling_params.is_none()
        {
            None
        } else {
            let type_ = if native_strategy.type_.is_empty() {
                None
            } else {
                Some(StrategyType::from_openshift(&native_strategy.type_)?)
            };
            Some(DeploymentStrategy {
                type_,
                max_surge: native_strategy
                    .rolling_params
                    .as_ref()
                    .and_then(|params| params.max_surge.clone()),
                max_unavailable: native_strategy
                    .rolling_params
                    .as_ref()
                    .and_then(|params| params.max_unavailable.clone()),
            })
        };

        let status = &config.status;
        Ok(Self {
            metadata: Metadata::from_object_meta(DEPLOYMENT_KIND, &config.metadata),
            spec: DeploymentSpec {
                replicas: Some(spec.replicas),
                selector: spec.selector.clone().into_iter().collect(),
                strategy,
                min_ready_seconds: Some(spec.min_ready_seconds).filter(|seconds| *seconds != 0),
                paused: Some(spec.paused).filter(|paused| *paused),
                template: spec.template.as_ref().map(PodTemplate::from_native),
            },
            status: DeploymentStatus {
                observed_generation: status.observed_generation,
                replicas: status.replicas,
                updated_replicas: status.updated_replicas,
                ready_replicas: status.ready_replicas,
                available_replicas: status.available_replicas,
                unavailable_replicas: status.unavailable_replicas,
                latest_version: status.latest_version,
                conditions: map_conditions(&status.conditions),
            },
        })
    }

    pub fn to_deployment_config(
        &self,
    ) -> Result<K8Obj<openshift::DeploymentConfigSpec>, TranslateError> {
        let replicas = self
            .spec
            .replicas
            .ok_or(TranslateError::MissingField("spec.replicas"))?;

        let strategy = match &self.spec.strategy {
            Some(strategy) => {
                let rolling_params =
                    if strategy.max_surge.is_none() && strategy.max_unavailable.is_none() {
                        None
                    } else {
                        Some(openshift::RollingDeploymentStrategyParams {
                            max_surge: strategy.max_surge.clone(),
                            max_unavailable: strategy.max_unavailable.clone(),
                            ..Default::default()
                        })
                    };
                openshift::DeploymentStrategy {
                    type_: strategy
                        .type_
                        .map(|type_| type_.to_openshift().to_owned())
                        .unwrap_or_default(),
                    rolling_params,
                    active_deadline_seconds: None,
                }
            }
            None => openshift::DeploymentStrategy::default(),
        };
        let template = match &self.spec.template {
            Some(template) => Some(template.to_native()?),
            None => None,
        };

        let spec = openshift::DeploymentConfigSpec {
            strategy,
            min_ready_seconds: self.spec.min_ready_seconds.unwrap_or_default(),
            replicas,
            paused: self.spec.paused.unwrap_or_default(),
            selector: self.spec.selector.clone().into_iter().collect(),
            template,
            ..Default::default()
        };

        let status = openshift::DeploymentConfigStatus {
            latest_version: self.status.latest_version,
            observed_generation: self.status.observed_generation,
            replicas: self.status.replicas,
            updated_replicas: self.status.updated_replicas,
            available_replicas: self.status.available_replicas,
            unavailable_replicas: self.status.unavailable_replicas,
            ready_replicas: self.status.ready_replicas,
            conditions: unmap_conditions(&self.status.conditions)?,
        };

        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            spec,
            DefaultHeader::default(),
            status,
        ))
    }

    pub fn collect_deployments(deployments: &[K8Obj<apps::DeploymentSpec>]) -> BatchResult<Self> {
        translate_batch(deployments, Self::from_deployment)
    }

    pub fn collect_deployment_configs(
        configs: &[K8Obj<openshift::DeploymentConfigSpec>],
    ) -> BatchResult<Self> {
        translate_batch(configs, Self::from_deployment_config)
    }
}
