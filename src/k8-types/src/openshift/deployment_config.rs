use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::app::WorkloadCondition;
use crate::core::pod::PodSpec;
use crate::{Crd, CrdNames, DefaultHeader, Int32OrString, Spec, Status, TemplateSpec};

const DEPLOYMENT_CONFIG_API: Crd = Crd {
    group: "apps.openshift.io",
    version: "v1",
    names: CrdNames {
        kind: "DeploymentConfig",
        plural: "deploymentconfigs",
        singular: "deploymentconfig",
    },
};

pub const STRATEGY_ROLLING: &str = "Rolling";
pub const STRATEGY_RECREATE: &str = "Recreate";
pub const STRATEGY_CUSTOM: &str = "Custom";

/// unlike apps/v1 deployment, replicas is always present
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentConfigSpec {
    pub strategy: DeploymentStrategy,
    pub min_ready_seconds: i32,
    pub triggers: Vec<DeploymentTriggerPolicy>,
    pub replicas: i32,
    pub revision_history_limit: Option<i32>,
    pub test: bool,
    pub paused: bool,
    pub selector: HashMap<String, String>,
    pub template: Option<TemplateSpec<PodSpec>>,
}

impl Spec for DeploymentConfigSpec {
    type Status = DeploymentConfigStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &DEPLOYMENT_CONFIG_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentStrategy {
    #[serde(rename = "type")]
    pub type_: String,
    pub rolling_params: Option<RollingDeploymentStrategyParams>,
    pub active_deadline_seconds: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RollingDeploymentStrategyParams {
    pub update_period_seconds: Option<i64>,
    pub interval_seconds: Option<i64>,
    pub timeout_seconds: Option<i64>,
    pub max_unavailable: Option<Int32OrString>,
    pub max_surge: Option<Int32OrString>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentTriggerPolicy {
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentConfigStatus {
    pub latest_version: i64,
    pub observed_generation: i64,
    pub replicas: i32,
    pub updated_replicas: i32,
    pub available_replicas: i32,
    pub unavailable_replicas: i32,
    pub ready_replicas: i32,
    pub conditions: Vec<WorkloadCondition>,
}

impl Status for DeploymentConfigStatus {}
