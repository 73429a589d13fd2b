use serde::Deserialize;
use serde::Serialize;

use crate::core::pod::PodSpec;
use crate::{Crd, CrdNames, DefaultHeader, LabelSelector, Spec, Status, TemplateSpec};

use super::WorkloadCondition;

const REPLICA_SET_API: Crd = Crd {
    group: "apps",
    version: "v1",
    names: CrdNames {
        kind: "ReplicaSet",
        plural: "replicasets",
        singular: "replicaset",
    },
};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplicaSetSpec {
    pub min_ready_seconds: Option<i32>,
    pub replicas: Option<i32>,
    pub selector: LabelSelector,
    pub template: Option<TemplateSpec<PodSpec>>,
}

impl Spec for ReplicaSetSpec {
    type Status = ReplicaSetStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &REPLICA_SET_API
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplicaSetStatus {
    pub available_replicas: i32,
    pub conditions: Vec<WorkloadCondition>,
    pub fully_labeled_replicas: i32,
    pub observed_generation: i64,
    pub ready_replicas: i32,
    pub replicas: i32,
}

impl Status for ReplicaSetStatus {}
