pub mod deployment;
pub mod replica_set;

use serde::Deserialize;
use serde::Serialize;

use crate::Time;

/// condition shape shared by the workload controllers
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkloadCondition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    pub last_update_time: Time,
    pub last_transition_time: Time,
    pub reason: String,
    pub message: String,
}
