use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::Crd;
use crate::CrdNames;
use crate::DefaultHeader;
use crate::Env;
use crate::Spec;
use crate::Status;
use crate::Time;

const POD_API: Crd = Crd {
    group: "core",
    version: "v1",
    names: CrdNames {
        kind: "Pod",
        plural: "pods",
        singular: "pod",
    },
};

/// condition type signalling pod can serve traffic
pub const POD_READY: &str = "Ready";

impl Spec for PodSpec {
    type Status = PodStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &POD_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PodSpec {
    pub containers: Vec<ContainerSpec>,
    pub restart_policy: Option<PodRestartPolicy>,
    pub service_account_name: Option<String>,
    pub node_name: Option<String>,
    pub node_selector: Option<HashMap<String, String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum PodRestartPolicy {
    Always,
    Never,
    OnFailure,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerSpec {
    pub name: String,
    pub args: Vec<String>,
    pub command: Vec<String>,
    pub ports: Vec<ContainerPortSpec>,
    pub image: Option<String>,
    pub image_pull_policy: Option<ImagePullPolicy>,
    pub env: Vec<Env>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub enum ImagePullPolicy {
    Always,
    Never,
    IfNotPresent,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPortSpec {
    pub container_port: u16,
    pub name: Option<String>,
    pub protocol: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PodStatus {
    pub phase: String,
    #[serde(rename = "hostIP")]
    pub host_ip: String,
    #[serde(rename = "podIP")]
    pub pod_ip: Option<String>,
    pub start_time: Time,
    pub conditions: Vec<PodCondition>,
    pub container_statuses: Vec<ContainerStatus>,
}

impl Status for PodStatus {}

impl PodStatus {
    /// true if `Ready` condition is reported as `True`
    pub fn is_ready(&self) -> bool {
        self.conditions
            .iter()
            .any(|condition| condition.type_ == POD_READY && condition.status == "True")
    }
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PodCondition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    pub last_probe_time: Time,
    pub last_transition_time: Time,
    pub reason: String,
    pub message: String,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStatus {
    pub name: String,
    pub state: ContainerState,
    pub ready: bool,
    pub restart_count: i32,
    pub image: String,
    #[serde(rename = "imageID")]
    pub image_id: String,
    #[serde(rename = "containerID")]
    pub container_id: Option<String>,
}

/// only one of the member should be set
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerState {
    pub running: Option<ContainerStateRunning>,
    pub terminated: Option<ContainerStateTerminated>,
    pub waiting: Option<ContainerStateWaiting>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStateRunning {
    pub started_at: Time,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStateTerminated {
    pub exit_code: i32,
    pub signal: Option<i32>,
    pub reason: String,
    pub message: String,
    pub started_at: Time,
    pub finished_at: Time,
    #[serde(rename = "containerID")]
    pub container_id: Option<String>,
}

#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerStateWaiting {
    pub reason: String,
    pub message: String,
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use crate::K8Obj;

    use super::PodSpec;

    #[test]
    fn test_pod_status_decode() {
        let pod: K8Obj<PodSpec> = serde_json::from_value(json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": { "name": "web-1", "namespace": "default" },
            "spec": { "containers": [ { "name": "web", "image": "nginx" } ] },
            "status": {
                "phase": "Running",
                "conditions": [ { "type": "Ready", "status": "True" } ],
                "containerStatuses": [ {
                    "name": "web",
                    "ready": true,
                    "restartCount": 0,
                    "image": "nginx",
                    "imageID": "docker://nginx",
                    "state": { "running": { "startedAt": "2021-01-01T00:00:00Z" } }
                } ]
            }
        }))
        .expect("pod");

        assert!(pod.status.is_ready());
        let state = &pod.status.container_statuses[0].state;
        assert!(state.running.is_some());
        assert!(state.terminated.is_none());
        assert!(state.waiting.is_none());
    }
}
