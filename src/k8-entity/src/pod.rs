use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

use k8_types::core::pod as native;
use k8_types::{DefaultHeader, Env, EnvVarSource, K8Obj, ObjectFieldSelector, TemplateMeta, TemplateSpec};

use crate::batch::{translate_batch, BatchResult};
use crate::condition::{map_conditions, unmap_conditions, Condition};
use crate::time::{format_time, parse_time};
use crate::{Metadata, TranslateError};

pub const POD_KIND: &str = "Pod";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Pod {
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: PodSpec,
    #[serde(default)]
    pub status: PodStatus,
}

impl_entity!(Pod, POD_KIND);

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restart_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ContainerPort>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
    pub container_port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

/// environment variable, either literal or taken from a field of the pod
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_path: Option<String>,
}

/// pod template embedded in workload controllers
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PodTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default)]
    pub spec: PodSpec,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PodStatus {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,
    #[serde(rename = "hostIP", default, skip_serializing_if = "String::is_empty")]
    pub host_ip: String,
    #[serde(rename = "podIP", default, skip_serializing_if = "Option::is_none")]
    pub pod_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub container_statuses: Vec<ContainerStatus>,
}

impl PodStatus {
    pub fn is_ready(&self) -> bool {
        self.conditions
            .iter()
            .any(|condition| condition.type_ == native::POD_READY && condition.is_true())
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStatus {
    pub name: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_state",
        deserialize_with = "deserialize_state"
    )]
    pub state: Option<ContainerState>,
    #[serde(default)]
    pub ready: bool,
    #[serde(default)]
    pub restart_count: i32,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "imageID", default)]
    pub image_id: String,
    #[serde(rename = "containerID", default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
}

/// Lifecycle state of a container, exactly one at a time.
/// On the wire it is an object with `running`, `terminated` and `waiting` keys
/// where at most one is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerState {
    Running(RunningState),
    Terminated(TerminatedState),
    Waiting(WaitingState),
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RunningState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TerminatedState {
    #[serde(default)]
    pub exit_code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<String>,
    #[serde(rename = "containerID", default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WaitingState {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

#[derive(Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct ContainerStateWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    running: Option<RunningState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    terminated: Option<TerminatedState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    waiting: Option<WaitingState>,
}

impl ContainerStateWire {
    fn members(&self) -> usize {
        [
            self.running.is_some(),
            self.terminated.is_some(),
            self.waiting.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    fn into_state(self) -> Option<ContainerState> {
        if let Some(running) = self.running {
            Some(ContainerState::Running(running))
        } else if let Some(terminated) = self.terminated {
            Some(ContainerState::Terminated(terminated))
        } else {
            self.waiting.map(ContainerState::Waiting)
        }
    }
}

impl From<&ContainerState> for ContainerStateWire {
    fn from(state: &ContainerState) -> Self {
        match state {
            ContainerState::Running(running) => Self {
                running: Some(running.clone()),
                ..Default::default()
            },
            ContainerState::Terminated(terminated) => Self {
                terminated: Some(terminated.clone()),
                ..Default::default()
            },
            ContainerState::Waiting(waiting) => Self {
                waiting: Some(waiting.clone()),
                ..Default::default()
            },
        }
    }
}

fn serialize_state<S>(state: &Option<ContainerState>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match state {
        Some(state) => ContainerStateWire::from(state).serialize(serializer),
        None => serializer.serialize_none(),
    }
}

fn deserialize_state<'de, D>(deserializer: D) -> Result<Option<ContainerState>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<ContainerStateWire>::deserialize(deserializer)? {
        Some(wire) if wire.members() > 1 => {
            Err(D::Error::custom("more than one container state is set"))
        }
        Some(wire) => Ok(wire.into_state()),
        None => Ok(None),
    }
}

impl ContainerState {
    fn from_native(
        container: &str,
        state: &native::ContainerState,
    ) -> Result<Option<Self>, TranslateError> {
        let members = [
            state.running.is_some(),
            state.terminated.is_some(),
            state.waiting.is_some(),
        ];
        if members.iter().filter(|set| **set).count() > 1 {
            return Err(TranslateError::AmbiguousContainerState(container.to_owned()));
        }

        if let Some(running) = &state.running {
            Ok(Some(Self::Running(RunningState {
                started_at: format_time(&running.started_at),
            })))
        } else if let Some(terminated) = &state.terminated {
            Ok(Some(Self::Terminated(TerminatedState {
                exit_code: terminated.exit_code,
                signal: terminated.signal,
                reason: terminated.reason.clone(),
                message: terminated.message.clone(),
                started_at: format_time(&terminated.started_at),
                finished_at: format_time(&terminated.finished_at),
                container_id: terminated.container_id.clone(),
            })))
        } else if let Some(waiting) = &state.waiting {
            Ok(Some(Self::Waiting(WaitingState {
                reason: waiting.reason.clone(),
                message: waiting.message.clone(),
            })))
        } else {
            Ok(None)
        }
    }

    fn to_native(&self) -> Result<native::ContainerState, TranslateError> {
        let state = match self {
            Self::Running(running) => native::ContainerState {
                running: Some(native::ContainerStateRunning {
                    started_at: parse_time(running.started_at.as_deref())?,
                }),
                ..Default::default()
            },
            Self::Terminated(terminated) => native::ContainerState {
                terminated: Some(native::ContainerStateTerminated {
                    exit_code: terminated.exit_code,
                    signal: terminated.signal,
                    reason: terminated.reason.clone(),
                    message: terminated.message.clone(),
                    started_at: parse_time(terminated.started_at.as_deref())?,
                    finished_at: parse_time(terminated.finished_at.as_deref())?,
                    container_id: terminated.container_id.clone(),
                }),
                ..Default::default()
            },
            Self::Waiting(waiting) => native::ContainerState {
                waiting: Some(native::ContainerStateWaiting {
                    reason: waiting.reason.clone(),
                    message: waiting.message.clone(),
                }),
                ..Default::default()
            },
        };
        Ok(state)
    }
}

impl Pod {
    pub fn from_pod(pod: &K8Obj<native::PodSpec>) -> Result<Self, TranslateError> {
        Ok(Self {
            metadata: Metadata::from_object_meta(POD_KIND, &pod.metadata),
            spec: PodSpec::from_native(&pod.spec),
            status: PodStatus::from_native(&pod.status)?,
        })
    }

    pub fn to_pod(&self) -> Result<K8Obj<native::PodSpec>, TranslateError> {
        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            self.spec.to_native()?,
            DefaultHeader::default(),
            self.status.to_native()?,
        ))
    }

    pub fn collect_pods(pods: &[K8Obj<native::PodSpec>]) -> BatchResult<Self> {
        translate_batch(pods, Self::from_pod)
    }
}

impl PodSpec {
    pub(crate) fn from_native(spec: &native::PodSpec) -> Self {
        Self {
            containers: spec.containers.iter().map(Container::from_native).collect(),
            node_name: spec.node_name.clone(),
            service_account_name: spec.service_account_name.clone(),
            restart_policy: spec.restart_policy.as_ref().map(|policy| {
                match policy {
                    native::PodRestartPolicy::Always => "Always",
                    native::PodRestartPolicy::Never => "Never",
                    native::PodRestartPolicy::OnFailure => "OnFailure",
                }
                .to_owned()
            }),
            node_selector: spec.node_selector.as_ref().map(|selector| {
                selector
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            }),
        }
    }

    pub(crate) fn to_native(&self) -> Result<native::PodSpec, TranslateError> {
        let restart_policy = match self.restart_policy.as_deref() {
            None => None,
            Some("Always") => Some(native::PodRestartPolicy::Always),
            Some("Never") => Some(native::PodRestartPolicy::Never),
            Some("OnFailure") => Some(native::PodRestartPolicy::OnFailure),
            Some(other) => return Err(TranslateError::unsupported("spec.restartPolicy", other)),
        };

        Ok(native::PodSpec {
            containers: self
                .containers
                .iter()
                .map(Container::to_native)
                .collect::<Result<_, _>>()?,
            restart_policy,
            service_account_name: self.service_account_name.clone(),
            node_name: self.node_name.clone(),
            node_selector: self.node_selector.as_ref().map(|selector| {
                selector
                    .iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            }),
        })
    }
}

impl Container {
    fn from_native(container: &native::ContainerSpec) -> Self {
        Self {
            name: container.name.clone(),
            image: container.image.clone(),
            image_pull_policy: container.image_pull_policy.as_ref().map(|policy| {
                match policy {
                    native::ImagePullPolicy::Always => "Always",
                    native::ImagePullPolicy::Never => "Never",
                    native::ImagePullPolicy::IfNotPresent => "IfNotPresent",
                }
                .to_owned()
            }),
            command: container.command.clone(),
            args: container.args.clone(),
            ports: container
                .ports
                .iter()
                .map(|port| ContainerPort {
                    container_port: port.container_port,
                    name: port.name.clone(),
                    protocol: port.protocol.clone(),
                })
                .collect(),
            env: container
                .env
                .iter()
                .map(|env| EnvVar {
                    name: env.name.clone(),
                    value: env.value.clone(),
                    field_path: env
                        .value_from
                        .as_ref()
                        .and_then(|source| source.field_ref.as_ref())
                        .map(|field| field.field_path.clone()),
                })
                .collect(),
        }
    }

    fn to_native(&self) -> Result<native::ContainerSpec, TranslateError> {
        let image_pull_policy = match self.image_pull_policy.as_deref() {
            None => None,
            Some("Always") => Some(native::ImagePullPolicy::Always),
            Some("Never") => Some(native::ImagePullPolicy::Never),
            Some("IfNotPresent") => Some(native::ImagePullPolicy::IfNotPresent),
            Some(other) => {
                return Err(TranslateError::unsupported(
                    "spec.containers.imagePullPolicy",
                    other,
                ))
            }
        };

        Ok(native::ContainerSpec {
            name: self.name.clone(),
            args: self.args.clone(),
            command: self.command.clone(),
            ports: self
                .ports
                .iter()
                .map(|port| native::ContainerPortSpec {
                    container_port: port.container_port,
                    name: port.name.clone(),
                    protocol: port.protocol.clone(),
                })
                .collect(),
            image: self.image.clone(),
            image_pull_policy,
            env: self
                .env
                .iter()
                .map(|env| Env {
                    name: env.name.clone(),
                    value: env.value.clone(),
                    value_from: env.field_path.as_ref().map(|field_path| EnvVarSource {
                        field_ref: Some(ObjectFieldSelector {
                            field_path: field_path.clone(),
                        }),
                    }),
                })
                .collect(),
        })
    }
}

impl PodTemplate {
    pub(crate) fn from_native(template: &TemplateSpec<native::PodSpec>) -> Self {
        let meta = template.metadata.clone();
        Self {
            name: meta.name,
            labels: meta.labels.into_iter().collect(),
            annotations: meta.annotations.into_iter().collect(),
            spec: PodSpec::from_native(&template.spec),
        }
    }

    pub(crate) fn to_native(&self) -> Result<TemplateSpec<native::PodSpec>, TranslateError> {
        Ok(TemplateSpec {
            metadata: TemplateMeta {
                name: self.name.clone(),
                labels: self.labels.clone().into_iter().collect(),
                annotations: self.annotations.clone().into_iter().collect(),
            },
            spec: self.spec.to_native()?,
        })
    }
}

impl PodStatus {
    fn from_native(status: &native::PodStatus) -> Result<Self, TranslateError> {
        Ok(Self {
            phase: status.phase.clone(),
            host_ip: status.host_ip.clone(),
            pod_ip: status.pod_ip.clone(),
            start_time: format_time(&status.start_time),
            conditions: map_conditions(&status.conditions),
            container_statuses: status
                .container_statuses
                .iter()
                .map(|container| {
                    Ok(ContainerStatus {
                        name: container.name.clone(),
                        state: ContainerState::from_native(&container.name, &container.state)?,
                        ready: container.ready,
                        restart_count: container.restart_count,
                        image: container.image.clone(),
                        image_id: container.image_id.clone(),
                        container_id: container.container_id.clone(),
                    })
                })
                .collect::<Result<_, TranslateError>>()?,
        })
    }

    fn to_native(&self) -> Result<native::PodStatus, TranslateError> {
        Ok(native::PodStatus {
            phase: self.phase.clone(),
            host_ip: self.host_ip.clone(),
            pod_ip: self.pod_ip.clone(),
            start_time: parse_time(self.start_time.as_deref())?,
            conditions: unmap_conditions(&self.conditions)?,
            container_statuses: self
                .container_statuses
                .iter()
                .map(|container| {
                    Ok(native::ContainerStatus {
                        name: container.name.clone(),
                        state: match &container.state {
                            Some(state) => state.to_native()?,
                            None => native::ContainerState::default(),
                        },
                        ready: container.ready,
                        restart_count: container.restart_count,
                        image: container.image.clone(),
                        image_id: container.image_id.clone(),
                        container_id: container.container_id.clone(),
                    })
                })
                .collect::<Result<_, TranslateError>>()?,
        })
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use k8_types::core::pod::ContainerState as NativeContainerState;
    use k8_types::core::pod::PodSpec as NativePodSpec;
    use k8_types::{K8Obj, TemplateSpec};

    use crate::TranslateError;

    use super::{
        ContainerState, ContainerStatus, Pod, PodTemplate, RunningState, WaitingState, POD_KIND,
    };

    fn native_pod() -> K8Obj<NativePodSpec> {
        serde_json::from_value(json!({
            "apiVersion": "v1",
            "kind": "Pod",
            "metadata": {
                "name": "web-1",
                "namespace": "shop",
                "labels": { "app": "web" }
            },
            "spec": {
                "containers": [ {
                    "name": "web",
                    "image": "nginx:1.25",
                    "imagePullPolicy": "IfNotPresent",
                    "ports": [ { "containerPort": 80, "name": "http" } ],
                    "env": [
                        { "name": "MODE", "value": "prod" },
                        { "name": "POD_IP", "valueFrom": { "fieldRef": { "fieldPath": "status.podIP" } } }
                    ]
                } ],
                "restartPolicy": "Always",
                "nodeName": "worker-2"
            },
            "status": {
                "phase": "Running",
                "hostIP": "10.0.0.12",
                "podIP": "172.16.0.5",
                "startTime": "2023-04-01T10:00:00Z",
                "conditions": [
                    { "type": "Ready", "status": "True", "lastTransitionTime": "2023-04-01T10:00:05Z" }
                ],
                "containerStatuses": [ {
                    "name": "web",
                    "ready": true,
                    "restartCount": 1,
                    "image": "nginx:1.25",
                    "imageID": "docker://sha256:abc",
                    "state": { "running": { "startedAt": "2023-04-01T10:00:03Z" } }
                } ]
            }
        }))
        .expect("pod")
    }

    #[test]
    fn test_from_pod() {
        let pod = Pod::from_pod(&native_pod()).expect("pod");

        assert_eq!(pod.metadata.kind, POD_KIND);
        assert_eq!(pod.spec.node_name.as_deref(), Some("worker-2"));
        assert_eq!(pod.spec.restart_policy.as_deref(), Some("Always"));
        let container = &pod.spec.containers[0];
        assert_eq!(container.env[1].field_path.as_deref(), Some("status.podIP"));
        assert_eq!(pod.status.start_time.as_deref(), Some("2023-04-01T10:00:00Z"));
        assert!(pod.status.is_ready());
        assert_eq!(
            pod.status.container_statuses[0].state,
            Some(ContainerState::Running(RunningState {
                started_at: Some("2023-04-01T10:00:03Z".to_owned())
            }))
        );
    }

    #[test]
    fn test_pod_round_trip() {
        let native = native_pod();
        let pod = Pod::from_pod(&native).expect("pod");
        assert_eq!(pod.to_pod().expect("native"), native);
    }

    #[test]
    fn test_ambiguous_container_state() {
        let mut native = native_pod();
        native.status.container_statuses[0].state.waiting = Some(Default::default());

        let error = Pod::from_pod(&native).expect_err("two states");
        assert!(matches!(error, TranslateError::AmbiguousContainerState(name) if name == "web"));
    }

    fn with_state(state: serde_json::Value) -> K8Obj<NativePodSpec> {
        let mut native = native_pod();
        native.status.container_statuses[0].state =
            serde_json::from_value(state).expect("container state");
        native
    }

    fn native_state(pod: &Pod) -> NativeContainerState {
        pod.to_pod().expect("native").status.container_statuses[0]
            .state
            .clone()
    }

    #[test]
    fn test_terminated_container_state() {
        let native = with_state(json!({
            "terminated": {
                "exitCode": 137,
                "signal": 9,
                "reason": "OOMKilled",
                "startedAt": "2023-04-01T10:00:03Z",
                "finishedAt": "2023-04-01T11:30:00Z",
                "containerID": "containerd://5e1"
            }
        }));

        let pod = Pod::from_pod(&native).expect("pod");
        match &pod.status.container_statuses[0].state {
            Some(ContainerState::Terminated(terminated)) => {
                assert_eq!(terminated.exit_code, 137);
                assert_eq!(terminated.signal, Some(9));
                assert_eq!(terminated.finished_at.as_deref(), Some("2023-04-01T11:30:00Z"));
            }
            other => panic!("unexpected state {:?}", other),
        }

        let state = native_state(&pod);
        assert!(state.terminated.is_some());
        assert!(state.running.is_none());
        assert!(state.waiting.is_none());
        assert_eq!(pod.to_pod().expect("native"), native);
    }

    #[test]
    fn test_waiting_container_state() {
        let native = with_state(json!({
            "waiting": { "reason": "ImagePullBackOff", "message": "back-off pulling image" }
        }));

        let pod = Pod::from_pod(&native).expect("pod");
        assert_eq!(
            pod.status.container_statuses[0].state,
            Some(ContainerState::Waiting(WaitingState {
                reason: "ImagePullBackOff".to_owned(),
                message: "back-off pulling image".to_owned(),
            }))
        );

        let state = native_state(&pod);
        assert!(state.waiting.is_some());
        assert!(state.running.is_none());
        assert!(state.terminated.is_none());
        assert_eq!(pod.to_pod().expect("native"), native);
    }

    #[test]
    fn test_template_with_empty_metadata() {
        let native: TemplateSpec<NativePodSpec> = serde_json::from_value(json!({
            "metadata": {},
            "spec": { "containers": [ { "name": "web", "image": "nginx" } ] }
        }))
        .expect("template");

        let template = PodTemplate::from_native(&native);
        assert!(template.labels.is_empty());
        assert_eq!(template.to_native().expect("native"), native);
    }

    #[test]
    fn test_container_without_state() {
        let mut native = native_pod();
        native.status.container_statuses[0].state = Default::default();

        let pod = Pod::from_pod(&native).expect("pod");
        assert_eq!(pod.status.container_statuses[0].state, None);
        let value = serde_json::to_value(&pod.status.container_statuses[0]).expect("json");
        assert!(value.get("state").is_none());
    }

    #[test]
    fn test_container_state_wire() {
        let status = ContainerStatus {
            name: "web".to_owned(),
            state: Some(ContainerState::Waiting(WaitingState {
                reason: "CrashLoopBackOff".to_owned(),
                message: String::new(),
            })),
            ..Default::default()
        };
        let value = serde_json::to_value(&status).expect("json");
        assert_eq!(
            value["state"],
            json!({ "waiting": { "reason": "CrashLoopBackOff" } })
        );
        let decoded: ContainerStatus = serde_json::from_value(value).expect("decode");
        assert_eq!(decoded, status);

        let decoded: ContainerStatus = serde_json::from_value(json!({
            "name": "web",
            "state": { "running": null, "terminated": { "exitCode": 2 }, "waiting": null }
        }))
        .expect("nullable members");
        assert!(matches!(decoded.state, Some(ContainerState::Terminated(t)) if t.exit_code == 2));

        let _error = serde_json::from_value::<ContainerStatus>(json!({
            "name": "web",
            "state": { "running": {}, "waiting": {} }
        }))
        .expect_err("two members");
    }

    #[test]
    fn test_unknown_restart_policy() {
        let mut pod = Pod::from_pod(&native_pod()).expect("pod");
        pod.spec.restart_policy = Some("Sometimes".to_owned());
        assert!(matches!(
            pod.to_pod(),
            Err(TranslateError::UnsupportedValue { field: "spec.restartPolicy", .. })
        ));
    }

    #[test]
    fn test_invalid_start_time() {
        let mut pod = Pod::from_pod(&native_pod()).expect("pod");
        pod.status.start_time = Some("yesterday".to_owned());
        assert!(matches!(pod.to_pod(), Err(TranslateError::InvalidTime { .. })));
    }

    #[test]
    fn test_collect_pods() {
        let mut broken = native_pod();
        broken.metadata.name = "web-2".to_owned();
        broken.status.container_statuses[0].state.terminated = Some(Default::default());

        let result = Pod::collect_pods(&[native_pod(), broken]);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].metadata.name, "web-1");
        assert!(result.rejected.contains("web-2"));
    }
}
