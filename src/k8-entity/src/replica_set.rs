use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use k8_types::app::replica_set as native;
use k8_types::{DefaultHeader, K8Obj, LabelSelector};

use crate::batch::{translate_batch, BatchResult};
use crate::condition::{map_conditions, unmap_conditions, Condition};
use crate::pod::PodTemplate;
use crate::{Metadata, TranslateError};

pub const REPLICA_SET_KIND: &str = "ReplicaSet";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplicaSet {
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: ReplicaSetSpec,
    #[serde(default)]
    pub status: ReplicaSetStatus,
}

impl_entity!(ReplicaSet, REPLICA_SET_KIND);

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReplicaSetSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub selector: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_ready_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PodTemplate>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplicaSetStatus {
    pub replicas: i32,
    pub fully_labeled_replicas: i32,
    pub ready_replicas: i32,
    pub available_replicas: i32,
    pub observed_generation: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
}

impl ReplicaSet {
    pub fn from_replica_set(replica_set: &K8Obj<native::ReplicaSetSpec>) -> Self {
        let spec = &replica_set.spec;
        let status = &replica_set.status;
        Self {
            metadata: Metadata::from_object_meta(REPLICA_SET_KIND, &replica_set.metadata),
            spec: ReplicaSetSpec {
                replicas: spec.replicas,
                selector: spec.selector.match_labels.clone().into_iter().collect(),
                min_ready_seconds: spec.min_ready_seconds,
                template: spec.template.as_ref().map(PodTemplate::from_native),
            },
            status: ReplicaSetStatus {
                replicas: status.replicas,
                fully_labeled_replicas: status.fully_labeled_replicas,
                ready_replicas: status.ready_replicas,
                available_replicas: status.available_replicas,
                observed_generation: status.observed_generation,
                conditions: map_conditions(&status.conditions),
            },
        }
    }

    pub fn to_replica_set(&self) -> Result<K8Obj<native::ReplicaSetSpec>, TranslateError> {
        let template = match &self.spec.template {
            Some(template) => Some(template.to_native()?),
            None => None,
        };

        let spec = native::ReplicaSetSpec {
            min_ready_seconds: self.spec.min_ready_seconds,
            replicas: self.spec.replicas,
            selector: LabelSelector {
                match_labels: self.spec.selector.clone().into_iter().collect(),
            },
            template,
        };

        let status = native::ReplicaSetStatus {
            available_replicas: self.status.available_replicas,
            conditions: unmap_conditions(&self.status.conditions)?,
            fully_labeled_replicas: self.status.fully_labeled_replicas,
            observed_generation: self.status.observed_generation,
            ready_replicas: self.status.ready_replicas,
            replicas: self.status.replicas,
        };

        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            spec,
            DefaultHeader::default(),
            status,
        ))
    }

    pub fn from_replica_sets(replica_sets: &[K8Obj<native::ReplicaSetSpec>]) -> Vec<Self> {
        replica_sets.iter().map(Self::from_replica_set).collect()
    }

    /// reverse direction over a collection, failed entities are reported by name
    pub fn to_replica_sets(replica_sets: &[Self]) -> BatchResult<K8Obj<native::ReplicaSetSpec>> {
        translate_batch(replica_sets, Self::to_replica_set)
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use k8_types::app::replica_set::ReplicaSetSpec;
    use k8_types::K8Obj;

    use super::ReplicaSet;

    fn native() -> K8Obj<ReplicaSetSpec> {
        serde_json::from_value(json!({
            "apiVersion": "apps/v1",
            "kind": "ReplicaSet",
            "metadata": {
                "name": "frontend-5d9c",
                "namespace": "shop",
                "labels": { "app": "frontend", "pod-template-hash": "5d9c" }
            },
            "spec": {
                "replicas": 2,
                "selector": { "matchLabels": { "app": "frontend" } },
                "template": {
                    "metadata": { "labels": { "app": "frontend" } },
                    "spec": { "containers": [ { "name": "web", "image": "nginx" } ] }
                }
            },
            "status": { "replicas": 2, "fullyLabeledReplicas": 2, "readyReplicas": 1, "observedGeneration": 1 }
        }))
        .expect("replica set")
    }

    #[test]
    fn test_replica_set_round_trip() {
        let native = native();
        let replica_set = ReplicaSet::from_replica_set(&native);

        assert_eq!(replica_set.spec.replicas, Some(2));
        assert_eq!(replica_set.status.fully_labeled_replicas, 2);
        assert_eq!(replica_set.metadata.labels.len(), 2);
        assert_eq!(replica_set.to_replica_set().expect("native"), native);
    }

    #[test]
    fn test_reverse_batch_reports_failures() {
        let good = ReplicaSet::from_replica_set(&native());
        let mut bad = good.clone();
        bad.metadata.name = "bad".to_owned();
        bad.status.conditions.push(crate::condition::Condition {
            last_transition_time: Some("not a time".to_owned()),
            ..crate::condition::Condition::new("Ready", "True")
        });

        let result = ReplicaSet::to_replica_sets(&[good, bad]);
        assert_eq!(result.items.len(), 1);
        assert!(result.rejected.contains("bad"));
    }
}
