//!
//! # Group readiness
//!
//! Pods are grouped by the value of a label. A group is reported only when every
//! member is ready and translates, otherwise the whole group is withheld.
//!
use std::collections::BTreeMap;

use tracing::trace;

use k8_types::core::pod::PodSpec;
use k8_types::K8Obj;

use crate::pod::Pod;

/// Group native pods by the value of label `key`.
/// Pods without the label are left out.
pub fn group_pods_by_label<'a>(
    pods: &'a [K8Obj<PodSpec>],
    key: &str,
) -> BTreeMap<String, Vec<&'a K8Obj<PodSpec>>> {
    let mut groups: BTreeMap<String, Vec<&K8Obj<PodSpec>>> = BTreeMap::new();
    for pod in pods {
        if let Some(value) = pod.metadata.labels.get(key) {
            groups.entry(value.clone()).or_default().push(pod);
        }
    }
    groups
}

/// All pods of the group translated, or nothing
pub fn ready_group<'a, I>(pods: I) -> Option<Vec<Pod>>
where
    I: IntoIterator<Item = &'a K8Obj<PodSpec>>,
{
    let mut ready = vec![];
    for pod in pods {
        if !pod.status.is_ready() {
            trace!(pod = %pod.metadata.name, "pod not ready, withholding group");
            return None;
        }
        match Pod::from_pod(pod) {
            Ok(translated) => ready.push(translated),
            Err(err) => {
                trace!(pod = %pod.metadata.name, %err, "pod not translated, withholding group");
                return None;
            }
        }
    }
    Some(ready)
}

/// Ready groups only, keyed by label value
pub fn ready_groups(pods: &[K8Obj<PodSpec>], key: &str) -> BTreeMap<String, Vec<Pod>> {
    group_pods_by_label(pods, key)
        .into_iter()
        .filter_map(|(value, members)| {
            let group = ready_group(members)?;
            trace!(group = %value, pods = group.len(), "group ready");
            Some((value, group))
        })
        .collect()
}
