use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use k8_types::ObjectMeta;

use crate::TranslateError;

/// Canonical identity shared by every entity.
/// `kind` is always written by the adapter, never copied from input.
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub generation: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl Metadata {
    pub fn new<K, N>(kind: K, name: N) -> Self
    where
        K: Into<String>,
        N: Into<String>,
    {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn from_object_meta(kind: &str, meta: &ObjectMeta) -> Self {
        Self {
            kind: kind.to_owned(),
            name: meta.name.clone(),
            namespace: meta.namespace.clone(),
            uid: meta.uid.clone(),
            generation: meta.generation,
            resource_version: meta.resource_version.clone(),
            annotations: sorted(&meta.annotations),
            labels: sorted(&meta.labels),
        }
    }

    pub fn to_object_meta(&self) -> ObjectMeta {
        ObjectMeta {
            name: self.name.clone(),
            namespace: self.namespace.clone(),
            uid: self.uid.clone(),
            generation: self.generation,
            resource_version: self.resource_version.clone(),
            annotations: unsorted(&self.annotations),
            labels: unsorted(&self.labels),
            ..Default::default()
        }
    }

    /// Build from the `metadata` map of an object decoded without a schema.
    /// Only `name` is required, values of annotations and labels are stringified.
    pub fn from_unstructured(kind: &str, meta: &Value) -> Result<Self, TranslateError> {
        let name = meta
            .get("name")
            .and_then(Value::as_str)
            .ok_or(TranslateError::MissingField("metadata.name"))?;

        let text = |key: &str| {
            meta.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };

        let generation = meta
            .get("generation")
            .and_then(|value| value.as_i64().or_else(|| value.as_f64().map(|f| f as i64)))
            .unwrap_or_default();

        Ok(Self {
            kind: kind.to_owned(),
            name: name.to_owned(),
            namespace: text("namespace"),
            uid: text("uid"),
            generation,
            resource_version: text("resourceVersion"),
            annotations: stringify_map(meta.get("annotations")),
            labels: stringify_map(meta.get("labels")),
        })
    }
}

fn sorted(map: &HashMap<String, String>) -> BTreeMap<String, String> {
    map.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn unsorted(map: &BTreeMap<String, String>) -> HashMap<String, String> {
    map.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn stringify_map(value: Option<&Value>) -> BTreeMap<String, String> {
    match value.and_then(Value::as_object) {
        Some(object) => object
            .iter()
            .map(|(key, value)| (key.clone(), stringify(value)))
            .collect(),
        None => BTreeMap::new(),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
