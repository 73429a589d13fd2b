use std::collections::BTreeSet;

use serde_json::Value;
use tracing::debug;

use k8_types::K8Obj;
use k8_types::Spec;

use crate::TranslateError;

/// Anything that can be identified by name in a batch
pub trait Named {
    fn item_name(&self) -> &str;
}

impl<S> Named for K8Obj<S>
where
    S: Spec,
{
    fn item_name(&self) -> &str {
        &self.metadata.name
    }
}

/// object decoded without schema, nameless objects have an empty name
impl Named for Value {
    fn item_name(&self) -> &str {
        self.pointer("/metadata/name")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// Outcome of translating a collection.
/// `items` keeps input order, `rejected` holds names of items which failed.
/// A nameless item is recorded by its input position, as `#<index>`.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult<T> {
    pub items: Vec<T>,
    pub rejected: BTreeSet<String>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            items: vec![],
            rejected: BTreeSet::new(),
        }
    }
}

impl<T> BatchResult<T> {
    /// true if no item was rejected
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn map<U, F>(self, f: F) -> BatchResult<U>
    where
        F: FnMut(T) -> U,
    {
        BatchResult {
            items: self.items.into_iter().map(f).collect(),
            rejected: self.rejected,
        }
    }
}

/// Apply `adapter` to each item independently.
/// A failing item is skipped and its name recorded, it never aborts the batch.
pub fn translate_batch<N, T, F>(items: &[N], mut adapter: F) -> BatchResult<T>
where
    N: Named,
    F: FnMut(&N) -> Result<T, TranslateError>,
{
    let mut result = BatchResult {
        items: Vec::with_capacity(items.len()),
        rejected: BTreeSet::new(),
    };

    for (index, item) in items.iter().enumerate() {
        match adapter(item) {
            Ok(translated) => result.items.push(translated),
            Err(err) => {
                let name = rejection_key(item.item_name(), index);
                debug!(item = %name, %err, "rejecting item");
                result.rejected.insert(name);
            }
        }
    }

    result
}

fn rejection_key(name: &str, index: usize) -> String {
    if name.is_empty() {
        format!("#{}", index)
    } else {
        name.to_owned()
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;
    use serde_json::Value;

    use crate::Metadata;
    use crate::TranslateError;

    use super::{translate_batch, Named};

    fn names(items: &[Metadata]) -> Vec<&str> {
        items.iter().map(|meta| meta.name.as_str()).collect()
    }

    #[test]
    fn test_partial_tolerance() {
        let items = vec![
            json!({ "metadata": { "name": "a" } }),
            json!({ "metadata": { "name": "b", "namespace": "x" } }),
            json!({ "metadata": { "name": "c" } }),
            json!({ "metadata": { "name": "d" } }),
        ];

        let result = translate_batch(&items, |item: &Value| {
            if item.item_name() == "b" || item.item_name() == "d" {
                Err(TranslateError::MissingField("spec"))
            } else {
                Metadata::from_unstructured("Test", &item["metadata"])
            }
        });

        assert_eq!(names(&result.items), vec!["a", "c"]);
        assert_eq!(result.rejected.len(), 2);
        assert!(result.rejected.contains("b"));
        assert!(result.rejected.contains("d"));
        assert!(!result.is_complete());
    }

    #[test]
    fn test_empty_batch() {
        let items: Vec<Value> = vec![];
        let result = translate_batch(&items, |_: &Value| Ok(()));
        assert!(result.items.is_empty());
        assert!(result.is_complete());
    }

    #[test]
    fn test_nameless_rejections_are_counted() {
        let items = vec![
            json!({ "metadata": { "name": "ok" } }),
            json!({ "metadata": {} }),
            json!({ "metadata": { "namespace": "x" } }),
        ];

        let result = translate_batch(&items, |item: &Value| {
            Metadata::from_unstructured("Test", &item["metadata"])
        });

        assert_eq!(names(&result.items), vec!["ok"]);
        assert_eq!(result.items.len() + result.rejected.len(), items.len());
        assert!(result.rejected.contains("#1"));
        assert!(result.rejected.contains("#2"));
    }

    #[test]
    fn test_unnamed_value() {
        assert_eq!(json!({ "spec": {} }).item_name(), "");
    }
}
