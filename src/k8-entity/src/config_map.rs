use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use k8_types::core::config_map as native;
use k8_types::{ByteString, K8Obj};

use crate::{Metadata, TranslateError};

pub const CONFIG_MAP_KIND: &str = "ConfigMap";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMap {
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub binary_data: BTreeMap<String, ByteString>,
}

impl_entity!(ConfigMap, CONFIG_MAP_KIND);

impl ConfigMap {
    pub fn from_config_map(config_map: &K8Obj<native::ConfigMapSpec>) -> Self {
        Self {
            metadata: Metadata::from_object_meta(CONFIG_MAP_KIND, &config_map.metadata),
            data: config_map.header.data.clone(),
            binary_data: config_map.header.binary_data.clone(),
        }
    }

    pub fn to_config_map(&self) -> Result<K8Obj<native::ConfigMapSpec>, TranslateError> {
        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            native::ConfigMapSpec::default(),
            native::ConfigMapHeader {
                data: self.data.clone(),
                binary_data: self.binary_data.clone(),
            },
            Default::default(),
        ))
    }

    pub fn from_config_maps(config_maps: &[K8Obj<native::ConfigMapSpec>]) -> Vec<Self> {
        config_maps.iter().map(Self::from_config_map).collect()
    }
}
