use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::ByteString;
use crate::Crd;
use crate::CrdNames;
use crate::Header;
use crate::NoStatus;
use crate::Spec;

//
// ConfigMap Object
const CONFIG_MAP_API: Crd = Crd {
    group: "core",
    version: "v1",
    names: CrdNames {
        kind: "ConfigMap",
        plural: "configmaps",
        singular: "configmap",
    },
};

impl Spec for ConfigMapSpec {
    type Status = NoStatus;
    type Header = ConfigMapHeader;

    fn metadata() -> &'static Crd {
        &CONFIG_MAP_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapSpec {}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapHeader {
    #[serde(default)]
    pub data: BTreeMap<String, String>,
    #[serde(default)]
    pub binary_data: BTreeMap<String, ByteString>,
}

impl Header for ConfigMapHeader {}
