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
// Secret Object
const SECRET_API: Crd = Crd {
    group: "core",
    version: "v1",
    names: CrdNames {
        kind: "Secret",
        plural: "secrets",
        singular: "secret",
    },
};

impl Spec for SecretSpec {
    type Status = NoStatus;
    type Header = SecretHeader;

    fn metadata() -> &'static Crd {
        &SECRET_API
    }
}

#[derive(Deserialize, Serialize, Debug, Eq, PartialEq, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SecretSpec {}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretHeader {
    #[serde(default)]
    pub data: BTreeMap<String, ByteString>,
    #[serde(rename = "type", default)]
    pub ty: String,
}

impl Header for SecretHeader {}
