use serde::Deserialize;
use serde::Serialize;

use crate::Crd;
use crate::CrdNames;
use crate::Header;
use crate::LocalObjectReference;
use crate::NoStatus;
use crate::Spec;

const API: Crd = Crd {
    group: "core",
    version: "v1",
    names: CrdNames {
        kind: "ServiceAccount",
        plural: "serviceaccounts",
        singular: "serviceaccount",
    },
};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountSpec {}

impl Spec for ServiceAccountSpec {
    type Status = NoStatus;
    type Header = ServiceAccountHeader;

    fn metadata() -> &'static Crd {
        &API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceAccountHeader {
    pub secrets: Vec<ObjectReference>,
    pub image_pull_secrets: Vec<LocalObjectReference>,
    pub automount_service_account_token: Option<bool>,
}

impl Header for ServiceAccountHeader {}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectReference {
    pub kind: Option<String>,
    pub namespace: Option<String>,
    pub name: String,
}
