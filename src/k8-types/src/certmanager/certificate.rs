use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::{Crd, CrdNames, DefaultHeader, Spec, Status, Time};

const CERTIFICATE_API: Crd = Crd {
    group: "cert-manager.io",
    version: "v1",
    names: CrdNames {
        kind: "Certificate",
        plural: "certificates",
        singular: "certificate",
    },
};

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateSpec {
    pub secret_name: String,
    pub common_name: String,
    pub dns_names: Vec<String>,
    pub duration: Option<String>,
    pub renew_before: Option<String>,
    #[serde(rename = "isCA")]
    pub is_ca: bool,
    pub usages: Vec<String>,
    pub issuer_ref: IssuerReference,
    pub private_key: Option<CertificatePrivateKey>,
    pub keystores: Option<CertificateKeystores>,
    pub secret_template: Option<CertificateSecretTemplate>,
}

impl Spec for CertificateSpec {
    type Status = CertificateStatus;
    type Header = DefaultHeader;

    fn metadata() -> &'static Crd {
        &CERTIFICATE_API
    }
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IssuerReference {
    pub name: String,
    pub kind: String,
    pub group: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificatePrivateKey {
    pub rotation_policy: Option<String>,
    pub encoding: Option<String>,
    pub algorithm: Option<String>,
    pub size: i32,
}

/// jks and pkcs12 are configured independently
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateKeystores {
    pub jks: Option<JksKeystore>,
    pub pkcs12: Option<Pkcs12Keystore>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct JksKeystore {
    pub create: bool,
    pub password_secret_ref: SecretKeySelector,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Pkcs12Keystore {
    pub create: bool,
    pub password_secret_ref: SecretKeySelector,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretKeySelector {
    pub name: String,
    pub key: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateSecretTemplate {
    pub annotations: HashMap<String, String>,
    pub labels: HashMap<String, String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateStatus {
    pub conditions: Vec<CertificateCondition>,
    pub not_before: Option<Time>,
    pub not_after: Option<Time>,
    pub renewal_time: Option<Time>,
    pub revision: Option<i32>,
    pub next_private_key_secret_name: Option<String>,
}

impl Status for CertificateStatus {}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateCondition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    pub last_transition_time: Option<Time>,
    pub reason: String,
    pub message: String,
    pub observed_generation: i64,
}
