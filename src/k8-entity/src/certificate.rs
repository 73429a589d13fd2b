//!
//! # Certificate
//!
//! cert-manager `Certificate`. Each optional nested block keeps its presence:
//! an absent block stays absent, an empty block stays empty.
//!
use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use k8_types::certmanager::certificate as native;
use k8_types::{DefaultHeader, K8Obj};

use crate::condition::{map_conditions, unmap_conditions, Condition};
use crate::time::{format_optional_time, parse_optional_time};
use crate::{Metadata, TranslateError};

pub const CERTIFICATE_KIND: &str = "Certificate";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub metadata: Metadata,
    #[serde(default)]
    pub spec: CertificateSpec,
    #[serde(default)]
    pub status: CertificateStatus,
}

impl_entity!(Certificate, CERTIFICATE_KIND);

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSpec {
    pub secret_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub common_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_before: Option<String>,
    #[serde(rename = "isCA", default)]
    pub is_ca: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usages: Vec<String>,
    #[serde(default)]
    pub issuer_ref: IssuerRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<PrivateKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keystores: Option<Keystores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_template: Option<SecretTemplate>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct IssuerRef {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub group: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub size: i32,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Keystores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jks: Option<Keystore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkcs12: Option<Keystore>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Keystore {
    pub create: bool,
    pub password_secret_ref: SecretKeyRef,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretKeyRef {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key: String,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretTemplate {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateStatus {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_private_key_secret_name: Option<String>,
}

impl CertificateStatus {
    pub fn is_ready(&self) -> bool {
        self.conditions
            .iter()
            .any(|condition| condition.type_ == "Ready" && condition.is_true())
    }
}

impl Keystore {
    fn from_jks(jks: &native::JksKeystore) -> Self {
        Self {
            create: jks.create,
            password_secret_ref: SecretKeyRef::from_native(&jks.password_secret_ref),
        }
    }

    fn from_pkcs12(pkcs12: &native::Pkcs12Keystore) -> Self {
        Self {
            create: pkcs12.create,
            password_secret_ref: SecretKeyRef::from_native(&pkcs12.password_secret_ref),
        }
    }

    fn to_jks(&self) -> native::JksKeystore {
        native::JksKeystore {
            create: self.create,
            password_secret_ref: self.password_secret_ref.to_native(),
        }
    }

    fn to_pkcs12(&self) -> native::Pkcs12Keystore {
        native::Pkcs12Keystore {
            create: self.create,
            password_secret_ref: self.password_secret_ref.to_native(),
        }
    }
}

impl SecretKeyRef {
    fn from_native(selector: &native::SecretKeySelector) -> Self {
        Self {
            name: selector.name.clone(),
            key: selector.key.clone(),
        }
    }

    fn to_native(&self) -> native::SecretKeySelector {
        native::SecretKeySelector {
            name: self.name.clone(),
            key: self.key.clone(),
        }
    }
}

impl Certificate {
    pub fn from_certificate(certificate: &K8Obj<native::CertificateSpec>) -> Self {
        let spec = &certificate.spec;
        let status = &certificate.status;

        Self {
            metadata: Metadata::from_object_meta(CERTIFICATE_KIND, &certificate.metadata),
            spec: CertificateSpec {
                secret_name: spec.secret_name.clone(),
                common_name: spec.common_name.clone(),
                dns_names: spec.dns_names.clone(),
                duration: spec.duration.clone(),
                renew_before: spec.renew_before.clone(),
                is_ca: spec.is_ca,
                usages: spec.usages.clone(),
                issuer_ref: IssuerRef {
                    name: spec.issuer_ref.name.clone(),
                    kind: spec.issuer_ref.kind.clone(),
                    group: spec.issuer_ref.group.clone(),
                },
                private_key: spec.private_key.as_ref().map(|key| PrivateKey {
                    rotation_policy: key.rotation_policy.clone(),
                    encoding: key.encoding.clone(),
                    algorithm: key.algorithm.clone(),
                    size: key.size,
                }),
                keystores: spec.keystores.as_ref().map(|keystores| Keystores {
                    jks: keystores.jks.as_ref().map(Keystore::from_jks),
                    pkcs12: keystores.pkcs12.as_ref().map(Keystore::from_pkcs12),
                }),
                secret_template: spec.secret_template.as_ref().map(|template| SecretTemplate {
                    annotations: template.annotations.clone().into_iter().collect(),
                    labels: template.labels.clone().into_iter().collect(),
                }),
            },
            status: CertificateStatus {
                conditions: map_conditions(&status.conditions),
                not_before: format_optional_time(status.not_before.as_ref()),
                not_after: format_optional_time(status.not_after.as_ref()),
                renewal_time: format_optional_time(status.renewal_time.as_ref()),
                revision: status.revision,
                next_private_key_secret_name: status.next_private_key_secret_name.clone(),
            },
        }
    }

    pub fn to_certificate(&self) -> Result<K8Obj<native::CertificateSpec>, TranslateError> {
        let spec = &self.spec;
        let native_spec = native::CertificateSpec {
            secret_name: spec.secret_name.clone(),
            common_name: spec.common_name.clone(),
            dns_names: spec.dns_names.clone(),
            duration: spec.duration.clone(),
            renew_before: spec.renew_before.clone(),
            is_ca: spec.is_ca,
            usages: spec.usages.clone(),
            issuer_ref: native::IssuerReference {
                name: spec.issuer_ref.name.clone(),
                kind: spec.issuer_ref.kind.clone(),
                group: spec.issuer_ref.group.clone(),
            },
            private_key: spec.private_key.as_ref().map(|key| native::CertificatePrivateKey {
                rotation_policy: key.rotation_policy.clone(),
                encoding: key.encoding.clone(),
                algorithm: key.algorithm.clone(),
                size: key.size,
            }),
            keystores: spec
                .keystores
                .as_ref()
                .map(|keystores| native::CertificateKeystores {
                    jks: keystores.jks.as_ref().map(Keystore::to_jks),
                    pkcs12: keystores.pkcs12.as_ref().map(Keystore::to_pkcs12),
                }),
            secret_template: spec.secret_template.as_ref().map(|template| {
                native::CertificateSecretTemplate {
                    annotations: template.annotations.clone().into_iter().collect(),
                    labels: template.labels.clone().into_iter().collect(),
                }
            }),
        };

        let status = &self.status;
        let native_status = native::CertificateStatus {
            conditions: unmap_conditions(&status.conditions)?,
            not_before: parse_optional_time(status.not_before.as_deref())?,
            not_after: parse_optional_time(status.not_after.as_deref())?,
            renewal_time: parse_optional_time(status.renewal_time.as_deref())?,
            revision: status.revision,
            next_private_key_secret_name: status.next_private_key_secret_name.clone(),
        };

        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            native_spec,
            DefaultHeader::default(),
            native_status,
        ))
    }

    pub fn from_certificates(certificates: &[K8Obj<native::CertificateSpec>]) -> Vec<Self> {
        certificates.iter().map(Self::from_certificate).collect()
    }
}
