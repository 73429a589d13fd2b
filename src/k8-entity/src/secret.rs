use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use k8_types::core::secret as native;
use k8_types::{ByteString, K8Obj};

use crate::{Metadata, TranslateError};

pub const SECRET_KIND: &str = "Secret";

/// payload bytes are carried unchanged
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Secret {
    pub metadata: Metadata,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, ByteString>,
}

impl_entity!(Secret, SECRET_KIND);

impl Secret {
    pub fn from_secret(secret: &K8Obj<native::SecretSpec>) -> Self {
        Self {
            metadata: Metadata::from_object_meta(SECRET_KIND, &secret.metadata),
            type_: secret.header.ty.clone(),
            data: secret.header.data.clone(),
        }
    }

    pub fn to_secret(&self) -> Result<K8Obj<native::SecretSpec>, TranslateError> {
        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            native::SecretSpec::default(),
            native::SecretHeader {
                data: self.data.clone(),
                ty: self.type_.clone(),
            },
            Default::default(),
        ))
    }

    pub fn from_secrets(secrets: &[K8Obj<native::SecretSpec>]) -> Vec<Self> {
        secrets.iter().map(Self::from_secret).collect()
    }
}
