use serde::Deserialize;
use serde::Serialize;

use k8_types::core::service_account as native;
use k8_types::{K8Obj, LocalObjectReference};

use crate::{Metadata, TranslateError};

pub const SERVICE_ACCOUNT_KIND: &str = "ServiceAccount";

/// secrets are referenced by name only
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccount {
    pub metadata: Metadata,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_pull_secrets: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automount_service_account_token: Option<bool>,
}

impl_entity!(ServiceAccount, SERVICE_ACCOUNT_KIND);

impl ServiceAccount {
    pub fn from_service_account(account: &K8Obj<native::ServiceAccountSpec>) -> Self {
        let header = &account.header;
        Self {
            metadata: Metadata::from_object_meta(SERVICE_ACCOUNT_KIND, &account.metadata),
            secrets: header
                .secrets
                .iter()
                .map(|secret| secret.name.clone())
                .collect(),
            image_pull_secrets: header
                .image_pull_secrets
                .iter()
                .map(|secret| secret.name.clone())
                .collect(),
            automount_service_account_token: header.automount_service_account_token,
        }
    }

    pub fn to_service_account(
        &self,
    ) -> Result<K8Obj<native::ServiceAccountSpec>, TranslateError> {
        let header = native::ServiceAccountHeader {
            secrets: self
                .secrets
                .iter()
                .map(|name| native::ObjectReference {
                    name: name.clone(),
                    ..Default::default()
                })
                .collect(),
            image_pull_secrets: self
                .image_pull_secrets
                .iter()
                .map(|name| LocalObjectReference { name: name.clone() })
                .collect(),
            automount_service_account_token: self.automount_service_account_token,
        };

        Ok(K8Obj::from_parts(
            self.metadata.to_object_meta(),
            native::ServiceAccountSpec::default(),
            header,
            Default::default(),
        ))
    }

    pub fn from_service_accounts(accounts: &[K8Obj<native::ServiceAccountSpec>]) -> Vec<Self> {
        accounts.iter().map(Self::from_service_account).collect()
    }
}

#[cfg(test)]
mod test {

    use serde_json::json;

    use k8_types::core::service_account::ServiceAccountSpec;
    use k8_types::K8Obj;

    use super::ServiceAccount;

    #[test]
    fn test_service_account_round_trip() {
        let native: K8Obj<ServiceAccountSpec> = serde_json::from_value(json!({
            "apiVersion": "v1",
            "kind": "ServiceAccount",
            "metadata": { "name": "builder", "namespace": "ci" },
            "secrets": [ { "name": "builder-token-x1" } ],
            "imagePullSecrets": [ { "name": "registry" } ],
            "automountServiceAccountToken": false
        }))
        .expect("service account");

        let account = ServiceAccount::from_service_account(&native);
        assert_eq!(account.secrets, vec!["builder-token-x1".to_owned()]);
        assert_eq!(account.image_pull_secrets, vec!["registry".to_owned()]);
        assert_eq!(account.automount_service_account_token, Some(false));

        let value = serde_json::to_value(&account).expect("json");
        assert_eq!(value["imagePullSecrets"], json!(["registry"]));
        assert!(value.get("spec").is_none());

        assert_eq!(account.to_service_account().expect("native"), native);
    }
}
