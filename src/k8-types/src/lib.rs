mod crd;
mod int_or_string;
mod metadata;
mod time;
mod bytes;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "app")]
pub mod app;
#[cfg(feature = "networking")]
pub mod networking;
#[cfg(feature = "openshift")]
pub mod openshift;
#[cfg(feature = "certmanager")]
pub mod certmanager;

pub use self::bytes::*;
pub use self::crd::*;
pub use self::int_or_string::*;
pub use self::metadata::*;
pub use self::spec_def::*;
pub use self::time::*;

mod spec_def {

    use std::fmt::Debug;

    use serde::de::DeserializeOwned;
    use serde::Deserialize;
    use serde::Serialize;

    use super::Crd;

    pub trait Status:
        Sized + Debug + Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync
    {
    }

    pub trait Header:
        Sized + Debug + Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync
    {
    }

    /// Kubernetes Spec
    pub trait Spec:
        Sized + Debug + Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync
    {
        type Status: Status;

        type Header: Header;

        /// if true, spec is namespaced
        const NAME_SPACED: bool = true;

        /// api descriptor of the object owning this spec
        fn metadata() -> &'static Crd;

        fn api_version() -> String {
            let metadata = Self::metadata();
            if metadata.group == "core" {
                return metadata.version.to_owned();
            }
            format!("{}/{}", metadata.group, metadata.version)
        }

        fn kind() -> String {
            Self::metadata().names.kind.to_owned()
        }
    }

    #[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
    pub struct DefaultHeader {}

    impl Header for DefaultHeader {}

    /// for kinds without status sub-object
    #[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
    pub struct NoStatus {}

    impl Status for NoStatus {}
}
