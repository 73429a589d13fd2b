//!
//! # Canonical entities
//!
//! Kubernetes, OpenShift and cert-manager objects come in several incompatible
//! dialects. This crate maps each of them onto one canonical entity per concept
//! and back: `Route` for routes and ingresses, `Deployment` for deployments and
//! deployment configs, `Namespace` for namespaces and projects.
//!
//! Every translation is a pure function. Forward translations of collections go
//! through [`translate_batch`], which reports failed items by name instead of
//! failing the whole collection.
//!
#[macro_use]
mod entity;

mod batch;
mod config;
mod error;
mod metadata;
mod safety;

pub mod certificate;
pub mod condition;
pub mod config_map;
pub mod deployment;
pub mod namespace;
pub mod pod;
pub mod readiness;
pub mod replica_set;
pub mod route;
pub mod secret;
pub mod service;
pub mod service_account;
pub mod time;

pub use self::batch::{translate_batch, BatchResult, Named};
pub use self::config::*;
pub use self::entity::{AnyEntity, Entity};
pub use self::error::{ConfigError, TranslateError};
pub use self::metadata::Metadata;
pub use self::safety::{guard, recover};

pub use k8_types;
