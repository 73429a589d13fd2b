//!
//! OpenShift flavours of routing, rollout and tenancy objects
//!
pub mod deployment_config;
pub mod project;
pub mod route;
