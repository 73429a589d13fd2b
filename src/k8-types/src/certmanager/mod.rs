//!
//! cert-manager custom resources
//!
pub mod certificate;
