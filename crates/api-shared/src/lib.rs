//! # API Shared
//!
//! Shared response types and services for the inbox REST API and its clients.
//!
//! Contains:
//! - Wire types common to every endpoint (`HealthRes`, `MessageRes`)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` when answering and by `inbox-client` when decoding.

pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::{HealthRes, MessageRes};
