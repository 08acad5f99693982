//! # Inbox Core
//!
//! Core logic for the clinical smart inbox.
//!
//! This crate contains pure data operations and presentation logic:
//! - The inbox request model and its JSON wire shape
//! - A fixture-backed request store (`RequestService`)
//! - The `RequestSource` data-access trait
//! - Display derivations (`RequestPresenter`, `DerivedView`) and inbox load state (`Inbox`)
//!
//! **No API concerns**: HTTP servers and clients belong in `api-rest` and `inbox-client`.

pub mod config;
pub mod constants;
pub mod error;
pub mod inbox;
pub mod presenter;
pub mod request;
pub mod service;
pub mod source;

pub use config::InboxConfig;
pub use error::{InboxError, InboxResult, SourceError, SourceResult};
pub use inbox::Inbox;
pub use presenter::{DerivedView, Priority, RequestPresenter, TypeIcon};
pub use request::{Assignment, InboxRequest, Recommendation, RequestType};
pub use service::RequestService;
pub use source::RequestSource;
