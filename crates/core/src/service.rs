//! Fixture-backed request store.
//!
//! The inbox backend serves a fixed list of requests loaded once at startup. The list is
//! immutable afterwards and shared behind an `Arc`, so clones of [`RequestService`] are cheap
//! and safe to hand to every request handler.

use crate::{
    InboxConfig, InboxError, InboxRequest, InboxResult, RequestSource, SourceResult,
};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Request list bundled with the crate.
const BUNDLED_FIXTURE: &str = include_str!("../fixtures/requests.json");

/// Read-only request data operations - no API concerns.
#[derive(Clone, Debug)]
pub struct RequestService {
    requests: Arc<[InboxRequest]>,
}

impl RequestService {
    /// Build a service over an already loaded list.
    ///
    /// # Errors
    ///
    /// Returns [`InboxError::DuplicateRequestId`] if two requests share an id, since lookups by
    /// id would otherwise be ambiguous.
    pub fn new(requests: Vec<InboxRequest>) -> InboxResult<Self> {
        let mut seen = HashSet::with_capacity(requests.len());
        for request in &requests {
            if !seen.insert(request.id.as_str()) {
                return Err(InboxError::DuplicateRequestId(request.id.clone()));
            }
        }

        Ok(Self {
            requests: requests.into(),
        })
    }

    /// Load the bundled fixture list.
    pub fn from_fixture() -> InboxResult<Self> {
        Self::from_json(BUNDLED_FIXTURE)
    }

    /// Parse a JSON array of requests.
    pub fn from_json(json: &str) -> InboxResult<Self> {
        let requests: Vec<InboxRequest> =
            serde_json::from_str(json).map_err(InboxError::FixtureParse)?;
        Self::new(requests)
    }

    /// Load a JSON array of requests from a file.
    pub fn from_path(path: &Path) -> InboxResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| InboxError::FixtureRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load whichever list the configuration points at, falling back to the bundled fixture.
    pub fn from_config(cfg: &InboxConfig) -> InboxResult<Self> {
        let service = match cfg.fixture_path() {
            Some(path) => {
                tracing::info!("loading requests from {}", path.display());
                Self::from_path(path)?
            }
            None => Self::from_fixture()?,
        };
        tracing::info!("loaded {} inbox requests", service.len());
        Ok(service)
    }

    /// All requests in fixture order.
    pub fn list_requests(&self) -> Vec<InboxRequest> {
        self.requests.to_vec()
    }

    /// Look up one request; `None` when the id is unknown.
    pub fn get_request(&self, id: &str) -> Option<InboxRequest> {
        self.requests.iter().find(|r| r.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl RequestSource for RequestService {
    fn all_requests(&self) -> SourceResult<Vec<InboxRequest>> {
        Ok(self.list_requests())
    }

    fn request_by_id(&self, id: &str) -> SourceResult<Option<InboxRequest>> {
        Ok(self.get_request(id))
    }
}
