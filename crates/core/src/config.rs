//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services, so
//! request handling never reads process-wide environment variables.

use crate::constants::{DEFAULT_REST_ADDR, FIXTURE_PATH_ENV, REST_ADDR_ENV};
use crate::{InboxError, InboxResult};
use std::path::{Path, PathBuf};

/// Server configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct InboxConfig {
    rest_addr: String,
    fixture_path: Option<PathBuf>,
}

impl InboxConfig {
    /// Create a new `InboxConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`InboxError::InvalidInput`] if `rest_addr` is blank.
    pub fn new(rest_addr: String, fixture_path: Option<PathBuf>) -> InboxResult<Self> {
        if rest_addr.trim().is_empty() {
            return Err(InboxError::InvalidInput(
                "rest_addr cannot be empty".into(),
            ));
        }

        Ok(Self {
            rest_addr,
            fixture_path,
        })
    }

    /// Resolve configuration from raw environment values.
    ///
    /// Missing or blank values fall back to the defaults. Kept separate from [`Self::from_env`]
    /// so it can be exercised without touching the process environment.
    pub fn from_env_values(
        rest_addr: Option<String>,
        fixture_path: Option<String>,
    ) -> InboxResult<Self> {
        let rest_addr = rest_addr
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REST_ADDR.into());
        let fixture_path = fixture_path
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self::new(rest_addr, fixture_path)
    }

    /// Resolve configuration from `INBOX_REST_ADDR` and `INBOX_FIXTURE_PATH`.
    pub fn from_env() -> InboxResult<Self> {
        Self::from_env_values(
            std::env::var(REST_ADDR_ENV).ok(),
            std::env::var(FIXTURE_PATH_ENV).ok(),
        )
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }

    pub fn fixture_path(&self) -> Option<&Path> {
        self.fixture_path.as_deref()
    }
}
