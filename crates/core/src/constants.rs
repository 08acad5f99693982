//! Constants used throughout the inbox core crate.
//!
//! Display strings and asset paths live here so the presenter tables and the tests agree on a
//! single spelling.

/// Default bind address for the REST API.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Default base URL the client uses to reach the REST API.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Environment variable overriding the REST bind address.
pub const REST_ADDR_ENV: &str = "INBOX_REST_ADDR";

/// Environment variable pointing at a JSON request fixture to serve instead of the bundled one.
pub const FIXTURE_PATH_ENV: &str = "INBOX_FIXTURE_PATH";

/// Environment variable overriding the client's API base URL.
pub const API_URL_ENV: &str = "INBOX_API_URL";

/// Path segment for the request collection.
pub const REQUESTS_PATH: &str = "/requests";

/// Body message for an unknown request id.
pub const REQUEST_NOT_FOUND_MESSAGE: &str = "Request not found";

/// Shown when the inbox could not load its requests.
pub const LOAD_FAILED_MESSAGE: &str =
    "Failed to load requests. Please ensure the backend server is running.";

/// Shown when the inbox loaded successfully but holds nothing.
pub const EMPTY_INBOX_MESSAGE: &str = "No requests found";

/// Returned whenever initials cannot be derived.
pub const UNKNOWN_INITIALS: &str = "??";

/// Title tokens stripped from the front of a clinician name, compared case-insensitively.
pub const CLINICIAN_TITLES: &[&str] = &["dr.", "dr", "md", "m.d."];

/// Estimates at or above this many seconds are shown as open-ended minute counts.
pub const OPEN_ENDED_ESTIMATE_SECS: u64 = 1200;
