//! # Inbox Client
//!
//! Blocking HTTP client for the inbox REST API.
//!
//! [`HttpRequestSource`] implements [`RequestSource`], so anything that renders an inbox can be
//! pointed at a remote server or at the in-process fixture store interchangeably.

use api_shared::HealthRes;
use inbox_core::constants::{API_URL_ENV, DEFAULT_API_URL, REQUESTS_PATH};
use inbox_core::{InboxRequest, RequestSource, SourceError, SourceResult};
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Timeout applied to every API call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST-backed [`RequestSource`].
#[derive(Debug, Clone)]
pub struct HttpRequestSource {
    client: Client,
    base_url: Url,
}

impl HttpRequestSource {
    /// Creates a client for the API rooted at `base_url` (e.g. `http://localhost:3000`).
    ///
    /// A trailing slash on `base_url` is ignored.
    ///
    /// # Errors
    /// Returns [`SourceError::InvalidBaseUrl`] if `base_url` is empty or not an absolute
    /// `http(s)` style URL, and [`SourceError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> SourceResult<Self> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(SourceError::InvalidBaseUrl(
                "API base URL cannot be empty".into(),
            ));
        }

        let base_url = Url::parse(trimmed)
            .map_err(|e| SourceError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::InvalidBaseUrl(format!(
                "{trimmed}: cannot be used as a base URL"
            )));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Resolve the base URL from an explicit value, then `INBOX_API_URL`, then the default.
    pub fn from_env_or(base_url: Option<String>) -> SourceResult<Self> {
        let base_url = base_url
            .or_else(|| std::env::var(API_URL_ENV).ok())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Calls `GET /health`.
    pub fn health(&self) -> SourceResult<HealthRes> {
        let url = self.endpoint(&["health"]);
        let response = self.send(&url)?;
        decode(ensure_success(response, &url)?)
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn send(&self, url: &Url) -> SourceResult<Response> {
        tracing::debug!("GET {}", url);
        self.client
            .get(url.clone())
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))
    }
}

impl RequestSource for HttpRequestSource {
    fn all_requests(&self) -> SourceResult<Vec<InboxRequest>> {
        let url = self.endpoint(&[requests_segment()]);
        let response = self.send(&url)?;
        decode(ensure_success(response, &url)?)
    }

    fn request_by_id(&self, id: &str) -> SourceResult<Option<InboxRequest>> {
        let url = self.endpoint(&[requests_segment(), id]);
        let response = self.send(&url)?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("request {} not found", id);
            return Ok(None);
        }
        decode(ensure_success(response, &url)?).map(Some)
    }
}

fn requests_segment() -> &'static str {
    REQUESTS_PATH.trim_start_matches('/')
}

fn ensure_success(response: Response, url: &Url) -> SourceResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!("GET {} returned {}", url, status);
        Err(SourceError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> SourceResult<T> {
    response
        .json::<T>()
        .map_err(|e| SourceError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use inbox_core::{Inbox, RequestService, RequestType};

    /// Start the real REST API on an ephemeral port and return its base URL.
    fn spawn_server(service: RequestService) -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        listener.set_nonblocking(true).expect("non-blocking");

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("listener");
                api_rest::serve_on(listener, service).await.expect("serve");
            });
        });

        format!("http://{addr}")
    }

    fn unused_base_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        format!("http://{addr}")
    }

    fn fixture() -> RequestService {
        RequestService::from_fixture().expect("bundled fixture")
    }

    #[test]
    fn trims_trailing_slash() {
        let source = HttpRequestSource::new("http://localhost:3000/").expect("client");
        assert_eq!(source.base_url(), "http://localhost:3000");
    }

    #[test]
    fn explicit_url_wins() {
        let source =
            HttpRequestSource::from_env_or(Some("http://example.test:9000".into())).expect("client");
        assert_eq!(source.base_url(), "http://example.test:9000");
    }

    #[test]
    fn rejects_empty_url() {
        assert!(matches!(
            HttpRequestSource::new("/"),
            Err(SourceError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn rejects_unparseable_url() {
        for base_url in ["localhost:3000/api", "not a url", "mailto:inbox@example.test"] {
            assert!(
                matches!(
                    HttpRequestSource::new(base_url),
                    Err(SourceError::InvalidBaseUrl(_))
                ),
                "{base_url} should be rejected"
            );
        }
    }

    #[test]
    fn id_is_sent_as_a_single_encoded_segment() {
        let source = HttpRequestSource::new("http://localhost:3000/v2/").expect("client");

        let url = source.endpoint(&[requests_segment(), "1?x=2"]);
        assert_eq!(url.as_str(), "http://localhost:3000/v2/requests/1%3Fx=2");

        let url = source.endpoint(&[requests_segment(), "1#top"]);
        assert_eq!(url.as_str(), "http://localhost:3000/v2/requests/1%23top");

        let url = source.endpoint(&[requests_segment(), "1/2"]);
        assert_eq!(url.as_str(), "http://localhost:3000/v2/requests/1%2F2");
    }

    #[test]
    fn ids_with_reserved_characters_are_not_found() {
        let base_url = spawn_server(fixture());
        let source = HttpRequestSource::new(base_url).expect("client");

        for id in ["1?x=2", "1#top", "1/2", "3/"] {
            assert!(
                source.request_by_id(id).expect("request by id").is_none(),
                "{id:?} should not resolve to another request"
            );
            assert!(fixture().request_by_id(id).expect("in-process").is_none());
        }
    }

    #[test]
    fn fetches_all_requests() {
        let base_url = spawn_server(fixture());
        let source = HttpRequestSource::new(base_url).expect("client");

        let requests = source.all_requests().expect("all requests");
        assert_eq!(requests, fixture().list_requests());
    }

    #[test]
    fn fetches_one_request() {
        let base_url = spawn_server(fixture());
        let source = HttpRequestSource::new(base_url).expect("client");

        let request = source
            .request_by_id("3")
            .expect("request by id")
            .expect("request 3 exists");
        assert_eq!(request.kind, RequestType::LabReport);
    }

    #[test]
    fn not_found_is_none() {
        let base_url = spawn_server(fixture());
        let source = HttpRequestSource::new(base_url).expect("client");

        assert!(source.request_by_id("missing").expect("request by id").is_none());
    }

    #[test]
    fn health_check() {
        let base_url = spawn_server(fixture());
        let source = HttpRequestSource::new(base_url).expect("client");

        assert!(source.health().expect("health").ok);
    }

    #[test]
    fn unknown_route_is_a_status_error() {
        let base_url = spawn_server(fixture());
        let source = HttpRequestSource::new(format!("{base_url}/v2")).expect("client");

        match source.all_requests() {
            Err(SourceError::Status { status, url }) => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/v2/requests"));
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn unreachable_server_is_a_network_error() {
        let source = HttpRequestSource::new(unused_base_url()).expect("client");

        let err = source.all_requests().expect_err("no server");
        assert!(matches!(err, SourceError::Network(_)));
    }

    #[test]
    fn inbox_over_http_matches_in_process_inbox() {
        let base_url = spawn_server(fixture());
        let source = HttpRequestSource::new(base_url).expect("client");
        let now = chrono_now();

        let remote = Inbox::load(&source, now);
        let local = Inbox::load(&fixture(), now);
        assert_eq!(remote, local);
    }

    #[test]
    fn inbox_over_unreachable_server_reports_error() {
        let source = HttpRequestSource::new(unused_base_url()).expect("client");
        let inbox = Inbox::load(&source, chrono_now());

        assert!(inbox.error().is_some());
        assert!(inbox.requests().is_empty());
    }

    fn chrono_now() -> chrono::DateTime<chrono::Utc> {
        chrono::Utc::now()
    }
}
