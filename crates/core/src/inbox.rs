//! Inbox screen state: one load from a [`RequestSource`] and the views derived from it.

use crate::constants::{EMPTY_INBOX_MESSAGE, LOAD_FAILED_MESSAGE};
use crate::{DerivedView, InboxRequest, RequestPresenter, RequestSource};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// Result of loading the inbox once.
///
/// A failed load and an empty inbox are distinct: the former carries `error`, the latter has
/// no error and no requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inbox {
    requests: Vec<InboxRequest>,
    error: Option<String>,
    last_sync: Option<DateTime<Utc>>,
}

impl Inbox {
    /// Load every request from `source`, stamping `now` as the sync time on success.
    pub fn load<S: RequestSource + ?Sized>(source: &S, now: DateTime<Utc>) -> Self {
        match source.all_requests() {
            Ok(requests) => {
                tracing::debug!("inbox loaded {} requests", requests.len());
                Self {
                    requests,
                    error: None,
                    last_sync: Some(now),
                }
            }
            Err(e) => {
                tracing::error!("Error loading requests: {e}");
                Self {
                    requests: Vec::new(),
                    error: Some(LOAD_FAILED_MESSAGE.into()),
                    last_sync: None,
                }
            }
        }
    }

    pub fn requests(&self) -> &[InboxRequest] {
        &self.requests
    }

    /// User-facing failure message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.last_sync
    }

    /// Loaded successfully but nothing to show.
    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.requests.is_empty()
    }

    /// Placeholder text for an empty inbox.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_INBOX_MESSAGE)
    }

    pub fn sync_time_display(&self, now: DateTime<Utc>) -> String {
        RequestPresenter::sync_time_display(self.last_sync, now)
    }

    /// One view per request, in load order, with timestamps in the local timezone.
    pub fn views(&self, now: DateTime<Utc>) -> Vec<DerivedView> {
        self.requests
            .iter()
            .map(|request| DerivedView::new(request, now))
            .collect()
    }

    pub fn views_in<Tz>(&self, now: DateTime<Utc>, tz: &Tz) -> Vec<DerivedView>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.requests
            .iter()
            .map(|request| DerivedView::with_timezone(request, now, tz))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RequestService, SourceError, SourceResult};
    use chrono::Duration;

    struct FailingSource;

    impl RequestSource for FailingSource {
        fn all_requests(&self) -> SourceResult<Vec<InboxRequest>> {
            Err(SourceError::Network("connection refused".into()))
        }

        fn request_by_id(&self, _id: &str) -> SourceResult<Option<InboxRequest>> {
            Err(SourceError::Network("connection refused".into()))
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 8, 12, 0, 0)
            .single()
            .expect("valid instant")
    }

    #[test]
    fn successful_load_records_sync_time() {
        let service = RequestService::from_fixture().expect("bundled fixture");
        let inbox = Inbox::load(&service, now());

        assert_eq!(inbox.requests().len(), service.len());
        assert!(inbox.error().is_none());
        assert!(!inbox.is_empty());
        assert_eq!(inbox.last_sync(), Some(now()));
        assert_eq!(inbox.sync_time_display(now()), "Just now");
        assert_eq!(
            inbox.sync_time_display(now() + Duration::minutes(5)),
            "5 min. ago"
        );
    }

    #[test]
    fn failed_load_reports_error() {
        let inbox = Inbox::load(&FailingSource, now());

        assert!(inbox.requests().is_empty());
        assert_eq!(inbox.error(), Some(LOAD_FAILED_MESSAGE));
        assert!(!inbox.is_empty());
        assert!(inbox.empty_message().is_none());
        assert!(inbox.last_sync().is_none());
        assert_eq!(inbox.sync_time_display(now()), "");
        assert!(inbox.views(now()).is_empty());
    }

    #[test]
    fn empty_source_is_not_an_error() {
        let service = RequestService::from_json("[]").expect("empty list");
        let inbox = Inbox::load(&service, now());

        assert!(inbox.is_empty());
        assert!(inbox.error().is_none());
        assert_eq!(inbox.empty_message(), Some("No requests found"));
    }

    #[test]
    fn views_follow_load_order() {
        let service = RequestService::from_fixture().expect("bundled fixture");
        let inbox = Inbox::load(&service, now());

        let view_ids: Vec<_> = inbox
            .views_in(now(), &Utc)
            .into_iter()
            .map(|v| v.request_id)
            .collect();
        let request_ids: Vec<_> = inbox.requests().iter().map(|r| r.id.clone()).collect();
        assert_eq!(view_ids, request_ids);
    }
}
