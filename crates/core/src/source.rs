//! Data-access seam between the inbox and wherever requests come from.

use crate::{InboxRequest, SourceResult};

/// Synchronous access to inbox requests.
///
/// Implemented by the in-process [`crate::RequestService`] and by the HTTP client in
/// `inbox-client`. An unknown id is `Ok(None)`; `Err` is reserved for failing to reach or
/// understand the source.
pub trait RequestSource {
    /// Fetch every request, in source order.
    fn all_requests(&self) -> SourceResult<Vec<InboxRequest>>;

    /// Fetch one request by id.
    fn request_by_id(&self, id: &str) -> SourceResult<Option<InboxRequest>>;
}

impl<S: RequestSource + ?Sized> RequestSource for &S {
    fn all_requests(&self) -> SourceResult<Vec<InboxRequest>> {
        (**self).all_requests()
    }

    fn request_by_id(&self, id: &str) -> SourceResult<Option<InboxRequest>> {
        (**self).request_by_id(id)
    }
}
