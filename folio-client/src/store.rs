//! Portfolio store — the in-memory entry list and its mutation protocol.
//!
//! The store never patches entries locally. Every successful mutation is
//! followed by an unconditional full refetch, trading an extra round trip
//! for guaranteed consistency with the server (no optimistic update, no
//! partial merge). A failed mutation leaves the list exactly as it was.
//!
//! Single consumer, single thread: if two mutations race at the caller,
//! each triggers its own refetch and the last one to complete wins. The
//! store does not deduplicate rapid repeated likes; (user, entry)
//! uniqueness is the server's job.

use folio_core::PortfolioEntry;

use crate::api::{ApiError, GalleryApi, NewEntry};
use crate::normalize::normalize_entries;

#[derive(Debug, Default)]
pub struct PortfolioStore {
    entries: Vec<PortfolioEntry>,
}

impl PortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, in server order.
    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    /// Replace the whole list from `GET /portfolios`, normalizing each raw
    /// entry exactly once at this boundary.
    pub fn fetch_all(&mut self, api: &dyn GalleryApi) -> Result<(), ApiError> {
        let raw = api.fetch_portfolios()?;
        self.entries = normalize_entries(raw);
        Ok(())
    }

    /// Like an entry, then reconcile by refetching.
    pub fn like(&mut self, api: &dyn GalleryApi, entry_id: u64) -> Result<(), ApiError> {
        api.like(entry_id)?;
        self.fetch_all(api)
    }

    /// Comment on an entry, then reconcile by refetching.
    pub fn comment(
        &mut self,
        api: &dyn GalleryApi,
        entry_id: u64,
        content: &str,
    ) -> Result<(), ApiError> {
        api.comment(entry_id, content)?;
        self.fetch_all(api)
    }

    /// Submit a new entry, then reconcile by refetching.
    pub fn create(&mut self, api: &dyn GalleryApi, entry: &NewEntry) -> Result<(), ApiError> {
        entry.validate()?;
        api.create_portfolio(entry)?;
        self.fetch_all(api)
    }
}
