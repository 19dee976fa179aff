//! Folio Client — the API-consuming half of the gallery.
//!
//! Everything that talks to the backend lives here:
//! - `api` — the `GalleryApi` trait, its HTTP implementation, and wire DTOs
//! - `normalize` — the single parse-or-fallback step at the store boundary
//! - `session` — login/logout/restore with on-disk token persistence
//! - `store` — the in-memory entry list with refetch-after-mutation semantics
//!
//! There is deliberately no retry, backoff, or request coordination: a
//! failed call surfaces one error and prior state stands; the user retries
//! manually. Consistency after mutations comes from a full refetch, never
//! from optimistic local patches.

pub mod api;
pub mod normalize;
pub mod session;
pub mod store;
pub mod token_store;

pub use api::{ApiError, GalleryApi, HttpApi, LoginResponse, NewEntry, RawEntry};
pub use session::Session;
pub use store::PortfolioStore;
pub use token_store::TokenStore;
