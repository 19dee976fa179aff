//! Folio Core — domain types and the list pipeline for the portfolio gallery.
//!
//! This crate contains everything that does not touch the network:
//! - Domain types (entries, comments, likes, users, OGP preview data)
//! - The fixed filter taxonomy (industries, experience brackets, colors)
//! - Filter engine: criteria applied conjunctively over the entry list
//! - Paginator: page slicing and the page-number window rule
//! - List view state tying criteria and page together
//!
//! The pipeline is: full entry list → filter → paginate → render. Callers
//! own the list (fetched elsewhere); everything here is pure.

pub mod domain;
pub mod filter;
pub mod page;
pub mod view;

pub use domain::{Comment, Like, OgpData, PortfolioEntry, User};
pub use filter::{filter_entries, FilterCriteria};
pub use page::{page_labels, page_slice, total_pages, PageLabel, PageState, Pagination, PAGE_SIZE};
pub use view::{ListView, PageView};
