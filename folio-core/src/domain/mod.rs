//! Domain types for the portfolio gallery.

mod entry;
mod user;

pub mod taxonomy;

pub use entry::{Comment, Like, OgpData, PortfolioEntry};
pub use user::User;
