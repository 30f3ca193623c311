//! Web page handlers.

pub mod page;

pub use page::{listing_page_handler, organization_page_handler};
