//! The closet: catalog entries grouped into category buckets.

mod entry;
mod store;

pub use entry::{CatalogEntry, ImageRef};
pub use store::ClosetStore;
