//! # Outfit Module
//!
//! Turns an occasion and the weather into an outfit drawn from the closet.
//!
//! - `request`: occasion/weather vocabulary
//! - `policy`: the static rule table
//! - `generator`: draws one item per required category
//!
//! ```rust
//! use closet_core::category::Category;
//! use closet_core::closet::{ClosetStore, ImageRef};
//! use closet_core::outfit::{OutfitGenerator, OutfitRequest, OutfitResult};
//!
//! let mut store = ClosetStore::new();
//! store.insert(Category::Shirts, "Linen shirt", ImageRef::new("shirt.jpg"));
//! store.insert(Category::Shoes, "Loafers", ImageRef::new("loafers.jpg"));
//!
//! let result = OutfitGenerator::new(&store).generate(&OutfitRequest::parse("casual", "sunny"));
//! assert!(matches!(result, OutfitResult::Incomplete { missing: Category::Trousers, .. }));
//! ```

mod generator;
mod policy;
mod request;

pub use generator::{Outfit, OutfitGenerator, OutfitItem, OutfitResult};
pub use policy::{
    policy, rules, Policy, RuleSummary, CASUAL_NOTES, FORMAL_DRESS_NOTES, FORMAL_SEPARATES_NOTES,
    LAYERED_NOTES, WORKOUT_NOTES,
};
pub use request::{Occasion, OutfitRequest, Weather};
