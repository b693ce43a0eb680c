use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::category::Category;

/// Opaque reference to an item's image (file path, URL or data URL).
///
/// The closet never opens or decodes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single clothing item in the closet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub image: ImageRef,
    pub added_at: DateTime<Utc>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, category: Category, image: ImageRef) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            image,
            added_at: Utc::now(),
        }
    }
}
