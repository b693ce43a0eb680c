//! # Category Module
//!
//! Clothing categories and the rules for turning free-form user input
//! ("Top", " t shirt ", "Jeans") into a single bucket key.
//!
//! ## Normalization
//!
//! 1. trim, case-fold, join words with `-`
//! 2. alias lookup (`top` -> `shirts`, `jeans` -> `trousers`, ...)
//! 3. pluralize by appending `s` unless the word already ends in `s`
//! 4. anything unrecognized becomes [`Category::Other`]
//!
//! ## Module layout
//!
//! - `builtin`: builtin categories and their aliases
//! - `vocabulary`: builtin aliases merged with user configuration
//!
//! ## Example
//!
//! ```rust
//! use closet_core::category::{Category, CategoryVocabulary};
//!
//! assert_eq!(Category::parse("Top"), Some(Category::Shirts));
//! assert_eq!(Category::parse("scarf"), Some(Category::Other("scarfs".into())));
//! assert_eq!(Category::parse("   "), None);
//!
//! let vocab = CategoryVocabulary::builtin();
//! assert_eq!(vocab.resolve("Sneakers"), Some(Category::Shoes));
//! ```

mod builtin;
mod vocabulary;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ClosetError;

pub use builtin::{BuiltinCategory, BUILTIN_CATEGORIES};
pub use vocabulary::{CategoriesConfig, CategoryVocabulary};

/// A clothing category. Each category owns one bucket in the closet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Category {
    Shirts,
    Trousers,
    Shoes,
    Outerwear,
    Dresses,
    /// Any category outside the builtin set, stored by its normalized key.
    Other(String),
}

impl Category {
    /// Normalize free-form input into a category using the builtin aliases.
    ///
    /// Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = normalize_key(raw)?;
        if let Some(category) = builtin::lookup(&key) {
            return Some(category);
        }
        let plural = pluralize(&key);
        Some(builtin::lookup(&plural).unwrap_or(Category::Other(plural)))
    }

    /// Canonical bucket key (plural, lower-case).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Shirts => "shirts",
            Self::Trousers => "trousers",
            Self::Shoes => "shoes",
            Self::Outerwear => "outerwear",
            Self::Dresses => "dresses",
            Self::Other(key) => key,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Capitalized form for display ("Shirts").
    pub fn label(&self) -> String {
        let key = self.as_str();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ClosetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s).ok_or_else(|| ClosetError::InvalidCategory {
            input: s.to_string(),
        })
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

/// Trim, case-fold and join words with `-`.
pub(crate) fn normalize_key(raw: &str) -> Option<String> {
    let words: Vec<String> = raw
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    if words.is_empty() {
        return None;
    }
    Some(words.join("-"))
}

pub(crate) fn pluralize(key: &str) -> String {
    if key.ends_with('s') {
        key.to_string()
    } else {
        format!("{}s", key)
    }
}
