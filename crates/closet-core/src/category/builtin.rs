//! Builtin Category Definitions
//!
//! Categories known to the outfit rules, with the synonyms users tend to type.

use super::Category;

/// Builtin categories
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "shirts",
        description: "Tops: shirts, t-shirts, blouses, sweaters.",
        aliases: &[
            "shirt", "top", "tops", "t-shirt", "t-shirts", "tee", "tees", "blouse", "blouses",
            "sweater", "sweaters",
        ],
    },
    BuiltinCategory {
        name: "trousers",
        description: "Bottoms: trousers, jeans, skirts, shorts.",
        aliases: &[
            "trouser", "bottom", "bottoms", "pants", "jeans", "skirt", "skirts", "shorts",
        ],
    },
    BuiltinCategory {
        name: "shoes",
        description: "Footwear of any kind.",
        aliases: &["shoe", "sneaker", "sneakers", "boot", "boots", "footwear"],
    },
    BuiltinCategory {
        name: "outerwear",
        description: "Layers for rain and cold: coats, jackets, raincoats.",
        aliases: &["coat", "coats", "jacket", "jackets", "raincoat", "raincoats"],
    },
    BuiltinCategory {
        name: "dresses",
        description: "One-piece outfits that replace a top and bottom.",
        aliases: &["dress", "gown", "gowns"],
    },
];

/// Static definition of a builtin category
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// Canonical bucket key
    pub name: &'static str,
    /// Short description for listings
    pub description: &'static str,
    /// Normalized synonyms that map onto this category
    pub aliases: &'static [&'static str],
}

impl BuiltinCategory {
    pub fn category(&self) -> Category {
        match self.name {
            "shirts" => Category::Shirts,
            "trousers" => Category::Trousers,
            "shoes" => Category::Shoes,
            "outerwear" => Category::Outerwear,
            "dresses" => Category::Dresses,
            other => Category::Other(other.to_string()),
        }
    }
}

/// Find the builtin category whose name or alias equals a normalized key.
pub(super) fn lookup(key: &str) -> Option<Category> {
    BUILTIN_CATEGORIES
        .iter()
        .find(|b| b.name == key || b.aliases.contains(&key))
        .map(BuiltinCategory::category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories_exist() {
        assert_eq!(BUILTIN_CATEGORIES.len(), 5);
        assert!(BUILTIN_CATEGORIES.iter().all(|b| b.category().is_builtin()));
    }

    #[test]
    fn test_aliases_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for builtin in BUILTIN_CATEGORIES {
            assert!(seen.insert(builtin.name), "duplicate {}", builtin.name);
            for alias in builtin.aliases {
                assert!(seen.insert(*alias), "duplicate alias {}", alias);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("dress"), Some(Category::Dresses));
        assert_eq!(lookup("outerwear"), Some(Category::Outerwear));
        assert_eq!(lookup("hats"), None);
    }
}
