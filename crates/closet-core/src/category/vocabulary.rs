//! Category Vocabulary
//!
//! Runtime alias table. Builtin aliases merged with `[categories.aliases]`
//! from `config.toml`.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{normalize_key, pluralize, Category};

/// Resolves user input to categories, honoring configured aliases first.
#[derive(Debug, Clone, Default)]
pub struct CategoryVocabulary {
    aliases: HashMap<String, Category>,
}

impl CategoryVocabulary {
    /// Builtin aliases only
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Add configured aliases.
    ///
    /// - an alias for an existing word overrides the builtin mapping
    /// - an alias also covers its plural form (`hoodie` -> `hoodies`)
    /// - aliases with a blank key or target are ignored
    pub fn with_config(mut self, config: &CategoriesConfig) -> Self {
        for (alias, target) in &config.aliases {
            let (Some(key), Some(category)) = (normalize_key(alias), Category::parse(target))
            else {
                tracing::warn!(alias = %alias, target = %target, "ignoring blank category alias");
                continue;
            };
            self.aliases.insert(pluralize(&key), category.clone());
            self.aliases.insert(key, category);
        }
        self
    }

    /// Resolve raw input into a category.
    pub fn resolve(&self, raw: &str) -> Option<Category> {
        let key = normalize_key(raw)?;
        if let Some(category) = self
            .aliases
            .get(&key)
            .or_else(|| self.aliases.get(&pluralize(&key)))
        {
            return Some(category.clone());
        }
        Category::parse(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// `[categories]` section of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesConfig {
    /// alias -> category
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}
