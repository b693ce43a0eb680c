use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::{CategoriesConfig, Category, CategoryVocabulary, BUILTIN_CATEGORIES};
use crate::closet::ClosetStore;
use crate::error::{ClosetError, Result};

const CONFIG_FILE: &str = "config.toml";
const ALIAS_KEY_PREFIX: &str = "categories.aliases.";

/// Image file extensions accepted by intake
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# closet configuration file
# Location: ~/.closet/config.toml

[closet]
# Categories that start out as empty buckets in every session
# Default: ["shirts", "trousers", "shoes", "outerwear", "dresses"]
seed_categories = ["shirts", "trousers", "shoes", "outerwear", "dresses"]

[intake]
# File extensions treated as clothing images (case-insensitive)
# Default: ["jpg", "jpeg", "png", "gif", "webp", "bmp"]
extensions = ["jpg", "jpeg", "png", "gif", "webp", "bmp"]

[categories.aliases]
# Extra words mapped onto a category
# Example: hoodie = "outerwear"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub closet: ClosetConfig,

    #[serde(default)]
    pub intake: IntakeConfig,

    #[serde(default)]
    pub categories: CategoriesConfig,
}

/// Closet-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClosetConfig {
    /// Buckets created empty at session start
    #[serde(default = "default_seed_categories")]
    pub seed_categories: Vec<String>,
}

fn default_seed_categories() -> Vec<String> {
    BUILTIN_CATEGORIES
        .iter()
        .map(|b| b.name.to_string())
        .collect()
}

impl Default for ClosetConfig {
    fn default() -> Self {
        Self {
            seed_categories: default_seed_categories(),
        }
    }
}

/// Intake-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntakeConfig {
    /// Accepted image extensions
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    DEFAULT_IMAGE_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut config: Config = toml::from_str(&content).map_err(|e| ClosetError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        config.intake.extensions = normalize_extensions(config.intake.extensions);

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "closet.seed_categories" => Some(format!("{:?}", self.closet.seed_categories)),
            "intake.extensions" => Some(format!("{:?}", self.intake.extensions)),
            _ => key
                .strip_prefix(ALIAS_KEY_PREFIX)
                .and_then(|alias| self.categories.aliases.get(alias))
                .cloned(),
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "closet.seed_categories" => {
                self.closet.seed_categories = parse_string_list(value);
                Ok(())
            }
            "intake.extensions" => {
                self.intake.extensions = normalize_extensions(parse_string_list(value));
                Ok(())
            }
            _ => match key.strip_prefix(ALIAS_KEY_PREFIX) {
                Some(alias) if !alias.is_empty() => {
                    if Category::parse(value).is_none() {
                        return Err(ClosetError::InvalidCategory {
                            input: value.to_string(),
                        });
                    }
                    self.categories
                        .aliases
                        .insert(alias.to_string(), value.trim().to_string());
                    Ok(())
                }
                _ => Err(ClosetError::ConfigKeyNotFound {
                    key: key.to_string(),
                }),
            },
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            (
                "closet.seed_categories".to_string(),
                format!("{:?}", self.closet.seed_categories),
            ),
            (
                "intake.extensions".to_string(),
                format!("{:?}", self.intake.extensions),
            ),
        ];
        for (alias, target) in &self.categories.aliases {
            entries.push((format!("{}{}", ALIAS_KEY_PREFIX, alias), target.clone()));
        }
        entries
    }

    /// Builtin aliases plus the configured ones
    pub fn vocabulary(&self) -> CategoryVocabulary {
        CategoryVocabulary::builtin().with_config(&self.categories)
    }

    /// Fresh closet with the seed categories as empty buckets
    pub fn new_store(&self) -> ClosetStore {
        let vocabulary = self.vocabulary();
        let mut store = ClosetStore::new();
        for raw in &self.closet.seed_categories {
            match vocabulary.resolve(raw) {
                Some(category) => store.ensure_bucket(category),
                None => tracing::warn!(category = %raw, "skipping blank seed category"),
            }
        }
        store
    }
}

/// Lower-case, strip leading dots, drop blanks and duplicates
fn normalize_extensions(extensions: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(extensions.len());
    for ext in extensions {
        let ext = ext.trim().trim_start_matches('.').to_lowercase();
        if !ext.is_empty() && !normalized.contains(&ext) {
            normalized.push(ext);
        }
    }
    normalized
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
