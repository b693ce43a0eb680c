pub mod category;
pub mod closet;
pub mod config;
pub mod error;
pub mod intake;
pub mod outfit;
pub mod saved;

pub use category::{
    BuiltinCategory, CategoriesConfig, Category, CategoryVocabulary, BUILTIN_CATEGORIES,
};
pub use closet::{CatalogEntry, ClosetStore, ImageRef};
pub use config::{Config, DEFAULT_IMAGE_EXTENSIONS};
pub use error::{ClosetError, Result};
pub use intake::{
    collect_images, is_image, load_closet_dir, IntakeQueue, LoadSummary, PendingImage,
};
pub use outfit::{
    Occasion, Outfit, OutfitGenerator, OutfitItem, OutfitRequest, OutfitResult, Policy,
    RuleSummary, Weather,
};
pub use saved::{SavedItem, SavedOutfit, SavedOutfits};
