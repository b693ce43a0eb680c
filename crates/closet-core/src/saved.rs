//! Saved outfits for the current session.
//!
//! A saved outfit is a frozen copy: names and image references are copied
//! out of the outfit, so nothing done to the closet afterwards changes it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::category::Category;
use crate::closet::ImageRef;
use crate::error::{ClosetError, Result};
use crate::outfit::{Occasion, Outfit, Weather};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedItem {
    pub category: Category,
    pub name: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedOutfit {
    pub id: Uuid,
    pub occasion: Occasion,
    pub weather: Weather,
    pub items: Vec<SavedItem>,
    pub saved_at: DateTime<Utc>,
}

impl SavedOutfit {
    /// Copy an outfit's items. Notes are not kept.
    pub fn from_outfit(outfit: &Outfit) -> Self {
        let items = outfit
            .items
            .iter()
            .map(|item| SavedItem {
                category: item.category.clone(),
                name: item.entry.name.clone(),
                image: item.entry.image.clone(),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            occasion: outfit.request.occasion.clone(),
            weather: outfit.request.weather.clone(),
            items,
            saved_at: Utc::now(),
        }
    }

    /// "Saved Fit: casual (rainy)"
    pub fn headline(&self) -> String {
        format!("Saved Fit: {} ({})", self.occasion, self.weather)
    }
}

/// Append-only list of saved outfits, oldest first.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SavedOutfits {
    outfits: Vec<SavedOutfit>,
}

impl SavedOutfits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, outfit: &Outfit) -> &SavedOutfit {
        self.outfits.push(SavedOutfit::from_outfit(outfit));
        let saved = &self.outfits[self.outfits.len() - 1];
        tracing::debug!(id = %saved.id, occasion = %saved.occasion, "outfit saved");
        saved
    }

    /// Saved outfit by 1-based position, as shown in listings.
    pub fn get(&self, index: usize) -> Result<&SavedOutfit> {
        index
            .checked_sub(1)
            .and_then(|i| self.outfits.get(i))
            .ok_or(ClosetError::SavedOutfitNotFound { index })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedOutfit> {
        self.outfits.iter()
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::closet::ClosetStore;
    use crate::outfit::{OutfitGenerator, OutfitRequest};

    fn workout_closet() -> ClosetStore {
        let mut store = ClosetStore::new();
        store.insert(Category::Shirts, "tank", ImageRef::new("tank.jpg"));
        store.insert(Category::Trousers, "joggers", ImageRef::new("joggers.jpg"));
        store.insert(Category::Shoes, "runners", ImageRef::new("runners.jpg"));
        store
    }

    #[test]
    fn test_saved_outfit_is_frozen() {
        let mut store = workout_closet();
        let request = OutfitRequest::parse("workout", "sunny");
        let result = OutfitGenerator::new(&store).generate(&request);
        let outfit = result.outfit().unwrap().clone();

        let mut saved = SavedOutfits::new();
        let before = saved.save(&outfit).clone();

        store.insert(Category::Shirts, "hoodie", ImageRef::new("hoodie.jpg"));
        store.insert(Category::Trousers, "shorts", ImageRef::new("shorts.jpg"));

        let after = saved.get(1).unwrap();
        assert_eq!(after, &before);
        let names: Vec<_> = after.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["tank", "joggers", "runners"]);
    }

    #[test]
    fn test_headline_and_order() {
        let store = workout_closet();
        let generator = OutfitGenerator::new(&store);
        let mut saved = SavedOutfits::new();
        assert!(saved.is_empty());

        for occasion in ["workout", "casual"] {
            let result = generator.generate(&OutfitRequest::parse(occasion, "hot"));
            saved.save(result.outfit().unwrap());
        }

        assert_eq!(saved.len(), 2);
        assert_eq!(saved.get(1).unwrap().headline(), "Saved Fit: workout (hot)");
        assert_eq!(saved.get(2).unwrap().headline(), "Saved Fit: casual (hot)");
        assert_eq!(saved.iter().count(), 2);
    }

    #[test]
    fn test_get_out_of_range() {
        let saved = SavedOutfits::new();
        assert!(matches!(
            saved.get(0),
            Err(ClosetError::SavedOutfitNotFound { index: 0 })
        ));
        assert!(saved.get(1).is_err());
    }
}
