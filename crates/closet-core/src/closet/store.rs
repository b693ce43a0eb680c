//! Closet Store
//!
//! Category buckets of catalog entries with uniform random retrieval.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use super::entry::{CatalogEntry, ImageRef};
use crate::category::{Category, BUILTIN_CATEGORIES};

/// In-memory closet: one ordered bucket per category.
///
/// Lives for a session. Absent and empty buckets behave the same when
/// sampling.
#[derive(Debug, Clone, Default)]
pub struct ClosetStore {
    buckets: HashMap<Category, Vec<CatalogEntry>>,
}

impl ClosetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with an empty bucket for every builtin category.
    pub fn with_builtin_buckets() -> Self {
        let mut store = Self::new();
        for builtin in BUILTIN_CATEGORIES {
            store.ensure_bucket(builtin.category());
        }
        store
    }

    /// Create an empty bucket if the category has none yet.
    pub fn ensure_bucket(&mut self, category: Category) {
        self.buckets.entry(category).or_default();
    }

    /// Append a new entry to the category's bucket, creating it if absent.
    pub fn insert(
        &mut self,
        category: Category,
        name: impl Into<String>,
        image: ImageRef,
    ) -> &CatalogEntry {
        let entry = CatalogEntry::new(name, category.clone(), image);
        tracing::debug!(category = %category, name = %entry.name, "item added to closet");

        let bucket = self.buckets.entry(category).or_default();
        bucket.push(entry);
        &bucket[bucket.len() - 1]
    }

    /// Pick one entry uniformly at random using the thread-local RNG.
    pub fn sample(&self, category: &Category) -> Option<&CatalogEntry> {
        self.sample_with(category, &mut rand::thread_rng())
    }

    /// Pick one entry uniformly at random using the given RNG.
    ///
    /// Returns `None` when the bucket is absent or empty.
    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        category: &Category,
        rng: &mut R,
    ) -> Option<&CatalogEntry> {
        self.buckets.get(category)?.choose(rng)
    }

    /// Entries in insertion order (empty slice for an unknown category).
    pub fn entries(&self, category: &Category) -> &[CatalogEntry] {
        self.buckets.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn bucket_len(&self, category: &Category) -> usize {
        self.entries(category).len()
    }

    pub fn has_items(&self, category: &Category) -> bool {
        self.bucket_len(category) > 0
    }

    pub fn has_bucket(&self, category: &Category) -> bool {
        self.buckets.contains_key(category)
    }

    /// All known categories, sorted by key.
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<_> = self.buckets.keys().collect();
        categories.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        categories
    }

    /// Total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn img(name: &str) -> ImageRef {
        ImageRef::new(format!("images/{}.jpg", name))
    }

    #[test]
    fn test_insert_creates_bucket() {
        let mut store = ClosetStore::new();
        assert!(!store.has_bucket(&Category::Shirts));

        let entry = store.insert(Category::Shirts, "Oxford", img("oxford"));
        assert_eq!(entry.name, "Oxford");
        assert_eq!(entry.category, Category::Shirts);

        assert!(store.has_bucket(&Category::Shirts));
        assert_eq!(store.bucket_len(&Category::Shirts), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_unknown_category() {
        let mut store = ClosetStore::new();
        let hats = Category::Other("hats".to_string());
        store.insert(hats.clone(), "Beanie", img("beanie"));
        assert_eq!(store.entries(&hats)[0].name, "Beanie");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = ClosetStore::new();
        for name in ["a", "b", "c"] {
            store.insert(Category::Shoes, name, img(name));
        }
        let names: Vec<_> = store
            .entries(&Category::Shoes)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sample_absent_and_empty_are_not_found() {
        let mut store = ClosetStore::new();
        assert!(store.sample(&Category::Dresses).is_none());

        store.ensure_bucket(Category::Dresses);
        assert!(store.has_bucket(&Category::Dresses));
        assert!(store.sample(&Category::Dresses).is_none());
    }

    #[test]
    fn test_sample_single_entry() {
        let mut store = ClosetStore::new();
        store.insert(Category::Trousers, "Chinos", img("chinos"));
        for _ in 0..10 {
            assert_eq!(store.sample(&Category::Trousers).unwrap().name, "Chinos");
        }
    }

    #[test]
    fn test_sample_is_uniform() {
        let mut store = ClosetStore::new();
        let names = ["red", "green", "blue", "black"];
        for name in names {
            store.insert(Category::Shirts, name, img(name));
        }

        let mut rng = StdRng::seed_from_u64(7);
        let draws = 40_000;
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..draws {
            let entry = store.sample_with(&Category::Shirts, &mut rng).unwrap();
            *counts.entry(entry.name.clone()).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), names.len());
        let expected = 1.0 / names.len() as f64;
        for (name, count) in counts {
            let freq = count as f64 / draws as f64;
            assert!(
                (freq - expected).abs() < 0.02,
                "{} drawn with frequency {}",
                name,
                freq
            );
        }
    }

    #[test]
    fn test_builtin_buckets() {
        let store = ClosetStore::with_builtin_buckets();
        assert!(store.is_empty());
        assert_eq!(store.categories().len(), BUILTIN_CATEGORIES.len());
        assert!(store.has_bucket(&Category::Outerwear));
        assert!(!store.has_items(&Category::Outerwear));
    }

    #[test]
    fn test_categories_sorted() {
        let mut store = ClosetStore::new();
        store.insert(Category::Trousers, "a", img("a"));
        store.insert(Category::Dresses, "b", img("b"));
        store.insert(Category::Other("hats".into()), "c", img("c"));
        let keys: Vec<_> = store.categories().iter().map(|c| c.as_str()).collect();
        assert_eq!(keys, vec!["dresses", "hats", "trousers"]);
    }
}
