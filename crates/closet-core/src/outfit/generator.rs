//! Outfit generation: realize a policy against the live closet.

use rand::Rng;
use serde::Serialize;

use super::policy::{policy, Policy};
use super::request::OutfitRequest;
use crate::category::Category;
use crate::closet::{CatalogEntry, ClosetStore};

/// One drawn item of an outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutfitItem {
    pub category: Category,
    pub entry: CatalogEntry,
}

/// A complete outfit: one entry per required category, in policy order.
///
/// Entries are copies, so later changes to the closet do not show up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outfit {
    pub request: OutfitRequest,
    pub items: Vec<OutfitItem>,
    pub notes: String,
}

impl Outfit {
    pub fn get(&self, category: &Category) -> Option<&CatalogEntry> {
        self.items
            .iter()
            .find(|item| &item.category == category)
            .map(|item| &item.entry)
    }

    pub fn categories(&self) -> Vec<&Category> {
        self.items.iter().map(|item| &item.category).collect()
    }
}

/// Outcome of a generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutfitResult {
    /// Every required category was filled.
    Complete(Outfit),
    /// The first required category (in policy order) with nothing in it.
    Incomplete {
        request: OutfitRequest,
        missing: Category,
    },
    /// No rule exists for this occasion.
    Undefined { request: OutfitRequest },
}

impl OutfitResult {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    pub fn outfit(&self) -> Option<&Outfit> {
        match self {
            Self::Complete(outfit) => Some(outfit),
            _ => None,
        }
    }
}

/// Draws outfits from a borrowed closet.
///
/// The shared borrow keeps the closet unchanged for the whole generation.
pub struct OutfitGenerator<'a> {
    store: &'a ClosetStore,
}

impl<'a> OutfitGenerator<'a> {
    pub fn new(store: &'a ClosetStore) -> Self {
        Self { store }
    }

    /// Policy for the request given the closet's current contents.
    pub fn policy_for(&self, request: &OutfitRequest) -> Option<Policy> {
        policy(request, self.store.has_items(&Category::Dresses))
    }

    /// Generate an outfit using the thread-local RNG.
    pub fn generate(&self, request: &OutfitRequest) -> OutfitResult {
        self.generate_with(request, &mut rand::thread_rng())
    }

    /// Generate an outfit using the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        request: &OutfitRequest,
        rng: &mut R,
    ) -> OutfitResult {
        let Some(policy) = self.policy_for(request) else {
            tracing::debug!(occasion = %request.occasion, weather = %request.weather, "no rule for request");
            return OutfitResult::Undefined {
                request: request.clone(),
            };
        };

        let mut items = Vec::with_capacity(policy.categories.len());
        for category in policy.categories {
            match self.store.sample_with(&category, rng) {
                Some(entry) => items.push(OutfitItem {
                    entry: entry.clone(),
                    category,
                }),
                None => {
                    tracing::debug!(occasion = %request.occasion, missing = %category, "outfit incomplete");
                    return OutfitResult::Incomplete {
                        request: request.clone(),
                        missing: category,
                    };
                }
            }
        }

        tracing::debug!(occasion = %request.occasion, weather = %request.weather, items = items.len(), "outfit generated");
        OutfitResult::Complete(Outfit {
            request: request.clone(),
            items,
            notes: policy.notes.to_string(),
        })
    }
}
