//! Outfit policy: which categories an occasion needs, and why.
//!
//! | occasion | categories                                   | notes                     |
//! |----------|----------------------------------------------|---------------------------|
//! | casual   | shirts, trousers, shoes (+ outerwear if rainy/cold) | everyday / layered |
//! | formal   | dresses, shoes; or shirts, trousers, shoes    | dress / separates         |
//! | workout  | shirts, trousers, shoes                      | gym                       |
//!
//! Any other occasion has no policy.

use serde::Serialize;

use super::request::{Occasion, OutfitRequest, Weather};
use crate::category::Category;

pub const CASUAL_NOTES: &str = "A simple, comfortable, and classic look for day-to-day.";
pub const LAYERED_NOTES: &str = "Layers added for warmth or rain protection.";
pub const FORMAL_DRESS_NOTES: &str = "Elegance for a formal setting.";
pub const FORMAL_SEPARATES_NOTES: &str = "A polished top and bottom ensemble.";
pub const WORKOUT_NOTES: &str = "Ready for the gym! Comfort and mobility first.";

/// Required categories, in draw order, plus the note shown with the outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub categories: Vec<Category>,
    pub notes: &'static str,
}

impl Policy {
    fn new(categories: Vec<Category>, notes: &'static str) -> Self {
        Self { categories, notes }
    }
}

fn separates() -> Vec<Category> {
    vec![Category::Shirts, Category::Trousers, Category::Shoes]
}

/// Resolve the policy for a request.
///
/// `dresses_available` picks between the two formal variants and is
/// ignored otherwise. Returns `None` when no rule covers the occasion.
pub fn policy(request: &OutfitRequest, dresses_available: bool) -> Option<Policy> {
    match request.occasion {
        Occasion::Casual if request.weather.needs_layer() => {
            let mut categories = separates();
            categories.push(Category::Outerwear);
            Some(Policy::new(categories, LAYERED_NOTES))
        }
        Occasion::Casual => Some(Policy::new(separates(), CASUAL_NOTES)),
        Occasion::Formal if dresses_available => Some(Policy::new(
            vec![Category::Dresses, Category::Shoes],
            FORMAL_DRESS_NOTES,
        )),
        Occasion::Formal => Some(Policy::new(separates(), FORMAL_SEPARATES_NOTES)),
        Occasion::Workout => Some(Policy::new(separates(), WORKOUT_NOTES)),
        Occasion::Other(_) => None,
    }
}

/// One row of the rule table, for listings.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    pub occasion: Occasion,
    pub condition: &'static str,
    pub policy: Policy,
}

/// Every defined rule, derived from [`policy`].
pub fn rules() -> Vec<RuleSummary> {
    let rows = [
        (Occasion::Casual, Weather::Sunny, false, "weather not rainy/cold"),
        (Occasion::Casual, Weather::Rainy, false, "weather rainy or cold"),
        (Occasion::Formal, Weather::Sunny, true, "dresses in closet"),
        (Occasion::Formal, Weather::Sunny, false, "no dresses in closet"),
        (Occasion::Workout, Weather::Sunny, false, "any weather"),
    ];

    rows.into_iter()
        .filter_map(|(occasion, weather, dresses, condition)| {
            let request = OutfitRequest::new(occasion.clone(), weather);
            policy(&request, dresses).map(|policy| RuleSummary {
                occasion,
                condition,
                policy,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(occasion: &str, weather: &str, dresses: bool) -> Option<Policy> {
        policy(&OutfitRequest::parse(occasion, weather), dresses)
    }

    #[test]
    fn test_casual_rainy_adds_outerwear() {
        for dresses in [true, false] {
            let policy = resolve("casual", "rainy", dresses).unwrap();
            assert_eq!(
                policy.categories,
                vec![
                    Category::Shirts,
                    Category::Trousers,
                    Category::Shoes,
                    Category::Outerwear
                ]
            );
            assert_eq!(policy.notes, LAYERED_NOTES);
        }
        let cold = resolve("casual", "cold", false).unwrap();
        assert!(cold.categories.contains(&Category::Outerwear));
    }

    #[test]
    fn test_casual_sunny() {
        let policy = resolve("casual", "sunny", true).unwrap();
        assert_eq!(policy.categories, separates());
        assert_eq!(policy.notes, CASUAL_NOTES);

        let foggy = resolve("casual", "foggy", false).unwrap();
        assert_eq!(foggy.categories, separates());
    }

    #[test]
    fn test_formal_depends_on_dresses() {
        let with_dress = resolve("formal", "rainy", true).unwrap();
        assert_eq!(
            with_dress.categories,
            vec![Category::Dresses, Category::Shoes]
        );
        assert_eq!(with_dress.notes, FORMAL_DRESS_NOTES);

        let without = resolve("formal", "rainy", false).unwrap();
        assert_eq!(without.categories, separates());
        assert_eq!(without.notes, FORMAL_SEPARATES_NOTES);
    }

    #[test]
    fn test_workout_ignores_weather() {
        for weather in ["sunny", "rainy", "cold", "hot"] {
            let policy = resolve("workout", weather, false).unwrap();
            assert_eq!(policy.categories, separates());
            assert_eq!(policy.notes, WORKOUT_NOTES);
        }
    }

    #[test]
    fn test_unknown_occasion_has_no_policy() {
        assert!(resolve("picnic", "sunny", true).is_none());
        assert!(resolve("", "rainy", false).is_none());
    }

    #[test]
    fn test_rules_listing() {
        let rules = rules();
        assert_eq!(rules.len(), 5);
        assert!(rules
            .iter()
            .any(|r| r.policy.categories.contains(&Category::Outerwear)));
    }
}
