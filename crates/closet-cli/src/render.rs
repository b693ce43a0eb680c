use std::fmt::Write as _;

use colored::Colorize;

use closet_core::{Category, ClosetStore, OutfitResult, RuleSummary, SavedOutfit, SavedOutfits};

pub fn outfit_result(result: &OutfitResult) -> String {
    let mut out = String::new();
    match result {
        OutfitResult::Complete(outfit) => {
            let _ = writeln!(
                out,
                "{}",
                format!(
                    "Recommended Fit for {} & {}:",
                    outfit.request.occasion, outfit.request.weather
                )
                .bold()
            );
            for item in &outfit.items {
                let _ = writeln!(
                    out,
                    "  {} {}  {}",
                    format!("{}:", item.category.as_str().to_uppercase()).cyan(),
                    item.entry.name,
                    item.entry.image.as_str().dimmed()
                );
            }
            let _ = writeln!(out, "  {}", format!("Notes: {}", outfit.notes).italic());
        }
        OutfitResult::Incomplete { request, missing } => {
            let _ = writeln!(
                out,
                "{} Not enough items in your closet to complete a {} outfit. \
                 You are missing an item in the {} category.",
                "[MISSING]".yellow().bold(),
                request.occasion.as_str().bold(),
                missing.as_str().bold()
            );
        }
        OutfitResult::Undefined { .. } => {
            let _ = writeln!(
                out,
                "{} No specific rules set for this combination. Try another!",
                "[NO RULE]".yellow().bold()
            );
        }
    }
    out
}

pub fn saved_outfits(saved: &SavedOutfits) -> String {
    if saved.is_empty() {
        return "No saved outfits yet.\n".to_string();
    }

    let mut out = String::new();
    for (i, outfit) in saved.iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {}  {}",
            format!("#{}", i + 1).cyan(),
            outfit.headline().bold(),
            outfit.saved_at.format("%H:%M:%S").to_string().dimmed()
        );
        for item in &outfit.items {
            let _ = writeln!(out, "    {}: {}", item.category.label(), item.name);
        }
    }
    out
}

/// One saved outfit in full, images included.
pub fn saved_outfit(index: usize, outfit: &SavedOutfit) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {}  {}",
        format!("#{}", index).cyan(),
        outfit.headline().bold(),
        outfit
            .saved_at
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
            .dimmed()
    );
    for item in &outfit.items {
        let _ = writeln!(
            out,
            "    {} {}  {}",
            format!("{}:", item.category.label()).cyan(),
            item.name,
            item.image.as_str().dimmed()
        );
    }
    out
}

pub fn closet(store: &ClosetStore, only: Option<&Category>) -> String {
    let categories: Vec<&Category> = match only {
        Some(category) => vec![category],
        None => store.categories(),
    };

    if categories.is_empty() {
        return "Closet is empty.\n".to_string();
    }

    let mut out = String::new();
    for category in categories {
        let entries = store.entries(category);
        let _ = writeln!(
            out,
            "{} ({})",
            category.label().bold(),
            entries.len()
        );
        if entries.is_empty() {
            let _ = writeln!(out, "    {}", "(empty)".dimmed());
        }
        for entry in entries {
            let _ = writeln!(
                out,
                "    {}  {}",
                entry.name,
                entry.image.as_str().dimmed()
            );
        }
    }
    out
}

pub fn rules(rules: &[RuleSummary]) -> String {
    let mut out = String::new();
    for rule in rules {
        let categories: Vec<&str> = rule.policy.categories.iter().map(Category::as_str).collect();
        let _ = writeln!(
            out,
            "{:<8} {:<24} {}",
            rule.occasion.as_str().cyan(),
            rule.condition,
            categories.join(", ")
        );
        let _ = writeln!(out, "{:<8} {:<24} {}", "", "", rule.policy.notes.dimmed());
    }
    let _ = writeln!(
        out,
        "{}",
        "Any other occasion has no rule.".dimmed()
    );
    out
}
