//! Deterministic spending-category rules over extracted expense records.
//!
//! Matches the merchant label first, then the raw notification text, so keyword
//! labels like "Groceries" or "Transport" carry straight through.

use fingenius_core::{ExpenseRecord, SpendingCategory};

/// (category, keywords), first match wins
const CATEGORY_RULES: &[(SpendingCategory, &[&str])] = &[
    (SpendingCategory::Food, &["zomato", "swiggy", "restaurant", "food", "cafe"]),
    (
        SpendingCategory::Groceries,
        &["bigbazaar", "dmart", "reliance fresh", "grocer", "supermarket"],
    ),
    (
        SpendingCategory::Transport,
        &["petrol", "fuel", "uber", "ola", "bus", "train", "transport"],
    ),
    (
        SpendingCategory::Utilities,
        &["electricity", "water", "bill", "recharge", "utilities"],
    ),
    (SpendingCategory::Entertainment, &["movie", "cinema", "entertainment"]),
    (SpendingCategory::Rent, &["rent"]),
];

/// Categorize free text (a merchant label or a whole notification line).
pub fn categorize_text(text: &str) -> Option<SpendingCategory> {
    let lower = text.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
}

/// Category for a record. Priority: merchant label > raw text > Other.
pub fn categorize(record: &ExpenseRecord) -> SpendingCategory {
    if record.has_known_merchant() {
        if let Some(category) = categorize_text(&record.merchant) {
            return category;
        }
    }
    categorize_text(&record.raw_text).unwrap_or(SpendingCategory::Other)
}
