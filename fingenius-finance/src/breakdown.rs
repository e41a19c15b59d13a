//! Category breakdown: rolls an expense summary up into per-category totals.

use fingenius_core::{ExpenseSummary, SpendingCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::category_rules::categorize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: SpendingCategory,
    pub total: Decimal,
    pub count: usize,
    /// Percent of the summary total, two decimals
    pub share: Decimal,
}

/// Group records by category, biggest spend first.
pub fn breakdown(summary: &ExpenseSummary) -> Vec<CategoryTotal> {
    let mut groups: HashMap<SpendingCategory, (Decimal, usize)> = HashMap::new();

    for record in &summary.records {
        let entry = groups.entry(categorize(record)).or_insert((Decimal::ZERO, 0));
        entry.0 += record.amount;
        entry.1 += 1;
    }

    let mut totals: Vec<CategoryTotal> = groups
        .into_iter()
        .map(|(category, (total, count))| {
            let share = if summary.total.is_zero() {
                Decimal::ZERO
            } else {
                (total * Decimal::ONE_HUNDRED / summary.total).round_dp(2)
            };
            CategoryTotal {
                category,
                total,
                count,
                share,
            }
        })
        .collect();

    totals.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
    totals
}
