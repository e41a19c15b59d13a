//! Expense records produced from transaction notifications

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::dates::parse_notification_date;

/// Placeholder used for merchant and date when nothing could be extracted
pub const UNKNOWN: &str = "Unknown";

/// One spend extracted from a single notification line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Always > 0, at most two fractional digits
    pub amount: Decimal,
    /// Keyword label, freeform capture, or "Unknown"
    pub merchant: String,
    /// Date substring as it appeared in the line, or "Unknown"
    pub date: String,
    /// The trimmed source line
    pub raw_text: String,
}

impl ExpenseRecord {
    pub fn new(
        amount: Decimal,
        merchant: impl Into<String>,
        date: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            merchant: merchant.into(),
            date: date.into(),
            raw_text: raw_text.into(),
        }
    }

    pub fn has_known_merchant(&self) -> bool {
        self.merchant != UNKNOWN
    }

    /// Calendar date of the record, if the date string forms a valid one
    pub fn calendar_date(&self) -> Option<chrono::NaiveDate> {
        parse_notification_date(&self.date)
    }
}

/// Ordered records plus their exact total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub records: Vec<ExpenseRecord>,
    pub total: Decimal,
}

impl ExpenseSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and fold its amount into the total.
    /// Returns false, leaving the summary untouched, when the total would overflow.
    pub fn push(&mut self, record: ExpenseRecord) -> bool {
        match self.total.checked_add(record.amount) {
            Some(total) => {
                self.total = total;
                self.records.push(record);
                true
            }
            None => false,
        }
    }

    /// Newest first. Records without a usable calendar date go last, in input order.
    pub fn sort_by_date_desc(&mut self) {
        self.records.sort_by_cached_key(|r| Reverse(r.calendar_date()));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Budget buckets used when rolling expenses up by kind of spend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpendingCategory {
    #[serde(rename = "Food")]
    Food,
    #[serde(rename = "Groceries")]
    Groceries,
    #[serde(rename = "Transport")]
    Transport,
    #[serde(rename = "Utilities")]
    Utilities,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Rent")]
    Rent,
    #[serde(rename = "Other")]
    Other,
}

impl SpendingCategory {
    pub const ALL: [SpendingCategory; 7] = [
        SpendingCategory::Food,
        SpendingCategory::Groceries,
        SpendingCategory::Transport,
        SpendingCategory::Utilities,
        SpendingCategory::Entertainment,
        SpendingCategory::Rent,
        SpendingCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SpendingCategory::Food => "Food",
            SpendingCategory::Groceries => "Groceries",
            SpendingCategory::Transport => "Transport",
            SpendingCategory::Utilities => "Utilities",
            SpendingCategory::Entertainment => "Entertainment",
            SpendingCategory::Rent => "Rent",
            SpendingCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for SpendingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
