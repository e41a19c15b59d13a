//! Bank SMS / email notification parser
//!
//! Each line is treated as one notification, e.g.:
//!   Rs. 500 at Zomato on 20/07/2023
//!   250.00 INR spent at SuperMart on Aug 5, 2023
//!   Your A/c XX1234 is debited for INR 1,499.00 on 05-08-23 Ref 99812
//!
//! Lines without a currency-marked amount are skipped; nothing here fails.

use fingenius_core::{ExpenseRecord, ExpenseSummary, UNKNOWN};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::merchant::extract_merchant;

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)\b(?:rs\.?|inr)\s*(?P<pre>\d+(?:,\d{2,3})*(?:\.\d{1,2})?)",
            r"|(?P<post>\d+(?:,\d{2,3})*(?:\.\d{1,2})?)\s+(?:rs\.?|inr)\b"
        ))
        .expect("invalid amount regex")
    })
}

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)\b\d{1,2}[-/]\d{1,2}[-/](?:\d{4}|\d{2})\b",
            r"|\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s+\d{1,2},?\s+(?:\d{4}|\d{2})\b"
        ))
        .expect("invalid date regex")
    })
}

/// First currency-marked amount in the line. Digit-group commas are dropped.
pub fn extract_amount(line: &str) -> Option<Decimal> {
    let caps = amount_re().captures(line)?;
    let raw = caps.name("pre").or_else(|| caps.name("post"))?.as_str();
    Decimal::from_str(&raw.replace(',', "")).ok()
}

/// First numeric or month-name date in the line, as written.
pub fn extract_date(line: &str) -> Option<&str> {
    date_re().find(line).map(|m| m.as_str())
}

/// Parse one already-trimmed line. `None` when no positive amount was found.
pub fn extract_line(line: &str) -> Option<ExpenseRecord> {
    let amount = extract_amount(line).filter(|a| *a > Decimal::ZERO)?;
    let merchant = extract_merchant(line);
    let date = extract_date(line).unwrap_or(UNKNOWN);
    Some(ExpenseRecord::new(amount, merchant, date, line))
}

/// Stateless notification-to-expense extractor
pub struct ExpenseExtractor;

impl ExpenseExtractor {
    /// Parse a block of newline-separated notifications into dated, totalled records.
    pub fn extract(text: &str) -> ExpenseSummary {
        let mut summary = ExpenseSummary::new();

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match extract_line(line) {
                Some(record) => {
                    if !summary.push(record) {
                        tracing::debug!(line, "amount would overflow the total, skipping");
                    }
                }
                None => tracing::debug!(line, "no currency amount found, skipping"),
            }
        }

        summary.sort_by_date_desc();
        tracing::debug!(records = summary.len(), total = %summary.total, "extracted expenses");
        summary
    }
}

/// Shorthand for [`ExpenseExtractor::extract`].
pub fn extract(text: &str) -> ExpenseSummary {
    ExpenseExtractor::extract(text)
}
