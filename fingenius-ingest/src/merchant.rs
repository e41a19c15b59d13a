//! Merchant labelling for notification lines.
//!
//! Keyword rules run first, in order; the first rule with a matching keyword wins.
//! Lines that match no rule but read like a debit fall back to the text after
//! "at"/"for"/"to".

use fingenius_core::UNKNOWN;
use regex::Regex;
use std::sync::OnceLock;

/// (keywords, label), evaluated top to bottom
pub const MERCHANT_RULES: &[(&[&str], &str)] = &[
    (&["zomato"], "Zomato"),
    (&["swiggy"], "Swiggy"),
    (&["bigbazaar", "dmart"], "Groceries"),
    (&["uber", "ola"], "Transport"),
    (&["recharge", "bill"], "Utilities/Bills"),
    (&["atm", "cash"], "Cash Withdrawal"),
    (&["paytm", "gpay", "phonepe"], "UPI Transfer"),
];

const DEBIT_HINTS: [&str; 2] = ["debit", "spent"];

fn payee_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:at|for|to)\s+([a-z0-9\s&]+?)(?:\s+on\b|\s+txn|\s+ref|\s+upi|$)")
            .expect("invalid payee regex")
    })
}

/// Label from the keyword table, if any keyword occurs in the line.
pub fn keyword_label(line: &str) -> Option<&'static str> {
    let lower = line.to_lowercase();
    MERCHANT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, label)| *label)
}

/// Payee named after "at"/"for"/"to", only for lines mentioning a debit or spend.
pub fn payee_after_preposition(line: &str) -> Option<String> {
    let lower = line.to_lowercase();
    if !DEBIT_HINTS.iter().any(|h| lower.contains(h)) {
        return None;
    }

    payee_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn extract_merchant(line: &str) -> String {
    if let Some(label) = keyword_label(line) {
        return label.to_string();
    }
    payee_after_preposition(line).unwrap_or_else(|| UNKNOWN.to_string())
}
