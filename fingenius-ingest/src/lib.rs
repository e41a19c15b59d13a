//! fingenius-ingest: turning pasted bank notifications into expense records.

pub mod merchant;
pub mod parsers;

pub use merchant::{MERCHANT_RULES, extract_merchant};
pub use parsers::notification::{
    ExpenseExtractor, extract, extract_amount, extract_date, extract_line,
};
