//! fingenius-finance: spending categories, category breakdown, advisor replies and scam alerts

pub mod advisor;
pub mod breakdown;
pub mod category_rules;
pub mod scams;

pub use breakdown::{CategoryTotal, breakdown};
pub use category_rules::{categorize, categorize_text};
pub use scams::{ReportedScam, ScamAlert};
