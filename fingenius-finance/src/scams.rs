//! Known scam patterns shown on the alerts board, plus alerts reported by users.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScamAlert {
    pub id: &'static str,
    pub title: &'static str,
    pub warning: &'static str,
    pub red_flags: &'static str,
    pub safety_tip: &'static str,
    pub critical: bool,
}

const CATALOG: &[ScamAlert] = &[
    ScamAlert {
        id: "fake-loan-apps",
        title: "Fake Loan Apps",
        warning: "Apps promising instant loans without proper documentation.",
        red_flags: "No RBI license, asking for sensitive photos, threatening behavior.",
        safety_tip: "Always verify loan apps through RBI's official website.",
        critical: false,
    },
    ScamAlert {
        id: "ponzi-schemes",
        title: "Investment Ponzi Schemes",
        warning: "Promises of unrealistic returns (50%+ per month).",
        red_flags: "Referral bonuses, pressure to invest quickly, no clear business model.",
        safety_tip: "If it sounds too good to be true, it probably is. Consult a SEBI-registered advisor.",
        critical: true,
    },
    ScamAlert {
        id: "phishing-otp",
        title: "Phishing & OTP Scams",
        warning: "Fraudulent messages or calls asking for OTP, PIN, or bank details.",
        red_flags: "Urgent requests, suspicious links, unknown caller claiming to be a bank or govt. official.",
        safety_tip: "Never share OTPs or banking details with anyone. Banks never ask for this information.",
        critical: false,
    },
    ScamAlert {
        id: "fake-lottery",
        title: "Fake Lottery Call",
        warning: "Callers promise large sums of money from a lottery you never entered.",
        red_flags: "Upfront fees, urgent action, unofficial numbers.",
        safety_tip: "Never pay upfront fees for lottery winnings. Legitimate lotteries do not ask for money to release prizes.",
        critical: false,
    },
    ScamAlert {
        id: "job-offer",
        title: "Job Offer Scam",
        warning: "Fake job opportunities that require payment for training or background checks.",
        red_flags: "Too-good-to-be-true salaries, requests for financial info, upfront fees.",
        safety_tip: "Legitimate employers do not ask for money during hiring. Research the company thoroughly.",
        critical: false,
    },
];

/// A scam described by a user. Never critical until someone reviews it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedScam {
    pub title: String,
    pub warning: String,
    pub red_flags: String,
    pub safety_tip: String,
    pub critical: bool,
}

impl ReportedScam {
    pub fn new(
        title: impl Into<String>,
        warning: impl Into<String>,
        red_flags: impl Into<String>,
        safety_tip: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            warning: warning.into(),
            red_flags: red_flags.into(),
            safety_tip: safety_tip.into(),
            critical: false,
        }
    }

    pub fn matches(&self, term: &str) -> bool {
        let fields = [
            self.title.as_str(),
            self.warning.as_str(),
            self.red_flags.as_str(),
            self.safety_tip.as_str(),
        ];
        mentions(fields, term)
    }
}

impl ScamAlert {
    pub fn matches(&self, term: &str) -> bool {
        mentions([self.title, self.warning, self.red_flags, self.safety_tip], term)
    }
}

/// Case-insensitive substring test over the displayed fields; a blank term matches all.
fn mentions(fields: [&str; 4], term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&term))
}

pub fn catalog() -> &'static [ScamAlert] {
    CATALOG
}

pub fn find(id: &str) -> Option<&'static ScamAlert> {
    CATALOG.iter().find(|a| a.id == id)
}

/// Catalog entries whose title, warning, red flags or tip mention `term`.
pub fn search(term: &str) -> Vec<&'static ScamAlert> {
    CATALOG.iter().filter(|a| a.matches(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<_> = catalog().iter().map(|a| a.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_find_and_serialize() {
        let ponzi = find("ponzi-schemes").unwrap();
        assert!(ponzi.critical);
        let json = serde_json::to_value(ponzi).unwrap();
        assert_eq!(json["redFlags"], ponzi.red_flags);
        assert!(find("nope").is_none());
    }

    #[test]
    fn test_search_matches_any_field() {
        let titles: Vec<_> = search("OTP").iter().map(|a| a.id).collect();
        assert_eq!(titles, vec!["phishing-otp"]);

        // "upfront fees" only appears in red flags and tips
        let ids: Vec<_> = search("UPFRONT").iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["fake-lottery", "job-offer"]);

        assert_eq!(search("  ").len(), catalog().len());
        assert!(search("cryptocurrency airdrop").is_empty());
    }

    #[test]
    fn test_reported_scam_defaults() {
        let scam = ReportedScam::new(
            "Electricity Cut SMS",
            "Message says power will be cut tonight.",
            "Personal mobile number, urgency",
            "Pay bills only through the official app.",
        );
        assert!(!scam.critical);
        assert!(scam.matches("power"));
        assert!(scam.matches("OFFICIAL APP"));
        assert!(!scam.matches("lottery"));

        let json = serde_json::to_value(&scam).unwrap();
        assert_eq!(json["safetyTip"], "Pay bills only through the official app.");
    }
}
