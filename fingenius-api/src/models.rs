//! Request and response bodies. Field names follow the dashboard's camelCase JSON.

use chrono::NaiveDate;
use fingenius_core::{BudgetPlan, ExpenseRecord, ExpenseSummary, InvestmentGoal, RiskLevel};
use fingenius_finance::{CategoryTotal, breakdown, categorize};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub messages: Option<String>,
    /// Store the result as this user's last analysis
    pub aadhaar: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseView {
    /// Canonical merchant label, kept under the field name older clients read
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub merchant: String,
    pub date: String,
    pub raw_text: String,
}

impl From<&ExpenseRecord> for ExpenseView {
    fn from(r: &ExpenseRecord) -> Self {
        Self {
            description: r.merchant.clone(),
            amount: r.amount,
            category: categorize(r).to_string(),
            merchant: r.merchant.clone(),
            date: r.date.clone(),
            raw_text: r.raw_text.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub expenses: Vec<ExpenseView>,
    pub total_expenses: Decimal,
    pub breakdown: Vec<CategoryTotal>,
}

impl From<&ExpenseSummary> for AnalyzeResponse {
    fn from(summary: &ExpenseSummary) -> Self {
        Self {
            success: true,
            expenses: summary.records.iter().map(ExpenseView::from).collect(),
            total_expenses: summary.total,
            breakdown: breakdown(summary),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub aadhaar: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRequest {
    pub name: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct BudgetRequest {
    /// When set, the user's savings are replaced with the budget's result
    pub aadhaar: Option<String>,
    #[serde(flatten)]
    pub plan: BudgetPlan,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestRequest {
    pub daily_amount: f64,
    pub risk: RiskLevel,
    pub goal: InvestmentGoal,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScamQuery {
    /// Case-insensitive search term
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportScamRequest {
    pub aadhaar: Option<String>,
    pub title: Option<String>,
    pub warning: Option<String>,
    #[serde(default)]
    pub red_flags: String,
    #[serde(default)]
    pub safety_tip: String,
}

/// Aadhaar numbers are accepted on shape alone: exactly twelve ASCII digits.
pub fn is_valid_aadhaar(s: &str) -> bool {
    s.len() == 12 && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aadhaar_shape() {
        assert!(is_valid_aadhaar("123412341234"));
        assert!(!is_valid_aadhaar("12341234123"));
        assert!(!is_valid_aadhaar("12341234123a"));
        assert!(!is_valid_aadhaar("१२३४१२३४१२३४"));
    }

    #[test]
    fn test_analyze_response_shape() {
        let summary = fingenius_ingest::extract("Rs. 500 at Zomato on 20/07/2023");
        let json = serde_json::to_value(AnalyzeResponse::from(&summary)).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["totalExpenses"].as_f64(), Some(500.0));
        let first = &json["expenses"][0];
        assert_eq!(first["description"], "Zomato");
        assert_eq!(first["category"], "Food");
        assert_eq!(first["date"], "20/07/2023");
        assert_eq!(first["rawText"], "Rs. 500 at Zomato on 20/07/2023");
    }

    #[test]
    fn test_budget_request_flattens_plan() {
        let req: BudgetRequest = serde_json::from_str(
            r#"{"aadhaar":"123412341234","income":1000,"expenses":[{"label":"Rent","amount":400}]}"#,
        )
        .unwrap();
        assert_eq!(req.plan.income, 1000.0);
        assert_eq!(req.plan.expenses[0].label, "Rent");
    }
}
