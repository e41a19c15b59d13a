//! Monthly budget analysis: income against labelled expense lines.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Default expense lines offered by the budgeting form
pub const DEFAULT_LINES: [&str; 5] = [
    "Rent",
    "Food & Groceries",
    "Transportation",
    "Utilities",
    "Entertainment",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub label: String,
    pub amount: f64,
}

/// Income plus expense lines keyed by label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub income: f64,
    #[serde(default)]
    pub expenses: Vec<BudgetLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetHealth {
    /// Saving more than a fifth of income
    Strong,
    Positive,
    Deficit,
}

impl BudgetHealth {
    pub fn classify(income: f64, savings: f64) -> Self {
        if savings > income * 0.2 {
            BudgetHealth::Strong
        } else if savings > 0.0 {
            BudgetHealth::Positive
        } else {
            BudgetHealth::Deficit
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            BudgetHealth::Strong => {
                "Great job! You are saving a significant portion of your income. \
                 Consider investing some of your savings for long-term growth."
            }
            BudgetHealth::Positive => {
                "You are managing your expenses well and have some savings. \
                 Look for areas to optimize spending to increase your savings further."
            }
            BudgetHealth::Deficit => {
                "It looks like your expenses exceed your income. Focus on reducing \
                 non-essential spending to improve your financial health. \
                 Review your largest expense categories."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub income: f64,
    pub total_expenses: f64,
    /// Negative when spending exceeds income
    pub savings: f64,
    /// Lines with a positive amount, in plan order
    pub breakdown: Vec<BudgetLine>,
    pub health: BudgetHealth,
    pub advice: String,
}

impl BudgetPlan {
    pub fn new(income: f64) -> Self {
        Self {
            income,
            expenses: Vec::new(),
        }
    }

    /// Set a line; an existing line with the same label is replaced.
    pub fn set_expense(&mut self, label: impl Into<String>, amount: f64) {
        let label = label.into();
        match self.expenses.iter_mut().find(|l| l.label == label) {
            Some(line) => line.amount = amount,
            None => self.expenses.push(BudgetLine { label, amount }),
        }
    }

    pub fn with_expense(mut self, label: impl Into<String>, amount: f64) -> Self {
        self.set_expense(label, amount);
        self
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|l| l.amount).sum()
    }

    pub fn analyze(&self) -> Result<BudgetReport> {
        if !(self.income > 0.0) {
            bail!("monthly income must be greater than zero");
        }
        if let Some(line) = self.expenses.iter().find(|l| !(l.amount >= 0.0)) {
            bail!("expense '{}' must not be negative", line.label);
        }

        let total_expenses = self.total_expenses();
        let savings = self.income - total_expenses;
        let health = BudgetHealth::classify(self.income, savings);

        Ok(BudgetReport {
            income: self.income,
            total_expenses,
            savings,
            breakdown: self
                .expenses
                .iter()
                .filter(|l| l.amount > 0.0)
                .cloned()
                .collect(),
            health,
            advice: health.advice().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_budget() {
        let report = BudgetPlan::new(50_000.0)
            .with_expense("Rent", 15_000.0)
            .with_expense("Food & Groceries", 8_000.0)
            .with_expense("Entertainment", 0.0)
            .analyze()
            .unwrap();

        assert_eq!(report.total_expenses, 23_000.0);
        assert_eq!(report.savings, 27_000.0);
        assert_eq!(report.health, BudgetHealth::Strong);
        assert_eq!(report.breakdown.len(), 2);
    }

    #[test]
    fn test_positive_and_deficit() {
        let positive = BudgetPlan::new(10_000.0).with_expense("Rent", 9_000.0).analyze().unwrap();
        assert_eq!(positive.health, BudgetHealth::Positive);

        let deficit = BudgetPlan::new(10_000.0).with_expense("Rent", 12_000.0).analyze().unwrap();
        assert_eq!(deficit.health, BudgetHealth::Deficit);
        assert_eq!(deficit.savings, -2_000.0);
    }

    #[test]
    fn test_exactly_twenty_percent_is_not_strong() {
        let report = BudgetPlan::new(10_000.0).with_expense("Rent", 8_000.0).analyze().unwrap();
        assert_eq!(report.health, BudgetHealth::Positive);
    }

    #[test]
    fn test_set_expense_replaces_label() {
        let plan = BudgetPlan::new(1_000.0)
            .with_expense("Rent", 100.0)
            .with_expense("Rent", 300.0);
        assert_eq!(plan.expenses.len(), 1);
        assert_eq!(plan.total_expenses(), 300.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(BudgetPlan::new(0.0).analyze().is_err());
        assert!(BudgetPlan::new(f64::NAN).analyze().is_err());
        assert!(BudgetPlan::new(100.0).with_expense("Rent", -5.0).analyze().is_err());
    }
}
