//! Savings goals: progress and monthly contribution planning

use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Average month length used to turn a day count into months
pub const DAYS_PER_MONTH: f64 = 30.44;

/// What the user wants to save for, and by when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub name: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
}

/// Money already set aside, counted toward every goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Funds {
    pub savings: f64,
    pub investments: f64,
}

impl Funds {
    pub fn available(&self) -> f64 {
        (self.savings + self.investments).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalOutlook {
    Reached,
    Achievable,
    /// Monthly contribution is more than half of current savings
    Stretch,
}

impl GoalOutlook {
    pub fn tip(&self) -> &'static str {
        match self {
            GoalOutlook::Reached => "You have already reached or exceeded this goal! Great job!",
            GoalOutlook::Achievable => {
                "This goal seems achievable with consistent effort. Keep tracking your progress!"
            }
            GoalOutlook::Stretch => {
                "This requires significant monthly contribution. Consider reviewing your budget \
                 or exploring higher-return investments (with caution)."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPlan {
    pub goal: FinancialGoal,
    pub current_saved: f64,
    pub progress_pct: f64,
    pub days_remaining: i64,
    pub months_remaining: i64,
    pub monthly_needed: f64,
    pub outlook: GoalOutlook,
}

impl FinancialGoal {
    pub fn new(name: impl Into<String>, target_amount: f64, target_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            target_amount,
            target_date,
        }
    }

    /// Plan this goal against `funds` as of `today`.
    pub fn plan(&self, funds: Funds, today: NaiveDate) -> Result<GoalPlan> {
        let name = self.name.trim();
        if name.is_empty() {
            bail!("goal name is required");
        }
        if !(self.target_amount > 0.0) {
            bail!("target amount must be greater than zero");
        }

        let days_remaining = (self.target_date - today).num_days();
        if days_remaining <= 0 {
            bail!("target date must be in the future");
        }
        let months_remaining = (days_remaining as f64 / DAYS_PER_MONTH).ceil() as i64;

        let current_saved = funds.available().min(self.target_amount);
        let progress_pct = current_saved / self.target_amount * 100.0;
        let monthly_needed = (self.target_amount - current_saved) / months_remaining as f64;

        let outlook = if monthly_needed <= 0.0 {
            GoalOutlook::Reached
        } else if monthly_needed > funds.savings / 2.0 {
            GoalOutlook::Stretch
        } else {
            GoalOutlook::Achievable
        };

        Ok(GoalPlan {
            goal: FinancialGoal {
                name: name.to_string(),
                ..self.clone()
            },
            current_saved,
            progress_pct,
            days_remaining,
            months_remaining,
            monthly_needed,
            outlook,
        })
    }
}
