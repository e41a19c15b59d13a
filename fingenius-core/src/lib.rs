//! fingenius-core: Core types and arithmetic for the FinGenius finance assistant

pub mod budget;
pub mod dates;
pub mod expense;
pub mod goals;
pub mod invest;

pub use budget::{BudgetHealth, BudgetLine, BudgetPlan, BudgetReport};
pub use dates::{parse_notification_date, today_in};
pub use expense::{ExpenseRecord, ExpenseSummary, SpendingCategory, UNKNOWN};
pub use goals::{FinancialGoal, Funds, GoalOutlook, GoalPlan};
pub use invest::{InvestmentGoal, InvestmentProjection, RiskLevel, YearPoint, project};
