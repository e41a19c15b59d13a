//! Micro-investing suggestions and compound growth projection

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Smallest daily amount accepted, in rupees
pub const MIN_DAILY_AMOUNT: f64 = 10.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const PROJECTION_YEARS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentGoal {
    Emergency,
    Retirement,
    Education,
    Home,
}

impl FromStr for RiskLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => bail!("unknown risk level: {other}"),
        }
    }
}

impl FromStr for InvestmentGoal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "emergency" => Ok(InvestmentGoal::Emergency),
            "retirement" => Ok(InvestmentGoal::Retirement),
            "education" => Ok(InvestmentGoal::Education),
            "home" => Ok(InvestmentGoal::Home),
            other => bail!("unknown investment goal: {other}"),
        }
    }
}

/// Instrument suggestion and the annual return (percent) assumed for it
pub fn suggestion(goal: InvestmentGoal, risk: RiskLevel) -> (&'static str, f64) {
    use InvestmentGoal::*;
    use RiskLevel::*;

    match (goal, risk) {
        (Emergency, _) => (
            "For an emergency fund, focus on low-risk, liquid options such as a high-yield \
             savings account or a liquid mutual fund. Aim to build 3-6 months of living expenses.",
            5.0,
        ),
        (Retirement, Low) => (
            "Consider the Public Provident Fund (PPF) or Employee Provident Fund (EPF) for \
             guaranteed returns and tax benefits.",
            7.0,
        ),
        (Retirement, Medium) => (
            "Explore Balanced Advantage Funds or Equity Linked Savings Schemes (ELSS) for tax \
             savings and growth potential.",
            10.0,
        ),
        (Retirement, High) => (
            "Consider diversified equity mutual funds via SIP or direct equity in blue-chip \
             companies.",
            15.0,
        ),
        (Education, Low) => (
            "Consider Sukanya Samriddhi Yojana (for a girl child) or debt mutual funds for \
             stable returns.",
            6.0,
        ),
        (Education, Medium) => (
            "Explore hybrid mutual funds or children's gift funds that balance equity and debt.",
            9.0,
        ),
        (Education, High) => (
            "Consider equity mutual funds focusing on growth sectors.",
            14.0,
        ),
        (Home, Low) => (
            "Focus on fixed deposits or debt mutual funds to preserve capital.",
            6.0,
        ),
        (Home, Medium) => (
            "Consider balanced funds or Real Estate Investment Trusts (REITs) for exposure to \
             real estate.",
            10.0,
        ),
        (Home, High) => (
            "Consider equity mutual funds or real estate stocks, but be aware of market \
             volatility.",
            13.0,
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    pub year: u32,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub daily_amount: f64,
    pub monthly_amount: f64,
    pub risk: RiskLevel,
    pub goal: InvestmentGoal,
    pub suggestion: String,
    pub annual_return_pct: f64,
    pub growth: Vec<YearPoint>,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Contribute monthly for [`PROJECTION_YEARS`], compounding monthly; one point per year.
pub fn project_growth(monthly_amount: f64, annual_return_pct: f64) -> Vec<YearPoint> {
    let monthly_rate = annual_return_pct / 100.0 / 12.0;
    let mut principal = 0.0;
    let mut points = Vec::with_capacity(PROJECTION_YEARS as usize);

    for month in 1..=PROJECTION_YEARS * 12 {
        principal += monthly_amount;
        principal *= 1.0 + monthly_rate;
        if month % 12 == 0 {
            points.push(YearPoint {
                year: month / 12,
                value: round2(principal),
            });
        }
    }

    points
}

pub fn project(
    daily_amount: f64,
    risk: RiskLevel,
    goal: InvestmentGoal,
) -> Result<InvestmentProjection> {
    if !(daily_amount >= MIN_DAILY_AMOUNT) {
        bail!("daily investment amount must be at least {MIN_DAILY_AMOUNT}");
    }

    let monthly_amount = daily_amount * DAYS_PER_MONTH;
    let (text, rate) = suggestion(goal, risk);

    Ok(InvestmentProjection {
        daily_amount,
        monthly_amount,
        risk,
        goal,
        suggestion: text.to_string(),
        annual_return_pct: rate,
        growth: project_growth(monthly_amount, rate),
    })
}
