use async_trait::async_trait;
use fingenius_core::{ExpenseSummary, Funds, GoalPlan};
use fingenius_finance::ReportedScam;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub aadhaar: String,
    pub name: String,
    pub savings: f64,
    pub investments: f64,
    pub vault_docs: u32,
    pub scams_reported: u32,
}

impl User {
    pub fn funds(&self) -> Funds {
        Funds {
            savings: self.savings,
            investments: self.investments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredGoal {
    pub id: u64,
    #[serde(flatten)]
    pub plan: GoalPlan,
}

/// Repository trait for per-user state.
/// An in-memory map backs the demo; a document store can sit behind the same trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create the user, or rename an existing one.
    async fn login(&self, aadhaar: &str, name: &str) -> Result<User>;
    async fn get_user(&self, aadhaar: &str) -> Result<User>;
    async fn set_savings(&self, aadhaar: &str, savings: f64) -> Result<User>;
    async fn add_goal(&self, aadhaar: &str, plan: GoalPlan) -> Result<StoredGoal>;
    async fn goals(&self, aadhaar: &str) -> Result<Vec<StoredGoal>>;
    async fn delete_goal(&self, aadhaar: &str, id: u64) -> Result<()>;
    /// Add a user-reported alert to the shared list and count it against the reporter.
    async fn report_scam(&self, aadhaar: &str, scam: ReportedScam) -> Result<User>;
    async fn reported_scams(&self) -> Result<Vec<ReportedScam>>;
    async fn save_analysis(&self, aadhaar: &str, summary: ExpenseSummary) -> Result<()>;
    async fn last_analysis(&self, aadhaar: &str) -> Result<ExpenseSummary>;
}

#[derive(Debug)]
struct Entry {
    user: User,
    goals: Vec<StoredGoal>,
    last_analysis: Option<ExpenseSummary>,
}

#[derive(Debug, Default)]
struct Store {
    users: HashMap<String, Entry>,
    next_goal_id: u64,
    reported_scams: Vec<ReportedScam>,
}

/// Process-local store; everything is lost on restart
pub struct InMemoryRepository {
    starting_funds: Funds,
    store: Arc<RwLock<Store>>,
}

impl InMemoryRepository {
    /// New users begin with `starting_funds` as their savings and investments.
    pub fn new(starting_funds: Funds) -> Self {
        Self {
            starting_funds,
            store: Arc::new(RwLock::new(Store::default())),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new(Funds::default())
    }
}

fn not_found(aadhaar: &str) -> ApiError {
    ApiError::UserNotFound(aadhaar.to_string())
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn login(&self, aadhaar: &str, name: &str) -> Result<User> {
        let mut store = self.store.write().await;

        if let Some(entry) = store.users.get_mut(aadhaar) {
            entry.user.name = name.to_string();
            tracing::info!(aadhaar, name, "user logged in");
            return Ok(entry.user.clone());
        }

        let user = User {
            aadhaar: aadhaar.to_string(),
            name: name.to_string(),
            savings: self.starting_funds.savings,
            investments: self.starting_funds.investments,
            vault_docs: 0,
            scams_reported: 0,
        };
        store.users.insert(
            aadhaar.to_string(),
            Entry {
                user: user.clone(),
                goals: Vec::new(),
                last_analysis: None,
            },
        );
        tracing::info!(aadhaar, name, "new user registered");
        Ok(user)
    }

    async fn get_user(&self, aadhaar: &str) -> Result<User> {
        let store = self.store.read().await;
        store
            .users
            .get(aadhaar)
            .map(|e| e.user.clone())
            .ok_or_else(|| not_found(aadhaar))
    }

    async fn set_savings(&self, aadhaar: &str, savings: f64) -> Result<User> {
        let mut store = self.store.write().await;
        let entry = store.users.get_mut(aadhaar).ok_or_else(|| not_found(aadhaar))?;
        entry.user.savings = savings;
        Ok(entry.user.clone())
    }

    async fn add_goal(&self, aadhaar: &str, plan: GoalPlan) -> Result<StoredGoal> {
        let mut store = self.store.write().await;
        if !store.users.contains_key(aadhaar) {
            return Err(not_found(aadhaar));
        }

        store.next_goal_id += 1;
        let goal = StoredGoal {
            id: store.next_goal_id,
            plan,
        };
        if let Some(entry) = store.users.get_mut(aadhaar) {
            entry.goals.push(goal.clone());
        }
        Ok(goal)
    }

    async fn goals(&self, aadhaar: &str) -> Result<Vec<StoredGoal>> {
        let store = self.store.read().await;
        store
            .users
            .get(aadhaar)
            .map(|e| e.goals.clone())
            .ok_or_else(|| not_found(aadhaar))
    }

    async fn delete_goal(&self, aadhaar: &str, id: u64) -> Result<()> {
        let mut store = self.store.write().await;
        let entry = store.users.get_mut(aadhaar).ok_or_else(|| not_found(aadhaar))?;
        let before = entry.goals.len();
        entry.goals.retain(|g| g.id != id);
        if entry.goals.len() == before {
            return Err(ApiError::GoalNotFound(id));
        }
        Ok(())
    }

    async fn report_scam(&self, aadhaar: &str, scam: ReportedScam) -> Result<User> {
        let mut store = self.store.write().await;
        let entry = store.users.get_mut(aadhaar).ok_or_else(|| not_found(aadhaar))?;
        entry.user.scams_reported += 1;
        let user = entry.user.clone();

        tracing::info!(aadhaar, title = %scam.title, "scam reported");
        store.reported_scams.push(scam);
        Ok(user)
    }

    async fn reported_scams(&self) -> Result<Vec<ReportedScam>> {
        Ok(self.store.read().await.reported_scams.clone())
    }

    async fn save_analysis(&self, aadhaar: &str, summary: ExpenseSummary) -> Result<()> {
        let mut store = self.store.write().await;
        let entry = store.users.get_mut(aadhaar).ok_or_else(|| not_found(aadhaar))?;
        entry.last_analysis = Some(summary);
        Ok(())
    }

    async fn last_analysis(&self, aadhaar: &str) -> Result<ExpenseSummary> {
        let store = self.store.read().await;
        let entry = store.users.get(aadhaar).ok_or_else(|| not_found(aadhaar))?;
        entry
            .last_analysis
            .clone()
            .ok_or_else(|| ApiError::NoAnalysis(aadhaar.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fingenius_core::FinancialGoal;

    fn funds() -> Funds {
        Funds {
            savings: 50_000.0,
            investments: 10_000.0,
        }
    }

    #[tokio::test]
    async fn test_login_creates_then_renames() {
        let repo = InMemoryRepository::new(funds());
        let created = repo.login("123412341234", "Asha").await.unwrap();
        assert_eq!(created.savings, 50_000.0);

        repo.set_savings("123412341234", 1_000.0).await.unwrap();
        let renamed = repo.login("123412341234", "Asha K").await.unwrap();
        assert_eq!(renamed.name, "Asha K");
        assert_eq!(renamed.savings, 1_000.0);
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let repo = InMemoryRepository::default();
        assert!(matches!(
            repo.get_user("000000000000").await,
            Err(ApiError::UserNotFound(_))
        ));
        assert!(repo.goals("000000000000").await.is_err());
    }

    #[tokio::test]
    async fn test_goal_ids_increase() {
        let repo = InMemoryRepository::new(funds());
        repo.login("111122223333", "Ravi").await.unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let target = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let plan = FinancialGoal::new("Bike", 90_000.0, target)
            .plan(funds(), today)
            .unwrap();

        let a = repo.add_goal("111122223333", plan.clone()).await.unwrap();
        let b = repo.add_goal("111122223333", plan).await.unwrap();
        assert!(b.id > a.id);
        assert_eq!(repo.goals("111122223333").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_goal() {
        let repo = InMemoryRepository::new(funds());
        repo.login("111122223333", "Ravi").await.unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let target = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let plan = FinancialGoal::new("Bike", 90_000.0, target)
            .plan(funds(), today)
            .unwrap();
        let keep = repo.add_goal("111122223333", plan.clone()).await.unwrap();
        let gone = repo.add_goal("111122223333", plan).await.unwrap();

        repo.delete_goal("111122223333", gone.id).await.unwrap();
        let left = repo.goals("111122223333").await.unwrap();
        assert_eq!(left, vec![keep]);

        assert!(matches!(
            repo.delete_goal("111122223333", gone.id).await,
            Err(ApiError::GoalNotFound(_))
        ));
        assert!(matches!(
            repo.delete_goal("000000000000", 1).await,
            Err(ApiError::UserNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_report_scam_counts_per_user() {
        let repo = InMemoryRepository::default();
        repo.login("111122223333", "Ravi").await.unwrap();
        let scam = ReportedScam::new("KYC call", "Caller wants KYC update", "Urgency", "Hang up");

        let user = repo.report_scam("111122223333", scam.clone()).await.unwrap();
        assert_eq!(user.scams_reported, 1);
        let user = repo.report_scam("111122223333", scam.clone()).await.unwrap();
        assert_eq!(user.scams_reported, 2);
        assert_eq!(repo.reported_scams().await.unwrap().len(), 2);

        assert!(repo.report_scam("000000000000", scam).await.is_err());
        assert_eq!(repo.reported_scams().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_analysis_round_trip() {
        let repo = InMemoryRepository::default();
        repo.login("111122223333", "Ravi").await.unwrap();
        assert!(matches!(
            repo.last_analysis("111122223333").await,
            Err(ApiError::NoAnalysis(_))
        ));

        let summary = fingenius_ingest::extract("Rs 10 at Zomato");
        repo.save_analysis("111122223333", summary.clone()).await.unwrap();
        assert_eq!(repo.last_analysis("111122223333").await.unwrap(), summary);
    }
}
