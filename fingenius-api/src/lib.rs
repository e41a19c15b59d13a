//! fingenius-api: JSON endpoints for the FinGenius dashboard

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod router;
pub mod server;

pub use error::{ApiError, Result};
pub use handlers::{ApiSettings, AppState};
pub use repository::{InMemoryRepository, StoredGoal, User, UserRepository};
pub use router::create_router;
pub use server::run_server;
