use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{self, AppState};

/// Create the application router with all API endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handlers::health_check))
        // Expense analysis
        .route("/api/analyze-expenses", post(handlers::analyze_expenses))
        // Users
        .route("/api/login", post(handlers::login))
        .route("/api/user/:aadhaar", get(handlers::get_user))
        .route("/api/user/:aadhaar/expenses", get(handlers::get_last_expenses))
        // Planning
        .route(
            "/api/goals/:aadhaar",
            get(handlers::list_goals).post(handlers::add_goal),
        )
        .route("/api/goals/:aadhaar/:id", delete(handlers::delete_goal))
        .route("/api/budget", post(handlers::budget))
        .route("/api/invest/suggest", post(handlers::invest_suggest))
        // Advice
        .route("/api/chatbot", post(handlers::chatbot))
        .route("/api/scams", get(handlers::list_scams))
        .route("/api/scams/report", post(handlers::report_scam))
        .route("/api/scams/:id", get(handlers::get_scam))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
