use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::IntoResponse,
};
use fingenius_core::{FinancialGoal, invest, today_in};
use fingenius_finance::{ReportedScam, advisor, scams};
use fingenius_ingest::extract;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    error::{ApiError, Result},
    models::{
        AnalyzeRequest, AnalyzeResponse, BudgetRequest, ChatRequest, GoalRequest, InvestRequest,
        LoginRequest, ReportScamRequest, ScamQuery, is_valid_aadhaar,
    },
    repository::UserRepository,
};

/// Knobs the handlers read on every request
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Artificial pause before analyzing expenses
    pub analysis_delay: Duration,
    /// IANA timezone used to decide what "today" is for goal planning
    pub timezone: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            analysis_delay: Duration::ZERO,
            timezone: "Asia/Kolkata".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn UserRepository>,
    pub settings: ApiSettings,
}

fn required(field: Option<String>, name: &str) -> Result<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("{name} is required")))
}

/// GET /api/health
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "success": true, "data": "OK" }))
}

/// POST /api/analyze-expenses
pub async fn analyze_expenses(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>> {
    let Json(req) = payload?;
    let messages = req
        .messages
        .ok_or_else(|| ApiError::BadRequest("messages is required".to_string()))?;

    if !state.settings.analysis_delay.is_zero() {
        tokio::time::sleep(state.settings.analysis_delay).await;
    }

    let summary = extract(&messages);
    tracing::info!(records = summary.len(), total = %summary.total, "analyzed expenses");

    if let Some(aadhaar) = req.aadhaar.as_deref() {
        match state.repo.save_analysis(aadhaar, summary.clone()).await {
            Ok(()) => {}
            Err(ApiError::UserNotFound(_)) => {
                tracing::warn!(aadhaar, "analysis not stored: unknown user");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(Json(AnalyzeResponse::from(&summary)))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload?;
    let (aadhaar, name) = match (req.aadhaar, req.name) {
        (Some(a), Some(n)) if !a.trim().is_empty() && !n.trim().is_empty() => {
            (a.trim().to_string(), n.trim().to_string())
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Aadhaar number and name are required.".to_string(),
            ));
        }
    };
    if !is_valid_aadhaar(&aadhaar) {
        return Err(ApiError::BadRequest(
            "Aadhaar number must be 12 digits.".to_string(),
        ));
    }

    let user = state.repo.login(&aadhaar, &name).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Login successful!",
        "user": user,
    })))
}

/// GET /api/user/:aadhaar
pub async fn get_user(
    State(state): State<AppState>,
    Path(aadhaar): Path<String>,
) -> Result<impl IntoResponse> {
    let user = state.repo.get_user(&aadhaar).await?;
    Ok(Json(json!({ "success": true, "user": user })))
}

/// GET /api/user/:aadhaar/expenses
pub async fn get_last_expenses(
    State(state): State<AppState>,
    Path(aadhaar): Path<String>,
) -> Result<Json<AnalyzeResponse>> {
    let summary = state.repo.last_analysis(&aadhaar).await?;
    Ok(Json(AnalyzeResponse::from(&summary)))
}

/// GET /api/goals/:aadhaar
pub async fn list_goals(
    State(state): State<AppState>,
    Path(aadhaar): Path<String>,
) -> Result<impl IntoResponse> {
    let goals = state.repo.goals(&aadhaar).await?;
    Ok(Json(json!({ "success": true, "goals": goals })))
}

/// POST /api/goals/:aadhaar
pub async fn add_goal(
    State(state): State<AppState>,
    Path(aadhaar): Path<String>,
    payload: std::result::Result<Json<GoalRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload?;
    let user = state.repo.get_user(&aadhaar).await?;
    let today =
        today_in(&state.settings.timezone).map_err(|e| ApiError::Internal(e.to_string()))?;

    let plan = FinancialGoal::new(req.name, req.target_amount, req.target_date)
        .plan(user.funds(), today)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let goal = state.repo.add_goal(&aadhaar, plan).await?;
    tracing::info!(aadhaar = %aadhaar, goal_id = goal.id, "goal added");
    let tip = goal.plan.outlook.tip();
    Ok(Json(json!({
        "success": true,
        "goal": goal,
        "tip": tip,
    })))
}

/// DELETE /api/goals/:aadhaar/:id
pub async fn delete_goal(
    State(state): State<AppState>,
    Path((aadhaar, id)): Path<(String, u64)>,
) -> Result<impl IntoResponse> {
    state.repo.delete_goal(&aadhaar, id).await?;
    tracing::info!(aadhaar = %aadhaar, goal_id = id, "goal deleted");
    Ok(Json(json!({ "success": true, "message": "Financial goal deleted." })))
}

/// POST /api/budget
pub async fn budget(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BudgetRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload?;
    let report = req
        .plan
        .analyze()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    if let Some(aadhaar) = req.aadhaar.as_deref() {
        state.repo.set_savings(aadhaar, report.savings).await?;
    }

    Ok(Json(json!({ "success": true, "report": report })))
}

/// POST /api/invest/suggest
pub async fn invest_suggest(
    payload: std::result::Result<Json<InvestRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload?;
    let projection = invest::project(req.daily_amount, req.risk, req.goal)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(Json(json!({ "success": true, "projection": projection })))
}

/// POST /api/chatbot
pub async fn chatbot(
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload?;
    let message = required(req.message, "message")?;
    let reply = advisor::reply(&message, advisor::seed_for(&message));
    Ok(Json(json!({ "reply": reply })))
}

/// GET /api/scams?q=term
pub async fn list_scams(
    State(state): State<AppState>,
    Query(query): Query<ScamQuery>,
) -> Result<impl IntoResponse> {
    let term = query.q.unwrap_or_default();
    let reported: Vec<ReportedScam> = state
        .repo
        .reported_scams()
        .await?
        .into_iter()
        .filter(|s| s.matches(&term))
        .collect();

    Ok(Json(json!({
        "success": true,
        "scams": scams::search(&term),
        "reported": reported,
    })))
}

/// GET /api/scams/:id
pub async fn get_scam(Path(id): Path<String>) -> Result<impl IntoResponse> {
    let scam = scams::find(&id).ok_or(ApiError::ScamNotFound(id))?;
    Ok(Json(json!({ "success": true, "scam": scam })))
}

/// POST /api/scams/report
pub async fn report_scam(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ReportScamRequest>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(req) = payload?;
    let aadhaar = required(req.aadhaar, "aadhaar")?;
    let title = required(req.title, "title")?;
    let warning = required(req.warning, "warning")?;

    let scam = ReportedScam::new(title, warning, req.red_flags.trim(), req.safety_tip.trim());
    let user = state.repo.report_scam(&aadhaar, scam.clone()).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Thank you for reporting the scam! It has been added to our list.",
        "scam": scam,
        "scamsReported": user.scams_reported,
    })))
}
