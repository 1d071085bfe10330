use axum::{
    extract::{Query, State},
    routing::{get, post},
    Router,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::auth::CredentialRecord;
use crate::error::ApiError;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // REST API routes
        .route("/login", post(login))
        .route("/user-info", get(user_info))
        .route("/translate", post(translate_text))
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
}

#[derive(Debug, Deserialize)]
struct LoginParams {
    username: Option<String>,
    password: Option<String>,
}

async fn login(
    State(state): State<AppState>,
    Query(params): Query<LoginParams>,
) -> Result<Json<Value>, ApiError> {
    let username = params.username.unwrap_or_default();
    let password = params.password.unwrap_or_default();

    if username.is_empty() || password.is_empty() {
        return Err(ApiError::MissingCredentials);
    }

    if state.credentials.verify(&username, &password) {
        Ok(Json(json!({ "message": "Login successful" })))
    } else {
        warn!("Rejected login for {}", username);
        Err(ApiError::InvalidCredentials)
    }
}

#[derive(Debug, Deserialize)]
struct UserInfoParams {
    username: Option<String>,
}

async fn user_info(
    State(state): State<AppState>,
    Query(params): Query<UserInfoParams>,
) -> Result<Json<CredentialRecord>, ApiError> {
    let username = params.username.unwrap_or_default();

    match state.credentials.get(&username) {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::UserNotFound),
    }
}

#[derive(Debug, Deserialize)]
struct TranslateBody {
    text: Option<String>,
    target_lang: Option<String>,
}

async fn translate_text(
    State(state): State<AppState>,
    Json(body): Json<TranslateBody>,
) -> Result<Json<Value>, ApiError> {
    let text = body.text.unwrap_or_default();
    let target_lang = body.target_lang.unwrap_or_default();

    if text.is_empty() || target_lang.is_empty() {
        return Err(ApiError::MissingTranslationFields);
    }

    match state.translator.translate(&text, &target_lang).await {
        Ok(translated_text) => Ok(Json(json!({ "translated_text": translated_text }))),
        Err(e) => {
            error!("Translation failed: {}", e);
            Err(ApiError::Translation(e.to_string()))
        }
    }
}

#[derive(Debug, Deserialize)]
struct AmountParams {
    amount: Option<i64>,
}

async fn deposit(
    State(state): State<AppState>,
    Query(params): Query<AmountParams>,
) -> Result<Json<Value>, ApiError> {
    let amount = params.amount.unwrap_or(0);
    state.ledger.deposit(amount).await?;

    Ok(Json(json!({
        "message": format!("Deposited {} successfully", amount)
    })))
}

async fn withdraw(
    State(state): State<AppState>,
    Query(params): Query<AmountParams>,
) -> Result<Json<Value>, ApiError> {
    let amount = params.amount.unwrap_or(0);
    let balance = state.ledger.withdraw(amount).await?;

    Ok(Json(json!({
        "message": "Withdraw succeed",
        "balance": balance
    })))
}
