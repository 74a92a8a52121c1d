//! HTTP surface over [`SharedLedger`]: `GET /balance`, `POST /event`, `POST /reset`.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    command::RawEvent,
    processor::{LedgerError, in_memory_processor::InMemoryLedgerProcessor, shared::SharedLedger},
};

pub type AppState = SharedLedger<InMemoryLedgerProcessor>;

/// Body returned alongside 404 responses.
const NOT_FOUND_BODY: i32 = 0;

#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    pub account_id: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct BalanceBody(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

pub fn router(ledger: AppState) -> Router {
    Router::new()
        .route("/balance", get(get_balance))
        .route("/event", post(post_event))
        .route("/reset", post(post_reset))
        .with_state(ledger)
}

pub async fn get_balance(
    State(ledger): State<AppState>,
    Query(query): Query<BalanceQuery>,
) -> Response {
    match ledger.balance(&query.account_id) {
        Some(balance) => (StatusCode::OK, Json(BalanceBody(balance))).into_response(),
        None => not_found(),
    }
}

pub async fn post_event(State(ledger): State<AppState>, Json(event): Json<RawEvent>) -> Response {
    match ledger.process(event) {
        Ok(result) => (StatusCode::CREATED, Json(result)).into_response(),
        Err(err @ LedgerError::AccountNotFound { .. }) => {
            warn!(%err, "event rejected");
            not_found()
        }
        Err(err @ LedgerError::Command(_)) => {
            warn!(%err, "event rejected");
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        Err(err @ LedgerError::Account(_)) => {
            warn!(%err, "event rejected");
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response()
        }
    }
}

pub async fn post_reset(State(ledger): State<AppState>) -> Response {
    ledger.reset();
    (StatusCode::OK, "OK").into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(NOT_FOUND_BODY)).into_response()
}
