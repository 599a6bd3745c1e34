use super::AppState;
use super::error::ApiResult;
use crate::core::observation::Recommendation;
use crate::service::ServiceError;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize)]
pub struct ProbeResponse {
    message: &'static str,
}

/// Liveness and readiness probe. Being able to answer is all either needs.
pub async fn handle_probe() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        message: "Application healthy!",
    })
}

#[derive(Deserialize)]
pub struct RateQuery {
    currency: Option<String>,
}

/// Latest valuation of `?currency=` and whether to exchange now, from the trailing window.
pub async fn handle_rate(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RateQuery>, QueryRejection>,
) -> ApiResult<Json<Recommendation>> {
    let Query(query) = query.map_err(|e| ServiceError::InvalidQuery(e.body_text()))?;
    let currency = query.currency.unwrap_or_default();
    let today = chrono::Utc::now().date_naive();
    let assessment = state.service.assess(&currency, today).await?;
    Ok(Json(assessment.recommendation))
}
