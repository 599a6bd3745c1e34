//! Fetches a currency's trailing window and turns it into a recommendation.

use crate::core::engine::{for_currency, order_by_recency, recommend};
use crate::core::error::CoreError;
use crate::core::extract::extract;
use crate::core::history::{FetchError, HistoryProvider, TrailingWindow};
use crate::core::observation::{Observation, Recommendation, normalize_currency};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// History of one currency, most recent first, and the recommendation drawn from it.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub history: Vec<Observation>,
    pub recommendation: Recommendation,
}

#[derive(Clone)]
pub struct RateService {
    provider: Arc<dyn HistoryProvider>,
    window_days: u32,
}

impl RateService {
    pub fn new(provider: Arc<dyn HistoryProvider>, window_days: u32) -> Self {
        Self {
            provider,
            window_days,
        }
    }

    #[instrument(name = "Assess", skip(self))]
    pub async fn assess(
        &self,
        currency: &str,
        today: NaiveDate,
    ) -> Result<Assessment, ServiceError> {
        let currency = normalize_currency(currency)?;
        let window = TrailingWindow::ending(today, self.window_days);

        let payload = self.provider.fetch_history(&currency, &window).await?;
        let mut history = for_currency(extract(&payload)?, &currency);
        debug!("Extracted {} observations for {}", history.len(), currency);

        order_by_recency(&mut history);
        let recommendation = recommend(history.clone())?;
        info!(
            currency = %currency,
            date = %recommendation.latest().date(),
            value = recommendation.latest().value(),
            buy = recommendation.buy(),
            "Computed recommendation"
        );

        Ok(Assessment {
            history,
            recommendation,
        })
    }
}
