//! Historical rate provider abstractions

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use serde_json::Value;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    pub start_at: NaiveDate,
    pub end_at: NaiveDate,
}

impl TrailingWindow {
    pub const DEFAULT_DAYS: u32 = 7;

    /// Window starting `days` calendar days before `today` and ending on it.
    ///
    /// Both ends are inclusive, so the window spans `days + 1` dates.
    pub fn ending(today: NaiveDate, days: u32) -> Self {
        let start_at = today
            .checked_sub_days(Days::new(days.into()))
            .unwrap_or(NaiveDate::MIN);
        Self {
            start_at,
            end_at: today,
        }
    }
}

impl Display for TrailingWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start_at, self.end_at)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Rate provider unavailable: {0}")]
    Unavailable(String),

    #[error("Unreadable rate provider response: {0}")]
    UnreadableBody(String),
}

#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetches the raw historical-rates payload of `currency` over `window`.
    async fn fetch_history(
        &self,
        currency: &str,
        window: &TrailingWindow,
    ) -> Result<Value, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_week() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let window = TrailingWindow::ending(today, TrailingWindow::DEFAULT_DAYS);

        assert_eq!(window.start_at, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        assert_eq!(window.end_at, today);
        assert_eq!(window.to_string(), "2024-02-26..2024-03-04");
        assert_eq!((window.end_at - window.start_at).num_days(), 7);
    }

    #[test]
    fn test_zero_day_window() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let window = TrailingWindow::ending(today, 0);
        assert_eq!(window.start_at, window.end_at);
    }
}
