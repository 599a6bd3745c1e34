//! Typed rate observations and the recommendation built from them

use super::error::{CoreError, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Valuation of one unit of the base currency in `currency` on `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    date: NaiveDate,
    currency: String,
    value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, currency: impl Into<String>, value: f64) -> Self {
        Self {
            date,
            currency: currency.into(),
            value,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Latest observation of a currency and whether exchanging now looks favorable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    latest: Observation,
    buy: bool,
}

impl Recommendation {
    pub(crate) fn new(latest: Observation, buy: bool) -> Self {
        Self { latest, buy }
    }

    pub fn latest(&self) -> &Observation {
        &self.latest
    }

    pub fn buy(&self) -> bool {
        self.buy
    }
}

/// Validates a currency code and returns it uppercased.
///
/// Codes are three ASCII letters, e.g. `usd` becomes `USD`.
pub fn normalize_currency(code: &str) -> Result<String> {
    let trimmed = code.trim();
    if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(CoreError::InvalidCurrency(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_recommendation_serializes_flat() {
        let recommendation =
            Recommendation::new(Observation::new(date("2024-01-03"), "USD", 1.2), true);

        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2024-01-03",
                "currency": "USD",
                "value": 1.2,
                "buy": true
            })
        );
    }

    #[test]
    fn test_normalize_currency() {
        assert_eq!(normalize_currency("gbp").unwrap(), "GBP");
        assert_eq!(normalize_currency(" USD ").unwrap(), "USD");

        for bad in ["", "US", "USDX", "U5D", "€€€"] {
            assert_eq!(
                normalize_currency(bad),
                Err(CoreError::InvalidCurrency(bad.to_string())),
                "expected '{bad}' to be rejected"
            );
        }
    }
}
