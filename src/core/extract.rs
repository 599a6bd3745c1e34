//! Linearizes the provider's `date -> currency -> value` payload into observations

use super::error::{CoreError, Result};
use super::observation::Observation;
use chrono::NaiveDate;
use serde_json::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts a historical-rates payload into a flat list of observations.
///
/// The payload keys dates dynamically:
///
/// ```text
/// { "rates": { "2024-01-01": { "USD": 1.1 }, "2024-01-02": { "USD": 1.2 } } }
/// ```
///
/// Emission order follows the payload's map order and must not be relied upon.
pub fn extract(payload: &Value) -> Result<Vec<Observation>> {
    let rates = payload
        .get("rates")
        .and_then(Value::as_object)
        .ok_or_else(|| CoreError::MalformedPayload(r#"unable to parse "rates""#.to_string()))?;

    let mut observations = Vec::with_capacity(rates.len());
    for (date, by_currency) in rates {
        let parsed_date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| CoreError::MalformedPayload(format!("invalid date '{date}': {e}")))?;

        let by_currency = by_currency.as_object().ok_or_else(|| {
            CoreError::MalformedPayload(format!("rates for {date} are not a mapping"))
        })?;

        for (currency, value) in by_currency {
            let value = value.as_f64().ok_or_else(|| {
                CoreError::MalformedPayload(format!(
                    "rate for {currency} on {date} is not numeric"
                ))
            })?;
            observations.push(Observation::new(parsed_date, currency.as_str(), value));
        }
    }

    Ok(observations)
}
