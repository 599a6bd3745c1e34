//! Buy / don't-buy signal from a week of observations

use super::error::{CoreError, Result};
use super::observation::{Observation, Recommendation};
use std::cmp::Ordering;

/// Keeps only the observations of `currency`.
pub fn for_currency(observations: Vec<Observation>, currency: &str) -> Vec<Observation> {
    observations
        .into_iter()
        .filter(|o| o.currency() == currency)
        .collect()
}

/// Sorts observations most recent first. Equal dates keep their relative order.
pub fn order_by_recency(observations: &mut [Observation]) {
    observations.sort_by(|a, b| b.date().cmp(&a.date()));
}

/// Compares the latest valuation against every other one in the history.
///
/// Each older valuation above the latest counts against buying, each one below
/// counts in favor. Buying is recommended unless the valuations above outnumber
/// the ones below, so ties favor buying.
pub fn recommend(mut observations: Vec<Observation>) -> Result<Recommendation> {
    let first = observations.first().ok_or(CoreError::EmptyHistory)?;
    if let Some(other) = observations
        .iter()
        .find(|o| o.currency() != first.currency())
    {
        return Err(CoreError::MixedCurrencies {
            expected: first.currency().to_string(),
            found: other.currency().to_string(),
        });
    }

    order_by_recency(&mut observations);
    let latest = observations.swap_remove(0);

    let score: i64 = observations
        .iter()
        .map(|o| match o.value().partial_cmp(&latest.value()) {
            Some(Ordering::Greater) => -1,
            Some(Ordering::Less) => 1,
            _ => 0,
        })
        .sum();

    Ok(Recommendation::new(latest, score >= 0))
}
