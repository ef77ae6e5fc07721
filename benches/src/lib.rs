//! Request fixtures for the nthbuyer benchmarks.

use serde_json::{Value, json};

/// A purchase-rate request with economics inputs.
#[must_use]
pub fn purchase_rate_request() -> Value {
    json!({
        "mode": "purchase_rate",
        "is_weekend_or_holiday": false,
        "model": "global",
        "observed_purchases": 10,
        "observed_minutes": 60,
        "observed_lanes": 5,
        "total_open_lanes": 8,
        "expected_bonus_value": 100_000,
        "time_value_per_minute": 500
    })
}

/// A winner-timestamps request with `count` wall-clock timestamps.
///
/// Intervals alternate between 4 and 9 minutes, so the history spans
/// midnight once `count` is large enough.
#[must_use]
pub fn wall_clock_request(count: usize) -> Value {
    let mut minute = 9 * 60;
    let timestamps: Vec<String> = (0..count)
        .map(|i| {
            let stamp = format!("{}:{:02}", (minute / 60) % 24, minute % 60);
            minute += if i % 2 == 0 { 4 } else { 9 };
            stamp
        })
        .collect();

    json!({
        "mode": "winner_timestamps",
        "winner_timestamps": timestamps,
        "elapsed_since_last_winner_minutes": 2
    })
}

/// A winner-timestamps request with `count` RFC 3339 timestamps.
#[must_use]
pub fn absolute_request(count: usize) -> Value {
    let timestamps: Vec<String> = (0..count)
        .map(|i| {
            let minute = i * 7;
            let day = 1 + minute / (24 * 60);
            let rest = minute % (24 * 60);
            format!(
                "2024-06-{day:02}T{:02}:{:02}:00-05:00",
                rest / 60,
                rest % 60
            )
        })
        .collect();

    json!({
        "mode": "winner_timestamps",
        "winner_timestamps": timestamps,
        "expected_bonus_value": 50_000,
        "time_value_per_minute": 250
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_estimate() {
        nthbuyer_lib::estimate_value(purchase_rate_request()).unwrap();
        nthbuyer_lib::estimate_value(wall_clock_request(200)).unwrap();
        nthbuyer_lib::estimate_value(absolute_request(200)).unwrap();
    }
}
