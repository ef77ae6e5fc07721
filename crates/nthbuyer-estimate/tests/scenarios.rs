//! End-to-end scenarios through the JSON entry point.

use approx::assert_relative_eq;
use nthbuyer_estimate::estimate_value;
use nthbuyer_types::{CadenceModel, EstimateError, EstimationResult, TimelineError};
use serde_json::{Value, json};

fn purchase_rate_request() -> Value {
    json!({
        "mode": "purchase_rate",
        "is_weekend_or_holiday": false,
        "model": "global",
        "observed_purchases": 10,
        "observed_minutes": 60,
        "observed_lanes": 5,
        "total_open_lanes": 5,
        "confidence_buffer": 0.2,
        "target_hit_probability": 0.75,
        "max_wait_minutes": 30
    })
}

fn cadence_request(timestamps: &[&str]) -> Value {
    json!({
        "mode": "winner_timestamps",
        "winner_timestamps": timestamps,
    })
}

#[test]
fn scenario_a_purchase_rate_clamped_to_max_wait() {
    let result = estimate_value(purchase_rate_request()).unwrap();
    let EstimationResult::PurchaseRate(result) = result else {
        panic!("expected purchase rate result");
    };

    assert_eq!(result.k_threshold_clients, 25);
    assert_eq!(result.probability_win_per_attempt, 0.04);
    assert_eq!(result.rates.purchases_per_minute_observed, 0.17);
    assert_eq!(result.rates.purchases_per_minute_estimated, 0.17);
    assert_eq!(result.rates.purchases_per_minute_conservative, 0.13);
    assert_eq!(result.rates.lane_scale_factor, 1.0);
    assert_eq!(result.wait_estimates_minutes.mean_interval_between_winners, 187.5);
    assert_eq!(result.wait_estimates_minutes.expected_wait_to_next_winner, 93.75);
    assert_eq!(result.wait_estimates_minutes.p50_wait_to_next_winner, 93.75);
    // 140.625 is an exact tie and rounds to the even digit
    assert_eq!(result.wait_estimates_minutes.p75_wait_to_next_winner, 140.62);
    assert_eq!(result.wait_estimates_minutes.p90_wait_to_next_winner, 168.75);
    assert_eq!(result.recommendation.optimal_wait_minutes, 30.0);
    assert_eq!(
        result.recommendation.probability_next_winner_within_optimal_wait,
        0.16
    );
    assert!(result.economics.is_none());
}

#[test]
fn scenario_a_serialized_layout() {
    let result = estimate_value(purchase_rate_request()).unwrap();
    let text = serde_json::to_string(&result).unwrap();

    assert!(text.starts_with(r#"{"mode":"purchase_rate","k_threshold_clients":25,"#));
    let value: Value = serde_json::from_str(&text).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    for key in [
        "mode",
        "k_threshold_clients",
        "probability_win_per_attempt",
        "rates",
        "wait_estimates_minutes",
        "recommendation",
    ] {
        assert!(keys.contains(&key), "missing key {key}");
    }
    assert!(!keys.contains(&"economics"));
}

#[test]
fn scenario_b_regular_cadence() {
    let result = estimate_value(cadence_request(&["09:00", "09:05"])).unwrap();
    let EstimationResult::WinnerTimestamps(result) = result else {
        panic!("expected cadence result");
    };

    let analysis = &result.cadence_analysis;
    assert_eq!(analysis.intervals_minutes, vec![5.0]);
    assert_eq!(analysis.interval_mean_minutes, 5.0);
    assert_eq!(analysis.interval_std_minutes, 0.0);
    assert_eq!(analysis.interval_cv, 0.0);
    assert_eq!(analysis.cadence_model, CadenceModel::Regular);
    assert_eq!(result.k_threshold_clients, None);
    assert_eq!(result.probability_win_per_attempt, None);
}

#[test]
fn scenario_c_midnight_rollover() {
    let result = estimate_value(cadence_request(&["08:00", "08:10", "08:05"])).unwrap();
    let EstimationResult::WinnerTimestamps(result) = result else {
        panic!("expected cadence result");
    };

    assert_eq!(result.cadence_analysis.intervals_minutes, vec![10.0, 1435.0]);
    assert_eq!(result.cadence_analysis.cadence_model, CadenceModel::Random);
}

#[test]
fn scenario_d_absolute_out_of_order() {
    let err = estimate_value(cadence_request(&[
        "2024-06-01T10:20:00-05:00",
        "2024-06-01T10:05:00-05:00",
        "2024-06-01T10:40:00-05:00",
    ]))
    .unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(
        err,
        EstimateError::Timeline(TimelineError::NotAscending { index: 1 })
    ));
}

#[test]
fn threshold_matches_day_type() {
    for (weekend, k, probability) in [(false, 25, 0.04), (true, 50, 0.02)] {
        let mut request = purchase_rate_request();
        request["is_weekend_or_holiday"] = json!(weekend);

        let EstimationResult::PurchaseRate(result) = estimate_value(request).unwrap() else {
            panic!("expected purchase rate result");
        };
        assert_eq!(result.k_threshold_clients, k);
        assert_eq!(result.probability_win_per_attempt, probability);
    }
}

#[test]
fn cadence_echoes_day_type() {
    let mut request = cadence_request(&["09:00", "09:05"]);
    request["is_weekend_or_holiday"] = json!(true);

    let EstimationResult::WinnerTimestamps(result) = estimate_value(request).unwrap() else {
        panic!("expected cadence result");
    };
    assert_eq!(result.k_threshold_clients, Some(50));
    assert_eq!(result.probability_win_per_attempt, Some(0.02));
}

#[test]
fn lane_scale_factor_defaults_to_one() {
    let mut request = purchase_rate_request();
    request.as_object_mut().unwrap().remove("total_open_lanes");
    let EstimationResult::PurchaseRate(without) = estimate_value(request.clone()).unwrap() else {
        panic!("expected purchase rate result");
    };
    assert_eq!(without.rates.lane_scale_factor, 1.0);

    request["total_open_lanes"] = json!(2);
    let EstimationResult::PurchaseRate(fewer) = estimate_value(request.clone()).unwrap() else {
        panic!("expected purchase rate result");
    };
    assert_eq!(fewer.rates.lane_scale_factor, 1.0);

    request["total_open_lanes"] = json!(12);
    let EstimationResult::PurchaseRate(more) = estimate_value(request).unwrap() else {
        panic!("expected purchase rate result");
    };
    assert_eq!(more.rates.lane_scale_factor, 2.4);
}

#[test]
fn percentiles_are_monotonic_and_optimal_wait_bounded() {
    let requests = [
        purchase_rate_request(),
        json!({
            "mode": "purchase_rate",
            "is_weekend_or_holiday": true,
            "model": "per_lane",
            "observed_purchases": 400,
            "observed_minutes": 5,
            "observed_lanes": 2,
            "max_wait_minutes": 0
        }),
        cadence_request(&["09:00", "09:05", "09:11"]),
        cadence_request(&["10:00", "10:10", "10:30", "10:35"]),
        cadence_request(&["08:00", "08:10", "08:05"]),
        json!({
            "mode": "winner_timestamps",
            "winner_timestamps": [
                "2024-06-01T10:00:00Z",
                "2024-06-01T10:03:00Z",
                "2024-06-01T10:20:00Z"
            ],
            "elapsed_since_last_winner_minutes": 50,
            "max_wait_minutes": 12
        }),
    ];

    for request in requests {
        let max_wait = request["max_wait_minutes"].as_f64().unwrap_or(30.0).max(1.0);
        let result = estimate_value(request).unwrap();
        let waits = result.wait_estimates();
        assert!(waits.p50_wait_to_next_winner <= waits.p75_wait_to_next_winner);
        assert!(waits.p75_wait_to_next_winner <= waits.p90_wait_to_next_winner);

        let lower = match &result {
            EstimationResult::PurchaseRate(_) => 1.0,
            EstimationResult::WinnerTimestamps(_) => 0.0,
        };
        let recommendation = result.recommendation();
        assert!(recommendation.optimal_wait_minutes >= lower);
        assert!(recommendation.optimal_wait_minutes <= max_wait);
        let probability = recommendation.probability_next_winner_within_optimal_wait;
        assert!((0.0..=1.0).contains(&probability));
    }
}

#[test]
fn economics_present_only_with_both_valid_inputs() {
    let cases = [
        (json!(100_000), json!(500), true),
        (json!(100_000), json!(0), true),
        (json!(100_000), Value::Null, false),
        (json!(100_000), json!("500"), false),
        (json!(-1), json!(500), false),
        (Value::Null, json!(500), false),
    ];

    for (bonus, time_value, expected) in cases {
        let mut request = purchase_rate_request();
        request["expected_bonus_value"] = bonus;
        request["time_value_per_minute"] = time_value;
        let result = estimate_value(request).unwrap();
        assert_eq!(result.economics().is_some(), expected);
    }
}

#[test]
fn economics_for_scenario_a() {
    let mut request = purchase_rate_request();
    request["expected_bonus_value"] = json!(100_000);
    request["time_value_per_minute"] = json!(500);

    let economics = *estimate_value(request).unwrap().economics().unwrap();
    assert_relative_eq!(economics.expected_value_for_optimal_wait, 16_000.0);
    assert_eq!(economics.expected_time_cost_for_optimal_wait, 15_000.0);
    assert_relative_eq!(economics.net_expected_value_for_optimal_wait, 1_000.0);
    assert_eq!(economics.value_expected_per_minute, 533.33);
    assert_eq!(economics.break_even_wait_minutes, 30.0);
}

#[test]
fn economics_ties_round_to_even() {
    let mut request = cadence_request(&["09:00", "09:05"]);
    request["expected_bonus_value"] = json!(1);
    request["time_value_per_minute"] = json!(0.025);

    let result = estimate_value(request).unwrap();
    assert_eq!(result.recommendation().optimal_wait_minutes, 5.0);
    // 5 * 0.025 is stored as exactly 0.125
    let economics = result.economics().unwrap();
    assert_eq!(economics.expected_time_cost_for_optimal_wait, 0.12);
}

#[test]
fn decision_rules_are_fixed() {
    let purchase = estimate_value(purchase_rate_request()).unwrap();
    assert_eq!(
        purchase.recommendation().decision_rule,
        "Si no sale ganador en este tiempo, remide 2 minutos y recalcula."
    );

    let cadence = estimate_value(cadence_request(&["09:00", "09:05"])).unwrap();
    assert_eq!(
        cadence.recommendation().decision_rule,
        "Si no escuchas ganador antes del corte, agrega 2-3 timestamps y recalcula."
    );
}

#[test]
fn unknown_mode_rejected() {
    let err = estimate_value(json!({ "mode": "raffle" })).unwrap_err();
    assert!(matches!(err, EstimateError::UnknownMode(Some(_))));
}
