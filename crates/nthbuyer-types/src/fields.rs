//! Typed field extraction from a raw JSON request object.
//!
//! A JSON `null` counts as an absent field everywhere. This includes
//! `is_weekend_or_holiday`: a `null` there fails the required-field check in
//! purchase-rate mode and echoes no threshold in cadence mode.

use serde_json::{Map, Value};

use crate::{EstimateError, Result, TimelineError};

/// Raw request object as received from the caller.
pub(crate) type Payload = Map<String, Value>;

fn present<'a>(payload: &'a Payload, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|value| !value.is_null())
}

/// Returns true if the key is present and not null.
pub(crate) fn contains(payload: &Payload, key: &str) -> bool {
    present(payload, key).is_some()
}

/// Reads an optional number; a present non-number is a validation error.
pub(crate) fn number(payload: &Payload, key: &str) -> Result<Option<f64>> {
    match present(payload, key) {
        None => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| EstimateError::validation(format!("{key} must be a number"))),
    }
}

/// Reads a required number.
pub(crate) fn required_number(payload: &Payload, key: &'static str) -> Result<f64> {
    number(payload, key)?.ok_or(EstimateError::MissingField(key))
}

/// Reads an optional number, ignoring values that are not numbers.
pub(crate) fn lenient_number(payload: &Payload, key: &str) -> Option<f64> {
    present(payload, key).and_then(Value::as_f64)
}

/// Reads an optional boolean; a present non-boolean is a validation error.
pub(crate) fn boolean(payload: &Payload, key: &str) -> Result<Option<bool>> {
    match present(payload, key) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| EstimateError::validation(format!("{key} must be true or false"))),
    }
}

/// Reads an optional string; a present non-string is a validation error.
pub(crate) fn string<'a>(payload: &'a Payload, key: &str) -> Result<Option<&'a str>> {
    match present(payload, key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| EstimateError::validation(format!("{key} must be a string"))),
    }
}

/// Reads a required list of strings.
pub(crate) fn string_list(payload: &Payload, key: &'static str) -> Result<Vec<String>> {
    let value = present(payload, key).ok_or(EstimateError::MissingField(key))?;
    let items = value
        .as_array()
        .ok_or_else(|| EstimateError::validation(format!("{key} must be a list of strings")))?;

    if items.len() < 2 {
        return Err(TimelineError::TooFewEntries { count: items.len() }.into());
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_owned)
                .ok_or(EstimateError::Timeline(TimelineError::NotAString { index }))
        })
        .collect()
}
