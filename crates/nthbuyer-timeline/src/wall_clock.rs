//! Same-day wall-clock readings (`H:MM`, `HH:MM`, `HH:MM:SS`).

use tracing::trace;

const SECONDS_PER_DAY: i64 = 24 * 3600;

fn digits(part: &str, min_len: usize, max_len: usize) -> Option<i64> {
    if part.len() < min_len || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Parses a 24-hour clock reading into seconds since midnight.
///
/// The hour takes one or two digits, minutes and seconds exactly two.
pub(crate) fn parse_seconds(value: &str) -> Option<i64> {
    let mut parts = value.split(':');
    let hour = digits(parts.next()?, 1, 2)?;
    let minute = digits(parts.next()?, 2, 2)?;
    let second = match parts.next() {
        Some(part) => digits(part, 2, 2)?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }

    if !(0..=23).contains(&hour) || !(0..=59).contains(&minute) || !(0..=59).contains(&second) {
        return None;
    }
    Some(hour * 3600 + minute * 60 + second)
}

/// Lays clock readings on a continuous axis, in minutes.
///
/// Every reading not strictly after the running total is pushed forward by
/// whole days until it is, so a repeat of the previous reading lands one day
/// later.
pub(crate) fn unroll(readings: &[i64]) -> Vec<f64> {
    let Some((&first, rest)) = readings.split_first() else {
        return Vec::new();
    };

    let mut current = first;
    let mut minutes = Vec::with_capacity(readings.len());
    minutes.push(current as f64 / 60.0);

    for (offset, &reading) in rest.iter().enumerate() {
        let mut candidate = reading;
        if candidate <= current {
            let days = (current - candidate) / SECONDS_PER_DAY + 1;
            candidate += days * SECONDS_PER_DAY;
            trace!(index = offset + 1, days, "Wall-clock reading rolled over");
        }
        minutes.push(candidate as f64 / 60.0);
        current = candidate;
    }

    minutes
}
