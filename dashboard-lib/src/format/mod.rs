//! Presentation helpers for numbers, dates and text.
//!
//! Dates are rendered in UTC. Inputs may be RFC 3339 timestamps, naive
//! `YYYY-MM-DDTHH:MM:SS` timestamps or plain `YYYY-MM-DD` dates; anything
//! else renders as `-`.

pub mod renderers;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::model::Value;

const NO_DATE: &str = "-";

/// Inserts thousands separators into the integer part of a number.
///
/// ```
/// use dashboard_lib::format::format_number;
///
/// assert_eq!(format_number(Some(1234567.0)), "1,234,567");
/// assert_eq!(format_number(Some(-9876.25)), "-9,876.25");
/// assert_eq!(format_number(None), "0");
/// ```
pub fn format_number(num: Option<f64>) -> String {
    match num {
        Some(n) => group_digits(&number_text(n)),
        None => "0".to_string(),
    }
}

/// Abbreviates with `K`, `M` or `B` and one decimal.
pub fn format_compact_number(num: Option<f64>) -> String {
    let Some(n) = num else {
        return "0".to_string();
    };
    if n >= 1_000_000_000.0 {
        format!("{:.1}B", n / 1_000_000_000.0)
    } else if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        number_text(n)
    }
}

/// Dollar amount with thousands separators.
pub fn format_currency(amount: Option<f64>) -> String {
    format!("${}", format_number(Some(amount.unwrap_or(0.0))))
}

/// `Jan 15, 2024`
pub fn format_date(input: &str) -> String {
    parse_date(input)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| NO_DATE.to_string())
}

/// `Jan 15, 2024, 10:30 AM`
pub fn format_date_time(input: &str) -> String {
    parse_date(input)
        .map(|date| date.format("%b %-d, %Y, %I:%M %p").to_string())
        .unwrap_or_else(|| NO_DATE.to_string())
}

/// Relative age of `input` as seen at `now`.
///
/// Anything a week or older falls back to [`format_date`].
pub fn format_relative_time_at(input: &str, now: DateTime<Utc>) -> String {
    let Some(date) = parse_date(input) else {
        return NO_DATE.to_string();
    };
    let seconds = (now - date).num_seconds();
    match seconds {
        s if s < 60 => "Just now".to_string(),
        s if s < 3_600 => format!("{} min ago", s / 60),
        s if s < 86_400 => format!("{} hours ago", s / 3_600),
        s if s < 604_800 => format!("{} days ago", s / 86_400),
        _ => format_date(input),
    }
}

/// Relative age of `input` as of now.
pub fn format_relative_time(input: &str) -> String {
    format_relative_time_at(input, Utc::now())
}

/// Cuts `text` to `max_len` characters and appends `...` when it was longer.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push_str("...");
    out
}

/// Upper-cases the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Parses the timestamp formats the API emits.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(input) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date.and_utc());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}

fn number_text(n: f64) -> String {
    Value::Float(n).to_string()
}

fn group_digits(text: &str) -> String {
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (rest, None),
    };
    if !int_part.chars().all(|c| c.is_ascii_digit()) {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
