//! WebAssembly module for the Plant Care Assistant
//!
//! Provides client-side computation for:
//! - Urgency classification of care reminders
//! - Next-due-date arithmetic
//! - Reminder input normalization

use chrono::NaiveDate;
use js_sys::Date;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_date(value: &str) -> Result<NaiveDate, JsValue> {
    value
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Invalid date: {}", value)))
}

/// The browser's local calendar date
fn today_local() -> NaiveDate {
    let now = Date::new_0();
    // js_sys months are zero-based
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() as u32 + 1,
        now.get_date() as u32,
    )
    .unwrap_or_default()
}

/// Classify a due date (ISO 8601) against an explicit today (ISO 8601)
#[wasm_bindgen]
pub fn classify_urgency_tier(due_date: &str, today: &str) -> Result<String, JsValue> {
    let due = parse_date(due_date)?;
    let today = parse_date(today)?;
    Ok(format!("{}", shared::classify_urgency(due, today)))
}

/// Classify a due date (ISO 8601) against the browser's local today
#[wasm_bindgen]
pub fn classify_urgency_now(due_date: &str) -> Result<String, JsValue> {
    let due = parse_date(due_date)?;
    Ok(format!("{}", shared::classify_urgency(due, today_local())))
}

/// Next due date, `frequency_days` calendar days after `from` (ISO 8601)
#[wasm_bindgen]
pub fn next_due_date(from: &str, frequency_days: u32) -> Result<String, JsValue> {
    let from = parse_date(from)?;
    Ok(shared::next_due_date(from, frequency_days).to_string())
}

/// Classify a reminder record (JSON) against the browser's local today
#[wasm_bindgen]
pub fn classify_reminder_urgency(reminder_json: &str) -> Result<String, JsValue> {
    let reminder: Reminder = serde_json::from_str(reminder_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reminder JSON: {}", e)))?;

    Ok(format!(
        "{}",
        shared::classify_urgency(reminder.next_reminder_date, today_local())
    ))
}

/// Coerce a submitted repeat frequency into a usable day count
#[wasm_bindgen]
pub fn normalize_frequency(frequency_days: i32) -> u32 {
    shared::normalize_frequency_days(Some(i64::from(frequency_days)))
}

/// Whether a task label survives trimming
#[wasm_bindgen]
pub fn is_valid_task_text(text: &str) -> bool {
    shared::normalize_task_text(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_urgency_tier() {
        assert_eq!(
            classify_urgency_tier("2024-01-11", "2024-01-10").unwrap(),
            "Critical"
        );
        assert_eq!(
            classify_urgency_tier("2024-01-15", "2024-01-10").unwrap(),
            "Soon"
        );
        assert_eq!(
            classify_urgency_tier("2024-01-25", "2024-01-10").unwrap(),
            "Later"
        );
    }

    #[test]
    fn test_next_due_date() {
        assert_eq!(next_due_date("2024-01-10", 7).unwrap(), "2024-01-17");
    }

    #[test]
    fn test_normalize_frequency() {
        assert_eq!(normalize_frequency(14), 14);
        assert_eq!(normalize_frequency(0), 7);
        assert_eq!(normalize_frequency(-5), 7);
    }

    #[test]
    fn test_is_valid_task_text() {
        assert!(is_valid_task_text("Water the Monstera"));
        assert!(!is_valid_task_text("   "));
    }
}
