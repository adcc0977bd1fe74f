//! Validation utilities for the Plant Care Assistant
//!
//! Reminder input is normalized, never rejected with an error; the
//! suggestion response contract is validated strictly.

use crate::models::{Plant, SuggestedPlant};

/// Frequency applied when a reminder is added with an invalid one
pub const DEFAULT_FREQUENCY_DAYS: u32 = 7;

/// Lower bound on the watering interval a room form may state
pub const MIN_WATERING_INTERVAL_DAYS: u32 = 1;

/// Number of suggestions the external service must return
pub const SUGGESTION_COUNT: usize = 3;

// ============================================================================
// Reminder Input Normalization
// ============================================================================

/// Trim a task label; `None` when nothing is left.
pub fn normalize_task_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Coerce a submitted frequency into a usable day count.
///
/// Absent or non-positive values fall back to [`DEFAULT_FREQUENCY_DAYS`].
pub fn normalize_frequency_days(frequency_days: Option<i64>) -> u32 {
    match frequency_days {
        Some(f) if f >= 1 && f <= i64::from(u32::MAX) => f as u32,
        _ => DEFAULT_FREQUENCY_DAYS,
    }
}

// ============================================================================
// Room Condition Validations
// ============================================================================

/// Validate the maximum days-between-waterings a room form states
pub fn validate_watering_interval(days: u32) -> Result<(), &'static str> {
    if days < MIN_WATERING_INTERVAL_DAYS {
        return Err("Watering interval must be at least 1 day");
    }
    Ok(())
}

// ============================================================================
// Suggestion Contract Validations
// ============================================================================

/// Check whether a suggested name matches a catalog plant
pub fn is_catalog_plant(name: &str, catalog: &[Plant]) -> bool {
    catalog
        .iter()
        .any(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

/// Validate a parsed suggestion response against the contract:
/// exactly [`SUGGESTION_COUNT`] entries, each naming a catalog plant.
///
/// Field presence is already enforced during deserialization; a violation
/// here means the service ignored its instructions and the whole response
/// is discarded, never partially accepted.
pub fn validate_suggestions(
    suggestions: &[SuggestedPlant],
    catalog: &[Plant],
) -> Result<(), &'static str> {
    if suggestions.len() != SUGGESTION_COUNT {
        return Err("Response must contain exactly 3 suggestions");
    }
    for suggestion in suggestions {
        if !is_catalog_plant(&suggestion.plant_name, catalog) {
            return Err("Suggested plant is not in the catalog");
        }
    }
    Ok(())
}
