//! Reservation field rules.
//!
//! Guest count, start time, notes and customer assignment checks shared by
//! the model constructor and its setters, plus the display format used for
//! start times.

use chrono::{DateTime, Datelike, NaiveDateTime};

use crate::error::CoreError;
use crate::types::{DbId, WallClock};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest party a reservation can be made for.
pub const MIN_GUESTS: i32 = 1;

pub const MSG_TOO_FEW_GUESTS: &str = "Must have at least 1 guest. Please try again.";
pub const MSG_INVALID_START: &str = "Not a valid starting point. Please try again.";
pub const MSG_CUSTOMER_LOCKED: &str = "Unable to change Customer ID.";
pub const MSG_NO_CUSTOMER: &str = "Reservation must belong to a customer.";

/// Zone-less layouts accepted by [`parse_start_at`], tried in order.
///
/// `%.f` reads nothing when no fractional part is present.
const WALL_CLOCK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a party size. Returns the value unchanged when it is at least
/// [`MIN_GUESTS`].
pub fn validate_num_guests(num_guests: i32) -> Result<i32, CoreError> {
    if num_guests < MIN_GUESTS {
        return Err(CoreError::Validation(MSG_TOO_FEW_GUESTS.to_string()));
    }
    Ok(num_guests)
}

/// Validate that a start time was supplied at all.
pub fn validate_start_at(start_at: Option<WallClock>) -> Result<WallClock, CoreError> {
    start_at.ok_or_else(|| CoreError::Validation(MSG_INVALID_START.to_string()))
}

/// Parse a start time from text.
///
/// Accepts RFC 3339 (the wall clock in the given offset is kept) and the
/// zone-less layouts in [`WALL_CLOCK_FORMATS`]. Anything else, including an
/// out-of-range date such as `2024-02-30`, fails validation.
pub fn parse_start_at(raw: &str) -> Result<WallClock, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::Validation(MSG_INVALID_START.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }

    WALL_CLOCK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| CoreError::Validation(MSG_INVALID_START.to_string()))
}

/// Map empty-equivalent notes (absent or `""`) to the empty string.
///
/// Whitespace is content and is kept as given.
pub fn normalize_notes(notes: Option<String>) -> String {
    notes.unwrap_or_default()
}

/// Check a customer assignment against the current owner.
///
/// Assigning while unowned, or re-assigning the same id, succeeds. Moving a
/// reservation to a different customer does not.
pub fn check_customer_assignment(current: Option<DbId>, next: DbId) -> Result<DbId, CoreError> {
    match current {
        Some(existing) if existing != next => {
            Err(CoreError::Validation(MSG_CUSTOMER_LOCKED.to_string()))
        }
        _ => Ok(next),
    }
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// English ordinal suffix for a day of the month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Render a start time for display, e.g. `March 4th 2024, 6:30 pm`.
pub fn format_start_at(start_at: &WallClock) -> String {
    let day = start_at.day();
    format!(
        "{} {day}{} {}, {}",
        start_at.format("%B"),
        ordinal_suffix(day),
        start_at.year(),
        start_at.format("%-I:%M %P"),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
