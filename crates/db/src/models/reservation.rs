//! Reservation entity model and DTOs.
//!
//! Every field of [`Reservation`] goes through the rules in
//! `lunchly_core::reservation`, whether it arrives from a create DTO, a
//! setter, or a database row. A live `Reservation` therefore always has at
//! least one guest, a start time and non-null notes.

use lunchly_core::error::CoreError;
use lunchly_core::reservation::{
    check_customer_assignment, format_start_at, normalize_notes, parse_start_at,
    validate_num_guests, validate_start_at,
};
use lunchly_core::types::{DbId, WallClock};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reservations` table, as selected with camelCase aliases.
#[derive(Debug, Clone, FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct ReservationRow {
    pub id: DbId,
    pub customer_id: DbId,
    pub num_guests: i32,
    pub start_at: WallClock,
    pub notes: Option<String>,
}

/// DTO for creating a new reservation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservation {
    /// May be left out and assigned later with [`Reservation::assign_customer`].
    pub customer_id: Option<DbId>,
    pub num_guests: i32,
    pub start_at: Option<WallClock>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A validated reservation, persisted or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    id: Option<DbId>,
    customer_id: Option<DbId>,
    num_guests: i32,
    start_at: WallClock,
    notes: String,
}

impl Reservation {
    /// Build an unsaved reservation, validating every field.
    pub fn new(input: CreateReservation) -> Result<Self, CoreError> {
        Self::build(
            None,
            input.customer_id,
            input.num_guests,
            input.start_at,
            input.notes,
        )
    }

    fn build(
        id: Option<DbId>,
        customer_id: Option<DbId>,
        num_guests: i32,
        start_at: Option<WallClock>,
        notes: Option<String>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            id,
            customer_id,
            num_guests: validate_num_guests(num_guests)?,
            start_at: validate_start_at(start_at)?,
            notes: normalize_notes(notes),
        })
    }

    pub fn id(&self) -> Option<DbId> {
        self.id
    }

    pub fn customer_id(&self) -> Option<DbId> {
        self.customer_id
    }

    pub fn num_guests(&self) -> i32 {
        self.num_guests
    }

    pub fn start_at(&self) -> WallClock {
        self.start_at
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// `true` once the store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Start time for display, e.g. `March 4th 2024, 6:30 pm`.
    pub fn formatted_start_at(&self) -> String {
        format_start_at(&self.start_at)
    }

    /// Change the party size. On failure the previous value is kept.
    pub fn set_num_guests(&mut self, num_guests: i32) -> Result<(), CoreError> {
        self.num_guests = validate_num_guests(num_guests)?;
        Ok(())
    }

    /// Change the start time. `None` is rejected and the previous value kept.
    pub fn set_start_at(&mut self, start_at: Option<WallClock>) -> Result<(), CoreError> {
        self.start_at = validate_start_at(start_at)?;
        Ok(())
    }

    /// Change the start time from user-supplied text.
    pub fn set_start_at_str(&mut self, raw: &str) -> Result<(), CoreError> {
        self.start_at = parse_start_at(raw)?;
        Ok(())
    }

    /// Replace the notes; absent or empty input stores `""`.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = normalize_notes(notes);
    }

    /// Attach the reservation to a customer.
    ///
    /// Write-once: the same id may be assigned again, a different one fails.
    pub fn assign_customer(&mut self, customer_id: DbId) -> Result<(), CoreError> {
        self.customer_id = Some(check_customer_assignment(self.customer_id, customer_id)?);
        Ok(())
    }

    pub(crate) fn mark_persisted(&mut self, id: DbId) {
        self.id = Some(id);
    }
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = CoreError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        Self::build(
            Some(row.id),
            Some(row.customer_id),
            row.num_guests,
            Some(row.start_at),
            row.notes,
        )
    }
}
