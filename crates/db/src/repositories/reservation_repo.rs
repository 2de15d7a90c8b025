//! Repository for the `reservations` table.

use lunchly_core::error::CoreError;
use lunchly_core::reservation::MSG_NO_CUSTOMER;
use lunchly_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::reservation::{Reservation, ReservationRow};

/// Column list shared across queries. The aliases are what
/// [`ReservationRow`] maps from.
const COLUMNS: &str = r#"id,
       customer_id AS "customerId",
       num_guests AS "numGuests",
       start_at AS "startAt",
       notes"#;

/// Provides lookup and save operations for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// List every reservation belonging to a customer, in store order.
    ///
    /// An unknown customer yields an empty list, not an error.
    pub async fn find_all_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> DbResult<Vec<Reservation>> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE customer_id = $1");
        let rows = sqlx::query_as::<_, ReservationRow>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await?;
        tracing::debug!(customer_id, count = rows.len(), "Loaded reservations for customer");

        rows.into_iter()
            .map(|row| Reservation::try_from(row).map_err(DbError::from))
            .collect()
    }

    /// Find a reservation by id.
    ///
    /// Fails with [`CoreError::NotFound`] when no row matches.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Reservation> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        let row = sqlx::query_as::<_, ReservationRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match row {
            Some(row) => Ok(Reservation::try_from(row)?),
            None => {
                tracing::debug!(id, "Reservation not found");
                Err(CoreError::NotFound {
                    entity: "reservation",
                    id,
                }
                .into())
            }
        }
    }

    /// Persist a reservation.
    ///
    /// An unsaved reservation is inserted and receives the store-assigned id.
    /// A saved one has its guests, start time and notes updated; the owning
    /// customer is never rewritten.
    pub async fn save(pool: &PgPool, reservation: &mut Reservation) -> DbResult<()> {
        match reservation.id() {
            None => {
                let id = Self::insert(pool, reservation).await?;
                reservation.mark_persisted(id);
            }
            Some(id) => Self::update(pool, id, reservation).await?,
        }
        Ok(())
    }

    async fn insert(pool: &PgPool, reservation: &Reservation) -> DbResult<DbId> {
        let customer_id = reservation
            .customer_id()
            .ok_or_else(|| CoreError::Validation(MSG_NO_CUSTOMER.to_string()))?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO reservations (customer_id, num_guests, start_at, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(customer_id)
        .bind(reservation.num_guests())
        .bind(reservation.start_at())
        .bind(reservation.notes())
        .fetch_one(pool)
        .await?;

        tracing::info!(id, customer_id, "Reservation created");
        Ok(id)
    }

    async fn update(pool: &PgPool, id: DbId, reservation: &Reservation) -> DbResult<()> {
        let result = sqlx::query(
            "UPDATE reservations SET num_guests = $1, start_at = $2, notes = $3
             WHERE id = $4",
        )
        .bind(reservation.num_guests())
        .bind(reservation.start_at())
        .bind(reservation.notes())
        .bind(id)
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(id, "Reservation update matched no rows");
        } else {
            tracing::info!(id, "Reservation updated");
        }
        Ok(())
    }
}
