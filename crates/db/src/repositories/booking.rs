//! Booking transitions. Every `free → booked` flip in the system goes
//! through [`book_slot`] or [`move_booking`]: a conditional UPDATE keyed on
//! the slot id and its expected prior status, inside a transaction with the
//! booking-row write. The store decides the winner; callers only observe
//! the outcome.

use crate::models::{DbBookedSlot, DbSlot};
use crate::repositories::slot::get_slot_by_id;
use chrono::Utc;
use eyre::Result;
use slotbook_core::models::slot::SlotStatus;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Result of a claim attempt on one slot.
#[derive(Debug, Clone, PartialEq)]
pub enum BookOutcome {
    /// The claim won; the returned row is the slot as claimed.
    Booked(DbSlot),
    /// The slot exists but was no longer free at commit time.
    Unavailable,
    /// No slot with that id.
    NotFound,
}

/// Result of moving a booking to another slot.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// The booking now owns the returned target slot; the source is free.
    Moved(DbSlot),
    TargetUnavailable,
    TargetNotFound,
    /// The source slot had no booking to move.
    BookingNotFound,
}

/// Claims a free slot for the given contact. The status recheck happens
/// here, at commit time; client-held snapshots are never trusted. Under
/// concurrent attempts on the same slot, the row lock taken by the
/// conditional UPDATE serializes them and exactly one observes `Booked`.
pub async fn book_slot(
    pool: &Pool<Postgres>,
    slot_id: Uuid,
    booking_name: &str,
    phone: &str,
    email: &str,
) -> Result<BookOutcome> {
    let mut tx = pool.begin().await?;

    let claimed = sqlx::query_as::<_, DbSlot>(
        r#"
        UPDATE slots
        SET status = $2
        WHERE id = $1 AND status = $3
        RETURNING id, date, time, status
        "#,
    )
    .bind(slot_id)
    .bind(SlotStatus::Booked.as_str())
    .bind(SlotStatus::Free.as_str())
    .fetch_optional(&mut *tx)
    .await?;

    let Some(slot) = claimed else {
        tx.rollback().await?;
        return Ok(match get_slot_by_id(pool, slot_id).await? {
            Some(_) => BookOutcome::Unavailable,
            None => BookOutcome::NotFound,
        });
    };

    sqlx::query(
        r#"
        INSERT INTO bookings (slot_id, booking_name, phone, email, created_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(slot_id)
    .bind(booking_name)
    .bind(phone)
    .bind(email)
    .bind(Utc::now())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Slot {} booked for {}", slot_id, booking_name);
    Ok(BookOutcome::Booked(slot))
}

/// All currently booked slots joined with their contact data, ordered by
/// `(date, time)`.
pub async fn list_bookings(pool: &Pool<Postgres>) -> Result<Vec<DbBookedSlot>> {
    let bookings = sqlx::query_as::<_, DbBookedSlot>(
        r#"
        SELECT s.id, s.date, s.time, s.status, b.booking_name, b.phone, b.email
        FROM slots s
        JOIN bookings b ON b.slot_id = s.id
        WHERE s.status = $1
        ORDER BY s.date, s.time
        "#,
    )
    .bind(SlotStatus::Booked.as_str())
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Updates a booking's contact fields in place. Only permitted while the
/// owning slot is booked; slot status and id are untouched. Returns false
/// when there is nothing to update (no booking, or the slot was freed by a
/// concurrent cancellation).
pub async fn update_booking(
    pool: &Pool<Postgres>,
    slot_id: Uuid,
    booking_name: &str,
    phone: &str,
    email: &str,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE bookings
        SET booking_name = $2, phone = $3, email = $4
        FROM slots
        WHERE bookings.slot_id = $1
          AND slots.id = bookings.slot_id
          AND slots.status = $5
        "#,
    )
    .bind(slot_id)
    .bind(booking_name)
    .bind(phone)
    .bind(email)
    .bind(SlotStatus::Booked.as_str())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Deletes the booking and frees its slot as one unit. A reader can never
/// observe a freed slot with a lingering booking or a booked slot with no
/// booking row. Returns false when no booking exists for the slot.
pub async fn cancel_booking(pool: &Pool<Postgres>, slot_id: Uuid) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE slot_id = $1
        "#,
    )
    .bind(slot_id)
    .execute(&mut *tx)
    .await?;

    if deleted.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    sqlx::query(
        r#"
        UPDATE slots
        SET status = $2
        WHERE id = $1
        "#,
    )
    .bind(slot_id)
    .bind(SlotStatus::Free.as_str())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Booking on slot {} cancelled, slot freed", slot_id);
    Ok(true)
}

/// Moves a booking from one slot to another, refreshing its contact fields.
/// The target is claimed under the same free-at-commit rule as a fresh
/// booking; claim, retarget, and release of the source are one transaction,
/// so a failed move leaves the source untouched.
pub async fn move_booking(
    pool: &Pool<Postgres>,
    from_slot_id: Uuid,
    to_slot_id: Uuid,
    booking_name: &str,
    phone: &str,
    email: &str,
) -> Result<MoveOutcome> {
    let mut tx = pool.begin().await?;

    let claimed = sqlx::query_as::<_, DbSlot>(
        r#"
        UPDATE slots
        SET status = $2
        WHERE id = $1 AND status = $3
        RETURNING id, date, time, status
        "#,
    )
    .bind(to_slot_id)
    .bind(SlotStatus::Booked.as_str())
    .bind(SlotStatus::Free.as_str())
    .fetch_optional(&mut *tx)
    .await?;

    let Some(target) = claimed else {
        tx.rollback().await?;
        return Ok(match get_slot_by_id(pool, to_slot_id).await? {
            Some(_) => MoveOutcome::TargetUnavailable,
            None => MoveOutcome::TargetNotFound,
        });
    };

    let moved = sqlx::query(
        r#"
        UPDATE bookings
        SET slot_id = $2, booking_name = $3, phone = $4, email = $5
        WHERE slot_id = $1
        "#,
    )
    .bind(from_slot_id)
    .bind(to_slot_id)
    .bind(booking_name)
    .bind(phone)
    .bind(email)
    .execute(&mut *tx)
    .await?;

    if moved.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(MoveOutcome::BookingNotFound);
    }

    sqlx::query(
        r#"
        UPDATE slots
        SET status = $2
        WHERE id = $1
        "#,
    )
    .bind(from_slot_id)
    .bind(SlotStatus::Free.as_str())
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(
        "Booking moved from slot {} to slot {}",
        from_slot_id,
        to_slot_id
    );
    Ok(MoveOutcome::Moved(target))
}
