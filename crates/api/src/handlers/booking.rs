use axum::{extract::State, Json};
use std::sync::Arc;

use slotbook_core::{
    errors::BookingError,
    models::booking::{BookSlotRequest, BookSlotResponse},
    validation,
};
use slotbook_db::repositories::booking::BookOutcome;

use crate::{middleware::error_handling::AppError, ApiState};

/// Books a free slot for the submitted contact. Contact validation runs
/// first and never touches slot state; the free-at-commit recheck is done
/// by the store, so a stale catalog snapshot in the client cannot produce
/// a double booking.
#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<BookSlotResponse>, AppError> {
    validation::validate_contact(&payload.booking_name, &payload.phone, &payload.email)?;

    let outcome = slotbook_db::repositories::booking::book_slot(
        &state.db_pool,
        payload.slot_id,
        &payload.booking_name,
        &payload.phone,
        &payload.email,
    )
    .await
    .map_err(BookingError::Database)?;

    match outcome {
        BookOutcome::Booked(slot) => Ok(Json(BookSlotResponse {
            ok: true,
            slot_id: slot.id,
            date: slot.date,
            time: slot.time,
            booking_name: payload.booking_name,
            phone: payload.phone,
            email: payload.email,
        })),
        BookOutcome::Unavailable => Err(AppError(BookingError::Conflict(format!(
            "Slot {} is no longer free",
            payload.slot_id
        )))),
        BookOutcome::NotFound => Err(AppError(BookingError::NotFound(format!(
            "Slot {} not found",
            payload.slot_id
        )))),
    }
}
