//! Administrative reconciliation handlers. Privilege is established by the
//! bearer-token middleware on the admin router; the operations themselves
//! share the public flow's transition rules, and manual booking literally
//! reuses the public handler.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use slotbook_core::{
    errors::BookingError,
    models::{
        booking::{
            BookSlotRequest, BookSlotResponse, BookedSlotResponse, CancelBookingResponse,
            UpdateBookingRequest, UpdateBookingResponse,
        },
        slot::SlotStatus,
    },
    validation,
};
use slotbook_db::{models::DbBookedSlot, repositories::booking::MoveOutcome};

use crate::{handlers, middleware::error_handling::AppError, ApiState};

fn booked_slot_response(row: &DbBookedSlot) -> Option<BookedSlotResponse> {
    let Some(status) = SlotStatus::parse(&row.status) else {
        tracing::warn!("Slot {} has unknown status {:?}, skipping", row.id, row.status);
        return None;
    };
    Some(BookedSlotResponse {
        id: row.id,
        date: row.date,
        time: row.time,
        status,
        booking_name: row.booking_name.clone(),
        phone: row.phone.clone(),
        email: row.email.clone(),
    })
}

/// All currently booked slots with their contact data. Degrades to an
/// empty list when the store is unreachable, like the public catalog read.
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
) -> Json<Vec<BookedSlotResponse>> {
    match slotbook_db::repositories::booking::list_bookings(&state.db_pool).await {
        Ok(rows) => Json(rows.iter().filter_map(booked_slot_response).collect()),
        Err(err) => {
            tracing::warn!("Booking list read failed, returning empty list: {:#}", err);
            Json(Vec::new())
        }
    }
}

/// Operator-initiated booking. Same contract and conflict semantics as the
/// public flow: this is the public handler invoked from a privileged
/// route, not a second code path.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<BookSlotResponse>, AppError> {
    handlers::booking::book_slot(State(state), Json(payload)).await
}

/// Corrects a booking's contact details, or moves the booking to another
/// slot when `new_slot_id` names a different one. Edits are refused for
/// slots that are not currently booked; a move claims the target under the
/// same free-at-commit rule as a fresh booking.
#[axum::debug_handler]
pub async fn update_booking(
    State(state): State<Arc<ApiState>>,
    Path(slot_id): Path<Uuid>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<Json<UpdateBookingResponse>, AppError> {
    validation::validate_contact(&payload.booking_name, &payload.phone, &payload.email)?;

    match payload.new_slot_id {
        Some(target) if target != slot_id => {
            let outcome = slotbook_db::repositories::booking::move_booking(
                &state.db_pool,
                slot_id,
                target,
                &payload.booking_name,
                &payload.phone,
                &payload.email,
            )
            .await
            .map_err(BookingError::Database)?;

            match outcome {
                MoveOutcome::Moved(slot) => Ok(Json(UpdateBookingResponse {
                    ok: true,
                    slot_id: slot.id,
                })),
                MoveOutcome::TargetUnavailable => Err(AppError(BookingError::Conflict(
                    format!("Slot {} is no longer free", target),
                ))),
                MoveOutcome::TargetNotFound => Err(AppError(BookingError::NotFound(format!(
                    "Slot {} not found",
                    target
                )))),
                MoveOutcome::BookingNotFound => Err(AppError(BookingError::NotFound(format!(
                    "No booking for slot {}",
                    slot_id
                )))),
            }
        }
        _ => {
            let updated = slotbook_db::repositories::booking::update_booking(
                &state.db_pool,
                slot_id,
                &payload.booking_name,
                &payload.phone,
                &payload.email,
            )
            .await
            .map_err(BookingError::Database)?;

            if !updated {
                return Err(AppError(BookingError::NotFound(format!(
                    "No booking for slot {}",
                    slot_id
                ))));
            }

            Ok(Json(UpdateBookingResponse { ok: true, slot_id }))
        }
    }
}

/// Cancels a booking: the booking row and the slot's `booked` status go
/// away as one unit, returning the slot to the bookable pool.
#[axum::debug_handler]
pub async fn delete_booking(
    State(state): State<Arc<ApiState>>,
    Path(slot_id): Path<Uuid>,
) -> Result<Json<CancelBookingResponse>, AppError> {
    let cancelled = slotbook_db::repositories::booking::cancel_booking(&state.db_pool, slot_id)
        .await
        .map_err(BookingError::Database)?;

    if !cancelled {
        return Err(AppError(BookingError::NotFound(format!(
            "No booking for slot {}",
            slot_id
        ))));
    }

    Ok(Json(CancelBookingResponse { ok: true, slot_id }))
}
