//! Shared fixtures for the handler tests: mock repositories plus flow
//! functions mirroring the handlers' validation and outcome mapping, so
//! the booking rules can be exercised without a live store.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use slotbook_api::middleware::error_handling::AppError;
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
use slotbook_db::{
    mock::repositories::{MockBookingRepo, MockSlotRepo},
    models::{DbBookedSlot, DbSlot},
    repositories::booking::{BookOutcome, MoveOutcome},
};
use uuid::Uuid;

pub struct TestContext {
    pub slot_repo: MockSlotRepo,
    pub booking_repo: MockBookingRepo,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            slot_repo: MockSlotRepo::new(),
            booking_repo: MockBookingRepo::new(),
        }
    }
}

pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

pub fn sample_time() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 0, 0).unwrap()
}

pub fn booked_slot(id: Uuid) -> DbSlot {
    DbSlot {
        id,
        date: sample_date(),
        time: sample_time(),
        status: SlotStatus::Booked.as_str().to_string(),
    }
}

pub fn booked_row(id: Uuid, name: &str, phone: &str, email: &str) -> DbBookedSlot {
    DbBookedSlot {
        id,
        date: sample_date(),
        time: sample_time(),
        status: SlotStatus::Booked.as_str().to_string(),
        booking_name: Some(name.to_string()),
        phone: Some(phone.to_string()),
        email: Some(email.to_string()),
    }
}

pub fn book_request(slot_id: Uuid) -> BookSlotRequest {
    BookSlotRequest {
        slot_id,
        booking_name: "Kovács Anna".to_string(),
        phone: "+36 30 111 2233".to_string(),
        email: "kovacs.anna@email.hu".to_string(),
    }
}

/// Mirror of the public (and admin manual) booking handler against the
/// mock repository.
pub async fn book_slot_flow(
    ctx: &mut TestContext,
    request: BookSlotRequest,
) -> Result<BookSlotResponse, AppError> {
    validation::validate_contact(&request.booking_name, &request.phone, &request.email)?;

    let outcome = ctx
        .booking_repo
        .book_slot(
            request.slot_id,
            request.booking_name.clone(),
            request.phone.clone(),
            request.email.clone(),
        )
        .await
        .map_err(BookingError::Database)?;

    match outcome {
        BookOutcome::Booked(slot) => Ok(BookSlotResponse {
            ok: true,
            slot_id: slot.id,
            date: slot.date,
            time: slot.time,
            booking_name: request.booking_name,
            phone: request.phone,
            email: request.email,
        }),
        BookOutcome::Unavailable => Err(AppError(BookingError::Conflict(format!(
            "Slot {} is no longer free",
            request.slot_id
        )))),
        BookOutcome::NotFound => Err(AppError(BookingError::NotFound(format!(
            "Slot {} not found",
            request.slot_id
        )))),
    }
}

/// Mirror of the admin listing handler, including its degrade-to-empty
/// behavior on store failure.
pub async fn list_bookings_flow(ctx: &mut TestContext) -> Vec<BookedSlotResponse> {
    match ctx.booking_repo.list_bookings().await {
        Ok(rows) => rows
            .into_iter()
            .filter_map(|row| {
                Some(BookedSlotResponse {
                    id: row.id,
                    date: row.date,
                    time: row.time,
                    status: SlotStatus::parse(&row.status)?,
                    booking_name: row.booking_name,
                    phone: row.phone,
                    email: row.email,
                })
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Mirror of the admin update handler: contact edit, or a move when
/// `new_slot_id` names a different slot.
pub async fn update_booking_flow(
    ctx: &mut TestContext,
    slot_id: Uuid,
    request: UpdateBookingRequest,
) -> Result<UpdateBookingResponse, AppError> {
    validation::validate_contact(&request.booking_name, &request.phone, &request.email)?;

    match request.new_slot_id {
        Some(target) if target != slot_id => {
            let outcome = ctx
                .booking_repo
                .move_booking(
                    slot_id,
                    target,
                    request.booking_name.clone(),
                    request.phone.clone(),
                    request.email.clone(),
                )
                .await
                .map_err(BookingError::Database)?;

            match outcome {
                MoveOutcome::Moved(slot) => Ok(UpdateBookingResponse {
                    ok: true,
                    slot_id: slot.id,
                }),
                MoveOutcome::TargetUnavailable => Err(AppError(BookingError::Conflict(format!(
                    "Slot {} is no longer free",
                    target
                )))),
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
            let updated = ctx
                .booking_repo
                .update_booking(
                    slot_id,
                    request.booking_name.clone(),
                    request.phone.clone(),
                    request.email.clone(),
                )
                .await
                .map_err(BookingError::Database)?;

            if !updated {
                return Err(AppError(BookingError::NotFound(format!(
                    "No booking for slot {}",
                    slot_id
                ))));
            }

            Ok(UpdateBookingResponse { ok: true, slot_id })
        }
    }
}

/// Mirror of the admin cancellation handler.
pub async fn cancel_booking_flow(
    ctx: &mut TestContext,
    slot_id: Uuid,
) -> Result<CancelBookingResponse, AppError> {
    let cancelled = ctx
        .booking_repo
        .cancel_booking(slot_id)
        .await
        .map_err(BookingError::Database)?;

    if !cancelled {
        return Err(AppError(BookingError::NotFound(format!(
            "No booking for slot {}",
            slot_id
        ))));
    }

    Ok(CancelBookingResponse { ok: true, slot_id })
}
