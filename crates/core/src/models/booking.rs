use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::slot::SlotStatus;

/// A contact-bound claim on exactly one slot. Exists iff the owning
/// slot's status is `booked`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub slot_id: Uuid,
    pub booking_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSlotRequest {
    pub slot_id: Uuid,
    #[serde(default)]
    pub booking_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Confirmation data echoed back to the caller on a successful claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSlotResponse {
    pub ok: bool,
    pub slot_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub booking_name: String,
    pub phone: String,
    pub email: String,
}

/// Admin listing row: a booked slot joined with its booking's contact data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedSlotResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: SlotStatus,
    pub booking_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    #[serde(default)]
    pub booking_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    /// When set to a different slot id, the booking is moved there under
    /// the same free-at-commit rule that governs a fresh booking.
    #[serde(default)]
    pub new_slot_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateBookingResponse {
    pub ok: bool,
    pub slot_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    pub ok: bool,
    pub slot_id: Uuid,
}
