use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Catalog row. `status` holds the raw stored string; `slots.status` is
/// CHECK-constrained to `'free'` / `'booked'`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbSlot {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub slot_id: Uuid,
    pub booking_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Join row for the admin listing: a booked slot with its contact data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbBookedSlot {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: String,
    pub booking_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
