use chrono::{NaiveDate, NaiveTime};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBookedSlot, DbSlot};
use crate::repositories::booking::{BookOutcome, MoveOutcome};

// Mock repositories for testing
mock! {
    pub SlotRepo {
        pub async fn list_slots(&self) -> eyre::Result<Vec<DbSlot>>;

        pub async fn get_slot_by_id(&self, id: Uuid) -> eyre::Result<Option<DbSlot>>;

        pub async fn provision_slots(
            &self,
            plan: Vec<(NaiveDate, NaiveTime)>,
        ) -> eyre::Result<u64>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn book_slot(
            &self,
            slot_id: Uuid,
            booking_name: String,
            phone: String,
            email: String,
        ) -> eyre::Result<BookOutcome>;

        pub async fn list_bookings(&self) -> eyre::Result<Vec<DbBookedSlot>>;

        pub async fn update_booking(
            &self,
            slot_id: Uuid,
            booking_name: String,
            phone: String,
            email: String,
        ) -> eyre::Result<bool>;

        pub async fn cancel_booking(&self, slot_id: Uuid) -> eyre::Result<bool>;

        pub async fn move_booking(
            &self,
            from_slot_id: Uuid,
            to_slot_id: Uuid,
            booking_name: String,
            phone: String,
            email: String,
        ) -> eyre::Result<MoveOutcome>;
    }
}
