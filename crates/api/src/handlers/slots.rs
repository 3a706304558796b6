use axum::{extract::State, Json};
use std::sync::Arc;

use slotbook_core::models::slot::{SlotResponse, SlotStatus};
use slotbook_db::models::DbSlot;

use crate::ApiState;

fn slot_response(slot: &DbSlot) -> Option<SlotResponse> {
    let Some(status) = SlotStatus::parse(&slot.status) else {
        tracing::warn!("Slot {} has unknown status {:?}, skipping", slot.id, slot.status);
        return None;
    };
    Some(SlotResponse {
        id: slot.id,
        date: slot.date,
        time: slot.time,
        status,
    })
}

/// Public catalog read: every slot with its current status, ordered by
/// `(date, time)`. When the store is unreachable the caller gets an empty
/// list: "nothing to show", never an error page.
#[axum::debug_handler]
pub async fn list_slots(State(state): State<Arc<ApiState>>) -> Json<Vec<SlotResponse>> {
    match slotbook_db::repositories::slot::list_slots(&state.db_pool).await {
        Ok(slots) => Json(slots.iter().filter_map(slot_response).collect()),
        Err(err) => {
            tracing::warn!("Catalog read failed, returning empty slot list: {:#}", err);
            Json(Vec::new())
        }
    }
}
