use crate::models::DbSlot;
use chrono::{NaiveDate, NaiveTime};
use eyre::Result;
use slotbook_core::models::slot::SlotStatus;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Returns the full catalog ordered by `(date, time)`. Read-only; every
/// write goes through the booking repository.
pub async fn list_slots(pool: &Pool<Postgres>) -> Result<Vec<DbSlot>> {
    let slots = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, date, time, status
        FROM slots
        ORDER BY date, time
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(slots)
}

pub async fn get_slot_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSlot>> {
    let slot = sqlx::query_as::<_, DbSlot>(
        r#"
        SELECT id, date, time, status
        FROM slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(slot)
}

/// Inserts any missing `(date, time)` pairs as free slots. Existing pairs
/// are left untouched, so re-running a provisioning plan is safe and never
/// clobbers a booked slot. Returns the number of slots actually created.
pub async fn provision_slots(
    pool: &Pool<Postgres>,
    plan: &[(NaiveDate, NaiveTime)],
) -> Result<u64> {
    let mut inserted = 0;

    for (date, time) in plan {
        let result = sqlx::query(
            r#"
            INSERT INTO slots (id, date, time, status)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (date, time) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(date)
        .bind(time)
        .bind(SlotStatus::Free.as_str())
        .execute(pool)
        .await?;

        inserted += result.rows_affected();
    }

    tracing::debug!("Provisioned {} new slots ({} in plan)", inserted, plan.len());
    Ok(inserted)
}
