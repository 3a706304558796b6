use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create slots table. The status column is the authoritative state of
    // each slot; (date, time) pairs are unique across the catalog.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            date DATE NOT NULL,
            time TIME NOT NULL,
            status TEXT NOT NULL DEFAULT 'free' CHECK (status IN ('free', 'booked')),
            UNIQUE (date, time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create bookings table. The slot_id primary key enforces one booking
    // per slot at the schema level; the transition rules enforce it at the
    // transaction level.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            slot_id UUID PRIMARY KEY REFERENCES slots(id),
            booking_name TEXT,
            phone TEXT,
            email TEXT,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_slots_date_time ON slots(date, time);
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_slots_status ON slots(status);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
