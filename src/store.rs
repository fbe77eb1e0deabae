use sqlx::PgPool;

use crate::models::{EventRow, NewEventRow};

/// Persistence gateway for the `events` table. Each operation is one SQL
/// statement; there are no multi-row transactions, and every failure surfaces
/// as a plain `sqlx::Error` without subtype discrimination.
#[derive(Clone)]
pub struct EventStore {
    pool: PgPool,
}

impl EventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<EventRow>, sqlx::Error> {
        sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, kind, date, start_date, end_date,
                   venue, location, section_value, row_value, seat_value, notes
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<EventRow>, sqlx::Error> {
        sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, name, kind, date, start_date, end_date,
                   venue, location, section_value, row_value, seat_value, notes
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Inserts a row and returns the store-assigned id.
    pub async fn insert(&self, row: &NewEventRow) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO events (name, kind, date, start_date, end_date,
                                venue, location, section_value, row_value, seat_value, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&row.name)
        .bind(&row.kind)
        .bind(&row.date)
        .bind(&row.start_date)
        .bind(&row.end_date)
        .bind(&row.venue)
        .bind(&row.location)
        .bind(&row.section_value)
        .bind(&row.row_value)
        .bind(&row.seat_value)
        .bind(&row.notes)
        .fetch_one(&self.pool)
        .await
    }

    /// Full-row overwrite of every column for `id`. Returns the affected-row
    /// count; a missing id affects zero rows.
    pub async fn update(&self, id: i64, row: &NewEventRow) -> Result<u64, sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE events
            SET name = $1, kind = $2, date = $3, start_date = $4, end_date = $5,
                venue = $6, location = $7, section_value = $8, row_value = $9,
                seat_value = $10, notes = $11
            WHERE id = $12
            "#,
        )
        .bind(&row.name)
        .bind(&row.kind)
        .bind(&row.date)
        .bind(&row.start_date)
        .bind(&row.end_date)
        .bind(&row.venue)
        .bind(&row.location)
        .bind(&row.section_value)
        .bind(&row.row_value)
        .bind(&row.seat_value)
        .bind(&row.notes)
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected())
    }
}
