use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement};
use uuid::Uuid;

use crate::error::{EventError, EventResult};
use crate::models::Event;
use crate::repository::EventRepository;

/// PostgreSQL implementation of EventRepository using SeaORM
#[derive(Clone)]
pub struct PgEventRepository {
    db: DatabaseConnection,
}

impl PgEventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Helper struct for deserializing event rows from the database
#[derive(Debug, FromQueryResult)]
struct EventRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    start_time: chrono::DateTime<chrono::Utc>,
    end_time: chrono::DateTime<chrono::Utc>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            description: row.description,
            start_time: row.start_time,
            end_time: row.end_time,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn retrieve_by_id(&self, id: Uuid) -> EventResult<Event> {
        let sql = r#"
            SELECT id, title, description, start_time, end_time, created_at
            FROM events
            WHERE id = $1
        "#;

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let row = EventRow::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(|e| EventError::internal(format!("postgres error: {}", e)))?
            .ok_or_else(|| EventError::not_found(format!("event by id: {} was not found", id)))?;

        Ok(row.into())
    }

    async fn retrieve_all(&self) -> EventResult<Vec<Event>> {
        let sql = r#"
            SELECT id, title, description, start_time, end_time, created_at
            FROM events
            ORDER BY start_time ASC
        "#;

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, []);

        let rows = EventRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| EventError::internal(format!("postgres error: {}", e)))?;

        if rows.is_empty() {
            return Err(EventError::not_found("no events found"));
        }

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn save(&self, event: &Event) -> EventResult<()> {
        let sql = r#"
            INSERT INTO events (id, title, description, start_time, end_time, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                event.id.into(),
                event.title.clone().into(),
                event.description.clone().into(),
                event.start_time.into(),
                event.end_time.into(),
                event.created_at.into(),
            ],
        );

        self.db.execute_raw(stmt).await.map_err(|e| {
            let err_str = e.to_string();
            // Unique violations (23505) render as duplicate key errors
            if err_str.contains("duplicate key") || err_str.contains("unique constraint") {
                EventError::validation("Event already exists. Duplicated event id")
            } else {
                EventError::internal(format!("postgres error: {}", e))
            }
        })?;

        tracing::info!(event_id = %event.id, "Saved event");
        Ok(())
    }
}
