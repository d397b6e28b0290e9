//! Schedule entries repository for database operations

use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::EquipmentShort,
        location::LocationShort,
        schedule::{CreateScheduleEntry, ScheduleEntry, ScheduleEntryDetails, ScheduleQuery},
    },
};

#[derive(Clone)]
pub struct ScheduleRepository {
    pool: Pool<Postgres>,
}

impl ScheduleRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List schedule entries with joined equipment and location details
    ///
    /// Ordered by day of week then start hour, optionally filtered by
    /// equipment and/or day.
    pub async fn list(&self, query: &ScheduleQuery) -> AppResult<Vec<ScheduleEntryDetails>> {
        let mut conditions = Vec::new();
        if query.equipment_id.is_some() {
            conditions.push(format!("se.equipment_id = ${}", conditions.len() + 1));
        }
        if query.day_of_week.is_some() {
            conditions.push(format!("se.day_of_week = ${}", conditions.len() + 1));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let select_query = format!(
            r#"
            SELECT se.id, se.equipment_id, se.location_id, se.day_of_week,
                   se.start_hour, se.end_hour, se.notes,
                   e.name as equipment_name, e.equipment_id as equipment_code,
                   l.job_name, l.address
            FROM schedule_entries se
            JOIN equipment e ON se.equipment_id = e.id
            JOIN locations l ON se.location_id = l.id
            {}
            ORDER BY se.day_of_week, se.start_hour
            "#,
            where_clause
        );

        let mut builder = sqlx::query(&select_query);
        if let Some(equipment_id) = query.equipment_id {
            builder = builder.bind(equipment_id);
        }
        if let Some(day_of_week) = query.day_of_week {
            builder = builder.bind(day_of_week);
        }

        let rows = builder.fetch_all(&self.pool).await?;

        let entries = rows
            .into_iter()
            .map(|row| ScheduleEntryDetails {
                id: row.get("id"),
                equipment_id: row.get("equipment_id"),
                location_id: row.get("location_id"),
                day_of_week: row.get("day_of_week"),
                start_hour: row.get("start_hour"),
                end_hour: row.get("end_hour"),
                notes: row.get("notes"),
                equipment: EquipmentShort {
                    id: row.get("equipment_id"),
                    name: row.get("equipment_name"),
                    equipment_id: row.get("equipment_code"),
                },
                location: LocationShort {
                    id: row.get("location_id"),
                    job_name: row.get("job_name"),
                    address: row.get("address"),
                },
            })
            .collect();

        Ok(entries)
    }

    /// Create a schedule entry
    pub async fn create(&self, data: &CreateScheduleEntry) -> AppResult<ScheduleEntry> {
        let row = sqlx::query_as::<_, ScheduleEntry>(
            r#"
            INSERT INTO schedule_entries (equipment_id, location_id, day_of_week, start_hour, end_hour, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(data.location_id)
        .bind(data.day_of_week)
        .bind(data.start_hour)
        .bind(data.end_hour)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a schedule entry
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM schedule_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Schedule entry {} not found", id)));
        }
        Ok(())
    }
}
