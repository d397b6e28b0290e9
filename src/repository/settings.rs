//! Settings repository for database operations

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::AppResult,
    models::settings::{
        ScheduleWindow, DEFAULT_END_HOUR, DEFAULT_START_HOUR, END_HOUR_KEY, START_HOUR_KEY,
    },
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: Pool<Postgres>,
}

impl SettingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Read the visible hour window
    ///
    /// Missing or unparseable rows fall back to the 6/18 defaults.
    pub async fn get_window(&self) -> AppResult<ScheduleWindow> {
        let rows = sqlx::query(
            "SELECT setting_key, setting_value FROM settings WHERE setting_key IN ($1, $2)",
        )
        .bind(START_HOUR_KEY)
        .bind(END_HOUR_KEY)
        .fetch_all(&self.pool)
        .await?;

        let mut window = ScheduleWindow::default();
        for row in rows {
            let key: String = row.get("setting_key");
            let value: String = row.get("setting_value");
            match key.as_str() {
                START_HOUR_KEY => {
                    window.start_hour = value.parse().unwrap_or(DEFAULT_START_HOUR);
                }
                END_HOUR_KEY => {
                    window.end_hour = value.parse().unwrap_or(DEFAULT_END_HOUR);
                }
                _ => {}
            }
        }

        Ok(window)
    }

    /// Persist the visible hour window, creating missing rows
    pub async fn set_window(&self, window: &ScheduleWindow) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        for (key, value) in [
            (START_HOUR_KEY, window.start_hour),
            (END_HOUR_KEY, window.end_hour),
        ] {
            // Try to update the existing row first
            let rows_affected =
                sqlx::query("UPDATE settings SET setting_value = $2 WHERE setting_key = $1")
                    .bind(key)
                    .bind(value.to_string())
                    .execute(&mut *tx)
                    .await?
                    .rows_affected();

            // If no row was updated, insert a new one
            if rows_affected == 0 {
                sqlx::query("INSERT INTO settings (setting_key, setting_value) VALUES ($1, $2)")
                    .bind(key)
                    .bind(value.to_string())
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }
}
