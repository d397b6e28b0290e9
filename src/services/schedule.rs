//! Schedule entries and grid service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    grid::{build_grid, ScheduleGrid},
    models::schedule::{CreateScheduleEntry, ScheduleEntry, ScheduleEntryDetails, ScheduleQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct ScheduleService {
    repository: Repository,
}

impl ScheduleService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List schedule entries with joined details
    pub async fn list(&self, query: &ScheduleQuery) -> AppResult<Vec<ScheduleEntryDetails>> {
        self.repository.schedule.list(query).await
    }

    /// Create a schedule entry
    ///
    /// Overlapping entries for the same equipment and day are accepted;
    /// conflicts are resolved by schedulers, not by the server.
    pub async fn create(&self, data: CreateScheduleEntry) -> AppResult<ScheduleEntry> {
        data.validate()?;
        self.repository.schedule.create(&data).await
    }

    /// Delete a schedule entry
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.schedule.delete(id).await
    }

    /// Compute the placed weekly grid
    ///
    /// Equipment, entries and the visible window are fetched concurrently;
    /// the grid is built once all three have settled.
    pub async fn grid(&self, equipment_filter: Option<Uuid>) -> AppResult<ScheduleGrid> {
        let all_entries = ScheduleQuery {
            equipment_id: None,
            day_of_week: None,
        };

        let (equipment, entries, window) = tokio::try_join!(
            self.repository.equipment.list(),
            self.repository.schedule.list(&all_entries),
            self.repository.settings.get_window(),
        )?;

        Ok(build_grid(&equipment, &entries, &window, equipment_filter))
    }
}
