//! Settings service

use validator::Validate;

use crate::{error::AppResult, models::settings::ScheduleWindow, repository::Repository};

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get the visible hour window
    pub async fn get_window(&self) -> AppResult<ScheduleWindow> {
        self.repository.settings.get_window().await
    }

    /// Update the visible hour window and return the stored value
    pub async fn update_window(&self, window: ScheduleWindow) -> AppResult<ScheduleWindow> {
        window.validate()?;
        self.repository.settings.set_window(&window).await?;
        self.repository.settings.get_window().await
    }
}
