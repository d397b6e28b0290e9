//! Job site locations service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::location::{CreateLocation, Location, UpdateLocation},
    repository::Repository,
};

#[derive(Clone)]
pub struct LocationsService {
    repository: Repository,
}

impl LocationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Location>> {
        self.repository.locations.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Location> {
        self.repository.locations.get_by_id(id).await
    }

    pub async fn create(&self, data: CreateLocation) -> AppResult<Location> {
        data.validate()?;
        self.repository.locations.create(&data).await
    }

    pub async fn update(&self, id: Uuid, data: UpdateLocation) -> AppResult<Location> {
        data.validate()?;
        self.repository.locations.update(id, &data).await
    }

    /// Delete a location and its schedule entries
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.locations.delete(id).await
    }
}
