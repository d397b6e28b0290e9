//! Equipment registry service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, UpdateEquipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all equipment
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list().await
    }

    /// Get equipment by ID
    pub async fn get(&self, id: Uuid) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Create equipment, rejecting duplicate unit codes
    pub async fn create(&self, data: CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;

        if self
            .repository
            .equipment
            .code_exists(&data.equipment_id, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Equipment ID {} already exists",
                data.equipment_id
            )));
        }

        self.repository.equipment.create(&data).await
    }

    /// Update equipment, rejecting duplicate unit codes
    pub async fn update(&self, id: Uuid, data: UpdateEquipment) -> AppResult<Equipment> {
        data.validate()?;

        if let Some(ref code) = data.equipment_id {
            if self.repository.equipment.code_exists(code, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Equipment ID {} already exists",
                    code
                )));
            }
        }

        self.repository.equipment.update(id, &data).await
    }

    /// Delete equipment and its schedule entries
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }
}
