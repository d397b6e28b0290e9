//! Equipment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: Uuid,
    /// Display name, e.g. "Crane A"
    pub name: String,
    /// Free-form category, e.g. "Crane" or "Excavator"
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub equipment_type: String,
    /// Human-readable unit code, unique across the fleet
    pub equipment_id: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Short equipment representation nested in schedule entries
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentShort {
    pub id: Uuid,
    pub name: String,
    pub equipment_id: String,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub equipment_type: String,
    /// Unit code, must be unique
    #[validate(length(min = 1, message = "Equipment ID is required"))]
    pub equipment_id: String,
    pub description: Option<String>,
}

/// Update equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type cannot be empty"))]
    pub equipment_type: Option<String>,
    #[validate(length(min = 1, message = "Equipment ID cannot be empty"))]
    pub equipment_id: Option<String>,
    pub description: Option<String>,
}
