//! Job site location model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Job site location record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    pub id: Uuid,
    pub job_name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

/// Short location representation nested in schedule entries
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocationShort {
    pub id: Uuid,
    pub job_name: String,
    pub address: String,
}

/// Create location request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLocation {
    #[validate(length(min = 1, message = "Job name is required"))]
    pub job_name: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
}

/// Update location request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLocation {
    #[validate(length(min = 1, message = "Job name cannot be empty"))]
    pub job_name: Option<String>,
    #[validate(length(min = 1, message = "Address cannot be empty"))]
    pub address: Option<String>,
}
