//! Schedule entry model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::equipment::EquipmentShort;
use super::location::LocationShort;

/// Schedule entry row
///
/// `equipment_id` here is the foreign key to `equipment.id`, not the
/// human-readable unit code of the same name on the equipment record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub location_id: Uuid,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: i16,
    pub start_hour: i16,
    /// Exclusive: the entry occupies [start_hour, end_hour)
    pub end_hour: i16,
    pub notes: Option<String>,
}

/// Schedule entry with joined equipment and location details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleEntryDetails {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub location_id: Uuid,
    pub day_of_week: i16,
    pub start_hour: i16,
    pub end_hour: i16,
    pub notes: Option<String>,
    pub equipment: EquipmentShort,
    pub location: LocationShort,
}

/// Create schedule entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_entry_hours"))]
pub struct CreateScheduleEntry {
    pub equipment_id: Uuid,
    pub location_id: Uuid,
    #[validate(range(min = 0, max = 6, message = "Day must be between 0 and 6"))]
    pub day_of_week: i16,
    #[validate(range(min = 0, max = 23, message = "Start hour must be between 0 and 23"))]
    pub start_hour: i16,
    #[validate(range(min = 0, max = 23, message = "End hour must be between 0 and 23"))]
    pub end_hour: i16,
    pub notes: Option<String>,
}

fn validate_entry_hours(entry: &CreateScheduleEntry) -> Result<(), ValidationError> {
    if entry.start_hour >= entry.end_hour {
        let mut err = ValidationError::new("hour_range");
        err.message = Some("Start hour must be before end hour".into());
        return Err(err);
    }
    Ok(())
}

/// Schedule entry list filters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ScheduleQuery {
    pub equipment_id: Option<Uuid>,
    pub day_of_week: Option<i16>,
}

/// Grid rendering filter
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct GridQuery {
    /// Restrict rendered rows to a single equipment item
    pub equipment_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: i16, start: i16, end: i16) -> CreateScheduleEntry {
        CreateScheduleEntry {
            equipment_id: Uuid::new_v4(),
            location_id: Uuid::new_v4(),
            day_of_week: day,
            start_hour: start,
            end_hour: end,
            notes: None,
        }
    }

    #[test]
    fn test_valid_entry() {
        assert!(entry(1, 9, 11).validate().is_ok());
        assert!(entry(0, 0, 23).validate().is_ok());
        assert!(entry(6, 22, 23).validate().is_ok());
    }

    #[test]
    fn test_start_must_precede_end() {
        assert!(entry(1, 11, 9).validate().is_err());
        assert!(entry(1, 9, 9).validate().is_err());
    }

    #[test]
    fn test_out_of_range_fields() {
        assert!(entry(7, 9, 11).validate().is_err());
        assert!(entry(-1, 9, 11).validate().is_err());
        assert!(entry(1, -1, 11).validate().is_err());
        assert!(entry(1, 9, 24).validate().is_err());
    }
}
