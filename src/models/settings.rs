//! Schedule display settings

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Key of the settings row holding the first visible hour
pub const START_HOUR_KEY: &str = "start_hour";
/// Key of the settings row holding the last visible hour
pub const END_HOUR_KEY: &str = "end_hour";

pub const DEFAULT_START_HOUR: i16 = 6;
pub const DEFAULT_END_HOUR: i16 = 18;

/// Visible hour window of the weekly grid
///
/// Both bounds are displayed: a 6/18 window renders hour slots 6:00 AM
/// through 6:00 PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_window"))]
pub struct ScheduleWindow {
    #[validate(range(min = 0, max = 23, message = "Start hour must be between 0 and 23"))]
    pub start_hour: i16,
    #[validate(range(min = 0, max = 23, message = "End hour must be between 0 and 23"))]
    pub end_hour: i16,
}

fn validate_window(window: &ScheduleWindow) -> Result<(), ValidationError> {
    if window.start_hour >= window.end_hour {
        let mut err = ValidationError::new("hour_window");
        err.message = Some("Start hour must be before end hour".into());
        return Err(err);
    }
    Ok(())
}

impl ScheduleWindow {
    /// Hour slots the grid renders, end inclusive
    pub fn hours(&self) -> RangeInclusive<i16> {
        self.start_hour..=self.end_hour
    }
}

impl Default for ScheduleWindow {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        let window = ScheduleWindow::default();
        assert_eq!(window.start_hour, 6);
        assert_eq!(window.end_hour, 18);
        assert!(window.validate().is_ok());
    }

    #[test]
    fn test_hours_are_end_inclusive() {
        let window = ScheduleWindow { start_hour: 6, end_hour: 18 };
        let hours: Vec<i16> = window.hours().collect();
        assert_eq!(hours.first(), Some(&6));
        assert_eq!(hours.last(), Some(&18));
        assert_eq!(hours.len(), 13);
    }

    #[test]
    fn test_window_validation() {
        assert!(ScheduleWindow { start_hour: 0, end_hour: 23 }.validate().is_ok());
        assert!(ScheduleWindow { start_hour: 12, end_hour: 12 }.validate().is_err());
        assert!(ScheduleWindow { start_hour: 18, end_hour: 6 }.validate().is_err());
        assert!(ScheduleWindow { start_hour: -1, end_hour: 18 }.validate().is_err());
        assert!(ScheduleWindow { start_hour: 6, end_hour: 24 }.validate().is_err());
    }
}
