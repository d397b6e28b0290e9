//! Grid placement computation
//!
//! Maps a flat list of schedule entries onto a weekly grid of equipment
//! rows and day columns, bucketed by hour. Pure functions, recomputed per
//! request from the fetched collections.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::equipment::Equipment;
use crate::models::schedule::ScheduleEntryDetails;
use crate::models::settings::ScheduleWindow;

pub const DAYS_PER_WEEK: i16 = 7;

/// A schedule entry placed on the grid
///
/// Placed at the slot equal to the entry's start hour, spanning
/// `duration` hour slots.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlacedBlock {
    pub entry: ScheduleEntryDetails,
    pub duration: i16,
    /// Display label, e.g. "9:00 AM - 11:00 AM"
    pub time_label: String,
}

/// One day column of an equipment row
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DayColumn {
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: i16,
    pub blocks: Vec<PlacedBlock>,
}

/// One equipment row of the grid, seven day columns
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentRow {
    pub equipment: Equipment,
    pub days: Vec<DayColumn>,
}

/// Fully placed weekly grid
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleGrid {
    pub window: ScheduleWindow,
    /// Visible hour slots, end inclusive
    pub hours: Vec<i16>,
    pub rows: Vec<EquipmentRow>,
}

/// Entry occupying a given cell
///
/// Returns the first entry in input order whose equipment and day match
/// and whose `[start_hour, end_hour)` interval contains `hour`.
pub fn entry_at<'a>(
    entries: &'a [ScheduleEntryDetails],
    equipment_id: Uuid,
    day_of_week: i16,
    hour: i16,
) -> Option<&'a ScheduleEntryDetails> {
    entries.iter().find(|entry| {
        entry.equipment_id == equipment_id
            && entry.day_of_week == day_of_week
            && hour >= entry.start_hour
            && hour < entry.end_hour
    })
}

/// Blocks drawn in one day column of one equipment row
///
/// Every matching entry produces exactly one block, at the slot equal to
/// its own start hour. Entries whose start hour falls outside the visible
/// window are not drawn at all; there is no clipping or partial display.
/// Overlapping entries each get their own block.
pub fn day_blocks(
    entries: &[ScheduleEntryDetails],
    equipment_id: Uuid,
    day_of_week: i16,
    window: &ScheduleWindow,
) -> Vec<PlacedBlock> {
    let mut blocks = Vec::new();
    for hour in window.hours() {
        for entry in entries {
            if entry.equipment_id == equipment_id
                && entry.day_of_week == day_of_week
                && entry.start_hour == hour
            {
                blocks.push(PlacedBlock {
                    entry: entry.clone(),
                    duration: entry.end_hour - entry.start_hour,
                    time_label: format!(
                        "{} - {}",
                        format_hour(entry.start_hour),
                        format_hour(entry.end_hour)
                    ),
                });
            }
        }
    }
    blocks
}

/// Build the full weekly grid
///
/// One row per equipment item, in input order. The filter restricts which
/// rows are rendered; it does not affect which entries exist.
pub fn build_grid(
    equipment: &[Equipment],
    entries: &[ScheduleEntryDetails],
    window: &ScheduleWindow,
    equipment_filter: Option<Uuid>,
) -> ScheduleGrid {
    let rows = equipment
        .iter()
        .filter(|item| equipment_filter.map_or(true, |id| item.id == id))
        .map(|item| EquipmentRow {
            equipment: item.clone(),
            days: (0..DAYS_PER_WEEK)
                .map(|day| DayColumn {
                    day_of_week: day,
                    blocks: day_blocks(entries, item.id, day, window),
                })
                .collect(),
        })
        .collect();

    ScheduleGrid {
        window: *window,
        hours: window.hours().collect(),
        rows,
    }
}

/// 12-hour clock label for an hour slot
pub fn format_hour(hour: i16) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:00 {}", display, period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::equipment::EquipmentShort;
    use crate::models::location::LocationShort;

    fn crane() -> Equipment {
        Equipment {
            id: Uuid::new_v4(),
            name: "Crane A".to_string(),
            equipment_type: "Crane".to_string(),
            equipment_id: "CR-100".to_string(),
            description: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn entry_for(equipment: &Equipment, day: i16, start: i16, end: i16) -> ScheduleEntryDetails {
        ScheduleEntryDetails {
            id: Uuid::new_v4(),
            equipment_id: equipment.id,
            location_id: Uuid::new_v4(),
            day_of_week: day,
            start_hour: start,
            end_hour: end,
            notes: None,
            equipment: EquipmentShort {
                id: equipment.id,
                name: equipment.name.clone(),
                equipment_id: equipment.equipment_id.clone(),
            },
            location: LocationShort {
                id: Uuid::new_v4(),
                job_name: "Main St Site".to_string(),
                address: "100 Main St".to_string(),
            },
        }
    }

    fn window(start: i16, end: i16) -> ScheduleWindow {
        ScheduleWindow { start_hour: start, end_hour: end }
    }

    #[test]
    fn test_crane_monday_morning() {
        let crane = crane();
        let entries = vec![entry_for(&crane, 1, 9, 11)];
        let win = window(6, 18);

        let grid = build_grid(std::slice::from_ref(&crane), &entries, &win, None);
        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.rows[0].days.len(), 7);

        let monday = &grid.rows[0].days[1];
        assert_eq!(monday.blocks.len(), 1);
        assert_eq!(monday.blocks[0].entry.start_hour, 9);
        assert_eq!(monday.blocks[0].duration, 2);
        assert_eq!(monday.blocks[0].time_label, "9:00 AM - 11:00 AM");

        // Hour 10 is occupied per the containment query but not re-drawn
        assert!(entry_at(&entries, crane.id, 1, 10).is_some());
        assert!(entry_at(&entries, crane.id, 1, 8).is_none());
    }

    #[test]
    fn test_entry_drawn_exactly_once() {
        let crane = crane();
        let entries = vec![entry_for(&crane, 1, 9, 11)];
        let win = window(6, 18);

        let grid = build_grid(std::slice::from_ref(&crane), &entries, &win, None);
        let total: usize = grid
            .rows
            .iter()
            .flat_map(|row| row.days.iter())
            .map(|day| day.blocks.len())
            .sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_containment_interval() {
        let crane = crane();
        let entries = vec![entry_for(&crane, 1, 9, 11)];

        for hour in 9..11 {
            assert!(entry_at(&entries, crane.id, 1, hour).is_some(), "hour {}", hour);
        }
        assert!(entry_at(&entries, crane.id, 1, 8).is_none());
        assert!(entry_at(&entries, crane.id, 1, 11).is_none());
        // Wrong day, wrong equipment
        assert!(entry_at(&entries, crane.id, 2, 9).is_none());
        assert!(entry_at(&entries, Uuid::new_v4(), 1, 9).is_none());
    }

    #[test]
    fn test_overlapping_entries_coexist() {
        let crane = crane();
        let first = entry_for(&crane, 1, 9, 11);
        let second = entry_for(&crane, 1, 10, 12);
        let entries = vec![first.clone(), second.clone()];
        let win = window(6, 18);

        let blocks = day_blocks(&entries, crane.id, 1, &win);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].entry.id, first.id);
        assert_eq!(blocks[1].entry.id, second.id);

        // Containment returns the first match in input order
        let occupied = entry_at(&entries, crane.id, 1, 10).unwrap();
        assert_eq!(occupied.id, first.id);
    }

    #[test]
    fn test_start_outside_window_never_drawn() {
        let crane = crane();
        let early = entry_for(&crane, 2, 4, 8);
        let late = entry_for(&crane, 2, 19, 21);
        let boundary = entry_for(&crane, 2, 18, 20);
        let entries = vec![early.clone(), late, boundary.clone()];
        let win = window(6, 18);

        let blocks = day_blocks(&entries, crane.id, 2, &win);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].entry.id, boundary.id);

        // The early entry still occupies its in-window hours
        assert_eq!(entry_at(&entries, crane.id, 2, 6).map(|e| e.id), Some(early.id));
    }

    #[test]
    fn test_equipment_filter_restricts_rows_only() {
        let crane = crane();
        let mut excavator = self::crane();
        excavator.name = "Excavator B".to_string();
        excavator.equipment_id = "EX-200".to_string();

        let entries = vec![entry_for(&crane, 1, 9, 11), entry_for(&excavator, 1, 9, 11)];
        let fleet = vec![crane.clone(), excavator.clone()];
        let win = window(6, 18);

        let grid = build_grid(&fleet, &entries, &win, Some(excavator.id));
        assert_eq!(grid.rows.len(), 1);
        assert_eq!(grid.rows[0].equipment.id, excavator.id);
        assert_eq!(grid.rows[0].days[1].blocks.len(), 1);

        // The filtered-out entry is still queryable
        assert!(entry_at(&entries, crane.id, 1, 9).is_some());
    }

    #[test]
    fn test_grid_hours_end_inclusive() {
        let win = window(6, 18);
        let grid = build_grid(&[], &[], &win, None);
        assert_eq!(grid.hours.first(), Some(&6));
        assert_eq!(grid.hours.last(), Some(&18));
        assert_eq!(grid.hours.len(), 13);
        assert!(grid.rows.is_empty());
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(0), "12:00 AM");
        assert_eq!(format_hour(6), "6:00 AM");
        assert_eq!(format_hour(11), "11:00 AM");
        assert_eq!(format_hour(12), "12:00 PM");
        assert_eq!(format_hour(13), "1:00 PM");
        assert_eq!(format_hour(23), "11:00 PM");
    }
}
