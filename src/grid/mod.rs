//! Weekly schedule grid computation
//!
//! This module turns the flat schedule entry list into the placed weekly
//! grid the calendar view renders: one row per equipment item, seven day
//! columns, blocks anchored at their start hour.

pub mod placement;

pub use placement::{
    build_grid, day_blocks, entry_at, format_hour, DayColumn, EquipmentRow, PlacedBlock,
    ScheduleGrid,
};
