//! Data models for the ASM schedule server

pub mod equipment;
pub mod location;
pub mod schedule;
pub mod settings;
pub mod user;

// Re-export commonly used types
pub use equipment::{Equipment, EquipmentShort};
pub use location::{Location, LocationShort};
pub use schedule::{ScheduleEntry, ScheduleEntryDetails};
pub use settings::ScheduleWindow;
pub use user::{Role, UserProfile};
