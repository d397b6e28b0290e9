//! Repository layer for database operations

pub mod equipment;
pub mod locations;
pub mod schedule;
pub mod settings;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment: equipment::EquipmentRepository,
    pub locations: locations::LocationsRepository,
    pub schedule: schedule::ScheduleRepository,
    pub settings: settings::SettingsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            locations: locations::LocationsRepository::new(pool.clone()),
            schedule: schedule::ScheduleRepository::new(pool.clone()),
            settings: settings::SettingsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
