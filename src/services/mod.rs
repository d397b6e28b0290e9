//! Business logic services

pub mod auth;
pub mod equipment;
pub mod locations;
pub mod schedule;
pub mod settings;
pub mod users;

use crate::{
    config::{AuthConfig, ServerConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub equipment: equipment::EquipmentService,
    pub locations: locations::LocationsService,
    pub schedule: schedule::ScheduleService,
    pub settings: settings::SettingsService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        server_config: ServerConfig,
    ) -> Self {
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            equipment: equipment::EquipmentService::new(repository.clone()),
            locations: locations::LocationsService::new(repository.clone()),
            schedule: schedule::ScheduleService::new(repository.clone()),
            settings: settings::SettingsService::new(repository.clone()),
            users: users::UsersService::new(repository, server_config),
        }
    }
}
