pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{file::FileConfig, local::LocalStore, remote::MirroredStore, AppConfig};
pub use core::engine::{RotaEngine, RotaReport};
pub use core::settings::{MoveDirection, RotaDefaults, SettingsRepository};
pub use domain::model::{Assignment, MemberSchedule, RotaSettings, RotationState, Weekday};
pub use domain::ports::{ConfigProvider, KeyValueStore};
pub use utils::error::{Result, RotaError};
