pub mod calendar;
pub mod engine;
pub mod export;
pub mod presentation;
pub mod rotation;
pub mod settings;

pub use crate::domain::model::{
    Assignment, MemberSchedule, RotaSettings, RotationState, Weekday,
};
pub use crate::domain::ports::{ConfigProvider, KeyValueStore};
pub use crate::utils::error::Result;
