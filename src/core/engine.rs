use crate::core::presentation::compute_presentation_order;
use crate::core::rotation::compute_rotation_state;
use crate::core::settings::SettingsRepository;
use crate::domain::model::{MemberSchedule, RotaSettings, RotationState};
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde::Serialize;

/// Everything a caller needs to render the scheduler for one reference day.
#[derive(Debug, Clone, Serialize)]
pub struct RotaReport {
    pub today: NaiveDate,
    pub settings: RotaSettings,
    pub state: RotationState,
    pub members: Vec<MemberSchedule>,
}

/// Ties the persisted settings to the pure scheduling functions: load a
/// snapshot, compute the rotation, derive the people view.
pub struct RotaEngine<S: KeyValueStore> {
    repository: SettingsRepository<S>,
}

impl<S: KeyValueStore> RotaEngine<S> {
    pub fn new(repository: SettingsRepository<S>) -> Self {
        Self { repository }
    }

    pub async fn run(&self, today: NaiveDate) -> Result<RotaReport> {
        tracing::info!("Loading rotation settings...");
        let settings = self.repository.load(today).await?;
        tracing::info!(
            "Roster has {} seat(s), collection on {}",
            settings.names.len(),
            settings.weekday.name()
        );

        let state = compute_rotation_state(&settings.names, settings.weekday, settings.pivot, today);
        let members = compute_presentation_order(&settings.names, &state.forecast);
        tracing::info!("Computed {} forecast entries", state.forecast.len());

        Ok(RotaReport {
            today,
            settings,
            state,
            members,
        })
    }
}
