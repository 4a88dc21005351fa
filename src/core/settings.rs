//! Persisted scheduler settings: the roster, collection weekday, and pivot
//! date, stored as three keys in an injected key-value store.

use crate::domain::model::{RotaSettings, Weekday};
use crate::domain::ports::{ConfigProvider, KeyValueStore};
use crate::utils::error::{Result, RotaError};
use crate::utils::validation::validate_non_empty_string;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const KEY_NAMES: &str = "bin:names";
pub const KEY_WEEKDAY: &str = "bin:weekday";
pub const KEY_PIVOT: &str = "bin:pivot";

/// Direction for the swap-adjacent roster edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum MoveDirection {
    Up,
    Down,
}

/// Fallback values used when a settings key has never been written.
#[derive(Debug, Clone)]
pub struct RotaDefaults {
    pub names: Vec<String>,
    pub weekday: Weekday,
    /// `None` means "the day the application first ran" — the seeding date
    /// is persisted on first read so later runs keep the same anchor.
    pub pivot: Option<NaiveDate>,
}

impl RotaDefaults {
    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self {
            names: config.seed_names().to_vec(),
            weekday: config.default_weekday(),
            pivot: config.default_pivot(),
        }
    }
}

/// Read/replace access to the persisted settings, seeding defaults for
/// absent keys.
///
/// Edits rewrite the whole value for a key (last write wins); the rotation
/// core only ever sees the immutable snapshot returned by [`load`].
///
/// [`load`]: SettingsRepository::load
pub struct SettingsRepository<S: KeyValueStore> {
    store: S,
    defaults: RotaDefaults,
}

impl<S: KeyValueStore> SettingsRepository<S> {
    pub fn new(store: S, defaults: RotaDefaults) -> Self {
        Self { store, defaults }
    }

    /// Loads the full settings snapshot, persisting defaults for any key
    /// that has never been written. `today` seeds the pivot on first run.
    pub async fn load(&self, today: NaiveDate) -> Result<RotaSettings> {
        let names = self.names().await?;
        let weekday = self.get_or_seed(KEY_WEEKDAY, self.defaults.weekday).await?;
        let pivot_seed = self.defaults.pivot.unwrap_or(today);
        let pivot = self.get_or_seed(KEY_PIVOT, pivot_seed).await?;
        Ok(RotaSettings {
            names,
            weekday,
            pivot,
        })
    }

    pub async fn names(&self) -> Result<Vec<String>> {
        self.get_or_seed(KEY_NAMES, self.defaults.names.clone())
            .await
    }

    /// Appends a trimmed, non-empty name to the end of the roster.
    ///
    /// Appending at the end is the one roster edit that does not reassign
    /// duty mid-cycle.
    pub async fn append_name(&self, name: &str) -> Result<Vec<String>> {
        validate_non_empty_string("name", name)?;
        let mut names = self.names().await?;
        names.push(name.trim().to_string());
        self.persist_names(&names).await?;
        tracing::debug!("Appended '{}' to roster ({} seats)", name.trim(), names.len());
        Ok(names)
    }

    pub async fn remove_name(&self, index: usize) -> Result<Vec<String>> {
        let mut names = self.names().await?;
        if index >= names.len() {
            return Err(RotaError::IndexOutOfBounds {
                index,
                len: names.len(),
            });
        }
        let removed = names.remove(index);
        self.persist_names(&names).await?;
        tracing::debug!("Removed '{}' from roster ({} seats)", removed, names.len());
        Ok(names)
    }

    /// Swaps the seat at `index` with its neighbor. Moving past either end
    /// of the roster is a no-op.
    pub async fn move_name(&self, index: usize, direction: MoveDirection) -> Result<Vec<String>> {
        let mut names = self.names().await?;
        if index >= names.len() {
            return Err(RotaError::IndexOutOfBounds {
                index,
                len: names.len(),
            });
        }
        let neighbor = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => (index + 1 < names.len()).then_some(index + 1),
        };
        if let Some(neighbor) = neighbor {
            names.swap(index, neighbor);
            self.persist_names(&names).await?;
        }
        Ok(names)
    }

    pub async fn set_weekday(&self, weekday: Weekday) -> Result<()> {
        self.store
            .set(KEY_WEEKDAY, serde_json::to_value(weekday)?)
            .await
    }

    pub async fn set_pivot(&self, pivot: NaiveDate) -> Result<()> {
        self.store.set(KEY_PIVOT, serde_json::to_value(pivot)?).await
    }

    async fn persist_names(&self, names: &[String]) -> Result<()> {
        self.store.set(KEY_NAMES, serde_json::to_value(names)?).await
    }

    async fn get_or_seed<T>(&self, key: &str, seed: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        match self.store.get(key).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => {
                tracing::debug!("No value for {}, seeding default", key);
                self.store.set(key, serde_json::to_value(&seed)?).await?;
                Ok(seed)
            }
        }
    }
}
