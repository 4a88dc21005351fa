pub mod file;
pub mod local;
pub mod remote;

use crate::domain::model::Weekday;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use chrono::NaiveDate;

#[cfg(feature = "cli")]
use crate::core::settings::MoveDirection;
#[cfg(feature = "cli")]
use crate::utils::validation::validate_iso_date;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub const DEFAULT_STORE_PATH: &str = "./data";

pub fn default_seed_names() -> Vec<String> {
    ["Yamuna", "Bhawana", "Umesh", "Lokendra", "Dirgha"]
        .iter()
        .map(|n| n.to_string())
        .collect()
}

#[cfg(feature = "cli")]
#[derive(Debug, Parser)]
#[command(name = "bin-rota")]
#[command(about = "Weekly bin-duty rotation scheduler")]
pub struct CliConfig {
    /// Path to a TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for the local settings store.
    #[arg(long)]
    pub data_path: Option<String>,

    /// Base URL of a remote document store to mirror writes to.
    #[arg(long)]
    pub remote_endpoint: Option<String>,

    /// Reference day (YYYY-MM-DD); defaults to the wall clock.
    #[arg(long)]
    pub today: Option<String>,

    /// Enable verbose output.
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current assignee, upcoming rotation, and people view.
    Show {
        /// Emit the full report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Append a person to the end of the roster.
    Add { name: String },
    /// Remove the person at a roster position (0-based).
    Remove { index: usize },
    /// Swap a person with their neighbor (0-based index).
    Move {
        index: usize,
        #[arg(value_enum)]
        direction: MoveDirection,
    },
    /// Set the collection weekday (0 = Sunday .. 6 = Saturday).
    SetWeekday { weekday: u8 },
    /// Set the pivot date anchoring occurrence #0 (YYYY-MM-DD).
    SetPivot { date: String },
    /// Export the assignment forecast as CSV.
    Export {
        #[arg(long, default_value = "./forecast.csv")]
        output: PathBuf,
    },
}

/// Fully resolved host configuration: CLI flag > TOML file > built-in
/// default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: String,
    pub remote_endpoint: Option<String>,
    pub seed_names: Vec<String>,
    pub default_weekday: Weekday,
    pub default_pivot: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: DEFAULT_STORE_PATH.to_string(),
            remote_endpoint: None,
            seed_names: default_seed_names(),
            default_weekday: Weekday::default(),
            default_pivot: None,
        }
    }
}

#[cfg(feature = "cli")]
impl AppConfig {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let file = file::FileConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };
        let storage = file.as_ref().map(|f| &f.storage);
        let rotation = file.as_ref().and_then(|f| f.rotation.as_ref());

        let store_path = cli
            .data_path
            .clone()
            .or_else(|| storage.map(|s| s.path.clone()))
            .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
        let remote_endpoint = cli
            .remote_endpoint
            .clone()
            .or_else(|| storage.and_then(|s| s.remote_endpoint.clone()));
        let seed_names = rotation
            .and_then(|r| r.seed_names.clone())
            .unwrap_or_else(default_seed_names);
        let default_weekday = match rotation.and_then(|r| r.weekday) {
            Some(index) => Weekday::new(index)?,
            None => Weekday::default(),
        };
        let default_pivot = rotation
            .and_then(|r| r.pivot.as_deref())
            .map(validate_iso_date)
            .transpose()?;

        let config = Self {
            store_path,
            remote_endpoint,
            seed_names,
            default_weekday,
            default_pivot,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("store_path", &self.store_path)?;
        if let Some(endpoint) = &self.remote_endpoint {
            validate_url("remote_endpoint", endpoint)?;
        }
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn store_path(&self) -> &str {
        &self.store_path
    }

    fn remote_endpoint(&self) -> Option<&str> {
        self.remote_endpoint.as_deref()
    }

    fn seed_names(&self) -> &[String] {
        &self.seed_names
    }

    fn default_weekday(&self) -> Weekday {
        self.default_weekday
    }

    fn default_pivot(&self) -> Option<NaiveDate> {
        self.default_pivot
    }
}
