use crate::utils::error::{Result, RotaError};
use crate::utils::validation::{
    validate_iso_date, validate_path, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Host configuration loaded from a TOML file.
///
/// Values here sit between CLI flags (which win) and built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub storage: StorageConfig,
    pub rotation: Option<RotationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for the local settings document.
    pub path: String,
    /// Base URL of a remote document store to mirror writes to.
    pub remote_endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Default collection weekday, 0 = Sunday .. 6 = Saturday.
    pub weekday: Option<u8>,
    /// Default pivot date (YYYY-MM-DD); absent means "first run day".
    pub pivot: Option<String>,
    /// Roster seeded on first run.
    pub seed_names: Option<Vec<String>>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RotaError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RotaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with environment values, leaving
    /// unset variables untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("storage.path", &self.storage.path)?;

        if let Some(endpoint) = &self.storage.remote_endpoint {
            validate_url("storage.remote_endpoint", endpoint)?;
        }

        if let Some(rotation) = &self.rotation {
            if let Some(weekday) = rotation.weekday {
                validate_range("rotation.weekday", weekday, 0, 6)?;
            }
            if let Some(pivot) = &rotation.pivot {
                validate_iso_date(pivot)?;
            }
        }

        Ok(())
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[storage]
path = "./data"

[rotation]
weekday = 3
pivot = "2024-01-03"
seed_names = ["Umesh", "Lokendra", "Dirgha"]
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.storage.path, "./data");
        assert_eq!(config.storage.remote_endpoint, None);
        let rotation = config.rotation.unwrap();
        assert_eq!(rotation.weekday, Some(3));
        assert_eq!(rotation.pivot.as_deref(), Some("2024-01-03"));
        assert_eq!(
            rotation.seed_names.unwrap(),
            vec!["Umesh", "Lokendra", "Dirgha"]
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ROTA_REMOTE", "https://rota.example.com/appData");

        let toml_content = r#"
[storage]
path = "./data"
remote_endpoint = "${TEST_ROTA_REMOTE}"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.storage.remote_endpoint.as_deref(),
            Some("https://rota.example.com/appData")
        );

        std::env::remove_var("TEST_ROTA_REMOTE");
    }

    #[test]
    fn test_validation_rejects_bad_endpoint() {
        let toml_content = r#"
[storage]
path = "./data"
remote_endpoint = "not-a-url"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_weekday() {
        let toml_content = r#"
[storage]
path = "./data"

[rotation]
weekday = 9
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_malformed_pivot() {
        let toml_content = r#"
[storage]
path = "./data"

[rotation]
pivot = "Jan 3rd 2024"
"#;

        let config = FileConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[storage]
path = "./rota-data"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = FileConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storage.path, "./rota-data");
        assert!(config.validate().is_ok());
    }
}
