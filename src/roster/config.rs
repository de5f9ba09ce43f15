use crate::error::{RosterError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "students.txt";

/// Configuration for a scope, stored in `<scope dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterConfig {
    /// Name of the data file, relative to the scope directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Upper GPA bound enforced on add and update (no check when absent)
    #[serde(default)]
    pub max_gpa: Option<f64>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

pub(crate) fn unknown_key(key: &str) -> RosterError {
    RosterError::Api(format!("Unknown config key: {}", key))
}

fn parse_max_gpa(value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(max) if max.is_finite() && max > 0.0 => Ok(max),
        _ => Err(RosterError::Api(format!("Invalid max-gpa: {}", value))),
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            max_gpa: None,
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "max-gpa" => Some(
                self.max_gpa
                    .map(|g| g.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            _ => None,
        }
    }

    /// Set `key` from its command-line form. Unknown keys and unusable
    /// values leave the config unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "data-file" => {
                if value.is_empty() {
                    return Err(RosterError::Api("data-file cannot be empty".to_string()));
                }
                self.data_file = value.to_string();
            }
            "max-gpa" => {
                self.max_gpa = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(parse_max_gpa(value)?)
                };
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// All keys with their display values, in a stable order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        ["data-file", "max-gpa"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|val| (key, val)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.data_file, "students.txt");
        assert_eq!(config.max_gpa, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join(".roster");

        let mut config = RosterConfig::default();
        config.set("data-file", "class.txt").unwrap();
        config.set("max-gpa", "4.0").unwrap();
        config.save(&nested).unwrap();

        let loaded = RosterConfig::load(&nested).unwrap();
        assert_eq!(loaded.data_file, "class.txt");
        assert_eq!(loaded.max_gpa, Some(4.0));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"max_gpa": 5.0}"#).unwrap();

        let config = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(config.data_file, "students.txt");
        assert_eq!(config.max_gpa, Some(5.0));
    }

    #[test]
    fn test_corrupt_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(matches!(
            RosterConfig::load(dir.path()),
            Err(RosterError::Serialization(_))
        ));
    }

    #[test]
    fn test_max_gpa_can_be_cleared() {
        let mut config = RosterConfig::default();
        config.set("max-gpa", "4").unwrap();
        assert_eq!(config.get("max-gpa").as_deref(), Some("4"));
        config.set("max-gpa", "none").unwrap();
        assert_eq!(config.get("max-gpa").as_deref(), Some("none"));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = RosterConfig::default();
        assert!(matches!(
            config.set("max-gpa", "abc"),
            Err(RosterError::Api(ref m)) if m == "Invalid max-gpa: abc"
        ));
        assert!(config.set("max-gpa", "-1").is_err());
        assert!(config.set("max-gpa", "NaN").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert!(matches!(
            config.set("color", "red"),
            Err(RosterError::Api(ref m)) if m == "Unknown config key: color"
        ));
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut config = RosterConfig::default();
        config.set("max-gpa", " 4.0 ").unwrap();
        assert_eq!(config.max_gpa, Some(4.0));
        config.set("max-gpa", " none ").unwrap();
        assert_eq!(config.max_gpa, None);
        config.set("data-file", " class.txt ").unwrap();
        assert_eq!(config.data_file, "class.txt");
    }
}
