use anyhow::{anyhow, Result};
use config::Config;
use std::collections::HashMap;
use std::path::Path;

use crate::database::DbConfig;

/// Tally configuration
///
/// Resolved from a TOML file plus `TALLY_*` environment variables. The only
/// setting today is the directory holding the database file.
pub struct TallyConfig {
    /// Path to the directory holding tally's database file
    pub data_dir: String,
}

const EMPTY_CONFIG: &str = r#"### tally configuration file

### directory for the tally database file
# data_dir = "~/.tally"
"#;

impl Default for TallyConfig {
    fn default() -> Self {
        let home_dir = dirs::home_dir()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        Self {
            data_dir: format!("{}/.tally", home_dir),
        }
    }
}

impl TallyConfig {
    /// Function to create and initialize a new configuration
    pub fn new(path: &Option<String>) -> Result<TallyConfig> {
        let mut builder = Config::builder();

        // By default use $HOME/.tally/tally.toml as the configuration file path
        let home_dir = dirs::home_dir()
            .ok_or_else(|| anyhow!("Could not find home directory"))?
            .to_str()
            .ok_or_else(|| anyhow!("Could not convert home directory path to string"))?
            .to_owned();

        // Config dir
        let tally_dir = format!("{}/.tally", home_dir.as_str());

        // Add in toml configuration file
        match path {
            Some(p) => {
                let path = Path::new(p.as_str());
                if path.exists() {
                    let path_str = path
                        .to_str()
                        .ok_or_else(|| anyhow!("Could not convert path to string"))?;
                    builder = builder.add_source(config::File::with_name(path_str));
                } else {
                    std::fs::write(p.as_str(), EMPTY_CONFIG)
                        .map_err(|e| anyhow!("Unable to create config file: {}", e))?;
                }
            }
            None => {
                std::fs::create_dir_all(tally_dir.as_str())
                    .map_err(|e| anyhow!("Unable to create tally directory: {}", e))?;
                let p = format!("{}/tally.toml", tally_dir.as_str());
                if Path::new(p.as_str()).exists() {
                    builder = builder.add_source(config::File::with_name(p.as_str()));
                } else {
                    std::fs::write(p.as_str(), EMPTY_CONFIG).map_err(|e| {
                        anyhow!("Unable to create config file {}: {}", p.as_str(), e)
                    })?;
                }
            }
        }

        // Add in settings from the environment (with a prefix of TALLY)
        // E.g., `TALLY_DATA_DIR=/tmp/tally tally list` would set the data directory
        builder = builder.add_source(config::Environment::with_prefix("TALLY"));

        let settings = builder
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        let config = settings
            .try_deserialize::<HashMap<String, String>>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))?;

        // Parse data directory, falling back to the default location
        let data_dir = match config.get("data_dir") {
            Some(p) => {
                let path = Path::new(p);
                path.to_str()
                    .ok_or_else(|| anyhow!("Could not convert data_dir path to string"))?
                    .to_string()
            }
            None => {
                std::fs::create_dir_all(tally_dir.as_str())
                    .map_err(|e| anyhow!("Unable to create data directory: {}", e))?;
                tally_dir
            }
        };

        Ok(TallyConfig { data_dir })
    }

    /// Get the path to the SQLite database file
    pub fn db_path(&self) -> String {
        let data_dir = self.data_dir.trim_end_matches('/');
        format!("{}/tally.sqlite3", data_dir)
    }

    /// Get connection parameters pointing at the configured database file
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.db_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path() {
        let config = TallyConfig {
            data_dir: "/test/dir".to_string(),
        };
        assert_eq!(config.db_path(), "/test/dir/tally.sqlite3");

        // Trailing slashes are trimmed
        let config = TallyConfig {
            data_dir: "/test/dir/".to_string(),
        };
        assert_eq!(config.db_path(), "/test/dir/tally.sqlite3");
    }

    #[test]
    fn test_db_config_points_at_db_path() {
        let config = TallyConfig {
            data_dir: "/test/dir".to_string(),
        };
        assert_eq!(config.db_config().path, config.db_path());
    }

    #[test]
    fn test_default_data_dir() {
        let config = TallyConfig::default();
        assert!(config.data_dir.ends_with(".tally"));
    }
}
