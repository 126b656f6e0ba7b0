use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod credentials;

pub use credentials::{CredentialStore, Credentials};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL, including the `/api` mount point.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Path segment in front of the attendance endpoints.
    #[serde(default = "default_attendance_prefix")]
    pub attendance_prefix: String,
    /// Local SQLite file holding the audit log.
    #[serde(default = "default_database")]
    pub database: String,
    /// strftime pattern used for times shown to the user.
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_api_url() -> String {
    "http://localhost:8001/api".to_string()
}
fn default_attendance_prefix() -> String {
    "/attendance".to_string()
}
fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            attendance_prefix: default_attendance_prefix(),
            database: default_database(),
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wfclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wfclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wfclock.conf")
    }

    /// Return the full path of the SQLite audit database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("wfclock.sqlite")
    }

    pub fn credentials_file() -> PathBuf {
        Self::config_dir().join("credentials.yml")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file is a valid "all defaults" configuration.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Full URL of an attendance endpoint, e.g. `today` or `checkout`.
    pub fn attendance_url(&self, endpoint: &str) -> String {
        let prefix = self.attendance_prefix.trim_matches('/');
        if prefix.is_empty() {
            self.api_url(endpoint)
        } else {
            self.api_url(&format!("{prefix}/{endpoint}"))
        }
    }

    /// Full URL of any backend endpoint below the API mount point.
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Create the configuration directory, the config file and the audit DB file.
    pub fn init_all(&self, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if !is_test {
            let yaml = serde_yaml::to_string(self)?;
            fs::write(Self::config_file(), yaml)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        let db_path = PathBuf::from(&self.database);
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        success(format!("Database:    {}", db_path.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = Config::from_yaml("api_url: https://hr.example.com/api/\n").unwrap();
        assert_eq!(cfg.api_url, "https://hr.example.com/api/");
        assert_eq!(cfg.attendance_prefix, "/attendance");
        assert_eq!(cfg.time_format, "%H:%M:%S");
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(matches!(
            Config::from_yaml("api_url: [unclosed"),
            Err(AppError::Yaml(_))
        ));
    }

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let cfg = Config {
            api_url: "http://h:1/api/".into(),
            ..Config::default()
        };
        assert_eq!(cfg.attendance_url("today"), "http://h:1/api/attendance/today");
        assert_eq!(cfg.api_url("/auth/login"), "http://h:1/api/auth/login");

        let hrm = Config {
            attendance_prefix: "/hrm/attendance/".into(),
            ..cfg.clone()
        };
        assert_eq!(hrm.attendance_url("checkin"), "http://h:1/api/hrm/attendance/checkin");

        let bare = Config {
            attendance_prefix: "".into(),
            ..cfg
        };
        assert_eq!(bare.attendance_url("checkout"), "http://h:1/api/checkout");
    }
}
