use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::filter;

use crate::dir::AdheraDirectory;

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

/// Overrides the auth service base url.
pub const AUTH_URL_ENV: &str = "ADHERA_AUTH_URL";
/// Overrides the auth service public (anon) key.
pub const AUTH_KEY_ENV: &str = "ADHERA_AUTH_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Use iced debug feature if true.
    pub debug: Option<bool>,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    pub api_url: Option<String>,
    pub api_public_key: Option<String>,
    /// Link sent in the confirmation email.
    pub email_redirect_to: Option<String>,
    /// Client side timeout of a request to the auth service.
    pub timeout_secs: Option<u64>,
}

/// Auth settings once every required value is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSettings {
    pub api_url: String,
    pub api_public_key: String,
    pub email_redirect_to: Option<String>,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn path(datadir: &AdheraDirectory) -> PathBuf {
        datadir.path().join(DEFAULT_FILE_NAME)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read_to_string(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_str::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    /// Loads the configuration of the data directory, an absent file meaning defaults.
    pub fn load(datadir: &AdheraDirectory) -> Result<Self, ConfigError> {
        match Self::from_file(&Self::path(datadir)) {
            Err(ConfigError::NotFound) => Ok(Self::default()),
            res => res,
        }
    }

    /// Values set in the environment take precedence over the file ones.
    pub fn with_overrides(mut self, api_url: Option<String>, api_public_key: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.auth.api_url = Some(url);
        }
        if let Some(key) = api_public_key.filter(|k| !k.trim().is_empty()) {
            self.auth.api_public_key = Some(key);
        }
        self
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(AUTH_URL_ENV).ok(),
            std::env::var(AUTH_KEY_ENV).ok(),
        )
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    pub fn auth_settings(&self) -> Result<AuthSettings, ConfigError> {
        let api_url = self
            .auth
            .api_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::Missing("auth.api_url", AUTH_URL_ENV))?;
        let api_public_key = self
            .auth
            .api_public_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing("auth.api_public_key", AUTH_KEY_ENV))?;
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidField(
                "auth.api_url",
                format!("'{}' is not an http(s) url", api_url),
            ));
        }
        Ok(AuthSettings {
            api_url,
            api_public_key,
            email_redirect_to: self
                .auth
                .email_redirect_to
                .clone()
                .filter(|r| !r.trim().is_empty()),
            timeout: self.auth.timeout_secs.map(Duration::from_secs),
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ConfigError {
    InvalidField(&'static str, String),
    /// Field name and the environment variable that can provide it.
    Missing(&'static str, &'static str),
    NotFound,
    ReadingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Config file not found"),
            Self::InvalidField(field, message) => {
                write!(f, "Config field {} is invalid: {}", field, message)
            }
            Self::Missing(field, env) => write!(
                f,
                "Config field {} is missing, set it in {} or with the {} environment variable",
                field, DEFAULT_FILE_NAME, env
            ),
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> (tempfile::TempDir, AdheraDirectory) {
        let tmp = tempfile::tempdir().unwrap();
        let datadir = AdheraDirectory::new(tmp.path().to_path_buf());
        let mut file = std::fs::File::create(Config::path(&datadir)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (tmp, datadir)
    }

    #[test]
    fn load_full_config() {
        let (_tmp, datadir) = write_config(
            r#"
log_level = "debug"

[auth]
api_url = "https://project.supabase.co"
api_public_key = "anon"
email_redirect_to = "https://app.adhera.test/login"
timeout_secs = 10
"#,
        );
        let config = Config::load(&datadir).unwrap();
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
        assert_eq!(
            config.auth_settings().unwrap(),
            AuthSettings {
                api_url: "https://project.supabase.co".to_string(),
                api_public_key: "anon".to_string(),
                email_redirect_to: Some("https://app.adhera.test/login".to_string()),
                timeout: Some(Duration::from_secs(10)),
            }
        );
    }

    #[test]
    fn missing_file_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        let datadir = AdheraDirectory::new(tmp.path().to_path_buf());
        let config = Config::load(&datadir).unwrap();
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::INFO);
        assert_eq!(config.auth, AuthConfig::default());
        assert_eq!(
            config.auth_settings(),
            Err(ConfigError::Missing("auth.api_url", AUTH_URL_ENV))
        );
    }

    #[test]
    fn invalid_log_level() {
        let (_tmp, datadir) = write_config("log_level = \"loud\"\n");
        assert!(matches!(
            Config::load(&datadir),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }

    #[test]
    fn malformed_file() {
        let (_tmp, datadir) = write_config("log_level = ");
        assert!(matches!(
            Config::load(&datadir),
            Err(ConfigError::ReadingFile(_))
        ));
    }

    #[test]
    fn overrides_take_precedence() {
        let (_tmp, datadir) = write_config(
            r#"
[auth]
api_url = "https://file.supabase.co"
"#,
        );
        let config = Config::load(&datadir).unwrap().with_overrides(
            Some("https://env.supabase.co".to_string()),
            Some("key".to_string()),
        );
        let settings = config.auth_settings().unwrap();
        assert_eq!(settings.api_url, "https://env.supabase.co");
        assert_eq!(settings.api_public_key, "key");
        assert_eq!(settings.timeout, None);

        // Blank overrides are ignored.
        let config = config.with_overrides(Some(" ".to_string()), None);
        assert_eq!(
            config.auth.api_url.as_deref(),
            Some("https://env.supabase.co")
        );
    }

    #[test]
    fn missing_key_and_bad_url() {
        let config = Config::default().with_overrides(Some("https://x.test".to_string()), None);
        assert_eq!(
            config.auth_settings(),
            Err(ConfigError::Missing("auth.api_public_key", AUTH_KEY_ENV))
        );
        let config = config.with_overrides(Some("x.test".to_string()), Some("k".to_string()));
        assert!(matches!(
            config.auth_settings(),
            Err(ConfigError::InvalidField("auth.api_url", _))
        ));
    }
}
