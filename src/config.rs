use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use homeservice_notification::{EmailConfig, EmailTransport};
use serde::Deserialize;
use std::{env, path::PathBuf};
use validator::ValidateEmail;

/// Locales with a translation file under `locales/`.
pub const SUPPORTED_LOCALES: [&str; 2] = ["ru", "en"];

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Address every submission is delivered to
    pub recipient: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_subject() -> String {
    "Новая заявка с сайта Home Service Rostov".to_string()
}

fn default_locale() -> String {
    "ru".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_root")]
    pub root: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_site_root(),
        }
    }
}

fn default_site_root() -> PathBuf {
    PathBuf::from("public")
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (HOMESERVICE__CONTACT__RECIPIENT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        Self::builder(&config_file_path)?
            .add_source(
                Environment::with_prefix("HOMESERVICE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a file and the hardcoded defaults only.
    pub fn from_file(config_file_path: &str) -> Result<Self, ConfigError> {
        Self::builder(config_file_path)?.build()?.try_deserialize()
    }

    fn builder(
        config_file_path: &str,
    ) -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("email.smtp_host", "localhost")?
            .set_default("email.smtp_port", 25)?
            .set_default("contact.recipient", "elitstroyservice123@bk.ru")?;

        // The file is optional
        if std::path::Path::new(config_file_path).exists() {
            builder = builder.add_source(File::with_name(config_file_path));
        }

        Ok(builder)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.contact.recipient.validate_email() {
            return Err(format!(
                "Contact recipient '{}' is not a valid email address",
                self.contact.recipient
            ));
        }
        if self.contact.subject.trim().is_empty() {
            return Err("Contact subject must not be empty".to_string());
        }
        if !SUPPORTED_LOCALES.contains(&self.contact.locale.as_str()) {
            return Err(format!(
                "Unsupported locale '{}', expected one of {:?}",
                self.contact.locale, SUPPORTED_LOCALES
            ));
        }
        if self.email.transport == EmailTransport::Smtp && self.email.smtp_host.is_empty() {
            return Err("SMTP host must be set when the smtp transport is used".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            email: EmailConfig {
                transport: EmailTransport::Log,
                smtp_host: "localhost".to_string(),
                smtp_port: 25,
                smtp_username: String::new(),
                smtp_password: String::new(),
            },
            contact: ContactConfig {
                recipient: "owner@homeservice.localhost".to_string(),
                subject: default_subject(),
                locale: default_locale(),
            },
            site: SiteConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_bad_recipient() {
        let mut config = config();
        config.contact.recipient = "not-an-address".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_subject() {
        let mut config = config();
        config.contact.subject = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_unknown_locale() {
        let mut config = config();
        config.contact.locale = "de".to_string();

        assert_eq!(
            config.validate(),
            Err("Unsupported locale 'de', expected one of [\"ru\", \"en\"]".to_string())
        );
    }

    #[test]
    fn test_validation_smtp_without_host() {
        let mut config = config();
        config.email.transport = EmailTransport::Smtp;
        config.email.smtp_host = String::new();

        assert!(config.validate().is_err());
    }
}
