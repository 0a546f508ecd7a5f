//! Tests for configuration system

use homeservice::config::{Config, LogFormat};
use homeservice_notification::EmailTransport;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::from_file("config/default.toml").expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.email.transport, EmailTransport::Log);
    assert_eq!(config.contact.recipient, "elitstroyservice123@bk.ru");
    assert_eq!(
        config.contact.subject,
        "Новая заявка с сайта Home Service Rostov"
    );
    assert_eq!(config.contact.locale, "ru");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = Config::from_file("does/not/exist.toml").expect("Failed to load defaults");

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.email.transport, EmailTransport::Smtp);
    assert_eq!(config.email.smtp_host, "localhost");
    assert_eq!(config.email.smtp_port, 25);
    assert_eq!(
        config.contact.subject,
        "Новая заявка с сайта Home Service Rostov"
    );
    assert_eq!(config.site.root.to_str(), Some("public"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("homeservice.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 9000

[email]
transport = "smtp"
smtp_host = "smtp.example.com"
smtp_port = 587
smtp_username = "mailer"
smtp_password = "secret"

[contact]
recipient = "office@example.com"
locale = "en"

[logging]
format = "json"
"#,
    )
    .unwrap();

    let config = Config::from_file(path.to_str().unwrap()).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.email.smtp_host, "smtp.example.com");
    assert_eq!(config.email.smtp_username, "mailer");
    assert_eq!(config.contact.recipient, "office@example.com");
    assert_eq!(config.contact.locale, "en");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.validate().is_ok());

    let summary = homeservice::cli::summary(&config);
    assert!(summary.contains("office@example.com"));
    assert!(summary.contains("credentials: configured"));
    assert!(!summary.contains("secret"));
}

#[test]
fn test_invalid_recipient_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("homeservice.toml");
    std::fs::write(&path, "[contact]\nrecipient = \"nobody\"\nlocale = \"fr\"\n").unwrap();

    let config = Config::from_file(path.to_str().unwrap()).expect("Failed to load config");

    assert!(config.validate().is_err());
}
