use crate::config::Config;

/// One-screen summary of a loaded configuration. Credentials are masked.
pub fn summary(config: &Config) -> String {
    let credentials = if config.email.smtp_username.is_empty() {
        "none"
    } else {
        "configured"
    };

    format!(
        "server:    {}:{}\n\
         email:     {:?} via {}:{} (credentials: {})\n\
         recipient: {}\n\
         subject:   {}\n\
         locale:    {}\n\
         site root: {}\n\
         logging:   {} ({:?})",
        config.server.host,
        config.server.port,
        config.email.transport,
        config.email.smtp_host,
        config.email.smtp_port,
        credentials,
        config.contact.recipient,
        config.contact.subject,
        config.contact.locale,
        config.site.root.display(),
        config.logging.level,
        config.logging.format,
    )
}
