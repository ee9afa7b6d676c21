use folio_config::EmailConfig;
use folio_email_impl::{EmailServiceConfig, EmailServiceImpl};

/// Build the email delivery client from the configuration.
pub fn build(config: &EmailConfig) -> EmailServiceImpl {
    EmailServiceImpl::new(EmailServiceConfig::new(
        config.from.clone(),
        config.api_key.clone(),
        config.endpoint_override.clone(),
    ))
}
