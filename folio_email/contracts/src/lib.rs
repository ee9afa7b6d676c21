use std::future::Future;

use email_address::EmailAddress;
use folio_models::contact::ContactMessageAuthorEmail;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Hand the email to the delivery provider and return the message id it
    /// assigned.
    fn send(&self, email: Email) -> impl Future<Output = Result<EmailId, EmailSendError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddress,
    pub subject: String,
    pub html: String,
    pub reply_to: Option<ContactMessageAuthorEmail>,
}

/// Message identifier assigned by the delivery provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub String);

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Error)]
pub enum EmailSendError {
    /// The provider credential is missing from the configuration. Only
    /// detected at send time, never at startup.
    #[error("Email provider credential is not configured.")]
    NotConfigured,
    /// The provider accepted the request but rejected the message.
    #[error("Email provider rejected the message: {0}")]
    Provider(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: Result<EmailId, EmailSendError>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
