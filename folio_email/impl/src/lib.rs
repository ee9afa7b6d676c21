use std::sync::Arc;

use anyhow::Context;
use folio_email_contracts::{Email, EmailId, EmailSendError, EmailService};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

pub mod http;

const SEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    config: EmailServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct EmailServiceConfig {
    endpoint: Arc<Url>,
    from: Arc<str>,
    api_key: Option<Arc<str>>,
}

impl EmailServiceConfig {
    pub fn new(from: String, api_key: Option<String>, endpoint_override: Option<Url>) -> Self {
        Self {
            endpoint: endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
            from: from.into(),
            api_key: api_key.map(Into::into),
        }
    }
}

impl EmailServiceImpl {
    pub fn new(config: EmailServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<EmailId, EmailSendError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::error!("Email provider credential is not configured");
            return Err(EmailSendError::NotConfigured);
        };

        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .bearer_auth(api_key)
            .json(&SendEmailRequest {
                from: &self.config.from,
                to: [email.recipient.as_str()],
                reply_to: email.reply_to.as_deref().map(String::as_str),
                subject: &email.subject,
                html: &email.html,
            })
            .send()
            .await
            .context("Failed to reach the email provider")?;

        let status = response.status();
        if status.is_success() {
            let SendEmailResponse { id } = response
                .json()
                .await
                .context("Failed to decode the email provider response")?;
            Ok(id)
        } else {
            let detail = response
                .json::<SendEmailErrorResponse>()
                .await
                .ok()
                .and_then(|error| error.message)
                .unwrap_or_else(|| format!("status {status}"));
            tracing::error!("Email provider error: {detail}");
            Err(EmailSendError::Provider(detail))
        }
    }
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: EmailId,
}

#[derive(Debug, Deserialize)]
struct SendEmailErrorResponse {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;

    use super::*;

    #[tokio::test]
    async fn missing_credential_fails_without_request() {
        // Arrange
        let sut = EmailServiceImpl::new(EmailServiceConfig::new(
            "Portfolio Contact <onboarding@resend.dev>".into(),
            None,
            None,
        ));

        // Act
        let result = sut
            .send(Email {
                recipient: "contact@example.com".parse().unwrap(),
                subject: "Test".into(),
                html: "<p>Hello</p>".into(),
                reply_to: None,
            })
            .await;

        // Assert
        assert_matches!(result, Err(EmailSendError::NotConfigured));
    }

    #[test]
    fn request_payload() {
        let request = SendEmailRequest {
            from: "Portfolio Contact <onboarding@resend.dev>",
            to: ["rrobinson022@gmail.com"],
            reply_to: Some("max.mustermann@example.de"),
            subject: "Portfolio Contact: Max Mustermann",
            html: "<p>Hello</p>",
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "from": "Portfolio Contact <onboarding@resend.dev>",
                "to": ["rrobinson022@gmail.com"],
                "reply_to": "max.mustermann@example.de",
                "subject": "Portfolio Contact: Max Mustermann",
                "html": "<p>Hello</p>",
            })
        );
    }

    #[test]
    fn request_payload_without_reply_to() {
        let request = SendEmailRequest {
            from: "Portfolio Contact <onboarding@resend.dev>",
            to: ["rrobinson022@gmail.com"],
            reply_to: None,
            subject: "Email Deliverability Test",
            html: "<p>Hello</p>",
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("reply_to").is_none());
    }
}
