use std::sync::Arc;

use email_address::EmailAddress;
use folio_core_contact_contracts::{ContactSendMessageError, ContactService};
use folio_email_contracts::{Email, EmailId, EmailSendError, EmailService};
use folio_models::contact::ContactMessage;
use folio_templates_contracts::{ContactEmailTemplate, TemplateService};
use folio_utils::Apply;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Templates, Email> {
    templates: Templates,
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub recipient: Arc<EmailAddress>,
}

impl<Templates, Email> ContactServiceImpl<Templates, Email> {
    pub fn new(templates: Templates, email: Email, config: ContactServiceConfig) -> Self {
        Self {
            templates,
            email,
            config,
        }
    }
}

impl<Templates, EmailS> ContactService for ContactServiceImpl<Templates, EmailS>
where
    Templates: TemplateService,
    EmailS: EmailService,
{
    async fn send_message(
        &self,
        message: ContactMessage,
    ) -> Result<EmailId, ContactSendMessageError> {
        let html = self.templates.render(&ContactEmailTemplate {
            name: (*message.author.name).clone(),
            email: (*message.author.email).clone(),
            company: message.company.as_ref().map(|company| (**company).clone()),
            message: (*message.content).clone(),
        })?;

        let email = Email {
            recipient: (*self.config.recipient).clone(),
            subject: format!("Portfolio Contact: {}", *message.author.name)
                .apply_map(message.company.as_ref(), |subject, company| {
                    format!("{subject} from {}", **company)
                }),
            html,
            reply_to: Some(message.author.email),
        };

        match self.email.send(email).await {
            Ok(id) => Ok(id),
            Err(EmailSendError::NotConfigured) => Err(ContactSendMessageError::NotConfigured),
            Err(EmailSendError::Provider(_)) => Err(ContactSendMessageError::Send),
            Err(EmailSendError::Other(err)) => Err(err.into()),
        }
    }
}
