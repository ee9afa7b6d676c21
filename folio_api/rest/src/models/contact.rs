use folio_models::contact::{ContactMessage, ContactMessageAuthor, ContactMessageCompany};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactMessage {
    /// Full name of the sender
    #[serde(default)]
    pub name: String,
    /// Email address of the sender
    #[serde(default)]
    pub email: String,
    /// Company of the sender, may be empty
    #[serde(default)]
    pub company: String,
    /// Content of the message
    #[serde(default)]
    pub message: String,
}

/// The first failing rule wins. Fields are checked in a fixed order:
/// presence of name/email/message, then name length, email format, message
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiContactMessageRejection {
    MissingFields,
    NameTooShort,
    InvalidEmail,
    MessageTooShort,
}

impl ApiContactMessageRejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "Missing required fields",
            Self::NameTooShort => "Name must be at least 2 characters",
            Self::InvalidEmail => "Invalid email address",
            Self::MessageTooShort => "Message must be at least 10 characters",
        }
    }
}

impl TryFrom<ApiContactMessage> for ContactMessage {
    type Error = ApiContactMessageRejection;

    fn try_from(value: ApiContactMessage) -> Result<Self, Self::Error> {
        // presence is checked on the raw values, before any trimming
        if value.name.is_empty() || value.email.is_empty() || value.message.is_empty() {
            return Err(ApiContactMessageRejection::MissingFields);
        }

        let name = value
            .name
            .try_into()
            .map_err(|_| ApiContactMessageRejection::NameTooShort)?;
        let email = value
            .email
            .try_into()
            .map_err(|_| ApiContactMessageRejection::InvalidEmail)?;
        let content = value
            .message
            .try_into()
            .map_err(|_| ApiContactMessageRejection::MessageTooShort)?;
        let company = (!value.company.trim().is_empty())
            .then(|| ContactMessageCompany::from(value.company));

        Ok(Self {
            author: ContactMessageAuthor { name, email },
            company,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;

    use super::*;

    fn valid() -> ApiContactMessage {
        ApiContactMessage {
            name: "Max Mustermann".into(),
            email: "max.mustermann@example.de".into(),
            company: String::new(),
            message: "Hello World! This is a test.".into(),
        }
    }

    #[test]
    fn ok_at_thresholds() {
        let message = ContactMessage::try_from(ApiContactMessage {
            name: "Al".into(),
            email: "a@b.com".into(),
            company: String::new(),
            message: "1234567890".into(),
        })
        .unwrap();

        assert_eq!(*message.author.name, "Al");
        assert_eq!(*message.author.email, "a@b.com");
        assert_eq!(message.company, None);
        assert_eq!(*message.content, "1234567890");
    }

    #[test]
    fn empty_company_is_dropped() {
        let message = ContactMessage::try_from(ApiContactMessage {
            company: "   ".into(),
            ..valid()
        })
        .unwrap();

        assert_eq!(message.company, None);
    }

    #[test]
    fn company_is_trimmed() {
        let message = ContactMessage::try_from(ApiContactMessage {
            company: "  Musterfirma  ".into(),
            ..valid()
        })
        .unwrap();

        assert_eq!(*message.company.unwrap(), "Musterfirma");
    }

    #[test]
    fn missing_fields_take_precedence() {
        assert_matches!(
            ContactMessage::try_from(ApiContactMessage {
                name: String::new(),
                email: String::new(),
                message: String::new(),
                company: String::new(),
            }),
            Err(ApiContactMessageRejection::MissingFields)
        );
    }

    #[test]
    fn name_is_checked_before_email_and_message() {
        // everything below the thresholds at once still reports the name first
        assert_matches!(
            ContactMessage::try_from(ApiContactMessage {
                name: "A".into(),
                email: "not-an-email".into(),
                message: "123456789".into(),
                company: String::new(),
            }),
            Err(ApiContactMessageRejection::NameTooShort)
        );
    }

    #[test]
    fn email_is_checked_before_message() {
        assert_matches!(
            ContactMessage::try_from(ApiContactMessage {
                email: "a@b".into(),
                message: "short".into(),
                ..valid()
            }),
            Err(ApiContactMessageRejection::InvalidEmail)
        );
    }

    #[test]
    fn message_length() {
        assert_matches!(
            ContactMessage::try_from(ApiContactMessage {
                message: "123456789".into(),
                ..valid()
            }),
            Err(ApiContactMessageRejection::MessageTooShort)
        );
    }

    #[test]
    fn whitespace_name_is_present_but_too_short() {
        // a whitespace-only name passes the presence check and fails on length
        assert_matches!(
            ContactMessage::try_from(ApiContactMessage {
                name: "   ".into(),
                ..valid()
            }),
            Err(ApiContactMessageRejection::NameTooShort)
        );
    }
}
