use nutype::nutype;

/// A single contact form submission. Constructed from already validated
/// parts, transmitted once and discarded after the delivery call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub company: Option<ContactMessageCompany>,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactMessageAuthorEmail,
}

#[nutype(
    sanitize(trim),
    validate(len_char_min = 2),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

/// Intentionally a "local-part @ domain-with-dot" shape check and not full
/// RFC 5322 validation.
#[nutype(
    sanitize(trim),
    validate(regex = r"^[^\s@]+@[^\s@]+\.[^\s@]+$"),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorEmail(String);

#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, From, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageCompany(String);

#[nutype(
    sanitize(trim),
    validate(len_char_min = 10),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);
