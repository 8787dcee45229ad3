use std::{collections::BTreeMap, str::FromStr};

use email_address::EmailAddress;
use nutype::nutype;
use serde::Serialize;

/// Raw contact form input as submitted by the user.
///
/// Use [`ContactRequest::validate`] to turn it into a [`ContactMessage`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated and normalized contact message. All text fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactAuthor,
    pub subject: ContactSubject,
    pub body: ContactMessageBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAuthor {
    pub name: ContactName,
    pub email: EmailAddress,
}

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactSubject(String);

#[nutype(
    sanitize(trim),
    validate(len_char_min = 10, len_char_max = 2000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageBody(String);

pub const MAX_EMAIL_LENGTH: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message per violated field, keyed by field. Rebuilt from scratch on
/// every validation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContactValidationErrors(pub BTreeMap<ContactField, &'static str>);

impl ContactValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    fn add(&mut self, field: ContactField, message: Option<&'static str>) {
        if let Some(message) = message {
            self.0.insert(field, message);
        }
    }
}

impl std::fmt::Display for ContactValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl ContactRequest {
    /// Checks every field independently and reports all violations at once,
    /// one message per field (the first violated rule wins).
    pub fn validate(self) -> Result<ContactMessage, ContactValidationErrors> {
        let name = ContactName::try_new(self.name).map_err(|err| match err {
            ContactNameError::NotEmptyViolated => "Name is required",
            ContactNameError::LenCharMaxViolated => "Name must be at most 100 characters",
        });
        let email = validate_email(&self.email);
        let subject = ContactSubject::try_new(self.subject).map_err(|err| match err {
            ContactSubjectError::NotEmptyViolated => "Subject is required",
            ContactSubjectError::LenCharMaxViolated => "Subject must be at most 200 characters",
        });
        let body = ContactMessageBody::try_new(self.message).map_err(|err| match err {
            ContactMessageBodyError::LenCharMinViolated => {
                "Tell us a bit more (at least 10 characters)"
            }
            ContactMessageBodyError::LenCharMaxViolated => {
                "Message must be at most 2000 characters"
            }
        });

        match (name, email, subject, body) {
            (Ok(name), Ok(email), Ok(subject), Ok(body)) => Ok(ContactMessage {
                author: ContactAuthor { name, email },
                subject,
                body,
            }),
            (name, email, subject, body) => {
                let mut errors = ContactValidationErrors::default();
                errors.add(ContactField::Name, name.err());
                errors.add(ContactField::Email, email.err());
                errors.add(ContactField::Subject, subject.err());
                errors.add(ContactField::Message, body.err());
                Err(errors)
            }
        }
    }
}

/// The site's validator is stricter than RFC 5321: addresses without a dotted
/// domain (e.g. `a@b`) are rejected.
fn validate_email(input: &str) -> Result<EmailAddress, &'static str> {
    let trimmed = input.trim();
    if trimmed.chars().count() > MAX_EMAIL_LENGTH {
        return Err("Email must be at most 255 characters");
    }
    EmailAddress::from_str(trimmed)
        .ok()
        .filter(|email| email.domain().contains('.'))
        .ok_or("Please enter a valid email")
}
