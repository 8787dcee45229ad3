use serde::{Deserialize, Serialize};
use tentertain_models::contact::{ContactRequest, ContactValidationErrors};

/// Contact form fields exactly as the user typed them. Validation happens in
/// the contact feature so that all violations can be reported at once.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiContactRequest {
    /// Full name of the sender
    pub name: String,
    /// Email address of the sender
    pub email: String,
    /// Subject of the message
    pub subject: String,
    /// Content of the message
    pub message: String,
}

impl From<ApiContactRequest> for ContactRequest {
    fn from(value: ApiContactRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            subject: value.subject,
            message: value.message,
        }
    }
}

#[derive(Serialize)]
pub struct ApiContactValidationError {
    pub detail: &'static str,
    pub fields: ContactValidationErrors,
}
