use std::future::Future;

use tentertain_models::contact::{ContactRequest, ContactValidationErrors};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validates the request and forwards it to the mail provider.
    ///
    /// The provider is not contacted unless every field passes validation.
    fn send_message(
        &self,
        request: ContactRequest,
    ) -> impl Future<Output = Result<(), ContactSendMessageError>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_send_message(
        mut self,
        request: ContactRequest,
        result: Result<(), ContactSendMessageError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}

#[derive(Debug, Error)]
pub enum ContactSendMessageError {
    #[error("Invalid contact request: {0}")]
    Validation(ContactValidationErrors),
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
