use std::future::Future;

use email_address::EmailAddress;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailJsApiService: Send + Sync + 'static {
    /// Sends a template email through the provider.
    ///
    /// Returns `Ok(true)` if the provider accepted the message, `Ok(false)` if
    /// it refused it, and `Err(_)` on transport failure or missing
    /// configuration.
    fn send(&self, message: TemplateMessage) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Checks whether the provider is reachable at all.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Parameters for the provider's contact template. The template owns the
/// recipient address; `title` carries the subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMessage {
    pub name: String,
    pub email: EmailAddress,
    pub title: String,
    pub message: String,
}

#[cfg(feature = "mock")]
impl MockEmailJsApiService {
    pub fn with_send(mut self, message: TemplateMessage, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_send_error(mut self, message: TemplateMessage) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!("mailer is down"))))
            });
        self
    }

    pub fn with_ping(mut self, result: anyhow::Result<()>) -> Self {
        self.expect_ping()
            .once()
            .return_once(move || Box::pin(std::future::ready(result)));
        self
    }
}
