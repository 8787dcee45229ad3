use tentertain_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use tentertain_extern_contracts::emailjs::{EmailJsApiService, TemplateMessage};
use tentertain_models::contact::ContactRequest;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Mailer> {
    mailer: Mailer,
}

impl<Mailer> ContactFeatureServiceImpl<Mailer> {
    pub fn new(mailer: Mailer) -> Self {
        Self { mailer }
    }
}

impl<Mailer> ContactFeatureService for ContactFeatureServiceImpl<Mailer>
where
    Mailer: EmailJsApiService,
{
    async fn send_message(&self, request: ContactRequest) -> Result<(), ContactSendMessageError> {
        let message = request
            .validate()
            .map_err(ContactSendMessageError::Validation)?;

        let outbound = TemplateMessage {
            name: message.author.name.into_inner(),
            email: message.author.email,
            title: message.subject.into_inner(),
            message: message.body.into_inner(),
        };

        if !self.mailer.send(outbound).await? {
            return Err(ContactSendMessageError::Send);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tentertain_extern_contracts::emailjs::MockEmailJsApiService;
    use tentertain_models::contact::{ContactField, ContactValidationErrors};
    use tentertain_utils::assert_matches;

    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Priya Rao".into(),
            email: "priya@example.com".into(),
            subject: "Partnership".into(),
            message: "We would love to collaborate with you on this.".into(),
        }
    }

    fn outbound() -> TemplateMessage {
        TemplateMessage {
            name: "Priya Rao".into(),
            email: "priya@example.com".parse().unwrap(),
            title: "Partnership".into(),
            message: "We would love to collaborate with you on this.".into(),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let mailer = MockEmailJsApiService::new().with_send(outbound(), true);
        let sut = ContactFeatureServiceImpl::new(mailer);

        // Act
        let result = sut.send_message(request()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn subject_becomes_title() {
        // Arrange
        let mailer = MockEmailJsApiService::new().with_send(
            TemplateMessage {
                title: "Booking enquiry".into(),
                ..outbound()
            },
            true,
        );
        let sut = ContactFeatureServiceImpl::new(mailer);

        // Act
        let result = sut
            .send_message(ContactRequest {
                subject: "Booking enquiry".into(),
                ..request()
            })
            .await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn provider_refuses() {
        // Arrange
        let mailer = MockEmailJsApiService::new().with_send(outbound(), false);
        let sut = ContactFeatureServiceImpl::new(mailer);

        // Act
        let result = sut.send_message(request()).await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::Send));
    }

    #[tokio::test]
    async fn provider_unreachable() {
        // Arrange
        let mailer = MockEmailJsApiService::new().with_send_error(outbound());
        let sut = ContactFeatureServiceImpl::new(mailer);

        // Act
        let result = sut.send_message(request()).await;

        // Assert
        assert_matches!(result, Err(ContactSendMessageError::Other(_)));
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_mailer() {
        // Arrange
        let mailer = MockEmailJsApiService::new();
        let sut = ContactFeatureServiceImpl::new(mailer);

        // Act
        let result = sut
            .send_message(ContactRequest {
                name: "A".into(),
                email: "a@b".into(),
                subject: "Hi".into(),
                message: "short".into(),
            })
            .await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSendMessageError::Validation(ContactValidationErrors(errors)))
                if errors.get(&ContactField::Email).copied() == Some("Please enter a valid email")
                    && errors.get(&ContactField::Message).copied()
                        == Some("Tell us a bit more (at least 10 characters)")
                    && errors.len() == 2
        );
    }
}
