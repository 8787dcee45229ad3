use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use tentertain_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};

use super::error;
use crate::models::contact::{ApiContactRequest, ApiContactValidationError};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactFeatureService>>,
    Json(request): Json<ApiContactRequest>,
) -> Response {
    match service.send_message(request.into()).await {
        Ok(()) => Json(true).into_response(),
        Err(ContactSendMessageError::Validation(fields)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiContactValidationError {
                detail: "Invalid contact request",
                fields,
            }),
        )
            .into_response(),
        // provider refusal, transport failure and misconfiguration all look
        // the same to the client
        Err(ContactSendMessageError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not send message")
        }
        Err(ContactSendMessageError::Other(err)) => {
            tracing::error!("Failed to send contact message: {err}");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not send message")
        }
    }
}
