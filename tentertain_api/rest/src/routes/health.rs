use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;
use tentertain_core_health_contracts::{HealthFeatureService, HealthStatus};

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    mailer: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let HealthStatus { mailer } = service.get_status().await;

    let status = if mailer {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse { http: true, mailer };

    (status, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tentertain_core_health_contracts::MockHealthFeatureService;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service =
            MockHealthFeatureService::new().with_get_status(HealthStatus { mailer: true });

        // Act
        let (status, body) = get_health(service).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"http": true, "mailer": true}));
    }

    #[tokio::test]
    async fn mailer_unreachable() {
        // Arrange
        let service =
            MockHealthFeatureService::new().with_get_status(HealthStatus { mailer: false });

        // Act
        let (status, body) = get_health(service).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"http": true, "mailer": false}));
    }

    async fn get_health(service: MockHealthFeatureService) -> (StatusCode, Value) {
        let response = router(Arc::new(service))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
