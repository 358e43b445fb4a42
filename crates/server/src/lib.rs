use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use api_types::response::ApiResponse;
pub use server::run_with_listener;

mod expenses;
mod server;

pub enum ServerError {
    Engine(EngineError),
    Validation(String),
    InvalidId(String),
}

fn status_for_error(err: &ServerError) -> StatusCode {
    match err {
        ServerError::Engine(EngineError::NotFound(_)) => StatusCode::NOT_FOUND,
        ServerError::Engine(EngineError::InvalidDate(_)) => StatusCode::BAD_REQUEST,
        ServerError::Validation(_) | ServerError::InvalidId(_) => StatusCode::BAD_REQUEST,
    }
}

fn message_for_error(err: ServerError) -> String {
    match err {
        ServerError::Engine(err) => err.to_string(),
        ServerError::Validation(message) => message,
        ServerError::InvalidId(_) => "Invalid expense ID".to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for_error(&self);
        let message = message_for_error(self);

        (
            status,
            Json(ApiResponse::<()>::error(status.as_u16(), message)),
        )
            .into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::NotFound(3)).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_invalid_date_maps_to_400() {
        let res = ServerError::from(EngineError::InvalidDate("bad".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_maps_to_400() {
        let res = ServerError::Validation("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_id_maps_to_400() {
        let res = ServerError::InvalidId("abc".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn error_body_is_an_envelope_with_null_data() {
        let res = ServerError::from(EngineError::NotFound(3)).into_response();

        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["message"], "expense 3 not found");
        assert!(body["data"].is_null());
    }
}
