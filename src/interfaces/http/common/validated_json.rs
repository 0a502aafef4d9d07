//! Validated JSON extractor for Axum
//!
//! Works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value. Parse
//! failures answer 400, validation failures answer 422 with the offending
//! fields listed in the error message.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiResponse;

/// An extractor that deserializes JSON and validates it.
pub struct ValidatedJson<T>(pub T);

/// Extraction failure: either the JSON didn't parse or validation rejected it.
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(validator::ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Json(rejection) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid JSON: {}", rejection),
            ),
            Self::Validation(errors) => {
                let details: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errs)| {
                        errs.iter().map(move |e| match &e.message {
                            Some(msg) => format!("{}: {}", field, msg),
                            None => format!("{}: {:?}", field, e.code),
                        })
                    })
                    .collect();
                let message = if details.is_empty() {
                    "Validation failed".to_string()
                } else {
                    details.join("; ")
                };
                (StatusCode::UNPROCESSABLE_ENTITY, message)
            }
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::Validation)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::Service;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct CreateThing {
        #[validate(length(min = 1, max = 10))]
        name: String,
    }

    async fn handler(ValidatedJson(_body): ValidatedJson<CreateThing>) -> &'static str {
        "ok"
    }

    async fn send(json: &str) -> StatusCode {
        let mut svc = Router::new()
            .route("/things", post(handler))
            .into_service();
        let req = Request::builder()
            .method("POST")
            .uri("/things")
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap();
        svc.call(req).await.unwrap().status()
    }

    #[tokio::test]
    async fn accepts_valid_payload() {
        assert_eq!(send(r#"{"name":"zoe"}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_invalid_json_with_400() {
        assert_eq!(send("{not json").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_failed_validation_with_422() {
        assert_eq!(
            send(r#"{"name":""}"#).await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
