//! Request extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use festival_core::error::DomainError;
use festival_forms::domain::record::UserId;

use crate::error::ApiError;

/// Header carrying the authenticated user's identifier, set by the gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The user on whose behalf the request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestUser(pub UserId);

impl<S> FromRequestParts<S> for RequestUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| DomainError::Validation(format!("missing {USER_ID_HEADER} header")))?;
        let id = raw
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .ok_or_else(|| {
                DomainError::Validation(format!("{USER_ID_HEADER} header must be an integer"))
            })?;
        Ok(Self(UserId::new(id)))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    async fn extract(header: Option<&str>) -> Result<RequestUser, ApiError> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(USER_ID_HEADER, value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();
        RequestUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_numeric_user_id() {
        let user = extract(Some("7")).await.unwrap();

        assert_eq!(user, RequestUser(UserId::new(7)));
    }

    #[tokio::test]
    async fn test_missing_header_is_validation_error() {
        let err = extract(None).await.unwrap_err();

        assert!(matches!(err.0, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_non_numeric_header_is_validation_error() {
        let err = extract(Some("seven")).await.unwrap_err();

        assert!(matches!(err.0, DomainError::Validation(msg) if msg.contains("integer")));
    }
}
