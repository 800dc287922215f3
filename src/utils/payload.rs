use axum::extract::{FromRequest, Request};
use axum::{Form, Json};
use http::StatusCode;
use http::header::CONTENT_TYPE;
use log::warn;

use crate::error::AppError;
use crate::models::Submission;

/// Request body of a POST route, decoded as JSON or as an urlencoded form
/// depending on `Content-Type`. A body over the size limit is a 413; any
/// other decoding failure is a validation error.
#[derive(Debug)]
pub struct Payload<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: Submission,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let decoded = if is_form(&req) {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(value)| value)
                .map_err(|rejection| (rejection.status(), rejection.body_text()))
        } else {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(value)| value)
                .map_err(|rejection| (rejection.status(), rejection.body_text()))
        };

        match decoded {
            Ok(value) => Ok(Payload(value)),
            Err((status, reason)) if status == StatusCode::PAYLOAD_TOO_LARGE => {
                warn!("{} rejected, {reason}", T::KIND);
                Err(AppError::PayloadTooLarge)
            }
            Err((_, reason)) => {
                warn!("{} rejected, unreadable payload: {reason}", T::KIND);
                Err(AppError::Validation(T::MISSING_FIELDS))
            }
        }
    }
}
