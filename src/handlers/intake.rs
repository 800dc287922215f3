use axum::{Json, extract::State, http::StatusCode};
use log::{info, warn};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{AppState, Created, Submission};
use crate::utils::{Payload, insert_submission, with_connection};

/// Create a record of kind `T`
/// POST /contato, /acesso, /feedback, /sugestao, /denuncias
pub async fn create_submission<T: Submission>(
    State(state): State<Arc<AppState>>,
    Payload(submission): Payload<T>,
) -> Result<(StatusCode, Json<Created>), AppError> {
    info!("{} recebido: {submission:?}", T::KIND);

    if let Err(err) = submission.validate() {
        warn!("{} rejected, required fields missing", T::KIND);
        return Err(err);
    }

    let id = with_connection(&state.db_pool, move |conn| insert_submission(conn, &submission))
        .await
        .map_err(|e| AppError::storage(T::STORAGE_FAILURE, e))?;

    info!("{} stored in '{}' with id {id}", T::KIND, T::TABLE);

    let body = Created {
        message: T::CREATED,
        id: T::RETURNS_ID.then_some(id),
    };
    Ok((StatusCode::CREATED, Json(body)))
}
