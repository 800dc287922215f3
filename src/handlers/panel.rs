use axum::{Json, extract::State};
use log::info;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{AppState, Listing, StoredRecord};
use crate::utils::{select_all, with_connection};

const LOAD_FAILURE: &str = "Erro ao carregar registros.";

/// Every stored row of kind `R`, for the administrative panel
/// GET /feedbacks, /sugestoes, /denuncias
pub async fn list_records<R: StoredRecord>(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Listing<R>>, AppError> {
    let rows = with_connection(&state.db_pool, select_all::<R>)
        .await
        .map_err(|e| AppError::storage(LOAD_FAILURE, e))?;

    info!("Listing {} rows from '{}'", rows.len(), R::TABLE);
    Ok(Json(Listing(rows)))
}
