//! Intake backend for citizen submissions: contact messages, information
//! access requests, feedback, suggestions and complaints, stored in SQLite
//! and read back by the administrative panel.

use axum::{
    Router,
    routing::{get, post},
};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::map_response_body::MapResponseBodyLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

use handlers::{create_submission, list_records};
use models::{
    AccessRequestForm, AppConfig, AppState, ComplaintForm, ComplaintRecord, ContactForm,
    FeedbackForm, FeedbackRecord, SuggestionForm, SuggestionRecord,
};

/// Build the HTTP router. The state must already have its tables initialized.
pub fn router(state: Arc<AppState>, config: &AppConfig) -> Router {
    Router::new()
        .route("/contato", post(create_submission::<ContactForm>))
        .route("/acesso", post(create_submission::<AccessRequestForm>))
        .route("/feedback", post(create_submission::<FeedbackForm>))
        .route("/sugestao", post(create_submission::<SuggestionForm>))
        .route(
            "/denuncias",
            post(create_submission::<ComplaintForm>).get(list_records::<ComplaintRecord>),
        )
        .route("/feedbacks", get(list_records::<FeedbackRecord>))
        .route("/sugestoes", get(list_records::<SuggestionRecord>))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(MapResponseBodyLayer::new(axum::body::Body::new))
                .layer(RequestBodyLimitLayer::new(config.get_max_body_size())),
        )
        .with_state(state)
}

/// Initialize storage, bind the listener and serve until Ctrl+C or SIGTERM.
pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::initialize(&config)?;
    let app = router(state, &config);

    let address = config.bind_addr();
    let listener = TcpListener::bind(&address).await?;
    info!("Servidor rodando na porta {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
