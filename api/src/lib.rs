use std::{any::Any, sync::Arc};

mod core;
mod error_handler;
mod middleware_layer;
mod routes;

pub use crate::core::app_state::{ApiConfig, AppState, ConfigError};
pub use crate::error_handler::{AppError, AppResult};

use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
    routing::post,
};
use contextor::DocumentQuery;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{info, warn};

use crate::{middleware_layer::request_context::request_context, routes::hackrx::run_route::run};

/// Builds the HTTP router around a document query pipeline.
pub fn router<Q>(state: Arc<AppState<Q>>) -> Router
where
    Q: DocumentQuery + 'static,
{
    Router::new()
        .route("/hackrx/run", post(run::<Q>))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_context))
        .with_state(state)
}

/// A panicking handler still answers with the generic 500 body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}

/// Binds `config.address` and serves until Ctrl+C.
pub async fn start<Q>(config: ApiConfig, query: Q) -> Result<(), AppError>
where
    Q: DocumentQuery + 'static,
{
    let state = Arc::new(AppState::new(&config, query));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.address)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %config.address, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        // Without a signal handler, never trigger shutdown.
        std::future::pending::<()>().await;
    }
}
