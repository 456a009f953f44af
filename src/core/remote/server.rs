//! HTTP server exposing a vault read-only.
//!
//! Every handler receives the same [`ServerContext`]. The server never writes
//! to the store, so concurrent requests need no coordination beyond the
//! store's own locking. Store and crypto calls are blocking and run on the
//! blocking pool.

use std::future::Future;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use super::{EXPORT_PATH, HEALTH_PATH, SECRETS_PATH};
use crate::core::types::SecretKey;
use crate::core::vault::Vault;
use crate::error::{Error, RemoteError, Result};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// State shared by every request handler: one opened vault.
pub struct ServerContext {
    vault: Vault,
}

impl ServerContext {
    pub fn new(vault: Vault) -> Self {
        Self { vault }
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }
}

/// Build the protocol router around a context.
pub fn router(context: Arc<ServerContext>) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(health))
        .route(SECRETS_PATH, get(list_keys))
        .route(&format!("{}/", SECRETS_PATH), get(missing_key))
        .route(&format!("{}/:key", SECRETS_PATH), get(get_secret))
        .route(EXPORT_PATH, get(export))
        .layer(TraceLayer::new_for_http())
        .with_state(context)
}

/// A bound, not yet running, server.
pub struct Server {
    listener: TcpListener,
    context: Arc<ServerContext>,
}

impl Server {
    /// Bind a loopback address. Port 0 picks a free port.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::NotLoopback` for any address reachable from
    /// other hosts, or an io error if the bind fails.
    pub fn bind(addr: SocketAddr, vault: Vault) -> Result<Self> {
        if !addr.ip().is_loopback() {
            return Err(RemoteError::NotLoopback(addr).into());
        }

        let listener = TcpListener::bind(addr)?;
        listener.set_nonblocking(true)?;

        Ok(Self {
            listener,
            context: Arc::new(ServerContext::new(vault)),
        })
    }

    /// The address actually bound.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until Ctrl-C, on a runtime owned by this call.
    pub fn run(self) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.serve(shutdown_signal()))
    }

    /// Serve until `shutdown` resolves. Must be called inside a tokio runtime.
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::from_std(self.listener)?;
        info!(addr = %listener.local_addr()?, "server listening");

        axum::serve(listener, router(self.context))
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Failure converted to a status code and a short text body.
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            warn!(error = %self.0, "request failed");
        }
        (
            status,
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            format!("Error: {}", self.0),
        )
            .into_response()
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Run a blocking vault operation off the async workers.
async fn blocking<T, F>(context: Arc<ServerContext>, f: F) -> std::result::Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&Vault) -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(context.vault()))
        .await
        .map_err(|e| ApiError(RemoteError::Server(e.to_string()).into()))?
        .map_err(ApiError)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_keys(
    State(context): State<Arc<ServerContext>>,
) -> std::result::Result<Json<Vec<SecretKey>>, ApiError> {
    let keys = blocking(context, |vault| vault.list()).await?;
    debug!(count = keys.len(), "listed keys");
    Ok(Json(keys))
}

async fn missing_key() -> ApiError {
    ApiError(crate::error::ValidationError::EmptyKey.into())
}

async fn get_secret(
    State(context): State<Arc<ServerContext>>,
    Path(key): Path<String>,
) -> std::result::Result<Response, ApiError> {
    debug!(key = %key, "fetching secret");
    let value = blocking(context, move |vault| vault.get(&key)).await?;
    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], value.to_vec()).into_response())
}

async fn export(
    State(context): State<Arc<ServerContext>>,
) -> std::result::Result<Response, ApiError> {
    let body = blocking(context, |vault| vault.export()).await?;
    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], body.to_vec()).into_response())
}
