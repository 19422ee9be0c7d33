use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info};

use taskdash_render::{DASHBOARD_FILE, NOTEPAD_FILE, VERSION_ROUTE};

use crate::site::BuildVersion;
use crate::watch::WatchError;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
    #[error(transparent)]
    Watch(#[from] WatchError),
}

#[derive(Clone)]
struct AppState {
    output_dir: Arc<PathBuf>,
    version: BuildVersion,
}

pub fn router(output_dir: PathBuf, version: BuildVersion) -> Router {
    let state = AppState {
        output_dir: Arc::new(output_dir),
        version,
    };
    Router::new()
        .route(VERSION_ROUTE, get(current_version))
        .fallback(static_file)
        .with_state(state)
}

async fn current_version(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        state.version.current().to_string(),
    )
}

/// Reduces a request path to a file name inside the output directory.
/// Anything without a plain final component resolves to `None`.
pub fn resolve_file_name(request_path: &str) -> Option<String> {
    if request_path == "/" || request_path.is_empty() {
        return Some(DASHBOARD_FILE.to_string());
    }
    Path::new(request_path)
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
}

pub fn content_type(file_name: &str) -> &'static str {
    match Path::new(file_name).extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        _ => "application/octet-stream",
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

async fn static_file(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(name) = resolve_file_name(uri.path()) else {
        return not_found();
    };
    let path = state.output_dir.join(&name);
    let is_file = tokio::fs::metadata(&path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !is_file {
        debug!(path = %uri.path(), "no such file");
        return not_found();
    }
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&name))], bytes).into_response(),
        Err(_) => not_found(),
    }
}

pub fn local_addr(port: u16) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, port))
}

pub async fn bind(port: u16) -> Result<TcpListener, ServeError> {
    let addr = local_addr(port);
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })
}

/// Serves the output directory until the listener fails.
pub async fn serve(
    listener: TcpListener,
    output_dir: PathBuf,
    version: BuildVersion,
) -> Result<(), ServeError> {
    if let Ok(addr) = listener.local_addr() {
        let port = addr.port();
        info!("server running at http://localhost:{port}");
        info!("dashboard: http://localhost:{port}/{DASHBOARD_FILE}");
        info!("notepad: http://localhost:{port}/{NOTEPAD_FILE}");
    }
    axum::serve(listener, router(output_dir, version))
        .await
        .map_err(ServeError::Serve)
}
