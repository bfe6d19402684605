//! HTTP delivery: an upload form at `/` and a multipart `POST /decorate`
//! endpoint that answers with `image/png`.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::{
    assets::bundled,
    config::ServerConfig,
    effects::shadow::DropShadow,
    foundation::error::{ChromeifyError, ChromeifyResult},
    pipeline::{RenderOpts, render_png},
    theme::Theme,
};

/// Everything a request handler needs, built once at startup and shared
/// read-only between requests.
#[derive(Debug)]
pub struct AppState {
    pub theme: Arc<Theme>,
    pub shadow: DropShadow,
    pub index_html: String,
}

impl AppState {
    pub fn new(theme: Theme, shadow: DropShadow) -> Self {
        Self {
            theme: Arc::new(theme),
            shadow,
            index_html: bundled::INDEX_HTML.to_string(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> ChromeifyResult<Self> {
        let theme = match &config.theme_dir {
            Some(dir) => Theme::from_dir(dir)?,
            None => Theme::default_theme()?,
        };
        let shadow = DropShadow::new(config.shadow)?;
        info!(theme = theme.name(), "theme loaded");
        Ok(Self::new(theme, shadow))
    }
}

pub fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/decorate", post(decorate_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Handle to a server running on a background task.
pub struct ServerHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
    addr: SocketAddr,
}

impl ServerHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Stop accepting connections, let in-flight requests finish, and wait.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        self.task.await?;
        Ok(())
    }
}

/// Bind `config.addr` and serve on a spawned task.
pub async fn start(config: &ServerConfig) -> Result<ServerHandle> {
    let state = Arc::new(AppState::from_config(config)?);
    let app = router(state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    let bound_addr = listener.local_addr()?;
    info!("listening on {}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let task = tokio::spawn(async move {
        let served = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
                info!("server shutting down");
            })
            .await;
        if let Err(e) = served {
            error!("server error: {e}");
        }
    });

    Ok(ServerHandle {
        shutdown_tx: Some(shutdown_tx),
        task,
        addr: bound_addr,
    })
}

/// Error returned to HTTP clients as plain text.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<ChromeifyError> for ApiError {
    fn from(err: ChromeifyError) -> Self {
        if err.is_client_error() {
            Self::bad_request(err.to_string())
        } else {
            Self::internal(err.to_string())
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, "{}", self.message);
        } else {
            warn!(status = %self.status, "{}", self.message);
        }
        (self.status, self.message).into_response()
    }
}

/// GET /
async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_html.clone())
}

/// POST /decorate
///
/// Fields: `image` (exactly one file) and optional `dropshadow=true`.
async fn decorate_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut images = Vec::<Bytes>::new();
    let mut dropshadow = Vec::<String>::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("image") if field.file_name().is_some() => images.push(field.bytes().await?),
            Some("dropshadow") => dropshadow.push(field.text().await?),
            other => debug!(field = ?other, "ignoring form field"),
        }
    }

    if images.len() != 1 {
        return Err(ApiError::bad_request("expected one image"));
    }
    let upload = images.remove(0);
    let with_shadow = matches!(dropshadow.as_slice(), [v] if v == "true");
    debug!(bytes = upload.len(), with_shadow, "decorate request");

    let opts = RenderOpts {
        drop_shadow: with_shadow.then(|| state.shadow.clone()),
        gap_fill: None,
    };
    let theme = Arc::clone(&state.theme);
    let png = tokio::task::spawn_blocking(move || render_png(&theme, &upload, &opts))
        .await
        .map_err(|e| ApiError::internal(format!("render task failed: {e}")))??;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

#[cfg(test)]
#[path = "../../tests/unit/server/server.rs"]
mod tests;
