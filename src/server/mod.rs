//! Single-page form plus a JSON endpoint that dispatches to the [`Studio`].

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
};
use tower_http::trace::TraceLayer;

use crate::content::{CopyKind, MarketingCopy};
use crate::foundation::error::StudioResult;
use crate::studio::Studio;

const INDEX_HTML: &str = include_str!("index.html");

const MSG_REQUIRED: &str = "Prompt and content type are required.";
const MSG_INVALID_TYPE: &str = "Invalid content type.";
const MSG_FAILED: &str = "Failed to generate content.";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub studio: Arc<Studio>,
}

/// What the form asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentRequest {
    Video,
    Image,
    Copy(CopyKind),
}

impl ContentRequest {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "video" => Some(Self::Video),
            "image" => Some(Self::Image),
            other => other.parse::<CopyKind>().ok().map(Self::Copy),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
enum GenerateResponse {
    File {
        #[serde(rename = "filePath")]
        file_path: String,
    },
    Content {
        content: MarketingCopy,
    },
}

/// Build the application router.
pub fn router(studio: Arc<Studio>) -> Router {
    Router::new()
        .route("/", any(handle_index))
        .route("/generate-content", any(handle_generate))
        .fallback(handle_not_found)
        .with_state(AppState { studio })
        .layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(studio: Arc<Studio>, addr: SocketAddr) -> StudioResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("server running at http://{addr}/");
    axum::serve(listener, router(studio))
        .await
        .context("serve http")?;
    Ok(())
}

async fn handle_index(method: Method) -> Response {
    if method != Method::GET {
        return not_found();
    }
    Html(INDEX_HTML).into_response()
}

async fn handle_generate(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    if method != Method::POST {
        return not_found();
    }

    let req: GenerateRequest = match serde_json::from_slice(&body) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "rejecting malformed request body");
            return message(StatusCode::BAD_REQUEST, MSG_REQUIRED);
        }
    };
    let prompt = req.prompt.filter(|p| !p.is_empty());
    let kind = req.kind.filter(|k| !k.is_empty());
    let (Some(prompt), Some(kind)) = (prompt, kind) else {
        return message(StatusCode::BAD_REQUEST, MSG_REQUIRED);
    };
    let Some(request) = ContentRequest::parse(&kind) else {
        return message(StatusCode::BAD_REQUEST, MSG_INVALID_TYPE);
    };

    let studio = state.studio.clone();
    let result = match request {
        ContentRequest::Copy(kind) => Ok(GenerateResponse::Content {
            content: studio.marketing_copy(kind, &prompt),
        }),
        ContentRequest::Video | ContentRequest::Image => {
            let joined = tokio::task::spawn_blocking(move || match request {
                ContentRequest::Image => studio.generate_image(&prompt),
                _ => studio.generate_video(&prompt),
            })
            .await;
            match joined {
                Ok(Ok(path)) => Ok(GenerateResponse::File {
                    file_path: path.display().to_string(),
                }),
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(format!("generation task failed: {e}")),
            }
        }
    };

    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "error generating content");
            message(StatusCode::INTERNAL_SERVER_ERROR, MSG_FAILED)
        }
    }
}

async fn handle_not_found() -> Response {
    not_found()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn message(status: StatusCode, msg: &str) -> Response {
    (status, Json(serde_json::json!({ "message": msg }))).into_response()
}

#[cfg(test)]
#[path = "../../tests/unit/server.rs"]
mod tests;
