use super::project::Project;
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Path as UrlPath, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{
        Html, IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
    routing::{get, post},
};
use landing_kit_core::PageConfig;
use landing_kit_generator::{
    INDEX_PAGE, generate_site, html_escape, render_inline_document,
};
use landing_kit_validator::normalize_colors;
use notify::{Event as NotifyEvent, EventKind, RecursiveMode, Watcher};
use serde_json::json;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tokio::sync::broadcast;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, error, info, warn};

/// Request bodies above this size are refused by `/api/render`
pub const RENDER_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Injected into every HTML page served from the project
const RELOAD_SCRIPT: &str = r#"<script>
  // Hot reload via Server-Sent Events
  const eventSource = new EventSource('/_reload');
  eventSource.onmessage = () => location.reload();
  eventSource.onerror = () => {
    console.log('Preview server disconnected');
    eventSource.close();
  };
</script>"#;

#[derive(Clone)]
struct AppState {
    project: Arc<Project>,
    reload_tx: broadcast::Sender<()>,
}

/// Serve the project with hot reload.
///
/// The config is re-read and the site regenerated on every request, so edits
/// show up on the next page load; the file watcher only tells open browsers
/// to reload.
pub async fn run(path: PathBuf, port: u16) -> Result<()> {
    println!("🌐 Starting preview server...");
    println!("   Project: {}", path.display());

    let project = Project::open(&path)?;
    let config = project.load()?;

    println!("   ✓ Loaded: {}", config.title);
    println!("   ✓ Sections: {}", config.sections.len());

    // Create broadcast channel for reload events
    let (reload_tx, _) = broadcast::channel::<()>(100);

    let images_dir = project.images_dir();
    let state = AppState {
        project: Arc::new(project),
        reload_tx: reload_tx.clone(),
    };

    let app = router(state, images_dir);

    // Start file watcher
    let watcher_path = path.clone();
    let watcher_tx = reload_tx.clone();
    tokio::spawn(async move {
        if let Err(e) = watch_files(watcher_path, watcher_tx).await {
            error!("File watcher error: {}", e);
        }
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    println!("\n🚀 Preview ready at: http://localhost:{}", port);
    println!("   Press Ctrl+C to stop\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to port {}", port))?;
    info!("Preview server listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: AppState, images_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/_reload", get(sse_handler))
        .route(
            "/api/render",
            post(render_handler).layer(DefaultBodyLimit::max(RENDER_BODY_LIMIT)),
        )
        .route("/{file}", get(file_handler))
        .nest_service("/images", ServeDir::new(images_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Watch for file changes and trigger reload
async fn watch_files(path: PathBuf, reload_tx: broadcast::Sender<()>) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::channel(100);

    let mut watcher =
        notify::recommended_watcher(move |res: Result<NotifyEvent, notify::Error>| {
            if let Ok(event) = res {
                let _ = tx.blocking_send(event);
            }
        })?;

    watcher.watch(&path, RecursiveMode::Recursive)?;

    while let Some(event) = rx.recv().await {
        match event.kind {
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) => {
                // Filter out temporary files and hidden files
                if event.paths.iter().any(|p| {
                    let filename = p.file_name().unwrap_or_default().to_string_lossy();
                    !filename.starts_with('.') && !filename.ends_with('~')
                }) {
                    println!("   📝 File changed, reloading...");
                    let _ = reload_tx.send(());
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// SSE endpoint for hot reload
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl futures::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let mut rx = state.reload_tx.subscribe();

    let stream = async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(()) => yield Ok(Event::default().data("reload")),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Insert the reload script before the last `</body>`, or append it
fn inject_reload_script(html: &str) -> String {
    match html.rfind("</body>") {
        Some(pos) => format!("{}{}\n{}", &html[..pos], RELOAD_SCRIPT, &html[pos..]),
        None => format!("{}{}", html, RELOAD_SCRIPT),
    }
}

/// Config as the build would see it, or an error page
fn load_config(state: &AppState) -> Result<PageConfig, Response> {
    let mut config = state.project.load().map_err(|e| {
        warn!("{:#}", e);
        error_page(&format!("{:#}", e))
    })?;

    for replaced in normalize_colors(&mut config) {
        debug!("{}", replaced);
    }

    Ok(config)
}

fn error_page(message: &str) -> Response {
    let html = format!(
        r#"<!DOCTYPE html>
<html><head><title>Error</title></head><body>
<h1>Configuration Error</h1>
<pre>{}</pre>
</body></html>"#,
        html_escape(message)
    );
    Html(inject_reload_script(&html)).into_response()
}

/// Main page: the inline document, or index.html in multi-page mode
async fn index_handler(State(state): State<AppState>) -> Response {
    let config = match load_config(&state) {
        Ok(config) => config,
        Err(response) => return response,
    };

    if config.single_page {
        return Html(inject_reload_script(&render_inline_document(&config))).into_response();
    }

    serve_generated(&config, INDEX_PAGE)
}

/// Generated pages, stylesheet and script by file name
async fn file_handler(State(state): State<AppState>, UrlPath(file): UrlPath<String>) -> Response {
    let config = match load_config(&state) {
        Ok(config) => config,
        Err(response) => return response,
    };

    serve_generated(&config, &file)
}

fn serve_generated(config: &PageConfig, file: &str) -> Response {
    let site = generate_site(config);
    let Some(contents) = site.get(file) else {
        return (StatusCode::NOT_FOUND, format!("{} not found", file)).into_response();
    };

    let mime = mime_guess::from_path(file).first_or_octet_stream();
    let body = if mime.subtype() == mime_guess::mime::HTML {
        inject_reload_script(contents)
    } else {
        contents.to_string()
    };

    ([(header::CONTENT_TYPE, mime.to_string())], body).into_response()
}

/// Render a posted config as one self-contained document
async fn render_handler(payload: Result<Json<PageConfig>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(config)) => Html(render_inline_document(&config)).into_response(),
        Err(rejection) => {
            let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                StatusCode::PAYLOAD_TOO_LARGE
            } else {
                StatusCode::BAD_REQUEST
            };
            warn!("Rejected render request: {}", rejection.body_text());
            (status, Json(json!({ "error": rejection.body_text() }))).into_response()
        }
    }
}
