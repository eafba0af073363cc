//! Embedded web dashboard for aiportfolio.
//!
//! Provides a lightweight HTTP server (sync, via `tiny_http`) that serves:
//! - A single-page dashboard with portfolio, department, use-case, and
//!   explorer pages
//! - JSON API endpoints returning the resolved views and filtered listings
//!
//! Launched via `aiportfolio serve` (default: `http://127.0.0.1:9870`).

mod api;
mod frontend;

use std::io::Cursor;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tiny_http::{Header, Method, Response, Server, StatusCode};

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::view::ViewContext;

pub(crate) type HttpResponse = Response<Cursor<Vec<u8>>>;

/// Everything request handlers read. Immutable for the server's lifetime.
pub struct AppState {
    pub catalog: Catalog,
    pub config: AppConfig,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        Self {
            catalog,
            config,
            started_at: Utc::now(),
        }
    }

    pub fn view_context(&self) -> ViewContext<'_> {
        ViewContext::from_config(&self.catalog, &self.config)
    }
}

// ---------------------------------------------------------------------------
// Server entry point
// ---------------------------------------------------------------------------

/// Start the web dashboard server on the given address.
///
/// Blocks the current thread. Handles requests sequentially (sufficient for
/// a local single-user dashboard). Errors are handled per request without
/// stopping the server.
pub fn serve(addr: &str, state: &AppState, open: bool) -> Result<()> {
    let server = Server::http(addr)
        .map_err(|e| anyhow::anyhow!("failed to start HTTP server on {addr}: {e}"))?;

    println!("aiportfolio dashboard running at http://{addr}");
    println!("Press Ctrl+C to stop.\n");
    tracing::info!(%addr, use_cases = state.catalog.use_case_count(), "dashboard started");

    if open {
        let url = format!("http://{addr}");
        if let Err(e) = open_browser(&url) {
            tracing::debug!(error = %e, "could not open browser");
        }
    }

    for mut request in server.incoming_requests() {
        let method = request.method().clone();
        let url = request.url().to_string();

        // Read body up-front for methods that carry one
        let body = if matches!(method, Method::Put | Method::Post | Method::Patch) {
            let mut buf = String::new();
            let _ = request.as_reader().read_to_string(&mut buf);
            Some(buf)
        } else {
            None
        };

        let resp = match dispatch(state, &method, &url, body.as_deref()) {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(%method, %url, error = %e, "request failed");
                error_response(StatusCode(500), &e.to_string())
            }
        };

        tracing::info!(%method, %url, status = resp.status_code().0, "request");
        let _ = request.respond(resp);
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Dispatch an incoming request to the appropriate handler.
fn dispatch(
    state: &AppState,
    method: &Method,
    url: &str,
    body: Option<&str>,
) -> Result<HttpResponse> {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        // Frontend
        (&Method::Get, [""]) | (&Method::Get, ["index.html"]) => Ok(serve_frontend()),

        // API: views
        (&Method::Get, ["api", "portfolio"]) => api::get_portfolio(state, query),
        (&Method::Get, ["api", "departments"]) => api::get_departments(state),
        (&Method::Get, ["api", "departments", id]) => api::get_department(state, id, query),
        (&Method::Get, ["api", "use-cases"]) => api::get_use_cases(state, query),
        (&Method::Get, ["api", "use-cases", id]) => api::get_use_case(state, id, query),
        (&Method::Get, ["api", "categories"]) => api::get_categories(state),

        // API: configuration
        (&Method::Get, ["api", "config"]) => api::get_config(),
        (&Method::Put, ["api", "config"]) => api::put_config(body.unwrap_or("{}")),
        (&Method::Post, ["api", "config", "reset"]) => api::post_config_reset(),

        // API: health
        (&Method::Get, ["api", "health"]) => api::get_health(state),

        _ => Ok(error_response(StatusCode(404), "not found")),
    }
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

/// Serve the embedded single-page frontend.
fn serve_frontend() -> HttpResponse {
    Response::from_data(frontend::INDEX_HTML.as_bytes().to_vec())
        .with_header(content_type_html())
        .with_status_code(StatusCode(200))
}

/// JSON `{ "error": message }` response with the given status.
pub(crate) fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::from_data(body.into_bytes())
        .with_header(content_type_json())
        .with_status_code(status)
}

/// JSON content type header.
pub(crate) fn content_type_json() -> Header {
    Header::from_bytes("Content-Type", "application/json; charset=utf-8")
        .expect("static header is valid")
}

/// HTML content type header.
fn content_type_html() -> Header {
    Header::from_bytes("Content-Type", "text/html; charset=utf-8").expect("static header is valid")
}

/// Attempt to open a URL in the system default browser.
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", url])
            .spawn()
            .context("failed to open browser")?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(url)
            .spawn()
            .context("failed to open browser")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(url)
            .spawn()
            .context("failed to open browser")?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Catalog::builtin().unwrap(), AppConfig::default())
    }

    fn status(state: &AppState, method: Method, url: &str) -> u16 {
        dispatch(state, &method, url, None).unwrap().status_code().0
    }

    #[test]
    fn routes_known_paths() {
        let state = state();
        assert_eq!(status(&state, Method::Get, "/"), 200);
        assert_eq!(status(&state, Method::Get, "/api/portfolio"), 200);
        assert_eq!(status(&state, Method::Get, "/api/portfolio?tab=departments"), 200);
        assert_eq!(status(&state, Method::Get, "/api/departments"), 200);
        assert_eq!(status(&state, Method::Get, "/api/departments/fraud-detection"), 200);
        assert_eq!(status(&state, Method::Get, "/api/use-cases?status=active"), 200);
        assert_eq!(status(&state, Method::Get, "/api/use-cases/card-fraud-scoring"), 200);
        assert_eq!(status(&state, Method::Get, "/api/categories"), 200);
        assert_eq!(status(&state, Method::Get, "/api/health"), 200);
    }

    #[test]
    fn unknown_entities_are_404() {
        let state = state();
        assert_eq!(status(&state, Method::Get, "/api/departments/nope"), 404);
        assert_eq!(status(&state, Method::Get, "/api/use-cases/nope"), 404);
        assert_eq!(status(&state, Method::Get, "/api/portfolio?tab=nope"), 404);
        assert_eq!(status(&state, Method::Get, "/api/nothing-here"), 404);
    }

    #[test]
    fn bad_filter_is_400() {
        let state = state();
        assert_eq!(status(&state, Method::Get, "/api/use-cases?status=retired"), 400);
        assert_eq!(status(&state, Method::Get, "/api/use-cases?sort=colour"), 400);
    }

    #[test]
    fn wrong_method_is_404() {
        let state = state();
        assert_eq!(status(&state, Method::Delete, "/api/portfolio"), 404);
    }
}
