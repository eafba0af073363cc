//! JSON API handlers for the web dashboard.
//!
//! Each handler corresponds to an API endpoint and returns an
//! [`HttpResponse`] with JSON content. Unresolvable ids answer 404 with
//! `{ "error", "kind", "id" }`; malformed filter parameters answer 400.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tiny_http::{Response, StatusCode};

use crate::analytics::{FilterCriteria, Sort, portfolio_summary};
use crate::catalog::{Category, CategoryKind};
use crate::config;
use crate::error::{FilterError, ViewError};
use crate::view::{self, View};

use super::{AppState, HttpResponse, content_type_json, error_response};

// ---------------------------------------------------------------------------
// JSON response types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct CategoriesResponse<'a> {
    ai_types: Vec<&'a Category>,
    data_layers: Vec<&'a Category>,
}

/// Config API response: the full config as a JSON value + the raw TOML.
#[derive(Serialize)]
struct ConfigResponse {
    config: config::AppConfig,
    toml_text: String,
}

/// Config update request: a list of key-value pairs.
#[derive(serde::Deserialize)]
struct ConfigUpdateRequest {
    updates: Vec<ConfigKeyValue>,
}

#[derive(serde::Deserialize)]
struct ConfigKeyValue {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct HealthResponse {
    version: &'static str,
    departments: usize,
    use_cases: usize,
    ai_types: usize,
    data_layers: usize,
    catalog_source: String,
    config_exists: bool,
    started_at: DateTime<Utc>,
    uptime_secs: i64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build a JSON response with the given status.
fn json_response<T: Serialize>(status: u16, data: &T) -> Result<HttpResponse> {
    let body = serde_json::to_string(data).context("failed to serialize JSON response")?;
    Ok(Response::from_data(body.into_bytes())
        .with_header(content_type_json())
        .with_status_code(StatusCode(status)))
}

/// 404 body naming the entity that failed to resolve.
fn view_error_response(err: &ViewError) -> Result<HttpResponse> {
    let ViewError::NotFound { kind, id } = err;
    json_response(
        404,
        &serde_json::json!({
            "error": err.to_string(),
            "kind": kind,
            "id": id,
        }),
    )
}

fn filter_error_response(err: &FilterError) -> HttpResponse {
    error_response(StatusCode(400), &err.to_string())
}

fn view_response(result: Result<View, ViewError>) -> Result<HttpResponse> {
    match result {
        Ok(view) => json_response(200, &view),
        Err(e) => view_error_response(&e),
    }
}

/// Decode a query string into owned `(key, value)` pairs.
fn query_pairs(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// First value for `key` in the query string.
fn query_param(query: &str, key: &str) -> Option<String> {
    query_pairs(query)
        .into_iter()
        .find_map(|(k, v)| (k == key).then_some(v))
}

// ---------------------------------------------------------------------------
// API Handlers: views
// ---------------------------------------------------------------------------

/// `GET /api/portfolio?tab=`: portfolio page.
pub fn get_portfolio(state: &AppState, query: &str) -> Result<HttpResponse> {
    let tab = query_param(query, "tab");
    view_response(view::portfolio_view(&state.view_context(), tab.as_deref()))
}

/// `GET /api/departments`: every department with its summary.
pub fn get_departments(state: &AppState) -> Result<HttpResponse> {
    let portfolio = portfolio_summary(&state.catalog);
    json_response(200, &portfolio)
}

/// `GET /api/departments/{id}?tab=`: department page.
pub fn get_department(state: &AppState, id: &str, query: &str) -> Result<HttpResponse> {
    let tab = query_param(query, "tab");
    view_response(view::department_view(&state.view_context(), id, tab.as_deref()))
}

/// `GET /api/use-cases?search=&status=&ai_type=&data_layer=&department=&sort=&order=`
pub fn get_use_cases(state: &AppState, query: &str) -> Result<HttpResponse> {
    let pairs = query_pairs(query);
    let borrowed = || pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()));

    let criteria = match FilterCriteria::from_pairs(borrowed()) {
        Ok(criteria) => criteria,
        Err(e) => return Ok(filter_error_response(&e)),
    };
    let sort = match Sort::from_pairs(borrowed()) {
        Ok(sort) => sort,
        Err(e) => return Ok(filter_error_response(&e)),
    };

    let listing = view::use_case_listing(&state.view_context(), &criteria, sort);
    json_response(200, &listing)
}

/// `GET /api/use-cases/{id}?tab=`: use-case detail page.
pub fn get_use_case(state: &AppState, id: &str, query: &str) -> Result<HttpResponse> {
    let tab = query_param(query, "tab");
    view_response(view::use_case_view(&state.view_context(), id, tab.as_deref()))
}

/// `GET /api/categories`: both category tables.
pub fn get_categories(state: &AppState) -> Result<HttpResponse> {
    let resp = CategoriesResponse {
        ai_types: state.catalog.categories(CategoryKind::AiType).iter().collect(),
        data_layers: state
            .catalog
            .categories(CategoryKind::DataLayer)
            .iter()
            .collect(),
    };
    json_response(200, &resp)
}

// ---------------------------------------------------------------------------
// API Handlers: configuration
// ---------------------------------------------------------------------------

/// `GET /api/config`: current effective configuration.
pub fn get_config() -> Result<HttpResponse> {
    let cfg = config::load();
    let toml_text = toml::to_string_pretty(&cfg).context("failed to serialize config")?;

    json_response(
        200,
        &ConfigResponse {
            config: cfg,
            toml_text,
        },
    )
}

/// `PUT /api/config`: update configuration keys.
///
/// Expects JSON body: `{ "updates": [{ "key": "filler.seed", "value": "7" }] }`.
/// Changes apply on the next start.
pub fn put_config(body: &str) -> Result<HttpResponse> {
    let req: ConfigUpdateRequest =
        serde_json::from_str(body).context("invalid JSON in config update request")?;

    let mut errors: Vec<String> = Vec::new();
    let mut applied: Vec<String> = Vec::new();

    for kv in &req.updates {
        match config::set_config_value(&kv.key, &kv.value) {
            Ok(()) => applied.push(format!("{} = {}", kv.key, kv.value)),
            Err(e) => errors.push(format!("{}: {:#}", kv.key, e)),
        }
    }

    let result = serde_json::json!({
        "applied": applied,
        "errors": errors,
        "success": errors.is_empty(),
    });

    json_response(200, &result)
}

/// `POST /api/config/reset`: reset config to defaults.
pub fn post_config_reset() -> Result<HttpResponse> {
    config::reset_config().context("failed to reset config")?;

    json_response(
        200,
        &serde_json::json!({
            "success": true,
            "message": "Configuration reset to defaults",
        }),
    )
}

// ---------------------------------------------------------------------------
// API Handlers: health
// ---------------------------------------------------------------------------

/// `GET /api/health`: catalog and config summary.
pub fn get_health(state: &AppState) -> Result<HttpResponse> {
    let config_exists = config::global_config_file()
        .map(|p| p.exists())
        .unwrap_or(false);

    let resp = HealthResponse {
        version: env!("CARGO_PKG_VERSION"),
        departments: state.catalog.departments().len(),
        use_cases: state.catalog.use_case_count(),
        ai_types: state.catalog.ai_types().len(),
        data_layers: state.catalog.data_layers().len(),
        catalog_source: state
            .config
            .catalog
            .resolved_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "builtin".to_string()),
        config_exists,
        started_at: state.started_at,
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    };

    json_response(200, &resp)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_decode_percent_and_plus() {
        let pairs = query_pairs("search=card+fraud&status=active&department=credit%2Drisk");
        assert_eq!(
            pairs,
            vec![
                ("search".to_string(), "card fraud".to_string()),
                ("status".to_string(), "active".to_string()),
                ("department".to_string(), "credit-risk".to_string()),
            ]
        );
    }

    #[test]
    fn query_param_finds_first_value() {
        assert_eq!(query_param("tab=impact&tab=overview", "tab").as_deref(), Some("impact"));
        assert_eq!(query_param("", "tab"), None);
        assert_eq!(query_param("foo=bar", "tab"), None);
    }

    #[test]
    fn config_update_request_deserializes() {
        let json = r#"{"updates": [{"key": "filler.seed", "value": "7"}]}"#;
        let req: ConfigUpdateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.updates.len(), 1);
        assert_eq!(req.updates[0].key, "filler.seed");
        assert_eq!(req.updates[0].value, "7");
    }

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            version: "0.1.0",
            departments: 6,
            use_cases: 20,
            ai_types: 5,
            data_layers: 4,
            catalog_source: "builtin".to_string(),
            config_exists: false,
            started_at: Utc::now(),
            uptime_secs: 0,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"use_cases\":20"));
        assert!(json.contains("\"catalog_source\":\"builtin\""));
        assert!(json.contains("\"started_at\":"));
    }
}
