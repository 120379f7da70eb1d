//! Request and response payloads of the VORA API.
//!
//! Field names follow the server's JSON (partly Portuguese: `senha`, `nome`,
//! `mensagem`, `empresa`, `usuario`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when talking to the API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("API error (status {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    /// The server answered 2xx but reported `ok: false`
    #[error("Request rejected: {}", .0.as_deref().unwrap_or("no detail"))]
    Rejected(Option<String>),

    /// The response body did not have the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Server-provided explanation, if any (FastAPI's `detail` field)
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } | ApiError::Rejected(detail) => detail.as_deref(),
            _ => None,
        }
    }

    /// True when the request never produced a server response
    pub fn is_connection_error(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

/// Pull a human-readable `detail` out of an error body.
///
/// FastAPI uses a string for `HTTPException` and a list of objects for
/// validation errors; the latter is passed through as compact JSON.
pub fn extract_detail(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// User record returned by the login endpoint (any of the name fields may be set)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl ApiUser {
    /// First non-empty name field, in `nome`, `name`, `username` order
    pub fn display_name(&self) -> Option<&str> {
        [&self.nome, &self.name, &self.username]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    #[serde(default)]
    pub user: Option<ApiUser>,
    #[serde(default)]
    pub usuario: Option<ApiUser>,
}

impl LoginResponse {
    pub fn account(&self) -> Option<&ApiUser> {
        self.user.as_ref().or(self.usuario.as_ref())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub senha: String,
}

/// Bare acknowledgement used by register and contact
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactRequest {
    pub nome: String,
    pub empresa: Option<String>,
    pub email: String,
    pub mensagem: String,
}

// ============================================================================
// Datasets
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub ok: bool,
    pub filename: String,
    #[serde(default)]
    pub user_folder: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Options of the cleaning pipeline (all enabled by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningOptions {
    pub remove_duplicates: bool,
    pub fix_missing: bool,
    pub standardize_formats: bool,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            remove_duplicates: true,
            fix_missing: true,
            standardize_formats: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanRequest {
    pub filename: String,
    pub user_email: Option<String>,
    #[serde(flatten)]
    pub options: CleaningOptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CleanResponse {
    pub ok: bool,
    #[serde(default)]
    pub cleaned_filename: Option<String>,
    #[serde(default)]
    pub cleaned_path: Option<String>,
    #[serde(default)]
    pub rows_before: u64,
    #[serde(default)]
    pub rows_after: u64,
    #[serde(default)]
    pub duplicates_removed: u64,
    #[serde(default)]
    pub missing_before: u64,
    #[serde(default)]
    pub missing_after: u64,
    #[serde(default)]
    pub formats_standardized: bool,
    #[serde(default)]
    pub preview_headers: Option<Vec<Value>>,
    #[serde(default)]
    pub preview_rows: Option<Vec<Value>>,
}

// ============================================================================
// Forecast
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ForecastRequest {
    pub filename: String,
    pub user_email: Option<String>,
}

/// A dated value as sent by the forecast endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub date: String,
    pub value: f64,
}

/// Training metrics; the server only includes the ones it could compute
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ForecastMetrics {
    #[serde(default)]
    pub rmse: Option<f64>,
    #[serde(default)]
    pub mae: Option<f64>,
    #[serde(default)]
    pub mse: Option<f64>,
    #[serde(default)]
    pub train_epochs: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    pub ok: bool,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub history: Vec<TimePoint>,
    #[serde(default)]
    pub forecast: Vec<TimePoint>,
    #[serde(default)]
    pub metrics: ForecastMetrics,
    #[serde(default)]
    pub forecast_csv_filename: Option<String>,
}
