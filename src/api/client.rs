//! Blocking HTTP client for the VORA API.
//!
//! All calls block the current thread; the UI runs them on worker threads.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use ureq::http::Response;
use ureq::{Agent, Body};
use uuid::Uuid;

use super::types::{
    extract_detail, Ack, ApiError, CleanRequest, CleanResponse, ContactRequest, ForecastRequest,
    ForecastResponse, LoginRequest, LoginResponse, RegisterRequest, UploadResponse,
};

/// Default API location (the FastAPI dev server)
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// User agent for API requests
const USER_AGENT: &str = concat!("VORA/", env!("CARGO_PKG_VERSION"));

/// Operations the dashboard needs from the remote service.
///
/// `HttpApi` is the real implementation; tests substitute their own.
pub trait DashboardApi {
    fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    fn register(&self, request: &RegisterRequest) -> Result<Ack, ApiError>;

    fn contact(&self, request: &ContactRequest) -> Result<Ack, ApiError>;

    fn upload_dataset(
        &self,
        file_name: &str,
        contents: &[u8],
        user_email: Option<&str>,
    ) -> Result<UploadResponse, ApiError>;

    fn clean_dataset(&self, request: &CleanRequest) -> Result<CleanResponse, ApiError>;

    fn forecast_lstm(&self, request: &ForecastRequest) -> Result<ForecastResponse, ApiError>;
}

/// `DashboardApi` over HTTP using `ureq`
#[derive(Clone)]
pub struct HttpApi {
    base_url: String,
    agent: Agent,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        // Error statuses are read like any other response so FastAPI's
        // `detail` message can be shown to the user.
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .build();

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent: Agent::new_with_config(config),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn post_json<B, T>(&self, path: &str, body: &B, require_ok: bool) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self
            .agent
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .send_json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_envelope(response, require_ok)
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Decode a response the way the server shapes them.
///
/// Bodies that are not JSON are treated as `{}`. Non-2xx statuses become
/// `ApiError::Status`; with `require_ok`, a 2xx body without `ok: true`
/// becomes `ApiError::Rejected`.
fn read_envelope<T: DeserializeOwned>(
    mut response: Response<Body>,
    require_ok: bool,
) -> Result<T, ApiError> {
    let status = response.status();
    let text = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let body: Value = serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Default::default()));

    if !status.is_success() {
        let detail = extract_detail(&body).or_else(|| {
            let trimmed = text.trim();
            (!trimmed.is_empty() && !body.is_object()).then(|| trimmed.to_string())
        });
        tracing::warn!("API returned status {}: {:?}", status.as_u16(), detail);
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    if require_ok && body.get("ok").and_then(Value::as_bool) != Some(true) {
        return Err(ApiError::Rejected(extract_detail(&body)));
    }

    serde_json::from_value(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Encode a `multipart/form-data` body with one file part and optional text fields
fn multipart_body(
    boundary: &str,
    file_field: &str,
    file_name: &str,
    contents: &[u8],
    fields: &[(&str, &str)],
) -> Vec<u8> {
    let mut body = Vec::with_capacity(contents.len() + 512);

    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
            boundary,
            file_field,
            file_name.replace('"', "%22")
        )
        .as_bytes(),
    );
    body.extend_from_slice(contents);
    body.extend_from_slice(b"\r\n");

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                boundary, name, value
            )
            .as_bytes(),
        );
    }

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}

impl DashboardApi for HttpApi {
    fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("login", request, true)
    }

    fn register(&self, request: &RegisterRequest) -> Result<Ack, ApiError> {
        // Any 2xx counts as a created account
        self.post_json("register", request, false)
    }

    fn contact(&self, request: &ContactRequest) -> Result<Ack, ApiError> {
        self.post_json("contact", request, true)
    }

    fn upload_dataset(
        &self,
        file_name: &str,
        contents: &[u8],
        user_email: Option<&str>,
    ) -> Result<UploadResponse, ApiError> {
        let url = self.endpoint("upload/dataset");
        let boundary = format!("----vora{}", Uuid::new_v4().simple());

        let fields: Vec<(&str, &str)> = user_email
            .map(|email| vec![("user_email", email)])
            .unwrap_or_default();
        let body = multipart_body(&boundary, "file", file_name, contents, &fields);

        tracing::info!("Uploading {} ({} bytes) to {}", file_name, contents.len(), url);

        let response = self
            .agent
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={}", boundary),
            )
            .send(&body[..])
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_envelope(response, true)
    }

    fn clean_dataset(&self, request: &CleanRequest) -> Result<CleanResponse, ApiError> {
        self.post_json("clean/dataset", request, true)
    }

    fn forecast_lstm(&self, request: &ForecastRequest) -> Result<ForecastResponse, ApiError> {
        self.post_json("forecast/lstm", request, true)
    }
}
