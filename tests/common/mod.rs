//! Common test utilities shared across all test modules
//!
//! Provides a scriptable `MockApi`, dataset fixtures and scratch paths.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::PathBuf;

use vora::api::{
    Ack, ApiError, ApiUser, CleanRequest, CleanResponse, ContactRequest, DashboardApi,
    ForecastMetrics, ForecastRequest, ForecastResponse, LoginRequest, LoginResponse,
    RegisterRequest, TimePoint, UploadResponse,
};

/// Every call the controller made, in order
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Login(String),
    Register(String),
    Contact(String),
    Upload {
        file_name: String,
        size: usize,
        user_email: Option<String>,
    },
    Clean(String),
    Forecast(String),
}

/// `DashboardApi` that answers from canned results and records calls.
///
/// Unset results answer with `ApiError::Network`, like an unreachable server.
#[derive(Default)]
pub struct MockApi {
    pub calls: RefCell<Vec<Call>>,
    pub login: Option<Result<LoginResponse, ApiError>>,
    pub register: Option<Result<Ack, ApiError>>,
    pub contact: Option<Result<Ack, ApiError>>,
    pub upload: Option<Result<UploadResponse, ApiError>>,
    pub clean: Option<Result<CleanResponse, ApiError>>,
    pub forecast: Option<Result<ForecastResponse, ApiError>>,
    /// Last cleaning request body, for checking the options sent
    pub last_clean: RefCell<Option<CleanRequest>>,
}

fn answer<T: Clone>(slot: &Option<Result<T, ApiError>>) -> Result<T, ApiError> {
    match slot {
        Some(Ok(value)) => Ok(value.clone()),
        Some(Err(e)) => Err(clone_error(e)),
        None => Err(ApiError::Network("connection refused".into())),
    }
}

fn clone_error(error: &ApiError) -> ApiError {
    match error {
        ApiError::Network(msg) => ApiError::Network(msg.clone()),
        ApiError::Status { status, detail } => ApiError::Status {
            status: *status,
            detail: detail.clone(),
        },
        ApiError::Rejected(detail) => ApiError::Rejected(detail.clone()),
        ApiError::Parse(msg) => ApiError::Parse(msg.clone()),
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl DashboardApi for MockApi {
    fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Login(request.email.clone()));
        answer(&self.login)
    }

    fn register(&self, request: &RegisterRequest) -> Result<Ack, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Register(request.email.clone()));
        answer(&self.register)
    }

    fn contact(&self, request: &ContactRequest) -> Result<Ack, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Contact(request.email.clone()));
        answer(&self.contact)
    }

    fn upload_dataset(
        &self,
        file_name: &str,
        contents: &[u8],
        user_email: Option<&str>,
    ) -> Result<UploadResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Upload {
            file_name: file_name.to_string(),
            size: contents.len(),
            user_email: user_email.map(str::to_string),
        });
        answer(&self.upload)
    }

    fn clean_dataset(&self, request: &CleanRequest) -> Result<CleanResponse, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Clean(request.filename.clone()));
        *self.last_clean.borrow_mut() = Some(request.clone());
        answer(&self.clean)
    }

    fn forecast_lstm(&self, request: &ForecastRequest) -> Result<ForecastResponse, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Forecast(request.filename.clone()));
        answer(&self.forecast)
    }
}

// ============================================
// Fixtures
// ============================================

pub const SALES_CSV: &str = "date,store,units,price,region,channel,notes\n\
2024-01-01,A,10,2.5,north,web,ok\n\
2024-01-02,A,12,2.5,north,web,ok\n\
2024-01-03,B,7,2.7,south,store,late\n";

pub fn login_ok(email: &str, nome: Option<&str>) -> LoginResponse {
    LoginResponse {
        ok: true,
        user: Some(ApiUser {
            email: Some(email.to_string()),
            nome: nome.map(str::to_string),
            ..Default::default()
        }),
        usuario: None,
    }
}

pub fn upload_ok(filename: &str, size_bytes: u64) -> UploadResponse {
    UploadResponse {
        ok: true,
        filename: filename.to_string(),
        user_folder: Some("demo_vora_ai".to_string()),
        path: None,
        size_bytes,
        message: None,
    }
}

pub fn clean_ok(cleaned: &str) -> CleanResponse {
    CleanResponse {
        ok: true,
        cleaned_filename: Some(cleaned.to_string()),
        rows_before: 120,
        rows_after: 115,
        duplicates_removed: 5,
        missing_before: 9,
        missing_after: 0,
        formats_standardized: true,
        preview_headers: Some(vec!["date".into(), "units".into()]),
        preview_rows: Some(vec![
            serde_json::json!(["2024-01-01", 10]),
            serde_json::json!(["2024-01-02", 12.0]),
        ]),
        ..Default::default()
    }
}

/// Daily points starting 2024-01-01 with values `start, start + 1, ...`
pub fn daily_points(count: usize, start: f64) -> Vec<TimePoint> {
    let first = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..count)
        .map(|i| TimePoint {
            date: (first + chrono::Days::new(i as u64))
                .format("%Y-%m-%dT00:00:00")
                .to_string(),
            value: start + i as f64,
        })
        .collect()
}

pub fn forecast_ok(filename: &str, history: usize, forecast: usize) -> ForecastResponse {
    ForecastResponse {
        ok: true,
        filename: filename.to_string(),
        history: daily_points(history, 100.0),
        forecast: daily_points(forecast, 200.0),
        metrics: ForecastMetrics {
            rmse: Some(1.234),
            mae: Some(0.987),
            mse: Some(1.523),
            train_epochs: Some(20),
        },
        forecast_csv_filename: None,
    }
}

/// A fresh path under the system temp directory (not created)
pub fn scratch_path(file_name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("vora-test-{}", uuid::Uuid::new_v4()))
        .join(file_name)
}
