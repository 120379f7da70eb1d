//! Client for the remote VORA API.
//!
//! Authentication, contact, dataset upload/cleaning and LSTM forecasting all
//! happen server-side; this module only shapes requests and decodes replies.

pub mod client;
pub mod types;

pub use client::{DashboardApi, HttpApi, DEFAULT_API_BASE};
pub use types::{
    Ack, ApiError, ApiUser, CleanRequest, CleanResponse, CleaningOptions, ContactRequest,
    ForecastMetrics, ForecastRequest, ForecastResponse, LoginRequest, LoginResponse,
    RegisterRequest, TimePoint, UploadResponse,
};
