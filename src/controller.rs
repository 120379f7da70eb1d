//! Page controller for the platform view.
//!
//! `PlatformController` owns the `AppState` and runs every user flow
//! (preview, upload, cleaning, forecast, auth, contact) against a
//! `DashboardApi`, reporting through a `Renderer`. Errors never escape:
//! each one becomes a notification and the previous state is kept.
//!
//! Network flows are split into `begin_*` (validate and build the request)
//! and `finish_*` (apply the response) so the GUI can run the call itself
//! on a worker thread. The `run_*` helpers do all three steps inline.

use rust_i18n::t;
use std::io;

use crate::api::{
    Ack, ApiError, CleanRequest, CleanResponse, ContactRequest, DashboardApi, ForecastRequest,
    ForecastResponse, LoginRequest, LoginResponse, RegisterRequest, UploadResponse,
};
use crate::preview::{self, FileKind, PreviewError, PreviewTable};
use crate::render::Renderer;
use crate::series::{self, ForecastChartData};
use crate::session::{SessionStore, UserMeta, UserSession};
use crate::state::{ActiveTab, AppState, ForecastView, ToastType};
use crate::validation::{format_bytes, ContactForm, LoginForm, RegisterForm, ValidationError};

/// A dataset upload waiting to be sent
#[derive(Clone, Debug)]
pub struct UploadJob {
    pub file_name: String,
    pub contents: Vec<u8>,
    pub user_email: Option<String>,
}

pub struct PlatformController<A> {
    pub state: AppState,
    api: A,
    sessions: Option<SessionStore>,
}

impl<A: DashboardApi> PlatformController<A> {
    pub fn new(api: A, state: AppState) -> Self {
        Self {
            state,
            api,
            sessions: None,
        }
    }

    /// Persist logins and logouts to `store`
    pub fn with_session_store(mut self, store: SessionStore) -> Self {
        self.sessions = Some(store);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn user_meta(&self) -> UserMeta {
        self.state.user_meta()
    }

    // ========================================================================
    // Preview
    // ========================================================================

    /// Record a newly selected file and preview its contents.
    ///
    /// Unsupported formats get an informational notice and no preview; the
    /// file can still be uploaded. A failed read or parse keeps the previous
    /// preview. Returns true when a new preview was rendered.
    pub fn show_file_preview(
        &mut self,
        file_name: &str,
        contents: &io::Result<Vec<u8>>,
        renderer: &mut dyn Renderer,
    ) -> bool {
        self.state.set_selected_file(file_name);

        if FileKind::from_file_name(file_name) == FileKind::Unsupported {
            self.report_preview_error(file_name, &PreviewError::Unsupported, renderer);
            return false;
        }

        let result = match contents {
            Ok(bytes) => preview::preview_file(file_name, bytes),
            Err(e) => Err(PreviewError::Read(e.to_string())),
        };

        match result {
            Ok(table) => {
                self.apply_preview(table, renderer);
                true
            }
            Err(e) => {
                self.report_preview_error(file_name, &e, renderer);
                false
            }
        }
    }

    fn apply_preview(&mut self, table: PreviewTable, renderer: &mut dyn Renderer) {
        let has_rows = !table.is_empty();
        self.state.preview = table;
        renderer.render_preview(&self.state.preview);
        if has_rows {
            self.state.active_tab = ActiveTab::Clean;
        }
    }

    fn report_preview_error(
        &self,
        file_name: &str,
        error: &PreviewError,
        renderer: &mut dyn Renderer,
    ) {
        let kind = match error {
            PreviewError::Unsupported => {
                tracing::info!("No automatic preview for {}", file_name);
                ToastType::Info
            }
            PreviewError::Read(_) => {
                tracing::error!("Preview of {} failed: {}", file_name, error);
                ToastType::Error
            }
            PreviewError::InvalidJson(_) | PreviewError::NotTabular => {
                tracing::warn!("Preview of {} failed: {}", file_name, error);
                ToastType::Warning
            }
        };
        renderer.notify(&preview_error_message(error), kind);
    }

    // ========================================================================
    // Upload
    // ========================================================================

    pub fn begin_upload(
        &mut self,
        file_name: &str,
        contents: Vec<u8>,
        renderer: &mut dyn Renderer,
    ) -> UploadJob {
        renderer.notify(&t!("upload.sending", file = file_name), ToastType::Info);
        UploadJob {
            file_name: file_name.to_string(),
            contents,
            user_email: self.state.current_email().map(str::to_string),
        }
    }

    pub fn finish_upload(
        &mut self,
        job: &UploadJob,
        result: Result<UploadResponse, ApiError>,
        renderer: &mut dyn Renderer,
    ) {
        match result {
            Ok(response) => {
                let stored = if response.filename.trim().is_empty() {
                    job.file_name.clone()
                } else {
                    response.filename.clone()
                };
                tracing::info!("Uploaded {} as {}", job.file_name, stored);

                renderer.notify(
                    &t!("upload.received", file = stored.as_str()),
                    ToastType::Success,
                );
                renderer.post_chat(&t!(
                    "upload.chat_received",
                    file = stored.as_str(),
                    size = format_bytes(response.size_bytes)
                ));
                self.state.set_uploaded_file(stored);
            }
            Err(e) => {
                tracing::error!("Upload of {} failed: {}", job.file_name, e);
                if e.is_connection_error() {
                    renderer.notify(&t!("api.connection_error"), ToastType::Error);
                    renderer.post_chat(&t!("upload.chat_connection"));
                } else {
                    let message = e
                        .detail()
                        .map(str::to_string)
                        .unwrap_or_else(|| t!("upload.failed").to_string());
                    renderer.notify(&message, ToastType::Error);
                    renderer.post_chat(&t!("upload.chat_failed"));
                }
            }
        }
    }

    /// Preview a selected file, then upload it.
    ///
    /// Files that could not be read are not uploaded.
    pub fn run_select_and_upload(
        &mut self,
        file_name: &str,
        contents: io::Result<Vec<u8>>,
        renderer: &mut dyn Renderer,
    ) {
        self.show_file_preview(file_name, &contents, renderer);

        let Ok(bytes) = contents else {
            return;
        };
        let job = self.begin_upload(file_name, bytes, renderer);
        let result = self
            .api
            .upload_dataset(&job.file_name, &job.contents, job.user_email.as_deref());
        self.finish_upload(&job, result, renderer);
    }

    // ========================================================================
    // Cleaning
    // ========================================================================

    /// Build the cleaning request, or notify why there is nothing to clean
    pub fn begin_cleaning(&mut self, renderer: &mut dyn Renderer) -> Option<CleanRequest> {
        let Some(filename) = self.state.last_uploaded_file().map(str::to_string) else {
            renderer.notify(&t!("clean.no_file"), ToastType::Warning);
            renderer.post_chat(&t!("clean.chat_no_file"));
            return None;
        };

        let Some(email) = self.state.current_email().map(str::to_string) else {
            renderer.notify(&t!("clean.no_user"), ToastType::Error);
            return None;
        };

        renderer.post_chat(&t!("clean.chat_started", file = filename.as_str()));
        Some(CleanRequest {
            filename,
            user_email: Some(email),
            options: self.state.cleaning_options,
        })
    }

    pub fn finish_cleaning(
        &mut self,
        request: &CleanRequest,
        result: Result<CleanResponse, ApiError>,
        renderer: &mut dyn Renderer,
    ) {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Cleaning of {} failed: {}", request.filename, e);
                if e.is_connection_error() {
                    renderer.notify(&t!("api.connection_error"), ToastType::Error);
                } else {
                    let message = e
                        .detail()
                        .map(str::to_string)
                        .unwrap_or_else(|| t!("clean.failed").to_string());
                    renderer.notify(&message, ToastType::Error);
                }
                renderer.post_chat(&t!("clean.chat_failed"));
                return;
            }
        };

        if let Some(cleaned) = response
            .cleaned_filename
            .as_deref()
            .filter(|name| !name.trim().is_empty())
        {
            self.state.set_cleaned_file(cleaned);
        }

        if let (Some(headers), Some(rows)) = (&response.preview_headers, &response.preview_rows) {
            self.apply_preview(PreviewTable::from_json_rows(headers, rows), renderer);
        }

        renderer.post_chat(&t!(
            "clean.chat_summary",
            file = self.state.last_cleaned_file().unwrap_or(&request.filename),
            before = response.rows_before,
            after = response.rows_after,
            duplicates = response.duplicates_removed,
            missing_before = response.missing_before,
            missing_after = response.missing_after
        ));
        renderer.notify(&t!("clean.done"), ToastType::Success);
    }

    pub fn run_cleaning(&mut self, renderer: &mut dyn Renderer) {
        let Some(request) = self.begin_cleaning(renderer) else {
            return;
        };
        let result = self.api.clean_dataset(&request);
        self.finish_cleaning(&request, result, renderer);
    }

    // ========================================================================
    // Forecast
    // ========================================================================

    /// Build the forecast request for the current dataset.
    ///
    /// Without any dataset the user is sent back to the data tab.
    pub fn begin_forecast(&mut self, renderer: &mut dyn Renderer) -> Option<ForecastRequest> {
        let Some(filename) = self.state.dataset_for_forecast().map(str::to_string) else {
            renderer.notify(&t!("forecast.no_dataset"), ToastType::Warning);
            self.state.active_tab = ActiveTab::Data;
            return None;
        };

        self.state.active_tab = ActiveTab::Terminal;
        renderer.append_terminal(&format!("$ vora-lstm --file {}", filename));
        renderer.append_terminal(&t!("forecast.training_started"));

        Some(ForecastRequest {
            filename,
            user_email: Some(self.state.user_meta().email),
        })
    }

    pub fn finish_forecast(
        &mut self,
        request: &ForecastRequest,
        result: Result<ForecastResponse, ApiError>,
        renderer: &mut dyn Renderer,
    ) {
        match result {
            Ok(response) => {
                renderer.append_terminal(&t!("forecast.training_done"));
                self.show_forecast(request, response, renderer);
            }
            Err(ApiError::Rejected(detail)) => {
                tracing::warn!("Forecast response rejected: {:?}", detail);
                renderer.append_terminal(&t!("forecast.invalid_response"));
                renderer.notify(&t!("forecast.invalid_response"), ToastType::Error);
            }
            Err(ApiError::Status { status, detail }) => {
                let detail = detail.unwrap_or_default();
                tracing::error!("Forecast failed with status {}: {}", status, detail);
                renderer.append_terminal(&t!(
                    "forecast.http_error",
                    status = status,
                    detail = detail
                ));
                renderer.notify(&t!("forecast.backend_error"), ToastType::Error);
            }
            Err(e) => {
                tracing::error!("Forecast request failed: {}", e);
                renderer.append_terminal(&t!("forecast.connection_failed"));
                renderer.notify(&t!("api.connection_error"), ToastType::Error);
            }
        }
    }

    fn show_forecast(
        &mut self,
        request: &ForecastRequest,
        response: ForecastResponse,
        renderer: &mut dyn Renderer,
    ) {
        let history = series::from_time_points(&response.history);
        let forecast = series::from_time_points(&response.forecast);

        let filename = if response.filename.is_empty() {
            request.filename.clone()
        } else {
            response.filename
        };

        let view = ForecastView {
            filename,
            metrics: response.metrics,
            charts: ForecastChartData::build(&history, &forecast),
        };
        tracing::info!(
            "Forecast for {}: {} history / {} forecast points",
            view.filename,
            view.charts.history_values.len(),
            view.charts.forecast_values.len()
        );

        renderer.render_charts(&view);
        self.state.forecast = Some(view);
        self.state.active_tab = ActiveTab::Graph;
        renderer.notify(&t!("forecast.done"), ToastType::Success);
    }

    pub fn run_forecast(&mut self, renderer: &mut dyn Renderer) {
        let Some(request) = self.begin_forecast(renderer) else {
            return;
        };
        let result = self.api.forecast_lstm(&request);
        self.finish_forecast(&request, result, renderer);
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub fn begin_login(
        &mut self,
        form: &LoginForm,
        renderer: &mut dyn Renderer,
    ) -> Option<LoginRequest> {
        validated(form.validate(), renderer)
    }

    /// Apply a login response. Returns true when the user is now logged in.
    pub fn finish_login(
        &mut self,
        request: &LoginRequest,
        result: Result<LoginResponse, ApiError>,
        renderer: &mut dyn Renderer,
    ) -> bool {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Login failed for {}: {}", request.email, e);
                let message = if e.is_connection_error() {
                    t!("api.connection_error").to_string()
                } else {
                    e.detail()
                        .map(str::to_string)
                        .unwrap_or_else(|| t!("auth.invalid_credentials").to_string())
                };
                renderer.notify(&message, ToastType::Error);
                return false;
            }
        };

        let account = response.account();
        let email = account
            .and_then(|a| a.email.as_deref())
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(&request.email)
            .to_string();
        let nome = account
            .and_then(|a| a.display_name())
            .map(|n| n.trim().to_string())
            .or_else(|| email.split('@').next().map(str::to_string));

        self.start_session(UserSession::new(email, nome));
        renderer.notify(&t!("auth.login_success"), ToastType::Success);
        true
    }

    pub fn run_login(&mut self, form: &LoginForm, renderer: &mut dyn Renderer) -> bool {
        let Some(request) = self.begin_login(form, renderer) else {
            return false;
        };
        let result = self.api.login(&request);
        self.finish_login(&request, result, renderer)
    }

    pub fn begin_register(
        &mut self,
        form: &RegisterForm,
        renderer: &mut dyn Renderer,
    ) -> Option<RegisterRequest> {
        validated(form.validate(), renderer)
    }

    /// Apply a register response. Returns true when the account was created.
    pub fn finish_register(
        &mut self,
        request: &RegisterRequest,
        result: Result<Ack, ApiError>,
        renderer: &mut dyn Renderer,
    ) -> bool {
        match result {
            Ok(_) => {
                tracing::info!("Registered {}", request.email);
                renderer.notify(&t!("auth.register_success"), ToastType::Success);
                true
            }
            Err(e) => {
                tracing::warn!("Register failed for {}: {}", request.email, e);
                let message = if e.is_connection_error() {
                    t!("api.connection_error").to_string()
                } else {
                    e.detail()
                        .map(str::to_string)
                        .unwrap_or_else(|| t!("auth.register_failed").to_string())
                };
                renderer.notify(&message, ToastType::Error);
                false
            }
        }
    }

    pub fn run_register(&mut self, form: &RegisterForm, renderer: &mut dyn Renderer) -> bool {
        let Some(request) = self.begin_register(form, renderer) else {
            return false;
        };
        let result = self.api.register(&request);
        self.finish_register(&request, result, renderer)
    }

    /// Log in with the built-in demo account, without contacting the server
    pub fn login_demo(&mut self, renderer: &mut dyn Renderer) {
        self.start_session(UserSession::demo());
        renderer.notify(&t!("auth.demo_login"), ToastType::Info);
    }

    pub fn logout(&mut self, renderer: &mut dyn Renderer) {
        if let Some(store) = &self.sessions {
            if let Err(e) = store.clear() {
                tracing::warn!("Failed to clear session: {}", e);
            }
        }
        self.state.reset_for_logout();
        renderer.render_preview(&self.state.preview);
        renderer.notify(&t!("auth.logged_out"), ToastType::Info);
    }

    fn start_session(&mut self, session: UserSession) {
        if let Some(store) = &self.sessions {
            if let Err(e) = store.save(&session) {
                tracing::warn!("Failed to save session: {}", e);
            }
        }
        tracing::info!("Logged in as {}", session.email);
        self.state.set_session(Some(session));
    }

    // ========================================================================
    // Contact
    // ========================================================================

    pub fn begin_contact(
        &mut self,
        form: &ContactForm,
        renderer: &mut dyn Renderer,
    ) -> Option<ContactRequest> {
        validated(form.validate(), renderer)
    }

    /// Apply a contact response. Returns true when the message was accepted.
    pub fn finish_contact(
        &mut self,
        result: Result<Ack, ApiError>,
        renderer: &mut dyn Renderer,
    ) -> bool {
        match result {
            Ok(_) => {
                renderer.notify(&t!("contact.sent"), ToastType::Success);
                true
            }
            Err(e) => {
                tracing::warn!("Contact form failed: {}", e);
                let message = if e.is_connection_error() {
                    t!("contact.connection_error")
                } else {
                    t!("contact.failed")
                };
                renderer.notify(&message, ToastType::Error);
                false
            }
        }
    }

    pub fn run_contact(&mut self, form: &ContactForm, renderer: &mut dyn Renderer) -> bool {
        let Some(request) = self.begin_contact(form, renderer) else {
            return false;
        };
        let result = self.api.contact(&request);
        self.finish_contact(result, renderer)
    }
}

fn validated<T>(result: Result<T, ValidationError>, renderer: &mut dyn Renderer) -> Option<T> {
    match result {
        Ok(request) => Some(request),
        Err(e) => {
            tracing::debug!("Form rejected: {}", e);
            renderer.notify(&validation_message(&e), ToastType::Warning);
            None
        }
    }
}

/// Localized text for a preview failure
pub fn preview_error_message(error: &PreviewError) -> String {
    match error {
        PreviewError::Read(_) => t!("preview.read_error"),
        PreviewError::Unsupported => t!("preview.unsupported"),
        PreviewError::InvalidJson(_) => t!("preview.invalid_json"),
        PreviewError::NotTabular => t!("preview.not_tabular"),
    }
    .to_string()
}

/// Localized text for a form validation failure
pub fn validation_message(error: &ValidationError) -> String {
    match error {
        ValidationError::MissingFields => t!("auth.missing_fields"),
        ValidationError::PasswordTooShort => t!("auth.password_too_short"),
        ValidationError::PasswordTooLong => t!("auth.password_too_long"),
        ValidationError::MissingContactFields => t!("contact.missing_fields"),
        ValidationError::InvalidEmail => t!("contact.invalid_email"),
    }
    .to_string()
}
