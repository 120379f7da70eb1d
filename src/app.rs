//! Main application state and eframe::App implementation.
//!
//! `VoraApp` wraps a `PlatformController` over the HTTP API. Every network
//! call and file read runs on a background thread and reports back through
//! an mpsc channel that is polled once per frame.

use eframe::egui;
use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use crate::api::{
    Ack, ApiError, CleanRequest, CleanResponse, ContactRequest, DashboardApi, ForecastRequest,
    ForecastResponse, HttpApi, LoginRequest, LoginResponse, RegisterRequest, UploadResponse,
};
use crate::controller::{PlatformController, UploadJob};
use crate::i18n::Language;
use crate::preview::PreviewTable;
use crate::render::Renderer;
use crate::session::SessionStore;
use crate::settings::UserSettings;
use crate::state::{AppState, ForecastView, Toast, ToastType, MAX_TERMINAL_LINES};
use crate::validation::{ContactForm, LoginForm, RegisterForm};

/// A background request and the request value it was made with
type Pending<J, R> = Option<Receiver<(J, Result<R, ApiError>)>>;

/// Which form the auth screen is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Chart cards that can be opened fullscreen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartCard {
    Forecast,
    Summary,
    Change,
}

// ============================================================================
// egui Renderer
// ============================================================================

/// What the controller has asked the window to show that is not part of
/// `AppState`: the toast, the terminal log and the assistant feed.
#[derive(Debug, Default)]
pub struct EguiView {
    pub toast: Option<Toast>,
    pub terminal: VecDeque<String>,
    pub chat: Vec<String>,
    /// Bumped on every new preview so the table scroll position resets
    pub preview_generation: u64,
    /// Bumped on every new forecast so the plots re-fit their bounds
    pub chart_generation: u64,
}

impl Renderer for EguiView {
    fn render_preview(&mut self, table: &PreviewTable) {
        tracing::debug!(
            "Preview updated: {} columns, {} rows",
            table.headers.len(),
            table.row_count()
        );
        self.preview_generation += 1;
    }

    fn render_charts(&mut self, _view: &ForecastView) {
        self.chart_generation += 1;
    }

    fn notify(&mut self, message: &str, kind: ToastType) {
        self.toast = Some(Toast::new(message, kind));
    }

    fn append_terminal(&mut self, line: &str) {
        if self.terminal.len() >= MAX_TERMINAL_LINES {
            self.terminal.pop_front();
        }
        self.terminal.push_back(line.to_string());
    }

    fn post_chat(&mut self, message: &str) {
        self.chat.push(message.to_string());
    }
}

// ============================================================================
// Application
// ============================================================================

/// Main application state
pub struct VoraApp {
    pub(crate) controller: PlatformController<HttpApi>,
    pub(crate) view: EguiView,
    pub(crate) user_settings: UserSettings,
    pub(crate) language: Language,
    // === Auth screen ===
    pub(crate) auth_mode: AuthMode,
    pub(crate) login_form: LoginForm,
    pub(crate) register_form: RegisterForm,
    pub(crate) contact_form: ContactForm,
    // === Background work ===
    /// File being read from disk, if any
    pub(crate) loading_file: Option<String>,
    file_receiver: Option<Receiver<(String, io::Result<Vec<u8>>)>>,
    upload_job: Pending<UploadJob, UploadResponse>,
    clean_job: Pending<CleanRequest, CleanResponse>,
    forecast_job: Pending<ForecastRequest, ForecastResponse>,
    login_job: Pending<LoginRequest, LoginResponse>,
    register_job: Pending<RegisterRequest, Ack>,
    contact_job: Pending<ContactRequest, Ack>,
    // === Dashboard ===
    pub(crate) fullscreen_chart: Option<ChartCard>,
}

impl VoraApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, user_settings: UserSettings) -> Self {
        let language = user_settings.language;
        language.apply();

        let api_url = user_settings.effective_api_url();
        tracing::info!("Using API at {}", api_url);

        let sessions = match SessionStore::default_location() {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("Sessions will not be persisted: {}", e);
                None
            }
        };

        let session = sessions.as_ref().and_then(|store| match store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Ignoring stored session: {}", e);
                None
            }
        });

        let state = AppState::new(session, user_settings.dark_mode);
        let mut controller = PlatformController::new(HttpApi::new(api_url), state);
        if let Some(store) = sessions {
            controller = controller.with_session_store(store);
        }

        Self {
            controller,
            view: EguiView::default(),
            user_settings,
            language,
            auth_mode: AuthMode::default(),
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            contact_form: ContactForm::default(),
            loading_file: None,
            file_receiver: None,
            upload_job: None,
            clean_job: None,
            forecast_job: None,
            login_job: None,
            register_job: None,
            contact_job: None,
            fullscreen_chart: None,
        }
    }

    // ========================================================================
    // Starting work
    // ========================================================================

    /// Read a selected file in the background. A newer selection replaces
    /// any read still in flight.
    pub fn start_loading_file(&mut self, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        tracing::info!("Reading {}", path.display());
        self.loading_file = Some(name.clone());

        let (sender, receiver) = channel();
        self.file_receiver = Some(receiver);

        thread::spawn(move || {
            let _ = sender.send((name, fs::read(&path)));
        });
    }

    pub fn start_cleaning(&mut self) {
        if let Some(request) = self.controller.begin_cleaning(&mut self.view) {
            self.clean_job = Some(self.spawn_request(request, |api, req| api.clean_dataset(req)));
        }
    }

    pub fn start_forecast(&mut self) {
        if let Some(request) = self.controller.begin_forecast(&mut self.view) {
            self.forecast_job =
                Some(self.spawn_request(request, |api, req| api.forecast_lstm(req)));
        }
    }

    pub fn start_login(&mut self) {
        if let Some(request) = self.controller.begin_login(&self.login_form, &mut self.view) {
            self.login_job = Some(self.spawn_request(request, |api, req| api.login(req)));
        }
    }

    pub fn start_register(&mut self) {
        if let Some(request) = self
            .controller
            .begin_register(&self.register_form, &mut self.view)
        {
            self.register_job = Some(self.spawn_request(request, |api, req| api.register(req)));
        }
    }

    pub fn start_contact(&mut self) {
        if let Some(request) = self
            .controller
            .begin_contact(&self.contact_form, &mut self.view)
        {
            self.contact_job = Some(self.spawn_request(request, |api, req| api.contact(req)));
        }
    }

    pub fn logout(&mut self) {
        self.controller.logout(&mut self.view);
        self.view.terminal.clear();
        self.view.chat.clear();
        self.fullscreen_chart = None;
    }

    /// Run `call` against a clone of the API client on a worker thread
    fn spawn_request<J, R>(
        &self,
        request: J,
        call: fn(&HttpApi, &J) -> Result<R, ApiError>,
    ) -> Receiver<(J, Result<R, ApiError>)>
    where
        J: Send + 'static,
        R: Send + 'static,
    {
        let api = self.controller.api().clone();
        let (sender, receiver) = channel();

        thread::spawn(move || {
            let result = call(&api, &request);
            let _ = sender.send((request, result));
        });

        receiver
    }

    /// True while any request or file read is outstanding
    pub fn is_busy(&self) -> bool {
        self.file_receiver.is_some()
            || self.upload_job.is_some()
            || self.clean_job.is_some()
            || self.forecast_job.is_some()
            || self.login_job.is_some()
            || self.register_job.is_some()
            || self.contact_job.is_some()
    }

    pub fn is_cleaning(&self) -> bool {
        self.clean_job.is_some()
    }

    pub fn is_forecasting(&self) -> bool {
        self.forecast_job.is_some()
    }

    pub fn is_authenticating(&self) -> bool {
        self.login_job.is_some() || self.register_job.is_some()
    }

    pub fn is_sending_contact(&self) -> bool {
        self.contact_job.is_some()
    }

    // ========================================================================
    // Finishing work
    // ========================================================================

    /// Apply every background result that has arrived
    fn check_jobs_complete(&mut self) {
        if let Some((name, contents)) = poll(&mut self.file_receiver) {
            self.loading_file = None;
            self.controller
                .show_file_preview(&name, &contents, &mut self.view);

            if let Ok(bytes) = contents {
                let job = self.controller.begin_upload(&name, bytes, &mut self.view);
                self.upload_job = Some(self.spawn_request(job, |api, job| {
                    api.upload_dataset(&job.file_name, &job.contents, job.user_email.as_deref())
                }));
            }
        }

        if let Some((job, result)) = poll(&mut self.upload_job) {
            self.controller.finish_upload(&job, result, &mut self.view);
        }

        if let Some((request, result)) = poll(&mut self.clean_job) {
            self.controller
                .finish_cleaning(&request, result, &mut self.view);
        }

        if let Some((request, result)) = poll(&mut self.forecast_job) {
            self.controller
                .finish_forecast(&request, result, &mut self.view);
        }

        if let Some((request, result)) = poll(&mut self.login_job) {
            if self.controller.finish_login(&request, result, &mut self.view) {
                self.login_form = LoginForm::default();
            }
        }

        if let Some((request, result)) = poll(&mut self.register_job) {
            if self
                .controller
                .finish_register(&request, result, &mut self.view)
            {
                // Pre-fill the login form with the new account
                self.login_form.email = request.email;
                self.register_form = RegisterForm::default();
                self.auth_mode = AuthMode::Login;
            }
        }

        if let Some((_, result)) = poll(&mut self.contact_job) {
            if self.controller.finish_contact(result, &mut self.view) {
                self.contact_form = ContactForm::default();
            }
        }
    }

    /// Handle files dropped onto the window (first file only)
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if !self.controller.state.is_platform_unlocked() {
            return;
        }

        let dropped = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|f| f.path.clone())
        });

        if let Some(path) = dropped {
            self.start_loading_file(path);
        }
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) {
        self.controller.state.dark_mode = dark_mode;
        self.user_settings.dark_mode = dark_mode;
        self.save_settings();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        language.apply();
        self.user_settings.language = language;
        self.save_settings();
    }

    fn save_settings(&mut self) {
        if let Err(e) = self.user_settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
            self.view.notify(
                &rust_i18n::t!("settings.save_failed", error = e),
                ToastType::Error,
            );
        }
    }
}

/// Take a finished result out of `slot`, clearing it once the worker is done
fn poll<T>(slot: &mut Option<Receiver<T>>) -> Option<T> {
    let result = match slot.as_ref()?.try_recv() {
        Ok(value) => Some(value),
        Err(TryRecvError::Empty) => return None,
        Err(TryRecvError::Disconnected) => {
            tracing::error!("Background job ended without a result");
            None
        }
    };
    *slot = None;
    result
}

impl eframe::App for VoraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_jobs_complete();
        self.handle_dropped_files(ctx);

        if self.controller.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Keep polling while work is outstanding
        if self.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.render_toast(ctx);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        if !self.controller.state.is_platform_unlocked() {
            egui::CentralPanel::default().show(ctx, |ui| {
                self.render_auth_view(ui);
            });
            return;
        }

        egui::SidePanel::left("data_panel")
            .default_width(300.0)
            .min_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.render_data_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_tab_bar(ui);
            ui.add_space(8.0);
            self.render_active_tab(ui);
        });

        self.render_fullscreen_chart(ctx);
    }
}
