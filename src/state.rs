//! Core application state types.
//!
//! `AppState` holds everything the platform view needs between events:
//! who is logged in, which server-side files are current, and what the
//! preview and dashboard are showing.

use std::time::{Duration, Instant};

use crate::api::{CleaningOptions, ForecastMetrics};
use crate::preview::PreviewTable;
use crate::series::ForecastChartData;
use crate::session::{UserMeta, UserSession};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Terminal lines kept before the oldest are dropped
pub const MAX_TERMINAL_LINES: usize = 500;

/// Supported dataset extensions (used in file dialogs)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "txt", "json", "xlsx", "xls"];

// ============================================================================
// UI Types
// ============================================================================

/// Tabs of the platform view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    /// Upload / connect data
    #[default]
    Data,
    /// Preview and cleaning
    Clean,
    /// Forecast run log
    Terminal,
    /// Forecast charts and metrics
    Graph,
}

impl ActiveTab {
    pub fn all() -> &'static [ActiveTab] {
        &[
            ActiveTab::Data,
            ActiveTab::Clean,
            ActiveTab::Terminal,
            ActiveTab::Graph,
        ]
    }
}

/// Type of toast notification (determines color)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastType {
    /// Informational message (blue)
    #[default]
    Info,
    /// Success message (green)
    Success,
    /// Warning message (amber)
    Warning,
    /// Error message (red)
    Error,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [59, 130, 246],    // Blue
            ToastType::Success => [34, 197, 94],  // Green
            ToastType::Warning => [253, 193, 73], // Amber
            ToastType::Error => [239, 68, 68],    // Red
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        match self {
            ToastType::Warning => [30, 30, 30], // Dark text for amber background
            _ => [255, 255, 255],               // White text for other backgrounds
        }
    }
}

/// A transient notification
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastType,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastType) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= TOAST_DURATION
    }
}

/// Everything the dashboard shows for one forecast run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForecastView {
    /// Dataset the model was trained on
    pub filename: String,
    pub metrics: ForecastMetrics,
    pub charts: ForecastChartData,
}

// ============================================================================
// Application State
// ============================================================================

/// Session-scoped state of the platform view
#[derive(Clone, Debug, Default)]
pub struct AppState {
    session: Option<UserSession>,
    /// Server-side name of the most recent upload
    last_uploaded_file: Option<String>,
    /// Server-side name of the cleaned copy of that upload
    last_cleaned_file: Option<String>,
    /// Preview currently on screen
    pub preview: PreviewTable,
    /// Latest forecast results, if any
    pub forecast: Option<ForecastView>,
    pub active_tab: ActiveTab,
    pub cleaning_options: CleaningOptions,
    pub dark_mode: bool,
}

impl AppState {
    pub fn new(session: Option<UserSession>, dark_mode: bool) -> Self {
        Self {
            session,
            dark_mode,
            ..Default::default()
        }
    }

    pub fn current_user(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    /// Email of the logged-in user, if there is one
    pub fn current_email(&self) -> Option<&str> {
        self.session
            .as_ref()
            .filter(|s| s.is_authenticated())
            .map(|s| s.email.as_str())
    }

    pub fn user_meta(&self) -> UserMeta {
        UserMeta::from_session(self.session.as_ref())
    }

    /// The platform view is only available to a logged-in user
    pub fn is_platform_unlocked(&self) -> bool {
        self.current_email().is_some()
    }

    pub fn set_session(&mut self, session: Option<UserSession>) {
        self.session = session;
    }

    pub fn last_uploaded_file(&self) -> Option<&str> {
        self.last_uploaded_file.as_deref()
    }

    pub fn last_cleaned_file(&self) -> Option<&str> {
        self.last_cleaned_file.as_deref()
    }

    /// Record a new upload; any cleaned copy belongs to the previous file
    pub fn set_uploaded_file(&mut self, name: impl Into<String>) {
        self.last_uploaded_file = Some(name.into());
        self.last_cleaned_file = None;
    }

    /// Record the local selection before the server has confirmed the upload
    pub fn set_selected_file(&mut self, name: impl Into<String>) {
        self.last_uploaded_file = Some(name.into());
    }

    pub fn set_cleaned_file(&mut self, name: impl Into<String>) {
        self.last_cleaned_file = Some(name.into());
    }

    /// File to forecast on: the cleaned copy if there is one, else the upload
    pub fn dataset_for_forecast(&self) -> Option<&str> {
        self.last_cleaned_file().or(self.last_uploaded_file())
    }

    /// Forget everything tied to the logged-in user
    pub fn reset_for_logout(&mut self) {
        *self = Self::new(None, self.dark_mode);
    }
}
