//! Output capabilities the controller renders through.
//!
//! The controller never touches widgets directly. The egui front end
//! implements `Renderer` in `app`; tests record the calls instead.

use crate::preview::PreviewTable;
use crate::state::{ForecastView, ToastType};

pub trait Renderer {
    /// Replace the preview table. An empty table means "show the placeholder".
    fn render_preview(&mut self, table: &PreviewTable);

    /// Replace the forecast charts and metrics
    fn render_charts(&mut self, view: &ForecastView);

    /// Show a transient notification
    fn notify(&mut self, message: &str, kind: ToastType);

    /// Append a line to the forecast terminal
    fn append_terminal(&mut self, _line: &str) {}

    /// Post a message to the assistant feed
    fn post_chat(&mut self, _message: &str) {}
}

/// A `Renderer` that keeps everything it is given, for tests and headless use
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub previews: Vec<PreviewTable>,
    pub charts: Vec<ForecastView>,
    pub notifications: Vec<(String, ToastType)>,
    pub terminal: Vec<String>,
    pub chat: Vec<String>,
}

impl RecordingRenderer {
    pub fn last_notification(&self) -> Option<&(String, ToastType)> {
        self.notifications.last()
    }

    pub fn last_kind(&self) -> Option<ToastType> {
        self.notifications.last().map(|(_, kind)| *kind)
    }
}

impl Renderer for RecordingRenderer {
    fn render_preview(&mut self, table: &PreviewTable) {
        self.previews.push(table.clone());
    }

    fn render_charts(&mut self, view: &ForecastView) {
        self.charts.push(view.clone());
    }

    fn notify(&mut self, message: &str, kind: ToastType) {
        self.notifications.push((message.to_string(), kind));
    }

    fn append_terminal(&mut self, line: &str) {
        self.terminal.push(line.to_string());
    }

    fn post_chat(&mut self, message: &str) {
        self.chat.push(message.to_string());
    }
}
