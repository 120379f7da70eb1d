//! Forecast run log.

use eframe::egui;
use rust_i18n::t;

use crate::app::VoraApp;

impl VoraApp {
    pub fn render_terminal(&mut self, ui: &mut egui::Ui) {
        let running = self.is_forecasting();

        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(20, 22, 26))
            .corner_radius(8)
            .inner_margin(egui::Margin::symmetric(14, 12))
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if self.view.terminal.is_empty() {
                            ui.label(
                                egui::RichText::new(t!("terminal.idle"))
                                    .monospace()
                                    .color(egui::Color32::GRAY),
                            );
                        }

                        for line in &self.view.terminal {
                            let color = if line.starts_with('$') {
                                egui::Color32::from_rgb(159, 166, 119)
                            } else {
                                egui::Color32::from_rgb(220, 220, 220)
                            };
                            ui.label(egui::RichText::new(line).monospace().color(color));
                        }

                        if running {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(
                                    egui::RichText::new(t!("terminal.running"))
                                        .monospace()
                                        .color(egui::Color32::GRAY),
                                );
                            });
                        }
                    });
            });
    }
}
