//! Data panel: dataset selection, cleaning options and run buttons.

use eframe::egui;
use rust_i18n::t;

use crate::app::VoraApp;
use crate::state::SUPPORTED_EXTENSIONS;

/// Primary accent (olive green)
const PRIMARY: egui::Color32 = egui::Color32::from_rgb(113, 120, 78);

impl VoraApp {
    /// Render the left-hand data panel
    pub fn render_data_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading(t!("data.title"));
        ui.add_space(8.0);

        if let Some(name) = &self.loading_file {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(t!("data.loading", file = name));
            });
            ui.add_space(6.0);
        }

        if self.primary_button(ui, &t!("data.select_file")).clicked() {
            self.pick_dataset();
        }

        ui.add_space(10.0);
        self.render_current_files(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        ui.label(egui::RichText::new(t!("clean.options")).strong());
        let options = &mut self.controller.state.cleaning_options;
        ui.checkbox(&mut options.remove_duplicates, t!("clean.remove_duplicates"));
        ui.checkbox(&mut options.fix_missing, t!("clean.fix_missing"));
        ui.checkbox(&mut options.standardize_formats, t!("clean.standardize_formats"));

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let cleaning = self.is_cleaning();
            if ui
                .add_enabled(!cleaning, egui::Button::new(t!("clean.run")))
                .clicked()
            {
                self.start_cleaning();
            }
            if cleaning {
                ui.spinner();
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let forecasting = self.is_forecasting();
            if ui
                .add_enabled(!forecasting, egui::Button::new(t!("forecast.run")))
                .clicked()
            {
                self.start_forecast();
            }
            if forecasting {
                ui.spinner();
            }
        });

        ui.add_space(8.0);
        ui.separator();
        self.render_assistant_feed(ui);
    }

    pub(crate) fn pick_dataset(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(t!("data.dataset_files"), SUPPORTED_EXTENSIONS)
            .pick_file()
        {
            self.start_loading_file(path);
        }
    }

    fn primary_button(&self, ui: &mut egui::Ui, label: &str) -> egui::Response {
        let frame = egui::Frame::NONE
            .fill(PRIMARY)
            .corner_radius(6)
            .inner_margin(egui::Margin::symmetric(16, 8))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(label)
                        .color(egui::Color32::WHITE)
                        .size(14.0),
                );
            });

        let response = frame.response.interact(egui::Sense::click());
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        response
    }

    fn render_current_files(&self, ui: &mut egui::Ui) {
        let state = &self.controller.state;

        let uploaded = state
            .last_uploaded_file()
            .map(str::to_string)
            .unwrap_or_else(|| t!("data.none").to_string());
        ui.label(
            egui::RichText::new(t!("data.current_file", file = uploaded))
                .size(12.0)
                .color(egui::Color32::GRAY),
        );

        if let Some(cleaned) = state.last_cleaned_file() {
            ui.label(
                egui::RichText::new(t!("data.cleaned_file", file = cleaned))
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
        }
    }

    fn render_assistant_feed(&self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new(t!("chat.title")).strong());
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_salt("assistant_feed")
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if self.view.chat.is_empty() {
                    ui.label(
                        egui::RichText::new(t!("chat.welcome"))
                            .size(12.0)
                            .color(egui::Color32::GRAY),
                    );
                }

                for message in &self.view.chat {
                    egui::Frame::NONE
                        .fill(ui.visuals().faint_bg_color)
                        .corner_radius(6)
                        .inner_margin(egui::Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(message).size(13.0));
                        });
                    ui.add_space(4.0);
                }
            });
    }

    /// Render the drop zone shown on the data tab
    pub fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let text_gray = egui::Color32::from_rgb(150, 150, 150);
        let mut pick = false;

        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            egui::Frame::NONE
                .fill(ui.visuals().faint_bg_color)
                .corner_radius(12)
                .inner_margin(32.0)
                .show(ui, |ui| {
                    ui.set_max_width(420.0);
                    ui.vertical_centered(|ui| {
                        let size = 40.0;
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
                        let stroke = egui::Stroke::new(2.0, PRIMARY);
                        ui.painter()
                            .circle_stroke(rect.center(), size / 2.0, stroke);
                        ui.painter().arrow(
                            rect.center() + egui::vec2(0.0, size * 0.2),
                            egui::vec2(0.0, -size * 0.4),
                            stroke,
                        );

                        ui.add_space(12.0);
                        if self.primary_button(ui, &t!("data.select_file")).clicked() {
                            pick = true;
                        }

                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(t!("data.drop_hint"))
                                .color(text_gray)
                                .size(13.0),
                        );

                        ui.add_space(10.0);
                        let extensions = SUPPORTED_EXTENSIONS
                            .iter()
                            .map(|ext| ext.to_uppercase())
                            .collect::<Vec<_>>()
                            .join(" • ");
                        ui.label(egui::RichText::new(extensions).color(text_gray).size(11.0));
                    });
                });
        });

        if pick {
            self.pick_dataset();
        }
    }
}
