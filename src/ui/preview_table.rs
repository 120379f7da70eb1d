//! Preview table for the selected or cleaned dataset.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use rust_i18n::t;

use crate::app::VoraApp;

impl VoraApp {
    /// Render the preview grid, or a placeholder when there is nothing to show
    pub fn render_preview_table(&mut self, ui: &mut egui::Ui) {
        let table = &self.controller.state.preview;

        if table.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(t!("preview.placeholder"))
                        .size(18.0)
                        .color(egui::Color32::GRAY),
                );
            });
            return;
        }

        let width = table.headers.len();
        let rows_label = match table.row_count() {
            1 => t!("preview.one_row").to_string(),
            n => t!("preview.rows_shown", count = n).to_string(),
        };
        ui.label(
            egui::RichText::new(rows_label)
                .size(12.0)
                .color(egui::Color32::GRAY),
        );
        ui.add_space(6.0);

        ui.push_id(("preview_table", self.view.preview_generation), |ui| {
            egui::ScrollArea::horizontal().show(ui, |ui| {
                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .columns(Column::auto().at_least(90.0).resizable(true), width)
                    .header(24.0, |mut header| {
                        for name in &table.headers {
                            header.col(|ui| {
                                ui.strong(name);
                            });
                        }
                    })
                    .body(|mut body| {
                        for row in &table.rows {
                            body.row(22.0, |mut cells| {
                                // Short rows are padded so every column lines up
                                for i in 0..width {
                                    cells.col(|ui| {
                                        ui.label(row.get(i).map(String::as_str).unwrap_or(""));
                                    });
                                }
                            });
                        }
                    });
            });
        });
    }
}
