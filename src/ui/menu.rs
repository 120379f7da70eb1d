//! Top bar: brand, language, theme toggle and the user menu.

use eframe::egui;
use rust_i18n::t;

use crate::app::VoraApp;
use crate::i18n::Language;

impl VoraApp {
    /// Render the application menu bar
    pub fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        let mut language = self.language;
        let mut toggle_theme = false;
        let mut logout = false;
        let unlocked = self.controller.state.is_platform_unlocked();
        let dark_mode = self.controller.state.dark_mode;

        egui::MenuBar::new().ui(ui, |ui| {
            ui.style_mut()
                .text_styles
                .insert(egui::TextStyle::Button, egui::FontId::proportional(15.0));

            ui.label(egui::RichText::new("VORA").size(18.0).strong());
            ui.add_space(12.0);

            if unlocked {
                ui.menu_button(t!("menu.file"), |ui| {
                    ui.set_min_width(180.0);
                    if ui.button(t!("data.select_file")).clicked() {
                        self.pick_dataset();
                        ui.close();
                    }
                });
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if unlocked {
                    let meta = self.controller.user_meta();
                    ui.menu_button(meta.display_name.as_str(), |ui| {
                        ui.label(
                            egui::RichText::new(&meta.email)
                                .size(12.0)
                                .color(egui::Color32::GRAY),
                        );
                        ui.separator();
                        if ui.button(t!("menu.logout")).clicked() {
                            logout = true;
                            ui.close();
                        }
                    });
                    draw_avatar(ui, meta.initial);
                    ui.add_space(8.0);
                }

                let theme_label = if dark_mode {
                    t!("menu.light_mode")
                } else {
                    t!("menu.dark_mode")
                };
                if ui.button(theme_label).clicked() {
                    toggle_theme = true;
                }

                egui::ComboBox::from_id_salt("language_selector")
                    .selected_text(language.display_name())
                    .width(110.0)
                    .show_ui(ui, |ui| {
                        for lang in Language::all() {
                            ui.selectable_value(&mut language, *lang, lang.display_name());
                        }
                    });
            });
        });

        if language != self.language {
            self.set_language(language);
            ui.ctx().request_repaint();
        }
        if toggle_theme {
            self.set_dark_mode(!dark_mode);
        }
        if logout {
            self.logout();
        }
    }
}

/// Circle with the user's initial
fn draw_avatar(ui: &mut egui::Ui, initial: char) {
    let size = 24.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, egui::Color32::from_rgb(113, 120, 78));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
}
