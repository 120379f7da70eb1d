//! Toast notification system for user feedback.

use eframe::egui;

use crate::app::VoraApp;
use crate::state::TOAST_DURATION;

impl VoraApp {
    /// Render the current toast in the bottom right corner
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(toast) = &self.view.toast else {
            return;
        };

        if toast.is_expired() {
            self.view.toast = None;
            return;
        }

        let margin = 20.0;
        let [r, g, b] = toast.kind.color();
        let [tr, tg, tb] = toast.kind.text_color();

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, -margin))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(r, g, b))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .shadow(egui::epaint::Shadow {
                        offset: [2, 2],
                        blur: 8,
                        spread: 0,
                        color: egui::Color32::from_black_alpha(60),
                    })
                    .show(ui, |ui| {
                        ui.set_min_width(220.0);
                        ui.set_max_width(420.0);
                        ui.label(
                            egui::RichText::new(&toast.message)
                                .color(egui::Color32::from_rgb(tr, tg, tb))
                                .size(14.0),
                        );
                    });
            });

        // Wake up again to take the toast down
        ctx.request_repaint_after(TOAST_DURATION);
    }
}
