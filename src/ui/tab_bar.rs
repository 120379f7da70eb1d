//! Tab bar for the platform view.

use eframe::egui;
use rust_i18n::t;

use crate::app::VoraApp;
use crate::state::ActiveTab;

/// Primary accent used for the active tab
const ACCENT: egui::Color32 = egui::Color32::from_rgb(113, 120, 78);

fn tab_label(tab: ActiveTab) -> String {
    match tab {
        ActiveTab::Data => t!("tabs.data"),
        ActiveTab::Clean => t!("tabs.clean"),
        ActiveTab::Terminal => t!("tabs.terminal"),
        ActiveTab::Graph => t!("tabs.graph"),
    }
    .to_string()
}

impl VoraApp {
    /// Render the row of tabs above the main content
    pub fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        let active = self.controller.state.active_tab;
        let mut clicked: Option<ActiveTab> = None;

        ui.horizontal(|ui| {
            for &tab in ActiveTab::all() {
                let is_active = tab == active;

                let fill = if is_active {
                    ui.visuals().widgets.active.weak_bg_fill
                } else {
                    ui.visuals().faint_bg_color
                };
                let border = if is_active {
                    ACCENT
                } else {
                    ui.visuals().widgets.noninteractive.bg_stroke.color
                };

                let frame = egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(egui::CornerRadius {
                        nw: 6,
                        ne: 6,
                        sw: 0,
                        se: 0,
                    })
                    .stroke(egui::Stroke::new(if is_active { 2.0 } else { 1.0 }, border))
                    .inner_margin(egui::Margin::symmetric(14, 6))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(tab_label(tab)).size(14.0).strong());
                    });

                let response = frame.response.interact(egui::Sense::click());
                if response.clicked() {
                    clicked = Some(tab);
                }
                if response.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }

                ui.add_space(2.0);
            }
        });

        if let Some(tab) = clicked {
            self.controller.state.active_tab = tab;
        }

        // Separator line under tabs
        let rect = ui.available_rect_before_wrap();
        ui.painter().line_segment(
            [
                egui::pos2(rect.left(), rect.top()),
                egui::pos2(rect.right(), rect.top()),
            ],
            ui.visuals().widgets.noninteractive.bg_stroke,
        );
    }

    /// Render the content of the active tab
    pub fn render_active_tab(&mut self, ui: &mut egui::Ui) {
        match self.controller.state.active_tab {
            ActiveTab::Data => self.render_drop_zone(ui),
            ActiveTab::Clean => self.render_preview_table(ui),
            ActiveTab::Terminal => self.render_terminal(ui),
            ActiveTab::Graph => self.render_dashboard(ui),
        }
    }
}
