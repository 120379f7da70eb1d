//! Forecast dashboard: metrics, charts and the fullscreen chart viewer.

use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};
use rust_i18n::t;

use crate::api::ForecastMetrics;
use crate::app::{ChartCard, VoraApp};
use crate::series::ForecastChartData;

const HISTORY_COLOR: egui::Color32 = egui::Color32::from_rgb(71, 108, 155);
const FORECAST_COLOR: egui::Color32 = egui::Color32::from_rgb(191, 78, 48);
const SUMMARY_COLOR: egui::Color32 = egui::Color32::from_rgb(253, 193, 73);
const GAIN_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
const LOSS_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

/// Plot height inside a dashboard card
const CARD_PLOT_HEIGHT: f32 = 260.0;

fn card_title(card: ChartCard) -> String {
    match card {
        ChartCard::Forecast => t!("dashboard.forecast_title"),
        ChartCard::Summary => t!("dashboard.summary_title"),
        ChartCard::Change => t!("dashboard.change_title"),
    }
    .to_string()
}

/// Axis label for the point at `x` on the shared timeline
fn label_at(labels: &[String], x: f64) -> String {
    if x < 0.0 || x.fract() != 0.0 {
        return String::new();
    }
    labels.get(x as usize).cloned().unwrap_or_default()
}

fn format_metric(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "-".to_string())
}

fn slot_points(slots: &[Option<f64>]) -> PlotPoints<'static> {
    slots
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| [i as f64, v]))
        .collect()
}

fn plot_forecast(ui: &mut egui::Ui, charts: &ForecastChartData, id: egui::Id, height: f32) {
    let labels = charts.combined_labels();
    let history = slot_points(&charts.history_slots());
    let forecast = slot_points(&charts.forecast_slots());

    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .x_axis_formatter(move |mark, _range| label_at(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(t!("dashboard.history").to_string(), history).color(HISTORY_COLOR),
            );
            plot_ui.line(
                Line::new(t!("dashboard.forecast").to_string(), forecast).color(FORECAST_COLOR),
            );
        });
}

/// Min / mean / max bars; nothing is drawn without forecast values
fn plot_summary(ui: &mut egui::Ui, charts: &ForecastChartData, id: egui::Id, height: f32) {
    let Some(summary) = charts.forecast_summary() else {
        ui.label(egui::RichText::new(t!("dashboard.no_forecast")).color(egui::Color32::GRAY));
        return;
    };

    let names = [
        t!("dashboard.min").to_string(),
        t!("dashboard.mean").to_string(),
        t!("dashboard.max").to_string(),
    ];
    let bars: Vec<Bar> = [summary.min, summary.mean, summary.max]
        .iter()
        .zip(names.iter())
        .enumerate()
        .map(|(i, (value, name))| Bar::new(i as f64, *value).name(name).fill(SUMMARY_COLOR))
        .collect();

    Plot::new(id)
        .height(height)
        .x_axis_formatter(move |mark, _range| {
            if mark.value.fract() == 0.0 && mark.value >= 0.0 {
                names.get(mark.value as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(t!("dashboard.summary_title").to_string(), bars));
        });
}

/// Percentage change of each forecast value against the last real value
fn plot_change(ui: &mut egui::Ui, charts: &ForecastChartData, id: egui::Id, height: f32) {
    let Some(changes) = charts.change_vs_last_actual() else {
        ui.label(egui::RichText::new(t!("dashboard.no_change")).color(egui::Color32::GRAY));
        return;
    };

    let labels = charts.forecast_labels.clone();
    let bars: Vec<Bar> = changes
        .iter()
        .enumerate()
        .map(|(i, change)| {
            let color = if *change >= 0.0 { GAIN_COLOR } else { LOSS_COLOR };
            Bar::new(i as f64, *change).fill(color)
        })
        .collect();

    Plot::new(id)
        .height(height)
        .x_axis_formatter(move |mark, _range| label_at(&labels, mark.value))
        .y_axis_formatter(|mark, _range| format!("{:.1}%", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(t!("dashboard.change_title").to_string(), bars));
        });
}

fn plot_card(
    ui: &mut egui::Ui,
    card: ChartCard,
    charts: &ForecastChartData,
    id: egui::Id,
    height: f32,
) {
    match card {
        ChartCard::Forecast => plot_forecast(ui, charts, id, height),
        ChartCard::Summary => plot_summary(ui, charts, id, height),
        ChartCard::Change => plot_change(ui, charts, id, height),
    }
}

impl VoraApp {
    /// Render the graph tab
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let Some(view) = &self.controller.state.forecast else {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(t!("dashboard.empty"))
                        .size(18.0)
                        .color(egui::Color32::GRAY),
                );
            });
            return;
        };

        let generation = self.view.chart_generation;
        let mut expand: Option<ChartCard> = None;

        egui::ScrollArea::vertical()
            .id_salt("dashboard")
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(t!("dashboard.trained_on", file = view.filename.as_str()))
                        .size(12.0)
                        .color(egui::Color32::GRAY),
                );
                ui.add_space(6.0);
                render_metrics(ui, &view.metrics);
                ui.add_space(10.0);

                if view.charts.is_empty() {
                    ui.label(
                        egui::RichText::new(t!("dashboard.no_points"))
                            .color(egui::Color32::GRAY),
                    );
                    return;
                }

                for card in [ChartCard::Forecast, ChartCard::Summary, ChartCard::Change] {
                    egui::Frame::NONE
                        .fill(ui.visuals().faint_bg_color)
                        .corner_radius(8)
                        .inner_margin(egui::Margin::symmetric(12, 10))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new(card_title(card)).strong());
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui
                                            .small_button(t!("dashboard.expand"))
                                            .on_hover_text(t!("dashboard.fullscreen"))
                                            .clicked()
                                        {
                                            expand = Some(card);
                                        }
                                    },
                                );
                            });
                            let id = egui::Id::new(("chart_card", card_title(card), generation));
                            plot_card(ui, card, &view.charts, id, CARD_PLOT_HEIGHT);
                        });
                    ui.add_space(10.0);
                }
            });

        if expand.is_some() {
            self.fullscreen_chart = expand;
        }
    }

    /// Render the fullscreen viewer for the expanded chart, if any.
    ///
    /// Closed with the window's close button or `Esc`.
    pub fn render_fullscreen_chart(&mut self, ctx: &egui::Context) {
        let Some(card) = self.fullscreen_chart else {
            return;
        };
        let Some(view) = &self.controller.state.forecast else {
            self.fullscreen_chart = None;
            return;
        };

        let mut open = !ctx.input(|i| i.key_pressed(egui::Key::Escape));
        let generation = self.view.chart_generation;

        egui::Window::new(card_title(card))
            .id(egui::Id::new("fullscreen_chart"))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_size([1100.0, 700.0])
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let height = ui.available_height().max(CARD_PLOT_HEIGHT);
                let id = egui::Id::new(("fullscreen_plot", generation));
                plot_card(ui, card, &view.charts, id, height);
            });

        if !open {
            self.fullscreen_chart = None;
        }
    }
}

fn render_metrics(ui: &mut egui::Ui, metrics: &ForecastMetrics) {
    let epochs = metrics
        .train_epochs
        .map(|e| e.to_string())
        .unwrap_or_else(|| "-".to_string());
    let items = [
        ("RMSE", format_metric(metrics.rmse)),
        ("MAE", format_metric(metrics.mae)),
        ("MSE", format_metric(metrics.mse)),
        ("Epochs", epochs),
    ];

    ui.horizontal(|ui| {
        for (name, value) in items {
            egui::Frame::NONE
                .fill(ui.visuals().faint_bg_color)
                .corner_radius(6)
                .inner_margin(egui::Margin::symmetric(14, 8))
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(name)
                                .size(11.0)
                                .color(egui::Color32::GRAY),
                        );
                        ui.label(egui::RichText::new(value).size(18.0).strong());
                    });
                });
            ui.add_space(6.0);
        }
    });
}
