//! Auth screen: login, registration, demo access and the contact form.

use eframe::egui;
use rust_i18n::t;

use crate::app::{AuthMode, VoraApp};

const PRIMARY: egui::Color32 = egui::Color32::from_rgb(113, 120, 78);

fn form_row(ui: &mut egui::Ui, label: &str, value: &mut String, password: bool) -> egui::Response {
    ui.label(egui::RichText::new(label).size(12.0));
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .password(password)
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
    response
}

impl VoraApp {
    /// Render the logged-out view
    pub fn render_auth_view(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.heading(egui::RichText::new("VORA").size(32.0).strong());
                ui.label(
                    egui::RichText::new(t!("auth.tagline"))
                        .size(14.0)
                        .color(egui::Color32::GRAY),
                );
                ui.add_space(20.0);

                egui::Frame::NONE
                    .fill(ui.visuals().faint_bg_color)
                    .corner_radius(12)
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.set_width(360.0);
                        self.render_auth_switch(ui);
                        ui.add_space(12.0);
                        match self.auth_mode {
                            AuthMode::Login => self.render_login_form(ui),
                            AuthMode::Register => self.render_register_form(ui),
                        }
                    });

                ui.add_space(20.0);

                egui::Frame::NONE
                    .fill(ui.visuals().faint_bg_color)
                    .corner_radius(12)
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.set_width(360.0);
                        self.render_contact_form(ui);
                    });

                ui.add_space(30.0);
            });
        });
    }

    fn render_auth_switch(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.auth_mode, AuthMode::Login, t!("auth.login"));
            ui.selectable_value(&mut self.auth_mode, AuthMode::Register, t!("auth.register"));
        });
    }

    fn render_login_form(&mut self, ui: &mut egui::Ui) {
        let busy = self.is_authenticating();

        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
            form_row(ui, &t!("auth.email"), &mut self.login_form.email, false);
            let password = form_row(ui, &t!("auth.password"), &mut self.login_form.password, true);
            let submitted =
                password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let login = ui.add_enabled(
                    !busy,
                    egui::Button::new(
                        egui::RichText::new(t!("auth.login")).color(egui::Color32::WHITE),
                    )
                    .fill(PRIMARY),
                );
                if (login.clicked() || submitted) && !busy {
                    self.start_login();
                }
                if busy {
                    ui.spinner();
                }
            });

            ui.add_space(10.0);
            ui.separator();
            if ui.button(t!("auth.try_demo")).clicked() {
                self.controller.login_demo(&mut self.view);
            }
        });
    }

    fn render_register_form(&mut self, ui: &mut egui::Ui) {
        let busy = self.is_authenticating();
        let form = &mut self.register_form;

        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
            form_row(ui, &t!("auth.first_name"), &mut form.first_name, false);
            form_row(ui, &t!("auth.last_name"), &mut form.last_name, false);
            form_row(ui, &t!("auth.email"), &mut form.email, false);
            form_row(ui, &t!("auth.password"), &mut form.password, true);
            ui.label(
                egui::RichText::new(t!("auth.password_hint"))
                    .size(11.0)
                    .color(egui::Color32::GRAY),
            );
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!busy, egui::Button::new(t!("auth.create_account")))
                .clicked()
            {
                self.start_register();
            }
            if busy {
                ui.spinner();
            }
        });
    }

    fn render_contact_form(&mut self, ui: &mut egui::Ui) {
        let sending = self.is_sending_contact();

        egui::CollapsingHeader::new(egui::RichText::new(t!("contact.title")).strong())
            .default_open(false)
            .show(ui, |ui| {
                let form = &mut self.contact_form;
                form_row(ui, &t!("contact.name"), &mut form.name, false);
                form_row(ui, &t!("contact.company"), &mut form.company, false);
                form_row(ui, &t!("auth.email"), &mut form.email, false);
                ui.label(egui::RichText::new(t!("contact.message")).size(12.0));
                ui.add(
                    egui::TextEdit::multiline(&mut form.message)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(!sending, egui::Button::new(t!("contact.send")))
                        .clicked()
                    {
                        self.start_contact();
                    }
                    if sending {
                        ui.spinner();
                    }
                });
            });
    }
}
