mod dashboard_view;
mod energy_form_view;
mod sidebar;
mod unit_form_view;
mod unit_list_view;

use crate::api::UnitApi;
use crate::app::{AppState, Notice, UnitsPage};
use crate::navigation::Route;
use crate::requests::BackgroundDispatcher;
use crate::settings::Settings;
use crate::toast_log::{append_toast_log, TOAST_LOG_FILE};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use sidebar::SidebarClick;
use std::sync::Arc;
use unit_form_view::FormViewEvent;
use unit_list_view::ListViewEvent;

fn push_toast(toasts: &mut Toasts, toast: Toast) {
    append_toast_log(TOAST_LOG_FILE, toast.text.text());
    toasts.add(toast);
}

pub struct UnidadesApp {
    state: AppState,
    dispatcher: BackgroundDispatcher,
    toasts: Toasts,
    pub enable_toasts: bool,
    pub toast_duration: f32,
    settings: Settings,
    settings_path: String,
    pub window_size: (i32, i32),
}

impl UnidadesApp {
    pub fn new(
        ctx: &egui::Context,
        api: Arc<dyn UnitApi>,
        settings: Settings,
        settings_path: &str,
    ) -> Self {
        let dispatcher = BackgroundDispatcher::new(api).with_repaint(ctx.clone());
        let mut state = AppState::new();
        state.start(&dispatcher);
        let [w, h] = settings.window_size();
        Self {
            state,
            dispatcher,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_duration,
            settings,
            settings_path: settings_path.to_string(),
            window_size: (w as i32, h as i32),
        }
    }

    pub fn add_toast(&mut self, toast: Toast) {
        push_toast(&mut self.toasts, toast);
    }

    fn show_notices(&mut self) {
        for notice in self.state.take_notices() {
            let (text, kind) = match notice {
                Notice::Success(text) => (text, ToastKind::Success),
                Notice::Error(text) => (text, ToastKind::Error),
            };
            if self.enable_toasts {
                self.add_toast(Toast {
                    text: text.into(),
                    kind,
                    options: ToastOptions::default()
                        .duration_in_seconds(self.toast_duration as f64),
                });
            }
        }
    }

    fn sidebar(&mut self, ui: &mut egui::Ui) {
        match sidebar::ui(ui, self.state.navigation()) {
            Some(SidebarClick::Logo) => self.state.click_logo(&self.dispatcher),
            Some(SidebarClick::Link(route)) => self.state.navigate(route, &self.dispatcher),
            None => {}
        }
    }

    fn banner(&mut self, ctx: &egui::Context) {
        let Some(msg) = self.state.banner().map(str::to_owned) else {
            return;
        };
        egui::TopBottomPanel::top("error_banner").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::LIGHT_RED, msg);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Fechar").clicked() {
                        self.state.dismiss_banner();
                    }
                });
            });
        });
    }

    fn content(&mut self, ui: &mut egui::Ui) {
        let dispatcher = &self.dispatcher;
        let state = &mut self.state;
        match state.route() {
            Route::Dashboard => {
                if dashboard_view::ui(ui, &state.dashboard) {
                    state.dashboard.mount(dispatcher);
                }
            }
            Route::Unidades => match state.units_page() {
                UnitsPage::List => match unit_list_view::ui(ui, &state.unit_list) {
                    Some(ListViewEvent::Intent(intent)) => {
                        state.handle_list_intent(intent, dispatcher)
                    }
                    Some(ListViewEvent::Retry) => state.unit_list.mount(dispatcher),
                    None => {}
                },
                UnitsPage::Form => match unit_form_view::ui(ui, &mut state.unit_form) {
                    Some(FormViewEvent::Save) => state.submit_unit_form(dispatcher),
                    Some(FormViewEvent::Cancel) => state.cancel_unit_form(dispatcher),
                    None => {}
                },
            },
            Route::CadastroEnergia => {
                let validation = state.energy_validation().cloned();
                if energy_form_view::ui(ui, &mut state.energy_form, validation.as_ref()) {
                    state.submit_energy_form(dispatcher);
                }
            }
        }
    }
}

impl eframe::App for UnidadesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for resp in self.dispatcher.pump() {
            self.state.handle_response(resp, &self.dispatcher);
        }
        self.show_notices();
        if self.enable_toasts {
            self.toasts.show(ctx);
        }
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.window_size = (rect.width() as i32, rect.height() as i32);
        }

        egui::SidePanel::left("menu_lateral")
            .resizable(false)
            .exact_width(220.0)
            .show(ctx, |ui| self.sidebar(ui));
        self.banner(ctx);
        egui::CentralPanel::default().show(ctx, |ui| self.content(ui));

        if self.dispatcher.in_flight() > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.window_size = Some(self.window_size);
        if let Err(e) = self.settings.save(&self.settings_path) {
            tracing::error!("failed to save settings: {e}");
        }
    }
}
