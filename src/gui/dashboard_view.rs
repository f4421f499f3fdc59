use crate::dashboard::Dashboard;
use eframe::egui;

/// Returns `true` when the user asked for a refresh.
pub fn ui(ui: &mut egui::Ui, dashboard: &Dashboard) -> bool {
    let mut refresh = false;
    ui.horizontal(|ui| {
        ui.heading("Dashboard");
        if dashboard.is_loading() {
            ui.spinner();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            refresh = ui.button("Atualizar").clicked();
        });
    });
    ui.separator();
    for err in dashboard.errors() {
        ui.colored_label(egui::Color32::LIGHT_RED, err);
    }
    ui.horizontal_wrapped(|ui| {
        for (title, value) in dashboard.metrics().cards() {
            card(ui, title, &value);
        }
    });
    refresh
}

fn card(ui: &mut egui::Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(160.0, 70.0));
            ui.vertical(|ui| {
                ui.label(title);
                ui.label(egui::RichText::new(value).size(26.0).strong());
            });
        });
}
