use crate::energy_form::{EnergyField, EnergyForm, DATA_PLACEHOLDER, ENERGY_FORM_TITLE, TOTAL_PLACEHOLDER};
use crate::remote::LoadState;
use crate::validation::Validation;
use eframe::egui;

/// Returns `true` when "Registrar" was clicked.
pub fn ui(
    ui: &mut egui::Ui,
    form: &mut EnergyForm,
    validation: Option<&Validation<EnergyField>>,
) -> bool {
    ui.heading(ENERGY_FORM_TITLE);
    ui.separator();
    match form.units().state() {
        LoadState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Carregando unidades...");
            });
        }
        LoadState::Failed(msg) => {
            ui.colored_label(egui::Color32::LIGHT_RED, format!("Falha ao carregar unidades: {msg}"));
        }
        LoadState::Idle | LoadState::Ready(_) => {}
    }

    let reason = |field: EnergyField| validation.and_then(|v| v.reason_for(field));
    let selected = form.selected_label();
    let units = form.units().items().to_vec();
    egui::Grid::new("energy_form_grid")
        .num_columns(3)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label(EnergyField::Unidade.label());
            egui::ComboBox::from_id_source("energy_form_unit")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for unit in &units {
                        ui.selectable_value(&mut form.unidade, Some(unit.id), &unit.apelido);
                    }
                });
            problem(ui, reason(EnergyField::Unidade));
            ui.end_row();

            ui.label(EnergyField::Data.label());
            ui.add(egui::TextEdit::singleline(&mut form.data).hint_text(DATA_PLACEHOLDER));
            problem(ui, reason(EnergyField::Data));
            ui.end_row();

            ui.label(EnergyField::Total.label());
            ui.add(egui::TextEdit::singleline(&mut form.total_kwh).hint_text(TOTAL_PLACEHOLDER));
            problem(ui, reason(EnergyField::Total));
            ui.end_row();
        });
    ui.add_space(8.0);
    ui.button("Registrar").clicked()
}

fn problem(ui: &mut egui::Ui, reason: Option<&str>) {
    match reason {
        Some(reason) => {
            ui.colored_label(egui::Color32::LIGHT_RED, reason);
        }
        None => {
            ui.label("");
        }
    }
}
