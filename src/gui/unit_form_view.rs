use crate::unit_form::{Field, UnitForm, ATIVA_LABEL, FORM_TITLE};
use eframe::egui;

pub enum FormViewEvent {
    Save,
    Cancel,
}

pub fn ui(ui: &mut egui::Ui, form: &mut UnitForm) -> Option<FormViewEvent> {
    let mut event = None;
    ui.heading(FORM_TITLE);
    if let Some(id) = form.editing() {
        ui.weak(format!("Editando a unidade {id}"));
    }
    ui.separator();
    egui::Grid::new("unit_form_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for field in Field::ALL {
                ui.label(field.label());
                ui.add(
                    egui::TextEdit::singleline(form.field_mut(field))
                        .hint_text(field.placeholder())
                        .desired_width(280.0),
                );
                ui.end_row();
            }
            ui.label("");
            let mut ativa = form.ativa;
            if ui.checkbox(&mut ativa, ATIVA_LABEL).changed() {
                form.toggle_ativa();
            }
            ui.end_row();
        });
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Salvar").clicked() {
            event = Some(FormViewEvent::Save);
        }
        if ui.button("Cancelar").clicked() {
            event = Some(FormViewEvent::Cancel);
        }
    });
    event
}
