use crate::remote::LoadState;
use crate::unit_list::{ListIntent, UnitList, COLUMN_HEADERS, LIST_TITLE};
use eframe::egui;
use egui_extras::{Column, TableBuilder};

pub enum ListViewEvent {
    Intent(ListIntent),
    Retry,
}

pub fn ui(ui: &mut egui::Ui, list: &UnitList) -> Option<ListViewEvent> {
    let mut event = None;
    ui.horizontal(|ui| {
        ui.heading(LIST_TITLE);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Nova Unidade").clicked() {
                event = Some(ListViewEvent::Intent(list.new_unit()));
            }
        });
    });
    ui.separator();

    match list.state().state() {
        LoadState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Carregando unidades...");
            });
        }
        LoadState::Failed(msg) => {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::LIGHT_RED, format!("Falha ao carregar: {msg}"));
                if ui.button("Tentar novamente").clicked() {
                    event = Some(ListViewEvent::Retry);
                }
            });
        }
        LoadState::Idle | LoadState::Ready(_) => {}
    }

    let rows = list.rows();
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(40.0))
        .columns(Column::remainder().at_least(80.0).clip(true), 4)
        .column(Column::auto().at_least(140.0))
        .header(22.0, |mut header| {
            for title in COLUMN_HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
            header.col(|_| {});
        })
        .body(|mut body| {
            for (idx, cells) in rows.iter().enumerate() {
                body.row(26.0, |mut row| {
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                    row.col(|ui| {
                        ui.horizontal(|ui| {
                            if ui.small_button("Editar").clicked() {
                                event = list.edit(idx).map(ListViewEvent::Intent);
                            }
                            if ui.small_button("Remover").clicked() {
                                event = list.remove(idx).map(ListViewEvent::Intent);
                            }
                        });
                    });
                });
            }
        });
    event
}
