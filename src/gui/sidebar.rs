use crate::navigation::{NavigationState, Route};
use eframe::egui;

pub const LOGO_TEXT: &str = "☀ Unidades Geradoras";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarClick {
    Logo,
    Link(Route),
}

/// Logo plus one selectable link per route; the active route is highlighted.
pub fn ui(ui: &mut egui::Ui, nav: &NavigationState) -> Option<SidebarClick> {
    let mut click = None;
    ui.add_space(8.0);
    let logo = ui
        .add(egui::Button::new(egui::RichText::new(LOGO_TEXT).heading().strong()).frame(false))
        .on_hover_text("Voltar ao Dashboard");
    if logo.clicked() {
        click = Some(SidebarClick::Logo);
    }
    ui.separator();
    for entry in nav.entries() {
        let resp = ui.add_sized(
            [ui.available_width(), 28.0],
            egui::SelectableLabel::new(entry.active, entry.label),
        );
        if resp.clicked() {
            click = Some(SidebarClick::Link(entry.route));
        }
    }
    click
}
