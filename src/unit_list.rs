use crate::model::{Unit, UnitId};
use crate::remote::{LoadId, Remote};
use crate::requests::{ApiRequest, Origin, RequestDispatcher};

pub const LIST_TITLE: &str = "Lista de Unidades";
/// The table header is rendered even when there are no rows.
pub const COLUMN_HEADERS: [&str; 5] = ["ID", "Apelido", "Local", "Marca", "Modelo"];

/// What the user asked the list to do. The list never acts on these itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    Edit(Unit),
    Remove(UnitId),
    NewUnit,
}

impl ListIntent {
    /// Hand the intent to the matching caller-supplied callback.
    pub fn deliver<E, R, N>(self, editar_unidade: E, remover_unidade: R, mudar_formulario: N)
    where
        E: FnOnce(Unit),
        R: FnOnce(UnitId),
        N: FnOnce(),
    {
        match self {
            ListIntent::Edit(unit) => editar_unidade(unit),
            ListIntent::Remove(id) => remover_unidade(id),
            ListIntent::NewUnit => mudar_formulario(),
        }
    }
}

#[derive(Debug, Default)]
pub struct UnitList {
    units: Remote<Unit>,
}

impl UnitList {
    /// Request the full collection. Called whenever the list is shown.
    pub fn mount(&mut self, dispatcher: &dyn RequestDispatcher) {
        let load = self.units.start();
        dispatcher.dispatch(Origin::UnitList, ApiRequest::ListUnits(load));
    }

    /// Completions of superseded loads are ignored.
    pub fn apply(&mut self, load: LoadId, result: Result<Vec<Unit>, String>) {
        if self.units.finish(load, result) {
            tracing::debug!("unit list loaded {} rows", self.units.items().len());
        }
    }

    pub fn state(&self) -> &Remote<Unit> {
        &self.units
    }

    pub fn units(&self) -> &[Unit] {
        self.units.items()
    }

    /// Cell text per row, in `COLUMN_HEADERS` order.
    pub fn rows(&self) -> Vec<[String; 5]> {
        self.units()
            .iter()
            .map(|u| {
                [
                    u.id.to_string(),
                    u.apelido.clone(),
                    u.local.clone(),
                    u.marca.clone(),
                    u.modelo.clone(),
                ]
            })
            .collect()
    }

    pub fn edit(&self, row: usize) -> Option<ListIntent> {
        self.units().get(row).cloned().map(ListIntent::Edit)
    }

    pub fn remove(&self, row: usize) -> Option<ListIntent> {
        self.units().get(row).map(|u| ListIntent::Remove(u.id))
    }

    pub fn new_unit(&self) -> ListIntent {
        ListIntent::NewUnit
    }
}
