use crate::dashboard::Dashboard;
use crate::energy_form::{EnergyField, EnergyForm};
use crate::model::{EnergyRecord, Unit};
use crate::navigation::{NavigationState, Route};
use crate::requests::{ApiPayload, ApiRequest, ApiResponse, Origin, RequestDispatcher};
use crate::unit_form::UnitForm;
use crate::unit_list::{ListIntent, UnitList};
use crate::validation::Validation;

/// Sub-view of the units page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitsPage {
    #[default]
    List,
    Form,
}

/// Feedback for the toast area, drained once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Everything the window shows, independent of egui.
///
/// Views talk to the API only through the dispatcher passed to each call;
/// completions come back through [`AppState::handle_response`].
#[derive(Debug, Default)]
pub struct AppState {
    nav: NavigationState,
    units_page: UnitsPage,
    pub unit_list: UnitList,
    pub unit_form: UnitForm,
    pub dashboard: Dashboard,
    pub energy_form: EnergyForm,
    energy_validation: Option<Validation<EnergyField>>,
    banner: Option<String>,
    notices: Vec<Notice>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the initial page.
    pub fn start(&mut self, dispatcher: &dyn RequestDispatcher) {
        self.mount_route(dispatcher);
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn route(&self) -> Route {
        self.nav.active()
    }

    pub fn units_page(&self) -> UnitsPage {
        self.units_page
    }

    pub fn navigate(&mut self, route: Route, dispatcher: &dyn RequestDispatcher) {
        if self.nav.navigate(route) {
            self.mount_route(dispatcher);
        }
    }

    pub fn click_logo(&mut self, dispatcher: &dyn RequestDispatcher) {
        if self.nav.click_logo() {
            self.mount_route(dispatcher);
        }
    }

    fn mount_route(&mut self, dispatcher: &dyn RequestDispatcher) {
        match self.nav.active() {
            Route::Dashboard => self.dashboard.mount(dispatcher),
            Route::Unidades => self.show_list(dispatcher),
            Route::CadastroEnergia => {
                self.energy_validation = None;
                self.energy_form.mount(dispatcher);
            }
        }
    }

    fn show_list(&mut self, dispatcher: &dyn RequestDispatcher) {
        self.units_page = UnitsPage::List;
        self.unit_list.mount(dispatcher);
    }

    /// Swap between the list and the form. Entering the form from here always
    /// starts from an empty form.
    pub fn mudar_formulario(&mut self, dispatcher: &dyn RequestDispatcher) {
        match self.units_page {
            UnitsPage::List => {
                self.unit_form.reset();
                self.units_page = UnitsPage::Form;
            }
            UnitsPage::Form => self.show_list(dispatcher),
        }
    }

    pub fn handle_list_intent(&mut self, intent: ListIntent, dispatcher: &dyn RequestDispatcher) {
        let mut open_empty_form = false;
        intent.deliver(
            |unit: Unit| {
                tracing::debug!("editing unit {}", unit.id);
                self.unit_form = UnitForm::for_unit(&unit);
                self.units_page = UnitsPage::Form;
            },
            |id| dispatcher.dispatch(Origin::UnitList, ApiRequest::DeleteUnit(id)),
            || open_empty_form = true,
        );
        if open_empty_form {
            self.mudar_formulario(dispatcher);
        }
    }

    pub fn submit_unit_form(&mut self, dispatcher: &dyn RequestDispatcher) {
        let mut done = false;
        self.unit_form.submit(dispatcher, || done = true);
        if done {
            self.mudar_formulario(dispatcher);
        }
    }

    pub fn cancel_unit_form(&mut self, dispatcher: &dyn RequestDispatcher) {
        self.unit_form.reset();
        self.show_list(dispatcher);
    }

    pub fn submit_energy_form(&mut self, dispatcher: &dyn RequestDispatcher) {
        self.energy_validation = self.energy_form.submit(dispatcher).err();
    }

    pub fn energy_validation(&self) -> Option<&Validation<EnergyField>> {
        self.energy_validation.as_ref()
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Route a completion to whoever asked for it.
    pub fn handle_response(&mut self, resp: ApiResponse, dispatcher: &dyn RequestDispatcher) {
        let ApiResponse {
            origin,
            request,
            result,
        } = resp;
        match request {
            ApiRequest::ListUnits(load) => {
                let units = units_of(result);
                match origin {
                    Origin::Dashboard => self.dashboard.apply_units(load, units),
                    Origin::EnergyForm => self.energy_form.apply_units(load, units),
                    Origin::UnitList | Origin::UnitForm => self.unit_list.apply(load, units),
                }
            }
            ApiRequest::ListEnergyRecords(load) => {
                self.dashboard.apply_records(load, records_of(result))
            }
            mutation => match result {
                Ok(_) => self.mutation_succeeded(&mutation, dispatcher),
                Err(e) => {
                    let msg = format!("Não foi possível {}: {}", mutation.describe(), e);
                    tracing::warn!("{msg}");
                    self.notices.push(Notice::Error(msg.clone()));
                    self.banner = Some(msg);
                }
            },
        }
    }

    fn mutation_succeeded(&mut self, request: &ApiRequest, dispatcher: &dyn RequestDispatcher) {
        let text = match request {
            ApiRequest::CreateUnit(draft) => format!("Unidade {} cadastrada", draft.apelido),
            ApiRequest::UpdateUnit { draft, .. } => format!("Unidade {} atualizada", draft.apelido),
            ApiRequest::DeleteUnit(id) => format!("Unidade {id} removida"),
            ApiRequest::CreateEnergyRecord(_) => "Lançamento registrado".to_string(),
            ApiRequest::ListUnits(_) | ApiRequest::ListEnergyRecords(_) => return,
        };
        tracing::info!("{text}");
        self.notices.push(Notice::Success(text));
        match (self.nav.active(), self.units_page) {
            (Route::Unidades, UnitsPage::List) => self.unit_list.mount(dispatcher),
            (Route::Dashboard, _) => self.dashboard.mount(dispatcher),
            _ => {}
        }
    }
}

fn units_of(result: Result<ApiPayload, String>) -> Result<Vec<Unit>, String> {
    match result? {
        ApiPayload::Units(units) => Ok(units),
        other => Err(format!("resposta inesperada: {other:?}")),
    }
}

fn records_of(result: Result<ApiPayload, String>) -> Result<Vec<EnergyRecord>, String> {
    match result? {
        ApiPayload::EnergyRecords(records) => Ok(records),
        other => Err(format!("resposta inesperada: {other:?}")),
    }
}
