use crate::model::{EnergyRecordDraft, Unit, UnitId};
use crate::remote::{LoadId, Remote};
use crate::requests::{ApiRequest, Origin, RequestDispatcher};
use crate::validation::Validation;

pub const ENERGY_FORM_TITLE: &str = "Cadastro de energia geradora";
pub const DATA_PLACEHOLDER: &str = "2024-05";
pub const TOTAL_PLACEHOLDER: &str = "150,5";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyField {
    Unidade,
    Data,
    Total,
}

impl EnergyField {
    pub fn label(self) -> &'static str {
        match self {
            EnergyField::Unidade => "Unidade geradora",
            EnergyField::Data => "Mês/ano",
            EnergyField::Total => "Total kWh gerado",
        }
    }
}

/// Accepts `,` or `.` as decimal separator. Negative or non-finite values are refused.
pub fn parse_kwh(input: &str) -> Option<f64> {
    let value: f64 = input.trim().replace(',', ".").parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Registers generated energy for one unit. Offers the units it fetched on mount.
#[derive(Debug, Default)]
pub struct EnergyForm {
    pub unidade: Option<UnitId>,
    pub data: String,
    pub total_kwh: String,
    units: Remote<Unit>,
}

impl EnergyForm {
    pub fn mount(&mut self, dispatcher: &dyn RequestDispatcher) {
        let load = self.units.start();
        dispatcher.dispatch(Origin::EnergyForm, ApiRequest::ListUnits(load));
    }

    pub fn apply_units(&mut self, load: LoadId, result: Result<Vec<Unit>, String>) {
        if !self.units.finish(load, result) {
            return;
        }
        if let Some(id) = self.unidade {
            if !self.units.items().iter().any(|u| u.id == id) {
                self.unidade = None;
            }
        }
    }

    pub fn units(&self) -> &Remote<Unit> {
        &self.units
    }

    pub fn selected_label(&self) -> String {
        self.unidade
            .and_then(|id| self.units.items().iter().find(|u| u.id == id))
            .map(|u| u.apelido.clone())
            .unwrap_or_else(|| "Selecione".into())
    }

    pub fn validate(&self) -> Validation<EnergyField> {
        let mut validation = Validation::new();
        if self.unidade.is_none() {
            validation.reject(EnergyField::Unidade, "selecione uma unidade");
        }
        validation.require(EnergyField::Data, &self.data);
        if self.total_kwh.trim().is_empty() {
            validation.require(EnergyField::Total, &self.total_kwh);
        } else if parse_kwh(&self.total_kwh).is_none() {
            validation.reject(EnergyField::Total, "informe um número não negativo");
        }
        validation
    }

    /// Sends the record and clears month and amount. The selected unit stays so
    /// several months can be entered in a row.
    pub fn submit(
        &mut self,
        dispatcher: &dyn RequestDispatcher,
    ) -> Result<EnergyRecordDraft, Validation<EnergyField>> {
        let validation = self.validate();
        let (Some(unidade_id), Some(total_kwh)) = (self.unidade, parse_kwh(&self.total_kwh)) else {
            return Err(validation);
        };
        if !validation.is_ok() {
            return Err(validation);
        }
        let draft = EnergyRecordDraft {
            unidade_id,
            data: self.data.trim().to_string(),
            total_kwh,
        };
        dispatcher.dispatch(
            Origin::EnergyForm,
            ApiRequest::CreateEnergyRecord(draft.clone()),
        );
        self.data.clear();
        self.total_kwh.clear();
        Ok(draft)
    }
}
