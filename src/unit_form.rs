use crate::model::{Unit, UnitDraft, UnitId};
use crate::requests::{ApiRequest, Origin, RequestDispatcher};
use crate::validation::Validation;

pub const FORM_TITLE: &str = "Cadastro de Unidade Geradora";
pub const ATIVA_LABEL: &str = "Ativo";

/// Required text inputs of the unit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Apelido,
    Local,
    Marca,
    Modelo,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Apelido, Field::Local, Field::Marca, Field::Modelo];

    pub fn label(self) -> &'static str {
        match self {
            Field::Apelido => "Apelido",
            Field::Local => "Local",
            Field::Marca => "Marca",
            Field::Modelo => "Modelo",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Apelido => "Painel 1",
            Field::Local => "Rua Alberto 430",
            Field::Marca => "marca",
            Field::Modelo => "155w",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent and the form kept its input.
    Rejected(Validation<Field>),
    /// The request went out and the form was cleared.
    Sent(ApiRequest),
}

/// Local state of the unit registration form.
///
/// Opened empty for a new unit or pre-filled through [`UnitForm::for_unit`],
/// in which case submitting updates that unit instead of creating one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitForm {
    pub apelido: String,
    pub local: String,
    pub marca: String,
    pub modelo: String,
    pub ativa: bool,
    editing: Option<UnitId>,
}

impl UnitForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_unit(unit: &Unit) -> Self {
        Self {
            apelido: unit.apelido.clone(),
            local: unit.local.clone(),
            marca: unit.marca.clone(),
            modelo: unit.modelo.clone(),
            ativa: unit.ativa,
            editing: Some(unit.id),
        }
    }

    pub fn editing(&self) -> Option<UnitId> {
        self.editing
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Apelido => &self.apelido,
            Field::Local => &self.local,
            Field::Marca => &self.marca,
            Field::Modelo => &self.modelo,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Apelido => &mut self.apelido,
            Field::Local => &mut self.local,
            Field::Marca => &mut self.marca,
            Field::Modelo => &mut self.modelo,
        }
    }

    pub fn toggle_ativa(&mut self) {
        self.ativa = !self.ativa;
    }

    pub fn validate(&self) -> Validation<Field> {
        let mut validation = Validation::new();
        for field in Field::ALL {
            validation.require(field, self.field(field));
        }
        validation
    }

    /// Payload with the inputs exactly as typed.
    pub fn draft(&self) -> UnitDraft {
        UnitDraft {
            apelido: self.apelido.clone(),
            local: self.local.clone(),
            marca: self.marca.clone(),
            modelo: self.modelo.clone(),
            ativa: self.ativa,
        }
    }

    /// Clear every input, including the checkbox, and leave edit mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// "Salvar". Sends the create (or update) request without waiting for it,
    /// clears the form and then calls `mudar_formulario`. Incomplete input
    /// sends nothing and leaves the callback uncalled.
    pub fn submit<F>(&mut self, dispatcher: &dyn RequestDispatcher, mudar_formulario: F) -> SubmitOutcome
    where
        F: FnOnce(),
    {
        let validation = self.validate();
        if !validation.is_ok() {
            tracing::debug!("unit form rejected: {:?}", validation.errors());
            return SubmitOutcome::Rejected(validation);
        }
        let draft = self.draft();
        let request = match self.editing {
            Some(id) => ApiRequest::UpdateUnit { id, draft },
            None => ApiRequest::CreateUnit(draft),
        };
        dispatcher.dispatch(Origin::UnitForm, request.clone());
        self.reset();
        mudar_formulario();
        SubmitOutcome::Sent(request)
    }
}
