use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a generating unit.
pub type UnitId = u64;

/// A generating unit as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub apelido: String,
    pub local: String,
    pub marca: String,
    pub modelo: String,
    #[serde(default)]
    pub ativa: bool,
}

impl Unit {
    /// Payload that recreates this unit's editable fields.
    pub fn draft(&self) -> UnitDraft {
        UnitDraft {
            apelido: self.apelido.clone(),
            local: self.local.clone(),
            marca: self.marca.clone(),
            modelo: self.modelo.clone(),
            ativa: self.ativa,
        }
    }
}

/// Body sent when creating or updating a unit. Never carries an `id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitDraft {
    pub apelido: String,
    pub local: String,
    pub marca: String,
    pub modelo: String,
    pub ativa: bool,
}

/// Energy generated by a unit over a reference month ("lançamento").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyRecord {
    pub id: UnitId,
    pub unidade_id: UnitId,
    #[serde(default)]
    pub data: String,
    pub total_kwh: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyRecordDraft {
    pub unidade_id: UnitId,
    pub data: String,
    pub total_kwh: f64,
}
