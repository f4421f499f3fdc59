use crate::api::UnitApi;
use crate::model::{EnergyRecord, EnergyRecordDraft, Unit, UnitDraft, UnitId};
use crate::remote::LoadId;
use eframe::egui;
use std::cell::Cell;
use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;

/// Which part of the UI asked for a request. Completions are routed back by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    UnitList,
    UnitForm,
    Dashboard,
    EnergyForm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// Carries the load it answers so superseded loads can be dropped.
    ListUnits(LoadId),
    CreateUnit(UnitDraft),
    UpdateUnit { id: UnitId, draft: UnitDraft },
    DeleteUnit(UnitId),
    ListEnergyRecords(LoadId),
    CreateEnergyRecord(EnergyRecordDraft),
}

impl ApiRequest {
    pub fn describe(&self) -> String {
        match self {
            Self::ListUnits(_) => "carregar unidades".into(),
            Self::CreateUnit(draft) => format!("cadastrar a unidade {}", draft.apelido),
            Self::UpdateUnit { draft, .. } => format!("salvar a unidade {}", draft.apelido),
            Self::DeleteUnit(id) => format!("remover a unidade {id}"),
            Self::ListEnergyRecords(_) => "carregar lançamentos".into(),
            Self::CreateEnergyRecord(_) => "registrar o lançamento".into(),
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::ListUnits(_) | Self::ListEnergyRecords(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Units(Vec<Unit>),
    Created,
    Updated(UnitId),
    Deleted(UnitId),
    EnergyRecords(Vec<EnergyRecord>),
    EnergyRecordCreated,
}

/// Completion of one dispatched request. Errors are flattened to a message
/// that can be shown as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub origin: Origin,
    pub request: ApiRequest,
    pub result: Result<ApiPayload, String>,
}

/// Run `request` against `api` on the calling thread.
pub fn execute(api: &dyn UnitApi, request: &ApiRequest) -> anyhow::Result<ApiPayload> {
    Ok(match request {
        ApiRequest::ListUnits(_) => ApiPayload::Units(api.list_units()?),
        ApiRequest::CreateUnit(draft) => {
            api.create_unit(draft)?;
            ApiPayload::Created
        }
        ApiRequest::UpdateUnit { id, draft } => {
            api.update_unit(*id, draft)?;
            ApiPayload::Updated(*id)
        }
        ApiRequest::DeleteUnit(id) => {
            api.delete_unit(*id)?;
            ApiPayload::Deleted(*id)
        }
        ApiRequest::ListEnergyRecords(_) => ApiPayload::EnergyRecords(api.list_energy_records()?),
        ApiRequest::CreateEnergyRecord(draft) => {
            api.create_energy_record(draft)?;
            ApiPayload::EnergyRecordCreated
        }
    })
}

/// Outermost context followed by the root cause. The layers in between
/// mostly repeat the root cause in other words.
pub fn error_message(err: &anyhow::Error) -> String {
    let root = err.root_cause();
    if err.chain().count() > 1 {
        format!("{err}: {root}")
    } else {
        err.to_string()
    }
}

/// Sink for requests issued by the views. Dispatch never blocks.
pub trait RequestDispatcher {
    fn dispatch(&self, origin: Origin, request: ApiRequest);
}

/// Runs each request on its own worker thread and queues the completion for
/// the UI thread, which drains it with [`BackgroundDispatcher::pump`].
pub struct BackgroundDispatcher {
    api: Arc<dyn UnitApi>,
    tx: Sender<ApiResponse>,
    rx: Receiver<ApiResponse>,
    repaint: Option<egui::Context>,
    in_flight: Cell<usize>,
}

impl BackgroundDispatcher {
    pub fn new(api: Arc<dyn UnitApi>) -> Self {
        let (tx, rx) = channel();
        Self {
            api,
            tx,
            rx,
            repaint: None,
            in_flight: Cell::new(0),
        }
    }

    /// Wake the egui loop whenever a completion is queued.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Number of requests dispatched whose completion has not been pumped yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    /// Take every completion queued so far, in arrival order.
    pub fn pump(&self) -> Vec<ApiResponse> {
        let mut done = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(resp) => done.push(resp),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        let remaining = self.in_flight.get().saturating_sub(done.len());
        self.in_flight.set(remaining);
        done
    }
}

impl RequestDispatcher for BackgroundDispatcher {
    fn dispatch(&self, origin: Origin, request: ApiRequest) {
        tracing::debug!(?origin, ?request, "dispatching api request");
        self.in_flight.set(self.in_flight.get() + 1);
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        let worker_request = request.clone();
        let spawned = std::thread::Builder::new()
            .name("api-request".into())
            .spawn(move || {
                let result = execute(api.as_ref(), &worker_request).map_err(|e| error_message(&e));
                if let Err(e) = &result {
                    tracing::warn!("{} failed: {}", worker_request.describe(), e);
                }
                let _ = tx.send(ApiResponse {
                    origin,
                    request: worker_request,
                    result,
                });
                if let Some(ctx) = repaint {
                    ctx.request_repaint();
                }
            });
        if let Err(e) = spawned {
            tracing::error!("failed to spawn api worker: {e}");
            let _ = self.tx.send(ApiResponse {
                origin,
                request,
                result: Err(format!("falha ao iniciar requisição: {e}")),
            });
        }
    }
}


#[cfg(test)]
mod tests {
    use super::error_message;
    use anyhow::anyhow;
    use std::io;

    #[test]
    fn message_keeps_outer_context_and_root_cause_only() {
        let err = anyhow::Error::new(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "EOF while parsing a value at line 1 column 0",
        ))
        .context("error decoding response body: EOF while parsing a value at line 1 column 0")
        .context("GET http://localhost:3000/unidades: invalid response body");
        assert_eq!(
            error_message(&err),
            "GET http://localhost:3000/unidades: invalid response body: \
             EOF while parsing a value at line 1 column 0"
        );
    }

    #[test]
    fn single_error_is_shown_once() {
        let err = anyhow!("DELETE http://localhost:3000/unidades/1: server answered 500");
        assert_eq!(
            error_message(&err),
            "DELETE http://localhost:3000/unidades/1: server answered 500"
        );
    }
}
