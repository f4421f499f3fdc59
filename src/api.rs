use crate::model::{EnergyRecord, EnergyRecordDraft, Unit, UnitDraft, UnitId};
use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Collection path of generating units below the API base URL.
pub const UNITS_RESOURCE: &str = "unidades";
/// Collection path of energy records below the API base URL.
pub const RECORDS_RESOURCE: &str = "lancamentos";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Operations the client needs from the units REST API.
///
/// Implementations are called from worker threads, never from the UI thread.
pub trait UnitApi: Send + Sync {
    fn list_units(&self) -> Result<Vec<Unit>>;
    /// Success is the status alone; the body of the answer is not read.
    fn create_unit(&self, draft: &UnitDraft) -> Result<()>;
    fn update_unit(&self, id: UnitId, draft: &UnitDraft) -> Result<()>;
    fn delete_unit(&self, id: UnitId) -> Result<()>;
    fn list_energy_records(&self) -> Result<Vec<EnergyRecord>>;
    fn create_energy_record(&self, draft: &EnergyRecordDraft) -> Result<()>;
}

/// `UnitApi` over plain JSON/HTTP.
pub struct HttpUnitApi {
    client: Client,
    base: Url,
}

impl HttpUnitApi {
    /// `timeout` of `None` lets requests hang until the server answers.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base = Url::parse(base_url)
            .with_context(|| format!("invalid API base url '{base_url}'"))?;
        if base.cannot_be_a_base() {
            bail!("API base url '{base_url}' cannot hold resource paths");
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("unidades-geradoras client")
            .build()?;
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve `segments` below the base url, keeping any base path prefix.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn unit_endpoint(&self, id: UnitId) -> Url {
        let id = id.to_string();
        self.endpoint(&[UNITS_RESOURCE, &id])
    }

    fn call(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let label = format!("GET {url}");
        let resp = checked(self.call(Method::GET, url), &label)?;
        resp.json().with_context(|| format!("{label}: invalid response body"))
    }

    fn send_json<B: Serialize>(&self, method: Method, url: Url, body: &B) -> Result<Response> {
        let label = format!("{method} {url}");
        checked(self.call(method, url).json(body), &label)
    }
}

fn checked(request: RequestBuilder, label: &str) -> Result<Response> {
    let resp = request
        .send()
        .with_context(|| format!("{label}: request failed"))?;
    let status = resp.status();
    if !status.is_success() {
        bail!("{label}: server answered {status}");
    }
    Ok(resp)
}

impl UnitApi for HttpUnitApi {
    fn list_units(&self) -> Result<Vec<Unit>> {
        self.get_json(self.endpoint(&[UNITS_RESOURCE]))
    }

    fn create_unit(&self, draft: &UnitDraft) -> Result<()> {
        self.send_json(Method::POST, self.endpoint(&[UNITS_RESOURCE]), draft)?;
        Ok(())
    }

    fn update_unit(&self, id: UnitId, draft: &UnitDraft) -> Result<()> {
        self.send_json(Method::PUT, self.unit_endpoint(id), draft)?;
        Ok(())
    }

    fn delete_unit(&self, id: UnitId) -> Result<()> {
        let url = self.unit_endpoint(id);
        let label = format!("DELETE {url}");
        checked(self.call(Method::DELETE, url), &label)?;
        Ok(())
    }

    fn list_energy_records(&self) -> Result<Vec<EnergyRecord>> {
        self.get_json(self.endpoint(&[RECORDS_RESOURCE]))
    }

    fn create_energy_record(&self, draft: &EnergyRecordDraft) -> Result<()> {
        self.send_json(Method::POST, self.endpoint(&[RECORDS_RESOURCE]), draft)?;
        Ok(())
    }
}
