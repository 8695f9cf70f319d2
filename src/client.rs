// run  := cargo run --
// dir  := .
// kid  :=

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Result, SpshowError};
use crate::incident::Incident;

pub trait IncidentSource {
    fn fetch_all(&self) -> Result<Vec<Incident>>;
    fn fetch_open(&self) -> Result<Vec<Incident>>;
    fn fetch_scheduled(&self) -> Result<Vec<Incident>>;
}

#[derive(Debug)]
pub struct StatusPageClient {
    client:   Client,
    base_url: String,
    page_id:  String,
    token:    String
}

impl StatusPageClient {
    pub fn new(base_url: &str, token: &str, page_id: &str, timeout: Duration) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(SpshowError::ClientConstruction("auth token is empty".to_string()));
        }
        if page_id.trim().is_empty() {
            return Err(SpshowError::ClientConstruction("page id is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("spshow/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SpshowError::ClientConstruction(e.to_string()))?;

        Ok(StatusPageClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_id: page_id.trim().to_string(),
            token: token.trim().to_string()
        })
    }

    fn get(&self, endpoint: &'static str, suffix: &str) -> Result<Vec<Incident>> {
        let url = format!("{}/pages/{}/{}", self.base_url, self.page_id, suffix);
        tracing::debug!(endpoint, %url, "fetching incidents");

        let fetch_err = |reason: String| SpshowError::Fetch { endpoint, reason };

        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .send()
            .map_err(|e| fetch_err(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(fetch_err(format!("server returned status {}", resp.status())));
        }

        let incidents: Vec<Incident> = resp.json().map_err(|e| fetch_err(format!("malformed payload: {e}")))?;
        tracing::debug!(endpoint, count = incidents.len(), "fetched incidents");
        Ok(incidents)
    }
}

impl IncidentSource for StatusPageClient {
    fn fetch_all(&self) -> Result<Vec<Incident>> { self.get("all", "incidents.json") }

    fn fetch_open(&self) -> Result<Vec<Incident>> { self.get("open", "incidents/unresolved.json") }

    fn fetch_scheduled(&self) -> Result<Vec<Incident>> { self.get("scheduled", "incidents/scheduled.json") }
}

#[derive(Debug, Default, Clone)]
pub struct IncidentLists {
    pub all:       Vec<Incident>,
    pub active:    Vec<Incident>,
    pub scheduled: Vec<Incident>,
    pub resolved:  Vec<Incident>
}

pub fn resolved_subset(all: &[Incident]) -> Vec<Incident> { all.iter().filter(|i| i.is_resolved()).cloned().collect() }

pub fn load_incidents(source: &dyn IncidentSource) -> Result<IncidentLists> {
    let all = source.fetch_all()?;
    let active = source.fetch_open()?;
    let scheduled = source.fetch_scheduled()?;
    let resolved = resolved_subset(&all);

    tracing::info!(
        all = all.len(),
        active = active.len(),
        scheduled = scheduled.len(),
        resolved = resolved.len(),
        "incident lists loaded"
    );

    Ok(IncidentLists { all, active, scheduled, resolved })
}
