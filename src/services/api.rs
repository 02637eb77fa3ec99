use crate::domain::models::{ResponseEnvelope, SearchQuery, VacancySummary};
use serde::Deserialize;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },
    #[error("url is not parseable: {0}")]
    BadUrl(String),
    #[error("no text parameter in url: {0}")]
    MissingTextParam(String),
}

impl ProbeError {
    /// Stable machine-readable code for the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            ProbeError::Fetch(_) => "FETCH_ERROR",
            ProbeError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            ProbeError::BadUrl(_) => "BAD_URL",
            ProbeError::MissingTextParam(_) => "MISSING_TEXT_PARAM",
        }
    }
}

/// Wire shape of one search page. `original_url` is not part of it; the
/// client records the requested URL itself when assembling the envelope.
#[derive(Debug, Deserialize)]
struct SearchPage {
    items: Vec<VacancySummary>,
    alternate_url: String,
    #[serde(default)]
    found: Option<u64>,
}

pub struct ApiClient {
    http: reqwest::blocking::Client,
    api_root: String,
}

impl ApiClient {
    pub fn new(api_root: &str, timeout_ms: u64) -> Result<Self, ProbeError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(concat!("vacprobe/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            api_root: api_root.trim_end_matches('/').to_string(),
        })
    }

    /// `GET <api_root>?text=<query>`. No retries; a timeout or non-2xx
    /// status surfaces as `ProbeError::Fetch`.
    pub fn search(&self, query: &SearchQuery) -> Result<ResponseEnvelope, ProbeError> {
        let resp = self
            .http
            .get(&self.api_root)
            .query(&[("text", query.text.as_str())])
            .send()?;
        let original_url = resp.url().to_string();
        let body = resp.error_for_status()?.text()?;
        let page: SearchPage =
            serde_json::from_str(&body).map_err(|e| ProbeError::MalformedResponse {
                url: original_url.clone(),
                reason: e.to_string(),
            })?;
        Ok(ResponseEnvelope {
            items: page.items,
            found: page.found,
            original_url,
            alternate_url: page.alternate_url,
        })
    }

    /// `GET <api_root>/{id}`, returning the raw body. Fetched on demand,
    /// once per item, never cached.
    pub fn vacancy_detail(&self, id: &str) -> Result<String, ProbeError> {
        let url = format!("{}/{}", self.api_root, id);
        let resp = self.http.get(&url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}
