use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchQuery {
    pub text: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VacancySummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// One executed search: the page the server returned plus the literal URL
/// the client requested. `original_url` is not part of the server payload;
/// the transport layer records it after the request.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub items: Vec<VacancySummary>,
    pub found: Option<u64>,
    pub original_url: String,
    pub alternate_url: String,
}

/// Before/after query text when the server rewrote the submitted query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rewrite {
    pub sent: String,
    pub executed: String,
}

#[derive(Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub description: String,
    pub query: String,
    pub status: String,
    pub items_found: Option<usize>,
    pub rewrite: Option<Rewrite>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub scenarios: Vec<ScenarioReport>,
}

#[derive(Serialize)]
pub struct ScenarioInfo {
    pub name: String,
    pub description: String,
    pub query: String,
    pub expectation: String,
}

#[derive(Serialize)]
pub struct QueryReport {
    pub text: String,
    pub found: Option<u64>,
    pub items_on_page: usize,
    pub rewrite: Option<Rewrite>,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub text: String,
    pub items_checked: usize,
    pub rewrite: Option<Rewrite>,
    pub satisfied: bool,
    pub passed: bool,
}
