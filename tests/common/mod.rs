use assert_cmd::Command;
use httpmock::prelude::*;
use serde_json::{json, Value};

pub struct TestEnv {
    pub server: MockServer,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            server: MockServer::start(),
        }
    }

    pub fn api_root(&self) -> String {
        self.server.url("/vacancies")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("vacprobe").expect("binary under test");
        cmd.arg("--api-root").arg(self.api_root());
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }

    /// Serve `text` with the given item ids; the alternate url echoes
    /// `executed_text` the way the real server does (url-encoded).
    pub fn mock_search(&self, text: &str, ids: &[&str], executed_text: &str) -> httpmock::Mock<'_> {
        let items: Vec<Value> = ids
            .iter()
            .map(|id| json!({"id": id, "name": format!("vacancy {}", id)}))
            .collect();
        let body = json!({
            "found": items.len(),
            "items": items,
            "alternate_url": alternate_url(executed_text),
        });
        self.mock_search_body(text, body)
    }

    pub fn mock_search_body(&self, text: &str, body: Value) -> httpmock::Mock<'_> {
        self.server.mock(|when, then| {
            when.method(GET).path("/vacancies").query_param("text", text);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body);
        })
    }

    pub fn mock_search_status(&self, text: &str, status: u16) -> httpmock::Mock<'_> {
        self.server.mock(|when, then| {
            when.method(GET).path("/vacancies").query_param("text", text);
            then.status(status);
        })
    }

    pub fn mock_detail(&self, id: &str, body: &str) -> httpmock::Mock<'_> {
        let path = format!("/vacancies/{}", id);
        let body = body.to_string();
        self.server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(200).body(body);
        })
    }

    pub fn mock_detail_status(&self, id: &str, status: u16) -> httpmock::Mock<'_> {
        let path = format!("/vacancies/{}", id);
        self.server.mock(|when, then| {
            when.method(GET).path(path);
            then.status(status);
        })
    }
}

pub fn alternate_url(executed_text: &str) -> String {
    let pairs = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("text", executed_text)
        .finish();
    format!("https://hh.example/search/vacancy?{}", pairs)
}
