// tests/common.rs

use plugin_scaffold::errors::Result;
use plugin_scaffold::transport::{HttpClient, HttpResponse};
use std::collections::HashMap;
use std::process::Command;
use std::sync::Mutex;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by some integration tests, but not all.
pub fn scaffold_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("plugin-scaffold"))
}

/// An in-memory GitHub: answers known URLs, 404s everything else, and records requests.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeGitHub {
    routes: HashMap<String, Vec<u8>>,
    pub requests: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(mut self, url: &str, value: serde_json::Value) -> Self {
        self.routes.insert(url.to_string(), value.to_string().into_bytes());
        self
    }

    pub fn file(mut self, url: &str, body: &[u8]) -> Self {
        self.routes.insert(url.to_string(), body.to_vec());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl HttpClient for FakeGitHub {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(match self.routes.get(url) {
            Some(body) => HttpResponse {
                status: 200,
                body: body.clone(),
            },
            None => HttpResponse {
                status: 404,
                body: b"{\"message\":\"Not Found\"}".to_vec(),
            },
        })
    }
}
