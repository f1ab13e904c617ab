// src/transport.rs
//! The HTTP capability the scaffolder depends on.
//!
//! Every network access goes through the [`HttpClient`] trait, so the GitHub
//! walkers never hold a process-wide client. [`ReqwestClient`] is the real
//! implementation; tests substitute a canned one.

use crate::errors::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// A fully buffered HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The numeric status code.
    pub status: u16,
    /// The raw response body. Never decoded as text by the transport.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A minimal, blocking HTTP GET capability.
///
/// Implementations must be shareable across threads because sibling entries
/// of a directory listing may be fetched in parallel.
pub trait HttpClient: Send + Sync {
    /// Performs a GET request and returns the status and body.
    ///
    /// Only transport-level failures (DNS, connection, TLS) are errors here;
    /// a non-2xx status is still a successful `HttpResponse`.
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Performs a GET request and fails with `Error::HttpStatus` on a non-2xx response.
pub fn get_bytes(client: &dyn HttpClient, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url)?;
    if !response.is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }
    Ok(response.body)
}

/// Performs a GET request and decodes the JSON body into `T`.
pub fn get_json<T: DeserializeOwned>(client: &dyn HttpClient, url: &str) -> Result<T> {
    let body = get_bytes(client, url)?;
    serde_json::from_slice(&body).map_err(|source| Error::Decode {
        url: url.to_string(),
        source,
    })
}

/// An [`HttpClient`] backed by a blocking `reqwest` client with GitHub API headers.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: Client,
}

impl ReqwestClient {
    /// Builds a client with default headers for GitHub API interaction.
    ///
    /// If `token` is `None`, the `GITHUB_TOKEN` environment variable is used
    /// when present, which raises the API rate limit and grants access to
    /// private repositories.
    pub fn new(user_agent: &str, token: Option<&str>, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value("application/vnd.github.v3+json")?);
        headers.insert(USER_AGENT, header_value(user_agent)?);

        let env_token = std::env::var("GITHUB_TOKEN").ok();
        if let Some(token) = token.or(env_token.as_deref()) {
            headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", token))?);
            log::debug!("Using a GitHub token for authentication.");
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { inner })
    }
}

fn header_value(value: &str) -> Result<reqwest::header::HeaderValue> {
    value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid HTTP header value: '{}'", value)))
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        log::debug!("GET {}", url);
        let transport_error = |e: reqwest::Error| Error::Transport {
            url: url.to_string(),
            source: Box::new(e),
        };
        let response = self.inner.get(url).send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(transport_error)?;
        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
