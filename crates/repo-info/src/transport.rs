// crates/repo-info/src/transport.rs
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{ClientError, Result};

/// A GET request: target URL plus headers in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs HTTP GETs for the client.
pub trait Transport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).get(request)
    }
}

/// Blocking transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build().map_err(|e| ClientError::Http {
            url: String::new(),
            details: format!("failed to build HTTP client: {e}"),
        })?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let http_error = |e: reqwest::Error| ClientError::Http { url: request.url.clone(), details: e.to_string() };

        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().map_err(http_error)?;
        let status = response.status().as_u16();
        debug!(url = %request.url, status, "response received");
        let body = response.text().map_err(http_error)?;
        Ok(HttpResponse { status, body })
    }
}
