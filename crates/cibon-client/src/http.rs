//! Thin HTTP client wrapper
//!
//! Issues requests with a method, path, optional JSON entity and headers and
//! returns a [`Response`] exposing status, headers and the parsed entity.
//! Paths may be absolute URLs (as found in HAL links) or relative to the API
//! root.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use url::Url;

use cibon_core::prelude::*;
use cibon_core::Links;

pub use reqwest::Method;

/// Media type for HAL representations
pub const HAL_JSON: &str = "application/hal+json";
/// Media type for JSON schema documents
pub const SCHEMA_JSON: &str = "application/schema+json";
/// Media type for request entities
pub const APPLICATION_JSON: &str = "application/json";

/// An outgoing request
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub entity: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            entity: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST a JSON entity (`Content-Type: application/json`)
    pub fn post(path: impl Into<String>, entity: Value) -> Self {
        Self::new(Method::POST, path).json(entity)
    }

    /// PUT a JSON entity (`Content-Type: application/json`)
    pub fn put(path: impl Into<String>, entity: Value) -> Self {
        Self::new(Method::PUT, path).json(entity)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn accept(self, media_type: &str) -> Self {
        self.header(ACCEPT.as_str(), media_type)
    }

    fn json(mut self, entity: Value) -> Self {
        self.entity = Some(entity);
        self.header(CONTENT_TYPE.as_str(), APPLICATION_JSON)
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

/// A completed response with a parsed entity
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The URL that was requested
    pub url: String,
    pub status: u16,
    /// Header names are lower-cased
    pub headers: BTreeMap<String, String>,
    /// Parsed JSON body, `Value::Null` when the body was empty
    pub entity: Value,
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The concurrency token sent by the server, if any
    pub fn etag(&self) -> Option<String> {
        self.header("etag").map(String::from)
    }

    pub fn links(&self) -> Links {
        Links::from_entity(&self.entity)
    }
}

/// HTTP client bound to an API root
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    root: Url,
}

impl HttpClient {
    /// Create a client for the API rooted at `root`.
    ///
    /// Fails with [`Error::InvalidUrl`] if `root` is not an absolute URL.
    pub fn new(root: &str, timeout: Duration) -> Result<Self> {
        let root = Url::parse(root).map_err(|e| Error::invalid_url(root, e.to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(Self { client, root })
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Resolve a path against the API root. Absolute URLs pass through.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        if path.is_empty() {
            return Ok(self.root.clone());
        }
        match Url::parse(path) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .root
                .join(path)
                .map_err(|e| Error::invalid_url(path, e.to_string())),
            Err(e) => Err(Error::invalid_url(path, e.to_string())),
        }
    }

    /// Send a request.
    ///
    /// Statuses outside 2xx are errors: 412 becomes
    /// [`Error::PreconditionFailed`], anything else [`Error::Status`].
    pub async fn send(&self, request: Request) -> Result<Response> {
        let url = self.resolve(&request.path)?;
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), url.clone());
        if !request.has_header(ACCEPT.as_str()) {
            builder = builder.header(ACCEPT, HAL_JSON);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(entity) = &request.entity {
            builder = builder.json(entity);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::http(format!("{} {}: {}", request.method, url, e)))?;

        let status = response.status().as_u16();
        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_ascii_lowercase(), value.to_string());
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::http(format!("reading body of {}: {}", url, e)))?;

        if !(200..300).contains(&status) {
            debug!(
                "{} {} -> {} ({} byte body)",
                request.method,
                url,
                status,
                body.len()
            );
            return Err(match status {
                412 => Error::precondition_failed(url.as_str()),
                _ => Error::status(status, url.as_str()),
            });
        }

        let entity = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Null
        } else {
            serde_json::from_slice(&body)
                .map_err(|e| Error::malformed(url.as_str(), e.to_string()))?
        };

        trace!("{} {} -> {}", request.method, url, status);

        Ok(Response {
            url: url.to_string(),
            status,
            headers,
            entity,
        })
    }
}
