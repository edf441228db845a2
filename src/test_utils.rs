//! Test doubles shared by unit tests
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, StatusCode};
use std::sync::Mutex;
use url::Url;

use crate::errors::{Error, Result};
use crate::transport::{Response, Transport};

pub const STUB_BASE_URL: &str = "https://api.example.com/";

pub fn stub_response(status: StatusCode) -> Response {
    Response {
        status,
        url: Url::parse(STUB_BASE_URL).unwrap(),
        headers: HeaderMap::new(),
    }
}

/// Transport returning one canned reply and recording what was sent
pub struct StubTransport {
    base_url: Url,
    reply: Mutex<Option<Result<(Response, Vec<u8>)>>>,
    requests: Mutex<Vec<(Method, Url)>>,
}

impl StubTransport {
    fn new(base_url: &str, reply: Result<(Response, Vec<u8>)>) -> Self {
        Self {
            base_url: Url::parse(base_url).unwrap(),
            reply: Mutex::new(Some(reply)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_body(status: StatusCode, body: &str) -> Self {
        Self::new(
            STUB_BASE_URL,
            Ok((stub_response(status), body.as_bytes().to_vec())),
        )
    }

    pub fn with_error(err: Error) -> Self {
        Self::new(STUB_BASE_URL, Err(err))
    }

    /// Base URL that cannot have paths joined onto it
    pub fn unbuildable() -> Self {
        Self::new(
            "mailto:nobody@example.com",
            Ok((stub_response(StatusCode::OK), Vec::new())),
        )
    }

    /// Query string attached to every built request
    pub fn with_base_query(mut self, query: &str) -> Self {
        self.base_url.set_query(Some(query));
        self
    }

    pub fn requests(&self) -> Vec<(Method, Url)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    fn new_request(
        &self,
        method: Method,
        path: &str,
        _body: Option<&serde_json::Value>,
    ) -> Result<Request> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| Error::request_build(path, e))?;
        url.set_query(self.base_url.query());
        Ok(Request::new(method, url))
    }

    async fn send(&self, request: Request) -> Result<(Response, Vec<u8>)> {
        self.requests
            .lock()
            .unwrap()
            .push((request.method().clone(), request.url().clone()));

        self.reply
            .lock()
            .unwrap()
            .take()
            .expect("stub transport called more than once")
    }
}
