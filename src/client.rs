/// Shared request/response pipeline for the API bindings
///
/// Endpoint modules build a request with [`Client::new_request`], adjust it,
/// and run it through [`Client::execute`], which sends it over the
/// [`Transport`] and decodes the JSON body.
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::errors::{Error, Result};
use crate::transport::{HttpTransport, Response, Transport};

pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Client talking HTTP to the API described by `config`
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Request> {
        self.transport.new_request(method, path, body)
    }

    /// Send `request` and decode its body as `D`
    ///
    /// An empty body or a JSON `null` decodes to `None`.
    pub async fn execute<D>(&self, request: Request) -> Result<(Option<D>, Response)>
    where
        D: DeserializeOwned,
    {
        let (response, body) = self.transport.send(request).await?;
        decode_body(response, &body)
    }
}

fn decode_body<D>(response: Response, body: &[u8]) -> Result<(Option<D>, Response)>
where
    D: DeserializeOwned,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok((None, response));
    }

    match serde_json::from_slice::<Option<D>>(body) {
        Ok(value) => Ok((value, response)),
        Err(source) => Err(Error::Decode { response, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{stub_response, StubTransport};
    use reqwest::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Account {
        uid: String,
    }

    #[test]
    fn test_decode_body_variants() {
        let (value, _) =
            decode_body::<Account>(stub_response(StatusCode::OK), br#"{"uid":"u-1"}"#).unwrap();
        assert_eq!(value, Some(Account { uid: "u-1".to_string() }));

        let (value, _) = decode_body::<Account>(stub_response(StatusCode::OK), b"null").unwrap();
        assert!(value.is_none());

        let (value, response) =
            decode_body::<Account>(stub_response(StatusCode::NO_CONTENT), b" \n").unwrap();
        assert!(value.is_none());
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_decode_body_error_keeps_metadata() {
        let err = decode_body::<Account>(stub_response(StatusCode::OK), b"<html>").unwrap_err();
        assert!(matches!(err, Error::Decode { ref response, .. } if response.status == StatusCode::OK));
    }

    #[tokio::test]
    async fn test_execute_sends_built_request() {
        let client = Client::with_transport(StubTransport::with_body(
            StatusCode::OK,
            r#"{"uid":"u-2"}"#,
        ));

        let request = client
            .new_request(Method::GET, "/api/v1/accounts", None)
            .unwrap();
        let (account, response) = client.execute::<Account>(request).await.unwrap();

        assert_eq!(account.map(|a| a.uid), Some("u-2".to_string()));
        assert!(response.is_success());
        assert_eq!(client.transport().requests()[0].1.path(), "/api/v1/accounts");
    }

    #[test]
    fn test_new_with_config() {
        let config = Config {
            base_url: Some("http://127.0.0.1:1/".to_string()),
            ..Config::default()
        };
        let client = Client::new(&config).unwrap();
        assert_eq!(client.transport().base_url().as_str(), "http://127.0.0.1:1/");
    }
}
