//! Backend HTTP client and response envelope unwrapping.
//!
//! Every network interaction with the portfolio backend goes through
//! [`BackendClient`]. Read paths collapse all failure modes (transport
//! errors, non-success statuses, unparseable bodies) into `None` so the
//! rest of the crate only ever has to handle "payload or no update".

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::CoreConfig;
use crate::constants::ENVELOPE_KEY;

/// HTTP client bound to the configured backend origin.
#[derive(Debug, Clone)]
pub struct BackendClient {
    api_url: String,
    http: Client,
}

/// Extract the payload from a parsed response body.
///
/// The backend sometimes wraps the real payload as `{ "d": payload }`
/// and sometimes returns it bare; both shapes must map to the same
/// result.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key(ENVELOPE_KEY) => {
            map.remove(ENVELOPE_KEY).unwrap_or(Value::Null)
        }
        other => other,
    }
}

impl BackendClient {
    pub fn new(config: &CoreConfig) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            api_url: config.api_url.clone(),
            http,
        })
    }

    /// Client with an explicit request timeout, for callers that manage
    /// their own deadline policy.
    pub fn with_timeout(config: &CoreConfig, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_url: config.api_url.clone(),
            http,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_url, endpoint)
    }

    /// GET an endpoint and unwrap the payload.
    ///
    /// This is the sole network-failure boundary for read paths: any
    /// transport error, non-success status, or unparseable body comes
    /// back as `None` (logged, never raised).
    pub async fn fetch_payload(&self, endpoint: &str) -> Option<Value> {
        let response = match self.http.get(self.url(endpoint)).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(endpoint, error = %err, "fetch failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(endpoint, status = %response.status(), "fetch returned non-success status");
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => Some(unwrap_envelope(body)),
            Err(err) => {
                tracing::warn!(endpoint, error = %err, "fetch body was not valid JSON");
                None
            }
        }
    }

    /// POST credentials to the auth endpoint and return the parsed body.
    ///
    /// Unlike the read paths, auth does not collapse failures: the
    /// session layer needs to tell a rejected password apart from an
    /// unreachable backend.
    pub async fn authenticate(&self, password: &str) -> Result<Value, reqwest::Error> {
        self.http
            .post(self.url(crate::constants::endpoints::AUTH))
            .json(&serde_json::json!({ "password": password }))
            .send()
            .await?
            .json::<Value>()
            .await
    }

    /// POST a JSON body and unwrap the payload, with the same collapsed
    /// failure semantics as [`fetch_payload`](Self::fetch_payload).
    pub async fn post_payload(&self, endpoint: &str, body: &Value) -> Option<Value> {
        let response = match self.http.post(self.url(endpoint)).json(body).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(endpoint, error = %err, "post failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(endpoint, status = %response.status(), "post returned non-success status");
            return None;
        }

        match response.json::<Value>().await {
            Ok(body) => Some(unwrap_envelope(body)),
            Err(err) => {
                tracing::warn!(endpoint, error = %err, "post body was not valid JSON");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> BackendClient {
        BackendClient::new(&CoreConfig::new(server.base_url())).unwrap()
    }

    #[test]
    fn envelope_key_is_unwrapped() {
        let wrapped = json!({ "statuscode": 1, "d": [1, 2, 3] });
        assert_eq!(unwrap_envelope(wrapped), json!([1, 2, 3]));
    }

    #[test]
    fn bare_bodies_pass_through() {
        let bare = json!([{ "name": "Rust" }]);
        assert_eq!(unwrap_envelope(bare.clone()), bare);
    }

    #[tokio::test]
    async fn wrapped_and_bare_responses_yield_identical_payloads() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/skill");
            then.status(200).json_body(json!({ "d": [{ "name": "Rust" }] }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/project");
            then.status(200).json_body(json!([{ "name": "Rust" }]));
        });

        let client = client_for(&server);
        let wrapped = client.fetch_payload("/skill").await;
        let bare = client.fetch_payload("/project").await;
        assert_eq!(wrapped, bare);
        assert_eq!(wrapped, Some(json!([{ "name": "Rust" }])));
    }

    #[tokio::test]
    async fn server_errors_collapse_to_none() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/skill");
            then.status(500);
        });

        let client = client_for(&server);
        assert_eq!(client.fetch_payload("/skill").await, None);
    }

    #[tokio::test]
    async fn unparseable_bodies_collapse_to_none() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/intro");
            then.status(200).body("not json at all");
        });

        let client = client_for(&server);
        assert_eq!(client.fetch_payload("/intro").await, None);
    }

    #[tokio::test]
    async fn unreachable_backend_collapses_to_none() {
        // Nothing listens on this port.
        let client = BackendClient::new(&CoreConfig::new("http://127.0.0.1:1")).unwrap();
        assert_eq!(client.fetch_payload("/skill").await, None);
    }
}
