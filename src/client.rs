//! RESTCONF HTTP client
//!
//! Issues authenticated requests against a device's RESTCONF API and hands
//! the raw HTTP response back to the caller.

use std::time::Duration;

use reqwest::Response;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::media_types::{MediaType, resource};
use crate::types::InterfaceRequest;

/// Client for a single RESTCONF device
#[derive(Clone)]
pub struct Client {
    /// Underlying HTTP transport
    http: reqwest::Client,
    /// Device base URL, as given
    base_url: String,
    username: String,
    password: String,
    /// Applied to every request
    timeout: Duration,
}

impl Client {
    /// Create a new client. Performs no I/O.
    pub fn new(
        timeout: Duration,
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            username: username.into(),
            password: password.into(),
            timeout,
        }
    }

    /// Create a client from loaded connection settings
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.timeout(),
            config.url.clone(),
            config.username.clone(),
            config.password.clone(),
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Join a RESTCONF resource path onto the base URL
    pub fn resource_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Create a loopback interface on the device
    ///
    /// POSTs `config` to the `ietf-interfaces:interfaces` resource. The
    /// response is returned whatever its status; only serialization and
    /// transport failures are errors.
    pub async fn create_loopback_interface(&self, config: &InterfaceRequest) -> Result<Response> {
        let body = config.to_json()?;
        self.post_yang_data(resource::INTERFACES, body).await
    }

    async fn post_yang_data(&self, path: &str, body: Vec<u8>) -> Result<Response> {
        let url = self.resource_url(path);
        debug!(url = %url, bytes = body.len(), "RESTCONF POST");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, MediaType::YangDataJson.as_str())
            .header(ACCEPT, MediaType::YangDataJson.as_str())
            .timeout(self.timeout)
            .body(body)
            .send()
            .await?;

        debug!(url = %url, status = %response.status(), "RESTCONF response");
        Ok(response)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
