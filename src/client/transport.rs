//! HTTP transport for Mason+JSON documents

use async_trait::async_trait;
use reqwest::{header, Method, Url};
use serde_json::Value;
use std::time::Duration;
use tellus_mason::{ApiConfig, MasonError};
use tracing::{debug, warn};

use super::error::{ClientError, ClientResult};

/// Sends requests against hrefs found in API documents.
///
/// Every call resolves to the parsed JSON body, `Value::Null` for an empty
/// one, or a [`ClientError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: Method, href: &str, body: Option<&Value>) -> ClientResult<Value>;

    async fn get(&self, href: &str) -> ClientResult<Value> {
        self.send(Method::GET, href, None).await
    }

    async fn delete(&self, href: &str) -> ClientResult<Value> {
        self.send(Method::DELETE, href, None).await
    }
}

pub struct HttpTransport {
    client: reqwest::Client,
    base: Url,
    config: ApiConfig,
    debug: bool,
}

impl HttpTransport {
    /// `debug` additionally logs full response bodies.
    pub fn new(config: ApiConfig, timeout: Duration, debug: bool) -> ClientResult<Self> {
        let base = Url::parse(&config.base_url).map_err(|e| ClientError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base,
            config,
            debug,
        })
    }

    /// Resolves an href against the configured base URL.
    pub fn url(&self, href: &str) -> ClientResult<Url> {
        self.base.join(href).map_err(|e| ClientError::InvalidUrl {
            url: href.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, href: &str, body: Option<&Value>) -> ClientResult<Value> {
        let url = self.url(href)?;
        debug!(%method, %url, "Sending request");

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(header::ACCEPT, self.config.mason_mime.as_str());
        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, self.config.json_mime.as_str())
                .body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if self.debug {
            debug!(%method, %url, status = status.as_u16(), body = %text, "Received response");
        }

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| MasonError::from_body(&body))
                .map(|error| error.to_string());
            warn!(%method, %url, status = status.as_u16(), ?message, "Received error");
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
