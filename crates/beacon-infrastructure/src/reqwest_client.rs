//! Network transport backed by `reqwest`.

use async_trait::async_trait;
use beacon_core::error::{BeaconError, Result};
use beacon_core::http::{HttpClient, HttpRequest, HttpResponse, Method};
use reqwest::Url;

/// Sends requests over the network.
///
/// Path-only URLs are resolved against `base_url`; without one they fail.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
    base_url: Option<Url>,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| BeaconError::config(format!("Invalid base URL '{}': {}", base_url, e)))?;
        self.base_url = Some(parsed);
        Ok(self)
    }

    fn resolve(&self, url: &str) -> Result<Url> {
        let resolved = match &self.base_url {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };
        resolved.map_err(|e| BeaconError::transport(format!("Invalid URL '{}': {}", url, e)))
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
        Method::Options => reqwest::Method::OPTIONS,
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = self.resolve(&request.url)?;
        tracing::debug!("[Http] {} {}", request.method, url);

        let mut builder = self.client.request(to_reqwest_method(request.method), url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| BeaconError::transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| BeaconError::transport(e.to_string()))?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_url_needs_base() {
        let client = ReqwestClient::new();
        assert!(client.resolve("/api/v1/notifications").is_err());

        let client = ReqwestClient::new()
            .with_base_url("https://admin.example.com")
            .unwrap();
        assert_eq!(
            client.resolve("/api/v1/notifications").unwrap().as_str(),
            "https://admin.example.com/api/v1/notifications"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        assert!(
            ReqwestClient::new()
                .with_base_url("not a url")
                .unwrap_err()
                .is_config()
        );
    }

    #[tokio::test]
    async fn test_unresolvable_url_fails_before_network() {
        let err = ReqwestClient::new()
            .send(HttpRequest::get("/relative/only"))
            .await
            .unwrap_err();
        assert!(matches!(err, BeaconError::Transport(_)));
    }
}
