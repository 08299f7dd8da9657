//! Client that answers admin API calls locally.
//!
//! Requests whose URL contains one of [`INTERCEPTED_PATHS`] go to the mock
//! router; everything else is forwarded to the fallback transport. Consumers
//! receive this client in place of a real one, so nothing process-wide is
//! patched.

use crate::mock_api::MockApiRouter;
use async_trait::async_trait;
use beacon_core::error::Result;
use beacon_core::http::{HttpClient, HttpRequest, HttpResponse};
use std::sync::Arc;

/// URL fragments served by the mock router: the admin API and the access
/// proxy's identity endpoints.
pub const INTERCEPTED_PATHS: &[&str] = &["/api/v1/", "/cdn-cgi/access/"];

pub fn is_intercepted(url: &str) -> bool {
    INTERCEPTED_PATHS.iter().any(|fragment| url.contains(fragment))
}

pub struct InterceptingClient {
    router: Arc<MockApiRouter>,
    fallback: Arc<dyn HttpClient>,
}

impl InterceptingClient {
    pub fn new(router: Arc<MockApiRouter>, fallback: Arc<dyn HttpClient>) -> Self {
        tracing::info!("[Mock API] Interception enabled - all API calls will be answered locally");
        Self { router, fallback }
    }

    pub fn router(&self) -> &Arc<MockApiRouter> {
        &self.router
    }
}

#[async_trait]
impl HttpClient for InterceptingClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        if is_intercepted(&request.url) {
            self.router.handle(&request).await
        } else {
            self.fallback.send(request).await
        }
    }
}
