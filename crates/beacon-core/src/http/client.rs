use super::model::{HttpRequest, HttpResponse};
use crate::error::Result;
use async_trait::async_trait;

/// Sends HTTP requests and returns buffered responses.
///
/// Non-success statuses are returned as ordinary responses; `Err` is reserved
/// for failures to produce a response at all.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}
