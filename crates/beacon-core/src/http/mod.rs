//! HTTP client abstraction.
//!
//! Consumers talk to the admin API through [`HttpClient`]. Which transport
//! sits behind it (a real network client, the mock router, or an intercepting
//! client that picks between them) is decided by whoever builds the consumer.

mod client;
mod model;

pub use client::HttpClient;
pub use model::{CONTENT_TYPE, HttpRequest, HttpResponse, JSON_CONTENT_TYPE, Method};
