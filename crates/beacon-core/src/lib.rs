//! Domain layer for Beacon.
//!
//! Models of the notification-delivery admin API, the navigation registry and
//! the identity lifecycle, plus the `HttpClient` seam consumers depend on.

pub mod activity;
pub mod config;
pub mod contact;
pub mod error;
pub mod http;
pub mod identity;
pub mod navigation;
pub mod notification;

// Re-export common error type
pub use error::{BeaconError, Result};
