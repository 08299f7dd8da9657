//! Application layer for Beacon.
//!
//! Use cases a dashboard runs against the admin API and the identity
//! provider. Both are reached through domain traits, so the same code runs
//! against the mock harness and a real deployment.

pub mod dashboard_service;
pub mod identity_usecase;

pub use dashboard_service::{CommandAck, DashboardOverview, DashboardService};
pub use identity_usecase::IdentityUseCase;
