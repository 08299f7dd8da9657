//! Infrastructure layer for Beacon.
//!
//! Concrete implementations behind the domain traits: the synthetic dataset,
//! the mock API router, HTTP clients and the mock identity provider, plus
//! configuration loading.

pub mod config_service;
pub mod dataset;
pub mod intercepting_client;
pub mod mock_api;
pub mod mock_identity_provider;
pub mod paths;
pub mod reqwest_client;

pub use crate::config_service::ConfigService;
pub use crate::dataset::MockDataset;
pub use crate::intercepting_client::InterceptingClient;
pub use crate::mock_api::MockApiRouter;
pub use crate::mock_identity_provider::MockIdentityProvider;
pub use crate::reqwest_client::ReqwestClient;
