//! Identity domain module.
//!
//! # Module Structure
//!
//! - `model`: the demo identity and the provider's observable state
//! - `service`: identity source and provider traits
//!
//! # Usage
//!
//! ```ignore
//! use beacon_core::identity::{Identity, IdentityProvider, IdentityState};
//! ```

mod model;
mod service;

// Re-export public API
pub use model::{Identity, IdentitySnapshot, IdentityState};
pub use service::{FixedIdentitySource, IdentityProvider, IdentitySource};
