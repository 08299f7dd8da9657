//! Contact message domain module.

mod model;

pub use model::{ContactCategory, ContactMessage};
