//! Notification domain module.
//!
//! # Module Structure
//!
//! - `model`: stored notification records and their enums
//! - `detail`: the detail view derived from a record
//! - `event`: the synthetic event timeline derived from a record

mod detail;
mod event;
mod model;

pub use detail::{NotificationDetail, RenderedContent};
pub use event::{
    Destination, DestinationKind, Event, EventMetadata, EventPayload, TemplateData,
    FALLBACK_EXTERNAL_ID, FAILURE_REASON,
};
pub use model::{Channel, NotificationPage, NotificationRecord, NotificationStatus};
