//! Notification detail view.
//!
//! The detail endpoint reports lifecycle timestamps the list endpoint does not
//! carry. They are derived from the record's status and creation time.

use super::model::{Channel, NotificationRecord, NotificationStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const DISPATCH_OFFSET_SECS: i64 = 60;
const FAILURE_OFFSET_SECS: i64 = 90;
const DELIVERY_OFFSET_SECS: i64 = 120;

/// Content produced by template rendering, keyed by channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderedContent {
    Email { subject: String, html_body: String },
    Sms { body: String },
    WhatsApp { body: String },
}

impl RenderedContent {
    /// Demo content shown on the detail page.
    pub fn for_template(channel: Channel, template: &str) -> Self {
        match channel {
            Channel::Email => RenderedContent::Email {
                subject: format!("{} - Demo Email", template),
                html_body: format!(
                    "<h1>Hello!</h1><p>This is a demo email for the {} template.</p>\
                     <p>Lorem ipsum dolor sit amet, consectetur adipiscing elit.</p>",
                    template
                ),
            },
            Channel::Sms => RenderedContent::Sms {
                body: format!("This is a demo SMS message for {}.", template),
            },
            Channel::WhatsApp => RenderedContent::WhatsApp {
                body: format!("This is a demo WhatsApp message for {}.", template),
            },
        }
    }

    /// Placeholder content carried by the `RenderedContentStored` event.
    pub fn placeholder(channel: Channel) -> Self {
        match channel {
            Channel::Email => RenderedContent::Email {
                subject: "Demo".to_string(),
                html_body: "Demo content".to_string(),
            },
            Channel::Sms => RenderedContent::Sms {
                body: "Demo SMS".to_string(),
            },
            Channel::WhatsApp => RenderedContent::WhatsApp {
                body: "Demo WhatsApp".to_string(),
            },
        }
    }
}

/// Full view of one notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDetail {
    pub notification_id: String,
    pub user_id: String,
    pub status: NotificationStatus,
    pub channel: Channel,
    pub destination: String,
    pub template: String,
    pub external_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub dispatched_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub failed_at: Option<DateTime<Utc>>,
    pub rendered_content: RenderedContent,
}

impl NotificationDetail {
    pub fn dispatch_time(record: &NotificationRecord) -> DateTime<Utc> {
        record.created_at + Duration::seconds(DISPATCH_OFFSET_SECS)
    }

    pub fn delivery_time(record: &NotificationRecord) -> DateTime<Utc> {
        record.created_at + Duration::seconds(DELIVERY_OFFSET_SECS)
    }

    pub fn failure_time(record: &NotificationRecord) -> DateTime<Utc> {
        record.created_at + Duration::seconds(FAILURE_OFFSET_SECS)
    }
}

impl From<&NotificationRecord> for NotificationDetail {
    fn from(record: &NotificationRecord) -> Self {
        let status = record.status;
        Self {
            notification_id: record.notification_id.clone(),
            user_id: record.user_id.clone(),
            status,
            channel: record.channel,
            destination: record.destination.clone(),
            template: record.template.clone(),
            external_id: record.external_id.clone(),
            created_at: record.created_at,
            updated_at: record.updated_at,
            dispatched_at: status
                .is_dispatched()
                .then(|| Self::dispatch_time(record)),
            delivered_at: (status == NotificationStatus::Delivered)
                .then(|| Self::delivery_time(record)),
            failed_at: (status == NotificationStatus::Failed).then(|| Self::failure_time(record)),
            rendered_content: RenderedContent::for_template(record.channel, &record.template),
        }
    }
}
