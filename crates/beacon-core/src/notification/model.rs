//! Notification records as the delivery service stores them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Delivery medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Channel {
    Email,
    #[serde(rename = "SMS")]
    #[strum(serialize = "SMS")]
    Sms,
    WhatsApp,
}

impl Channel {
    /// Lowercase channel name used inside event payloads.
    pub fn as_event_str(&self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::WhatsApp => "whatsapp",
        }
    }
}

/// Lifecycle stage of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    Delivered,
    Sent,
    Rendered,
    Failed,
    Requested,
}

impl NotificationStatus {
    /// Whether the notification has left the service.
    pub fn is_dispatched(&self) -> bool {
        !matches!(self, Self::Requested | Self::Rendered)
    }
}

/// A notification as listed by `/api/v1/notifications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub notification_id: String,
    pub user_id: String,
    pub channel: Channel,
    pub destination: String,
    pub template: String,
    pub status: NotificationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Id assigned by the downstream provider, if any
    pub external_id: Option<String>,
}

/// One cursor-paginated page of notifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPage {
    pub data: Vec<NotificationRecord>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_channel_wire_names() {
        let names: Vec<String> = Channel::iter()
            .map(|c| serde_json::to_value(c).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Email", "SMS", "WhatsApp"]);
        assert_eq!(Channel::Sms.to_string(), "SMS");
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(NotificationStatus::Delivered).unwrap(),
            "DELIVERED"
        );
        let parsed: NotificationStatus = serde_json::from_str("\"REQUESTED\"").unwrap();
        assert_eq!(parsed, NotificationStatus::Requested);
        assert_eq!(NotificationStatus::Rendered.to_string(), "RENDERED");
    }

    #[test]
    fn test_is_dispatched() {
        assert!(!NotificationStatus::Requested.is_dispatched());
        assert!(!NotificationStatus::Rendered.is_dispatched());
        assert!(NotificationStatus::Sent.is_dispatched());
        assert!(NotificationStatus::Delivered.is_dispatched());
        assert!(NotificationStatus::Failed.is_dispatched());
    }
}
