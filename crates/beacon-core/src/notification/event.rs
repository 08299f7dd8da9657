//! Synthetic event timeline for a notification.
//!
//! The delivery service is event sourced; the dashboard renders an aggregate's
//! events as a timeline. The timeline here is a pure function of the record:
//! which events exist depends on the status, and each timestamp is a fixed
//! offset from `created_at`.

use super::detail::{NotificationDetail, RenderedContent};
use super::model::{Channel, NotificationRecord, NotificationStatus};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Map;

pub const FALLBACK_EXTERNAL_ID: &str = "ext-demo-123";
pub const FAILURE_REASON: &str = "Demo error: Service temporarily unavailable";

const EVENT_VERSION: u32 = 1;
const RENDER_OFFSET_SECS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    Email,
    Phone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "type")]
    pub kind: DestinationKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateData {
    #[serde(rename = "type")]
    pub template: String,
    pub data: Map<String, serde_json::Value>,
}

/// Domain events of the notification aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventPayload {
    NotificationRequested {
        notification_id: String,
        channel: String,
        destination: Destination,
        template_data: TemplateData,
        metadata: Map<String, serde_json::Value>,
    },
    RenderedContentStored {
        notification_id: String,
        rendered_content: RenderedContent,
    },
    NotificationDispatched {
        notification_id: String,
        external_id: String,
    },
    NotificationDelivered {
        notification_id: String,
    },
    NotificationFailed {
        notification_id: String,
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub aggregate_id: String,
    pub sequence: u32,
    pub event_version: u32,
    pub timestamp: DateTime<Utc>,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event: EventPayload,
    pub metadata: EventMetadata,
}

impl Event {
    fn new(
        record: &NotificationRecord,
        sequence: u32,
        timestamp: DateTime<Utc>,
        event: EventPayload,
    ) -> Self {
        Self {
            event,
            metadata: EventMetadata {
                aggregate_id: record.notification_id.clone(),
                sequence,
                event_version: EVENT_VERSION,
                timestamp,
                user_id: record.user_id.clone(),
            },
        }
    }

    /// Builds the event timeline of a record, oldest first.
    ///
    /// `NotificationFailed` reuses sequence 3, the slot `NotificationDispatched`
    /// takes on the success path. The two never appear in the same timeline.
    pub fn timeline(record: &NotificationRecord) -> Vec<Event> {
        let id = &record.notification_id;
        let status = record.status;

        let destination_kind = match record.channel {
            Channel::Email => DestinationKind::Email,
            Channel::Sms | Channel::WhatsApp => DestinationKind::Phone,
        };

        let mut events = vec![Event::new(
            record,
            1,
            record.created_at,
            EventPayload::NotificationRequested {
                notification_id: id.clone(),
                channel: record.channel.as_event_str().to_string(),
                destination: Destination {
                    kind: destination_kind,
                    value: record.destination.clone(),
                },
                template_data: TemplateData {
                    template: record.template.clone(),
                    data: Map::new(),
                },
                metadata: Map::new(),
            },
        )];

        if status != NotificationStatus::Requested {
            events.push(Event::new(
                record,
                2,
                record.created_at + Duration::seconds(RENDER_OFFSET_SECS),
                EventPayload::RenderedContentStored {
                    notification_id: id.clone(),
                    rendered_content: RenderedContent::placeholder(record.channel),
                },
            ));
        }

        if matches!(
            status,
            NotificationStatus::Sent | NotificationStatus::Delivered
        ) {
            events.push(Event::new(
                record,
                3,
                NotificationDetail::dispatch_time(record),
                EventPayload::NotificationDispatched {
                    notification_id: id.clone(),
                    external_id: record
                        .external_id
                        .clone()
                        .unwrap_or_else(|| FALLBACK_EXTERNAL_ID.to_string()),
                },
            ));
        }

        if status == NotificationStatus::Delivered {
            events.push(Event::new(
                record,
                4,
                NotificationDetail::delivery_time(record),
                EventPayload::NotificationDelivered {
                    notification_id: id.clone(),
                },
            ));
        }

        if status == NotificationStatus::Failed {
            events.push(Event::new(
                record,
                3,
                NotificationDetail::failure_time(record),
                EventPayload::NotificationFailed {
                    notification_id: id.clone(),
                    error: FAILURE_REASON.to_string(),
                },
            ));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::test_support::record;

    fn sequences(events: &[Event]) -> Vec<u32> {
        events.iter().map(|e| e.metadata.sequence).collect()
    }

    #[test]
    fn test_timeline_lengths_by_status() {
        let cases = [
            (NotificationStatus::Requested, 1),
            (NotificationStatus::Rendered, 2),
            (NotificationStatus::Sent, 3),
            (NotificationStatus::Delivered, 4),
            (NotificationStatus::Failed, 3),
        ];
        for (status, expected) in cases {
            let events = Event::timeline(&record(status, Channel::Email));
            assert_eq!(events.len(), expected, "status {status}");
        }
    }

    #[test]
    fn test_delivered_sequence_is_contiguous() {
        let events = Event::timeline(&record(NotificationStatus::Delivered, Channel::Email));
        assert_eq!(sequences(&events), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_failed_event_shares_sequence_three() {
        let events = Event::timeline(&record(NotificationStatus::Failed, Channel::Sms));
        assert_eq!(sequences(&events), vec![1, 2, 3]);
        match &events[2].event {
            EventPayload::NotificationFailed { error, .. } => assert_eq!(error, FAILURE_REASON),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_timestamps_offset_from_creation() {
        let rec = record(NotificationStatus::Delivered, Channel::Email);
        let offsets: Vec<i64> = Event::timeline(&rec)
            .iter()
            .map(|e| (e.metadata.timestamp - rec.created_at).num_seconds())
            .collect();
        assert_eq!(offsets, vec![0, 30, 60, 120]);
    }

    #[test]
    fn test_dispatch_falls_back_to_demo_external_id() {
        let mut rec = record(NotificationStatus::Sent, Channel::WhatsApp);
        rec.external_id = None;
        let events = Event::timeline(&rec);
        match &events[2].event {
            EventPayload::NotificationDispatched { external_id, .. } => {
                assert_eq!(external_id, FALLBACK_EXTERNAL_ID)
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_whatsapp_rendered_content_uses_whatsapp_variant() {
        let events = Event::timeline(&record(NotificationStatus::Rendered, Channel::WhatsApp));
        match &events[1].event {
            EventPayload::RenderedContentStored {
                rendered_content, ..
            } => assert_eq!(
                rendered_content,
                &RenderedContent::WhatsApp {
                    body: "Demo WhatsApp".to_string()
                }
            ),
            other => panic!("unexpected event: {other:?}"),
        }

        let value = serde_json::to_value(&events[1]).unwrap();
        let stored = &value["event"]["RenderedContentStored"]["rendered_content"];
        assert_eq!(stored["WhatsApp"]["body"], "Demo WhatsApp");
        assert!(stored.get("Sms").is_none());
    }

    #[test]
    fn test_requested_event_wire_shape() {
        let events = Event::timeline(&record(NotificationStatus::Requested, Channel::Sms));
        let value = serde_json::to_value(&events[0]).unwrap();
        let requested = &value["event"]["NotificationRequested"];
        assert_eq!(requested["channel"], "sms");
        assert_eq!(requested["destination"]["type"], "phone");
        assert_eq!(requested["template_data"]["type"], "PasswordReset");
        assert_eq!(value["metadata"]["aggregate_id"], "notif-1000");
        assert_eq!(value["metadata"]["event_version"], 1);
    }
}
