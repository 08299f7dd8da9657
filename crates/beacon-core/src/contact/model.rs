//! Messages submitted through the public contact form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactCategory {
    Error,
    Idea,
    Testimonial,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub category: ContactCategory,
    pub message: String,
    pub received_at: DateTime<Utc>,
    /// Form-specific fields, e.g. `rating` and `consent` on testimonials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, String>>,
}

impl ContactMessage {
    /// Testimonial star rating, if present and numeric.
    pub fn rating(&self) -> Option<u8> {
        self.data.as_ref()?.get("rating")?.parse().ok()
    }

    /// Whether the sender agreed to publication of a testimonial.
    pub fn publication_consent(&self) -> bool {
        self.data
            .as_ref()
            .and_then(|data| data.get("consent"))
            .is_some_and(|value| value == "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn message(data: Option<BTreeMap<String, String>>) -> ContactMessage {
        ContactMessage {
            id: "msg-2000".to_string(),
            name: "Casey Brown".to_string(),
            email: "casey.brown@example.com".to_string(),
            category: ContactCategory::Testimonial,
            message: "Outstanding service!".to_string(),
            received_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap(),
            data,
        }
    }

    #[test]
    fn test_testimonial_fields() {
        let data = BTreeMap::from([
            ("rating".to_string(), "5".to_string()),
            ("consent".to_string(), "true".to_string()),
        ]);
        let msg = message(Some(data));
        assert_eq!(msg.rating(), Some(5));
        assert!(msg.publication_consent());
    }

    #[test]
    fn test_missing_data_is_omitted_on_the_wire() {
        let msg = message(None);
        let value = serde_json::to_value(&msg).unwrap();
        assert!(value.get("data").is_none());
        assert_eq!(value["category"], "TESTIMONIAL");
        assert_eq!(msg.rating(), None);
        assert!(!msg.publication_consent());
    }
}
