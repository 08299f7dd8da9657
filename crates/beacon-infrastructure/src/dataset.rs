//! Synthetic dataset for the mock admin API.
//!
//! Generated once from a caller-supplied random source and treated as
//! read-only afterwards. Seeding the source (`StdRng::seed_from_u64`) makes the
//! whole dataset reproducible.

use beacon_core::activity::ActivityPoint;
use beacon_core::config::MockApiConfig;
use beacon_core::contact::{ContactCategory, ContactMessage};
use beacon_core::notification::{Channel, NotificationRecord, NotificationStatus};
use chrono::{DateTime, Days, Duration, NaiveTime, SubsecRound, Utc};
use rand::Rng;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const NOTIFICATION_WINDOW_DAYS: i64 = 90;
const CONTACT_WINDOW_DAYS: i64 = 60;
const EXTERNAL_ID_PROBABILITY: f64 = 0.7;
const CONSENT_PROBABILITY: f64 = 0.7;
/// Wire timestamps carry millisecond precision.
const TIMESTAMP_DIGITS: u16 = 3;

const TEMPLATES: &[&str] = &[
    "WelcomeEmail",
    "PasswordReset",
    "OrderConfirmation",
    "ShippingUpdate",
    "Newsletter",
];

const TESTIMONIAL_MESSAGES: &[&str] = &[
    "This product has completely transformed how we handle our workflows. The interface is intuitive and the features are exactly what we needed!",
    "Outstanding service! The team was incredibly responsive and helped us get set up in no time. Highly recommend!",
    "I've been using this for 6 months now and couldn't be happier. The reliability and performance have exceeded our expectations.",
    "Best decision we made this year. The ROI has been fantastic and our team loves using it every day.",
    "Excellent platform! Very user-friendly and the customer support is top-notch. Five stars all the way!",
];

const ERROR_MESSAGES: &[&str] = &[
    "I'm encountering an error when trying to export data. The download button doesn't seem to be working.",
    "There's a bug in the notification system - I'm not receiving email alerts even though they're enabled.",
    "The dashboard layout breaks on mobile devices. Some buttons are not accessible.",
];

const IDEA_MESSAGES: &[&str] = &[
    "It would be great to have a dark mode option for the dashboard.",
    "Could you add bulk import functionality? Would save us a lot of time.",
    "A mobile app would be amazing! We often need to check things on the go.",
];

const OTHER_MESSAGES: &[&str] = &[
    "Just wanted to say thank you for creating such a great product!",
    "Do you have any plans for adding integrations with other tools?",
    "Is there a way to customize the report templates?",
];

const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Casey", "Morgan", "Taylor", "Riley", "Sam", "Drew", "Jamie", "Quinn",
];

const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.gen_range(0..items.len())]
}

fn phrases(category: ContactCategory) -> &'static [&'static str] {
    match category {
        ContactCategory::Testimonial => TESTIMONIAL_MESSAGES,
        ContactCategory::Error => ERROR_MESSAGES,
        ContactCategory::Idea => IDEA_MESSAGES,
        ContactCategory::Other => OTHER_MESSAGES,
    }
}

/// In-memory collections served by the mock router.
#[derive(Debug, Clone, PartialEq)]
pub struct MockDataset {
    /// Sorted by `updated_at`, newest first
    pub notifications: Vec<NotificationRecord>,
    /// Sorted by `received_at`, newest first
    pub contact_messages: Vec<ContactMessage>,
}

impl MockDataset {
    /// Generates both collections with counts drawn from the configured bounds.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        now: DateTime<Utc>,
        config: &MockApiConfig,
    ) -> Self {
        let notification_count =
            rng.gen_range(config.notifications_min..=config.notifications_max);
        let contact_count =
            rng.gen_range(config.contact_messages_min..=config.contact_messages_max);

        Self {
            notifications: generate_notifications(rng, now, notification_count),
            contact_messages: generate_contact_messages(rng, now, contact_count),
        }
    }

    pub fn find_notification(&self, notification_id: &str) -> Option<&NotificationRecord> {
        self.notifications
            .iter()
            .find(|n| n.notification_id == notification_id)
    }
}

pub fn generate_notifications<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<NotificationRecord> {
    let now = now.trunc_subsecs(TIMESTAMP_DIGITS);
    let channels: Vec<Channel> = Channel::iter().collect();
    let statuses: Vec<NotificationStatus> = NotificationStatus::iter().collect();

    let mut notifications: Vec<NotificationRecord> = (0..count)
        .map(|i| {
            let created_at =
                now - Duration::milliseconds(rng.gen_range(0..NOTIFICATION_WINDOW_DAYS * DAY_MS));
            let updated_at = created_at + Duration::milliseconds(rng.gen_range(0..DAY_MS));

            NotificationRecord {
                notification_id: format!("notif-{}", 1000 + i),
                user_id: format!("user-{}", rng.gen_range(0..100)),
                channel: pick(rng, &channels),
                destination: format!("user{}@example.com", rng.gen_range(0..1000)),
                template: pick(rng, TEMPLATES).to_string(),
                status: pick(rng, &statuses),
                created_at,
                updated_at,
                external_id: rng
                    .gen_bool(EXTERNAL_ID_PROBABILITY)
                    .then(|| format!("ext-{}", rng.gen_range(0..10000))),
            }
        })
        .collect();

    notifications.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    notifications
}

pub fn generate_contact_messages<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<ContactMessage> {
    let now = now.trunc_subsecs(TIMESTAMP_DIGITS);
    let categories: Vec<ContactCategory> = ContactCategory::iter().collect();

    let mut messages: Vec<ContactMessage> = (0..count)
        .map(|i| {
            let received_at =
                now - Duration::milliseconds(rng.gen_range(0..CONTACT_WINDOW_DAYS * DAY_MS));
            let category = pick(rng, &categories);
            let message = pick(rng, phrases(category)).to_string();

            let data = (category == ContactCategory::Testimonial).then(|| {
                BTreeMap::from([
                    ("rating".to_string(), rng.gen_range(4..=5u8).to_string()),
                    (
                        "consent".to_string(),
                        rng.gen_bool(CONSENT_PROBABILITY).to_string(),
                    ),
                ])
            });

            let name = format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
            let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));

            ContactMessage {
                id: format!("msg-{}", 2000 + i),
                name,
                email,
                category,
                message,
                received_at,
                data,
            }
        })
        .collect();

    messages.sort_by(|a, b| b.received_at.cmp(&a.received_at));
    messages
}

/// One point per day for the trailing `days` days, oldest first, ending today.
pub fn generate_activity<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    days: u32,
) -> Vec<ActivityPoint> {
    let today = now.date_naive();
    (0..u64::from(days))
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|day| ActivityPoint {
            count: rng.gen_range(5..25),
            date: day.and_time(NaiveTime::MIN).and_utc(),
        })
        .collect()
}
