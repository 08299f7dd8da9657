//! Mock implementation of the notification admin API.
//!
//! The router owns a [`MockDataset`] generated at construction and answers the
//! fixed set of admin endpoints from it:
//!
//! ```text
//! GET  /api/v1/notifications?limit&cursor        cursor-paginated records
//! GET  /api/v1/notification/{id}                 detail or 404
//! GET  /api/v1/notification/events/{id}          event timeline ([] if unknown)
//! GET  /api/v1/notifications/activity/{days}     daily counts
//! GET  /api/v1/contact-messages/?limit&offset    offset-paginated messages
//! GET  /api/v1/contact-messages/activity/{days}  daily counts
//! POST /api/v1/admin/rebuild-activity            ack
//! POST /api/v1/admin/command                     ack, body is logged
//! POST|PUT|PATCH|DELETE /api/v1/*                generic ack
//! *                                              404 "Endpoint not mocked"
//! ```
//!
//! Every response is JSON and is delayed by a random latency from the
//! configured range.

use crate::dataset::{MockDataset, generate_activity};
use async_trait::async_trait;
use beacon_core::config::MockApiConfig;
use beacon_core::error::{BeaconError, Result};
use beacon_core::http::{HttpClient, HttpRequest, HttpResponse, Method};
use beacon_core::notification::{Event, NotificationDetail, NotificationPage, NotificationRecord};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reqwest::Url;
use serde_json::json;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Origin used to resolve path-only request URLs.
pub const MOCK_ORIGIN: &str = "http://localhost/";

pub const API_PREFIX: &str = "/api/v1/";
const NOTIFICATIONS_PATH: &str = "/api/v1/notifications";
const NOTIFICATION_PREFIX: &str = "/api/v1/notification/";
const NOTIFICATION_EVENTS_PREFIX: &str = "/api/v1/notification/events/";
const NOTIFICATION_ACTIVITY_PREFIX: &str = "/api/v1/notifications/activity/";
const CONTACT_MESSAGES_PATH: &str = "/api/v1/contact-messages/";
const CONTACT_ACTIVITY_PREFIX: &str = "/api/v1/contact-messages/activity/";
const REBUILD_ACTIVITY_PATH: &str = "/api/v1/admin/rebuild-activity";
const ADMIN_COMMAND_PATH: &str = "/api/v1/admin/command";

const DEFAULT_LIMIT: usize = 10;
const DEFAULT_ACTIVITY_DAYS: u32 = 7;
const DEMO_COMMAND_MESSAGE: &str = "Command executed successfully (demo mode)";

/// Slices one page out of `records` starting at `cursor`.
///
/// `has_more` is true iff `cursor + limit` is still inside the collection.
pub fn paginate(records: &[NotificationRecord], cursor: usize, limit: usize) -> NotificationPage {
    let end = cursor.saturating_add(limit);
    let start = cursor.min(records.len());
    let data = records[start..end.min(records.len())].to_vec();
    let has_more = end < records.len();

    NotificationPage {
        data,
        has_more,
        next_cursor: has_more.then(|| end.to_string()),
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

fn query_usize(url: &Url, key: &str, default: usize) -> usize {
    url.query_pairs()
        .find(|(name, _)| name == key)
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(default)
}

/// Answers admin API requests from an in-memory dataset.
#[derive(Debug)]
pub struct MockApiRouter {
    config: MockApiConfig,
    dataset: MockDataset,
    /// Drives latency and activity series; the dataset itself is fixed
    rng: Mutex<StdRng>,
}

impl MockApiRouter {
    /// Builds a router and generates its dataset.
    ///
    /// Uses `config.seed` when set, entropy otherwise.
    pub fn new(config: MockApiConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let dataset = MockDataset::generate(&mut rng, Utc::now(), &config);

        tracing::info!(
            "[Mock API] Initialized with {} notifications and {} contact messages",
            dataset.notifications.len(),
            dataset.contact_messages.len()
        );

        Ok(Self::with_dataset(config, dataset, rng))
    }

    /// Builds a router around an existing dataset.
    pub fn with_dataset(config: MockApiConfig, dataset: MockDataset, rng: StdRng) -> Self {
        Self {
            config,
            dataset,
            rng: Mutex::new(rng),
        }
    }

    pub fn dataset(&self) -> &MockDataset {
        &self.dataset
    }

    pub fn config(&self) -> &MockApiConfig {
        &self.config
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }

    fn latency(&self) -> Duration {
        let (min, max) = (self.config.latency_min_ms, self.config.latency_max_ms);
        if max == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.with_rng(|rng| rng.gen_range(min..=max)))
    }

    /// Answers a request after the simulated network latency.
    pub async fn handle(&self, request: &HttpRequest) -> Result<HttpResponse> {
        tracing::info!("[Mock API] {} {}", request.method, request.url);

        let latency = self.latency();
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        self.dispatch(request)
    }

    /// Routes a request without any latency.
    pub fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let base = Url::parse(MOCK_ORIGIN).map_err(|e| BeaconError::internal(e.to_string()))?;
        let url = base
            .join(&request.url)
            .map_err(|e| BeaconError::transport(format!("Invalid URL '{}': {}", request.url, e)))?;
        let path = url.path();
        let method = request.method;

        if method == Method::Get {
            if path == NOTIFICATIONS_PATH {
                let limit = query_usize(&url, "limit", DEFAULT_LIMIT);
                let cursor = query_usize(&url, "cursor", 0);
                return HttpResponse::json(200, &paginate(&self.dataset.notifications, cursor, limit));
            }

            if path.starts_with(NOTIFICATION_EVENTS_PREFIX) {
                return HttpResponse::json(200, &self.notification_events(last_segment(path)));
            }

            if path.starts_with(NOTIFICATION_PREFIX) && !path.contains("/events/") {
                let id = last_segment(path);
                return match self.notification_detail(id) {
                    Some(detail) => HttpResponse::json(200, &detail),
                    None => HttpResponse::json(404, &json!({ "error": "Notification not found" })),
                };
            }

            if path.starts_with(NOTIFICATION_ACTIVITY_PREFIX)
                || path.starts_with(CONTACT_ACTIVITY_PREFIX)
            {
                return HttpResponse::json(200, &self.activity(last_segment(path)));
            }

            if path == CONTACT_MESSAGES_PATH {
                let limit = query_usize(&url, "limit", DEFAULT_LIMIT);
                let offset = query_usize(&url, "offset", 0);
                let messages = &self.dataset.contact_messages;
                let start = offset.min(messages.len());
                let end = offset.saturating_add(limit).min(messages.len());
                return HttpResponse::json(200, &messages[start..end]);
            }
        }

        if method == Method::Post && path == REBUILD_ACTIVITY_PATH {
            return HttpResponse::json(200, &json!({ "success": true }));
        }

        if method == Method::Post && path == ADMIN_COMMAND_PATH {
            tracing::info!(
                "[Mock API] Admin command executed: {}",
                request.body.as_deref().unwrap_or_default()
            );
            return HttpResponse::json(200, &json!({ "success": true }));
        }

        if method.is_mutating() && path.starts_with(API_PREFIX) {
            tracing::info!(
                "[Mock API] Command executed: {} {}",
                path,
                request.body.as_deref().unwrap_or_default()
            );
            return HttpResponse::json(
                200,
                &json!({ "success": true, "message": DEMO_COMMAND_MESSAGE }),
            );
        }

        tracing::warn!("[Mock API] Unknown endpoint: {} {}", method, path);
        HttpResponse::json(404, &json!({ "error": "Endpoint not mocked" }))
    }

    pub fn notification_detail(&self, notification_id: &str) -> Option<NotificationDetail> {
        self.dataset
            .find_notification(notification_id)
            .map(NotificationDetail::from)
    }

    pub fn notification_events(&self, notification_id: &str) -> Vec<Event> {
        self.dataset
            .find_notification(notification_id)
            .map(Event::timeline)
            .unwrap_or_default()
    }

    fn activity(&self, days_segment: &str) -> Vec<beacon_core::activity::ActivityPoint> {
        let days = days_segment
            .parse::<u32>()
            .unwrap_or(DEFAULT_ACTIVITY_DAYS)
            .min(self.config.max_activity_days);
        let now = Utc::now();
        self.with_rng(|rng| generate_activity(rng, now, days))
    }
}

#[async_trait]
impl HttpClient for MockApiRouter {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.handle(&request).await
    }
}
