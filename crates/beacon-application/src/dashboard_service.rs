//! Typed access to the notification admin API.
//!
//! `DashboardService` is what the dashboard pages call. It builds request
//! URLs, sends them through whatever `HttpClient` it was given, and decodes
//! the JSON payloads into domain types.

use beacon_core::activity::ActivityPoint;
use beacon_core::contact::ContactMessage;
use beacon_core::error::{BeaconError, Result};
use beacon_core::http::{HttpClient, HttpRequest, HttpResponse};
use beacon_core::notification::{Event, NotificationDetail, NotificationPage, NotificationRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;

/// Acknowledgement returned by command endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Everything the home page shows on first load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub notifications: NotificationPage,
    pub contact_messages: Vec<ContactMessage>,
    pub notification_activity: Vec<ActivityPoint>,
    pub contact_activity: Vec<ActivityPoint>,
}

pub struct DashboardService {
    client: Arc<dyn HttpClient>,
    /// Prefix for every request path; empty for origin-relative URLs
    base_url: String,
}

impl DashboardService {
    pub const DEFAULT_PAGE_SIZE: usize = 10;
    pub const OVERVIEW_ACTIVITY_DAYS: u32 = 7;

    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            base_url: String::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self.client.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let message = response
            .parse_json::<Value>()
            .ok()
            .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| response.text());
        Err(BeaconError::api(response.status, message))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(HttpRequest::get(self.url(path)))
            .await?
            .parse_json()
    }

    /// Fetches one page of notifications, newest first.
    pub async fn list_notifications(
        &self,
        limit: usize,
        cursor: Option<&str>,
    ) -> Result<NotificationPage> {
        let mut path = format!("/api/v1/notifications?limit={}", limit);
        if let Some(cursor) = cursor {
            path.push_str(&format!("&cursor={}", cursor));
        }
        self.get_json(&path).await
    }

    /// Walks every page and returns all notifications.
    ///
    /// Stops early if the backend hands back a cursor it already returned.
    pub async fn all_notifications(&self, page_size: usize) -> Result<Vec<NotificationRecord>> {
        if page_size == 0 {
            return Err(BeaconError::config("page size must be at least 1"));
        }

        let mut records = Vec::new();
        let mut cursor: Option<String> = None;
        let mut seen = HashSet::new();

        loop {
            let page = self
                .list_notifications(page_size, cursor.as_deref())
                .await?;
            records.extend(page.data);
            match page.next_cursor {
                Some(next) if page.has_more => {
                    if !seen.insert(next.clone()) {
                        tracing::warn!("[Dashboard] Cursor {} repeated, stopping", next);
                        break;
                    }
                    cursor = Some(next);
                }
                _ => break,
            }
        }

        tracing::debug!("[Dashboard] Loaded {} notifications", records.len());
        Ok(records)
    }

    /// Fetches a notification's detail view.
    ///
    /// An unknown id is reported as `BeaconError::NotFound`.
    pub async fn notification_detail(&self, notification_id: &str) -> Result<NotificationDetail> {
        match self
            .get_json(&format!("/api/v1/notification/{}", notification_id))
            .await
        {
            Err(e) if e.is_status(404) => Err(BeaconError::not_found("notification", notification_id)),
            other => other,
        }
    }

    /// Fetches a notification's event timeline; empty for unknown ids.
    pub async fn notification_events(&self, notification_id: &str) -> Result<Vec<Event>> {
        self.get_json(&format!("/api/v1/notification/events/{}", notification_id))
            .await
    }

    pub async fn notification_activity(&self, days: u32) -> Result<Vec<ActivityPoint>> {
        self.get_json(&format!("/api/v1/notifications/activity/{}", days))
            .await
    }

    pub async fn contact_messages(&self, limit: usize, offset: usize) -> Result<Vec<ContactMessage>> {
        self.get_json(&format!(
            "/api/v1/contact-messages/?limit={}&offset={}",
            limit, offset
        ))
        .await
    }

    pub async fn contact_activity(&self, days: u32) -> Result<Vec<ActivityPoint>> {
        self.get_json(&format!("/api/v1/contact-messages/activity/{}", days))
            .await
    }

    /// Asks the backend to recompute its activity aggregates.
    pub async fn rebuild_activity(&self) -> Result<CommandAck> {
        self.send(HttpRequest::post(self.url("/api/v1/admin/rebuild-activity")))
            .await?
            .parse_json()
    }

    /// Submits a free-form command from the command center.
    pub async fn run_command(&self, command: &str) -> Result<CommandAck> {
        let request = HttpRequest::post(self.url("/api/v1/admin/command"))
            .with_json(&json!({ "command": command }))?;
        self.send(request).await?.parse_json()
    }

    /// Loads the home page data with all requests in flight at once.
    pub async fn overview(&self) -> Result<DashboardOverview> {
        let (notifications, contact_messages, notification_activity, contact_activity) =
            futures::try_join!(
                self.list_notifications(Self::DEFAULT_PAGE_SIZE, None),
                self.contact_messages(Self::DEFAULT_PAGE_SIZE, 0),
                self.notification_activity(Self::OVERVIEW_ACTIVITY_DAYS),
                self.contact_activity(Self::OVERVIEW_ACTIVITY_DAYS),
            )?;

        Ok(DashboardOverview {
            notifications,
            contact_messages,
            notification_activity,
            contact_activity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays canned responses and records requested URLs.
    struct ScriptedClient {
        responses: Mutex<Vec<HttpResponse>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl ScriptedClient {
        fn new(mut responses: Vec<HttpResponse>) -> Arc<Self> {
            responses.reverse();
            Arc::new(Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn urls(&self) -> Vec<String> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|r| r.url.clone())
                .collect()
        }
    }

    #[async_trait]
    impl HttpClient for ScriptedClient {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| BeaconError::internal("no scripted response left"))
        }
    }

    fn json_response(status: u16, body: Value) -> HttpResponse {
        HttpResponse::json(status, &body).unwrap()
    }

    fn empty_page(has_more: bool, next: Option<&str>) -> HttpResponse {
        json_response(
            200,
            json!({ "data": [], "has_more": has_more, "next_cursor": next }),
        )
    }

    #[tokio::test]
    async fn test_list_notifications_builds_query() {
        let client = ScriptedClient::new(vec![empty_page(false, None)]);
        let service =
            DashboardService::new(client.clone()).with_base_url("https://admin.example.com/");

        let page = service.list_notifications(25, Some("50")).await.unwrap();

        assert!(!page.has_more);
        assert_eq!(
            client.urls(),
            vec!["https://admin.example.com/api/v1/notifications?limit=25&cursor=50"]
        );
    }

    #[tokio::test]
    async fn test_all_notifications_follows_cursor() {
        let client = ScriptedClient::new(vec![
            empty_page(true, Some("10")),
            empty_page(true, Some("20")),
            empty_page(false, None),
        ]);
        let service = DashboardService::new(client.clone());

        service.all_notifications(10).await.unwrap();

        assert_eq!(
            client.urls(),
            vec![
                "/api/v1/notifications?limit=10",
                "/api/v1/notifications?limit=10&cursor=10",
                "/api/v1/notifications?limit=10&cursor=20",
            ]
        );
    }

    #[tokio::test]
    async fn test_all_notifications_rejects_zero_page_size() {
        let client = ScriptedClient::new(vec![empty_page(true, Some("0"))]);
        let service = DashboardService::new(client.clone());

        let err = service.all_notifications(0).await.unwrap_err();

        assert!(err.is_config());
        assert!(client.urls().is_empty());
    }

    #[tokio::test]
    async fn test_all_notifications_stops_on_stalled_cursor() {
        let client = ScriptedClient::new(vec![
            empty_page(true, Some("10")),
            empty_page(true, Some("10")),
            empty_page(false, None),
        ]);
        let service = DashboardService::new(client.clone());

        service.all_notifications(10).await.unwrap();

        assert_eq!(
            client.urls(),
            vec![
                "/api/v1/notifications?limit=10",
                "/api/v1/notifications?limit=10&cursor=10",
            ]
        );
    }

    #[tokio::test]
    async fn test_all_notifications_stops_on_cursor_cycle() {
        let client = ScriptedClient::new(vec![
            empty_page(true, Some("10")),
            empty_page(true, Some("20")),
            empty_page(true, Some("10")),
            empty_page(false, None),
        ]);
        let service = DashboardService::new(client.clone());

        service.all_notifications(10).await.unwrap();

        assert_eq!(client.urls().len(), 3);
    }

    #[tokio::test]
    async fn test_detail_404_maps_to_not_found() {
        let client = ScriptedClient::new(vec![json_response(
            404,
            json!({ "error": "Notification not found" }),
        )]);
        let service = DashboardService::new(client);

        let err = service.notification_detail("notif-1").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_error_body_becomes_api_error() {
        let client = ScriptedClient::new(vec![json_response(
            404,
            json!({ "error": "Endpoint not mocked" }),
        )]);
        let service = DashboardService::new(client);

        match service.contact_activity(7).await.unwrap_err() {
            BeaconError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Endpoint not mocked");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_command_posts_json() {
        let client = ScriptedClient::new(vec![json_response(200, json!({ "success": true }))]);
        let service = DashboardService::new(client.clone());

        let ack = service.run_command("replay notif-1000").await.unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, None);

        let requests = client.requests.lock().unwrap();
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"command":"replay notif-1000"}"#)
        );
    }
}
