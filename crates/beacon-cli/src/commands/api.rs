use super::bootstrap::App;
use super::{identity, print_json};
use crate::{ActivitySeries, ApiCommand};
use anyhow::{Context, Result, bail};
use beacon_core::http::{HttpRequest, HttpResponse, Method};
use serde_json::{Value, json};
use std::str::FromStr;

pub async fn run(app: &App, command: ApiCommand) -> Result<()> {
    match command {
        ApiCommand::Request { method, url, body } => request(app, &method, &url, body).await,
        ApiCommand::Notifications { limit, cursor } => {
            print_json(
                &app.dashboard
                    .list_notifications(limit, cursor.as_deref())
                    .await?,
            )
        }
        ApiCommand::Show { id } => show(app, &id).await,
        ApiCommand::Contacts { limit, offset } => {
            print_json(&app.dashboard.contact_messages(limit, offset).await?)
        }
        ApiCommand::Activity { series, days } => {
            let points = match series {
                ActivitySeries::Notifications => app.dashboard.notification_activity(days).await?,
                ActivitySeries::Contacts => app.dashboard.contact_activity(days).await?,
            };
            print_json(&points)
        }
        ApiCommand::Overview => print_json(&app.dashboard.overview().await?),
        ApiCommand::Whoami => identity::whoami(app).await,
        ApiCommand::Command { text } => print_json(&app.dashboard.run_command(&text).await?),
    }
}

async fn request(app: &App, method: &str, url: &str, body: Option<String>) -> Result<()> {
    let method =
        Method::from_str(method).with_context(|| format!("Unsupported method '{}'", method))?;

    let mut request = HttpRequest::new(method, url);
    if let Some(body) = body {
        request = request.with_body(body);
    }

    let response = app.client.send(request).await?;
    print_json(&response_summary(&response))?;
    if !response.is_success() {
        bail!("Request failed with status {}", response.status);
    }
    Ok(())
}

/// Status plus body; bodies that are not JSON are kept as text.
fn response_summary(response: &HttpResponse) -> Value {
    let body = response
        .parse_json::<Value>()
        .unwrap_or_else(|_| Value::String(response.text()));
    json!({ "status": response.status, "body": body })
}

async fn show(app: &App, id: &str) -> Result<()> {
    let detail = app.dashboard.notification_detail(id).await?;
    let events = app.dashboard.notification_events(id).await?;

    print_json(&detail)?;
    for event in &events {
        print_json(event)?;
    }
    Ok(())
}
