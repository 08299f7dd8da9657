use super::bootstrap::App;
use super::print_json;
use anyhow::Result;

/// Signs in, signs out again and prints every identity state seen.
pub async fn whoami(app: &App) -> Result<()> {
    print_json(&app.identity.current())?;

    let identity = app.identity.sign_in().await?;
    tracing::info!("[Identity] Signed in as {}", identity.email);
    print_json(&app.identity.current())?;

    for snapshot in app.identity.sign_out().await {
        print_json(&snapshot)?;
    }
    Ok(())
}
