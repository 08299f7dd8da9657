use super::bootstrap::Overrides;
use super::print_json;
use anyhow::{Result, bail};
use beacon_core::config::RootConfig;

pub fn path(overrides: &Overrides) -> Result<()> {
    println!("{}", overrides.config_service()?.path().display());
    Ok(())
}

pub fn show(overrides: &Overrides) -> Result<()> {
    print_json(&overrides.load_config()?)
}

pub fn init(overrides: &Overrides, force: bool) -> Result<()> {
    let service = overrides.config_service()?;
    if service.path().exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            service.path().display()
        );
    }

    service.save(&RootConfig::default())?;
    println!("Wrote {}", service.path().display());
    Ok(())
}
