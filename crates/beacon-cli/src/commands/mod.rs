pub mod api;
pub mod bootstrap;
pub mod config;
pub mod identity;
pub mod nav;

use anyhow::Result;
use serde::Serialize;

/// Renders a value as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_core::navigation::navigation_items;
    use serde_json::Value;

    #[test]
    fn test_navigation_renders_as_json_array() {
        let rendered = render_json(navigation_items()).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["name"], "Home");
        assert_eq!(items[0]["href"], "/");
        assert_eq!(items[0]["current"], true);
        assert_eq!(items[3]["href"], "/command-center");
    }
}
