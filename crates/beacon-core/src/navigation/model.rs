//! NavigationItem domain model.

use serde::Serialize;
use strum::Display;

/// Symbolic icon reference understood by the dashboard front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum Icon {
    Home,
    Inbox,
    Bell,
    Terminal,
}

/// A single entry in the dashboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    /// Label shown in the sidebar
    pub name: &'static str,
    /// Route path
    pub href: &'static str,
    pub icon: Icon,
    /// Whether this entry is highlighted as the active route
    pub current: bool,
}

/// The navigation registry, in display order.
pub const NAVIGATION_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        name: "Home",
        href: "/",
        icon: Icon::Home,
        current: true,
    },
    NavigationItem {
        name: "Contact Messages",
        href: "/contact-us",
        icon: Icon::Inbox,
        current: false,
    },
    NavigationItem {
        name: "Notifications",
        href: "/notifications",
        icon: Icon::Bell,
        current: false,
    },
    NavigationItem {
        name: "Command Center",
        href: "/command-center",
        icon: Icon::Terminal,
        current: false,
    },
];

/// Returns the navigation registry.
pub fn navigation_items() -> &'static [NavigationItem] {
    NAVIGATION_ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let hrefs: Vec<&str> = navigation_items().iter().map(|item| item.href).collect();
        assert_eq!(
            hrefs,
            vec!["/", "/contact-us", "/notifications", "/command-center"]
        );
    }

    #[test]
    fn test_only_home_is_current() {
        let current: Vec<&str> = navigation_items()
            .iter()
            .filter(|item| item.current)
            .map(|item| item.name)
            .collect();
        assert_eq!(current, vec!["Home"]);
    }

    #[test]
    fn test_serializes_icon_by_name() {
        let json = serde_json::to_value(navigation_items()[2]).unwrap();
        assert_eq!(json["icon"], "Bell");
        assert_eq!(json["current"], false);
    }
}
