//! Navigation domain module.
//!
//! The dashboard's sidebar is a fixed, ordered list of routes. It carries no
//! behaviour beyond enumeration.

mod model;

pub use model::{Icon, NavigationItem, NAVIGATION_ITEMS, navigation_items};
