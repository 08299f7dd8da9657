use super::print_json;
use anyhow::Result;
use beacon_core::navigation::navigation_items;

pub fn run() -> Result<()> {
    print_json(navigation_items())
}
