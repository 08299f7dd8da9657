//! Daily activity counts for the dashboard trend charts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub count: u32,
    /// Start of the day (UTC midnight)
    pub date: DateTime<Utc>,
}
