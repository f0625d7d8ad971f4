//! Wire models for the AgentHub marketplace API.
//!
//! Everything here is a read-only snapshot deserialized straight off the
//! wire; the client never mutates or caches these records. Field names on
//! the wire are camelCase.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Catalog categories offered by the marketplace.
///
/// The menu adds an "All" sentinel on top of these; the sentinel never
/// reaches the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Category {
    Development,
    Design,
    Marketing,
    Sales,
    Support,
    Analytics,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Development,
        Category::Design,
        Category::Marketing,
        Category::Sales,
        Category::Support,
        Category::Analytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Marketing => "Marketing",
            Category::Sales => "Sales",
            Category::Support => "Support",
            Category::Analytics => "Analytics",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry: a deployable AI capability offered by a vendor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub vendor: String,
    pub category: Category,
    pub rating: f64,
    pub reviews: u32,
    /// Monthly price in dollars; 0 means free.
    pub price: f64,
    pub description: String,
}

/// An agent the user has activated, as created by the backend on deploy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployedAgent {
    pub id: String,
    pub agent: Agent,
    /// Runtime status. `"running"` is the distinguished healthy value; the
    /// set is open-ended so this stays a raw string.
    pub status: String,
    pub deployed_at: DateTime<Utc>,
}

impl DeployedAgent {
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}

/// Aggregate counters recomputed by the backend on each request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_deployed: u64,
    pub active_workflows: u64,
    pub total_api_calls: u64,
    /// Uptime percentage.
    pub uptime: f64,
}
