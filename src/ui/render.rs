//! Pure formatting of marketplace records as terminal text.
//!
//! Presenters take a record plus its zero-based list position and return the
//! rendered block as a string; callers decide where it goes. No I/O here.

use colored::Colorize;

use crate::api::types::{Agent, DeployedAgent};

const DESCRIPTION_PREVIEW_CHARS: usize = 60;

/// One filled star per whole rating point.
fn stars(rating: f64) -> String {
    "★".repeat(rating.floor() as usize)
}

/// "Free" for a zero price, "$<price>/mo" otherwise. No rounding beyond the
/// input's own precision.
pub fn price_label(price: f64) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else {
        format!("${price}/mo")
    }
}

/// First 60 characters of the description with a trailing ellipsis.
/// Cuts mid-word; the ellipsis is appended even when nothing was dropped.
fn preview(description: &str) -> String {
    let head: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{head}...")
}

pub fn render_agent(agent: &Agent, position: usize) -> String {
    format!(
        "{}. {} {}\n   {} {} · {}\n   {} {} ({} reviews)\n   {}\n   {}",
        position + 1,
        agent.icon,
        agent.name.bold(),
        "by".dimmed(),
        agent.vendor,
        agent.category.to_string().cyan(),
        stars(agent.rating).yellow(),
        agent.rating,
        agent.reviews,
        price_label(agent.price).green(),
        preview(&agent.description).dimmed(),
    )
}

pub fn render_deployed(deployed: &DeployedAgent, position: usize) -> String {
    let status = if deployed.is_running() {
        format!("● {}", deployed.status).green().to_string()
    } else {
        format!("○ {}", deployed.status).red().to_string()
    };
    format!(
        "{}. {} {}\n   {}\n   {} {}",
        position + 1,
        deployed.agent.icon,
        deployed.agent.name.bold(),
        status,
        "deployed".dimmed(),
        deployed.deployed_at.format("%B %-d, %Y"),
    )
}
