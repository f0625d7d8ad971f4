//! One handler per menu action.
//!
//! Every handler drives a [`StatusLine`], performs its API call, and prints
//! the result. API failures are reported through the status line's failure
//! state and swallowed; a failed action never takes down the menu loop.
//! Only the deploy flow returns a `Result`, because it runs a prompt whose
//! terminal errors must propagate.

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::api::types::{Agent, Category, DeployedAgent, Stats};
use crate::api::ApiClient;
use crate::ui::render::{price_label, render_agent, render_deployed};
use crate::ui::status::StatusLine;

pub async fn list_agents(api: &ApiClient, category: Option<Category>) {
    let status = StatusLine::start("Loading agents");
    match api.list_agents(category).await {
        Ok(agents) => {
            status.succeed(&count_summary("Loaded", agents.len(), "agent"));
            println!("\n{}\n", catalog_output(&agents, "No agents found."));
        }
        Err(e) => status.fail(&e.to_string()),
    }
}

pub async fn search_agents(api: &ApiClient, query: &str) {
    let status = StatusLine::start("Searching agents");
    match api.search_agents(query).await {
        Ok(agents) => {
            status.succeed(&count_summary("Found", agents.len(), "agent"));
            println!(
                "\n{}\n",
                catalog_output(&agents, "No agents matched your search.")
            );
        }
        Err(e) => status.fail(&e.to_string()),
    }
}

/// Two-step flow: fetch the full catalog to populate the selection prompt,
/// then deploy the chosen agent.
pub async fn deploy_agent(api: &ApiClient) -> anyhow::Result<()> {
    let status = StatusLine::start("Loading agents");
    let agents = match api.list_agents(None).await {
        Ok(agents) => {
            status.succeed(&count_summary("Loaded", agents.len(), "agent"));
            agents
        }
        Err(e) => {
            status.fail(&e.to_string());
            return Ok(());
        }
    };
    if agents.is_empty() {
        println!("{}", "No agents available to deploy.".yellow());
        return Ok(());
    }

    let labels: Vec<String> = agents.iter().map(deploy_choice_label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which agent do you want to deploy?")
        .items(&labels)
        .default(0)
        .interact()?;

    let status = StatusLine::start("Deploying agent");
    match api.deploy_agent(&agents[selection].id).await {
        Ok(deployed) => status.succeed(&format!("{} deployed", deployed.agent.name)),
        Err(e) => status.fail(&e.to_string()),
    }
    Ok(())
}

pub async fn list_deployed(api: &ApiClient) {
    let status = StatusLine::start("Loading deployed agents");
    match api.list_deployed().await {
        Ok(deployed) => {
            status.succeed(&count_summary("Loaded", deployed.len(), "deployed agent"));
            println!("\n{}\n", deployed_output(&deployed));
        }
        Err(e) => status.fail(&e.to_string()),
    }
}

pub async fn show_stats(api: &ApiClient) {
    let status = StatusLine::start("Loading statistics");
    match api.stats().await {
        Ok(stats) => {
            status.succeed("Statistics loaded");
            println!("\n{}\n", stats_output(&stats));
        }
        Err(e) => status.fail(&e.to_string()),
    }
}

/// Count-based summary for the status line, e.g. "Loaded 3 agents".
fn count_summary(verb: &str, count: usize, noun: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{verb} {count} {noun}{plural}")
}

/// Label for the deploy selection prompt: icon, name, price.
fn deploy_choice_label(agent: &Agent) -> String {
    format!(
        "{} {} · {}",
        agent.icon,
        agent.name,
        price_label(agent.price)
    )
}

/// The rendered catalog, or the zero-result notice.
fn catalog_output(agents: &[Agent], empty_notice: &str) -> String {
    if agents.is_empty() {
        return empty_notice.yellow().to_string();
    }
    let blocks: Vec<String> = agents
        .iter()
        .enumerate()
        .map(|(i, agent)| render_agent(agent, i))
        .collect();
    blocks.join("\n\n")
}

/// The rendered deployment list, or the zero-result notice.
fn deployed_output(deployed: &[DeployedAgent]) -> String {
    if deployed.is_empty() {
        return "No agents deployed yet.".yellow().to_string();
    }
    let blocks: Vec<String> = deployed
        .iter()
        .enumerate()
        .map(|(i, d)| render_deployed(d, i))
        .collect();
    blocks.join("\n\n")
}

fn stats_output(stats: &Stats) -> String {
    format!(
        "  {:<18} {}\n  {:<18} {}\n  {:<18} {}\n  {:<18} {}",
        "Deployed agents",
        stats.total_deployed.to_string().bold(),
        "Active workflows",
        stats.active_workflows.to_string().bold(),
        "API calls (month)",
        stats.total_api_calls.to_string().bold(),
        "Uptime",
        format!("{}%", stats.uptime).bold(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn no_color() {
        colored::control::set_override(false);
    }

    fn agent(name: &str, price: f64) -> Agent {
        Agent {
            id: format!("agent-{name}"),
            name: name.to_string(),
            icon: "🛰".to_string(),
            vendor: "Orbit Labs".to_string(),
            category: Category::Analytics,
            rating: 4.1,
            reviews: 33,
            price,
            description: "Watches your dashboards".to_string(),
        }
    }

    #[test]
    fn count_summary_pluralizes() {
        assert_eq!(count_summary("Loaded", 0, "agent"), "Loaded 0 agents");
        assert_eq!(count_summary("Loaded", 1, "agent"), "Loaded 1 agent");
        assert_eq!(count_summary("Found", 3, "agent"), "Found 3 agents");
    }

    #[test]
    fn deploy_label_shows_icon_name_price() {
        no_color();
        assert_eq!(
            deploy_choice_label(&agent("Scout", 12.5)),
            "🛰 Scout · $12.5/mo"
        );
        assert_eq!(deploy_choice_label(&agent("Scout", 0.0)), "🛰 Scout · Free");
    }

    #[test]
    fn empty_catalog_renders_notice() {
        no_color();
        assert_eq!(catalog_output(&[], "No agents found."), "No agents found.");
    }

    #[test]
    fn catalog_renders_every_agent_in_order() {
        no_color();
        let output = catalog_output(&[agent("First", 0.0), agent("Second", 5.0)], "unused");
        assert!(output.contains("1. 🛰 First"));
        assert!(output.contains("2. 🛰 Second"));
        assert!(!output.contains("unused"));
    }

    #[test]
    fn empty_deployments_render_notice() {
        no_color();
        assert_eq!(deployed_output(&[]), "No agents deployed yet.");
    }

    #[test]
    fn deployments_render_in_order() {
        no_color();
        let deployed = vec![
            DeployedAgent {
                id: "dep-1".to_string(),
                agent: agent("Scout", 0.0),
                status: "running".to_string(),
                deployed_at: Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0).unwrap(),
            },
            DeployedAgent {
                id: "dep-2".to_string(),
                agent: agent("Lookout", 9.0),
                status: "stopped".to_string(),
                deployed_at: Utc.with_ymd_and_hms(2026, 7, 2, 9, 0, 0).unwrap(),
            },
        ];
        let output = deployed_output(&deployed);
        assert!(output.contains("1. 🛰 Scout"));
        assert!(output.contains("2. 🛰 Lookout"));
        assert!(output.contains("● running"));
        assert!(output.contains("○ stopped"));
    }

    #[test]
    fn stats_output_lists_all_four_counters() {
        no_color();
        let output = stats_output(&Stats {
            total_deployed: 12,
            active_workflows: 4,
            total_api_calls: 90210,
            uptime: 99.95,
        });
        assert!(output.contains("Deployed agents"));
        assert!(output.contains("12"));
        assert!(output.contains("Active workflows"));
        assert!(output.contains("4"));
        assert!(output.contains("API calls (month)"));
        assert!(output.contains("90210"));
        assert!(output.contains("99.95%"));
    }
}
