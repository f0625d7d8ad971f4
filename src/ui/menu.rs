//! The interactive menu loop.
//!
//! A single `AtMenu` state re-entered after every action. The loop is
//! iterative rather than recursive so long sessions don't grow the stack.
//! Prompt-library errors (terminal gone, etc.) propagate to `main`; API
//! failures are already consumed inside the action handlers.

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::api::types::Category;
use crate::api::ApiClient;
use crate::ui::actions;

const MENU_ITEMS: [&str; 6] = [
    "Browse agents",
    "Search agents",
    "Deploy an agent",
    "View deployed agents",
    "View statistics",
    "Exit",
];

pub async fn run(api: &ApiClient) -> anyhow::Result<()> {
    print_banner();
    let theme = ColorfulTheme::default();

    loop {
        println!();
        let action = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        match action {
            0 => {
                let choices = category_choices();
                let picked = Select::with_theme(&theme)
                    .with_prompt("Category")
                    .items(&choices)
                    .default(0)
                    .interact()?;
                // Index 0 is the "All" sentinel: no category filter at all.
                let category = (picked > 0).then(|| Category::ALL[picked - 1]);
                actions::list_agents(api, category).await;
            }
            1 => {
                let query: String = Input::with_theme(&theme)
                    .with_prompt("Search for")
                    .validate_with(|input: &String| validate_query(input))
                    .interact_text()?;
                actions::search_agents(api, &query).await;
            }
            2 => actions::deploy_agent(api).await?,
            3 => actions::list_deployed(api).await,
            4 => actions::show_stats(api).await,
            _ => {
                println!("{}", "Goodbye!".cyan());
                return Ok(());
            }
        }
    }
}

fn print_banner() {
    println!("{}", "AgentHub".cyan().bold());
    println!(
        "{}",
        "Browse, search, and deploy AI agents from your terminal".dimmed()
    );
}

/// The seven fixed category choices: the "All" sentinel plus the catalog set.
fn category_choices() -> Vec<&'static str> {
    let mut choices = vec!["All"];
    choices.extend(Category::ALL.iter().map(|c| c.as_str()));
    choices
}

/// The search prompt re-asks until this passes.
fn validate_query(input: &str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("Please enter a search term")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_prompt_offers_all_plus_six() {
        let choices = category_choices();
        assert_eq!(choices.len(), 7);
        assert_eq!(choices[0], "All");
        assert!(choices.contains(&"Development"));
        assert!(choices.contains(&"Analytics"));
    }

    #[test]
    fn empty_query_is_rejected() {
        assert_eq!(validate_query(""), Err("Please enter a search term"));
        assert_eq!(validate_query("   "), Err("Please enter a search term"));
    }

    #[test]
    fn non_empty_query_passes() {
        assert_eq!(validate_query("scraper"), Ok(()));
    }
}
