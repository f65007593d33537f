#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod server;
pub mod site;

use std::sync::Arc;

use lesson_core::calculator::{CurrencyFormat, format_currency};
use lesson_core::model::{Goal, GoalDraft};
use services::{Clock, GoalService};

use crate::cli::{Cli, Command, GoalAddArgs, GoalCommand};
use crate::server::AppState;

/// Execute one parsed command line.
///
/// # Errors
///
/// Propagates content, storage and I/O failures to the binary, which
/// prints them once.
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Build(args) => {
            let catalog = config::load_catalog(args.content.content.as_deref())?;
            let report = site::build_site(Arc::new(catalog), &args.out)?;
            println!(
                "wrote {} and {} lessons",
                report.index.display(),
                report.lessons.len()
            );
        }
        Command::Render(args) => {
            let catalog = config::load_catalog(args.content.content.as_deref())?;
            let html =
                site::render_lesson(Arc::new(catalog), &args.lesson, args.from.as_deref())?;
            println!("{html}");
        }
        Command::Serve(args) => {
            let catalog = config::load_catalog(args.content.content.as_deref())?;
            let storage = config::open_storage(&args.db.db_url).await?;
            let state = AppState::new(Arc::new(catalog), &storage, Clock::default_clock());
            server::serve(args.bind, state).await?;
        }
        Command::Goal(GoalCommand::Add(args)) => {
            let storage = config::open_storage(&args.db.db_url).await?;
            let service = GoalService::new(Clock::default_clock(), Arc::clone(&storage.goals));
            let goal = service.create_goal(goal_draft(args)).await?;
            println!("created {}", describe_goal(&goal));
        }
        Command::Goal(GoalCommand::List(db)) => {
            let storage = config::open_storage(&db.db_url).await?;
            let service = GoalService::new(Clock::default_clock(), Arc::clone(&storage.goals));
            let goals = service.list_goals().await?;
            if goals.is_empty() {
                println!("no goals yet");
            }
            for goal in &goals {
                println!("{}", describe_goal(goal));
            }
        }
    }
    Ok(())
}

fn goal_draft(args: GoalAddArgs) -> GoalDraft {
    GoalDraft {
        name: args.name,
        target_amount: args.target,
        description: args.description,
        linked_category: args.category,
    }
}

/// One-line summary used by `goal add` and `goal list`.
#[must_use]
pub fn describe_goal(goal: &Goal) -> String {
    let mut line = format!("{}  {}", goal.id(), goal.name());
    if let Some(target) = goal.target_amount() {
        line.push_str("  ");
        line.push_str(&format_currency(target, &CurrencyFormat::USD_CENTS));
    }
    if let Some(category) = goal.linked_category() {
        line.push_str(&format!("  [{category}]"));
    }
    line
}
