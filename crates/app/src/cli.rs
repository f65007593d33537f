use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_DB_URL: &str = "sqlite://lessons.sqlite3";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(name = "lessons", version, about = "Build, render and serve personal-finance lessons")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the roadmap and every lesson as static HTML.
    Build(BuildArgs),
    /// Print one lesson page to stdout.
    Render(RenderArgs),
    /// Serve lessons and the goal form over HTTP.
    Serve(ServeArgs),
    /// Manage saved goals.
    #[command(subcommand)]
    Goal(GoalCommand),
}

#[derive(Debug, Args)]
pub struct ContentArgs {
    /// Directory of `*.json` lessons (and an optional `roadmap.json`).
    #[arg(long, env = "LESSONS_CONTENT_DIR")]
    pub content: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct DbArgs {
    /// SQLite database URL or path.
    #[arg(long = "db", env = "LESSONS_DB_URL", default_value = DEFAULT_DB_URL)]
    pub db_url: String,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    #[arg(long)]
    pub out: PathBuf,
    #[command(flatten)]
    pub content: ContentArgs,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    pub lesson: String,
    /// Navigation token to echo into the page's links.
    #[arg(long)]
    pub from: Option<String>,
    #[command(flatten)]
    pub content: ContentArgs,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, env = "LESSONS_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
    #[command(flatten)]
    pub content: ContentArgs,
    #[command(flatten)]
    pub db: DbArgs,
}

#[derive(Debug, Subcommand)]
pub enum GoalCommand {
    /// Create a goal.
    Add(GoalAddArgs),
    /// List goals, newest first.
    List(DbArgs),
}

#[derive(Debug, Args)]
pub struct GoalAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub target: Option<f64>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[command(flatten)]
    pub db: DbArgs,
}
