use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "prbot",
    version,
    about = "LLM-assisted pull request summary generator"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Target branch the pull request merges into (e.g. main or origin/dev)
    #[arg(default_value = "origin/dev")]
    pub target: String,

    /// Extra instructions appended to the summary request
    #[arg(long)]
    pub prompt: Option<String>,

    /// JIRA ticket to reference in the summary
    #[arg(long)]
    pub ticket: Option<String>,

    /// Include per-commit diffs in the payload sent to the model
    #[arg(long)]
    pub diffs: bool,

    /// Repository to read; defaults to the current directory
    #[arg(long)]
    pub repo: Option<PathBuf>,

    /// Write the rendered summary to this file as well as stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Model name to use (e.g. gpt-4o-mini). If 'none', acts like --no-model.
    #[arg(long)]
    pub model: Option<String>,

    /// Disable model calls; return dummy responses instead
    #[arg(long)]
    pub no_model: bool,

    /// API key (otherwise uses OPENAI_API_KEY env var)
    #[arg(long, env = "OPENAI_API_KEY")]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
