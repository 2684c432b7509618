mod cli_args;
mod config;
mod git;
mod llm;
mod logging;
mod setup;
mod summary;
mod truncate;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;
use std::fs;
use std::time::Duration;

use cli_args::Cli;
use config::Config;
use git::{BranchLookup, GitError, GitRepo};
use llm::{prompt_builder, LlmClient};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let cfg = Config::from_sources(&cli);
    let llm_client = setup::build_llm_client(&cli, &cfg)?;

    run_summary(&cli, &cfg, llm_client.as_ref())
}

/// Summarize target..HEAD into a PR title and description.
fn run_summary(cli: &Cli, cfg: &Config, llm_client: &dyn LlmClient) -> Result<()> {
    let repo = GitRepo::open(cli.repo.clone())?;
    let current = repo.current_branch()?;

    match repo.find_branch(&cli.target)? {
        BranchLookup::Local => log::debug!("Target branch {} found locally.", cli.target),
        BranchLookup::Remote => log::debug!("Target branch {} found on origin.", cli.target),
        BranchLookup::NotFound => {
            return Err(GitError::TargetBranchNotFound(cli.target.clone()).into());
        }
    }

    let range_text = repo.commit_range(&cli.target, &current, cli.diffs)?;
    if range_text.is_empty() {
        log::warn!(
            "No new commits found between {} and the current branch.",
            cli.target
        );
        return Ok(());
    }

    // Message-only logs stay bounded on their own; the cut is only for diffs.
    let range_text = if cli.diffs {
        let clipped = truncate::clip(range_text, cfg.max_diff_chars);
        if clipped.was_truncated {
            log::warn!(
                "Diff is too large and has been truncated to {} characters.",
                cfg.max_diff_chars
            );
        }
        clipped.text
    } else {
        range_text
    };

    let messages = prompt_builder::pr_summary_messages(
        cli.prompt.as_deref().unwrap_or(""),
        cli.ticket.as_deref().unwrap_or(""),
        &current,
        &range_text,
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Generating PR summary...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let reply = llm_client.complete(&messages);
    spinner.finish_and_clear();
    let reply = reply?;

    let parsed = summary::parse_summary(&reply);
    if parsed.is_empty() {
        log::warn!("The model returned an empty reply; nothing to show.");
        return Ok(());
    }

    let document = parsed.render_markdown();

    println!();
    println!("----- PR Summary -----");
    println!("{document}");
    println!("----------------------");

    if let Some(path) = &cli.out {
        fs::write(path, &document)
            .with_context(|| format!("failed to write PR summary to {}", path.display()))?;
        println!("{} {}", "PR summary saved to".green(), path.display());
    }

    Ok(())
}
