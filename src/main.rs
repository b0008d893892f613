//! issueblog - Mirror GitHub Issues into a Markdown blog.
//!
//! This is the main binary: it parses the command line, loads the
//! configuration and runs one of the two generation passes.

mod cli;
mod logging;

use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use issueblog_config::Config;
use issueblog_github::GitHubClient;
use secrecy::SecretString;
use tracing::debug;

use crate::cli::{Cli, Commands};

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Config::load().context("failed to load configuration"),
    }
}

/// Builds the client. The token is checked by the first request of the run,
/// which resolves the current user.
async fn connect(token: String) -> anyhow::Result<GitHubClient> {
    GitHubClient::new(Some(SecretString::from(token)))
        .await
        .context("failed to create GitHub client")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet);

    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Generate {
            token,
            repo,
            posts_dir,
        } => {
            if let Some(dir) = posts_dir {
                config.posts.dir = dir;
            }
            config.validate().context("invalid configuration")?;
            debug!(?config, "resolved configuration");

            let client = connect(token).await?;
            let report = issueblog_site::generate_posts(&client, &config, &repo)
                .await
                .with_context(|| format!("failed to generate posts for {repo}"))?;

            println!("Generated {} post(s) in {}", report.posts.len(), report.dir.display());
        }
        Commands::Main {
            token,
            repo,
            issue_number,
        } => {
            debug!(?config, "resolved configuration");

            let client = connect(token).await?;
            let report = issueblog_site::build_index(&client, &config, &repo, issue_number, Utc::now())
                .await
                .with_context(|| format!("failed to build the blog index for {repo}"))?;

            println!("- {}: updated", report.readme.display());
            println!("- {}: {} entries", report.feed.display(), report.feed_items);
            println!(
                "- {}: {} backup(s) written",
                config.index.backup_dir.display(),
                report.backups.len()
            );
        }
    }

    Ok(())
}
