//! Command-line interface definition for issueblog.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use issueblog_config::Repository;

/// issueblog - Mirror GitHub Issues into a Markdown blog.
///
/// Every issue opened by the token's owner becomes a post. The `main`
/// command maintains the repository's `README.md` index, its RSS feed and
/// Markdown backups; `generate` writes Zola posts.
#[derive(Debug, Parser)]
#[command(name = "issueblog")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Configuration file to use instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write Zola posts for issues not yet in the posts directory
    Generate {
        /// GitHub personal access token
        token: String,

        /// Repository holding the posts (e.g., "octocat/blog")
        repo: Repository,

        /// Directory the posts are written to (default: content/posts)
        #[arg(long = "posts_dir", value_name = "DIR")]
        posts_dir: Option<PathBuf>,
    },

    /// Write README.md, the RSS feed and backups of new issues
    Main {
        /// GitHub personal access token
        token: String,

        /// Repository holding the posts (e.g., "octocat/blog")
        repo: Repository,

        /// Rewrite the backup of this issue even if it already exists
        #[arg(long = "issue_number", value_name = "N")]
        issue_number: Option<u64>,
    },
}
