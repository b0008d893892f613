//! Shared protocol types for the issueblog generator.
//!
//! This crate defines the read-only view of the issue tracker used by every
//! other issueblog component: issues, their comments and reactions, and
//! repository labels.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`issue`]: The `Issue`, `Comment` and `Reaction` records and the
//!   [`Authored`] trait used to recognize self-authored content
//! - [`label`]: Repository labels and their index ordering
//!
//! # Examples
//!
//! Checking whether an issue belongs to the blog owner:
//!
//! ```
//! use issueblog_protocol::{Authored, Issue};
//!
//! let issue = Issue::builder(1, "Hello world").author("octocat").build();
//! assert!(issue.is_mine("octocat"));
//! assert!(!issue.is_mine("someone-else"));
//! ```

pub mod issue;
pub mod label;

// Re-export primary types at crate root for convenience
pub use issue::{Authored, Comment, Issue, IssueBuilder, Reaction, ReactionContent, RepoInfo};
pub use label::{Label, sort_for_index};
