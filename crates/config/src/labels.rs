//! Reserved label configuration.
//!
//! Three label sets drive dedicated sections of the generated index instead
//! of getting a per-label section of their own:
//!
//! - `top`: pinned posts (default `["Top"]`)
//! - `todo`: checklist issues rendered in the TODO section (default `["TODO"]`)
//! - `friends`: issues collecting friend-link submissions (default `["Friends"]`)

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The reserved label sets.
///
/// Each set is passed to the tracker as a label filter, so an issue must
/// carry every label of the set to be selected.
///
/// # Examples
///
/// ```
/// use issueblog_config::LabelConfig;
///
/// let labels = LabelConfig::default();
/// assert!(labels.is_reserved("Top"));
/// assert!(labels.is_reserved("Friends"));
/// assert!(!labels.is_reserved("Rust"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Labels marking pinned posts.
    #[serde(default = "default_top")]
    pub top: Vec<String>,

    /// Labels marking TODO checklists.
    #[serde(default = "default_todo")]
    pub todo: Vec<String>,

    /// Labels marking friend-link collection issues.
    #[serde(default = "default_friends")]
    pub friends: Vec<String>,
}

fn default_top() -> Vec<String> {
    vec!["Top".to_string()]
}

fn default_todo() -> Vec<String> {
    vec!["TODO".to_string()]
}

fn default_friends() -> Vec<String> {
    vec!["Friends".to_string()]
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            top: default_top(),
            todo: default_todo(),
            friends: default_friends(),
        }
    }
}

impl LabelConfig {
    /// Returns every reserved label name: friends, then top, then todo.
    #[must_use]
    pub fn reserved(&self) -> Vec<&str> {
        self.friends
            .iter()
            .chain(&self.top)
            .chain(&self.todo)
            .map(String::as_str)
            .collect()
    }

    /// Returns `true` if `name` belongs to any reserved set.
    #[must_use]
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved().contains(&name)
    }

    /// Validates that no set is empty.
    ///
    /// An empty set would turn its label filter into "every issue".
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the empty set.
    pub fn validate(&self) -> Result<()> {
        let sets: [(&'static str, &Vec<String>); 3] = [
            ("labels.top", &self.top),
            ("labels.todo", &self.todo),
            ("labels.friends", &self.friends),
        ];
        for (field, set) in sets {
            if set.is_empty() || set.iter().any(|l| l.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must list at least one non-empty label".to_string(),
                });
            }
        }
        Ok(())
    }
}
