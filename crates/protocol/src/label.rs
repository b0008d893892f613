//! Repository labels and their ordering on the index page.
//!
//! Every label that is not reserved gets its own section on the generated
//! index. Sections are ordered so that labels carrying a description come
//! first (sorted by description), followed by the undescribed ones, with the
//! label name breaking ties in both groups.
//!
//! # Example
//!
//! ```
//! use issueblog_protocol::{Label, sort_for_index};
//!
//! let mut labels = vec![
//!     Label::new("B", None),
//!     Label::new("A", Some("x")),
//!     Label::new("C", Some("")),
//! ];
//! sort_for_index(&mut labels);
//!
//! let names: Vec<_> = labels.iter().map(|l| l.name.as_str()).collect();
//! assert_eq!(names, ["A", "B", "C"]);
//! ```

use serde::{Deserialize, Serialize};

/// A GitHub label as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The label name.
    pub name: String,
    /// The label description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Label {
    /// Creates a label.
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }

    /// Returns the description, treating a missing one as empty.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Sort key for index sections: `(has no description, description, name)`.
    #[must_use]
    pub fn index_order(&self) -> (bool, &str, &str) {
        let description = self.description();
        (description.is_empty(), description, &self.name)
    }

    /// Returns `true` if this label's name is one of `reserved`.
    #[must_use]
    pub fn is_reserved<S: AsRef<str>>(&self, reserved: &[S]) -> bool {
        reserved.iter().any(|r| r.as_ref() == self.name)
    }
}

/// Sorts labels in index order. See [`Label::index_order`].
pub fn sort_for_index(labels: &mut [Label]) {
    labels.sort_by(|a, b| a.index_order().cmp(&b.index_order()));
}
