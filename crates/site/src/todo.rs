//! Task-list extraction for the TODO section.

/// Prefix of a completed task-list item.
const DONE_PREFIX: &str = "- [x] ";
/// Prefix of an open task-list item.
const PENDING_PREFIX: &str = "- [ ] ";

/// The task-list lines of an issue body, split by completion.
///
/// Lines are kept verbatim, including their `- [x] ` / `- [ ] ` prefix, and
/// in body order within each group. Only lowercase `x` marks an item done.
///
/// # Examples
///
/// ```
/// use issueblog_site::TodoChecklist;
///
/// let list = TodoChecklist::from_body("- [x] done1\n- [ ] todo1\n- [ ] todo2");
/// assert_eq!(list.done, ["- [x] done1"]);
/// assert_eq!(list.pending, ["- [ ] todo1", "- [ ] todo2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChecklist {
    /// Completed items.
    pub done: Vec<String>,
    /// Open items.
    pub pending: Vec<String>,
}

impl TodoChecklist {
    /// Collects the task-list lines of `body`.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let mut list = Self::default();
        for line in body.lines() {
            if line.starts_with(DONE_PREFIX) {
                list.done.push(line.to_string());
            } else if line.starts_with(PENDING_PREFIX) {
                list.pending.push(line.to_string());
            }
        }
        list
    }

    /// Done items first, then pending ones.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.done.iter().chain(&self.pending).map(String::as_str)
    }
}
