//! Friend-link submissions.
//!
//! Visitors submit a link by commenting on a friends issue with one
//! `key：value` line per field, using the fullwidth colon:
//!
//! ```text
//! 名字：Foo
//! 链接：https://foo.example
//! 描述：Foo's notes
//! ```
//!
//! Recognized keys are 名字 (name), 链接 (link) and 描述 (description). Other
//! lines are ignored and missing fields stay empty.

use std::fmt;

/// Separator between key and value.
const SEPARATOR: char = '：';

/// Header of the friend-link table on the index page.
pub const TABLE_HEAD: &str = "| Name | Link | Desc |\n| ---- | ---- | ---- |\n";

/// One row of the friend-link table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendLink {
    /// Display name.
    pub name: String,
    /// Site URL.
    pub link: String,
    /// Short description.
    pub description: String,
}

impl FriendLink {
    /// Parses a submission comment.
    ///
    /// Each line is split on its first fullwidth colon; key and value are
    /// trimmed. Blank lines, lines without a separator and unknown keys are
    /// skipped, so a body with no recognized key yields an empty row.
    ///
    /// # Examples
    ///
    /// ```
    /// use issueblog_site::FriendLink;
    ///
    /// let link = FriendLink::parse("名字：Foo\n链接：http://x\n描述：bar");
    /// assert_eq!(link.to_string(), "| Foo | http://x | bar |");
    /// ```
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let mut link = Self::default();

        for line in body.lines().filter(|l| !l.trim().is_empty()) {
            let Some((key, value)) = line.split_once(SEPARATOR) else {
                continue;
            };
            let field = match key.trim() {
                "名字" => &mut link.name,
                "链接" => &mut link.link,
                "描述" => &mut link.description,
                _ => continue,
            };
            *field = value.trim().to_string();
        }
        link
    }
}

impl fmt::Display for FriendLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {} | {} | {} |",
            escape_cell(&self.name),
            escape_cell(&self.link),
            escape_cell(&self.description)
        )
    }
}

/// Escapes pipes so a value cannot split a table cell.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
