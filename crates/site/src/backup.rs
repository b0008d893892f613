//! Markdown backups of posts, and the directory listing that tracks them.
//!
//! A backup file is named `{number:04}_{title}.md`. The numeric prefix is the
//! only state issueblog keeps between runs: an issue whose number already
//! prefixes a file in the backup directory is not written again unless it is
//! requested explicitly.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use issueblog_config::Repository;
use issueblog_github::{FetchOptions, IssueSource};
use issueblog_protocol::{Authored, Comment, Issue};
use tracing::debug;

use crate::error::{Error, Result};

/// Characters removed from titles when they become file names.
const UNSAFE: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Longest file name most filesystems accept, in bytes.
const MAX_FILE_NAME_BYTES: usize = 255;

/// Parses the issue number a file name starts with.
///
/// The prefix is everything before the first `_` and must be all ASCII
/// digits.
///
/// # Examples
///
/// ```
/// use issueblog_site::backup::leading_number;
///
/// assert_eq!(leading_number("0042_Hello.md"), Some(42));
/// assert_eq!(leading_number("notes_1.md"), None);
/// assert_eq!(leading_number("README.md"), None);
/// ```
#[must_use]
pub fn leading_number(file_name: &str) -> Option<u64> {
    let (prefix, _) = file_name.split_once('_')?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Issue numbers that already have a file in `dir`.
///
/// The directory is created if it does not exist. Files without a numeric
/// prefix are ignored.
///
/// # Errors
///
/// Returns [`Error::ReadDir`] if the directory cannot be created or listed.
pub fn already_backed_up(dir: &Path) -> Result<BTreeSet<u64>> {
    let read_dir_err = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(read_dir_err)?;

    let mut numbers = BTreeSet::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let name = entry.map_err(read_dir_err)?.file_name();
        let name = name.to_string_lossy();
        match leading_number(&name) {
            Some(n) => {
                numbers.insert(n);
            }
            None => debug!(file = %name, "ignoring file without issue number"),
        }
    }
    Ok(numbers)
}

/// Issues of `repo` that need a file in `dir`.
///
/// These are all issues whose number is not yet in the directory, followed by
/// `explicit` (fetched by number) if it was not already among them.
///
/// # Errors
///
/// Fails if the directory cannot be read or the tracker cannot be queried,
/// including when `explicit` does not exist.
pub async fn issues_to_generate<S: IssueSource>(
    source: &S,
    repo: &Repository,
    dir: &Path,
    explicit: Option<u64>,
) -> Result<Vec<Issue>> {
    let done = already_backed_up(dir)?;
    let mut issues: Vec<Issue> = source
        .list_issues(repo.owner(), repo.repo(), &FetchOptions::default())
        .await?
        .into_iter()
        .filter(|i| !done.contains(&i.number))
        .collect();

    if let Some(number) = explicit.filter(|n| !issues.iter().any(|i| i.number == *n)) {
        issues.push(source.get_issue(repo.owner(), repo.repo(), number).await?);
    }

    debug!(
        backed_up = done.len(),
        pending = issues.len(),
        dir = %dir.display(),
        "selected issues to generate"
    );
    Ok(issues)
}

/// File name of the backup of `issue`.
///
/// Spaces become `.` and characters that are unsafe in paths are dropped.
/// The title part is cut on a character boundary so the whole name fits in
/// 255 bytes.
///
/// # Examples
///
/// ```
/// use issueblog_protocol::Issue;
/// use issueblog_site::backup::backup_file_name;
///
/// let issue = Issue::builder(7, "Hello World: a/b").build();
/// assert_eq!(backup_file_name(&issue), "0007_Hello.World.ab.md");
/// ```
#[must_use]
pub fn backup_file_name(issue: &Issue) -> String {
    let title: String = issue
        .title
        .chars()
        .filter(|c| !UNSAFE.contains(c) && !c.is_control())
        .map(|c| if c == ' ' { '.' } else { c })
        .collect();
    let prefix = format!("{:04}_", issue.number);
    let budget = MAX_FILE_NAME_BYTES.saturating_sub(prefix.len() + ".md".len());
    format!("{prefix}{}.md", truncate_bytes(&title, budget))
}

/// The longest prefix of `s` that is at most `max` bytes long.
fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// The Markdown of a post: a heading linking to the issue, the body, then
/// every comment by `me` after a horizontal rule.
#[must_use]
pub fn compose_body(issue: &Issue, comments: &[Comment], me: &str) -> String {
    let mut out = format!("# [{}]({})\n\n", issue.title, issue.html_url);
    out.push_str(&issue.body);
    for comment in comments.iter().filter(|c| c.is_mine(me)) {
        out.push_str("\n\n---\n\n");
        out.push_str(&comment.body);
    }
    out
}

/// The backup document of `issue`.
#[must_use]
pub fn render_backup(issue: &Issue, comments: &[Comment], me: &str) -> String {
    compose_body(issue, comments, me)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeSource;
    use proptest::prelude::*;

    #[test]
    fn leading_number_requires_digits_before_underscore() {
        assert_eq!(leading_number("12_a.md"), Some(12));
        assert_eq!(leading_number("0001_.md"), Some(1));
        assert_eq!(leading_number("_1.md"), None);
        assert_eq!(leading_number("1a_b.md"), None);
        assert_eq!(leading_number("+1_b.md"), None);
        assert_eq!(leading_number("12.md"), None);
    }

    #[test]
    fn already_backed_up_creates_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("BACKUP");

        let numbers = already_backed_up(&dir).unwrap();
        assert!(numbers.is_empty());
        assert!(dir.is_dir());
    }

    #[test]
    fn already_backed_up_ignores_malformed_names() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["0001_a.md", "12_b.md", "notes.md", "x_3.md", ".gitkeep"] {
            fs::write(tmp.path().join(name), "").unwrap();
        }

        let numbers = already_backed_up(tmp.path()).unwrap();
        assert_eq!(numbers.into_iter().collect::<Vec<_>>(), [1, 12]);
    }

    #[tokio::test]
    async fn issues_to_generate_skips_backed_up() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("0002_b.md"), "").unwrap();
        let source = FakeSource::new("me")
            .issue(Issue::builder(3, "c").build())
            .issue(Issue::builder(2, "b").build())
            .issue(Issue::builder(1, "a").build());
        let repo = Repository::new("me", "blog");

        let issues = issues_to_generate(&source, &repo, tmp.path(), None).await.unwrap();
        let numbers: Vec<_> = issues.iter().map(|i| i.number).collect();
        assert_eq!(numbers, [3, 1]);
    }

    #[tokio::test]
    async fn explicit_issue_is_regenerated_once() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("0002_b.md"), "").unwrap();
        let source = FakeSource::new("me")
            .issue(Issue::builder(2, "b").build())
            .issue(Issue::builder(1, "a").build());
        let repo = Repository::new("me", "blog");

        let forced = issues_to_generate(&source, &repo, tmp.path(), Some(2)).await.unwrap();
        let numbers: Vec<_> = forced.iter().map(|i| i.number).collect();
        assert_eq!(numbers, [1, 2]);

        let pending = issues_to_generate(&source, &repo, tmp.path(), Some(1)).await.unwrap();
        let numbers: Vec<_> = pending.iter().map(|i| i.number).collect();
        assert_eq!(numbers, [1]);
    }

    #[tokio::test]
    async fn missing_explicit_issue_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let source = FakeSource::new("me");
        let repo = Repository::new("me", "blog");

        let err = issues_to_generate(&source, &repo, tmp.path(), Some(99))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::GitHub(ref e) if e.is_not_found()));
    }

    #[test]
    fn body_appends_only_my_comments() {
        let issue = Issue::builder(1, "Title")
            .author("me")
            .body("Body")
            .html_url("https://github.com/me/blog/issues/1")
            .build();
        let comments = [
            Comment::new(1, "me", "first addendum"),
            Comment::new(2, "you", "nice post"),
            Comment::new(3, "me", "second addendum"),
        ];
        assert_eq!(
            render_backup(&issue, &comments, "me"),
            "# [Title](https://github.com/me/blog/issues/1)\n\nBody\n\n---\n\nfirst addendum\n\n---\n\nsecond addendum"
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let issue = Issue::builder(5, "Same").author("me").body("text").build();
        let comments = [Comment::new(1, "me", "more")];
        assert_eq!(
            render_backup(&issue, &comments, "me"),
            render_backup(&issue, &comments, "me")
        );
    }

    #[test]
    fn file_name_drops_unsafe_characters() {
        let issue = Issue::builder(123, "a/b\\c?d e").build();
        assert_eq!(backup_file_name(&issue), "0123_abcd.e.md");
        let long = Issue::builder(12345, "x").build();
        assert_eq!(backup_file_name(&long), "12345_x.md");
    }

    #[test]
    fn long_titles_fit_the_file_name_limit() {
        let issue = Issue::builder(42, "长".repeat(300)).build();
        let name = backup_file_name(&issue);

        assert!(name.len() <= MAX_FILE_NAME_BYTES);
        assert!(name.starts_with("0042_长长"));
        assert!(name.ends_with("长.md"));
        assert_eq!(leading_number(&name), Some(42));
    }

    #[test]
    fn long_title_can_be_written() {
        let tmp = tempfile::tempdir().unwrap();
        let issue = Issue::builder(7, "标题".repeat(150)).build();

        fs::write(tmp.path().join(backup_file_name(&issue)), "").unwrap();
        let numbers = already_backed_up(tmp.path()).unwrap();
        assert_eq!(numbers.into_iter().collect::<Vec<_>>(), [7]);
    }

    proptest! {
        #[test]
        fn written_file_names_are_recognized(number in 0u64..1_000_000, title in any::<String>()) {
            let issue = Issue::builder(number, title).build();
            let name = backup_file_name(&issue);
            prop_assert!(name.len() <= MAX_FILE_NAME_BYTES);
            prop_assert_eq!(leading_number(&name), Some(number));
        }
    }
}
