//! Zola posts.
//!
//! Each post is a Markdown file with a TOML front-matter block between `+++`
//! fences, followed by the same body a backup gets.

use chrono::{DateTime, Datelike, Utc};
use issueblog_config::{LabelConfig, PostsConfig};
use issueblog_protocol::{Comment, Issue};
use serde::Serialize;
use toml::value::{Date, Datetime};

use crate::backup::compose_body;
use crate::error::Result;

/// File name of the post for `issue`.
///
/// The title keeps alphanumerics, spaces, `-` and `_`; it is trimmed, cut to
/// `slug_length` characters and its spaces become `-`.
///
/// # Examples
///
/// ```
/// use issueblog_protocol::Issue;
/// use issueblog_site::post::post_file_name;
///
/// let issue = Issue::builder(42, "Hello, World!").build();
/// assert_eq!(post_file_name(&issue, 50), "0042_Hello-World.md");
/// ```
#[must_use]
pub fn post_file_name(issue: &Issue, slug_length: usize) -> String {
    let kept: String = issue
        .title
        .chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let slug: String = kept
        .trim()
        .chars()
        .take(slug_length)
        .map(|c| if c == ' ' { '-' } else { c })
        .collect();
    format!("{:04}_{slug}.md", issue.number)
}

/// Turns Markdown into a one-line plain description of at most `max_chars`
/// characters.
///
/// Emphasis and heading markers are dropped, double quotes become single
/// quotes, brackets become parentheses and line breaks become spaces.
///
/// # Examples
///
/// ```
/// use issueblog_site::post::sanitize_description;
///
/// assert_eq!(sanitize_description("# **Hi** \"there\"\n[link]", 100), "Hi 'there' (link)");
/// ```
#[must_use]
pub fn sanitize_description(text: &str, max_chars: usize) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '_' | '`' | '\\'))
        .map(|c| match c {
            '"' => '\'',
            '\n' | '\r' => ' ',
            '[' => '(',
            ']' => ')',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.chars().count() > max_chars {
        cleaned.chars().take(max_chars).collect::<String>().trim().to_string()
    } else {
        cleaned.to_string()
    }
}

/// The `+++` block Zola reads.
#[derive(Debug, Serialize)]
struct FrontMatter<'a> {
    title: &'a str,
    date: Datetime,
    updated: Datetime,
    draft: bool,
    description: String,
    taxonomies: Taxonomies<'a>,
    extra: Extra<'a>,
}

#[derive(Debug, Serialize)]
struct Taxonomies<'a> {
    categories: Vec<&'a str>,
    tags: Vec<&'a str>,
}

/// Per-post theme switches, copied from [`PostsConfig`].
#[derive(Debug, Serialize)]
struct Extra<'a> {
    lang: &'a str,
    toc: bool,
    comment: bool,
    copy: bool,
    math: bool,
    mermaid: bool,
    featured: bool,
    display_tags: bool,
    truncate_summary: bool,
}

impl<'a> Extra<'a> {
    fn from_config(posts: &'a PostsConfig) -> Self {
        Self {
            lang: &posts.lang,
            toc: posts.toc,
            comment: posts.comment,
            copy: posts.copy,
            math: posts.math,
            mermaid: posts.mermaid,
            featured: posts.featured,
            display_tags: posts.display_tags,
            truncate_summary: posts.truncate_summary,
        }
    }
}

/// A TOML local date (no time, no offset), so Zola sees `date = 2024-01-02`.
fn toml_date(at: DateTime<Utc>) -> Datetime {
    Datetime::from(Date {
        year: at.year() as u16,
        month: at.month() as u8,
        day: at.day() as u8,
    })
}

/// The complete post file for `issue`.
///
/// Tags are the issue's labels minus the reserved ones.
///
/// # Errors
///
/// Returns [`Error::FrontMatter`](crate::Error::FrontMatter) if the
/// front-matter cannot be serialized.
pub fn render_post(
    issue: &Issue,
    comments: &[Comment],
    me: &str,
    posts: &PostsConfig,
    labels: &LabelConfig,
) -> Result<String> {
    let source = if issue.body.is_empty() {
        &issue.title
    } else {
        &issue.body
    };
    let front = FrontMatter {
        title: &issue.title,
        date: toml_date(issue.created_at),
        updated: toml_date(issue.updated_at),
        draft: false,
        description: sanitize_description(source, posts.description_length),
        taxonomies: Taxonomies {
            categories: Vec::new(),
            tags: issue
                .labels
                .iter()
                .map(String::as_str)
                .filter(|l| !labels.is_reserved(l))
                .collect(),
        },
        extra: Extra::from_config(posts),
    };

    Ok(format!(
        "+++\n{}+++\n\n{}\n\n",
        toml::to_string(&front)?,
        compose_body(issue, comments, me)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, front_matter};

    #[test]
    fn file_name_slug() {
        let issue = Issue::builder(3, "  Rust 异步 / async: notes!  ").build();
        assert_eq!(post_file_name(&issue, 50), "0003_Rust-异步--async-notes.md");
    }

    #[test]
    fn file_name_is_cut_to_slug_length() {
        let issue = Issue::builder(1, "abcdefghij").build();
        assert_eq!(post_file_name(&issue, 4), "0001_abcd.md");
    }

    #[test]
    fn description_is_truncated_by_characters() {
        let text = "字".repeat(120);
        assert_eq!(sanitize_description(&text, 100).chars().count(), 100);
    }

    #[test]
    fn description_strips_markdown() {
        assert_eq!(
            sanitize_description("## Title\r\n`code` and _em_ \\ done", 100),
            "Title  code and em  done"
        );
    }

    #[test]
    fn front_matter_rendering() {
        let issue = Issue::builder(8, "Say \"hi\"")
            .author("me")
            .body("Hello **there**")
            .labels(["Rust", "Top"])
            .created_at(at(2))
            .updated_at(at(5))
            .html_url("https://github.com/me/blog/issues/8")
            .build();
        let post = render_post(
            &issue,
            &[],
            "me",
            &PostsConfig::default(),
            &LabelConfig::default(),
        )
        .unwrap();

        assert!(post.starts_with("+++\n"));
        assert!(post.contains("date = 2024-01-02\n"));
        assert!(post.contains("updated = 2024-01-05\n"));
        assert!(post.contains("\n[taxonomies]\n"));
        assert!(post.contains("\n[extra]\n"));
        assert!(post.ends_with(
            "+++\n\n# [Say \"hi\"](https://github.com/me/blog/issues/8)\n\nHello **there**\n\n"
        ));

        let front = front_matter(&post);
        assert_eq!(front["title"].as_str(), Some("Say \"hi\""));
        assert_eq!(front["date"].as_datetime().unwrap().to_string(), "2024-01-02");
        assert_eq!(front["draft"].as_bool(), Some(false));
        assert_eq!(front["description"].as_str(), Some("Hello there"));

        let taxonomies = front["taxonomies"].as_table().unwrap();
        assert_eq!(taxonomies["categories"].as_array().unwrap().len(), 0);
        assert_eq!(taxonomies["tags"].as_array().unwrap(), &[toml::Value::from("Rust")]);

        let extra = front["extra"].as_table().unwrap();
        assert_eq!(extra["lang"].as_str(), Some("zh-CN"));
        assert_eq!(extra["toc"].as_bool(), Some(true));
        assert_eq!(extra["comment"].as_bool(), Some(false));
        assert_eq!(extra["copy"].as_bool(), Some(true));
        assert_eq!(extra["display_tags"].as_bool(), Some(true));
        assert_eq!(extra["truncate_summary"].as_bool(), Some(false));
    }

    #[test]
    fn control_characters_survive_the_front_matter() {
        let issue = Issue::builder(1, "a\u{1}b \\ c").author("me").body("x").build();
        let post = render_post(
            &issue,
            &[],
            "me",
            &PostsConfig::default(),
            &LabelConfig::default(),
        )
        .unwrap();
        assert_eq!(front_matter(&post)["title"].as_str(), Some("a\u{1}b \\ c"));
    }

    #[test]
    fn empty_body_falls_back_to_title() {
        let issue = Issue::builder(1, "Only a [title]").author("me").build();
        let post = render_post(
            &issue,
            &[],
            "me",
            &PostsConfig::default(),
            &LabelConfig::default(),
        )
        .unwrap();
        let front = front_matter(&post);
        assert_eq!(front["description"].as_str(), Some("Only a (title)"));
        assert!(front["taxonomies"]["tags"].as_array().unwrap().is_empty());
    }

    #[test]
    fn my_comments_are_appended() {
        let issue = Issue::builder(1, "t").author("me").body("b").build();
        let comments = [Comment::new(1, "me", "more"), Comment::new(2, "you", "hey")];
        let post = render_post(
            &issue,
            &comments,
            "me",
            &PostsConfig::default(),
            &LabelConfig::default(),
        )
        .unwrap();
        assert!(post.ends_with("b\n\n---\n\nmore\n\n"));
        assert!(!post.contains("hey"));
    }
}
