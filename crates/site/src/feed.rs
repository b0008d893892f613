//! RSS 2.0 feed of the blog's posts.
//!
//! Every self-authored issue with a non-empty body becomes one `<item>` whose
//! `content:encoded` holds the body rendered to HTML inside CDATA. Text that
//! is not valid XML is stripped before rendering, so a stray control
//! character in an issue never produces a malformed feed.

use std::fmt;

use chrono::{DateTime, Utc};
use issueblog_protocol::{Authored, Issue, RepoInfo};

use crate::{markdown, xml};

/// Value of the channel's `<generator>` element.
const GENERATOR: &str = concat!("issueblog ", env!("CARGO_PKG_VERSION"));

/// Channel-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Feed title.
    pub title: String,
    /// Site link (the repository).
    pub link: String,
    /// Where the feed itself is published.
    pub self_link: String,
    /// Channel description.
    pub description: String,
    /// Build time, written as `lastBuildDate`.
    pub built_at: DateTime<Utc>,
}

impl Channel {
    /// Channel metadata for the blog of `repo`, published from `branch`.
    #[must_use]
    pub fn for_repo(
        repo: &RepoInfo,
        branch: &str,
        feed_file: &str,
        description: &str,
        built_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: format!("{}'s Blog", repo.owner),
            link: repo.html_url.clone(),
            self_link: raw_url(&repo.full_name, branch, feed_file),
            description: description.to_string(),
            built_at,
        }
    }
}

/// Raw-content URL of a file committed to `full_name` on `branch`.
#[must_use]
pub fn raw_url(full_name: &str, branch: &str, file: &str) -> String {
    format!("https://raw.githubusercontent.com/{full_name}/{branch}/{file}")
}

/// One feed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    /// Entry title.
    pub title: String,
    /// Issue URL, used as both link and permalink guid.
    pub link: String,
    /// Creation time of the issue.
    pub published: DateTime<Utc>,
    /// Label names.
    pub categories: Vec<String>,
    /// Rendered HTML body.
    pub content_html: String,
}

impl FeedItem {
    /// Builds an entry from an issue, sanitizing and rendering its body.
    #[must_use]
    pub fn from_issue(issue: &Issue) -> Self {
        let body = xml::sanitize(&issue.body);
        Self {
            title: issue.title.clone(),
            link: issue.html_url.clone(),
            published: issue.created_at,
            categories: issue.labels.clone(),
            content_html: markdown::to_html(&body),
        }
    }
}

/// Returns `true` if `issue` belongs in the feed of `me`.
#[must_use]
pub fn is_feed_entry(issue: &Issue, me: &str) -> bool {
    issue.is_mine(me) && !issue.is_pull_request && issue.has_body()
}

/// An RSS document; render it with `to_string()`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use issueblog_protocol::{Issue, RepoInfo};
/// use issueblog_site::feed::{Channel, Feed};
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// let channel = Channel::for_repo(&RepoInfo::github("octocat", "blog"), "master", "feed.xml", "Posts", at);
/// let issues = [Issue::builder(1, "Hi").author("octocat").body("hello").build()];
///
/// let feed = Feed::from_issues(channel, &issues, "octocat");
/// assert_eq!(feed.items.len(), 1);
/// assert!(feed.to_string().contains("<title>Hi</title>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    /// Channel metadata.
    pub channel: Channel,
    /// Entries in output order.
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// Builds the feed from the issues that qualify, in the given order.
    #[must_use]
    pub fn from_issues(channel: Channel, issues: &[Issue], me: &str) -> Self {
        let items = issues
            .iter()
            .filter(|issue| is_feed_entry(issue, me))
            .map(FeedItem::from_issue)
            .collect();
        Self { channel, items }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.channel;
        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            f,
            r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom" xmlns:content="http://purl.org/rss/1.0/modules/content/">"#
        )?;
        writeln!(f, "  <channel>")?;
        writeln!(f, "    <title>{}</title>", xml::escape(&c.title))?;
        writeln!(f, "    <link>{}</link>", xml::escape(&c.link))?;
        writeln!(f, "    <description>{}</description>", xml::escape(&c.description))?;
        writeln!(
            f,
            r#"    <atom:link href="{}" rel="self" type="application/rss+xml"/>"#,
            xml::escape(&c.self_link)
        )?;
        writeln!(f, "    <generator>{GENERATOR}</generator>")?;
        writeln!(f, "    <lastBuildDate>{}</lastBuildDate>", c.built_at.to_rfc2822())?;

        for item in &self.items {
            let link = xml::escape(&item.link);
            writeln!(f, "    <item>")?;
            writeln!(f, "      <title>{}</title>", xml::escape(&item.title))?;
            writeln!(f, "      <link>{link}</link>")?;
            writeln!(f, r#"      <guid isPermaLink="true">{link}</guid>"#)?;
            writeln!(f, "      <pubDate>{}</pubDate>", item.published.to_rfc2822())?;
            for category in &item.categories {
                writeln!(f, "      <category>{}</category>", xml::escape(category))?;
            }
            writeln!(
                f,
                "      <content:encoded>{}</content:encoded>",
                xml::cdata(&item.content_html)
            )?;
            writeln!(f, "    </item>")?;
        }

        writeln!(f, "  </channel>")?;
        writeln!(f, "</rss>")
    }
}
