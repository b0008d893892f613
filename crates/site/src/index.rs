//! The `README.md` index page.
//!
//! Sections appear in a fixed order: header, pinned posts, recent posts, one
//! section per label, TODO checklists, friend links. Pinned, TODO and friend
//! sections are left out when they would be empty; the recent section is
//! always written.

use std::fmt::{self, Write as _};

use issueblog_config::IndexConfig;
use issueblog_protocol::Issue;

use crate::classify::{ClassifiedView, LabelGroup};
use crate::feed::raw_url;
use crate::friends::TABLE_HEAD;
use crate::todo::TodoChecklist;

/// What the page header links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexHeader {
    /// Blog owner shown in the title.
    pub owner: String,
    /// `owner/repo` the feed is committed to.
    pub repo: String,
    /// Branch the feed is committed to.
    pub branch: String,
    /// File name of the feed.
    pub feed_file: String,
}

impl fmt::Display for IndexHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "# {}'s Blog\n\n个人博客，使用 GitHub Actions 自动构建\n\n## 订阅\n\n- [RSS 订阅]({})\n\n---\n\n",
            self.owner,
            raw_url(&self.repo, &self.branch, &self.feed_file)
        )
    }
}

/// One post line: `- [title](url) - YYYY-MM-DD`.
struct IssueLine<'a>(&'a Issue);

impl fmt::Display for IssueLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let issue = self.0;
        writeln!(
            f,
            "- [{}]({}) - {}",
            issue.title,
            issue.html_url,
            issue.created_date()
        )
    }
}

/// The full index page; render it with `to_string()`.
#[derive(Debug, Clone, Copy)]
pub struct IndexPage<'a> {
    /// Page header.
    pub header: &'a IndexHeader,
    /// Classified issues.
    pub view: &'a ClassifiedView,
    /// Index settings; `anchor_threshold` items are shown per label before
    /// the rest is folded away.
    pub config: &'a IndexConfig,
}

impl IndexPage<'_> {
    fn write_label_group(&self, f: &mut fmt::Formatter<'_>, group: &LabelGroup) -> fmt::Result {
        write!(f, "\n## {}\n\n", group.label.name)?;
        for (i, issue) in group.issues.iter().enumerate() {
            if i == self.config.anchor_threshold {
                f.write_str("<details><summary>显示更多</summary>\n\n")?;
            }
            write!(f, "{}", IssueLine(issue))?;
        }
        if group.issues.len() > self.config.anchor_threshold {
            f.write_str("</details>\n")?;
        }
        Ok(())
    }
}

impl fmt::Display for IndexPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;
        write!(f, "{}", self.header)?;

        if !view.top.is_empty() {
            f.write_str("## 置顶文章\n\n")?;
            for issue in &view.top {
                write!(f, "{}", IssueLine(issue))?;
            }
        }

        f.write_str("## 最近更新\n\n")?;
        for issue in &view.recent {
            write!(f, "{}", IssueLine(issue))?;
        }

        for group in &view.label_groups {
            self.write_label_group(f, group)?;
        }

        if !view.todo.is_empty() {
            f.write_str("\n## TODO 列表\n\n")?;
            for issue in &view.todo {
                let list = TodoChecklist::from_body(&issue.body);
                write!(
                    f,
                    "### [{}]({}) - {} 完成, {} 待办\n\n",
                    issue.title,
                    issue.html_url,
                    list.done.len(),
                    list.pending.len()
                )?;
                for line in list.lines() {
                    writeln!(f, "{line}")?;
                }
                f.write_char('\n')?;
            }
        }

        if let Some(friends) = &view.friends {
            f.write_str("\n## 友情链接\n\n")?;
            f.write_str(TABLE_HEAD)?;
            for link in friends {
                writeln!(f, "{link}")?;
            }
        }
        Ok(())
    }
}

/// Renders the index page.
#[must_use]
pub fn render_index(view: &ClassifiedView, header: &IndexHeader, config: &IndexConfig) -> String {
    IndexPage {
        header,
        view,
        config,
    }
    .to_string()
}
