//! The two generation runs: the index run (`README.md`, the feed and
//! backups) and the posts run (Zola posts).

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use issueblog_config::{Config, Repository};
use issueblog_github::{FetchOptions, IssueSource};
use issueblog_protocol::{Authored, Comment, Issue};
use tracing::{info, instrument};

use crate::backup::{backup_file_name, issues_to_generate, render_backup};
use crate::classify::Classifier;
use crate::error::Result;
use crate::feed::{Channel, Feed};
use crate::index::{IndexHeader, render_index};
use crate::post::{post_file_name, render_post};
use crate::write::write_document;

/// What an index run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexReport {
    /// The index page.
    pub readme: PathBuf,
    /// The RSS feed.
    pub feed: PathBuf,
    /// Number of feed entries.
    pub feed_items: usize,
    /// Backup files written.
    pub backups: Vec<PathBuf>,
}

/// What a posts run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostsReport {
    /// The posts directory.
    pub dir: PathBuf,
    /// Post files written.
    pub posts: Vec<PathBuf>,
}

async fn comments_of<S: IssueSource>(
    source: &S,
    repo: &Repository,
    issue: &Issue,
) -> Result<Vec<Comment>> {
    if issue.comment_count == 0 {
        return Ok(Vec::new());
    }
    Ok(source
        .list_comments(repo.owner(), repo.repo(), issue.number)
        .await?)
}

/// Renders the index page, the feed and backups of new issues.
///
/// `issue_number` forces the backup of that issue to be rewritten. `now` is
/// written as the feed's build time.
///
/// # Errors
///
/// Fails on tracker errors and when an output cannot be written.
#[instrument(skip(source, config, now), fields(repo = %repo))]
pub async fn build_index<S: IssueSource>(
    source: &S,
    config: &Config,
    repo: &Repository,
    issue_number: Option<u64>,
    now: DateTime<Utc>,
) -> Result<IndexReport> {
    let me = source.current_user().await?;
    let info = source.repository(repo.owner(), repo.repo()).await?;
    info!(user = %me, "building index");

    let view = Classifier::new(source, repo, &me, config).classify().await?;
    let header = IndexHeader {
        owner: info.owner.clone(),
        repo: repo.full_name(),
        branch: config.index.branch.clone(),
        feed_file: config.feed.file_name(),
    };
    let readme = config.index.readme_path.clone();
    write_document(&readme, &render_index(&view, &header, &config.index))?;
    info!(path = %readme.display(), "wrote index");

    let issues = source
        .list_issues(repo.owner(), repo.repo(), &FetchOptions::default())
        .await?;
    let channel = Channel::for_repo(
        &info,
        &config.index.branch,
        &config.feed.file_name(),
        &config.feed.subtitle,
        now,
    );
    let feed = Feed::from_issues(channel, &issues, &me);
    let feed_path = config.feed.path.clone();
    write_document(&feed_path, &feed.to_string())?;
    info!(path = %feed_path.display(), items = feed.items.len(), "wrote feed");

    let dir = &config.index.backup_dir;
    let mut backups = Vec::new();
    for issue in issues_to_generate(source, repo, dir, issue_number).await? {
        if !issue.is_mine(&me) {
            continue;
        }
        let comments = comments_of(source, repo, &issue).await?;
        let path = dir.join(backup_file_name(&issue));
        write_document(&path, &render_backup(&issue, &comments, &me))?;
        backups.push(path);
    }
    info!(count = backups.len(), dir = %dir.display(), "wrote backups");

    Ok(IndexReport {
        readme,
        feed: feed_path,
        feed_items: feed.items.len(),
        backups,
    })
}

/// Writes a Zola post for every self-authored issue not yet in the posts
/// directory.
///
/// # Errors
///
/// Fails on tracker errors and when a post cannot be written.
#[instrument(skip(source, config), fields(repo = %repo))]
pub async fn generate_posts<S: IssueSource>(
    source: &S,
    config: &Config,
    repo: &Repository,
) -> Result<PostsReport> {
    let me = source.current_user().await?;
    let dir: &Path = &config.posts.dir;

    let mut posts = Vec::new();
    for issue in issues_to_generate(source, repo, dir, None).await? {
        if !issue.is_mine(&me) {
            continue;
        }
        let comments = comments_of(source, repo, &issue).await?;
        let path = dir.join(post_file_name(&issue, config.posts.slug_length));
        let post = render_post(&issue, &comments, &me, &config.posts, &config.labels)?;
        write_document(&path, &post)?;
        info!(number = issue.number, title = %issue.title, "generated post");
        posts.push(path);
    }

    Ok(PostsReport {
        dir: dir.to_path_buf(),
        posts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::already_backed_up;
    use crate::test_utils::{FakeSource, at, front_matter};
    use std::fs;

    fn config_in(root: &Path) -> Config {
        let mut config = Config::default();
        config.index.readme_path = root.join("README.md");
        config.index.backup_dir = root.join("BACKUP");
        config.feed.path = root.join("feed.xml");
        config.posts.dir = root.join("content/posts");
        config
    }

    fn source() -> FakeSource {
        FakeSource::new("me")
            .label("Rust", Some("Rust notes"))
            .issue(
                Issue::builder(3, "Guest question")
                    .author("you")
                    .body("hi")
                    .created_at(at(3))
                    .build(),
            )
            .issue(
                Issue::builder(2, "Second post")
                    .author("me")
                    .body("Second \u{0}body")
                    .labels(["Rust"])
                    .created_at(at(2))
                    .comment_count(2)
                    .build(),
            )
            .issue(
                Issue::builder(1, "First post")
                    .author("me")
                    .body("First body")
                    .labels(["Top"])
                    .created_at(at(1))
                    .build(),
            )
            .comment(2, Comment::new(20, "me", "update"))
            .comment(2, Comment::new(21, "you", "thanks"))
    }

    #[tokio::test]
    async fn index_run_writes_all_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        let repo = Repository::new("me", "blog");

        let report = build_index(&source(), &config, &repo, None, at(10)).await.unwrap();

        let readme = fs::read_to_string(&report.readme).unwrap();
        assert!(readme.starts_with("# me's Blog\n"));
        assert!(readme.contains("## 置顶文章\n\n- [First post]"));
        assert!(readme.contains("\n## Rust\n\n- [Second post]"));
        assert!(!readme.contains("Guest question"));

        let feed = fs::read_to_string(&report.feed).unwrap();
        assert_eq!(report.feed_items, 2);
        assert!(!feed.contains('\u{0}'));
        assert!(feed.contains("<p>Second body</p>"));

        assert_eq!(report.backups.len(), 2);
        let backup = fs::read_to_string(config.index.backup_dir.join("0002_Second.post.md")).unwrap();
        assert!(backup.ends_with("\n\n---\n\nupdate"));
        assert!(!backup.contains("thanks"));
    }

    #[tokio::test]
    async fn rerun_writes_no_new_backups() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        let repo = Repository::new("me", "blog");
        let source = source();

        let first = build_index(&source, &config, &repo, None, at(10)).await.unwrap();
        let before = fs::read_to_string(&first.backups[0]).unwrap();

        let second = build_index(&source, &config, &repo, None, at(10)).await.unwrap();
        assert!(second.backups.is_empty());

        let forced = build_index(&source, &config, &repo, Some(2), at(10)).await.unwrap();
        assert_eq!(forced.backups, [config.index.backup_dir.join("0002_Second.post.md")]);
        assert_eq!(fs::read_to_string(&forced.backups[0]).unwrap(), before);
    }

    #[tokio::test]
    async fn backed_up_numbers_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        let repo = Repository::new("me", "blog");

        build_index(&source(), &config, &repo, None, at(10)).await.unwrap();
        let numbers = already_backed_up(&config.index.backup_dir).unwrap();
        assert_eq!(numbers.into_iter().collect::<Vec<_>>(), [1, 2]);
    }

    #[tokio::test]
    async fn posts_run_writes_my_posts_once() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        let repo = Repository::new("me", "blog");
        let source = source();

        let report = generate_posts(&source, &config, &repo).await.unwrap();
        let names: Vec<_> = report
            .posts
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["0002_Second-post.md", "0001_First-post.md"]);

        let post = fs::read_to_string(&report.posts[0]).unwrap();
        let front = front_matter(&post);
        assert_eq!(front["title"].as_str(), Some("Second post"));
        assert_eq!(front["taxonomies"]["tags"].as_array().unwrap(), &[toml::Value::from("Rust")]);

        let again = generate_posts(&source, &config, &repo).await.unwrap();
        assert!(again.posts.is_empty());
    }
}
