//! GitHub-flavored Markdown to HTML.

use pulldown_cmark::{Options, Parser, html};

/// Renders `markdown` to HTML with the GFM extensions issues commonly use:
/// tables, strikethrough, task lists and footnotes.
#[must_use]
pub fn to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
