//! XML text helpers for the feed writer.
//!
//! Issue bodies routinely contain characters XML 1.0 cannot represent (NUL,
//! escape sequences pasted from terminals, and so on). Everything written
//! into the feed goes through [`sanitize`] first.

/// Returns `true` if `c` is allowed in an XML 1.0 document.
///
/// Allowed: `#x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]`.
#[must_use]
pub fn is_valid_xml_char(c: char) -> bool {
    matches!(
        u32::from(c),
        0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF
    )
}

/// Removes every character that is not valid in XML 1.0.
///
/// # Examples
///
/// ```
/// use issueblog_site::xml::sanitize;
///
/// assert_eq!(sanitize("a\u{0}b\u{1b}c"), "abc");
/// assert_eq!(sanitize("tab\tok"), "tab\tok");
/// ```
#[must_use]
pub fn sanitize(s: &str) -> String {
    s.chars().filter(|&c| is_valid_xml_char(c)).collect()
}

/// Sanitizes and escapes `s` for use as element text or an attribute value.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().filter(|&c| is_valid_xml_char(c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Wraps sanitized `s` in a CDATA section.
///
/// A literal `]]>` inside `s` would end the section early, so it is split
/// across two sections.
#[must_use]
pub fn cdata(s: &str) -> String {
    format!(
        "<![CDATA[{}]]>",
        sanitize(s).replace("]]>", "]]]]><![CDATA[>")
    )
}
