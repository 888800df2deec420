//! Remarkup dialect primitives
//!
//! Produces the literal token syntax of Phabricator's Remarkup dialect:
//! `**bold**`, `//italics//`, `` `code` ``, `{icon name color=value}`,
//! `[[url|title]]`.
//!
//! References: <https://secure.phabricator.com/book/phabricator/article/remarkup/>
//!
//! These are pure string transformations; nothing here escapes
//! Remarkup-special characters in its input.

/// Wrap text in bold delimiters.
///
/// # Examples
/// ```
/// assert_eq!(remarkup_report::remarkup::bold("hi"), "**hi**");
/// ```
pub fn bold(text: &str) -> String {
    format!("**{text}**")
}

/// Wrap text in italics delimiters.
///
/// # Examples
/// ```
/// assert_eq!(remarkup_report::remarkup::italics("hi"), "//hi//");
/// ```
pub fn italics(text: &str) -> String {
    format!("//{text}//")
}

/// Wrap text in inline-code delimiters.
pub fn code(text: &str) -> String {
    format!("`{text}`")
}

/// Emit an icon directive.
///
/// A blank or absent color omits the `color=` clause entirely; the single
/// space separating the icon name from the clause position is kept, so
/// `icon("bug", None)` renders `{icon bug }`.
pub fn icon(name: &str, color: Option<&str>) -> String {
    let color_clause = match color {
        Some(c) if !c.trim().is_empty() => format!("color={c}"),
        _ => String::new(),
    };
    format!("{{icon {name} {color_clause}}}")
}

/// Emit a titled link `[[url|title]]`, or the bare url when the title is
/// blank.
pub fn link(url: &str, title: &str) -> String {
    if title.trim().is_empty() {
        url.to_string()
    } else {
        format!("[[{url}|{title}]]")
    }
}

/// Percent-encode a string for embedding in a URL query component.
///
/// Uses `application/x-www-form-urlencoded` semantics: space becomes `+`,
/// alphanumerics and `*-._` pass through, everything else is escaped.
/// Total over `&str` — Rust strings are always valid UTF-8, so there is no
/// failure path.
pub fn encode_for_url(text: &str) -> String {
    url::form_urlencoded::byte_serialize(text.as_bytes()).collect()
}
