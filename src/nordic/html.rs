//! Just enough HTML handling for the register pages: the `<title>` text and
//! the page text with markup removed.

use std::borrow::Cow;
use std::sync::LazyLock;

use quick_xml::escape::resolve_html5_entity;
use regex::{Captures, Regex};

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("title pattern"));
static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment pattern"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern"));
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .expect("entity pattern")
});

/// Text of the first `<title>` element, entities decoded, not trimmed.
pub fn title_text(html: &str) -> Option<String> {
    let caps = TITLE.captures(html)?;
    let inner = TAG.replace_all(&caps[1], "");
    Some(decode_entities(&inner).into_owned())
}

/// All text of the page: comments and tags dropped, entities decoded.
///
/// Text nodes are joined without separators, including script and style
/// bodies.
pub fn page_text(html: &str) -> String {
    let without_comments = COMMENT.replace_all(html, "");
    let text = TAG.replace_all(&without_comments, "");
    decode_entities(&text).into_owned()
}

/// Decode numeric character references and HTML5 named entities. Unknown
/// names and invalid code points are left as written.
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    ENTITY.replace_all(text, |caps: &Captures<'_>| {
        let body = &caps[1];
        let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32).map(String::from)
        } else if let Some(dec) = body.strip_prefix('#') {
            dec.parse::<u32>().ok().and_then(char::from_u32).map(String::from)
        } else {
            resolve_html5_entity(body).map(String::from)
        };
        decoded.unwrap_or_else(|| caps[0].to_string())
    })
}
