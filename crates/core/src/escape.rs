//! crates/core/src/escape.rs
//! HTML escaping for event text embedded in inline markup.

use std::borrow::Cow;

/// Returns `true` when `byte` needs escaping in markup text or attributes.
const fn needs_escape(byte: u8) -> bool {
    matches!(byte, b'&' | b'<' | b'>' | b'"' | b'\'')
}

/// Appends `input` to `out`, escaping markup metacharacters.
///
/// Escapes `&`, `<`, `>`, `"`, and `'`, which covers both text content and
/// single/double-quoted attribute positions.
pub fn push_html_escaped(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Escapes markup metacharacters in `input`.
///
/// Borrows the input unchanged when no escaping is required, which is the
/// common case for runtime error messages.
///
/// # Examples
///
/// ```
/// use webdiag_core::escape::html_escape;
///
/// assert_eq!(html_escape("div by zero"), "div by zero");
/// assert_eq!(html_escape("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
/// ```
#[must_use]
pub fn html_escape(input: &str) -> Cow<'_, str> {
    if input.bytes().any(needs_escape) {
        let mut out = String::with_capacity(input.len() + 8);
        push_html_escaped(&mut out, input);
        Cow::Owned(out)
    } else {
        Cow::Borrowed(input)
    }
}
