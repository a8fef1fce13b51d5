use std::io::{self, Write};

use serde::Serialize;

use crate::ScriptWrap;

/// Opening delimiter emitted in [`ScriptWrap::WithTags`] mode.
const SCRIPT_OPEN: &str = "<script type=\"text/javascript\">";
/// Closing delimiter emitted in [`ScriptWrap::WithTags`] mode.
const SCRIPT_CLOSE: &str = "</script>";

/// Serializes `payload` to JSON that is safe to embed in a script context.
///
/// The serialized text additionally escapes `<`, `>`, `&`, and the U+2028 /
/// U+2029 line separators as `\uXXXX` sequences. JSON syntax only permits
/// those characters inside string literals, so rewriting them preserves the
/// decoded value while guaranteeing the output can never contain a
/// `</script>` sequence that would terminate the enclosing context early.
///
/// # Examples
///
/// ```
/// use webdiag_sink::script_safe_json;
///
/// let json = script_safe_json(&serde_json::json!({ "note": "</script>" })).unwrap();
/// assert!(!json.contains("</script>"));
/// assert_eq!(json, r#"{"note":"\u003c/script\u003e"}"#);
/// ```
pub fn script_safe_json<T: Serialize + ?Sized>(payload: &T) -> serde_json::Result<String> {
    let raw = serde_json::to_string(payload)?;
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    Ok(out)
}

/// Streaming sink that ships serialized payloads to the client-side console.
///
/// Each call to [`log`](Self::log) emits one `console.log(...)` statement
/// into the owned writer, wrapped in `<script>` delimiters when the
/// configured [`ScriptWrap`] requests a self-contained fragment, and flushes
/// the writer before returning so the channel observes the message
/// immediately; there is no deferred or batched delivery.
///
/// # Examples
///
/// Emit a bare statement for a caller already inside a script block:
///
/// ```
/// use webdiag_sink::{ConsoleSink, ScriptWrap};
///
/// let mut sink = ConsoleSink::with_wrap(Vec::new(), ScriptWrap::Bare);
/// sink.log(&vec![1, 2, 3])?;
///
/// assert_eq!(sink.into_inner(), b"console.log([1,2,3]);\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct ConsoleSink<W> {
    writer: W,
    wrap: ScriptWrap,
}

impl<W> ConsoleSink<W> {
    /// Creates a sink that wraps each statement in `<script>` tags.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_wrap(writer, ScriptWrap::WithTags)
    }

    /// Creates a sink with the provided [`ScriptWrap`] policy.
    #[must_use]
    pub fn with_wrap(writer: W, wrap: ScriptWrap) -> Self {
        Self { writer, wrap }
    }

    /// Returns the current [`ScriptWrap`] policy.
    #[must_use]
    pub const fn wrap(&self) -> ScriptWrap {
        self.wrap
    }

    /// Updates the [`ScriptWrap`] policy used for subsequent statements.
    pub fn set_wrap(&mut self, wrap: ScriptWrap) {
        self.wrap = wrap;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> ConsoleSink<W>
where
    W: Write,
{
    /// Emits one console-log statement for `payload` using the sink's policy.
    ///
    /// Serialization failures surface as [`io::ErrorKind::InvalidData`] so
    /// callers deal with a single error channel for both rendering paths.
    pub fn log<T: Serialize + ?Sized>(&mut self, payload: &T) -> io::Result<()> {
        self.log_with_wrap(payload, self.wrap)
    }

    /// Emits one statement using an explicit [`ScriptWrap`] without mutating
    /// the sink's configured policy.
    pub fn log_with_wrap<T: Serialize + ?Sized>(
        &mut self,
        payload: &T,
        wrap: ScriptWrap,
    ) -> io::Result<()> {
        let json = script_safe_json(payload)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

        if wrap.wraps() {
            writeln!(self.writer, "{SCRIPT_OPEN}console.log({json});{SCRIPT_CLOSE}")?;
        } else {
            writeln!(self.writer, "console.log({json});")?;
        }

        self.writer.flush()
    }
}
