use std::io::{self, Write};

use webdiag_core::escape::push_html_escaped;
use webdiag_core::{Severity, SourceLocation};

/// Style rules emitted ahead of every block so the fragment renders the same
/// regardless of where in the document it lands.
const STYLE_SHEET: &str = "<style type=\"text/css\">\n\
    .error, .warning, .notice { border: 1px solid; margin: 4px 0; padding: 4px 6px; font-family: monospace; }\n\
    .error { border-color: #c00000; background-color: #ffd9d9; }\n\
    .warning { border-color: #b08000; background-color: #fff3c4; }\n\
    .notice { border-color: #0060a0; background-color: #d9ecff; }\n\
    </style>\n";

/// Streaming sink that renders intercepted errors as styled inline markup.
///
/// Each call to [`write_block`](Self::write_block) emits a self-contained
/// fragment into the owned writer: the style rules, then a container tagged
/// with the severity's CSS class holding the labelled message and the
/// `File:` / `Line:` attribution. Message and file text are HTML-escaped;
/// everything else in the block is trusted static markup.
///
/// # Examples
///
/// ```
/// use webdiag_core::{Severity, SourceLocation, codes};
/// use webdiag_sink::InlineSink;
///
/// let mut sink = InlineSink::new(Vec::new());
/// sink.write_block(
///     Severity::from_code(codes::ERROR),
///     codes::ERROR,
///     "div by zero",
///     &SourceLocation::new("a.txt", 42),
/// )?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.contains("<div class=\"error\">"));
/// assert!(output.contains("Line: 42"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct InlineSink<W> {
    writer: W,
}

impl<W> InlineSink<W> {
    /// Creates a sink over the active output writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
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

impl<W> InlineSink<W>
where
    W: Write,
{
    /// Renders one error as a styled block on the output writer.
    ///
    /// The block shows the bucket label, the raw runtime `code`, the escaped
    /// `message`, and the source attribution, in that order. The write goes
    /// straight to the writer; callers observing the stream see the block as
    /// soon as this returns.
    pub fn write_block(
        &mut self,
        severity: Severity,
        code: i32,
        message: &str,
        source: &SourceLocation,
    ) -> io::Result<()> {
        let mut block = String::with_capacity(STYLE_SHEET.len() + message.len() + 160);
        block.push_str(STYLE_SHEET);

        block.push_str("<div class=\"");
        block.push_str(severity.css_class());
        block.push_str("\">\n<strong>");
        block.push_str(severity.label());
        block.push_str("</strong> [");
        block.push_str(&code.to_string());
        block.push_str("] ");
        push_html_escaped(&mut block, message);
        block.push_str("<br>\nFile: ");
        push_html_escaped(&mut block, source.file());
        block.push_str("<br>\nLine: ");
        block.push_str(&source.line().to_string());
        block.push_str("<br>\n</div>\n");

        self.writer.write_all(block.as_bytes())
    }
}
