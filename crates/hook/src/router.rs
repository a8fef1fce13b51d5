use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use webdiag_core::ErrorEvent;
use webdiag_sink::{ConsoleSink, InlineSink, ScriptWrap};

use crate::RenderMode;

/// Wire shape of the console payload for one intercepted error.
///
/// Field names follow the host runtime's handler-argument naming so remote
/// consoles show familiar keys.
#[derive(Serialize)]
struct ConsolePayload<'a> {
    errno: i32,
    errstr: &'a str,
    errfile: &'a str,
    errline: u32,
}

/// Routes intercepted errors to the inline or console channel.
///
/// Constructed once at process start around the active output writer; both
/// channels target the same stream. The router is the only owner of the
/// [`RenderMode`] cell and the only component that reads it, once per event.
///
/// # Examples
///
/// ```
/// use webdiag_core::{ErrorEvent, SourceLocation, codes};
/// use webdiag_hook::{ErrorRouter, RenderMode};
///
/// let router = ErrorRouter::new(std::io::sink());
/// assert_eq!(router.mode(), RenderMode::InlineMarkup);
///
/// router.set_mode(RenderMode::RemoteConsole);
/// router.handle(&ErrorEvent::new(
///     codes::ERROR,
///     "div by zero",
///     SourceLocation::new("a.txt", 42),
/// ));
/// ```
pub struct ErrorRouter {
    mode: AtomicU8,
    wrap: ScriptWrap,
    output: Mutex<Box<dyn Write + Send>>,
}

impl ErrorRouter {
    /// Creates a router over the active output writer, in the default
    /// [`RenderMode::InlineMarkup`] with wrapped console statements.
    #[must_use]
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            mode: AtomicU8::new(RenderMode::default().as_u8()),
            wrap: ScriptWrap::WithTags,
            output: Mutex::new(Box::new(writer)),
        }
    }

    /// Sets the initial render mode.
    #[must_use]
    pub fn with_mode(self, mode: RenderMode) -> Self {
        self.set_mode(mode);
        self
    }

    /// Sets the [`ScriptWrap`] policy used by the console channel.
    #[must_use]
    pub fn with_wrap(mut self, wrap: ScriptWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Returns the currently selected render mode.
    #[must_use]
    pub fn mode(&self) -> RenderMode {
        RenderMode::from_u8(self.mode.load(Ordering::Relaxed))
    }

    /// Selects the rendering channel for subsequent events.
    ///
    /// Unconditional overwrite, idempotent. Events already past their
    /// [`handle`](Self::handle) snapshot keep the channel they started with.
    pub fn set_mode(&self, mode: RenderMode) {
        self.mode.store(mode.as_u8(), Ordering::Relaxed);
    }

    /// Classifies and renders one intercepted error.
    ///
    /// The mode is snapshotted once on entry. Rendering failures never
    /// propagate: the host runtime's reporting flow must complete regardless,
    /// so any serialization or IO error degrades to a best-effort plain
    /// fallback line.
    pub fn handle(&self, event: &ErrorEvent) {
        let mode = self.mode();
        let outcome = match mode {
            RenderMode::RemoteConsole => self.render_console(event),
            RenderMode::InlineMarkup => self.render_inline(event),
        };

        if let Err(error) = outcome {
            tracing::warn!(%error, %mode, "diagnostic rendering failed, emitting fallback");
            self.emit_fallback(event);
        }
    }

    fn lock_output(&self) -> std::sync::MutexGuard<'_, Box<dyn Write + Send>> {
        // A thread that panicked while rendering must not disable the handler
        // for the rest of the process.
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn render_console(&self, event: &ErrorEvent) -> io::Result<()> {
        let payload = ConsolePayload {
            errno: event.code(),
            errstr: event.message(),
            errfile: event.source().file(),
            errline: event.source().line(),
        };
        let mut output = self.lock_output();
        ConsoleSink::with_wrap(&mut *output, self.wrap).log(&payload)
    }

    fn render_inline(&self, event: &ErrorEvent) -> io::Result<()> {
        let mut output = self.lock_output();
        InlineSink::new(&mut *output).write_block(
            event.severity(),
            event.code(),
            event.message(),
            event.source(),
        )
    }

    fn emit_fallback(&self, event: &ErrorEvent) {
        let mut output = self.lock_output();
        let _ = writeln!(
            output,
            "diagnostic fallback: [{}] {} at {}",
            event.code(),
            event.message(),
            event.source(),
        );
        let _ = output.flush();
    }
}

impl std::fmt::Debug for ErrorRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorRouter")
            .field("mode", &self.mode())
            .field("wrap", &self.wrap)
            .finish_non_exhaustive()
    }
}
