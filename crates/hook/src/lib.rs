#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `webdiag-hook` is the stateful centre of the webdiag workspace: it receives
//! intercepted runtime errors, classifies them, and dispatches them to one of
//! the two rendering channels provided by `webdiag-sink` according to a
//! process-wide [`RenderMode`].
//!
//! # Design
//!
//! The mode flag lives in an explicit [`ErrorRouter`] instance rather than a
//! hidden static: the embedding application constructs one router at startup
//! (injecting the output writer) and threads it to whatever needs it. Because
//! the host runtime's interception facility (the panic hook) is
//! process-global and may fire from any thread, the router is `Send + Sync`;
//! the mode is an atomic cell snapshotted once at the top of every
//! [`handle`](ErrorRouter::handle) call, so no event can observe a mode
//! change mid-dispatch.
//!
//! [`install`] registers the router with the runtime and returns a
//! [`HookGuard`] that restores the previously-active hook on
//! [`uninstall`](HookGuard::uninstall) or drop, so tests and scoped callers
//! always get the prior global state back, even on failure paths.
//!
//! # Errors
//!
//! [`ErrorRouter::handle`] never fails and never panics: an error handler
//! that throws during error handling would compromise the host's own
//! reporting flow, so rendering failures degrade to a best-effort plain-text
//! fallback line on the output writer.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use webdiag_core::{ErrorEvent, SourceLocation, codes};
//! use webdiag_hook::{ErrorRouter, RenderMode, install};
//!
//! let router = Arc::new(ErrorRouter::new(std::io::sink()));
//! router.set_mode(RenderMode::RemoteConsole);
//!
//! // Non-panic hosts can feed events directly.
//! router.handle(&ErrorEvent::new(
//!     codes::USER_NOTICE,
//!     "cache warmed",
//!     SourceLocation::new("boot.rs", 10),
//! ));
//!
//! // Panics raised anywhere in the process are routed while the guard lives.
//! let guard = install(Arc::clone(&router));
//! guard.uninstall();
//! ```

mod hook;
mod mode;
mod router;

pub use hook::{HookGuard, install};
pub use mode::RenderMode;
pub use router::ErrorRouter;
