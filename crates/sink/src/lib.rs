#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `webdiag-sink` turns diagnostic data into one of two transmittable forms
//! and delivers it to an injected [`io::Write`](std::io::Write) target:
//!
//! - [`InlineSink`] renders a self-contained styled HTML block, visible to an
//!   end viewer inside the normal output stream.
//! - [`ConsoleSink`] serializes an arbitrary payload to script-safe JSON and
//!   emits it as a `console.log` statement for the client-side devtools
//!   console, flushing the writer before returning.
//!
//! The two paths carry the same information but target incompatible
//! presentation contexts, so they are independent sinks rather than one
//! renderer with a format flag threaded through its templates.
//!
//! # Design
//!
//! Both sinks own their writer, mirroring the workspace convention of
//! writer-owning streaming sinks: callers inject a stream (an HTTP response
//! body, a capture buffer in tests) and the sink writes directly into it.
//! There is no return-and-caller-prints model, because callers rely on
//! flush-to-output semantics.
//!
//! # Examples
//!
//! Ship a payload to the client console and inspect the emitted fragment:
//!
//! ```
//! use webdiag_sink::ConsoleSink;
//!
//! let mut sink = ConsoleSink::new(Vec::new());
//! sink.log(&serde_json::json!({ "note": "cart reloaded" }))?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert!(output.contains("console.log("));
//! assert!(output.starts_with("<script"));
//! # Ok::<(), std::io::Error>(())
//! ```

mod console;
mod inline;
mod wrap;

pub use console::{ConsoleSink, script_safe_json};
pub use inline::InlineSink;
pub use wrap::ScriptWrap;
