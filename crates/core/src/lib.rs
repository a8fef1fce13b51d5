#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Overview
//!
//! `webdiag-core` holds the data model shared by the webdiag workspace: the
//! [`ErrorEvent`] raised by the host runtime's interception hook, the
//! [`Severity`] buckets that classification assigns to raw runtime codes, and
//! the escaping helpers the rendering sinks use to embed event text in HTML
//! output.
//!
//! # Design
//!
//! The crate is a dependency-free leaf. Classification is a pure, total
//! function over the host runtime's integer code space (the constants in
//! [`codes`]); the same table drives both presentation paths, so the
//! severity-to-class and severity-to-label mappings live here rather than in
//! the sinks. Events are immutable: one is created per interception and
//! consumed once.
//!
//! # Examples
//!
//! ```
//! use webdiag_core::{ErrorEvent, Severity, SourceLocation, codes};
//!
//! let event = ErrorEvent::new(
//!     codes::USER_WARNING,
//!     "template variable shadowed",
//!     SourceLocation::new("views/index.tpl", 12),
//! );
//!
//! assert_eq!(event.severity(), Severity::Warning);
//! assert_eq!(event.severity().css_class(), "warning");
//! ```

pub mod codes;
/// Escaping helpers for embedding event text in markup output.
pub mod escape;

mod event;
mod severity;

pub use event::{ErrorEvent, SourceLocation};
pub use severity::{ParseSeverityError, Severity};
