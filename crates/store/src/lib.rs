#![deny(unsafe_code)]

//! Persistent debug log for webdiag.
//!
//! The store side of the workspace: [`DebugRecord`] is the structured record
//! an application writes while chasing a problem (a free-text note, the SQL
//! statement under suspicion, an optional variable snapshot), [`LogStore`] is
//! the insert-only persistence contract, and [`SqliteStore`] is the embedded
//! implementation. [`echo_sql`] ships a record to the client console instead,
//! reusing the generic console primitive from `webdiag-sink`.
//!
//! Escaping is the store's concern: `SqliteStore` binds every value as a SQL
//! parameter and never splices record text into statement strings.

mod echo;
mod record;
mod sqlite;

pub use echo::echo_sql;
pub use record::DebugRecord;
pub use sqlite::{LogStore, SqliteStore, StoreError};
