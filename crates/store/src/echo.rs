use std::io::{self, Write};

use webdiag_sink::ConsoleSink;

use crate::DebugRecord;

/// Ships a debug record to the client-side console instead of (or alongside)
/// the persistent store.
///
/// Reuses the generic console-log primitive, so the record arrives as one
/// script-safe JSON object and is visible in the devtools console as soon as
/// the call returns.
///
/// # Examples
///
/// ```
/// use webdiag_sink::ConsoleSink;
/// use webdiag_store::{DebugRecord, echo_sql};
///
/// let mut console = ConsoleSink::new(Vec::new());
/// let record = DebugRecord::new("slow query", "SELECT * FROM orders");
/// echo_sql(&mut console, &record)?;
///
/// let output = String::from_utf8(console.into_inner()).unwrap();
/// assert!(output.contains("console.log("));
/// assert!(output.contains("slow query"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn echo_sql<W: Write>(console: &mut ConsoleSink<W>, record: &DebugRecord) -> io::Result<()> {
    console.log(record)
}
