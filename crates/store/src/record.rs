use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Timestamp format stored alongside every record.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One structured debug record.
///
/// Created at the call site that wants to leave a trace: a note describing
/// the situation, the SQL statement involved, and optionally a named variable
/// snapshot (plain text or a JSON-serialized collection).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugRecord {
    /// Free-text note describing what was being investigated.
    pub note: String,
    /// The SQL statement under observation.
    pub sql_text: String,
    /// UTC wall-clock time the record was created, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
    /// Name of the captured variable, if any.
    pub variable_name: Option<String>,
    /// Captured variable value: plain text or a JSON-serialized collection.
    pub variable_value: Option<String>,
}

impl DebugRecord {
    /// Creates a record stamped with the current UTC time.
    pub fn new(note: impl Into<String>, sql_text: impl Into<String>) -> Self {
        Self {
            note: note.into(),
            sql_text: sql_text.into(),
            timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            variable_name: None,
            variable_value: None,
        }
    }

    /// Overrides the creation timestamp.
    ///
    /// Intended for tests and for replaying records captured elsewhere.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Attaches a plain-text variable snapshot.
    #[must_use]
    pub fn with_variable_text(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.variable_name = Some(name.into());
        self.variable_value = Some(value.into());
        self
    }

    /// Attaches a variable snapshot serialized as JSON.
    ///
    /// Collections and structured values round-trip through the stored text;
    /// the caller gets the serialization error back if the value cannot be
    /// represented.
    pub fn with_variable_json<T: Serialize + ?Sized>(
        mut self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        self.variable_name = Some(name.into());
        self.variable_value = Some(serde_json::to_string(value)?);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stamps_a_parseable_timestamp() {
        let record = DebugRecord::new("checking cart totals", "SELECT * FROM cart");
        assert!(
            chrono::NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).is_ok(),
            "unexpected timestamp shape: {}",
            record.timestamp
        );
        assert!(record.variable_name.is_none());
        assert!(record.variable_value.is_none());
    }

    #[test]
    fn text_variable_is_stored_verbatim() {
        let record = DebugRecord::new("n", "SELECT 1").with_variable_text("user_id", "42");
        assert_eq!(record.variable_name.as_deref(), Some("user_id"));
        assert_eq!(record.variable_value.as_deref(), Some("42"));
    }

    #[test]
    fn json_variable_round_trips() {
        let record = DebugRecord::new("n", "SELECT 1")
            .with_variable_json("ids", &vec![1, 2, 3])
            .expect("serializable");
        let stored = record.variable_value.expect("value present");
        let decoded: Vec<i32> = serde_json::from_str(&stored).expect("valid json");
        assert_eq!(decoded, vec![1, 2, 3]);
    }
}
