use serde::Serialize;

/// A row of the internal activity log (`log` table).
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub id: i64,
    pub date: String, // RFC 3339, local time
    pub operation: String,
    pub target: String,
    pub message: String,
}
