use serde::{Deserialize, Serialize};

/// One entry in a stack, or one stack in the stack index.
///
/// `id` is a millisecond timestamp rendered as a decimal string. It is
/// assigned once and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub id: String,
    pub label: String,
}

impl Label {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Label {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Generate the id for a label about to be inserted into `existing`.
///
/// Ids come from the wall clock in milliseconds, bumped past the largest
/// numeric id already present so that rapid inserts stay unique.
pub fn next_id(existing: &[Label]) -> String {
    next_id_at(existing, chrono::Utc::now().timestamp_millis())
}

pub(crate) fn next_id_at(existing: &[Label], now_ms: i64) -> String {
    let floor = existing
        .iter()
        .filter_map(|l| l.id.parse::<i64>().ok())
        .max()
        .map(|max| max.saturating_add(1))
        .unwrap_or(i64::MIN);
    now_ms.max(floor).to_string()
}
