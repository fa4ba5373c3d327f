use serde::Serialize;

use crate::model::label::Label;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct StackInfoJson {
    pub id: String,
    pub name: String,
    pub count: usize,
}

#[derive(Serialize)]
pub struct EntryJson {
    pub index: usize,
    pub id: String,
    pub label: String,
}

#[derive(Serialize)]
pub struct StackJson {
    pub id: String,
    pub name: String,
    pub entries: Vec<EntryJson>,
}

#[derive(Serialize)]
pub struct SwipeJson {
    /// "right", "left" or "none"
    pub direction: &'static str,
    /// "repush", "remove" or "snap-back"
    pub outcome: &'static str,
    pub entries: Vec<EntryJson>,
}

#[derive(Serialize)]
pub struct RemovedStackJson {
    pub id: String,
    pub name: String,
    pub removed: bool,
}

/// Result of a command that ended without touching the stack.
#[derive(Serialize)]
pub struct OutcomeJson {
    /// "not-added", "ignored" or "not-cleared"
    pub outcome: &'static str,
}

pub fn entries_json(entries: &[Label]) -> Vec<EntryJson> {
    entries
        .iter()
        .enumerate()
        .map(|(index, l)| EntryJson {
            index,
            id: l.id.clone(),
            label: l.label.clone(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One line per entry: the index used by `rm`/`swipe`, then the label.
pub fn format_entries(entries: &[Label]) -> String {
    if entries.is_empty() {
        return "(stack is empty)\n".to_string();
    }
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("{:>3}  {}\n", i, entry.label));
    }
    out
}

pub fn format_stacks(stacks: &[StackInfoJson]) -> String {
    if stacks.is_empty() {
        return "(no stacks)\n".to_string();
    }
    let id_width = stacks.iter().map(|s| s.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for s in stacks {
        out.push_str(&format!(
            "{:<width$}  {}  ({})\n",
            s.id,
            s.name,
            s.count,
            width = id_width
        ));
    }
    out
}
