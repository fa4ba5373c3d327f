use serde::Deserialize;

use crate::io::store::{self, KeyValueStore, LEGACY_LIST_KEY, STACKS_KEY};
use crate::model::label::{self, Label};
use crate::ops::stack_ops::StackError;

/// Name given to the stack created from the legacy single-list key.
pub const LEGACY_STACK_NAME: &str = "Stack";

/// Read the stack index.
pub async fn fetch_stacks(store: &dyn KeyValueStore) -> Result<Vec<Label>, StackError> {
    Ok(store::read_json(store, STACKS_KEY).await?)
}

/// Create a new, empty stack named `name` at the end of the index.
/// Returns the created entry.
pub async fn add_stack(store: &dyn KeyValueStore, name: &str) -> Result<Label, StackError> {
    let mut stacks = fetch_stacks(store).await?;
    let entry = Label::new(label::next_id(&stacks), name);
    stacks.push(entry.clone());
    store::write_json(store, STACKS_KEY, &stacks).await?;
    tracing::info!(stack = %entry.id, name, "stack created");
    Ok(entry)
}

/// Delete stack `id`: its entries first, then its index entry.
/// Returns the remaining index.
pub async fn remove_stack(store: &dyn KeyValueStore, id: &str) -> Result<Vec<Label>, StackError> {
    let stacks = fetch_stacks(store).await?;
    if !stacks.iter().any(|s| s.id == id) {
        return Err(StackError::UnknownStack(id.to_string()));
    }
    store.remove(&store::stack_key(id)).await?;
    let remaining: Vec<Label> = stacks.into_iter().filter(|s| s.id != id).collect();
    store::write_json(store, STACKS_KEY, &remaining).await?;
    tracing::info!(stack = id, "stack removed");
    Ok(remaining)
}

/// Number of entries in stack `id` (0 if it was never written).
pub async fn stack_count(store: &dyn KeyValueStore, id: &str) -> Result<usize, StackError> {
    let entries: Vec<Label> = store::read_json(store, &store::stack_key(id)).await?;
    Ok(entries.len())
}

/// Find a stack by id, or failing that by exact name.
pub fn resolve<'a>(stacks: &'a [Label], reference: &str) -> Result<&'a Label, StackError> {
    if let Some(stack) = stacks.iter().find(|s| s.id == reference) {
        return Ok(stack);
    }
    let mut matches = stacks.iter().filter(|s| s.label == reference);
    match (matches.next(), matches.count()) {
        (None, _) => Err(StackError::UnknownStack(reference.to_string())),
        (Some(stack), 0) => Ok(stack),
        (Some(_), rest) => Err(StackError::AmbiguousName {
            name: reference.to_string(),
            count: rest + 1,
        }),
    }
}

/// Entry of the legacy single list, whose ids were stored as JSON numbers.
#[derive(Debug, Deserialize)]
struct LegacyEntry {
    id: serde_json::Value,
    label: String,
}

impl From<LegacyEntry> for Label {
    fn from(entry: LegacyEntry) -> Self {
        let id = match entry.id {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        Label::new(id, entry.label)
    }
}

/// Move the legacy `list` key into a regular stack.
///
/// Returns the new index entry, or `None` when there was nothing to import.
/// A legacy value that does not parse is left in place untouched.
pub async fn import_legacy_list(store: &dyn KeyValueStore) -> Result<Option<Label>, StackError> {
    let Some(raw) = store.get(LEGACY_LIST_KEY).await? else {
        return Ok(None);
    };
    let legacy: Vec<LegacyEntry> = match serde_json::from_str(&raw) {
        Ok(legacy) => legacy,
        Err(e) => {
            tracing::warn!(key = LEGACY_LIST_KEY, error = %e, "legacy list is not valid JSON, leaving it in place");
            return Ok(None);
        }
    };
    let entries: Vec<Label> = legacy.into_iter().map(Label::from).collect();
    let stack = add_stack(store, LEGACY_STACK_NAME).await?;
    store::write_json(store, &store::stack_key(&stack.id), &entries).await?;
    store.remove(LEGACY_LIST_KEY).await?;
    tracing::info!(stack = %stack.id, len = entries.len(), "imported legacy list");
    Ok(Some(stack))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::ops::stack_ops::StackList;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn add_stack_appends_to_index() {
        let store = MemoryStore::new();
        let a = add_stack(&store, "Favourites").await.unwrap();
        let b = add_stack(&store, "Wishlist").await.unwrap();
        assert_ne!(a.id, b.id);

        let stacks = fetch_stacks(&store).await.unwrap();
        let names: Vec<&str> = stacks.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(names, vec!["Favourites", "Wishlist"]);
    }

    #[tokio::test]
    async fn remove_stack_deletes_entries_and_index_entry() {
        let store = MemoryStore::new();
        let keep = add_stack(&store, "keep").await.unwrap();
        let gone = add_stack(&store, "gone").await.unwrap();
        {
            let mut list = StackList::load(&store, &gone.id).await.unwrap();
            list.add("x").await.unwrap();
        }

        let remaining = remove_stack(&store, &gone.id).await.unwrap();
        assert_eq!(remaining, vec![keep.clone()]);
        assert_eq!(fetch_stacks(&store).await.unwrap(), vec![keep]);
        assert_eq!(store.get(&store::stack_key(&gone.id)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_unknown_stack_is_an_error() {
        let store = MemoryStore::new();
        add_stack(&store, "only").await.unwrap();
        assert!(matches!(
            remove_stack(&store, "nope").await,
            Err(StackError::UnknownStack(_))
        ));
        assert_eq!(fetch_stacks(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn stack_count_reads_list_length() {
        let store = MemoryStore::new();
        let stack = add_stack(&store, "s").await.unwrap();
        assert_eq!(stack_count(&store, &stack.id).await.unwrap(), 0);

        let mut list = StackList::load(&store, &stack.id).await.unwrap();
        list.add("a").await.unwrap();
        list.add("b").await.unwrap();
        assert_eq!(stack_count(&store, &stack.id).await.unwrap(), 2);
    }

    #[test]
    fn resolve_by_id_then_name() {
        let stacks = vec![Label::new("1", "alpha"), Label::new("2", "1")];
        assert_eq!(resolve(&stacks, "1").unwrap().label, "alpha");
        assert_eq!(resolve(&stacks, "alpha").unwrap().id, "1");
        assert!(matches!(
            resolve(&stacks, "beta"),
            Err(StackError::UnknownStack(_))
        ));
    }

    #[test]
    fn resolve_ambiguous_name() {
        let stacks = vec![
            Label::new("1", "dup"),
            Label::new("2", "dup"),
            Label::new("3", "dup"),
        ];
        assert!(matches!(
            resolve(&stacks, "dup"),
            Err(StackError::AmbiguousName { count: 3, .. })
        ));
    }

    #[tokio::test]
    async fn import_legacy_list_moves_entries() {
        let store = MemoryStore::new();
        store
            .set(
                LEGACY_LIST_KEY,
                r#"[{"label":"Glumanda","id":1571000000002},{"label":"Bisasam","id":1571000000001}]"#.into(),
            )
            .await
            .unwrap();

        let stack = import_legacy_list(&store).await.unwrap().unwrap();
        assert_eq!(stack.label, LEGACY_STACK_NAME);
        assert_eq!(store.get(LEGACY_LIST_KEY).await.unwrap(), None);

        let list = StackList::load(&store, &stack.id).await.unwrap();
        let names: Vec<&str> = list.entries().iter().map(|l| l.label.as_str()).collect();
        assert_eq!(names, vec!["Glumanda", "Bisasam"]);
        assert_eq!(list.entries()[0].id, "1571000000002");

        assert!(import_legacy_list(&store).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn import_legacy_list_keeps_unparseable_value() {
        let store = MemoryStore::new();
        let truncated = r#"[{"label":"Glumanda","id":1}"#;
        store.set(LEGACY_LIST_KEY, truncated.into()).await.unwrap();

        assert!(import_legacy_list(&store).await.unwrap().is_none());
        assert_eq!(
            store.get(LEGACY_LIST_KEY).await.unwrap().as_deref(),
            Some(truncated)
        );
        assert!(fetch_stacks(&store).await.unwrap().is_empty());
    }
}
