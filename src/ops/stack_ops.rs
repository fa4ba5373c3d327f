use crate::io::store::{self, KeyValueStore, StoreError};
use crate::model::label::{self, Label};

/// Error type for stack operations
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    #[error("index {index} out of range for a stack of {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no stack matches {0:?}")]
    UnknownStack(String),
    #[error("ambiguous: {count} stacks named {name:?}. Use the stack id instead.")]
    AmbiguousName { name: String, count: usize },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// The entries of one stack, bound to the store that persists them.
///
/// Every mutation builds the next list from the in-memory one, writes the
/// whole list under the stack's key, and only then replaces the in-memory
/// list. A failed write leaves the list as it was.
pub struct StackList<'s> {
    store: &'s dyn KeyValueStore,
    id: String,
    key: String,
    entries: Vec<Label>,
}

impl<'s> StackList<'s> {
    /// Read the stack `id` from the store. A stack that was never written is empty.
    pub async fn load(store: &'s dyn KeyValueStore, id: &str) -> Result<Self, StackError> {
        let key = store::stack_key(id);
        let entries: Vec<Label> = store::read_json(store, &key).await?;
        tracing::debug!(stack = id, len = entries.len(), "loaded stack");
        Ok(StackList {
            store,
            id: id.to_string(),
            key,
            entries,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn store(&self) -> &'s dyn KeyValueStore {
        self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn entries(&self) -> &[Label] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Push `item` onto the top (index 0) of the stack.
    pub async fn add(&mut self, item: &str) -> Result<&[Label], StackError> {
        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(Label::new(label::next_id(&self.entries), item));
        next.extend(self.entries.iter().cloned());
        self.commit(next).await
    }

    /// Remove the entry at `index`.
    pub async fn remove(&mut self, index: usize) -> Result<&[Label], StackError> {
        if index >= self.entries.len() {
            return Err(StackError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let mut next = self.entries.clone();
        next.remove(index);
        self.commit(next).await
    }

    /// Remove every entry.
    pub async fn clear(&mut self) -> Result<&[Label], StackError> {
        self.commit(Vec::new()).await
    }

    async fn commit(&mut self, next: Vec<Label>) -> Result<&[Label], StackError> {
        store::write_json(self.store, &self.key, &next).await?;
        tracing::debug!(stack = %self.id, len = next.len(), "stack written");
        self.entries = next;
        Ok(&self.entries)
    }
}
