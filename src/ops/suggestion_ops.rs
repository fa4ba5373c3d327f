use indexmap::IndexMap;

use crate::io::store::{self, KeyValueStore, SUGGESTIONS_KEY};
use crate::ops::stack_ops::StackError;

/// Free-text entries the user confirmed adding.
///
/// Membership is case-insensitive and the first spelling wins. Entries are
/// never removed; insertion order is kept for storage.
#[derive(Debug, Clone, Default)]
pub struct SuggestionSet {
    /// lowercased form -> spelling as first entered
    entries: IndexMap<String, String>,
}

impl SuggestionSet {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = SuggestionSet::default();
        for entry in entries {
            set.insert(entry.into());
        }
        set
    }

    /// Read the suggestion set from the store.
    pub async fn load(store: &dyn KeyValueStore) -> Result<Self, StackError> {
        let entries: Vec<String> = store::read_json(store, SUGGESTIONS_KEY).await?;
        Ok(SuggestionSet::from_entries(entries))
    }

    pub fn contains(&self, item: &str) -> bool {
        self.entries.contains_key(&item.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Add `item` and persist the set. Returns false (and writes nothing)
    /// when an entry differing only in case is already present.
    pub async fn add(&mut self, store: &dyn KeyValueStore, item: &str) -> Result<bool, StackError> {
        if self.contains(item) {
            return Ok(false);
        }
        let mut next = self.clone();
        next.insert(item.to_string());
        let stored: Vec<&str> = next.iter().collect();
        store::write_json(store, SUGGESTIONS_KEY, &stored).await?;
        *self = next;
        tracing::debug!(item, "suggestion recorded");
        Ok(true)
    }

    fn insert(&mut self, item: String) {
        self.entries.entry(item.to_lowercase()).or_insert(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn membership_ignores_case() {
        let set = SuggestionSet::from_entries(["Mewtwo"]);
        assert!(set.contains("mewtwo"));
        assert!(set.contains("MEWTWO"));
        assert!(!set.contains("Mew"));
    }

    #[test]
    fn first_spelling_wins() {
        let set = SuggestionSet::from_entries(["Eevee", "EEVEE", "Snorlax"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Eevee", "Snorlax"]);
    }

    #[tokio::test]
    async fn add_persists_in_insertion_order() {
        let store = MemoryStore::new();
        let mut set = SuggestionSet::load(&store).await.unwrap();
        assert!(set.is_empty());

        assert!(set.add(&store, "Zapdos").await.unwrap());
        assert!(set.add(&store, "Articuno").await.unwrap());

        let raw = store.get(SUGGESTIONS_KEY).await.unwrap().unwrap();
        assert_eq!(raw, r#"["Zapdos","Articuno"]"#);

        let reloaded = SuggestionSet::load(&store).await.unwrap();
        assert_eq!(reloaded.iter().collect::<Vec<_>>(), vec!["Zapdos", "Articuno"]);
    }

    #[tokio::test]
    async fn add_duplicate_in_other_case_writes_nothing() {
        let store = MemoryStore::new();
        let mut set = SuggestionSet::load(&store).await.unwrap();
        set.add(&store, "Moltres").await.unwrap();
        store.remove(SUGGESTIONS_KEY).await.unwrap();

        assert!(!set.add(&store, "moltres").await.unwrap());
        assert_eq!(set.len(), 1);
        assert_eq!(store.get(SUGGESTIONS_KEY).await.unwrap(), None);
    }
}
