//! Search and selection over the catalog plus user suggestions.
//!
//! Selecting something the picker has never seen needs an explicit yes
//! from the user before it is recorded as a reusable suggestion and added
//! to the stack.

use async_trait::async_trait;

use crate::ops::stack_ops::{StackError, StackList};
use crate::ops::suggestion_ops::SuggestionSet;

/// Prompt shown before clearing a stack.
pub const CLEAR_PROMPT: &str = "Do you really want to clear your stack?";

/// Prompt shown before adding an item the picker does not know.
pub fn add_prompt(item: &str) -> String {
    format!("Do you really want to add \"{}\" to your stack?", item)
}

/// The answer to a yes/no question. Exactly one of the two, always.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Something that can put a yes/no question to the user.
///
/// The caller owns the implementation (a terminal prompt, a dialog, a
/// scripted answer in tests) and hands it to the operation that needs it.
#[async_trait]
pub trait Confirm: Send {
    async fn confirm(&mut self, prompt: &str) -> Confirmation;
}

/// Answers every question with the same fixed outcome.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub Confirmation);

#[async_trait]
impl Confirm for FixedAnswer {
    async fn confirm(&mut self, _prompt: &str) -> Confirmation {
        self.0
    }
}

/// Result of [`Picker::select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The item was pushed onto the stack. `new_suggestion` is true when it
    /// was also recorded in the suggestion set.
    Added { new_suggestion: bool },
    /// The user declined to add an unknown item. Nothing changed.
    Cancelled,
    /// The item was blank after trimming. Nothing changed.
    Ignored,
}

/// Case-insensitive prefix filter, keeping candidate order, at most `max` results.
/// An empty query matches nothing.
pub fn filter_candidates<'a, I>(candidates: I, query: &str, max: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    candidates
        .into_iter()
        .filter(|c| c.to_lowercase().starts_with(&needle))
        .take(max)
        .collect()
}

pub struct Picker<'c> {
    catalog: &'c [String],
    suggestions: SuggestionSet,
    max_results: usize,
}

impl<'c> Picker<'c> {
    pub fn new(catalog: &'c [String], suggestions: SuggestionSet, max_results: usize) -> Self {
        Picker {
            catalog,
            suggestions,
            max_results,
        }
    }

    pub fn suggestions(&self) -> &SuggestionSet {
        &self.suggestions
    }

    /// Catalog entries followed by user suggestions.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.catalog
            .iter()
            .map(String::as_str)
            .chain(self.suggestions.iter())
    }

    /// Exact membership in the combined candidate set.
    pub fn is_known(&self, item: &str) -> bool {
        self.candidates().any(|c| c == item)
    }

    pub fn filter(&self, query: &str) -> Vec<&str> {
        filter_candidates(self.candidates(), query, self.max_results)
    }

    /// Add `item` to `list`, asking `confirm` first if the item is unknown.
    ///
    /// On a yes the item is recorded as a suggestion (written before the
    /// stack) and then pushed; on a no nothing is written.
    pub async fn select(
        &mut self,
        list: &mut StackList<'_>,
        item: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<SelectOutcome, StackError> {
        let item = item.trim();
        if item.is_empty() {
            return Ok(SelectOutcome::Ignored);
        }

        if self.is_known(item) {
            list.add(item).await?;
            return Ok(SelectOutcome::Added {
                new_suggestion: false,
            });
        }

        match confirm.confirm(&add_prompt(item)).await {
            Confirmation::Cancelled => {
                tracing::debug!(item, "unknown item declined");
                Ok(SelectOutcome::Cancelled)
            }
            Confirmation::Confirmed => {
                let new_suggestion = self.suggestions.add(list.store(), item).await?;
                list.add(item).await?;
                Ok(SelectOutcome::Added { new_suggestion })
            }
        }
    }
}
