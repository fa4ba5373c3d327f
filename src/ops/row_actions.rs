use crate::gesture::swipe::SwipeHandlers;
use crate::ops::stack_ops::{StackError, StackList};

/// What a completed swipe on a stack row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Push another copy of the row's label onto the top of the stack.
    Repush { index: usize },
    /// Delete the row.
    Remove { index: usize },
}

/// Swipe handlers for the row at `index` in a stack of `len` entries.
///
/// Every row can be swiped right to re-push it. Only the top and bottom
/// rows can be swiped left to remove them.
pub fn row_handlers(index: usize, len: usize) -> SwipeHandlers<RowAction> {
    let removable = index == 0 || index + 1 == len;
    SwipeHandlers {
        left: removable.then_some(RowAction::Remove { index }),
        right: Some(RowAction::Repush { index }),
    }
}

/// Apply a fired row action to the stack.
pub async fn apply(list: &mut StackList<'_>, action: RowAction) -> Result<(), StackError> {
    match action {
        RowAction::Repush { index } => {
            let label = list
                .entries()
                .get(index)
                .map(|l| l.label.clone())
                .ok_or(StackError::IndexOutOfRange {
                    index,
                    len: list.len(),
                })?;
            list.add(&label).await?;
        }
        RowAction::Remove { index } => {
            list.remove(index).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::swipe::SwipeDetector;
    use crate::io::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn labels(list: &StackList<'_>) -> Vec<String> {
        list.entries().iter().map(|l| l.label.clone()).collect()
    }

    #[test]
    fn top_and_bottom_rows_are_removable() {
        assert_eq!(row_handlers(0, 3).left, Some(RowAction::Remove { index: 0 }));
        assert_eq!(row_handlers(2, 3).left, Some(RowAction::Remove { index: 2 }));
        assert_eq!(row_handlers(1, 3).left, None);
        assert_eq!(row_handlers(0, 1).left, Some(RowAction::Remove { index: 0 }));
    }

    #[test]
    fn every_row_can_be_repushed() {
        for index in 0..3 {
            assert_eq!(row_handlers(index, 3).right, Some(RowAction::Repush { index }));
        }
    }

    #[tokio::test]
    async fn repush_copies_label_to_top() {
        let store = MemoryStore::new();
        let mut list = StackList::load(&store, "1").await.unwrap();
        for item in ["a", "b", "c"] {
            list.add(item).await.unwrap();
        }
        apply(&mut list, RowAction::Repush { index: 2 }).await.unwrap();
        assert_eq!(labels(&list), vec!["a", "c", "b", "a"]);
    }

    #[tokio::test]
    async fn remove_drops_row() {
        let store = MemoryStore::new();
        let mut list = StackList::load(&store, "1").await.unwrap();
        for item in ["a", "b", "c"] {
            list.add(item).await.unwrap();
        }
        apply(&mut list, RowAction::Remove { index: 0 }).await.unwrap();
        assert_eq!(labels(&list), vec!["b", "a"]);
    }

    #[tokio::test]
    async fn swipe_on_middle_row_cannot_remove() {
        let store = MemoryStore::new();
        let mut list = StackList::load(&store, "1").await.unwrap();
        for item in ["a", "b", "c"] {
            list.add(item).await.unwrap();
        }

        let mut detector = SwipeDetector::new(row_handlers(1, list.len()));
        detector.set_width(90.0);
        detector.start(80.0);
        detector.release(0.0);
        assert_eq!(detector.finish(), None);
        assert_eq!(labels(&list), vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn repush_out_of_range_is_rejected() {
        let store = MemoryStore::new();
        let mut list = StackList::load(&store, "1").await.unwrap();
        assert!(matches!(
            apply(&mut list, RowAction::Repush { index: 0 }).await,
            Err(StackError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }
}
