//! The displayed list and the seam the host implements to show it.
//!
//! # Design
//! `entries` turns the latest fetch into display entries; `View::replace` is
//! the only way anything reaches the screen, and it always swaps the whole
//! list. Nothing patches entries in place.

use crate::dispatch::{Action, ActionKind};
use crate::types::{TodoId, TodoItem};

/// Visual state of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Pending,
    Completed,
}

/// A trigger attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub action: Action,
}

/// One displayed todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub id: TodoId,
    pub title: String,
    pub state: EntryState,
    pub controls: Vec<Control>,
}

impl ListEntry {
    pub fn is_completed(&self) -> bool {
        self.state == EntryState::Completed
    }
}

impl From<&TodoItem> for ListEntry {
    fn from(item: &TodoItem) -> Self {
        let state = if item.completed {
            EntryState::Completed
        } else {
            EntryState::Pending
        };
        let controls = ActionKind::ALL
            .iter()
            .map(|&kind| Control {
                label: kind.label(),
                action: Action::new(item.id.clone(), kind),
            })
            .collect();
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            state,
            controls,
        }
    }
}

/// Display entries for `items`, in the order received.
pub fn entries(items: &[TodoItem]) -> Vec<ListEntry> {
    items.iter().map(ListEntry::from).collect()
}

/// The list container owned by the client.
pub trait View {
    /// Drop every displayed entry and show `entries` instead.
    fn replace(&mut self, entries: Vec<ListEntry>);
}

impl<V: View + ?Sized> View for &mut V {
    fn replace(&mut self, entries: Vec<ListEntry>) {
        (**self).replace(entries)
    }
}

/// In-memory view; keeps the last rendered list.
#[derive(Debug, Default, Clone)]
pub struct MemoryView {
    entries: Vec<ListEntry>,
    renders: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// How many times the list has been replaced.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl View for MemoryView {
    fn replace(&mut self, entries: Vec<ListEntry>) {
        self.entries = entries;
        self.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, title: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::from(id),
            title: title.to_string(),
            completed,
        }
    }

    #[test]
    fn completed_items_are_marked() {
        let list = entries(&[item(1, "a", false), item(2, "b", true)]);
        assert_eq!(list[0].state, EntryState::Pending);
        assert_eq!(list[1].state, EntryState::Completed);
    }

    #[test]
    fn every_entry_gets_complete_and_delete() {
        let list = entries(&[item(9, "x", false)]);
        let controls = &list[0].controls;
        assert_eq!(controls.len(), 2);
        assert_eq!(controls[0].label, "Complete");
        assert_eq!(controls[0].action, Action::complete(TodoId::from(9)));
        assert_eq!(controls[1].label, "Delete");
        assert_eq!(controls[1].action, Action::delete(TodoId::from(9)));
    }

    #[test]
    fn order_is_preserved() {
        let list = entries(&[item(3, "c", false), item(1, "a", false), item(2, "b", false)]);
        let titles: Vec<_> = list.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["c", "a", "b"]);
    }

    #[test]
    fn replace_drops_previous_entries() {
        let mut view = MemoryView::new();
        view.replace(entries(&[item(1, "a", false), item(2, "b", false)]));
        view.replace(entries(&[item(3, "c", true)]));
        assert_eq!(view.entries().len(), 1);
        assert_eq!(view.entries()[0].title, "c");
        assert_eq!(view.renders(), 2);
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let items = [item(1, "a", true), item(2, "b", false)];
        let mut once = MemoryView::new();
        once.replace(entries(&items));
        let mut twice = MemoryView::new();
        twice.replace(entries(&items));
        twice.replace(entries(&items));
        assert_eq!(once.entries(), twice.entries());
    }
}
