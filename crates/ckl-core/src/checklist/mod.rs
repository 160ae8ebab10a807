//! Checklist model: a named, ordered set of checkable items.
//!
//! The list name and the items are explicit constructor inputs; nothing is
//! read from globals. Item indices are 1-based throughout, matching the
//! storage key schema.

mod persist;


use crate::error::StateError;

/// One item: display label plus checked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub label: String,
    pub checked: bool,
}

/// A named checklist. The item count is fixed at construction/load time;
/// only the structural operations (`push_item`, `remove_item`) change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    name: String,
    items: Vec<ChecklistItem>,
}

impl Checklist {
    /// New checklist with all items unchecked.
    pub fn new(name: &str, labels: Vec<String>) -> Self {
        Checklist {
            name: name.to_string(),
            items: labels
                .into_iter()
                .map(|label| ChecklistItem {
                    label,
                    checked: false,
                })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of items (the stored total count after a save).
    pub fn len(&self) -> u32 {
        self.items.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Number of checked items (the stored checked count after a save).
    pub fn checked_count(&self) -> u32 {
        self.items.iter().filter(|i| i.checked).count() as u32
    }

    pub fn is_checked(&self, index: u32) -> Result<bool, StateError> {
        Ok(self.items[self.slot(index)?].checked)
    }

    /// Set the checked state of item `index` (1-based).
    pub fn set_checked(&mut self, index: u32, checked: bool) -> Result<(), StateError> {
        let slot = self.slot(index)?;
        self.items[slot].checked = checked;
        Ok(())
    }

    /// Append a new unchecked item.
    pub fn push_item(&mut self, label: &str) {
        self.items.push(ChecklistItem {
            label: label.to_string(),
            checked: false,
        });
    }

    /// Remove item `index` (1-based); later items shift down one index.
    pub fn remove_item(&mut self, index: u32) -> Result<ChecklistItem, StateError> {
        let slot = self.slot(index)?;
        Ok(self.items.remove(slot))
    }

    /// Map a 1-based index to a vec slot, or a typed out-of-range error.
    fn slot(&self, index: u32) -> Result<usize, StateError> {
        if index == 0 || index > self.len() {
            return Err(StateError::ItemOutOfRange {
                list: self.name.clone(),
                index,
                len: self.len(),
            });
        }
        Ok(index as usize - 1)
    }
}
