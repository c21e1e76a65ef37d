//! # Comparison Selection
//!
//! An ordered list of catalog ids picked for side-by-side comparison. At most
//! [`MAX_SELECTION`] ids fit, and a comparison needs at least [`MIN_COMPARISON`].
//!
//! On a rejected `add` the list is left exactly as it was. A duplicate is reported as
//! [`SelectionError::AlreadySelected`] even when the list is full, since the duplicate
//! check runs before the limit check.

use crate::error::SelectionError;
use serde::Serialize;

pub const MAX_SELECTION: usize = 4;
pub const MIN_COMPARISON: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionList {
    ids: Vec<u32>,
}

impl SelectionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: u32) -> Result<(), SelectionError> {
        if self.ids.contains(&id) {
            return Err(SelectionError::AlreadySelected(id));
        }
        if self.ids.len() >= MAX_SELECTION {
            return Err(SelectionError::LimitExceeded {
                limit: MAX_SELECTION,
            });
        }
        self.ids.push(id);
        Ok(())
    }

    /// Drop `id` from the list. Returns whether it was present.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The ids to compare, in insertion order.
    pub fn start_comparison(&self) -> Result<Vec<u32>, SelectionError> {
        if self.ids.len() < MIN_COMPARISON {
            return Err(SelectionError::InsufficientSelection {
                required: MIN_COMPARISON,
                selected: self.ids.len(),
            });
        }
        Ok(self.ids.clone())
    }
}
