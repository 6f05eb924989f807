use mews_logging::{mews_debug, mews_warn};

use crate::Cat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("active cat index {index} is out of range for a collection of {len} cats")]
pub struct InvalidIndexError {
    pub index: usize,
    pub len: usize,
}

/// Session cache of translated cats plus the shared "active cat" cursor.
///
/// Filled once and never refetched; the cursor is either unset or a valid
/// position in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatCollection {
    cats: Vec<Cat>,
    populated: bool,
    active_index: Option<usize>,
}

impl CatCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cats(&self) -> &[Cat] {
        &self.cats
    }

    pub fn len(&self) -> usize {
        self.cats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cats.is_empty()
    }

    /// True once a load has completed, even if it produced no cats.
    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Stores the loaded cats. Returns `false` and keeps the existing cache
    /// when the collection was already populated.
    pub fn populate(&mut self, cats: Vec<Cat>) -> bool {
        if self.populated {
            mews_warn!(
                "Ignoring second load of {} cats; collection already holds {}",
                cats.len(),
                self.cats.len()
            );
            return false;
        }
        mews_debug!("Collection populated with {} cats", cats.len());
        self.cats = cats;
        self.populated = true;
        true
    }

    /// Linear scan by id; the first match wins.
    pub fn find(&self, cat_id: &str) -> Option<(usize, &Cat)> {
        self.cats
            .iter()
            .enumerate()
            .find(|(_, cat)| cat.id() == cat_id)
    }

    /// Looks up `cat_id` and makes it the active cat. A miss leaves the
    /// cursor untouched.
    pub fn select_by_id(&mut self, cat_id: &str) -> Option<&Cat> {
        let index = self.find(cat_id).map(|(index, _)| index)?;
        self.active_index = Some(index);
        self.cats.get(index)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_cat(&self) -> Option<&Cat> {
        self.active_index.and_then(|index| self.cats.get(index))
    }

    /// Sets the cursor. Out-of-range values unset it and report the error.
    pub fn set_active_index(&mut self, index: usize) -> Result<(), InvalidIndexError> {
        if index < self.cats.len() {
            self.active_index = Some(index);
            Ok(())
        } else {
            self.active_index = None;
            Err(InvalidIndexError {
                index,
                len: self.cats.len(),
            })
        }
    }

    pub fn clear_active(&mut self) {
        self.active_index = None;
    }

    /// Moves the cursor to `index`, wrapping below zero to the last cat and
    /// at or past the end to the first.
    pub fn cycle_to(&mut self, index: isize) -> Option<&Cat> {
        let len = self.cats.len();
        if len == 0 {
            return None;
        }
        let wrapped = if index < 0 {
            len - 1
        } else if index as usize >= len {
            0
        } else {
            index as usize
        };
        self.active_index = Some(wrapped);
        self.cats.get(wrapped)
    }
}
