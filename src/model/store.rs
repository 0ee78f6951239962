use thiserror::Error;

use super::entry::{Entry, EntryFilter};

/// Default entry bound when none is configured.
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("entry limit reached ({0} entries)")]
    CapacityExceeded(usize),
    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The in-memory list of entries; the single source of truth during a run.
///
/// Entries are addressed by position, so every removal shifts the tail left
/// and keeps the relative order of the survivors intact.
#[derive(Debug, Clone)]
pub struct EntryStore {
    entries: Vec<Entry>,
    capacity: usize,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Rebuild a store from loaded entries, resetting transient edit state.
    pub fn from_entries(entries: Vec<Entry>, capacity: usize) -> Self {
        let mut entries = entries;
        entries.truncate(capacity);
        for entry in &mut entries {
            entry.editing = false;
            entry.edit_buffer = entry.description.clone();
        }
        Self { entries, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entry> {
        self.entries.get_mut(index)
    }

    /// Insert at the end. Rejects cleanly once the capacity bound is hit.
    pub fn append(&mut self, entry: Entry) -> Result<(), StoreError> {
        if self.is_full() {
            return Err(StoreError::CapacityExceeded(self.capacity));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Remove the entry at `index`, shifting everything after it left.
    pub fn remove_at(&mut self, index: usize) -> Result<Entry, StoreError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Stable sort, High before Medium before Low. Entries of equal priority
    /// keep the relative order they had before the sort.
    pub fn sort_by_priority(&mut self) {
        self.entries
            .sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Cycle the entry's priority forward and re-sort so the displayed order
    /// stays consistent with positional addressing.
    pub fn advance_priority(&mut self, index: usize) -> Result<(), StoreError> {
        self.check_index(index)?;
        let entry = &mut self.entries[index];
        entry.priority = entry.priority.advance();
        self.sort_by_priority();
        Ok(())
    }

    pub fn set_completed(&mut self, index: usize, value: bool) -> Result<(), StoreError> {
        self.check_index(index)?;
        self.entries[index].completed = value;
        Ok(())
    }

    /// Start inline editing, seeding the scratch buffer from the description.
    pub fn begin_edit(&mut self, index: usize) -> Result<(), StoreError> {
        self.check_index(index)?;
        let entry = &mut self.entries[index];
        entry.edit_buffer = entry.description.clone();
        entry.editing = true;
        Ok(())
    }

    /// Discard the scratch buffer and leave the description untouched.
    pub fn cancel_edit(&mut self, index: usize) -> Result<(), StoreError> {
        self.check_index(index)?;
        let entry = &mut self.entries[index];
        entry.edit_buffer = entry.description.clone();
        entry.editing = false;
        Ok(())
    }

    /// Commit the scratch buffer as the new description.
    pub fn commit_edit(&mut self, index: usize) -> Result<(), StoreError> {
        self.check_index(index)?;
        let entry = &mut self.entries[index];
        entry.description = entry.edit_buffer.clone();
        entry.editing = false;
        Ok(())
    }

    /// Lazy view of entries matching `filter`, yielding their current index.
    /// Restartable and non-mutating; indices are only valid until the next
    /// mutation.
    pub fn iter_filtered(
        &self,
        filter: EntryFilter,
    ) -> impl Iterator<Item = (usize, &Entry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, entry)| filter.matches(entry))
    }

    fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}
