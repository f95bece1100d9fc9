//! Tours overview accumulator

use alloc::string::String;
use alloc::vec::Vec;

/// One overview line: a tour id and its title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewEntry {
    /// Tour id
    pub id: String,
    /// Tour title
    pub title: String,
}

/// Ordered list of authored tours
///
/// Owned by the controller and extended as tours are authored. The buffer
/// only ever receives clones of it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overview {
    entries: Vec<OverviewEntry>,
}

impl Overview {
    /// Create an empty overview
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tour to the listing
    pub fn add(&mut self, id: impl Into<String>, title: impl Into<String>) {
        self.entries.push(OverviewEntry {
            id: id.into(),
            title: title.into(),
        });
    }

    /// Builder form of [`Overview::add`]
    pub fn with(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.add(id, title);
        self
    }

    /// Remove the entry for `id`
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.entries.iter().position(|entry| entry.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Entries in the order the tours were started
    pub fn entries(&self) -> &[OverviewEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the overview lists no tours
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
