//! Text resource editing operations
//!
//! Provides functions for modifying and querying `TextResource`s:
//! - Replace a string in place
//! - Remove groups
//! - Search string content
//! - Report group IDs used more than once

use super::{TextGroup, TextResource};
use std::collections::BTreeMap;

/// A string found by [`TextResource::search`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch<'a> {
    pub group_id: i32,
    pub index: usize,
    pub text: &'a str,
}

// ============================================================================
// TextResource editing methods
// ============================================================================

impl TextResource {
    /// Replace an existing string
    ///
    /// # Returns
    /// The previous text, or `None` if the group or index does not exist
    pub fn set_string(
        &mut self,
        group_id: i32,
        index: usize,
        text: impl Into<String>,
    ) -> Option<String> {
        let slot = self.group_mut(group_id)?.strings_mut().get_mut(index)?;
        Some(std::mem::replace(slot, text.into()))
    }

    /// Remove the first group with the given ID
    pub fn remove_group(&mut self, id: i32) -> Option<TextGroup> {
        let pos = self.groups().iter().position(|g| g.id() == id)?;
        Some(self.groups_mut().remove(pos))
    }

    /// Find strings containing `query`, in document order
    pub fn search(&self, query: &str, case_sensitive: bool) -> Vec<SearchMatch<'_>> {
        let query_lower = query.to_lowercase();
        self.groups()
            .iter()
            .flat_map(|group| {
                group.iter().enumerate().map(move |(index, text)| SearchMatch {
                    group_id: group.id(),
                    index,
                    text,
                })
            })
            .filter(|m| {
                if case_sensitive {
                    m.text.contains(query)
                } else {
                    m.text.to_lowercase().contains(&query_lower)
                }
            })
            .collect()
    }

    /// Group IDs that appear on more than one group, in ascending order
    ///
    /// Duplicate IDs are legal in the file format; this is informational.
    pub fn duplicate_group_ids(&self) -> Vec<i32> {
        let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
        for group in self.groups() {
            *counts.entry(group.id()).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(id, _)| id)
            .collect()
    }
}
