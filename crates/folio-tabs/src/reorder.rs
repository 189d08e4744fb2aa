//! Drag reorder helpers
//!
//! A drag gesture ends with "move the dragged tab to where the hovered tab
//! is". These functions turn that into a new ordering that relocates exactly
//! one element.

use std::collections::HashSet;

use crate::tab::Tab;

/// Move the element at `from` to index `to`, keeping everything else in
/// relative order. Indices past the end are clamped to the last element.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut result = items.to_vec();
    if result.is_empty() {
        return result;
    }

    let last = result.len() - 1;
    let item = result.remove(from.min(last));
    result.insert(to.min(last), item);
    result
}

/// Ordering produced by dropping `active_id` onto `over_id`.
///
/// `None` when either id is missing.
pub fn reorder_by_id(tabs: &[Tab], active_id: &str, over_id: &str) -> Option<Vec<Tab>> {
    let from = tabs.iter().position(|t| t.id == active_id)?;
    let to = tabs.iter().position(|t| t.id == over_id)?;
    Some(array_move(tabs, from, to))
}

/// Whether `candidate` holds exactly the ids of `current`, each once.
pub fn is_permutation(current: &[Tab], candidate: &[Tab]) -> bool {
    if current.len() != candidate.len() {
        return false;
    }

    let expected: HashSet<&str> = current.iter().map(|t| t.id.as_str()).collect();
    let mut seen = HashSet::with_capacity(candidate.len());
    candidate
        .iter()
        .all(|t| expected.contains(t.id.as_str()) && seen.insert(t.id.as_str()))
}
