use crate::engine::csp::Csp;
use crate::engine::variable::VariableId;
use crate::finch_assert_simple;

/// A single prune event: `value` was removed from the current domain of
/// `variable`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailEntry {
    pub variable: VariableId,
    pub value: i32,
}

/// A checkpoint in the trail, taken before a propagation call so the search
/// can undo exactly the prunes that call performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrailPosition {
    entry_count: usize,
}

/// The ordered record of prune events performed by propagation.
///
/// The search driver owns the trail: it takes a [`TrailPosition`] before each
/// propagation call and rewinds to it with [`Trail::restore_to`] when it
/// backtracks past the node. Restoration replays the events in reverse order
/// and is the exact inverse of the prunes performed since the checkpoint.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// The checkpoint corresponding to the current end of the trail.
    pub fn position(&self) -> TrailPosition {
        TrailPosition {
            entry_count: self.entries.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The prune events recorded since `position`, oldest first.
    pub fn entries_since(&self, position: TrailPosition) -> &[TrailEntry] {
        &self.entries[position.entry_count..]
    }

    pub(crate) fn record(&mut self, variable: VariableId, value: i32) {
        self.entries.push(TrailEntry { variable, value });
    }

    /// Undoes every prune event recorded after `position`, most recent first,
    /// returning the affected domains to their exact state at the checkpoint.
    pub fn restore_to(&mut self, csp: &mut Csp, position: TrailPosition) {
        finch_assert_simple!(
            position.entry_count <= self.entries.len(),
            "cannot restore to a position the trail has not reached"
        );

        for entry in self.entries.drain(position.entry_count..).rev() {
            csp.reinsert(entry.variable, entry.value);
        }
    }
}
