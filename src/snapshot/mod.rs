// Immutable views of engine state for rendering

use crate::dataset::cursor::{Cursor, CursorName};
use crate::dataset::Element;
use crate::engine::{Counters, Variant};

/// Snapshot of an engine between two steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub variant: Variant,
    pub slots: Vec<Option<Element>>,
    pub temp: Option<Element>,
    pub cursors: Vec<(CursorName, Cursor)>,
    pub counters: Counters,
    pub narration: String,
    /// Name of the phase the next step runs
    pub phase: &'static str,
    pub done: bool,
    /// Shell sort gap
    pub gap: Option<usize>,
    /// Pivot value (quicksort, partition)
    pub pivot: Option<i32>,
    /// Quicksort range being partitioned
    pub range: Option<(usize, usize)>,
}

impl Snapshot {
    /// Position of a visible cursor
    pub fn cursor(&self, name: CursorName) -> Option<usize> {
        self.cursors
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, c)| c.position)
    }

    /// Values of occupied cells, in slot order
    pub fn values(&self) -> Vec<i32> {
        self.slots.iter().flatten().map(|e| e.value).collect()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_sorted(&self) -> bool {
        self.values().windows(2).all(|w| w[0] <= w[1])
    }

    /// Same container contents, ignoring cursors and narration
    pub fn same_contents(&self, other: &Snapshot) -> bool {
        self.slots == other.slots && self.temp == other.temp
    }
}
