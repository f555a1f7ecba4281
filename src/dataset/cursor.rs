//! Named cursors into a container
//!
//! Every cursor remembers where it was before its last move, so a renderer
//! can erase the old arrow and draw the new one without diffing snapshots.

use rustc_hash::FxHashMap;

/// The cursor names used across all algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CursorName {
    Outer,
    Inner,
    Min,
    LeftScan,
    RightScan,
    Pivot,
    Partition,
    Front,
    Rear,
    CurIn,
    Top,
}

impl CursorName {
    /// Arrow caption
    pub fn label(self) -> &'static str {
        match self {
            CursorName::Outer => "outer",
            CursorName::Inner => "inner",
            CursorName::Min => "min",
            CursorName::LeftScan => "leftScan",
            CursorName::RightScan => "rightScan",
            CursorName::Pivot => "pivot",
            CursorName::Partition => "partition",
            CursorName::Front => "Front",
            CursorName::Rear => "Rear",
            CursorName::CurIn => "curIn",
            CursorName::Top => "Top",
        }
    }
}

/// Current and previous position of one cursor (`None` = not shown)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub position: Option<usize>,
    pub previous: Option<usize>,
}

/// A cursor change recorded during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMove {
    pub name: CursorName,
    pub from: Option<usize>,
    pub to: Option<usize>,
}

/// Convert a signed scan position to an index, hiding anything left of 0
pub fn signed(position: isize) -> Option<usize> {
    usize::try_from(position).ok()
}

#[derive(Debug, Clone, Default)]
pub struct CursorSet {
    cursors: FxHashMap<CursorName, Cursor>,
    moves: Vec<CursorMove>,
}

impl CursorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move a cursor, recording the move if the position changed
    pub fn set(&mut self, name: CursorName, position: Option<usize>) {
        let cursor = self.cursors.entry(name).or_default();
        if cursor.position == position {
            return;
        }
        let from = cursor.position;
        cursor.previous = from;
        cursor.position = position;
        self.moves.push(CursorMove {
            name,
            from,
            to: position,
        });
    }

    pub fn place(&mut self, name: CursorName, index: usize) {
        self.set(name, Some(index));
    }

    /// Place the cursor only if `index` lies within `len`, otherwise hide it
    pub fn place_within(&mut self, name: CursorName, index: isize, len: usize) {
        let position = signed(index).filter(|&i| i < len);
        self.set(name, position);
    }

    pub fn hide(&mut self, name: CursorName) {
        self.set(name, None);
    }

    pub fn get(&self, name: CursorName) -> Option<usize> {
        self.cursors.get(&name).and_then(|c| c.position)
    }

    pub fn cursor(&self, name: CursorName) -> Option<Cursor> {
        self.cursors.get(&name).copied()
    }

    /// Drain the moves recorded since the last call
    pub fn take_moves(&mut self) -> Vec<CursorMove> {
        std::mem::take(&mut self.moves)
    }

    /// All known cursors ordered by name
    pub fn sorted(&self) -> Vec<(CursorName, Cursor)> {
        let mut all: Vec<_> = self.cursors.iter().map(|(n, c)| (*n, *c)).collect();
        all.sort_by_key(|(name, _)| *name);
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_records_previous_position() {
        let mut cursors = CursorSet::new();
        cursors.place(CursorName::Inner, 0);
        cursors.place(CursorName::Inner, 1);
        let cursor = cursors.cursor(CursorName::Inner).unwrap();
        assert_eq!(cursor.position, Some(1));
        assert_eq!(cursor.previous, Some(0));
    }

    #[test]
    fn test_unchanged_position_is_not_a_move() {
        let mut cursors = CursorSet::new();
        cursors.place(CursorName::Outer, 3);
        cursors.take_moves();
        cursors.place(CursorName::Outer, 3);
        assert!(cursors.take_moves().is_empty());
    }

    #[test]
    fn test_place_within_hides_out_of_range() {
        let mut cursors = CursorSet::new();
        cursors.place_within(CursorName::LeftScan, -1, 10);
        assert_eq!(cursors.get(CursorName::LeftScan), None);
        cursors.place_within(CursorName::RightScan, 10, 10);
        assert_eq!(cursors.get(CursorName::RightScan), None);
        cursors.place_within(CursorName::RightScan, 9, 10);
        assert_eq!(cursors.get(CursorName::RightScan), Some(9));
    }

    #[test]
    fn test_sorted_orders_by_name() {
        let mut cursors = CursorSet::new();
        cursors.place(CursorName::Min, 2);
        cursors.place(CursorName::Outer, 0);
        let names: Vec<_> = cursors.sorted().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec![CursorName::Outer, CursorName::Min]);
    }
}
