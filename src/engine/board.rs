//! State every engine carries: the container, the temp slot, the cursors,
//! the counters and the narration line. Engines mutate the container only
//! through the board so each step's touches and counts are recorded.

use super::{Counters, OpError, Slot, StepResult, Touch, Variant};
use crate::dataset::cursor::CursorSet;
use crate::dataset::{Container, Element};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone)]
pub struct Board {
    pub data: Container,
    pub temp: Option<Element>,
    pub cursors: CursorSet,
    pub counters: Counters,
    narration: String,
    touched: Vec<Touch>,
    output: Option<i32>,
    failure: Option<OpError>,
}

impl Board {
    pub fn new(data: Container) -> Self {
        Board {
            data,
            temp: None,
            cursors: CursorSet::new(),
            counters: Counters::default(),
            narration: String::new(),
            touched: Vec::new(),
            output: None,
            failure: None,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `index`; sort containers are always occupied
    pub fn key(&self, index: usize) -> i32 {
        self.data.value(index).unwrap_or_default()
    }

    pub fn temp_key(&self) -> i32 {
        self.temp.map(|e| e.value).unwrap_or_default()
    }

    fn read(&self, slot: Slot) -> Option<Element> {
        match slot {
            Slot::Index(index) => self.data.get(index),
            Slot::Temp => self.temp,
            Slot::Pivot | Slot::Key => None,
        }
    }

    /// Count one comparison between `a` and `b`
    pub fn compare(&mut self, a: Slot, b: Slot) {
        self.counters.comparisons += 1;
        self.touched.push(Touch::Compared(a, b));
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.counters.swaps += 1;
        self.touched.push(Touch::Swapped(a, b));
    }

    /// Copy an element between slots; the source keeps its element
    pub fn copy(&mut self, from: Slot, to: Slot) {
        let element = self.read(from);
        match to {
            Slot::Index(index) => self.data.set(index, element),
            Slot::Temp => self.temp = element,
            Slot::Pivot | Slot::Key => return,
        }
        self.counters.copies += 1;
        self.touched.push(Touch::Copied { from, to });
    }

    pub fn release_temp(&mut self) {
        self.temp = None;
    }

    pub fn fill(&mut self, index: usize, element: Element) {
        self.data.set(index, Some(element));
        self.touched.push(Touch::Filled(index));
    }

    pub fn clear(&mut self, index: usize) -> Option<Element> {
        let element = self.data.take(index);
        self.touched.push(Touch::Cleared(index));
        element
    }

    pub fn clear_all(&mut self) {
        for index in 0..self.data.len() {
            if self.data.get(index).is_some() {
                self.clear(index);
            }
        }
    }

    pub fn narrate(&mut self, text: impl Into<String>) {
        self.narration = text.into();
    }

    /// Hand a removed or peeked key back to the caller
    pub fn emit(&mut self, value: i32) {
        self.output = Some(value);
    }

    pub fn fail(&mut self, error: OpError, narration: impl Into<String>) {
        self.narration = narration.into();
        self.failure = Some(error);
    }

    /// Forget setup moves so the first step reports only its own changes
    pub fn settle(&mut self) {
        self.cursors.take_moves();
        self.touched.clear();
    }

    /// Close the current step and hand its record to the caller
    pub fn finish(&mut self, done: bool) -> StepResult {
        StepResult {
            moves: self.cursors.take_moves(),
            touched: std::mem::take(&mut self.touched),
            counters: self.counters,
            narration: self.narration.clone(),
            output: self.output.take(),
            failure: self.failure.take(),
            done,
        }
    }

    pub fn snapshot(&self, variant: Variant, phase: &'static str, done: bool) -> Snapshot {
        Snapshot {
            variant,
            slots: self.data.slots().to_vec(),
            temp: self.temp,
            cursors: self.cursors.sorted(),
            counters: self.counters,
            narration: self.narration.clone(),
            phase,
            done,
            gap: None,
            pivot: None,
            range: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::cursor::CursorName;

    #[test]
    fn test_copy_to_temp_keeps_source() {
        let mut board = Board::new(Container::from_values(&[7, 8]));
        board.copy(Slot::Index(1), Slot::Temp);
        assert_eq!(board.temp_key(), 8);
        assert_eq!(board.key(1), 8);
        assert_eq!(board.counters.copies, 1);
    }

    #[test]
    fn test_finish_drains_step_record() {
        let mut board = Board::new(Container::from_values(&[2, 1]));
        board.cursors.place(CursorName::Inner, 0);
        board.compare(Slot::Index(0), Slot::Index(1));
        board.swap(0, 1);
        board.emit(5);
        let result = board.finish(false);
        assert_eq!(result.moves.len(), 1);
        assert_eq!(result.touched.len(), 2);
        assert_eq!(result.counters.comparisons, 1);
        assert_eq!(result.counters.swaps, 1);
        assert_eq!(result.output, Some(5));

        let next = board.finish(false);
        assert!(next.moves.is_empty());
        assert!(next.touched.is_empty());
        assert_eq!(next.output, None);
        assert_eq!(next.counters.swaps, 1);
    }

    #[test]
    fn test_settle_discards_setup_moves() {
        let mut board = Board::new(Container::from_values(&[1]));
        board.cursors.place(CursorName::Outer, 0);
        board.settle();
        assert!(board.finish(false).moves.is_empty());
    }
}
