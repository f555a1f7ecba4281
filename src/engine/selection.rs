//! Selection sort in two sub-phases: a linear scan for the minimum of
//! `outer..size`, then a single swap of that minimum into `outer`.

use super::board::Board;
use super::{EngineError, Slot, StepEngine, StepResult, Variant};
use crate::dataset::cursor::CursorName;
use crate::dataset::Container;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Search,
    Swap,
    Done,
}

impl Phase {
    fn label(self) -> &'static str {
        match self {
            Phase::Search => "search",
            Phase::Swap => "swap",
            Phase::Done => "done",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectionSort {
    board: Board,
    outer: usize,
    inner: usize,
    min: usize,
    phase: Phase,
}

impl SelectionSort {
    pub fn new(data: Container) -> Self {
        let size = data.len();
        let mut board = Board::new(data);
        let phase = if size < 2 {
            board.narrate("Sort is complete");
            Phase::Done
        } else {
            board.cursors.place(CursorName::Outer, 0);
            board.cursors.place(CursorName::Inner, 1);
            board.cursors.place(CursorName::Min, 0);
            board.narrate("Will search for minimum");
            Phase::Search
        };
        board.settle();
        SelectionSort {
            board,
            outer: 0,
            inner: 1,
            min: 0,
            phase,
        }
    }

    fn search(&mut self) {
        self.board
            .compare(Slot::Index(self.inner), Slot::Index(self.min));
        if self.board.key(self.inner) < self.board.key(self.min) {
            self.min = self.inner;
            self.board
                .narrate(format!("New minimum is {}", self.board.key(self.min)));
        } else {
            self.board.narrate("Minimum unchanged");
        }

        self.inner += 1;
        let size = self.board.len();
        if self.inner == size {
            self.phase = Phase::Swap;
            self.board.cursors.hide(CursorName::Inner);
        } else {
            self.board.cursors.place(CursorName::Inner, self.inner);
        }
        self.board.cursors.place(CursorName::Min, self.min);
    }

    fn swap(&mut self) {
        if self.min != self.outer {
            self.board.swap(self.outer, self.min);
            self.board.narrate("Swapped minimum into outer");
        } else {
            self.board.narrate("Minimum already at outer");
        }

        self.outer += 1;
        let size = self.board.len();
        if self.outer + 2 > size {
            self.phase = Phase::Done;
            self.board.cursors.hide(CursorName::Min);
            self.board.cursors.hide(CursorName::Inner);
            self.board.cursors.place(CursorName::Outer, size - 1);
            self.board.narrate("Sort is complete");
            return;
        }

        self.min = self.outer;
        self.inner = self.outer + 1;
        self.phase = Phase::Search;
        self.board.cursors.place(CursorName::Outer, self.outer);
        self.board.cursors.place(CursorName::Min, self.min);
        self.board.cursors.place(CursorName::Inner, self.inner);
    }
}

impl StepEngine for SelectionSort {
    fn variant(&self) -> Variant {
        Variant::Selection
    }

    fn step(&mut self) -> Result<StepResult, EngineError> {
        match self.phase {
            Phase::Search => self.search(),
            Phase::Swap => self.swap(),
            Phase::Done => return Err(EngineError::Finished),
        }
        Ok(self.board.finish(self.is_done()))
    }

    fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    fn snapshot(&self) -> Snapshot {
        self.board
            .snapshot(self.variant(), self.phase.label(), self.is_done())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(values: &[i32]) -> Snapshot {
        let mut engine = SelectionSort::new(Container::from_values(values));
        while !engine.is_done() {
            engine.step().unwrap();
        }
        engine.snapshot()
    }

    #[test]
    fn test_counts_on_three_items() {
        let snapshot = run(&[3, 1, 2]);
        assert_eq!(snapshot.values(), vec![1, 2, 3]);
        assert_eq!(snapshot.counters.comparisons, 3);
        assert_eq!(snapshot.counters.swaps, 2);
    }

    #[test]
    fn test_no_swap_when_min_at_outer() {
        let snapshot = run(&[1, 2, 3, 4]);
        assert_eq!(snapshot.counters.comparisons, 6);
        assert_eq!(snapshot.counters.swaps, 0);
    }

    #[test]
    fn test_search_then_swap_phase() {
        let mut engine = SelectionSort::new(Container::from_values(&[2, 1]));
        assert_eq!(engine.snapshot().phase, "search");
        engine.step().unwrap();
        assert_eq!(engine.snapshot().phase, "swap");
        assert_eq!(engine.snapshot().cursor(CursorName::Min), Some(1));
        let result = engine.step().unwrap();
        assert!(result.done);
        assert_eq!(engine.snapshot().values(), vec![1, 2]);
    }
}
