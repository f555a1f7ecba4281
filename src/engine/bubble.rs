//! Bubble sort, one comparison per step
//!
//! `outer` marks the last unsorted index and `inner` walks the pair
//! `(inner, inner + 1)`. Each step compares the pair, swaps it if out of
//! order and advances `inner`; once `inner` passes `outer - 1` the pass ends,
//! `inner` returns to 0 and `outer` shrinks by one. The sort is done when
//! `outer` reaches 0.

use super::board::Board;
use super::{EngineError, Slot, StepEngine, StepResult, Variant};
use crate::dataset::cursor::CursorName;
use crate::dataset::Container;
use crate::snapshot::Snapshot;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Compare,
    Done,
}

impl Phase {
    fn label(self) -> &'static str {
        match self {
            Phase::Compare => "compare",
            Phase::Done => "done",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BubbleSort {
    board: Board,
    outer: usize,
    inner: usize,
    phase: Phase,
}

impl BubbleSort {
    pub fn new(data: Container) -> Self {
        let outer = data.len().saturating_sub(1);
        let mut board = Board::new(data);
        let phase = if outer == 0 {
            board.narrate("Sort is complete");
            Phase::Done
        } else {
            board.cursors.place(CursorName::Outer, outer);
            board.cursors.place(CursorName::Inner, 0);
            board.narrate("Will compare inner and inner+1");
            Phase::Compare
        };
        board.settle();
        BubbleSort {
            board,
            outer,
            inner: 0,
            phase,
        }
    }

    fn compare(&mut self) {
        let (left, right) = (self.inner, self.inner + 1);
        self.board.compare(Slot::Index(left), Slot::Index(right));
        if self.board.key(left) > self.board.key(right) {
            self.board.swap(left, right);
            self.board.narrate(format!(
                "Swapped {} and {}",
                self.board.key(right),
                self.board.key(left)
            ));
        } else {
            self.board.narrate("No swap needed");
        }

        self.inner += 1;
        if self.inner > self.outer - 1 {
            self.inner = 0;
            self.outer -= 1;
            trace!(outer = self.outer, "bubble pass complete");
        }

        if self.outer == 0 {
            self.phase = Phase::Done;
            self.board.cursors.hide(CursorName::Inner);
            self.board.cursors.place(CursorName::Outer, 0);
            self.board.narrate("Sort is complete");
        } else {
            self.board.cursors.place(CursorName::Outer, self.outer);
            self.board.cursors.place(CursorName::Inner, self.inner);
        }
    }
}

impl StepEngine for BubbleSort {
    fn variant(&self) -> Variant {
        Variant::Bubble
    }

    fn step(&mut self) -> Result<StepResult, EngineError> {
        match self.phase {
            Phase::Compare => self.compare(),
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
