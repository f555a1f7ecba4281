//! Insertion sort unrolled into three phases per outer element:
//! copy `arr[outer]` to the temp slot, shift larger items right one step at
//! a time while `arr[inner - 1] >= temp`, then place temp at `inner`.

use super::board::Board;
use super::{EngineError, Slot, StepEngine, StepResult, Variant};
use crate::dataset::cursor::CursorName;
use crate::dataset::Container;
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    CopyOut,
    Shift,
    Place,
    Done,
}

impl Phase {
    fn label(self) -> &'static str {
        match self {
            Phase::CopyOut => "copy-out",
            Phase::Shift => "shift",
            Phase::Place => "place",
            Phase::Done => "done",
        }
    }
}

#[derive(Debug, Clone)]
pub struct InsertionSort {
    board: Board,
    outer: usize,
    inner: usize,
    phase: Phase,
}

impl InsertionSort {
    pub fn new(data: Container) -> Self {
        let size = data.len();
        let mut board = Board::new(data);
        let phase = if size < 2 {
            board.narrate("Sort is complete");
            Phase::Done
        } else {
            board.cursors.place(CursorName::Outer, 1);
            board.cursors.place(CursorName::Inner, 1);
            board.narrate("Will copy outer to temp");
            Phase::CopyOut
        };
        board.settle();
        InsertionSort {
            board,
            outer: 1,
            inner: 1,
            phase,
        }
    }

    fn copy_out(&mut self) {
        self.board.copy(Slot::Index(self.outer), Slot::Temp);
        self.inner = self.outer;
        self.board.cursors.place(CursorName::Inner, self.inner);
        self.board
            .narrate(format!("Copied {} to temp", self.board.temp_key()));
        self.phase = Phase::Shift;
    }

    fn shift(&mut self) {
        if self.inner > 0 {
            self.board
                .compare(Slot::Index(self.inner - 1), Slot::Temp);
            if self.board.key(self.inner - 1) >= self.board.temp_key() {
                self.board
                    .copy(Slot::Index(self.inner - 1), Slot::Index(self.inner));
                self.inner -= 1;
                self.board.cursors.place(CursorName::Inner, self.inner);
                self.board.narrate("Shifted item right");
                return;
            }
            self.board.narrate("Found insertion point");
        } else {
            self.board.narrate("Reached left end");
        }
        self.phase = Phase::Place;
    }

    fn place(&mut self) {
        self.board.copy(Slot::Temp, Slot::Index(self.inner));
        self.board.release_temp();
        self.outer += 1;

        if self.outer == self.board.len() {
            self.phase = Phase::Done;
            self.board.cursors.hide(CursorName::Outer);
            self.board.cursors.hide(CursorName::Inner);
            self.board.narrate("Sort is complete");
            return;
        }

        self.inner = self.outer;
        self.board.cursors.place(CursorName::Outer, self.outer);
        self.board.cursors.place(CursorName::Inner, self.inner);
        self.board.narrate("Placed temp; will copy next outer");
        self.phase = Phase::CopyOut;
    }
}

impl StepEngine for InsertionSort {
    fn variant(&self) -> Variant {
        Variant::Insertion
    }

    fn step(&mut self) -> Result<StepResult, EngineError> {
        match self.phase {
            Phase::CopyOut => self.copy_out(),
            Phase::Shift => self.shift(),
            Phase::Place => self.place(),
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
