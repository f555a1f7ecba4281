//! Shell sort: insertion sort over interleaved subsequences with stride `h`.
//!
//! The first gap is the largest term of `h = 3h + 1` reached while
//! `h <= size / 3`; after each pass `h = (h - 1) / 3`. Within a pass the
//! copy/shift/place cycle is the same as insertion sort with stride `h`.

use super::board::Board;
use super::{EngineError, Slot, StepEngine, StepResult, Variant};
use crate::dataset::cursor::CursorName;
use crate::dataset::Container;
use crate::snapshot::Snapshot;
use tracing::trace;

/// First gap for a container of `size` items
pub fn initial_gap(size: usize) -> usize {
    let mut h = 1;
    while h <= size / 3 {
        h = h * 3 + 1;
    }
    h
}

/// Every gap used for `size`, largest first
pub fn gap_sequence(size: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut h = initial_gap(size);
    while h > 0 {
        gaps.push(h);
        h = (h - 1) / 3;
    }
    gaps
}

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
pub struct ShellSort {
    board: Board,
    h: usize,
    outer: usize,
    inner: usize,
    phase: Phase,
}

impl ShellSort {
    pub fn new(data: Container) -> Self {
        let h = initial_gap(data.len());
        let mut engine = ShellSort {
            board: Board::new(data),
            h,
            outer: h,
            inner: h,
            phase: Phase::CopyOut,
        };
        engine.seek_pass();
        if !engine.is_done() {
            engine
                .board
                .narrate(format!("Will sort with h={}", engine.h));
        }
        engine.board.settle();
        engine
    }

    /// Skip passes that have no outer element; finishes once `h` hits 0
    fn seek_pass(&mut self) {
        let size = self.board.len();
        while self.outer >= size {
            self.h = (self.h - 1) / 3;
            if self.h == 0 {
                self.phase = Phase::Done;
                self.board.cursors.hide(CursorName::Outer);
                self.board.cursors.hide(CursorName::Inner);
                self.board.narrate("Sort is complete");
                return;
            }
            self.outer = self.h;
            trace!(h = self.h, "shell gap reduced");
        }
        self.inner = self.outer;
        self.phase = Phase::CopyOut;
        self.board.cursors.place(CursorName::Outer, self.outer);
        self.board.cursors.place(CursorName::Inner, self.inner);
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
        if self.inner >= self.h {
            let source = self.inner - self.h;
            self.board.compare(Slot::Index(source), Slot::Temp);
            if self.board.key(source) >= self.board.temp_key() {
                self.board.copy(Slot::Index(source), Slot::Index(self.inner));
                self.inner = source;
                self.board.cursors.place(CursorName::Inner, self.inner);
                self.board
                    .narrate(format!("Shifted item right by {}", self.h));
                return;
            }
            self.board.narrate("Found insertion point");
        } else {
            self.board.narrate("Reached start of subsequence");
        }
        self.phase = Phase::Place;
    }

    fn place(&mut self) {
        self.board.copy(Slot::Temp, Slot::Index(self.inner));
        self.board.release_temp();
        self.outer += 1;

        if self.outer >= self.board.len() {
            let finished = self.h;
            self.seek_pass();
            if !self.is_done() {
                self.board.narrate(format!(
                    "Pass with h={} complete; will sort with h={}",
                    finished, self.h
                ));
            }
            return;
        }

        self.inner = self.outer;
        self.board.cursors.place(CursorName::Outer, self.outer);
        self.board.cursors.place(CursorName::Inner, self.inner);
        self.board.narrate("Placed temp; will copy next outer");
        self.phase = Phase::CopyOut;
    }

    pub fn gap(&self) -> usize {
        self.h
    }
}

impl StepEngine for ShellSort {
    fn variant(&self) -> Variant {
        Variant::Shell
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
        let mut snapshot = self
            .board
            .snapshot(self.variant(), self.phase.label(), self.is_done());
        if !self.is_done() {
            snapshot.gap = Some(self.h);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_sequences() {
        assert_eq!(gap_sequence(10), vec![4, 1]);
        assert_eq!(gap_sequence(12), vec![13, 4, 1]);
        assert_eq!(gap_sequence(100), vec![40, 13, 4, 1]);
        assert_eq!(gap_sequence(2), vec![1]);
    }

    #[test]
    fn test_engine_visits_gaps_in_order() {
        let mut engine = ShellSort::new(Container::reverse_sorted(100));
        let mut seen = vec![engine.gap()];
        while !engine.is_done() {
            engine.step().unwrap();
            if !engine.is_done() && seen.last() != Some(&engine.gap()) {
                seen.push(engine.gap());
            }
        }
        assert_eq!(seen, vec![40, 13, 4, 1]);
        assert!(engine.snapshot().is_sorted());
    }

    #[test]
    fn test_empty_passes_are_skipped() {
        // size 3 starts at h=4, which has no outer element
        let mut engine = ShellSort::new(Container::from_values(&[3, 2, 1]));
        assert_eq!(engine.gap(), 1);
        while !engine.is_done() {
            engine.step().unwrap();
        }
        assert_eq!(engine.snapshot().values(), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_item_is_done() {
        let engine = ShellSort::new(Container::from_values(&[1]));
        assert!(engine.is_done());
    }
}
