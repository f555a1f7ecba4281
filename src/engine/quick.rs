//! Quicksort with the rightmost element as pivot, recursion replaced by an
//! explicit stack of pending ranges.
//!
//! After a partition places its pivot at `p`, the right range `(p+1, right)`
//! is pushed and work continues on the left range `(left, p-1)`. When the
//! current range holds fewer than two items the next pending range is popped.
//! This visits partitions in the same order as the recursive formulation
//! that sorts the left side first.
//!
//! Scan positions can step one past the range edges, so the range bounds and
//! scans are kept signed.

use super::board::Board;
use super::constants::QUICK_STACK_CAPACITY;
use super::{EngineError, Slot, StepEngine, StepResult, Variant};
use crate::dataset::cursor::{signed, CursorName};
use crate::dataset::Container;
use crate::snapshot::Snapshot;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    CheckRange,
    ScanLeft,
    ScanRight,
    SwapOrPlace,
    Done,
}

impl Phase {
    fn label(self) -> &'static str {
        match self {
            Phase::CheckRange => "check-range",
            Phase::ScanLeft => "scan-left",
            Phase::ScanRight => "scan-right",
            Phase::SwapOrPlace => "swap-or-place",
            Phase::Done => "done",
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuickSort {
    board: Board,
    left: isize,
    right: isize,
    left_scan: isize,
    right_scan: isize,
    pivot: i32,
    pending: Vec<(isize, isize)>,
    visited: Vec<(usize, usize)>,
    phase: Phase,
}

impl QuickSort {
    pub fn new(data: Container) -> Self {
        let size = data.len() as isize;
        let mut board = Board::new(data);
        let phase = if size < 2 {
            board.narrate("Sort is complete");
            Phase::Done
        } else {
            board.narrate("Will check range 0 to end");
            Phase::CheckRange
        };
        board.settle();
        QuickSort {
            board,
            left: 0,
            right: size - 1,
            left_scan: -1,
            right_scan: size - 1,
            pivot: 0,
            pending: Vec::with_capacity(QUICK_STACK_CAPACITY),
            visited: Vec::new(),
            phase,
        }
    }

    /// Ranges partitioned so far, in order
    pub fn partitions_visited(&self) -> &[(usize, usize)] {
        &self.visited
    }

    /// Ranges waiting on the explicit stack, bottom first
    pub fn pending(&self) -> Vec<(usize, usize)> {
        self.pending
            .iter()
            .map(|&(l, r)| (l as usize, r as usize))
            .collect()
    }

    fn index(position: isize) -> usize {
        signed(position).unwrap_or_default()
    }

    fn check_range(&mut self) {
        if self.right - self.left <= 0 {
            match self.pending.pop() {
                Some((left, right)) => {
                    self.left = left;
                    self.right = right;
                    trace!(left, right, "quicksort range popped");
                    self.board
                        .narrate(format!("Popped range {} to {}", left, right));
                }
                None => {
                    self.phase = Phase::Done;
                    self.board.cursors.hide(CursorName::LeftScan);
                    self.board.cursors.hide(CursorName::RightScan);
                    self.board.cursors.hide(CursorName::Pivot);
                    self.board.cursors.hide(CursorName::Partition);
                    self.board.narrate("Sort is complete");
                }
            }
            return;
        }

        let right = Self::index(self.right);
        self.pivot = self.board.key(right);
        self.visited.push((Self::index(self.left), right));
        self.left_scan = self.left - 1;
        self.right_scan = self.right;

        let len = self.board.len();
        self.board.cursors.hide(CursorName::Partition);
        self.board.cursors.place(CursorName::Pivot, right);
        self.board
            .cursors
            .place_within(CursorName::LeftScan, self.left_scan, len);
        self.board
            .cursors
            .place_within(CursorName::RightScan, self.right_scan, len);
        self.board.narrate(format!(
            "Partitioning {} to {}; pivot is {}",
            self.left, self.right, self.pivot
        ));
        self.phase = Phase::ScanLeft;
    }

    fn scan_left(&mut self) {
        self.left_scan += 1;
        let index = Self::index(self.left_scan);
        let right = Self::index(self.right);
        self.board.compare(Slot::Index(index), Slot::Index(right));
        self.board.cursors.place(CursorName::LeftScan, index);

        if self.board.key(index) < self.pivot {
            self.board.narrate("leftScan item is smaller than pivot");
        } else {
            self.board
                .narrate("leftScan stopped at item not smaller than pivot");
            self.phase = Phase::ScanRight;
        }
    }

    fn scan_right(&mut self) {
        if self.right_scan <= self.left {
            self.board.narrate("rightScan reached left end");
            self.phase = Phase::SwapOrPlace;
            return;
        }

        self.right_scan -= 1;
        let index = Self::index(self.right_scan);
        let right = Self::index(self.right);
        self.board.compare(Slot::Index(index), Slot::Index(right));
        self.board.cursors.place(CursorName::RightScan, index);

        if self.board.key(index) > self.pivot {
            self.board.narrate("rightScan item is larger than pivot");
        } else {
            self.board
                .narrate("rightScan stopped at item not larger than pivot");
            self.phase = Phase::SwapOrPlace;
        }
    }

    fn swap_or_place(&mut self) {
        let left_scan = Self::index(self.left_scan);

        if self.left_scan < self.right_scan {
            self.board.swap(left_scan, Self::index(self.right_scan));
            self.board.narrate("Swapped leftScan and rightScan items");
            self.phase = Phase::ScanLeft;
            return;
        }

        // scans crossed: the pivot belongs at leftScan
        let right = self.right;
        self.board.swap(left_scan, Self::index(right));
        let partition = self.left_scan;
        if right - (partition + 1) > 0 {
            self.pending.push((partition + 1, right));
            trace!(left = partition + 1, right, "quicksort range pushed");
        }
        self.right = partition - 1;

        self.board.cursors.hide(CursorName::Pivot);
        self.board.cursors.hide(CursorName::RightScan);
        self.board.cursors.place(CursorName::Partition, left_scan);
        self.board
            .narrate(format!("Pivot {} placed at {}", self.pivot, partition));
        self.phase = Phase::CheckRange;
    }
}

impl StepEngine for QuickSort {
    fn variant(&self) -> Variant {
        Variant::Quick
    }

    fn step(&mut self) -> Result<StepResult, EngineError> {
        match self.phase {
            Phase::CheckRange => self.check_range(),
            Phase::ScanLeft => self.scan_left(),
            Phase::ScanRight => self.scan_right(),
            Phase::SwapOrPlace => self.swap_or_place(),
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
        if matches!(
            self.phase,
            Phase::ScanLeft | Phase::ScanRight | Phase::SwapOrPlace
        ) {
            snapshot.pivot = Some(self.pivot);
            snapshot.range = Some((Self::index(self.left), Self::index(self.right)));
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(values: &[i32]) -> QuickSort {
        let mut engine = QuickSort::new(Container::from_values(values));
        while !engine.is_done() {
            engine.step().unwrap();
        }
        engine
    }

    #[test]
    fn test_sorts_small_input() {
        let engine = run(&[3, 7, 1, 9, 4, 4, 0]);
        assert_eq!(engine.snapshot().values(), vec![0, 1, 3, 4, 4, 7, 9]);
    }

    #[test]
    fn test_first_partition_uses_rightmost_pivot() {
        let mut engine = QuickSort::new(Container::from_values(&[5, 1, 4, 2, 3]));
        engine.step().unwrap();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.pivot, Some(3));
        assert_eq!(snapshot.cursor(CursorName::Pivot), Some(4));
        assert_eq!(snapshot.range, Some((0, 4)));
    }

    #[test]
    fn test_right_range_is_pushed() {
        let mut engine = QuickSort::new(Container::from_values(&[5, 1, 4, 2, 3]));
        while engine.partitions_visited().len() < 1 || engine.phase != Phase::CheckRange {
            engine.step().unwrap();
        }
        // pivot 3 lands at index 2: [2, 1, 3, 5, 4]
        assert_eq!(engine.snapshot().values(), vec![2, 1, 3, 5, 4]);
        assert_eq!(engine.pending(), vec![(3, 4)]);
    }

    #[test]
    fn test_two_items() {
        let engine = run(&[2, 1]);
        assert_eq!(engine.snapshot().values(), vec![1, 2]);
        assert_eq!(engine.partitions_visited(), &[(0, 1)]);
    }
}
