//! A single partitioning pass around a pivot *value*.
//!
//! The pivot is drawn at random from [`PIVOT_RANGE`] rather than taken from
//! the container, so the split point depends on how many items happen to lie
//! on either side of it. `leftScan` runs right while items are below the
//! pivot, `rightScan` runs left while items are above it, and out-of-place
//! pairs are swapped until the scans cross. The partition index is then
//! `leftScan`: everything before it is `<= pivot`, everything after it
//! `>= pivot`.

use super::board::Board;
use super::constants::PIVOT_RANGE;
use super::{EngineError, Slot, StepEngine, StepResult, Variant};
use crate::dataset::cursor::{signed, CursorName};
use crate::dataset::Container;
use crate::snapshot::Snapshot;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    ScanLeft,
    ScanRight,
    SwapOrFinish,
    Report,
    Done,
}

impl Phase {
    fn label(self) -> &'static str {
        match self {
            Phase::ScanLeft => "scan-left",
            Phase::ScanRight => "scan-right",
            Phase::SwapOrFinish => "swap-or-finish",
            Phase::Report => "report",
            Phase::Done => "done",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Partition {
    board: Board,
    pivot: i32,
    left_scan: isize,
    right_scan: isize,
    partition: Option<usize>,
    phase: Phase,
}

impl Partition {
    pub fn new(data: Container, pivot: i32) -> Self {
        let size = data.len() as isize;
        let mut board = Board::new(data);
        board.narrate(format!("Pivot value is {}", pivot));
        board.settle();
        Partition {
            board,
            pivot,
            left_scan: -1,
            right_scan: size,
            partition: None,
            phase: Phase::ScanLeft,
        }
    }

    pub fn with_random_pivot<R: Rng + ?Sized>(data: Container, rng: &mut R) -> Self {
        let pivot = rng.gen_range(PIVOT_RANGE);
        Partition::new(data, pivot)
    }

    pub fn pivot(&self) -> i32 {
        self.pivot
    }

    /// Index where the right-hand part begins, once the scans have crossed
    pub fn partition(&self) -> Option<usize> {
        self.partition
    }

    fn last(&self) -> isize {
        self.board.len() as isize - 1
    }

    fn scan_left(&mut self) {
        if self.left_scan >= self.last() {
            self.board.narrate("leftScan reached right end");
            self.phase = Phase::ScanRight;
            return;
        }

        self.left_scan += 1;
        let index = signed(self.left_scan).unwrap_or_default();
        self.board.compare(Slot::Index(index), Slot::Pivot);
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
        if self.right_scan <= 0 {
            self.board.narrate("rightScan reached left end");
            self.phase = Phase::SwapOrFinish;
            return;
        }

        self.right_scan -= 1;
        let index = signed(self.right_scan).unwrap_or_default();
        self.board.compare(Slot::Index(index), Slot::Pivot);
        self.board.cursors.place(CursorName::RightScan, index);

        if self.board.key(index) > self.pivot {
            self.board.narrate("rightScan item is larger than pivot");
        } else {
            self.board
                .narrate("rightScan stopped at item not larger than pivot");
            self.phase = Phase::SwapOrFinish;
        }
    }

    fn swap_or_finish(&mut self) {
        if self.left_scan < self.right_scan {
            let left = signed(self.left_scan).unwrap_or_default();
            let right = signed(self.right_scan).unwrap_or_default();
            self.board.swap(left, right);
            self.board.narrate("Swapped leftScan and rightScan items");
            self.phase = Phase::ScanLeft;
            return;
        }

        let partition = signed(self.left_scan).unwrap_or_default();
        self.partition = Some(partition);
        self.board.cursors.hide(CursorName::LeftScan);
        self.board.cursors.hide(CursorName::RightScan);
        self.board.cursors.place(CursorName::Partition, partition);
        self.board
            .narrate(format!("Scans have crossed; partition is at {}", partition));
        self.phase = Phase::Report;
    }

    fn report(&mut self) {
        let partition = self.partition.unwrap_or_default();
        self.board.narrate(format!(
            "Partition complete: {} items left of {}, pivot {}",
            partition, partition, self.pivot
        ));
        self.phase = Phase::Done;
    }
}

impl StepEngine for Partition {
    fn variant(&self) -> Variant {
        Variant::Partition
    }

    fn step(&mut self) -> Result<StepResult, EngineError> {
        match self.phase {
            Phase::ScanLeft => self.scan_left(),
            Phase::ScanRight => self.scan_right(),
            Phase::SwapOrFinish => self.swap_or_finish(),
            Phase::Report => self.report(),
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
        snapshot.pivot = Some(self.pivot);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(values: &[i32], pivot: i32) -> Partition {
        let mut engine = Partition::new(Container::from_values(values), pivot);
        while !engine.is_done() {
            engine.step().unwrap();
        }
        engine
    }

    fn assert_partitioned(engine: &Partition) {
        let values = engine.snapshot().values();
        let partition = engine.partition().unwrap();
        assert!(values[..partition].iter().all(|&v| v <= engine.pivot()));
        assert!(values[partition + 1..].iter().all(|&v| v >= engine.pivot()));
    }

    #[test]
    fn test_splits_around_pivot() {
        let engine = run(&[150, 20, 180, 90, 60, 130], 100);
        assert_eq!(engine.partition(), Some(3));
        assert_partitioned(&engine);
    }

    #[test]
    fn test_all_below_pivot() {
        let engine = run(&[1, 2, 3], 100);
        assert_eq!(engine.partition(), Some(2));
        assert_partitioned(&engine);
    }

    #[test]
    fn test_all_above_pivot() {
        let engine = run(&[150, 160, 170], 100);
        assert_eq!(engine.partition(), Some(0));
        assert_partitioned(&engine);
    }

    #[test]
    fn test_report_step_follows_crossing() {
        let mut engine = Partition::new(Container::from_values(&[150, 20]), 100);
        while engine.partition().is_none() {
            engine.step().unwrap();
        }
        assert!(!engine.is_done());
        let result = engine.step().unwrap();
        assert!(result.done);
    }

    #[test]
    fn test_random_pivot_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let engine = Partition::with_random_pivot(Container::from_values(&[1]), &mut rng);
            assert!(PIVOT_RANGE.contains(&engine.pivot()));
        }
    }
}
