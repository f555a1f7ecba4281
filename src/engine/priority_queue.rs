//! Priority queue kept as an ordered array.
//!
//! Items occupy slots `0..n` in ascending order, so the front (the maximum)
//! is slot `n - 1` and the rear is slot 0. Remove and peek touch only the
//! front. Insert walks `curIn` down from the front, shifting every item that
//! is `>=` the new key up by one slot, one shift per step, and drops the key
//! into the gap it leaves. Equal keys therefore queue behind existing ones.

use super::board::Board;
use super::constants::{INITIAL_STRUCTURE_ITEMS, MAX_KEY, STRUCTURE_CAPACITY};
use super::ops::{parse_key, IDLE_NARRATION};
use super::{Counters, EngineError, OpError, Operation, Slot, StepEngine, StepResult, Variant};
use crate::dataset::cursor::{signed, CursorName};
use crate::dataset::{Container, Element};
use crate::snapshot::Snapshot;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Validate(Operation),
    Search { key: i32, cur_in: isize },
    Place { key: i32, index: usize },
    Take,
    Read,
    Clear,
    Finish,
}

impl Phase {
    fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Validate(_) => "validate",
            Phase::Search { .. } => "search",
            Phase::Place { .. } => "place",
            Phase::Take => "take",
            Phase::Read => "read",
            Phase::Clear => "clear",
            Phase::Finish => "finish",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PriorityQueue {
    board: Board,
    n_items: usize,
    phase: Phase,
    rng: StdRng,
}

impl PriorityQueue {
    /// Queue of `STRUCTURE_CAPACITY` cells holding `keys`
    pub fn with_keys(keys: &[i32], rng: StdRng) -> Self {
        let mut sorted: Vec<i32> = keys
            .iter()
            .copied()
            .take(STRUCTURE_CAPACITY)
            .collect();
        sorted.sort_unstable();

        let mut queue = PriorityQueue {
            board: Board::new(Container::empty(STRUCTURE_CAPACITY)),
            n_items: 0,
            phase: Phase::Idle,
            rng,
        };
        for key in sorted {
            let element = Element::random_colored(key, &mut queue.rng);
            queue.board.data.set(queue.n_items, Some(element));
            queue.n_items += 1;
        }
        queue.mark_ends();
        queue.board.narrate(IDLE_NARRATION);
        queue.board.settle();
        queue
    }

    /// Queue preloaded with a few random keys
    pub fn random(mut rng: StdRng) -> Self {
        let keys: Vec<i32> = (0..INITIAL_STRUCTURE_ITEMS)
            .map(|_| rng.gen_range(0..=MAX_KEY))
            .collect();
        PriorityQueue::with_keys(&keys, rng)
    }

    pub fn len(&self) -> usize {
        self.n_items
    }

    pub fn is_empty(&self) -> bool {
        self.n_items == 0
    }

    fn capacity(&self) -> usize {
        self.board.len()
    }

    fn mark_ends(&mut self) {
        if self.n_items == 0 {
            self.board.cursors.hide(CursorName::Front);
            self.board.cursors.hide(CursorName::Rear);
        } else {
            self.board.cursors.place(CursorName::Front, self.n_items - 1);
            self.board.cursors.place(CursorName::Rear, 0);
        }
    }

    fn validate(&mut self, op: Operation) {
        match op {
            Operation::Insert(text) => {
                let key = match parse_key(&text) {
                    Ok(key) => key,
                    Err(error) => {
                        self.board.fail(
                            error,
                            format!("CAN'T INSERT: need key between 0 and {}", MAX_KEY),
                        );
                        self.phase = Phase::Finish;
                        return;
                    }
                };
                if self.n_items == self.capacity() {
                    self.board.fail(
                        OpError::StructureFull {
                            capacity: self.capacity(),
                        },
                        "CAN'T INSERT: queue is full",
                    );
                    self.phase = Phase::Finish;
                    return;
                }
                let cur_in = self.n_items as isize - 1;
                let len = self.capacity();
                self.board.cursors.place_within(CursorName::CurIn, cur_in, len);
                self.board
                    .narrate(format!("Will insert item with key {}", key));
                self.phase = Phase::Search { key, cur_in };
            }
            Operation::Remove => {
                if self.is_empty() {
                    self.board
                        .fail(OpError::StructureEmpty, "CAN'T REMOVE: queue is empty");
                    self.phase = Phase::Finish;
                } else {
                    self.board.narrate("Will remove item from front of queue");
                    self.phase = Phase::Take;
                }
            }
            Operation::Peek => {
                if self.is_empty() {
                    self.board
                        .fail(OpError::StructureEmpty, "CAN'T PEEK: queue is empty");
                    self.phase = Phase::Finish;
                } else {
                    self.board.narrate("Will peek at front of queue");
                    self.phase = Phase::Read;
                }
            }
            Operation::New => {
                self.board.narrate("Will create new, empty queue");
                self.phase = Phase::Clear;
            }
        }
    }

    fn search(&mut self, key: i32, cur_in: isize) {
        if let Some(index) = signed(cur_in) {
            self.board.compare(Slot::Key, Slot::Index(index));
            if key <= self.board.key(index) {
                self.board.copy(Slot::Index(index), Slot::Index(index + 1));
                let next = cur_in - 1;
                let len = self.capacity();
                self.board.cursors.place_within(CursorName::CurIn, next, len);
                self.board.narrate("Shifted item up");
                self.phase = Phase::Search { key, cur_in: next };
                return;
            }
        }

        let index = (cur_in + 1) as usize;
        self.board.cursors.place(CursorName::CurIn, index);
        self.board.narrate("Found place to insert");
        self.phase = Phase::Place { key, index };
    }

    fn place(&mut self, key: i32, index: usize) {
        let element = Element::random_colored(key, &mut self.rng);
        self.board.fill(index, element);
        self.n_items += 1;
        self.board.cursors.hide(CursorName::CurIn);
        self.mark_ends();
        self.board
            .narrate(format!("Inserted item with key {}", key));
        self.phase = Phase::Finish;
    }

    fn take(&mut self) {
        let front = self.n_items - 1;
        let value = self.board.clear(front).map(|e| e.value).unwrap_or_default();
        self.n_items -= 1;
        self.mark_ends();
        self.board.emit(value);
        self.board
            .narrate(format!("Removed item; key is {}", value));
        self.phase = Phase::Finish;
    }

    fn read(&mut self) {
        let value = self.board.key(self.n_items - 1);
        self.board.emit(value);
        self.board
            .narrate(format!("Peeked at front item; key is {}", value));
        self.phase = Phase::Finish;
    }

    fn clear(&mut self) {
        self.board.clear_all();
        self.board.counters = Counters::default();
        self.n_items = 0;
        self.mark_ends();
        self.board.narrate("New queue created");
        self.phase = Phase::Finish;
    }
}

impl StepEngine for PriorityQueue {
    fn variant(&self) -> Variant {
        Variant::PriorityQueue
    }

    fn step(&mut self) -> Result<StepResult, EngineError> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle | Phase::Finish => self.board.narrate(IDLE_NARRATION),
            Phase::Validate(op) => self.validate(op),
            Phase::Search { key, cur_in } => self.search(key, cur_in),
            Phase::Place { key, index } => self.place(key, index),
            Phase::Take => self.take(),
            Phase::Read => self.read(),
            Phase::Clear => self.clear(),
        }
        Ok(self.board.finish(false))
    }

    fn is_done(&self) -> bool {
        false
    }

    fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    fn snapshot(&self) -> Snapshot {
        self.board.snapshot(self.variant(), self.phase.label(), false)
    }

    fn begin(&mut self, op: Operation) -> Result<(), EngineError> {
        if !self.is_idle() {
            return Err(EngineError::Busy);
        }
        debug!(op = op.name(), items = self.n_items, "priority queue operation");
        self.phase = Phase::Validate(op);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn queue(keys: &[i32]) -> PriorityQueue {
        PriorityQueue::with_keys(keys, StdRng::seed_from_u64(11))
    }

    fn perform(queue: &mut PriorityQueue, op: Operation) -> Vec<StepResult> {
        queue.begin(op).unwrap();
        let mut results = Vec::new();
        while !queue.is_idle() {
            results.push(queue.step().unwrap());
        }
        results
    }

    #[test]
    fn test_initial_keys_are_ordered() {
        let queue = queue(&[30, 10, 20]);
        let snapshot = queue.snapshot();
        assert_eq!(snapshot.values(), vec![10, 20, 30]);
        assert_eq!(snapshot.cursor(CursorName::Front), Some(2));
        assert_eq!(snapshot.cursor(CursorName::Rear), Some(0));
    }

    #[test]
    fn test_insert_shifts_larger_items() {
        let mut queue = queue(&[10, 30, 50]);
        let results = perform(&mut queue, Operation::Insert("20".into()));
        // validate, shift 50, shift 30, find, place, finish
        assert_eq!(results.len(), 6);
        assert_eq!(queue.snapshot().values(), vec![10, 20, 30, 50]);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_insert_equal_key_goes_below() {
        let mut queue = queue(&[10, 20]);
        perform(&mut queue, Operation::Insert("20".into()));
        let snapshot = queue.snapshot();
        assert_eq!(snapshot.values(), vec![10, 20, 20]);
    }

    #[test]
    fn test_insert_into_empty_queue() {
        let mut queue = queue(&[]);
        perform(&mut queue, Operation::Insert("7".into()));
        assert_eq!(queue.snapshot().values(), vec![7]);
        assert_eq!(queue.snapshot().cursor(CursorName::Front), Some(0));
    }

    #[test]
    fn test_remove_returns_maximum() {
        let mut queue = queue(&[40, 5, 90]);
        let results = perform(&mut queue, Operation::Remove);
        let output: Vec<_> = results.iter().filter_map(|r| r.output).collect();
        assert_eq!(output, vec![90]);
        assert_eq!(queue.snapshot().values(), vec![5, 40]);
    }

    #[test]
    fn test_invalid_key_is_narrated() {
        let mut queue = queue(&[1]);
        let before = queue.snapshot();
        let results = perform(&mut queue, Operation::Insert("abc".into()));
        assert_eq!(
            results[0].failure,
            Some(OpError::InvalidInput { text: "abc".into() })
        );
        assert!(results[0].narration.starts_with("CAN'T INSERT"));
        assert_eq!(results.len(), 2);
        assert!(queue.snapshot().same_contents(&before));
        assert_eq!(queue.snapshot().counters, before.counters);
    }

    #[test]
    fn test_begin_while_busy() {
        let mut queue = queue(&[1, 2]);
        queue.begin(Operation::Peek).unwrap();
        assert_eq!(queue.begin(Operation::Remove), Err(EngineError::Busy));
    }

    #[test]
    fn test_new_empties_queue() {
        let mut queue = queue(&[1, 2, 3]);
        perform(&mut queue, Operation::New);
        assert!(queue.is_empty());
        assert_eq!(queue.snapshot().occupied(), 0);
        assert_eq!(queue.snapshot().cursor(CursorName::Front), None);
    }
}
