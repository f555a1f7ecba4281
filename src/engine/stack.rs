//! Fixed-capacity LIFO stack with an explicit `Top` cursor.
//!
//! Push increments top and then stores the key; pop reads the key at top,
//! empties the cell and then decrements top. Each of those is its own step.

use super::board::Board;
use super::constants::{INITIAL_STRUCTURE_ITEMS, MAX_KEY, STRUCTURE_CAPACITY};
use super::ops::{parse_key, IDLE_NARRATION};
use super::{Counters, EngineError, OpError, Operation, StepEngine, StepResult, Variant};
use crate::dataset::cursor::CursorName;
use crate::dataset::{Container, Element};
use crate::snapshot::Snapshot;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Validate(Operation),
    Increment { key: i32 },
    Place { key: i32 },
    Take,
    Decrement,
    Read,
    Clear,
    Finish,
}

impl Phase {
    fn label(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Validate(_) => "validate",
            Phase::Increment { .. } => "increment",
            Phase::Place { .. } => "place",
            Phase::Take => "take",
            Phase::Decrement => "decrement",
            Phase::Read => "read",
            Phase::Clear => "clear",
            Phase::Finish => "finish",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stack {
    board: Board,
    /// Index of the top item, -1 when empty
    top: isize,
    phase: Phase,
    rng: StdRng,
}

impl Stack {
    /// Stack of `STRUCTURE_CAPACITY` cells with `keys` pushed in order
    pub fn with_keys(keys: &[i32], mut rng: StdRng) -> Self {
        let mut board = Board::new(Container::empty(STRUCTURE_CAPACITY));
        let mut top = -1;
        for &key in keys.iter().take(STRUCTURE_CAPACITY) {
            top += 1;
            board
                .data
                .set(top as usize, Some(Element::random_colored(key, &mut rng)));
        }
        let mut stack = Stack {
            board,
            top,
            phase: Phase::Idle,
            rng,
        };
        stack.mark_top();
        stack.board.narrate(IDLE_NARRATION);
        stack.board.settle();
        stack
    }

    pub fn random(mut rng: StdRng) -> Self {
        let keys: Vec<i32> = (0..INITIAL_STRUCTURE_ITEMS)
            .map(|_| rng.gen_range(0..=MAX_KEY))
            .collect();
        Stack::with_keys(&keys, rng)
    }

    pub fn len(&self) -> usize {
        (self.top + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.top < 0
    }

    fn is_full(&self) -> bool {
        self.len() == self.board.len()
    }

    fn mark_top(&mut self) {
        let len = self.board.len();
        self.board.cursors.place_within(CursorName::Top, self.top, len);
    }

    fn validate(&mut self, op: Operation) {
        match op {
            Operation::Insert(text) => {
                let key = match parse_key(&text) {
                    Ok(key) => key,
                    Err(error) => {
                        self.board.fail(
                            error,
                            format!("CAN'T PUSH: need key between 0 and {}", MAX_KEY),
                        );
                        self.phase = Phase::Finish;
                        return;
                    }
                };
                if self.is_full() {
                    self.board.fail(
                        OpError::StructureFull {
                            capacity: self.board.len(),
                        },
                        "CAN'T PUSH: stack is full",
                    );
                    self.phase = Phase::Finish;
                    return;
                }
                self.board.narrate(format!("Will push item with key {}", key));
                self.phase = Phase::Increment { key };
            }
            Operation::Remove => {
                if self.is_empty() {
                    self.board
                        .fail(OpError::StructureEmpty, "CAN'T POP: stack is empty");
                    self.phase = Phase::Finish;
                } else {
                    self.board.narrate("Will pop item from top of stack");
                    self.phase = Phase::Take;
                }
            }
            Operation::Peek => {
                if self.is_empty() {
                    self.board
                        .fail(OpError::StructureEmpty, "CAN'T PEEK: stack is empty");
                    self.phase = Phase::Finish;
                } else {
                    self.board.narrate("Will peek at top of stack");
                    self.phase = Phase::Read;
                }
            }
            Operation::New => {
                self.board.narrate("Will create new, empty stack");
                self.phase = Phase::Clear;
            }
        }
    }

    fn increment(&mut self, key: i32) {
        self.top += 1;
        self.mark_top();
        self.board.narrate("Incremented top");
        self.phase = Phase::Place { key };
    }

    fn place(&mut self, key: i32) {
        let element = Element::random_colored(key, &mut self.rng);
        self.board.fill(self.top as usize, element);
        self.board
            .narrate(format!("Inserted item with key {}", key));
        self.phase = Phase::Finish;
    }

    fn take(&mut self) {
        let value = self
            .board
            .clear(self.top as usize)
            .map(|e| e.value)
            .unwrap_or_default();
        self.board.emit(value);
        self.board
            .narrate(format!("Removed item; key is {}", value));
        self.phase = Phase::Decrement;
    }

    fn decrement(&mut self) {
        self.top -= 1;
        self.mark_top();
        self.board.narrate("Decremented top");
        self.phase = Phase::Finish;
    }

    fn read(&mut self) {
        let value = self.board.key(self.top as usize);
        self.board.emit(value);
        self.board
            .narrate(format!("Value returned is {}", value));
        self.phase = Phase::Finish;
    }

    fn clear(&mut self) {
        self.board.clear_all();
        self.board.counters = Counters::default();
        self.top = -1;
        self.mark_top();
        self.board.narrate("New stack created");
        self.phase = Phase::Finish;
    }
}

impl StepEngine for Stack {
    fn variant(&self) -> Variant {
        Variant::Stack
    }

    fn step(&mut self) -> Result<StepResult, EngineError> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle | Phase::Finish => self.board.narrate(IDLE_NARRATION),
            Phase::Validate(op) => self.validate(op),
            Phase::Increment { key } => self.increment(key),
            Phase::Place { key } => self.place(key),
            Phase::Take => self.take(),
            Phase::Decrement => self.decrement(),
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
        debug!(op = op.name(), items = self.len(), "stack operation");
        self.phase = Phase::Validate(op);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn stack(keys: &[i32]) -> Stack {
        Stack::with_keys(keys, StdRng::seed_from_u64(5))
    }

    fn perform(stack: &mut Stack, op: Operation) -> Vec<StepResult> {
        stack.begin(op).unwrap();
        let mut results = Vec::new();
        while !stack.is_idle() {
            results.push(stack.step().unwrap());
        }
        results
    }

    fn output(results: &[StepResult]) -> Option<i32> {
        results.iter().find_map(|r| r.output)
    }

    #[test]
    fn test_push_then_pop_is_lifo() {
        let mut stack = stack(&[]);
        perform(&mut stack, Operation::Insert("1".into()));
        perform(&mut stack, Operation::Insert("2".into()));
        assert_eq!(output(&perform(&mut stack, Operation::Remove)), Some(2));
        assert_eq!(output(&perform(&mut stack, Operation::Remove)), Some(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_phases() {
        let mut stack = stack(&[5]);
        let results = perform(&mut stack, Operation::Insert("9".into()));
        let narration: Vec<_> = results.iter().map(|r| r.narration.as_str()).collect();
        assert_eq!(
            narration,
            vec![
                "Will push item with key 9",
                "Incremented top",
                "Inserted item with key 9",
                IDLE_NARRATION,
            ]
        );
        assert_eq!(stack.snapshot().cursor(CursorName::Top), Some(1));
    }

    #[test]
    fn test_push_when_full() {
        let keys: Vec<i32> = (0..STRUCTURE_CAPACITY as i32).collect();
        let mut stack = stack(&keys);
        let before = stack.snapshot();
        let results = perform(&mut stack, Operation::Insert("3".into()));
        assert_eq!(
            results[0].failure,
            Some(OpError::StructureFull {
                capacity: STRUCTURE_CAPACITY
            })
        );
        assert_eq!(results[0].narration, "CAN'T PUSH: stack is full");
        assert!(stack.snapshot().same_contents(&before));
    }

    #[test]
    fn test_pop_and_peek_when_empty() {
        let mut stack = stack(&[]);
        for op in [Operation::Remove, Operation::Peek] {
            let results = perform(&mut stack, op);
            assert_eq!(results[0].failure, Some(OpError::StructureEmpty));
            assert_eq!(output(&results), None);
        }
    }

    #[test]
    fn test_peek_leaves_stack_alone() {
        let mut stack = stack(&[4, 8]);
        let before = stack.snapshot();
        let results = perform(&mut stack, Operation::Peek);
        assert_eq!(output(&results), Some(8));
        assert_eq!(stack.snapshot(), before);
    }
}
