//! Resumable algorithm step engines
//!
//! Each engine replays a textbook algorithm as a sequence of micro-steps:
//! one call to [`StepEngine::step`] performs at most one comparison, swap or
//! copy and reports what it touched.
//!
//! - [`board`]: container, temp slot, cursors and counters shared by all engines
//! - [`bubble`], [`selection`], [`insertion`], [`shell`]: the simple sorts
//! - [`quick`]: quicksort driven by an explicit range stack
//! - [`partition`]: one partitioning pass around a random pivot value
//! - [`priority_queue`], [`stack`]: structures driven by user operations
//! - [`session`]: a dataset and engine pair created on `New`/`Size`
//!
//! # Phases
//!
//! Every engine keeps a private `Phase` enum naming the transition the next
//! `step()` runs. The phase is the whole control state: there are no hidden
//! loop counters, so stepping can stop and resume at any point.

pub mod board;
pub mod bubble;
pub mod constants;
pub mod errors;
pub mod insertion;
pub mod ops;
pub mod partition;
pub mod priority_queue;
pub mod quick;
pub mod selection;
pub mod session;
pub mod shell;
pub mod stack;

use crate::dataset::cursor::CursorMove;
use crate::dataset::{Container, InitOrder};
use crate::snapshot::Snapshot;
use constants::{LARGE_SIZE, SMALL_PARTITION_SIZE, SMALL_SIZE, STRUCTURE_CAPACITY};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

pub use errors::{ConfigError, EngineError, OpError};
pub use ops::Operation;
pub use session::{DrawHint, Session};

/// The algorithms on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Quick,
    Partition,
    PriorityQueue,
    Stack,
}

impl Variant {
    pub const ALL: [Variant; 8] = [
        Variant::Bubble,
        Variant::Selection,
        Variant::Insertion,
        Variant::Shell,
        Variant::Quick,
        Variant::Partition,
        Variant::PriorityQueue,
        Variant::Stack,
    ];

    /// Command-line name
    pub fn name(self) -> &'static str {
        match self {
            Variant::Bubble => "bubble",
            Variant::Selection => "selection",
            Variant::Insertion => "insertion",
            Variant::Shell => "shell",
            Variant::Quick => "quick",
            Variant::Partition => "partition",
            Variant::PriorityQueue => "priority",
            Variant::Stack => "stack",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Bubble => "Bubble Sort",
            Variant::Selection => "Selection Sort",
            Variant::Insertion => "Insertion Sort",
            Variant::Shell => "Shell Sort",
            Variant::Quick => "Quicksort",
            Variant::Partition => "Partition",
            Variant::PriorityQueue => "Priority Queue",
            Variant::Stack => "Stack",
        }
    }

    pub fn from_name(name: &str) -> Option<Variant> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }

    /// Cycle order used by the UI
    pub fn next(self) -> Variant {
        let index = Variant::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Variant::ALL[(index + 1) % Variant::ALL.len()]
    }

    /// Operation-driven structures rather than sorts
    pub fn is_structure(self) -> bool {
        matches!(self, Variant::PriorityQueue | Variant::Stack)
    }

    pub fn small_size(self) -> usize {
        match self {
            Variant::Quick | Variant::Partition => SMALL_PARTITION_SIZE,
            Variant::PriorityQueue | Variant::Stack => STRUCTURE_CAPACITY,
            _ => SMALL_SIZE,
        }
    }

    pub fn large_size(self) -> usize {
        if self.is_structure() {
            STRUCTURE_CAPACITY
        } else {
            LARGE_SIZE
        }
    }

    /// Accepted sizes, inclusive
    pub fn size_range(self) -> (usize, usize) {
        if self.is_structure() {
            (STRUCTURE_CAPACITY, STRUCTURE_CAPACITY)
        } else {
            (1, LARGE_SIZE)
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparison, swap and copy totals for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
    pub copies: u64,
}

/// A place an element can be read from or compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Index(usize),
    Temp,
    /// The partition pivot value
    Pivot,
    /// The key of the item being inserted
    Key,
}

/// What a step did to the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touch {
    Compared(Slot, Slot),
    Swapped(usize, usize),
    Copied { from: Slot, to: Slot },
    Filled(usize),
    Cleared(usize),
}

/// Everything a renderer needs to redraw after one step
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepResult {
    pub moves: Vec<CursorMove>,
    pub touched: Vec<Touch>,
    pub counters: Counters,
    pub narration: String,
    /// Key returned by remove, pop or peek
    pub output: Option<i32>,
    /// Narrated failure of a structure operation
    pub failure: Option<OpError>,
    pub done: bool,
}

/// Shared contract of all algorithm engines
pub trait StepEngine {
    fn variant(&self) -> Variant;

    /// Run exactly one phase transition
    fn step(&mut self) -> Result<StepResult, EngineError>;

    fn is_done(&self) -> bool;

    /// Nothing left to do until the user acts
    fn is_idle(&self) -> bool {
        self.is_done()
    }

    fn snapshot(&self) -> Snapshot;

    /// Start a user operation (structures only)
    fn begin(&mut self, op: Operation) -> Result<(), EngineError> {
        let _ = op;
        Err(EngineError::Unsupported {
            variant: self.variant(),
        })
    }
}

/// Build a fresh engine for `variant`
pub fn build<R: Rng + ?Sized>(
    variant: Variant,
    size: usize,
    order: InitOrder,
    rng: &mut R,
) -> Result<Box<dyn StepEngine>, ConfigError> {
    let (min, max) = variant.size_range();
    if size < min || size > max {
        return Err(ConfigError::InvalidSize {
            variant,
            size,
            min,
            max,
        });
    }

    let engine: Box<dyn StepEngine> = match variant {
        Variant::Bubble => Box::new(bubble::BubbleSort::new(Container::generate(
            size, order, rng,
        ))),
        Variant::Selection => Box::new(selection::SelectionSort::new(Container::generate(
            size, order, rng,
        ))),
        Variant::Insertion => Box::new(insertion::InsertionSort::new(Container::generate(
            size, order, rng,
        ))),
        Variant::Shell => Box::new(shell::ShellSort::new(Container::generate(
            size, order, rng,
        ))),
        Variant::Quick => Box::new(quick::QuickSort::new(Container::generate(
            size, order, rng,
        ))),
        Variant::Partition => {
            let data = Container::generate(size, order, rng);
            Box::new(partition::Partition::with_random_pivot(data, rng))
        }
        Variant::PriorityQueue => Box::new(priority_queue::PriorityQueue::random(
            StdRng::seed_from_u64(rng.gen()),
        )),
        Variant::Stack => Box::new(stack::Stack::random(StdRng::seed_from_u64(rng.gen()))),
    };
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_name(variant.name()), Some(variant));
        }
        assert_eq!(Variant::from_name("QUICK"), Some(Variant::Quick));
        assert_eq!(Variant::from_name("heap"), None);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut variant = Variant::Bubble;
        for _ in 0..Variant::ALL.len() {
            variant = variant.next();
        }
        assert_eq!(variant, Variant::Bubble);
    }

    #[test]
    fn test_build_rejects_bad_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            build(Variant::Bubble, 0, InitOrder::Random, &mut rng),
            Err(ConfigError::InvalidSize { size: 0, .. })
        ));
        assert!(matches!(
            build(Variant::Shell, 101, InitOrder::Random, &mut rng),
            Err(ConfigError::InvalidSize { size: 101, .. })
        ));
        assert!(matches!(
            build(Variant::Stack, 12, InitOrder::Random, &mut rng),
            Err(ConfigError::InvalidSize { min: 10, max: 10, .. })
        ));
        assert!(build(Variant::PriorityQueue, 10, InitOrder::Random, &mut rng).is_ok());
    }
}
