// Constants for the step engines

use std::ops::Range;
use std::time::Duration;

/// Random bar heights lie in `[0, MAX_BAR_HEIGHT)`
pub const MAX_BAR_HEIGHT: i32 = 200;

/// Small preset for bubble, selection, insertion and shell sort
pub const SMALL_SIZE: usize = 10;

/// Small preset for quicksort and partition
pub const SMALL_PARTITION_SIZE: usize = 12;

/// Large preset, also the largest bar count accepted
pub const LARGE_SIZE: usize = 100;

/// Cell count for the priority queue and stack demos
pub const STRUCTURE_CAPACITY: usize = 10;

/// Items loaded into a fresh queue or stack
pub const INITIAL_STRUCTURE_ITEMS: usize = 4;

/// Keys accepted by insert and push lie in `[0, MAX_KEY]`
pub const MAX_KEY: i32 = 999;

/// The partition demo draws its pivot value from this range
pub const PIVOT_RANGE: Range<i32> = 70..130;

/// Starting capacity of the quicksort range stack
pub const QUICK_STACK_CAPACITY: usize = 50;

/// Auto-run interval for small datasets
pub const SMALL_TICK: Duration = Duration::from_millis(250);

/// Auto-run interval for large datasets
pub const LARGE_TICK: Duration = Duration::from_millis(75);
