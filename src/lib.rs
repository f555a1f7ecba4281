//! # Introduction
//!
//! algostep replays classic classroom algorithms one micro-step at a time.
//! Every comparison, swap and copy is its own step, so the algorithm can be
//! paused anywhere and the moving index pointers watched in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Config → Session (Container + StepEngine) → StepResult / Snapshot → Scene → TUI
//! ```
//!
//! 1. [`config`]: hand-parsed command line.
//! 2. [`dataset`]: colored elements, the fixed-capacity [`dataset::Container`]
//!    and the named cursors that point into it.
//! 3. [`engine`]: one resumable state machine per algorithm behind the
//!    [`engine::StepEngine`] trait, and the [`engine::Session`] that owns it.
//! 4. [`snapshot`]: immutable view of an engine between steps.
//! 5. [`ui`]: scene building, panes and the event loop; not part of the
//!    stable library API.
//!
//! ## Algorithms
//!
//! Sorts: bubble, selection, insertion, shell and quicksort (explicit range
//! stack). Also a single partition pass around a random pivot value, and two
//! operation-driven structures: an ordered-array priority queue and a stack.

pub mod config;
pub mod dataset;
pub mod engine;
pub mod snapshot;
pub mod ui;
