//! One dataset and engine pair, plus the parameters it was built from.
//!
//! A session is created on `New`/`Size` and replaced wholesale afterwards;
//! nothing in it is ever partially reset.

use super::{build, ConfigError, EngineError, Operation, StepEngine, StepResult, Variant};
use crate::dataset::InitOrder;
use crate::snapshot::Snapshot;
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Whether the next redraw repaints everything or only what changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawHint {
    All,
    #[default]
    Delta,
}

pub struct Session {
    engine: Box<dyn StepEngine>,
    variant: Variant,
    size: usize,
    order: InitOrder,
    draw_hint: DrawHint,
    steps: u64,
}

impl Session {
    /// Build a fresh dataset of `size` elements and the engine that runs on it
    pub fn reset(
        variant: Variant,
        size: usize,
        order: InitOrder,
        rng: &mut StdRng,
    ) -> Result<Session, ConfigError> {
        let engine = build(variant, size, order, rng)?;
        info!(%variant, size, order = order.label(), "session reset");
        Ok(Session {
            engine,
            variant,
            size,
            order,
            draw_hint: DrawHint::All,
            steps: 0,
        })
    }

    /// Run one phase transition of the engine
    pub fn step(&mut self) -> Result<StepResult, EngineError> {
        let result = self.engine.step()?;
        self.steps += 1;
        debug!(
            variant = %self.variant,
            step = self.steps,
            comparisons = result.counters.comparisons,
            swaps = result.counters.swaps,
            copies = result.counters.copies,
            narration = %result.narration,
            "step"
        );
        Ok(result)
    }

    pub fn begin(&mut self, op: Operation) -> Result<(), EngineError> {
        self.engine.begin(op)
    }

    /// Step until the engine is idle or `limit` steps have run, handing each
    /// result to `on_step`.
    ///
    /// Returns the number of steps taken.
    pub fn run_to_end(
        &mut self,
        limit: usize,
        mut on_step: impl FnMut(StepResult),
    ) -> Result<usize, EngineError> {
        let mut taken = 0;
        while !self.engine.is_idle() && taken < limit {
            on_step(self.step()?);
            taken += 1;
        }
        Ok(taken)
    }

    pub fn is_done(&self) -> bool {
        self.engine.is_done()
    }

    pub fn is_idle(&self) -> bool {
        self.engine.is_idle()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Get the variant
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Get the element count the session was built with
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the initial ordering
    pub fn order(&self) -> InitOrder {
        self.order
    }

    /// Get the number of successful steps so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn draw_hint(&self) -> DrawHint {
        self.draw_hint
    }

    /// Only affects rendering; engine state is untouched
    pub fn set_draw_hint(&mut self, hint: DrawHint) {
        self.draw_hint = hint;
    }
}
