//! Presentation model built from engine snapshots
//!
//! A [`Scene`] is everything the panes draw for one frame. It is built by
//! [`RenderState::build`] from a [`Snapshot`] plus the presentation state the
//! renderer keeps between frames (the slots and cursors the last step
//! touched). Nothing here reaches back into an engine.

use crate::dataset::cursor::CursorName;
use crate::dataset::Rgb;
use crate::engine::{Counters, DrawHint, Slot, StepResult, Touch};
use crate::snapshot::Snapshot;

/// One bar of a sort display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub value: i32,
    pub color: Rgb,
    /// Touched by the last step
    pub changed: bool,
}

/// One cell of a structure display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    pub value: Option<i32>,
    pub color: Option<Rgb>,
    pub changed: bool,
}

/// A cursor arrow under a bar or beside a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrow {
    pub name: CursorName,
    pub index: usize,
    /// Moved by the last step
    pub moved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub title: &'static str,
    /// Filled for sorts
    pub bars: Vec<Bar>,
    /// Filled for the priority queue and stack
    pub cells: Vec<Cell>,
    pub arrows: Vec<Arrow>,
    pub temp: Option<i32>,
    pub counters: Counters,
    pub narration: String,
    pub phase: &'static str,
    pub done: bool,
    /// Variant-specific lines such as the gap or pivot
    pub extras: Vec<(&'static str, String)>,
}

impl Scene {
    /// Arrows pointing at `index`
    pub fn arrows_at(&self, index: usize) -> impl Iterator<Item = &Arrow> {
        self.arrows.iter().filter(move |a| a.index == index)
    }
}

/// Renderer state carried between frames
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    changed: Vec<usize>,
    moved: Vec<CursorName>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything, e.g. after a new session
    pub fn clear(&mut self) {
        self.changed.clear();
        self.moved.clear();
    }

    /// Remember which slots and cursors a step touched
    pub fn record(&mut self, result: &StepResult) {
        self.changed.clear();
        self.moved.clear();
        self.moved.extend(
            result
                .moves
                .iter()
                .filter(|m| m.from != m.to)
                .map(|m| m.name),
        );
        for touch in &result.touched {
            match *touch {
                Touch::Compared(a, b) | Touch::Copied { from: a, to: b } => {
                    self.mark(a);
                    self.mark(b);
                }
                Touch::Swapped(a, b) => {
                    self.changed.push(a);
                    self.changed.push(b);
                }
                Touch::Filled(index) | Touch::Cleared(index) => self.changed.push(index),
            }
        }
    }

    fn mark(&mut self, slot: Slot) {
        if let Slot::Index(index) = slot {
            self.changed.push(index);
        }
    }

    /// Build the scene for `snapshot`; a full redraw shows no highlights
    pub fn build(&self, snapshot: &Snapshot, hint: DrawHint) -> Scene {
        let full_redraw = hint == DrawHint::All;
        let is_changed = |index: usize| !full_redraw && self.changed.contains(&index);

        let mut bars = Vec::new();
        let mut cells = Vec::new();
        if snapshot.variant.is_structure() {
            cells = snapshot
                .slots
                .iter()
                .enumerate()
                .map(|(index, slot)| Cell {
                    index,
                    value: slot.map(|e| e.value),
                    color: slot.map(|e| e.color),
                    changed: is_changed(index),
                })
                .collect();
        } else {
            bars = snapshot
                .slots
                .iter()
                .enumerate()
                .map(|(index, slot)| Bar {
                    value: slot.map(|e| e.value).unwrap_or_default(),
                    color: slot.map(|e| e.color).unwrap_or_default(),
                    changed: is_changed(index),
                })
                .collect();
        }

        let arrows: Vec<Arrow> = snapshot
            .cursors
            .iter()
            .filter_map(|(name, cursor)| {
                cursor.position.map(|index| Arrow {
                    name: *name,
                    index,
                    moved: !full_redraw && self.moved.contains(name),
                })
            })
            .collect();

        let mut extras = Vec::new();
        if let Some(gap) = snapshot.gap {
            extras.push(("Gap", gap.to_string()));
        }
        if let Some(pivot) = snapshot.pivot {
            extras.push(("Pivot", pivot.to_string()));
        }
        if let Some((left, right)) = snapshot.range {
            extras.push(("Range", format!("{}..={}", left, right)));
        }
        if snapshot.variant.is_structure() {
            extras.push(("Items", snapshot.occupied().to_string()));
        }

        Scene {
            title: snapshot.variant.title(),
            bars,
            cells,
            arrows,
            temp: snapshot.temp.map(|e| e.value),
            counters: snapshot.counters,
            narration: snapshot.narration.clone(),
            phase: snapshot.phase,
            done: snapshot.done,
            extras,
        }
    }
}

/// Bar width and gap that fit `count` bars into `width` columns
pub fn bar_layout(count: usize, width: u16) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = count as u16;
    let gap = if count > 50 { 0 } else { 1 };
    let bar_width = ((width + gap) / count).saturating_sub(gap).max(1);
    (bar_width, gap)
}

/// Column of the arrow under bar `index`
pub fn arrow_column(index: usize, bar_width: u16, gap: u16) -> usize {
    index * (bar_width + gap) as usize + (bar_width / 2) as usize
}

/// Text rows drawn under the bars: one row of arrow heads, then the cursor
/// names, stacked onto extra rows where they would overlap.
pub fn arrow_rows(arrows: &[Arrow], bar_width: u16, gap: u16, columns: usize) -> Vec<String> {
    let mut heads = vec![' '; columns];
    let mut labels: Vec<Vec<char>> = Vec::new();

    for arrow in arrows {
        let column = arrow_column(arrow.index, bar_width, gap);
        if column >= columns {
            continue;
        }
        heads[column] = '↑';

        let label: Vec<char> = arrow.name.label().chars().collect();
        let start = column.min(columns.saturating_sub(label.len()));
        let end = (start + label.len()).min(columns);
        let free = |row: &Vec<char>| {
            let lo = start.saturating_sub(1);
            let hi = (end + 1).min(columns);
            row[lo..hi].iter().all(|c| *c == ' ')
        };

        let row = match labels.iter().position(free) {
            Some(row) => row,
            None => {
                labels.push(vec![' '; columns]);
                labels.len() - 1
            }
        };
        for (offset, c) in label.into_iter().take(end - start).enumerate() {
            labels[row][start + offset] = c;
        }
    }

    std::iter::once(heads)
        .chain(labels)
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}
