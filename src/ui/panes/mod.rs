//! TUI pane rendering modules
//!
//! Every pane is a stateless render function fed by a [`Scene`] or a small
//! `*RenderData` struct.
//!
//! # Pane Modules
//!
//! - [`bars`]: bar chart with cursor arrows for the sorts
//! - [`cells`]: indexed cell list for the priority queue and stack
//! - [`info`]: counters, variant extras, narration and key entry
//! - [`status`]: status bar with keybindings and run state
//!
//! [`Scene`]: crate::ui::scene::Scene

pub mod bars;
pub mod cells;
pub mod info;
pub mod status;

pub use bars::render_bars_pane;
pub use cells::render_cells_pane;
pub use info::{render_info_pane, InfoRenderData};
pub use status::{render_status_bar, StatusRenderData};
