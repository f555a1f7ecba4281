//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, commands, the timed-step loop and key entry
//! - **[`scene`]**: turns engine snapshots into bars, cells and arrows
//! - **[`panes`]**: stateless render functions for each visible pane (bars,
//!   cells, info, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from a
//! [`Config`] and call [`App::run`] to start the event loop.
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod scene;
pub mod theme;

pub use app::{App, Command};
