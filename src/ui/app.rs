//! Main TUI application state and logic

use crate::config::Config;
use crate::dataset::InitOrder;
use crate::engine::constants::{LARGE_TICK, MAX_KEY, SMALL_TICK};
use crate::engine::{
    ConfigError, DrawHint, EngineError, Operation, Session, StepResult, Variant,
};
use crate::ui::scene::{RenderState, Scene};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Upper bound on steps taken by a single `Finish`
const FINISH_STEP_LIMIT: usize = 1_000_000;

/// Longest text the key entry line accepts
const INPUT_LIMIT: usize = 6;

/// A user command, independent of the key that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Size,
    Draw,
    /// Toggle timed stepping
    Run,
    Step,
    /// Step until the engine goes idle
    Finish,
    Insert(String),
    Remove,
    Peek,
    NextAlgorithm,
    Quit,
}

/// The main application state
pub struct App {
    /// The running dataset and engine
    pub session: Session,

    /// Source of every new dataset
    rng: StdRng,

    /// Presentation state carried between frames
    pub render_state: RenderState,

    /// Whether timed stepping is active
    pub is_running: bool,

    /// Last time a timed step was taken
    pub last_tick: Instant,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub is_error: bool,

    /// Key being typed for insert/push, if the entry line is open
    pub input: Option<String>,

    /// Last key returned by remove, pop or peek
    pub last_output: Option<i32>,

    /// Whether the large preset is selected
    pub large: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the app for `config`, seeding the RNG when a seed is given
    pub fn new(config: &Config) -> Result<App, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        App::with_rng(config, rng)
    }

    pub fn with_rng(config: &Config, mut rng: StdRng) -> Result<App, ConfigError> {
        let session = Session::reset(config.variant, config.size(), config.order, &mut rng)?;
        Ok(App {
            session,
            rng,
            render_state: RenderState::new(),
            is_running: false,
            last_tick: Instant::now(),
            status_message: String::from("Ready!"),
            is_error: false,
            input: None,
            last_output: None,
            large: config.large,
            should_quit: false,
        })
    }

    /// Time between steps while running
    pub fn tick_interval(&self) -> Duration {
        if self.large && !self.session.variant().is_structure() {
            LARGE_TICK
        } else {
            SMALL_TICK
        }
    }

    /// Advance a running session if its interval has elapsed.
    ///
    /// Returns whether a step was taken.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_running {
            return false;
        }
        if now.saturating_duration_since(self.last_tick) < self.tick_interval() {
            return false;
        }
        self.last_tick = now;

        if self.session.is_idle() {
            self.is_running = false;
            return false;
        }
        self.step_once()
    }

    /// Apply one command
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::New => {
                if self.session.variant().is_structure() {
                    self.start_operation(Operation::New);
                } else {
                    let order = self.session.order().toggled();
                    self.reset(self.session.variant(), self.large, order);
                }
            }
            Command::Size => {
                let variant = self.session.variant();
                if variant.is_structure() {
                    self.is_running = false;
                    self.report(format!(
                        "{} size is fixed at {}",
                        variant.title(),
                        variant.small_size()
                    ));
                } else {
                    self.reset(variant, !self.large, self.session.order());
                }
            }
            Command::Draw => {
                self.session.set_draw_hint(DrawHint::All);
                self.set_status("Redrawn");
            }
            Command::Run => {
                if self.is_running {
                    self.is_running = false;
                    self.set_status("Paused");
                } else if self.session.is_idle() {
                    self.set_status(if self.session.is_done() {
                        "Sort is complete"
                    } else {
                        "Nothing to run"
                    });
                } else {
                    self.is_running = true;
                    self.last_tick = Instant::now()
                        .checked_sub(self.tick_interval())
                        .unwrap_or_else(Instant::now);
                    self.set_status("Running...");
                }
            }
            Command::Step => {
                self.is_running = false;
                self.step_once();
            }
            Command::Finish => {
                self.is_running = false;
                let mut results = Vec::new();
                let outcome = self
                    .session
                    .run_to_end(FINISH_STEP_LIMIT, |result| results.push(result));
                for result in &results {
                    self.apply(result);
                }
                if let Err(e) = outcome {
                    self.report(e.to_string());
                }
                self.session.set_draw_hint(DrawHint::All);
            }
            Command::Insert(text) => self.start_operation(Operation::Insert(text)),
            Command::Remove => self.start_operation(Operation::Remove),
            Command::Peek => self.start_operation(Operation::Peek),
            Command::NextAlgorithm => {
                let next = self.session.variant().next();
                self.reset(next, self.large, InitOrder::Random);
            }
            Command::Quit => self.should_quit = true,
        }
    }

    /// Scene for the next frame; a full redraw is consumed by it
    pub fn scene(&mut self) -> Scene {
        let scene = self
            .render_state
            .build(&self.session.snapshot(), self.session.draw_hint());
        self.session.set_draw_hint(DrawHint::Delta);
        scene
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.is_error = false;
    }

    fn report(&mut self, message: String) {
        warn!(variant = %self.session.variant(), "{}", message);
        self.status_message = message;
        self.is_error = true;
    }

    fn reset(&mut self, variant: Variant, large: bool, order: InitOrder) {
        let size = if large {
            variant.large_size()
        } else {
            variant.small_size()
        };
        match Session::reset(variant, size, order, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.large = large;
                self.is_running = false;
                self.last_output = None;
                self.input = None;
                self.render_state.clear();
                self.set_status(format!("New {} of {} ({})", variant.title(), size, order.label()));
            }
            Err(e) => self.report(e.to_string()),
        }
    }

    /// Begin a structure operation and run its first step, or keep stepping
    /// the one already underway
    fn start_operation(&mut self, op: Operation) {
        self.is_running = false;
        if self.session.variant().is_structure() && !self.session.is_idle() {
            self.step_once();
            return;
        }
        info!(variant = %self.session.variant(), op = op.name(), "operation requested");
        match self.session.begin(op) {
            Ok(()) => {
                self.last_output = None;
                self.step_once();
            }
            Err(e) => self.report(e.to_string()),
        }
    }

    fn step_once(&mut self) -> bool {
        match self.session.step() {
            Ok(result) => {
                self.apply(&result);
                true
            }
            Err(EngineError::Finished) => {
                self.is_running = false;
                self.set_status("Sort is complete");
                false
            }
            Err(e) => {
                self.is_running = false;
                self.report(e.to_string());
                false
            }
        }
    }

    fn apply(&mut self, result: &StepResult) {
        self.render_state.record(result);
        if let Some(output) = result.output {
            self.last_output = Some(output);
        }
        match &result.failure {
            Some(failure) => self.report(format!("{}: {}", result.narration, failure)),
            None => self.set_status(result.narration.clone()),
        }
        if result.done || self.session.is_idle() {
            self.is_running = false;
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.session.draw_hint() == DrawHint::All {
                terminal.clear()?;
            }
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Use poll with timeout to allow timed stepping to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            self.tick(Instant::now());
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let scene = self.scene();
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
            .split(main_chunks[0]);

        let is_structure = self.session.variant().is_structure();
        if is_structure {
            super::panes::render_cells_pane(frame, columns[0], &scene, self.input.is_none());
        } else {
            super::panes::render_bars_pane(frame, columns[0], &scene, true);
        }

        super::panes::render_info_pane(
            frame,
            columns[1],
            super::panes::InfoRenderData {
                scene: &scene,
                output: self.last_output,
                input: self.input.as_deref(),
                order: self.session.order().label(),
                size: self.session.size(),
            },
            self.input.is_some(),
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                steps: self.session.steps(),
                is_running: self.is_running,
                is_done: self.session.is_done(),
                is_error: self.is_error,
                is_input: self.input.is_some(),
                is_structure,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(input) = self.input.as_mut() {
            match key.code {
                KeyCode::Char(c) if !c.is_control() && input.chars().count() < INPUT_LIMIT => {
                    input.push(c)
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Enter => {
                    let text = input.clone();
                    self.input = None;
                    self.handle_command(Command::Insert(text));
                }
                KeyCode::Esc => {
                    self.input = None;
                    self.set_status("Insert cancelled");
                }
                _ => {}
            }
            return;
        }

        let command = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
            KeyCode::Char('n') => Command::New,
            KeyCode::Char('z') => Command::Size,
            KeyCode::Char('d') => Command::Draw,
            KeyCode::Char('r') | KeyCode::Char(' ') => Command::Run,
            KeyCode::Char('s') | KeyCode::Right => Command::Step,
            KeyCode::Enter => Command::Finish,
            KeyCode::Char('v') => Command::NextAlgorithm,
            KeyCode::Char('x') => Command::Remove,
            KeyCode::Char('p') => Command::Peek,
            KeyCode::Char('i') => {
                if !self.session.variant().is_structure() {
                    Command::Insert(String::new())
                } else if self.session.is_idle() {
                    self.input = Some(String::new());
                    self.set_status(format!(
                        "Type a key from 0 to {}, then press Enter",
                        MAX_KEY
                    ));
                    return;
                } else {
                    Command::Step
                }
            }
            _ => return,
        };
        self.handle_command(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_key(app: &mut App, text: &str) {
        press(app, KeyCode::Char('i'));
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn stack_app() -> App {
        let config = Config {
            variant: Variant::Stack,
            ..Config::default()
        };
        App::with_rng(&config, StdRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn test_typed_text_reaches_validation() {
        let mut app = stack_app();
        let before = app.session.snapshot();
        type_key(&mut app, "abc");
        assert!(app.input.is_none());
        assert!(app.is_error);
        assert!(app.status_message.starts_with("CAN'T PUSH"));

        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_idle());
        assert!(app.session.snapshot().same_contents(&before));
    }

    #[test]
    fn test_typed_key_is_pushed() {
        let mut app = stack_app();
        type_key(&mut app, "42");
        press(&mut app, KeyCode::Enter);
        assert!(!app.is_error);
        assert_eq!(app.session.snapshot().values().last(), Some(&42));
    }

    #[test]
    fn test_entry_line_is_bounded() {
        let mut app = stack_app();
        press(&mut app, KeyCode::Char('i'));
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('9'));
        }
        assert_eq!(app.input.as_deref(), Some("999999"));
        press(&mut app, KeyCode::Esc);
        assert!(app.input.is_none());
    }
}
