//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod pagination;
mod profile;
mod search_input;
mod styles;
mod table;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use pagination::footer_line;
pub use profile::profile_lines;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, DashboardStyles};
pub use table::{single_line, sort_indicator, truncate_to_width};

use crate::config::keybindings::KeyBindings;
use crate::model::{Comment, KeyAction, User};
use crate::source::{FetchHandle, ProfileSource, RecordSource};
use crate::state::{handle_dashboard_action, handle_search_key, AppState, Screen, SearchKey};
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: DashboardStyles,
    profile_source: ProfileSource,
    /// In-flight comments fetch; `None` once delivered.
    comments_fetch: Option<FetchHandle<Vec<Comment>>>,
    /// Profile fetch for the current visit. Dropped on leaving the profile.
    profile_fetch: Option<FetchHandle<Vec<User>>>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Set up the terminal (raw mode, alternate screen) and start loading
    /// comments.
    pub fn new(app_state: AppState, args: CliArgs) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, app_state, args))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Pending fetches are checked
    /// on every tick; the screen is redrawn only when something changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.poll_fetches() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an existing terminal and start the comments
    /// fetch.
    pub fn with_terminal(terminal: Terminal<B>, app_state: AppState, args: CliArgs) -> Self {
        let styles = DashboardStyles::with_color_config(args.colors);
        let comments_fetch = Some(args.record_source.start());

        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
            profile_source: args.profile_source,
            comments_fetch,
            profile_fetch: None,
        }
    }

    /// Move finished fetch results into the state.
    ///
    /// Returns true if anything arrived.
    fn poll_fetches(&mut self) -> bool {
        let mut changed = false;

        if let Some(handle) = self.comments_fetch.as_mut() {
            if let Some(result) = handle.poll() {
                if let Ok(comments) = &result {
                    info!(count = comments.len(), "Comments loaded");
                }
                self.app_state.set_comments(result);
                self.comments_fetch = None;
                changed = true;
            }
        }

        if let Some(handle) = self.profile_fetch.as_mut() {
            if let Some(result) = handle.poll() {
                self.app_state.set_profile(result);
                changed = true;
            }
        }

        changed
    }

    /// Start or drop the profile fetch to match the current screen.
    ///
    /// Entering the profile starts one fetch per visit. Leaving it drops
    /// the handle so a late result is discarded.
    fn sync_profile_fetch(&mut self) {
        match self.app_state.screen {
            Screen::Profile => {
                if self.profile_fetch.is_none() && self.app_state.profile.is_loading() {
                    debug!(url = %self.profile_source.url, "Starting profile fetch");
                    self.profile_fetch = Some(self.profile_source.start());
                }
            }
            Screen::Dashboard => {
                if self.profile_fetch.take().is_some() {
                    debug!("Profile closed, dropping profile fetch");
                }
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing a search term
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.search_input.is_editing() {
            let search_key = match key.code {
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(SearchKey::Char(ch))
                }
                KeyCode::Backspace => Some(SearchKey::Backspace),
                KeyCode::Left => Some(SearchKey::Left),
                KeyCode::Right => Some(SearchKey::Right),
                KeyCode::Enter => Some(SearchKey::Submit),
                KeyCode::Esc => Some(SearchKey::Cancel),
                _ => None,
            };
            if let Some(search_key) = search_key {
                handle_search_key(&mut self.app_state, search_key);
            }
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        if action == KeyAction::Quit {
            return true;
        }

        handle_dashboard_action(&mut self.app_state, action);
        self.sync_profile_fetch();
        false
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let styles = &self.styles;
        let app_state = &mut self.app_state;
        self.terminal
            .draw(|frame| render_layout(frame, app_state, styles))?;
        Ok(())
    }
}

/// Launch configuration for the TUI.
///
/// Carries the resolved sources and colour choice from `main` into the
/// shell. Domain state lives in `AppState`.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Where comments come from.
    pub record_source: RecordSource,
    /// Where the profile page's users come from.
    pub profile_source: ProfileSource,
    /// Colour output setting.
    pub colors: ColorConfig,
}

impl CliArgs {
    /// Bundle the launch settings.
    pub fn new(record_source: RecordSource, profile_source: ProfileSource, colors: ColorConfig) -> Self {
        Self {
            record_source,
            profile_source,
            colors,
        }
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including the error path.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(app_state: AppState, args: CliArgs) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(app_state, args) {
        Ok(app) => app,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e);
        }
    };

    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
