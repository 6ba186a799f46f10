//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, [`AppState`], event handling,
//! and all UI widgets using Ratatui.

pub mod about;
pub mod contact_form;
pub mod home;
pub mod nav_bar;
pub mod project_browser;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::models::ProjectCatalog;

// Re-export TUI components
pub use contact_form::ContactForm;
pub use nav_bar::NavBar;
pub use project_browser::ProjectBrowser;
pub use status_bar::StatusBar;
pub use theme::{Palette, ThemeMode, ThemeProvider};

/// The four pages of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page with hero and skills
    Home,
    /// Skills breakdown, experience, and education
    About,
    /// Project browser with category filter
    Projects,
    /// Contact details and message form
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::About, Self::Projects, Self::Contact];

    /// Display label for the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Position within [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// Page bound to a number key (`1`..`4`).
    #[must_use]
    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Home),
            '2' => Some(Self::About),
            '3' => Some(Self::Projects),
            '4' => Some(Self::Contact),
            _ => None,
        }
    }

    /// Next page in navigation order, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous page in navigation order, wrapping.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The application state: the one owned object every handler and renderer
/// works against.
pub struct AppState {
    /// Current page
    pub page: Page,
    /// Theme provider (resolved mode + derived palette)
    pub theme: ThemeProvider,
    /// Immutable project catalog
    pub catalog: ProjectCatalog,
    /// Projects page filter/selection state
    pub browser: ProjectBrowser,
    /// Contact form state machine
    pub contact_form: ContactForm,
    /// Whether keystrokes go to the contact form
    pub form_focused: bool,
    /// Application configuration (doubles as the preference store)
    pub config: Config,
    /// Status message shown in the status bar
    pub status_message: String,
    /// Error message shown in the status bar
    pub error_message: Option<String>,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from config and an optional session theme
    /// override.
    ///
    /// The system dark-mode preference is probed exactly once here; the
    /// session does not react to later OS theme changes.
    pub fn new(config: Config, theme_override: Option<ThemeMode>) -> Result<Self> {
        let catalog = ProjectCatalog::load().context("Failed to load project catalog")?;

        let theme = match theme_override {
            Some(mode) => ThemeProvider::with_mode(mode),
            None => ThemeProvider::initialize(&config, theme::system_prefers_dark()),
        };

        Ok(Self {
            page: Page::Home,
            theme,
            catalog,
            browser: ProjectBrowser::new(),
            contact_form: ContactForm::new(),
            form_focused: false,
            config,
            status_message: String::new(),
            error_message: None,
            should_quit: false,
        })
    }

    /// Set status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Switch to a page, resetting transient focus.
    pub fn go_to(&mut self, page: Page) {
        self.page = page;
        self.form_focused = false;
        self.status_message.clear();
        self.error_message = None;
    }

    /// Flip the theme and persist the new preference.
    pub fn toggle_theme(&mut self) {
        match self.theme.toggle(&mut self.config) {
            Ok(mode) => self.set_status(format!("Theme: {}", mode.as_str())),
            Err(e) => self.set_error(format!("Could not save theme preference: {e:#}")),
        }
    }

    /// Drive time-based transitions. Called once per event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        self.contact_form.tick(now);
    }
}

/// Initialize terminal for TUI.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(state, key, Instant::now());
                }
                // Terminal resized, will re-render on next loop
                _ => {}
            }
        }

        // Drive the simulated contact-form delivery
        state.tick(Instant::now());

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Route a key event to the right handler.
///
/// Each event handler runs to completion before the next event is read, so
/// state mutations never interleave mid-update.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent, now: Instant) {
    // Ctrl+C quits from anywhere, including the form
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // The focused contact form owns the keyboard except for Esc
    if state.page == Page::Contact && state.form_focused {
        if key.code == KeyCode::Esc {
            state.form_focused = false;
        } else {
            state.contact_form.handle_input(key, now);
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
        }
        KeyCode::Char('t') => {
            state.toggle_theme();
        }
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(page) = Page::from_digit(c) {
                state.go_to(page);
            }
        }
        KeyCode::Tab => {
            state.go_to(state.page.next());
        }
        KeyCode::BackTab => {
            state.go_to(state.page.previous());
        }
        _ => match state.page {
            Page::Projects => {
                state.browser.handle_input(key, &state.catalog);
            }
            Page::Contact => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('e' | 'i')) {
                    state.form_focused = true;
                }
            }
            Page::Home | Page::About => {}
        },
    }
}

/// Render the UI from current state.
fn render(f: &mut Frame, state: &AppState) {
    let palette = state.theme.palette();

    // Fill entire screen with theme background color first so the palette
    // applies regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(palette.background.default));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation bar
            Constraint::Min(10),   // Page content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    NavBar::render(f, chunks[0], state.page, palette);

    match state.page {
        Page::Home => home::render(f, chunks[1], palette, &state.config.profile),
        Page::About => about::render(f, chunks[1], palette),
        Page::Projects => state.browser.render(f, chunks[1], palette, &state.catalog),
        Page::Contact => state.contact_form.render(
            f,
            chunks[1],
            palette,
            &state.config.profile,
            state.form_focused,
        ),
    }

    StatusBar::render(f, chunks[2], state);
}
