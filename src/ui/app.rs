//! Main TUI application state and event loop

use crate::catalog::Catalog;
use crate::player::{Clock, Speed, StepPlayer, SystemClock};
use crate::ui::library::{LibraryAction, LibraryState};
use crate::ui::panes;
use crate::ui::player_screen::{PlayerScreen, ScreenAction};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::Duration;

/// Longest wait for input when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

/// The mounted screen
pub enum Screen<C: Clock> {
    Library(LibraryState),
    Player(PlayerScreen<C>),
}

/// The main application state
pub struct App<C: Clock + Clone = SystemClock> {
    catalog: Catalog,

    /// Currently mounted screen; keys are routed to it alone
    screen: Screen<C>,

    /// Speed new players start at
    default_speed: Speed,

    /// Whether the code pane starts visible
    show_code: bool,

    clock: C,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Set whenever the next loop iteration must draw
    needs_redraw: bool,
}

impl App<SystemClock> {
    pub fn new(catalog: Catalog, default_speed: Speed, show_code: bool) -> Self {
        Self::with_clock(catalog, default_speed, show_code, SystemClock)
    }
}

impl<C: Clock + Clone> App<C> {
    pub fn with_clock(catalog: Catalog, default_speed: Speed, show_code: bool, clock: C) -> Self {
        let library = LibraryState::new(&catalog);
        App {
            catalog,
            screen: Screen::Library(library),
            default_speed,
            show_code,
            clock,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Mount the player for `slug`; false if the catalog has no such entry
    pub fn open(&mut self, slug: &str) -> bool {
        let Some(algorithm) = self.catalog.get(slug) else {
            tracing::warn!(slug, "unknown algorithm");
            return false;
        };
        self.screen = Screen::Player(PlayerScreen::mount(
            algorithm,
            self.default_speed,
            self.clock.clone(),
            self.show_code,
        ));
        self.needs_redraw = true;
        true
    }

    pub fn screen(&self) -> &Screen<C> {
        &self.screen
    }

    /// The mounted player, if the player screen is showing
    pub fn player(&self) -> Option<&StepPlayer<C>> {
        match &self.screen {
            Screen::Player(screen) => Some(screen.player()),
            Screen::Library(_) => None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.needs_redraw {
                terminal.draw(|f| self.render(f))?;
                self.needs_redraw = false;
            }

            if self.should_quit {
                break;
            }

            // Wake up in time for the next auto-advance
            if event::poll(self.poll_timeout())? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Resize(..) => self.needs_redraw = true,
                    _ => {}
                }
            }

            self.tick();
        }

        Ok(())
    }

    fn poll_timeout(&self) -> Duration {
        match &self.screen {
            Screen::Player(screen) => screen
                .time_until_next()
                .map_or(IDLE_POLL, |left| left.min(IDLE_POLL)),
            Screen::Library(_) => IDLE_POLL,
        }
    }

    /// Fire any due auto-advance
    pub fn tick(&mut self) {
        if let Screen::Player(screen) = &mut self.screen {
            screen.tick();
            if screen.take_dirty() {
                self.needs_redraw = true;
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            Screen::Library(library) => {
                let area = frame.area();
                panes::render_library_pane(frame, area, library);
            }
            Screen::Player(screen) => screen.render(frame),
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.needs_redraw = true;

        let transition = match &mut self.screen {
            Screen::Library(library) => match library.handle_key(key) {
                LibraryAction::Open(algorithm) => Transition::Open(algorithm.slug.clone()),
                LibraryAction::Quit => Transition::Quit,
                LibraryAction::None => Transition::Stay,
            },
            Screen::Player(screen) => match screen.handle_key(key) {
                ScreenAction::Back => {
                    Transition::Library(screen.player().algorithm().slug.clone())
                }
                ScreenAction::Quit => Transition::Quit,
                ScreenAction::None => Transition::Stay,
            },
        };

        match transition {
            Transition::Stay => {}
            Transition::Quit => self.should_quit = true,
            Transition::Open(slug) => {
                self.open(&slug);
            }
            Transition::Library(slug) => {
                // Replacing the screen drops the player and its pending advance
                let mut library = LibraryState::new(&self.catalog);
                library.select_slug(&slug);
                self.screen = Screen::Library(library);
            }
        }
    }
}

/// Screen change requested by a key press
enum Transition {
    Stay,
    Quit,
    Open(String),
    /// Back to the library with this slug selected
    Library(String),
}
