//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into these layers:
//!
//! - **[`app`]**: application state and the event loop; owns the mounted screen
//! - **[`library`]**: library screen state (selection and filter field)
//! - **[`player_screen`]**: one mounted [`StepPlayer`] with its key routing
//! - **[`panes`]**: stateless render functions for each visible pane
//! - **[`theme`]**: centralized color palette used by all panes
//! - **[`terminal`]**: raw-mode guard that restores the terminal on drop
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Catalog`] and call [`App::run`] to start the event loop.
//!
//! [`StepPlayer`]: crate::player::StepPlayer
//! [`Catalog`]: crate::catalog::Catalog
//! [`App::run`]: app::App::run

pub mod app;
pub mod library;
pub mod panes;
pub mod player_screen;
pub mod terminal;
pub mod theme;

pub use app::App;
pub use terminal::TerminalSession;
