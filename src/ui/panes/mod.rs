//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`header`]: Algorithm name, category, difficulty, tags and complexity
//! - [`visual`]: The current step: title, description and the visual state
//! - [`pseudocode`]: Pseudocode listing with the active line marked
//! - [`code`]: Code samples with language tabs and syntax highlighting
//! - [`status`]: Status bar with keybindings and playback state
//! - [`library`]: Grouped algorithm list with a detail panel
//! - [`help`]: Key binding overlay
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function that takes the
//! frame, its area and read-only data. Panes hold no state; anything that
//! changes between frames lives in the screen that calls them.

pub mod code;
pub mod header;
pub mod help;
pub mod library;
pub mod pseudocode;
pub mod status;
pub mod visual;

// Re-export render functions for convenience
pub use code::render_code_pane;
pub use header::{render_header_pane, HEADER_HEIGHT};
pub use help::render_help_overlay;
pub use library::render_library_pane;
pub use pseudocode::render_pseudocode_pane;
pub use status::render_status_bar;
pub use visual::render_visual_pane;
