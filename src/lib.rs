//! # Introduction
//!
//! AlgoFlow steps through precomputed walkthroughs of classic sorting,
//! searching and data-structure algorithms in the terminal. Each algorithm is
//! a fixed sequence of steps (array snapshots, pointer positions, highlighted
//! cells and a pseudocode line reference); the player moves through them by
//! hand or auto-plays at a chosen speed.
//!
//! ## Pipeline
//!
//! ```text
//! Catalog → Algorithm → StepSequence → StepPlayer → PlaybackView → TUI
//! ```
//!
//! 1. [`catalog`]: the built-in library, or a validated TOML dataset.
//! 2. [`step`]: [`step::Step`], the tagged [`step::VisualState`] and the
//!    non-empty [`step::StepSequence`].
//! 3. [`player`]: [`player::StepPlayer`], the navigation state machine with
//!    its single-slot auto-advance timer.
//! 4. [`input`]: key bindings and the text field used for goto/filter input.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! [`config`] and [`logging`] hold the ambient setup used by the binary.

pub mod catalog;
pub mod config;
pub mod input;
pub mod logging;
pub mod player;
pub mod step;
pub mod ui;
