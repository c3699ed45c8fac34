//! Keyboard handling
//!
//! - [`keys`]: maps key presses to [`PlayerCommand`]s while the player screen
//!   has focus
//! - [`field`]: single-line [`TextField`] used for the library filter and the
//!   goto-step prompt
//!
//! While a text field has focus, keys go to the field and never reach the
//! player.

pub mod field;
pub mod keys;

pub use field::{FieldEvent, TextField};
pub use keys::{command_for_key, PlayerCommand};
