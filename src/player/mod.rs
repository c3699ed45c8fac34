//! Step playback
//!
//! The player walks a [`StepSequence`](crate::step::StepSequence) forward and
//! backward, auto-advancing on a timer while playing.
//!
//! # Architecture
//!
//! - `state`: [`StepPlayer`], [`PlayerState`] and the navigation operations
//! - `timer`: single-slot [`AdvanceTimer`]; scheduling cancels the previous token
//! - `clock`: [`Clock`] trait with the wall clock and a manual clock for tests
//! - `speed`: the closed set of playback [`Speed`]s
//! - `view`: [`PlaybackView`], what renderers receive on every change
//!
//! # Usage
//!
//! ```
//! use algoflow::catalog::Catalog;
//! use algoflow::player::{Speed, StepPlayer};
//!
//! let catalog = Catalog::builtin();
//! let bubble = catalog.get("bubble-sort").unwrap();
//! let mut player = StepPlayer::new(bubble, Speed::Normal);
//!
//! player.next();
//! assert_eq!(player.view().position_label(), "Step 2 / 7");
//! ```

pub mod clock;
pub mod speed;
pub mod state;
pub mod timer;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use speed::{ParseSpeedError, Speed};
pub use state::{Phase, PlayerState, StepPlayer};
pub use timer::{AdvanceTimer, AdvanceToken};
pub use view::PlaybackView;
