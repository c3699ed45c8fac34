//! Step player state machine
//!
//! Contains [`StepPlayer`], which owns the current step index, the play flag
//! and the playback speed for one mounted algorithm, together with the
//! auto-advance timer.
//!
//! # States
//!
//! ```text
//!            toggle_play                 toggle_play
//! Paused(i) ------------> Playing(i) -----------------> Paused(i)
//!                          |    ^
//!                 tick()   |    |  (index < last)
//!                          +----+
//! ```
//!
//! Pressing play on the last step restarts from step 0. Reaching the last
//! step while playing stops advancing but leaves the play flag set.

use std::rc::Rc;
use std::time::Duration;

use super::clock::{Clock, SystemClock};
use super::speed::Speed;
use super::timer::{AdvanceTimer, AdvanceToken};
use super::view::PlaybackView;
use crate::catalog::Algorithm;
use crate::step::Step;

/// The three values a player owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub index: usize,
    pub is_playing: bool,
    pub speed: Speed,
}

impl PlayerState {
    fn new(speed: Speed) -> Self {
        PlayerState {
            index: 0,
            is_playing: false,
            speed,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_playing {
            Phase::Playing(self.index)
        } else {
            Phase::Paused(self.index)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Paused(usize),
    Playing(usize),
}

/// Playback controller for one algorithm
#[derive(Debug)]
pub struct StepPlayer<C: Clock = SystemClock> {
    algorithm: Rc<Algorithm>,
    state: PlayerState,
    timer: AdvanceTimer,
    clock: C,
    /// Set on every state change, cleared by [`StepPlayer::take_dirty`]
    dirty: bool,
}

impl StepPlayer<SystemClock> {
    pub fn new(algorithm: Rc<Algorithm>, speed: Speed) -> Self {
        Self::with_clock(algorithm, speed, SystemClock)
    }
}

impl<C: Clock> StepPlayer<C> {
    pub fn with_clock(algorithm: Rc<Algorithm>, speed: Speed, clock: C) -> Self {
        tracing::debug!(
            slug = %algorithm.slug,
            steps = algorithm.total_steps(),
            speed = %speed,
            "player created"
        );
        StepPlayer {
            algorithm,
            state: PlayerState::new(speed),
            timer: AdvanceTimer::new(),
            clock,
            dirty: true,
        }
    }

    // === Queries ===

    pub fn algorithm(&self) -> &Rc<Algorithm> {
        &self.algorithm
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn speed(&self) -> Speed {
        self.state.speed
    }

    pub fn total(&self) -> usize {
        self.algorithm.steps.len()
    }

    pub fn last_index(&self) -> usize {
        self.algorithm.steps.last_index()
    }

    pub fn is_at_start(&self) -> bool {
        self.state.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.state.index == self.last_index()
    }

    pub fn current_step(&self) -> &Step {
        self.algorithm.steps.get(self.state.index)
    }

    pub fn active_pseudocode_line(&self) -> Option<usize> {
        self.current_step().pseudocode_line
    }

    /// Everything the renderers need for the current state
    pub fn view(&self) -> PlaybackView<'_> {
        PlaybackView {
            step: self.current_step(),
            index: self.state.index,
            total: self.total(),
            is_playing: self.state.is_playing,
            speed: self.state.speed,
            pseudocode: &self.algorithm.pseudocode,
            active_line: self.active_pseudocode_line(),
        }
    }

    pub fn pending_advance(&self) -> Option<AdvanceToken> {
        self.timer.pending()
    }

    /// Delay until the pending advance fires, `None` when nothing is pending
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timer.remaining(self.clock.now())
    }

    /// Report and clear the changed-since-last-call flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // === Navigation ===

    /// Move one step forward, clamped at the last step
    pub fn next(&mut self) {
        let index = (self.state.index + 1).min(self.last_index());
        self.apply(PlayerState {
            index,
            ..self.state
        });
    }

    /// Move one step back, clamped at 0, and pause
    pub fn prev(&mut self) {
        self.apply(PlayerState {
            index: self.state.index.saturating_sub(1),
            is_playing: false,
            ..self.state
        });
    }

    /// Back to step 0, paused
    pub fn reset(&mut self) {
        self.apply(PlayerState {
            index: 0,
            is_playing: false,
            ..self.state
        });
    }

    /// Flip the play flag; starting playback on the last step rewinds first
    pub fn toggle_play(&mut self) {
        let start = !self.state.is_playing;
        let index = if start && self.is_at_end() {
            0
        } else {
            self.state.index
        };
        self.apply(PlayerState {
            index,
            is_playing: start,
            ..self.state
        });
        tracing::debug!(playing = start, index, "toggle play");
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.apply(PlayerState {
            speed,
            ..self.state
        });
    }

    pub fn faster(&mut self) {
        self.set_speed(self.state.speed.faster());
    }

    pub fn slower(&mut self) {
        self.set_speed(self.state.speed.slower());
    }

    /// Pause, then move forward (manual step)
    pub fn pause_and_next(&mut self) {
        self.apply(PlayerState {
            index: (self.state.index + 1).min(self.last_index()),
            is_playing: false,
            ..self.state
        });
    }

    /// Pause, then move back (manual step)
    pub fn pause_and_prev(&mut self) {
        self.prev();
    }

    /// Pause and jump to `index`, clamped into range
    pub fn seek(&mut self, index: usize) {
        self.apply(PlayerState {
            index: index.min(self.last_index()),
            is_playing: false,
            ..self.state
        });
    }

    /// Fire the pending advance if it is due
    ///
    /// Returns true when the index moved.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        if self.timer.take_due(now).is_none() {
            return false;
        }
        if !self.state.is_playing || self.is_at_end() {
            return false;
        }
        self.state.index += 1;
        self.dirty = true;
        self.reschedule();
        true
    }

    /// Drop the pending advance; called on teardown
    pub fn cancel_pending(&mut self) {
        self.timer.cancel();
    }

    fn apply(&mut self, next: PlayerState) {
        if next == self.state {
            return;
        }
        self.state = next;
        self.dirty = true;
        self.reschedule();
    }

    /// Cancel the pending advance and, if still playing, schedule a new one
    fn reschedule(&mut self) {
        self.timer.cancel();
        if self.state.is_playing && !self.is_at_end() {
            self.timer
                .schedule(self.clock.now(), self.state.speed.interval());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::player::clock::ManualClock;

    fn player(slug: &str) -> (StepPlayer<ManualClock>, ManualClock) {
        let algorithm = Catalog::builtin().get(slug).expect("builtin slug");
        let clock = ManualClock::new();
        (
            StepPlayer::with_clock(algorithm, Speed::Normal, clock.clone()),
            clock,
        )
    }

    #[test]
    fn new_player_has_correct_defaults() {
        let (player, _) = player("bubble-sort");

        assert_eq!(player.state().phase(), Phase::Paused(0));
        assert_eq!(player.speed(), Speed::Normal);
        assert_eq!(player.total(), 7);
        assert!(player.pending_advance().is_none());
    }

    #[test]
    fn next_clamps_at_last_step() {
        let (mut player, _) = player("bubble-sort");
        for _ in 0..6 {
            player.next();
        }
        assert_eq!(player.index(), 6);

        player.next();
        assert_eq!(player.index(), 6);
    }

    #[test]
    fn prev_clamps_at_zero_and_pauses() {
        let (mut player, _) = player("bubble-sort");
        player.prev();
        assert_eq!(player.index(), 0);

        player.next();
        player.toggle_play();
        player.prev();
        assert_eq!(player.state().phase(), Phase::Paused(0));
    }

    #[test]
    fn next_keeps_playing() {
        let (mut player, _) = player("bubble-sort");
        player.toggle_play();
        player.next();
        assert_eq!(player.state().phase(), Phase::Playing(1));
    }

    #[test]
    fn reset_always_returns_to_paused_start() {
        let (mut player, _) = player("merge-sort");
        player.next();
        player.next();
        player.toggle_play();

        player.reset();

        assert_eq!(player.state().phase(), Phase::Paused(0));
        assert!(player.pending_advance().is_none());
    }

    #[test]
    fn toggle_play_at_end_rewinds() {
        let (mut player, _) = player("bubble-sort");
        player.seek(6);

        player.toggle_play();

        assert_eq!(player.state().phase(), Phase::Playing(0));
    }

    #[test]
    fn pausing_at_end_keeps_index() {
        let (mut player, clock) = player("linear-search");
        player.toggle_play();
        for _ in 0..2 {
            clock.advance(Speed::Normal.interval());
            player.tick();
        }
        assert_eq!(player.state().phase(), Phase::Playing(2));

        player.toggle_play();
        assert_eq!(player.state().phase(), Phase::Paused(2));
    }

    #[test]
    fn tick_advances_once_per_interval() {
        let (mut player, clock) = player("bubble-sort");
        player.toggle_play();

        clock.advance(Duration::from_millis(1199));
        assert!(!player.tick());
        assert_eq!(player.index(), 0);

        clock.advance(Duration::from_millis(1));
        assert!(player.tick());
        assert_eq!(player.index(), 1);

        // no second advance until another full interval
        assert!(!player.tick());
        clock.advance(Duration::from_millis(1199));
        assert!(!player.tick());
        assert_eq!(player.index(), 1);
    }

    #[test]
    fn set_speed_reschedules_from_now() {
        let (mut player, clock) = player("bubble-sort");
        player.toggle_play();
        let before = player.pending_advance().expect("scheduled");

        clock.advance(Duration::from_millis(500));
        player.set_speed(Speed::Double);
        let after = player.pending_advance().expect("rescheduled");

        assert_ne!(before.generation(), after.generation());
        assert_eq!(player.time_until_next(), Some(Duration::from_millis(700)));

        clock.advance(Duration::from_millis(699));
        assert!(!player.tick());
        clock.advance(Duration::from_millis(1));
        assert!(player.tick());
        assert_eq!(player.index(), 1);
    }

    #[test]
    fn set_speed_while_paused_keeps_position() {
        let (mut player, _) = player("bubble-sort");
        player.next();
        player.set_speed(Speed::Half);

        assert_eq!(player.state().phase(), Phase::Paused(1));
        assert!(player.pending_advance().is_none());
    }

    #[test]
    fn no_advance_past_last_step() {
        let (mut player, clock) = player("bubble-sort");
        player.seek(5);
        player.toggle_play();

        clock.advance(Speed::Normal.interval());
        assert!(player.tick());
        assert_eq!(player.index(), 6);
        assert!(player.pending_advance().is_none());

        clock.advance(Speed::Normal.interval());
        assert!(!player.tick());
        assert_eq!(player.state().phase(), Phase::Playing(6));
    }

    #[test]
    fn manual_steps_pause() {
        let (mut player, _) = player("bubble-sort");
        player.toggle_play();
        player.pause_and_next();
        assert_eq!(player.state().phase(), Phase::Paused(1));

        player.toggle_play();
        player.pause_and_prev();
        assert_eq!(player.state().phase(), Phase::Paused(0));
    }

    #[test]
    fn seek_clamps_and_pauses() {
        let (mut player, _) = player("stack-operations");
        player.toggle_play();
        player.seek(40);
        assert_eq!(player.state().phase(), Phase::Paused(3));
    }

    #[test]
    fn dirty_flag_tracks_changes() {
        let (mut player, _) = player("bubble-sort");
        assert!(player.take_dirty());
        assert!(!player.take_dirty());

        player.prev(); // already at 0 and paused
        assert!(!player.take_dirty());

        player.next();
        assert!(player.take_dirty());
    }

    #[test]
    fn view_exposes_step_and_pseudocode_line() {
        let (mut player, _) = player("bubble-sort");
        player.next();

        let view = player.view();
        assert_eq!(view.index, 1);
        assert_eq!(view.total, 7);
        assert_eq!(view.step.title.as_deref(), Some("Compare first pair"));
        assert_eq!(view.active_line, Some(3));
        assert_eq!(view.pseudocode.len(), 5);
    }
}
