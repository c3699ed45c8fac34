//! Read-only projection of the player for the renderers

use super::speed::Speed;
use crate::step::Step;

/// Snapshot handed to the visualizer, pseudocode pane and status bar
#[derive(Debug, Clone, Copy)]
pub struct PlaybackView<'a> {
    pub step: &'a Step,
    pub index: usize,
    pub total: usize,
    pub is_playing: bool,
    pub speed: Speed,
    pub pseudocode: &'a [String],
    /// 1-based pseudocode line for this step
    pub active_line: Option<usize>,
}

impl PlaybackView<'_> {
    /// "Step 3 / 7"
    pub fn position_label(&self) -> String {
        format!("Step {} / {}", self.index + 1, self.total)
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.total
    }
}
