//! Playback speeds
//!
//! Speeds come from a closed set, so an auto-advance interval is always a
//! positive number of milliseconds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Auto-advance speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Speed {
    #[serde(rename = "0.5x")]
    Half,
    #[default]
    #[serde(rename = "1x")]
    Normal,
    #[serde(rename = "2x")]
    Double,
}

impl Speed {
    /// Slowest to fastest
    pub const ALL: [Speed; 3] = [Speed::Half, Speed::Normal, Speed::Double];

    /// Delay between two auto-advances
    pub fn millis(self) -> u64 {
        match self {
            Speed::Half => 1600,
            Speed::Normal => 1200,
            Speed::Double => 700,
        }
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(self.millis())
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::Double => "2x",
        }
    }

    /// Next faster speed, saturating at 2x
    pub fn faster(self) -> Self {
        match self {
            Speed::Half => Speed::Normal,
            Speed::Normal | Speed::Double => Speed::Double,
        }
    }

    /// Next slower speed, saturating at 0.5x
    pub fn slower(self) -> Self {
        match self {
            Speed::Double => Speed::Normal,
            Speed::Normal | Speed::Half => Speed::Half,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown speed '{0}' (expected 0.5x, 1x or 2x)")]
pub struct ParseSpeedError(String);

impl FromStr for Speed {
    type Err = ParseSpeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Speed::ALL
            .into_iter()
            .find(|speed| speed.label() == s.trim())
            .ok_or_else(|| ParseSpeedError(s.to_string()))
    }
}
