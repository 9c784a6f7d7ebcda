//! System-tray volume state.
//!
//! The service is constructed by the runtime provider and handed to components through context;
//! there is no process-wide instance.

use serde::{Deserialize, Serialize};

pub const DEFAULT_VOLUME: u8 = 70;
pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeState {
    level: u8,
    muted: bool,
}

impl Default for VolumeState {
    fn default() -> Self {
        Self {
            level: DEFAULT_VOLUME,
            muted: false,
        }
    }
}

impl VolumeState {
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Sets the level, clamped to `0..=100`. Raising the level above zero unmutes.
    pub fn set_level(&mut self, level: i32) {
        self.level = level.clamp(0, i32::from(MAX_VOLUME)) as u8;
        if self.level > 0 {
            self.muted = false;
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Gain in `0.0..=1.0` that media elements should use.
    pub fn gain(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            f64::from(self.level) / f64::from(MAX_VOLUME)
        }
    }

    pub fn glyph(&self) -> &'static str {
        match (self.muted, self.level) {
            (true, _) | (false, 0) => "volume-muted",
            (false, 1..=33) => "volume-low",
            _ => "volume-high",
        }
    }
}
