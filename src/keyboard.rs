//! Keyboard-avoidance layout adjustment.
//!
//! When the host reports an input panel occupying rows at the bottom of the
//! screen (an on-screen keyboard, an IME candidate strip, a completion
//! popup), the Cupertino look pads the dialog's layout area so the panel is
//! repositioned above the inset. Other looks leave the area untouched.

use crate::platform::PlatformLook;
use ratatui::layout::Rect;

/// Tracks the bottom inset reported by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardAvoidance {
    inset: u16,
}

impl KeyboardAvoidance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the number of rows occupied at the bottom of the screen.
    pub fn set_inset(&mut self, rows: u16) {
        self.inset = rows;
    }

    /// Clear the inset (input panel dismissed).
    pub fn clear(&mut self) {
        self.inset = 0;
    }

    pub fn inset(&self) -> u16 {
        self.inset
    }

    /// Shrink `area` above the inset when the look avoids the keyboard;
    /// inert otherwise.
    pub fn apply(&self, area: Rect, look: PlatformLook) -> Rect {
        if !look.avoids_keyboard() || self.inset == 0 {
            return area;
        }
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.saturating_sub(self.inset),
        }
    }
}
