//! Entrance and exit animation profiles for the dialog overlay.
//!
//! Scheduling is owned by the host application's tick loop; this module only
//! tracks the lifecycle phase and computes interpolated opacity/scale values
//! for the current progress. Visibility itself flips immediately when the
//! dialog is shown or hidden, so no intermediate state is observable
//! synchronously; animation only affects decoration.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Easing curves applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    EaseOutCubic,
}

impl EasingType {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Interpolated decoration values for a single animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Opacity in `[0.0, 1.0]`
    pub opacity: f32,
    /// Scale factor applied to the content panel
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        scale: 1.0,
    };

    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        scale: 1.0,
    };
}

// Cupertino pop profile: opacity reaches full strength at the midpoint
// while the panel settles from 1.2x down to its resting size.
const CUPERTINO_POP_OPACITY: [(f32, f32); 3] = [(0.0, 0.0), (0.5, 1.0), (1.0, 1.0)];
const CUPERTINO_POP_SCALE: [(f32, f32); 2] = [(0.0, 1.2), (1.0, 1.0)];

/// Linear interpolation over an ordered keyframe track.
fn sample_track(track: &[(f32, f32)], t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let mut prev = track[0];
    for &(at, value) in track {
        if t <= at {
            if (at - prev.0).abs() < f32::EPSILON {
                return value;
            }
            let span = (t - prev.0) / (at - prev.0);
            return prev.1 + (value - prev.1) * span;
        }
        prev = (at, value);
    }
    prev.1
}

/// Entrance animation profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntranceAnimation {
    /// Keyframed pop used by the Cupertino look
    CupertinoPop,
    /// Named zoom-in transition used by other looks
    ZoomIn,
    /// Plain opacity fade
    FadeIn,
}

impl EntranceAnimation {
    pub fn sample(self, progress: f32) -> Transform {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::CupertinoPop => Transform {
                opacity: sample_track(&CUPERTINO_POP_OPACITY, t),
                scale: sample_track(&CUPERTINO_POP_SCALE, t),
            },
            Self::ZoomIn => Transform {
                opacity: t,
                scale: 0.5 + 0.5 * EasingType::EaseOutCubic.apply(t),
            },
            Self::FadeIn => Transform {
                opacity: t,
                scale: 1.0,
            },
        }
    }
}

/// Exit animation profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitAnimation {
    /// Plain opacity fade-out, the default on every look
    FadeOut,
    /// Shrinking zoom-out
    ZoomOut,
}

impl ExitAnimation {
    pub fn sample(self, progress: f32) -> Transform {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::FadeOut => Transform {
                opacity: 1.0 - t,
                scale: 1.0,
            },
            Self::ZoomOut => Transform {
                opacity: 1.0 - t,
                scale: 1.0 - 0.5 * t,
            },
        }
    }
}

/// Lifecycle phase of the overlay animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

/// Tracks animation phase and progress for the overlay
#[derive(Debug, Clone)]
pub struct AnimationState {
    phase: AnimationPhase,
    started: Option<Instant>,
    entrance_duration: Duration,
    exit_duration: Duration,
    enabled: bool,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            phase: AnimationPhase::Closed,
            started: None,
            entrance_duration: Duration::from_millis(300),
            exit_duration: Duration::from_millis(200),
            enabled: true,
        }
    }

    pub fn with_durations(mut self, entrance: Duration, exit: Duration) -> Self {
        self.entrance_duration = entrance;
        self.exit_duration = exit;
        self
    }

    /// Disable animations entirely (reduced motion); phases still advance
    /// but progress reports completion immediately.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Whether the overlay occupies the screen in any phase
    pub fn is_shown(&self) -> bool {
        self.phase != AnimationPhase::Closed
    }

    /// Start the opening transition. No-op if already opening or open.
    pub fn begin_open(&mut self) {
        match self.phase {
            AnimationPhase::Closed | AnimationPhase::Closing => {
                self.phase = AnimationPhase::Opening;
                self.started = Some(Instant::now());
            }
            AnimationPhase::Opening | AnimationPhase::Open => {}
        }
    }

    /// Start the closing transition. No-op if already closing or closed.
    pub fn begin_close(&mut self) {
        match self.phase {
            AnimationPhase::Open | AnimationPhase::Opening => {
                self.phase = AnimationPhase::Closing;
                self.started = Some(Instant::now());
            }
            AnimationPhase::Closing | AnimationPhase::Closed => {}
        }
    }

    /// Advance phase transitions based on elapsed time.
    pub fn tick(&mut self) {
        match self.phase {
            AnimationPhase::Opening if self.progress() >= 1.0 => {
                self.phase = AnimationPhase::Open;
                self.started = None;
            }
            AnimationPhase::Closing if self.progress() >= 1.0 => {
                self.phase = AnimationPhase::Closed;
                self.started = None;
            }
            _ => {}
        }
    }

    /// Progress of the current transition in `[0.0, 1.0]`
    pub fn progress(&self) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        let duration = match self.phase {
            AnimationPhase::Opening => self.entrance_duration,
            AnimationPhase::Closing => self.exit_duration,
            AnimationPhase::Open | AnimationPhase::Closed => return 1.0,
        };
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = self
            .started
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }

    /// Current decoration transform given the entrance/exit profiles.
    pub fn transform(&self, entrance: EntranceAnimation, exit: ExitAnimation) -> Transform {
        match self.phase {
            AnimationPhase::Closed => Transform::HIDDEN,
            AnimationPhase::Open => Transform::IDENTITY,
            AnimationPhase::Opening => entrance.sample(self.progress()),
            AnimationPhase::Closing => exit.sample(self.progress()),
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cupertino_pop_keyframes() {
        let start = EntranceAnimation::CupertinoPop.sample(0.0);
        assert_eq!(start.opacity, 0.0);
        assert!((start.scale - 1.2).abs() < 1e-5);

        // Full opacity is reached at the midpoint, scale is still settling.
        let mid = EntranceAnimation::CupertinoPop.sample(0.5);
        assert!((mid.opacity - 1.0).abs() < 1e-5);
        assert!(mid.scale > 1.0 && mid.scale < 1.2);

        let end = EntranceAnimation::CupertinoPop.sample(1.0);
        assert!((end.opacity - 1.0).abs() < 1e-5);
        assert!((end.scale - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_fade_out_profile() {
        assert_eq!(ExitAnimation::FadeOut.sample(0.0).opacity, 1.0);
        assert_eq!(ExitAnimation::FadeOut.sample(1.0).opacity, 0.0);
        assert_eq!(ExitAnimation::FadeOut.sample(0.5).scale, 1.0);
    }

    #[test]
    fn test_phase_transitions() {
        let mut state = AnimationState::new()
            .with_durations(Duration::ZERO, Duration::ZERO);
        assert_eq!(state.phase(), AnimationPhase::Closed);
        assert!(!state.is_shown());

        state.begin_open();
        assert_eq!(state.phase(), AnimationPhase::Opening);
        assert!(state.is_shown());

        state.tick();
        assert_eq!(state.phase(), AnimationPhase::Open);

        // Re-opening an open overlay is a no-op.
        state.begin_open();
        assert_eq!(state.phase(), AnimationPhase::Open);

        state.begin_close();
        assert_eq!(state.phase(), AnimationPhase::Closing);
        state.tick();
        assert_eq!(state.phase(), AnimationPhase::Closed);
        assert!(!state.is_shown());
    }

    #[test]
    fn test_disabled_animations_complete_immediately() {
        let mut state = AnimationState::new();
        state.set_enabled(false);
        state.begin_open();
        assert_eq!(state.progress(), 1.0);
        state.tick();
        assert_eq!(state.phase(), AnimationPhase::Open);
    }

    #[test]
    fn test_easing_bounds() {
        for easing in [EasingType::Linear, EasingType::EaseOutCubic] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5);
            assert!(easing.apply(1.5) <= 1.0);
        }
    }
}
