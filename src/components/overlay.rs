//! Modal overlay surface.
//!
//! Owns the visibility lifecycle, the dimmed full-screen backdrop, and the
//! entrance/exit animation state. The container drives it from its own
//! `tick` and `render` calls; the overlay never schedules work itself.

use crate::animation::{AnimationPhase, AnimationState, Transform};
use crate::error::{DialogError, DialogResult};
use crate::platform::PlatformLook;
use crate::themes::Theme;
use crate::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};
use std::collections::HashMap;
use std::time::Duration;

/// Overlay configuration.
///
/// Options the overlay does not recognize can be attached via [`extra`]
/// and travel with the overlay unchanged, available to embedders that
/// wrap it.
///
/// [`extra`]: OverlayOptions::with_extra
#[derive(Debug, Clone)]
pub struct OverlayOptions {
    /// Backdrop tint strength in `[0.0, 1.0]`; zero disables the backdrop
    pub backdrop_opacity: f32,
    pub entrance_duration: Duration,
    pub exit_duration: Duration,
    pub animations_enabled: bool,
    /// Unrecognized options, forwarded verbatim
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            backdrop_opacity: 0.3,
            entrance_duration: Duration::from_millis(300),
            exit_duration: Duration::from_millis(200),
            animations_enabled: true,
            extra: HashMap::new(),
        }
    }
}

impl OverlayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backdrop tint strength. Values outside `[0.0, 1.0]` are
    /// rejected rather than clamped.
    pub fn backdrop_opacity(mut self, opacity: f32) -> DialogResult<Self> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(DialogError::InvalidConfig(format!(
                "backdrop opacity {opacity} outside [0.0, 1.0]"
            )));
        }
        self.backdrop_opacity = opacity;
        Ok(self)
    }

    pub fn durations(mut self, entrance: Duration, exit: Duration) -> Self {
        self.entrance_duration = entrance;
        self.exit_duration = exit;
        self
    }

    pub fn animations_enabled(mut self, enabled: bool) -> Self {
        self.animations_enabled = enabled;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Modal overlay surface with backdrop and animation lifecycle
pub struct Overlay {
    options: OverlayOptions,
    animation: AnimationState,
    look: PlatformLook,
}

impl Overlay {
    pub fn new(look: PlatformLook, options: OverlayOptions) -> Self {
        let mut animation = AnimationState::new()
            .with_durations(options.entrance_duration, options.exit_duration);
        animation.set_enabled(options.animations_enabled);
        Self {
            options,
            animation,
            look,
        }
    }

    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    /// Show or hide the overlay. Setting the current value is a no-op.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.animation.begin_open();
        } else {
            self.animation.begin_close();
        }
    }

    /// Whether the overlay occupies the screen (including while animating out)
    pub fn is_shown(&self) -> bool {
        self.animation.is_shown()
    }

    pub fn phase(&self) -> AnimationPhase {
        self.animation.phase()
    }

    /// Advance the animation lifecycle
    pub fn tick(&mut self) {
        self.animation.tick();
    }

    /// Current decoration transform for the look's animation profiles
    pub fn transform(&self) -> Transform {
        self.animation
            .transform(self.look.entrance_animation(), self.look.exit_animation())
    }

    /// Render the dimmed backdrop over the full area.
    ///
    /// Terminal cells cannot blend colors, so opacity maps onto the DIM
    /// modifier: any positive opacity dims, zero skips the backdrop.
    pub fn render_backdrop(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.options.backdrop_opacity <= 0.0 {
            return;
        }
        frame.render_widget(Clear, area);
        let backdrop = Block::default().style(theme.backdrop_style());
        frame.render_widget(backdrop, area);
    }

    /// Whether a press at (`column`, `row`) landed on the backdrop,
    /// i.e. inside the overlay but outside the content panel.
    pub fn hit_backdrop(&self, area: Rect, content: Rect, column: u16, row: u16) -> bool {
        if !self.is_shown() {
            return false;
        }
        let in_area = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        let in_content = column >= content.x
            && column < content.x + content.width
            && row >= content.y
            && row < content.y + content.height;
        in_area && !in_content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn instant_overlay() -> Overlay {
        Overlay::new(
            PlatformLook::Material,
            OverlayOptions::new().durations(Duration::ZERO, Duration::ZERO),
        )
    }

    #[test]
    fn test_visibility_toggle() {
        let mut overlay = instant_overlay();
        assert!(!overlay.is_shown());

        overlay.set_visible(true);
        assert!(overlay.is_shown());
        overlay.tick();
        assert_eq!(overlay.phase(), AnimationPhase::Open);

        // Idempotent re-set.
        overlay.set_visible(true);
        assert_eq!(overlay.phase(), AnimationPhase::Open);

        overlay.set_visible(false);
        overlay.tick();
        assert!(!overlay.is_shown());
    }

    #[test]
    fn test_hit_backdrop_excludes_content() {
        let mut overlay = instant_overlay();
        overlay.set_visible(true);
        let area = Rect::new(0, 0, 80, 24);
        let content = Rect::new(20, 8, 40, 8);

        assert!(overlay.hit_backdrop(area, content, 1, 1));
        assert!(!overlay.hit_backdrop(area, content, 25, 10));
        // Outside the overlay entirely.
        assert!(!overlay.hit_backdrop(area, content, 90, 30));
    }

    #[test]
    fn test_hit_backdrop_requires_shown() {
        let overlay = instant_overlay();
        let area = Rect::new(0, 0, 80, 24);
        assert!(!overlay.hit_backdrop(area, Rect::default(), 1, 1));
    }

    #[test]
    fn test_extra_options_travel_unchanged() {
        let options = OverlayOptions::new()
            .with_extra("swipe_direction", serde_json::json!("down"))
            .with_extra("avoid_keyboard", serde_json::json!(true));
        let overlay = Overlay::new(PlatformLook::Cupertino, options);
        assert_eq!(
            overlay.options().extra.get("swipe_direction"),
            Some(&serde_json::json!("down"))
        );
        assert_eq!(overlay.options().extra.len(), 2);
    }

    #[test]
    fn test_backdrop_opacity_rejects_out_of_range() {
        for invalid in [-0.1, 1.5, f32::NAN] {
            let result = OverlayOptions::new().backdrop_opacity(invalid);
            assert!(matches!(result, Err(DialogError::InvalidConfig(_))));
        }

        let options = OverlayOptions::new().backdrop_opacity(0.5).unwrap();
        assert_eq!(options.backdrop_opacity, 0.5);
    }

    fn backdrop_buffer(opacity: f32) -> Buffer {
        let options = OverlayOptions::new().backdrop_opacity(opacity).unwrap();
        let overlay = Overlay::new(PlatformLook::Material, options);
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| {
                let area = frame.size();
                overlay.render_backdrop(frame, area, &theme);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_zero_opacity_skips_backdrop() {
        let untouched = Buffer::empty(Rect::new(0, 0, 20, 6));
        assert_eq!(backdrop_buffer(0.0), untouched);
        assert_ne!(backdrop_buffer(0.3), untouched);
    }
}
