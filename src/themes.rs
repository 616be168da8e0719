//! Theme support for dialog rendering
//!
//! Provides semantic colors for the dialog surface, trimmed to what the
//! dialog container actually consumes. Two presets are included, a dark
//! and a light variant.

use ratatui::style::{Color, Modifier, Style};

/// Semantic color theme consumed by the dialog container
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub is_dark: bool,

    // Primary brand color
    pub primary: Color,

    // Background colors
    pub bg_overlay: Color,
    pub surface: Color,

    // Foreground colors
    pub text: Color,
    pub text_muted: Color,

    // Border colors
    pub border: Color,
    pub border_focus: Color,

    // Hairline color used for footer separators (iOS dialog gray)
    pub separator: Color,
}

impl Theme {
    /// Default dark theme
    pub fn dark() -> Self {
        Self {
            name: "dialog_dark".to_string(),
            is_dark: true,
            primary: Color::Rgb(94, 129, 172),
            bg_overlay: Color::Black,
            surface: Color::Rgb(46, 52, 64),
            text: Color::Rgb(216, 222, 233),
            text_muted: Color::Rgb(130, 140, 155),
            border: Color::Rgb(76, 86, 106),
            border_focus: Color::Rgb(136, 192, 208),
            separator: Color::Rgb(169, 173, 174),
        }
    }

    /// Default light theme
    pub fn light() -> Self {
        Self {
            name: "dialog_light".to_string(),
            is_dark: false,
            primary: Color::Rgb(52, 101, 164),
            bg_overlay: Color::Rgb(40, 40, 40),
            surface: Color::Rgb(250, 250, 250),
            text: Color::Rgb(36, 41, 46),
            text_muted: Color::Rgb(110, 118, 129),
            border: Color::Rgb(190, 195, 200),
            border_focus: Color::Rgb(52, 101, 164),
            separator: Color::Rgb(169, 173, 174),
        }
    }

    /// Style for dialog titles
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Style for dialog descriptions
    pub fn description_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the dimmed modal backdrop
    pub fn backdrop_style(&self) -> Style {
        Style::default()
            .bg(self.bg_overlay)
            .fg(self.text_muted)
            .add_modifier(Modifier::DIM)
    }

    /// Style for the panel border, highlighted while the dialog has focus
    pub fn panel_border_style(&self, focused: bool) -> Style {
        let color = if focused { self.border_focus } else { self.border };
        Style::default().fg(color)
    }

    /// Style for the translucent content fill on the Cupertino look
    pub fn surface_style(&self) -> Style {
        Style::default().bg(self.surface).fg(self.text)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_distinct() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert!(dark.is_dark);
        assert!(!light.is_dark);
        assert_ne!(dark.name, light.name);
    }

    #[test]
    fn test_panel_border_highlights_on_focus() {
        let theme = Theme::default();
        assert_eq!(theme.panel_border_style(false).fg, Some(theme.border));
        assert_eq!(theme.panel_border_style(true).fg, Some(theme.border_focus));
        assert_ne!(theme.border, theme.border_focus);
    }

    #[test]
    fn test_title_style_is_bold() {
        let theme = Theme::default();
        assert!(theme.title_style().add_modifier.contains(Modifier::BOLD));
    }
}
