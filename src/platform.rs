//! Platform look resolution
//!
//! Rather than branching on the host platform inline throughout rendering,
//! the dialog resolves a [`PlatformLook`] once at construction and consults
//! it for every platform-conditional decision: entrance animation, backdrop
//! decoration, footer layout, and keyboard avoidance.

use crate::animation::{EntranceAnimation, ExitAnimation};
use serde::{Deserialize, Serialize};

/// Visual family the dialog imitates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformLook {
    /// Apple-style dialog: blur/fill behind the panel, evenly divided
    /// button row with hairline separators, pop entrance animation,
    /// keyboard avoidance active.
    Cupertino,

    /// Material-style dialog: no background decoration, trailing-aligned
    /// button row, zoom entrance animation, keyboard avoidance inert.
    Material,
}

/// Footer button-row layout policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterLayout {
    /// Buttons share the row evenly, divided by hairline separators,
    /// beneath a hairline top border.
    SeparatedRow,

    /// Buttons are packed against the trailing edge with no separators.
    TrailingRow,
}

impl PlatformLook {
    /// Resolve the look from the host OS family.
    pub fn detect() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::Cupertino
        } else {
            Self::Material
        }
    }

    /// Entrance animation profile for this look
    pub fn entrance_animation(self) -> EntranceAnimation {
        match self {
            Self::Cupertino => EntranceAnimation::CupertinoPop,
            Self::Material => EntranceAnimation::ZoomIn,
        }
    }

    /// Exit animation profile (shared across looks)
    pub fn exit_animation(self) -> ExitAnimation {
        ExitAnimation::FadeOut
    }

    /// Whether the content panel gets a background decoration
    /// (custom blur component or default translucent fill)
    pub fn has_backdrop_decoration(self) -> bool {
        matches!(self, Self::Cupertino)
    }

    /// Footer layout policy for this look
    pub fn footer_layout(self) -> FooterLayout {
        match self {
            Self::Cupertino => FooterLayout::SeparatedRow,
            Self::Material => FooterLayout::TrailingRow,
        }
    }

    /// Whether the layout pads itself above a reported input-panel inset
    pub fn avoids_keyboard(self) -> bool {
        matches!(self, Self::Cupertino)
    }
}

impl Default for PlatformLook {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cupertino_capabilities() {
        let look = PlatformLook::Cupertino;
        assert_eq!(look.entrance_animation(), EntranceAnimation::CupertinoPop);
        assert_eq!(look.exit_animation(), ExitAnimation::FadeOut);
        assert!(look.has_backdrop_decoration());
        assert_eq!(look.footer_layout(), FooterLayout::SeparatedRow);
        assert!(look.avoids_keyboard());
    }

    #[test]
    fn test_material_capabilities() {
        let look = PlatformLook::Material;
        assert_eq!(look.entrance_animation(), EntranceAnimation::ZoomIn);
        assert_eq!(look.exit_animation(), ExitAnimation::FadeOut);
        assert!(!look.has_backdrop_decoration());
        assert_eq!(look.footer_layout(), FooterLayout::TrailingRow);
        assert!(!look.avoids_keyboard());
    }

    #[test]
    fn test_detect_is_stable() {
        assert_eq!(PlatformLook::detect(), PlatformLook::detect());
    }
}
