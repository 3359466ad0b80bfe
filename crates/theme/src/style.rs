use crate::colors::Color;

/// Opacity of a button the user can press.
pub const ENABLED_OPACITY: f32 = 1.0;
/// Opacity of a dimmed (no-op) button.
pub const DISABLED_OPACITY: f32 = 0.3;

/// Fill for each transport button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonPalette {
    pub play:     Color,
    pub pause:    Color,
    pub previous: Color,
    pub next:     Color,
}

impl ButtonPalette {
    pub fn uniform(color: Color) -> Self {
        Self {
            play:     color,
            pause:    color,
            previous: color,
            next:     color,
        }
    }
}

/// Visual settings for the caption selector.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    pub visible:   bool,
    pub color:     Color,
    pub font_size: f32,
    pub align:     &'static str,
}

#[inline]
pub fn opacity(enabled: bool) -> f32 {
    if enabled {
        ENABLED_OPACITY
    } else {
        DISABLED_OPACITY
    }
}
