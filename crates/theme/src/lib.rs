pub mod colors;
pub mod style;

pub use colors::Color;
pub use style::{opacity, ButtonPalette, CaptionStyle, DISABLED_OPACITY, ENABLED_OPACITY};

use timeplay_config::Settings;

/// Compiled theme derived from [`Settings`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_settings`] is infallible: invalid color strings fall
/// back to black.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub buttons: ButtonPalette,
    pub caption: CaptionStyle,
}

impl Theme {
    /// Build a [`Theme`] from the resolved `colorSelector` and `captionSettings` groups.
    pub fn from_settings(settings: &Settings) -> Self {
        let c = &settings.colors;
        let buttons = if c.show_all {
            ButtonPalette {
                play:     parse(&c.play_color),
                pause:    parse(&c.pause_color),
                previous: parse(&c.previous_color),
                next:     parse(&c.next_color),
            }
        } else {
            ButtonPalette::uniform(parse(&c.picked_color))
        };

        let cap = &settings.caption;
        Self {
            buttons,
            caption: CaptionStyle {
                visible:   cap.show,
                color:     parse(&cap.color),
                font_size: cap.font_size as f32,
                align:     cap.align.as_str(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

fn parse(hex: &str) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!("Invalid color '{hex}'; using black.");
        Color::BLACK
    })
}
