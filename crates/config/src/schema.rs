use serde::{Deserialize, Serialize};

/// Bounds of `transitionSettings.timeInterval`, in milliseconds.
pub const TIME_INTERVAL_RANGE: (u32, u32) = (1, 60_000);
/// Bounds of `captionSettings.fontSize`, in pixels.
pub const FONT_SIZE_RANGE: (u32, u32) = (8, 22);

/// Fully-populated widget settings.  Every leaf has a default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub transition: TransitionSettings,
    pub colors:     ColorSelector,
    pub caption:    CaptionSettings,
}

/// `transitionSettings` group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Start playing as soon as data arrives.
    pub auto_start: bool,
    /// Restart from the first category after the last one.
    pub looping: bool,
    /// Delay between two steps (milliseconds, 1 – 60000).
    pub time_interval_ms: u32,
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            auto_start:       false,
            looping:          false,
            time_interval_ms: 2_000,
        }
    }
}

/// `colorSelector` group.  Colors are CSS hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSelector {
    /// Uniform fill for every button when `show_all` is off.
    pub picked_color: String,
    /// Use one semantic color per button.
    pub show_all: bool,
    pub play_color:     String,
    pub pause_color:    String,
    pub stop_color:     String,
    pub previous_color: String,
    pub next_color:     String,
}

impl Default for ColorSelector {
    fn default() -> Self {
        Self {
            picked_color:   "#000000".to_string(),
            show_all:       false,
            play_color:     "#f2c811".to_string(),
            pause_color:    "#1769b8".to_string(),
            stop_color:     "#f42550".to_string(),
            previous_color: "#12b159".to_string(),
            next_color:     "#a81de8".to_string(),
        }
    }
}

/// `captionSettings` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionSettings {
    pub show:  bool,
    pub color: String,
    /// Font size in pixels (8 – 22).
    pub font_size: u32,
    pub align: Align,
}

impl Default for CaptionSettings {
    fn default() -> Self {
        Self {
            show:      true,
            color:     "#000000".to_string(),
            font_size: 16,
            align:     Align::Left,
        }
    }
}

/// Caption text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Host color shape: `{ "solid": { "color": "#rrggbb" } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub solid: SolidFill,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidFill {
    pub color: String,
}

impl Fill {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            solid: SolidFill { color: color.into() },
        }
    }
}
