use timeplay_core::Gesture;
use timeplay_engine::ButtonStates;
use timeplay_theme::{opacity, ButtonPalette, Color};

/// Horizontal distance between two button glyphs.
pub const BUTTON_SPACING: f32 = 30.0;

const PLAY_PATH: &str = "M12 2c5.514 0 10 4.486 10 10s-4.486 10-10 10-10-4.486-10-10 4.486-10 10-10zm0-2c-6.627 0-12 5.373-12 12s5.373 12 12 12 12-5.373 12-12-5.373-12-12-12zm-3 17v-10l9 5.146-9 4.854z";
const PAUSE_PATH: &str = "M12 2c5.514 0 10 4.486 10 10s-4.486 10-10 10-10-4.486-10-10 4.486-10 10-10zm0-2c-6.627 0-12 5.373-12 12s5.373 12 12 12 12-5.373 12-12-5.373-12-12-12zm-1 17h-3v-10h3v10zm5-10h-3v10h3v-10z";
const PREVIOUS_PATH: &str = "M22 12c0 5.514-4.486 10-10 10s-10-4.486-10-10 4.486-10 10-10 10 4.486 10 10zm-22 0c0 6.627 5.373 12 12 12s12-5.373 12-12-5.373-12-12-12-12 5.373-12 12zm13 0l5-4v8l-5-4zm-5 0l5-4v8l-5-4zm-2 4h2v-8h-2v8z";
const NEXT_PATH: &str = "M12 2c5.514 0 10 4.486 10 10s-4.486 10-10 10-10-4.486-10-10 4.486-10 10-10zm0-2c-6.627 0-12 5.373-12 12s5.373 12 12 12 12-5.373 12-12-5.373-12-12-12zm-6 16v-8l5 4-5 4zm5 0v-8l5 4-5 4zm7-8h-2v8h2v-8z";

/// The four transport buttons, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Play,
    Pause,
    Previous,
    Next,
}

impl ButtonKind {
    pub const ALL: [Self; 4] = [Self::Play, Self::Pause, Self::Previous, Self::Next];

    /// Element id on the rendering surface.
    pub fn id(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Previous => "previous",
            Self::Next => "next",
        }
    }

    /// SVG path data of the glyph.
    pub fn path(self) -> &'static str {
        match self {
            Self::Play => PLAY_PATH,
            Self::Pause => PAUSE_PATH,
            Self::Previous => PREVIOUS_PATH,
            Self::Next => NEXT_PATH,
        }
    }

    /// Gesture a click on this button produces.
    pub fn gesture(self) -> Gesture {
        match self {
            Self::Play => Gesture::Play,
            Self::Pause => Gesture::Pause,
            Self::Previous => Gesture::Previous,
            Self::Next => Gesture::Next,
        }
    }

    /// Resolve a clicked element id back to its button.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    fn slot(self) -> usize {
        match self {
            Self::Play => 0,
            Self::Pause => 1,
            Self::Previous => 2,
            Self::Next => 3,
        }
    }
}

/// One rendered button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    pub kind:    ButtonKind,
    /// SVG path data, drawn in a 24×24 box.
    pub path:    &'static str,
    /// Horizontal translation inside the controls box.
    pub x:       f32,
    pub fill:    Color,
    pub opacity: f32,
}

impl ButtonView {
    pub fn enabled(&self) -> bool {
        self.opacity >= timeplay_theme::ENABLED_OPACITY
    }
}

/// Lay out the buttons with their fills and enablement opacity.
pub fn buttons_view(states: ButtonStates, palette: &ButtonPalette) -> [ButtonView; 4] {
    ButtonKind::ALL.map(|kind| {
        let (fill, enabled) = match kind {
            ButtonKind::Play => (palette.play, states.play),
            ButtonKind::Pause => (palette.pause, states.pause),
            ButtonKind::Previous => (palette.previous, states.previous),
            ButtonKind::Next => (palette.next, states.next),
        };
        ButtonView {
            kind,
            path: kind.path(),
            x: BUTTON_SPACING * kind.slot() as f32,
            fill,
            opacity: opacity(enabled),
        }
    })
}
