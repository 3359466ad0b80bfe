//! Render model of the controls: button glyphs, caption selector and the
//! view box that fits them.

pub mod buttons;
pub mod caption;

pub use buttons::{buttons_view, ButtonKind, ButtonView};
pub use caption::{
    caption_options, caption_view, view_box_width, ApproxMeasure, CaptionOption, CaptionView,
    TextMeasure, CONTROLS_HEIGHT,
};

/// Everything the drawing surface needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub buttons: [ButtonView; 4],
    /// `None` when the caption is switched off.
    pub caption: Option<CaptionView>,
    /// `(width, height)` of the controls view box.
    pub view_box: (f32, f32),
}

impl ControlsView {
    pub fn new(buttons: [ButtonView; 4], caption: Option<CaptionView>) -> Self {
        let width = view_box_width(caption.as_ref());
        Self {
            buttons,
            caption,
            view_box: (width, CONTROLS_HEIGHT),
        }
    }

    pub fn button(&self, kind: ButtonKind) -> &ButtonView {
        // `buttons` is laid out in `ButtonKind::ALL` order
        &self.buttons[ButtonKind::ALL.iter().position(|k| *k == kind).unwrap_or(0)]
    }
}
