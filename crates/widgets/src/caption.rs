use std::collections::HashSet;
use timeplay_core::Category;
use timeplay_theme::CaptionStyle;

/// Fixed width of the four buttons when no caption is shown.
pub const CONTROLS_WIDTH: f32 = 145.0;
/// Width reserved before the caption text when it is shown.
pub const CAPTION_OFFSET: f32 = 155.0;
/// Height of the controls view box.
pub const CONTROLS_HEIGHT: f32 = 24.0;

/// Measures rendered text.  Implemented by the host's drawing surface.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Fallback measurement: every glyph is 0.6 em wide.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApproxMeasure;

impl TextMeasure for ApproxMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * 0.6
    }
}

/// One entry of the caption selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionOption {
    /// Category position this option jumps to.
    pub position: usize,
    pub label:    String,
    pub selected: bool,
}

/// Rendered caption selector.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionView {
    pub options: Vec<CaptionOption>,
    pub style:   CaptionStyle,
    /// Width of the widest option label.
    pub text_width: f32,
}

impl CaptionView {
    pub fn selected(&self) -> Option<&CaptionOption> {
        self.options.iter().find(|o| o.selected)
    }
}

/// Distinct category labels in descending order.
///
/// Each option carries the first position holding its label; the option whose
/// label matches the category at `current` is marked selected.
pub fn caption_options(categories: &[Category], current: Option<usize>) -> Vec<CaptionOption> {
    let current_label = current
        .and_then(|i| categories.get(i))
        .map(|c| c.display_value.as_str());

    let mut seen = HashSet::new();
    let mut options: Vec<CaptionOption> = categories
        .iter()
        .filter(|c| seen.insert(c.display_value.as_str()))
        .map(|c| CaptionOption {
            position: c.position,
            label:    c.display_value.clone(),
            selected: Some(c.display_value.as_str()) == current_label,
        })
        .collect();

    options.sort_by(|a, b| b.label.cmp(&a.label));
    options
}

/// Build the caption, or `None` when captions are switched off.
pub fn caption_view(
    categories: &[Category],
    current: Option<usize>,
    style: &CaptionStyle,
    measure: &dyn TextMeasure,
) -> Option<CaptionView> {
    if !style.visible {
        return None;
    }
    let options = caption_options(categories, current);
    let text_width = options
        .iter()
        .map(|o| measure.text_width(&o.label, style.font_size))
        .fold(0.0_f32, f32::max);

    Some(CaptionView {
        options,
        style: style.clone(),
        text_width,
    })
}

/// Width of the controls view box so the caption fits.
pub fn view_box_width(caption: Option<&CaptionView>) -> f32 {
    match caption {
        Some(c) => CAPTION_OFFSET + c.text_width,
        None => CONTROLS_WIDTH,
    }
}
