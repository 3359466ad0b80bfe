use timeplay_core::SelectionId;
use timeplay_filter::{BasicFilter, FilterAction};
use timeplay_widgets::{ApproxMeasure, ControlsView, TextMeasure};
use tracing::{debug, info};

/// Everything the widget asks of its embedding host.
pub trait Host {
    /// Highlight one category across the report.
    fn select(&mut self, id: &SelectionId);

    fn clear_selection(&mut self);

    /// Push a JSON filter into the `object.property` slot.
    fn apply_json_filter(
        &mut self,
        filter: &BasicFilter,
        object: &str,
        property: &str,
        action: FilterAction,
    );

    /// Draw a new frame of the controls.
    fn render(&mut self, _view: &ControlsView) {}

    /// Text measurement of the drawing surface.
    fn measure(&self) -> &dyn TextMeasure {
        &ApproxMeasure
    }
}

/// Host that only reports outbound calls through `tracing`.
#[derive(Debug, Default)]
pub struct TracingHost;

impl Host for TracingHost {
    fn select(&mut self, id: &SelectionId) {
        info!(%id, "select");
    }

    fn clear_selection(&mut self) {
        info!("clear selection");
    }

    fn apply_json_filter(
        &mut self,
        filter: &BasicFilter,
        object: &str,
        property: &str,
        action: FilterAction,
    ) {
        let json = serde_json::to_string(filter).unwrap_or_default();
        info!(slot = %format_args!("{object}.{property}"), ?action, %json, "apply filter");
    }

    fn render(&mut self, view: &ControlsView) {
        let caption = view
            .caption
            .as_ref()
            .and_then(|c| c.selected())
            .map(|o| o.label.as_str())
            .unwrap_or("-");
        let lit: Vec<_> = view
            .buttons
            .iter()
            .filter(|b| b.enabled())
            .map(|b| b.kind.id())
            .collect();
        info!(caption, buttons = ?lit, width = view.view_box.0, "render");
        for b in &view.buttons {
            debug!(
                button = b.kind.id(),
                x = b.x,
                fill = %b.fill.to_hex(),
                opacity = b.opacity,
                path = b.path,
                "glyph"
            );
        }
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// One outbound host call.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Select(SelectionId),
        Clear,
        Filter(serde_json::Value),
    }

    /// Test double remembering every call and the last rendered frame.
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub calls: Vec<Call>,
        pub frames: usize,
        pub last_view: Option<ControlsView>,
    }

    impl RecordingHost {
        pub fn selected(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Select(id) => Some(id.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn filters(&self) -> Vec<&serde_json::Value> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Filter(f) => Some(f),
                    _ => None,
                })
                .collect()
        }
    }

    impl Host for RecordingHost {
        fn select(&mut self, id: &SelectionId) {
            self.calls.push(Call::Select(id.clone()));
        }

        fn clear_selection(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn apply_json_filter(
            &mut self,
            filter: &BasicFilter,
            object: &str,
            property: &str,
            action: FilterAction,
        ) {
            assert_eq!((object, property, action), ("general", "filter", FilterAction::Merge));
            self.calls.push(Call::Filter(serde_json::to_value(filter).unwrap()));
        }

        fn render(&mut self, view: &ControlsView) {
            self.frames += 1;
            self.last_view = Some(view.clone());
        }
    }
}
