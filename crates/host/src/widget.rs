use crate::host::Host;
use std::time::Duration;
use timeplay_config::{enumerate_object_instances, resolve_settings, ObjectInstance, Settings};
use timeplay_core::{
    build_categories, Category, ColumnSource, Gesture, Result, RunStatus, UpdateOptions,
};
use timeplay_engine::{Direction, Effect, PlaybackMachine};
use timeplay_filter::{build_filter, restored_index, BasicFilter, FilterAction};
use timeplay_theme::Theme;
use timeplay_widgets::{buttons_view, caption_view, CaptionView, ControlsView};
use tracing::{debug, warn};

/// The whole widget: categories, settings, playback state and the last frame.
#[derive(Debug)]
pub struct PlaybackWidget {
    categories: Vec<Category>,
    source:     Option<ColumnSource>,
    settings:   Settings,
    theme:      Theme,
    machine:    PlaybackMachine,
    caption:    Option<CaptionView>,
    view:       ControlsView,
    /// Last cross-filter pushed to the host.
    applied:    Option<BasicFilter>,
}

impl Default for PlaybackWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackWidget {
    /// Fresh widget: paused, nothing selected, only play lit.
    pub fn new() -> Self {
        let theme = Theme::default();
        let machine = PlaybackMachine::new();
        let view = ControlsView::new(buttons_view(machine.buttons(), &theme.buttons), None);
        Self {
            categories: Vec::new(),
            source: None,
            settings: Settings::default(),
            theme,
            machine,
            caption: None,
            view,
            applied: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn current(&self) -> Option<usize> {
        self.machine.current()
    }

    pub fn status(&self) -> RunStatus {
        self.machine.status()
    }

    /// Last frame handed to the host.
    pub fn view(&self) -> &ControlsView {
        &self.view
    }

    /// Cross-filter the host currently holds from this widget.
    pub fn applied_filter(&self) -> Option<&BasicFilter> {
        self.applied.as_ref()
    }

    /// Virtual time of the next pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.machine.next_deadline()
    }

    /// Host update cycle.
    ///
    /// Fails with `DataNotReady` before touching any state when the category
    /// binding is incomplete; the previous frame stays on screen.
    pub fn update<H: Host>(&mut self, options: &UpdateOptions, host: &mut H) -> Result<()> {
        let categories = build_categories(options)?;
        let source = options.category_column().map(|(_, source)| source.clone());

        self.settings = resolve_settings(options.objects());
        self.theme = Theme::from_settings(&self.settings);

        // Pending timers index into the old list: drop them first.
        self.machine.begin_update(categories.len(), self.settings.transition);
        self.categories = categories;
        self.source = source;

        self.machine.resync(restored_index(&options.json_filters));
        self.machine.reassert_selection();
        if self.settings.transition.auto_start {
            self.machine.play();
        }
        self.flush(host);

        // An auto-started run has nothing selected until its first step, so
        // the rebuilt caption keeps showing the label it showed before.
        let shown = self.machine.current().or_else(|| self.caption_position());
        self.caption = caption_view(&self.categories, shown, &self.theme.caption, host.measure());
        self.render(host);
        Ok(())
    }

    /// Forward a user interaction to the state machine.
    pub fn gesture<H: Host>(&mut self, gesture: Gesture, host: &mut H) {
        debug!(?gesture, "gesture");
        match gesture {
            Gesture::Play => self.machine.play(),
            Gesture::Pause => self.machine.pause(),
            Gesture::Previous => self.machine.step(Direction::Previous),
            Gesture::Next => self.machine.step(Direction::Next),
            Gesture::CaptionSelected(position) => self.machine.jump_to(position),
        }
        self.flush(host);
        self.render(host);
    }

    /// Fire every timer due by `now` (virtual time since construction).
    pub fn advance_to<H: Host>(&mut self, now: Duration, host: &mut H) {
        let before = self.machine.pending_timers();
        self.machine.advance_to(now);
        let fired = self.flush(host);
        if fired || before != self.machine.pending_timers() {
            self.render(host);
        }
    }

    /// Format-pane cards for `object_name`.
    pub fn enumerate_object_instances(&self, object_name: &str) -> Vec<ObjectInstance> {
        enumerate_object_instances(object_name, &self.settings)
    }

    /// Teardown: no timer may fire afterwards.
    pub fn destroy(&mut self) {
        self.machine.destroy();
    }

    /// Carry pending effects out to the host.  Returns whether there were any.
    fn flush<H: Host>(&mut self, host: &mut H) -> bool {
        let effects = self.machine.take_effects();
        for effect in &effects {
            match *effect {
                Effect::SelectionChanged(i) => match self.categories.get(i) {
                    Some(category) => host.select(&category.selection_id),
                    None => debug!(i, "selection outside category list"),
                },
                Effect::SelectionCleared => host.clear_selection(),
                Effect::ApplyFilter(i) => self.apply_filter(i, host),
                Effect::CaptionRefresh => self.refresh_caption(host),
            }
        }
        !effects.is_empty()
    }

    fn apply_filter<H: Host>(&mut self, index: usize, host: &mut H) {
        let Some(source) = &self.source else {
            return;
        };
        match build_filter(index, source) {
            Ok(filter) => {
                host.apply_json_filter(&filter, "general", "filter", FilterAction::Merge);
                self.applied = Some(filter);
            }
            Err(e) => warn!("Cross-filter skipped: {e}"),
        }
    }

    /// Position in the current list of the label the caption has selected.
    fn caption_position(&self) -> Option<usize> {
        let label = &self.caption.as_ref()?.selected()?.label;
        self.categories
            .iter()
            .find(|c| &c.display_value == label)
            .map(|c| c.position)
    }

    fn refresh_caption<H: Host>(&mut self, host: &H) {
        self.caption = caption_view(
            &self.categories,
            self.machine.current(),
            &self.theme.caption,
            host.measure(),
        );
    }

    fn render<H: Host>(&mut self, host: &mut H) {
        self.view = ControlsView::new(
            buttons_view(self.machine.buttons(), &self.theme.buttons),
            self.caption.clone(),
        );
        host.render(&self.view);
    }
}
