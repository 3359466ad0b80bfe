use crate::timer::TimerQueue;
use std::time::Duration;
use timeplay_config::TransitionSettings;
use timeplay_core::RunStatus;
use tracing::{debug, info};

/// Externally visible consequences of a transition, drained by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Highlight the category at this position on the host.
    SelectionChanged(usize),
    /// Drop the host-side selection before reasserting it.
    SelectionCleared,
    /// Push an `In` cross-filter for this position.
    ApplyFilter(usize),
    /// Re-render the caption for the current position.
    CaptionRefresh,
}

/// Manual step direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn delta(self) -> i64 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Which transport buttons currently do something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStates {
    pub play:     bool,
    pub pause:    bool,
    pub previous: bool,
    pub next:     bool,
}

#[derive(Debug, Clone, Copy)]
enum TimerAction {
    /// Move to this position.
    Advance(usize),
    /// One full pass finished: loop or settle at the end.
    EndOfRun,
}

/// Owns the current position, the run status and the pending timer set.
///
/// Every operation is a silent no-op when its preconditions don't hold.
#[derive(Debug)]
pub struct PlaybackMachine {
    len:        usize,
    current:    Option<usize>,
    status:     RunStatus,
    transition: TransitionSettings,
    timers:     TimerQueue<TimerAction>,
    effects:    Vec<Effect>,
}

impl Default for PlaybackMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackMachine {
    /// Paused, nothing selected, no categories yet.
    pub fn new() -> Self {
        Self {
            len:        0,
            current:    None,
            status:     RunStatus::Paused,
            transition: TransitionSettings::default(),
            timers:     TimerQueue::new(),
            effects:    Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn transition(&self) -> &TransitionSettings {
        &self.transition
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Virtual time at which the next timer is due.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Current position as a signed index, `-1` when unset.
    fn index(&self) -> i64 {
        self.current.map_or(-1, |c| c as i64)
    }

    fn last(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    fn cancel_timers(&mut self) {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            debug!(cancelled, "cancelled pending timers");
        }
    }

    /// Take every effect produced since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn buttons(&self) -> ButtonStates {
        let index = self.index();
        let playing = self.status.is_playing();
        ButtonStates {
            play:     !playing,
            pause:    playing,
            previous: index > 0,
            next:     index < self.len as i64 - 1,
        }
    }

    // ── Update cycle ──────────────────────────────────────────────────────────

    /// Start of a host update cycle: drop every pending timer, then adopt the
    /// rebuilt category count and transition settings.
    ///
    /// A run in progress is suspended; its timers pointed into the old list.
    pub fn begin_update(&mut self, len: usize, transition: TransitionSettings) {
        self.cancel_timers();
        if self.status.is_playing() {
            info!("update cycle interrupted playback");
            self.status = RunStatus::Paused;
        }
        self.len = len;
        self.transition = transition;
    }

    /// Re-derive the current position.
    ///
    /// A restored external value wins (clamped into range); otherwise the
    /// most recent category is selected.  Run status is left alone.
    pub fn resync(&mut self, external: Option<i64>) {
        self.current = match (external, self.last()) {
            (_, None) => None,
            (Some(value), Some(last)) => Some(value.clamp(0, last as i64) as usize),
            (None, Some(last)) => Some(last),
        };
        debug!(current = ?self.current, external = ?external, "resynced position");
    }

    /// Clear the host selection, select the current category and push its filter.
    pub fn reassert_selection(&mut self) {
        let Some(current) = self.current else {
            return;
        };
        self.effects.extend([
            Effect::SelectionCleared,
            Effect::SelectionChanged(current),
            Effect::ApplyFilter(current),
        ]);
    }

    // ── Transitions ───────────────────────────────────────────────────────────

    /// Schedule one step per remaining category plus a terminal timer, then
    /// filter the host to where the run starts.
    pub fn play(&mut self) {
        if self.status.is_playing() {
            debug!("play ignored: already playing");
            return;
        }
        let Some(last) = self.last() else {
            debug!("play ignored: no categories");
            return;
        };

        self.cancel_timers();
        if self.current == Some(last) {
            self.current = None;
        }

        let interval_ms = u64::from(self.transition.time_interval_ms);
        let base = self.index();
        let after = |steps: i64| Duration::from_millis(interval_ms * steps as u64);

        for i in self.current.map_or(0, |c| c + 1)..self.len {
            self.timers.schedule(after(i as i64 - base), TimerAction::Advance(i));
        }
        self.timers.schedule(after(self.len as i64 - base), TimerAction::EndOfRun);

        self.status = RunStatus::Playing;
        info!(from = base, len = self.len, interval_ms, "playback started");

        // From the wrapped position the run's first stop is position 0.
        self.effects.push(Effect::ApplyFilter(self.current.unwrap_or(0)));
    }

    pub fn pause(&mut self) {
        if self.status == RunStatus::Paused || self.current.is_none() {
            debug!(status = ?self.status, "pause ignored");
            return;
        }
        self.cancel_timers();
        self.status = RunStatus::Paused;
        info!(current = ?self.current, "playback paused");
    }

    /// Cancel the run and settle paused on the last category.
    pub fn stop(&mut self) {
        if self.status == RunStatus::Stopped {
            debug!("stop ignored: already stopped");
            return;
        }
        let Some(last) = self.last() else {
            debug!("stop ignored: no categories");
            return;
        };
        self.cancel_timers();
        self.current = Some(last);
        self.effects.extend([
            Effect::CaptionRefresh,
            Effect::SelectionCleared,
            Effect::SelectionChanged(last),
        ]);
        self.status = RunStatus::Paused;
        info!(current = last, "playback stopped");
    }

    pub fn step(&mut self, direction: Direction) {
        if self.status != RunStatus::Paused {
            debug!(status = ?self.status, "step ignored");
            return;
        }
        let target = self.index() + direction.delta();
        if target < 0 || target >= self.len as i64 {
            debug!(target, len = self.len, "step out of range");
            return;
        }
        let target = target as usize;
        self.current = Some(target);
        self.effects.extend([Effect::SelectionChanged(target), Effect::CaptionRefresh]);
        self.status = RunStatus::Paused;
    }

    /// Direct selection from the caption.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.len {
            debug!(index, len = self.len, "jump out of range");
            return;
        }
        self.cancel_timers();
        self.current = Some(index);
        self.effects.extend([
            Effect::SelectionChanged(index),
            Effect::CaptionRefresh,
            Effect::ApplyFilter(index),
        ]);
        self.status = RunStatus::Paused;
    }

    /// Fire every timer due at or before `now`, in deadline order.
    pub fn advance_to(&mut self, now: Duration) {
        while let Some(action) = self.timers.pop_due(now) {
            self.fire(action);
        }
        self.timers.settle(now);
    }

    fn fire(&mut self, action: TimerAction) {
        match action {
            TimerAction::Advance(i) if i < self.len => {
                self.current = Some(i);
                self.effects.extend([Effect::SelectionChanged(i), Effect::CaptionRefresh]);
            }
            TimerAction::Advance(i) => debug!(i, len = self.len, "stale step dropped"),
            TimerAction::EndOfRun if self.transition.looping => {
                self.status = RunStatus::Stopped;
                self.current = None;
                self.play();
            }
            TimerAction::EndOfRun => self.stop(),
        }
    }

    /// Teardown: nothing may fire afterwards.
    pub fn destroy(&mut self) {
        self.cancel_timers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn machine(len: usize, looping: bool) -> PlaybackMachine {
        let mut m = PlaybackMachine::new();
        m.begin_update(
            len,
            TransitionSettings {
                auto_start: false,
                looping,
                time_interval_ms: 1_000,
            },
        );
        m.resync(None);
        m.take_effects();
        m
    }

    fn selections(effects: &[Effect]) -> Vec<usize> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::SelectionChanged(i) => Some(*i),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn initial_state_is_paused_and_unset() {
        let m = PlaybackMachine::new();
        assert_eq!(m.status(), RunStatus::Paused);
        assert_eq!(m.current(), None);
        assert_eq!(
            m.buttons(),
            ButtonStates { play: true, pause: false, previous: false, next: false }
        );
    }

    #[test]
    fn resync_defaults_to_last_category() {
        for n in 1..8 {
            assert_eq!(machine(n, false).current(), Some(n - 1));
        }
    }

    #[test]
    fn resync_prefers_external_value_and_clamps() {
        let mut m = machine(5, false);
        m.resync(Some(2));
        assert_eq!(m.current(), Some(2));
        m.resync(Some(42));
        assert_eq!(m.current(), Some(4));
        m.resync(Some(-3));
        assert_eq!(m.current(), Some(0));
    }

    #[test]
    fn step_round_trip_from_interior() {
        let mut m = machine(5, false);
        m.resync(Some(2));
        m.step(Direction::Next);
        assert_eq!(m.current(), Some(3));
        m.step(Direction::Previous);
        assert_eq!(m.current(), Some(2));
        assert_eq!(m.status(), RunStatus::Paused);
        assert_eq!(selections(&m.take_effects()), [3, 2]);
    }

    #[test]
    fn step_rejects_out_of_range() {
        let mut m = machine(3, false);
        m.step(Direction::Next);
        assert_eq!(m.current(), Some(2));
        assert!(m.take_effects().is_empty());

        m.resync(Some(0));
        m.step(Direction::Previous);
        assert_eq!(m.current(), Some(0));
        assert!(m.take_effects().is_empty());
    }

    #[test]
    fn step_is_noop_while_playing() {
        let mut m = machine(5, false);
        m.resync(Some(1));
        m.play();
        m.take_effects();
        m.step(Direction::Next);
        m.step(Direction::Previous);
        assert_eq!(m.current(), Some(1));
        assert_eq!(m.status(), RunStatus::Playing);
        assert!(m.take_effects().is_empty());
    }

    #[test]
    fn play_without_loop_walks_forward_then_stops() {
        let mut m = machine(5, false);
        m.resync(Some(1));
        m.play();
        assert_eq!(m.take_effects(), [Effect::ApplyFilter(1)]);
        assert_eq!(m.pending_timers(), 4);

        m.advance_to(ms(10_000));
        let effects = m.take_effects();
        // Three steps, then stop() reasserts the last category.
        assert_eq!(selections(&effects), [2, 3, 4, 4]);
        assert_eq!(m.current(), Some(4));
        assert_eq!(m.status(), RunStatus::Paused);
        assert_eq!(m.pending_timers(), 0);
    }

    #[test]
    fn play_from_end_wraps_to_start() {
        let mut m = machine(3, false);
        m.play();
        // Wrapped to unset: steps for 0, 1, 2, host filtered to the first one.
        assert_eq!(m.take_effects(), [Effect::ApplyFilter(0)]);
        assert_eq!(m.current(), None);

        m.advance_to(ms(1_000));
        assert_eq!(m.current(), Some(0));
        assert!(!m.buttons().previous);
    }

    #[test]
    fn looping_restarts_at_first_category() {
        let mut m = machine(3, true);
        m.resync(Some(0));
        m.play();
        m.take_effects();

        // 1 and 2 at t=1s/2s, terminal at 3s restarts: 0 at 4s, 1 at 5s.
        m.advance_to(ms(3_000));
        assert_eq!(m.status(), RunStatus::Playing);
        assert_eq!(m.current(), None);
        m.advance_to(ms(4_000));
        assert_eq!(m.current(), Some(0));
        m.advance_to(ms(5_000));
        assert_eq!(m.current(), Some(1));
        assert_eq!(selections(&m.take_effects()), [1, 2, 0, 1]);

        // Never terminates on its own.
        m.advance_to(ms(60_000));
        assert_eq!(m.status(), RunStatus::Playing);
        assert!(m.pending_timers() > 0);
    }

    #[test]
    fn loop_restart_refilters_from_first_category() {
        let mut m = machine(2, true);
        m.resync(Some(0));
        m.play();
        assert_eq!(m.take_effects(), [Effect::ApplyFilter(0)]);

        // 1 at 1s, terminal at 2s restarts the run from the wrapped position.
        m.advance_to(ms(2_000));
        let filters: Vec<_> = m
            .take_effects()
            .into_iter()
            .filter(|e| matches!(e, Effect::ApplyFilter(_)))
            .collect();
        assert_eq!(filters, [Effect::ApplyFilter(0)]);
    }

    #[test]
    fn pause_keeps_position_and_cancels_timers() {
        let mut m = machine(5, false);
        m.resync(Some(0));
        m.play();
        m.advance_to(ms(2_500));
        m.pause();
        assert_eq!(m.current(), Some(2));
        assert_eq!(m.status(), RunStatus::Paused);
        assert_eq!(m.pending_timers(), 0);

        m.take_effects();
        m.advance_to(ms(100_000));
        assert!(m.take_effects().is_empty());
    }

    #[test]
    fn pause_ignored_when_unset_or_paused() {
        let mut m = PlaybackMachine::new();
        m.pause();
        assert_eq!(m.status(), RunStatus::Paused);

        let mut m = machine(3, false);
        m.play(); // wraps to unset
        m.pause();
        assert_eq!(m.status(), RunStatus::Playing);
    }

    #[test]
    fn stop_settles_on_last_from_any_state() {
        let mut m = machine(4, false);
        m.resync(Some(1));
        m.stop();
        assert_eq!((m.current(), m.status()), (Some(3), RunStatus::Paused));
        assert_eq!(
            m.take_effects(),
            [Effect::CaptionRefresh, Effect::SelectionCleared, Effect::SelectionChanged(3)]
        );

        m.resync(Some(0));
        m.play();
        m.advance_to(ms(1_500));
        m.stop();
        assert_eq!((m.current(), m.status()), (Some(3), RunStatus::Paused));
        assert_eq!(m.pending_timers(), 0);
    }

    #[test]
    fn jump_to_selects_and_filters() {
        let mut m = machine(5, false);
        m.play();
        m.jump_to(2);
        assert_eq!(m.current(), Some(2));
        assert_eq!(m.status(), RunStatus::Paused);
        assert_eq!(m.pending_timers(), 0);
        assert!(m.take_effects().contains(&Effect::ApplyFilter(2)));

        m.jump_to(9);
        assert_eq!(m.current(), Some(2));
    }

    #[test]
    fn button_enablement_tracks_index() {
        let mut m = machine(3, false);
        for (value, previous, next) in [(0, false, true), (1, true, true), (2, true, false)] {
            m.resync(Some(value));
            let b = m.buttons();
            assert_eq!((b.previous, b.next), (previous, next), "at {value}");
        }
        m.play();
        let b = m.buttons();
        assert!(!b.play && b.pause);
    }

    #[test]
    fn update_cycle_cancels_pending_run() {
        let mut m = machine(5, false);
        m.resync(Some(0));
        m.play();
        m.begin_update(2, *m.transition());
        assert_eq!(m.status(), RunStatus::Paused);
        assert_eq!(m.pending_timers(), 0);
        m.resync(None);
        m.take_effects();
        m.advance_to(ms(10_000));
        assert_eq!(m.current(), Some(1));
        assert!(m.take_effects().is_empty());
    }

    #[test]
    fn five_category_scenario() {
        let mut m = machine(5, false);
        assert_eq!(m.current(), Some(4));

        for _ in 0..4 {
            m.step(Direction::Previous);
        }
        assert_eq!(m.current(), Some(0));
        assert_eq!((m.buttons().previous, m.buttons().next), (false, true));

        m.play();
        for (t, expected) in [(1_000, 1), (2_000, 2), (3_000, 3), (4_000, 4)] {
            m.advance_to(ms(t - 1));
            assert_ne!(m.current(), Some(expected));
            m.advance_to(ms(t));
            assert_eq!(m.current(), Some(expected));
            assert_eq!(m.status(), RunStatus::Playing);
        }
        m.advance_to(ms(5_000));
        assert_eq!(m.current(), Some(4));
        assert_eq!(m.status(), RunStatus::Paused);
    }
}
