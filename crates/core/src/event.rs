use crate::state::UpdateOptions;

/// A user interaction with the rendered controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Play,
    Pause,
    Previous,
    Next,
    /// The caption selector changed; carries the chosen category position.
    CaptionSelected(usize),
}

/// All messages that can flow into a running widget.
///
/// Sources:
/// - Host data binding     → `Update`
/// - Rendered controls     → `Gesture`
/// - Config watcher task   → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum Message {
    /// A new data/viewport update cycle from the host.
    Update(UpdateOptions),
    /// Click on a transport button or a caption change.
    Gesture(Gesture),
    /// Persisted settings file changed on disk; replay the last update.
    ConfigReloaded,
    /// The host is tearing the widget down.
    Shutdown,
}
