use timeplay_core::{Gesture, Message};
use timeplay_widgets::ButtonKind;

/// Parse one line typed into the standalone runner.
///
/// Button ids (`play`, `pause`, `previous`, `next`), `select <position>` and
/// `quit`.  Anything else is `None`.
pub fn parse_command(line: &str) -> Option<Message> {
    let mut words = line.split_whitespace();
    let head = words.next()?;

    let message = match head {
        "quit" | "exit" => Message::Shutdown,
        "select" => Message::Gesture(Gesture::CaptionSelected(words.next()?.parse().ok()?)),
        id => Message::Gesture(ButtonKind::from_id(id)?.gesture()),
    };
    words.next().is_none().then_some(message)
}
