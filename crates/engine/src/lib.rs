//! Playback state machine and its timer schedule.

pub mod machine;
pub mod timer;

pub use machine::{ButtonStates, Direction, Effect, PlaybackMachine};
pub use timer::TimerQueue;
