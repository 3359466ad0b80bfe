//! Embedding glue: the widget aggregate, the host seam and the async driver.

pub mod commands;
pub mod host;
pub mod runtime;
pub mod widget;

pub use commands::parse_command;
pub use host::{Host, TracingHost};
pub use runtime::Driver;
pub use widget::PlaybackWidget;
