pub mod category;
pub mod error;
pub mod event;
pub mod state;

pub use category::build_categories;
pub use error::{Result, TimelineError};
pub use event::{Gesture, Message};
pub use state::{
    Category, CategoryColumn, Categorical, ColumnSource, DataView, DataViewMetadata, RunStatus,
    SelectionId, UpdateOptions,
};
