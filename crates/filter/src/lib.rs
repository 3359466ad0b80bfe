//! Cross-filter bridge: the current position as a host JSON filter, and the
//! restored position read back from filters the host re-applies.

pub mod basic;

pub use basic::{BasicFilter, FilterAction, FilterOperator, FilterTarget, BASIC_SCHEMA};

use serde_json::Value;
use timeplay_core::{ColumnSource, Result};
use tracing::debug;

/// Build the `In {index}` filter scoped to the bound column.
pub fn build_filter(index: usize, source: &ColumnSource) -> Result<BasicFilter> {
    let target = FilterTarget::from_source(source)?;
    Ok(BasicFilter::new(target, FilterOperator::In, vec![Value::from(index)]))
}

/// Position restored by the host (bookmark, undo): the first value of the
/// first inbound filter.
///
/// Numeric strings are accepted; anything else counts as "no restored value".
pub fn restored_index(json_filters: &[Value]) -> Option<i64> {
    let first = json_filters.first()?;
    let value = first.get("values")?.as_array()?.first()?;

    let index = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.trunc() as i64),
        _ => None,
    };
    if index.is_none() {
        debug!(%value, "ignoring non-numeric restored filter value");
    }
    index
}
