use crate::error::{Result, TimelineError};
use crate::state::{Category, SelectionId, UpdateOptions};
use serde_json::Value;

/// Derive the ordered category list from the first bound category column.
///
/// Fails with [`TimelineError::DataNotReady`] when the update carries no data
/// view, no categorical binding, no category column or no column source.
pub fn build_categories(options: &UpdateOptions) -> Result<Vec<Category>> {
    let view = options
        .data_views
        .first()
        .ok_or(TimelineError::DataNotReady("no data view"))?;
    let categorical = view
        .categorical
        .as_ref()
        .ok_or(TimelineError::DataNotReady("no categorical binding"))?;
    let column = categorical
        .categories
        .first()
        .ok_or(TimelineError::DataNotReady("no category column"))?;
    let source = column
        .source
        .as_ref()
        .ok_or(TimelineError::DataNotReady("category column has no source"))?;

    Ok(column
        .values
        .iter()
        .enumerate()
        .map(|(position, value)| Category {
            display_value: display_string(value),
            selection_id:  SelectionId::with_category(&source.query_name, position),
            position,
        })
        .collect())
}

/// String coercion of a raw category value.
fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            // Whole floats print without a trailing ".0"
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
