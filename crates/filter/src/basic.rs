use serde::{Deserialize, Serialize};
use serde_json::Value;
use timeplay_core::{ColumnSource, Result, TimelineError};

/// Schema URL the host expects on basic filters.
pub const BASIC_SCHEMA: &str = "http://powerbi.com/product/schema#basic";

/// Table/column a filter applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTarget {
    pub table:  String,
    pub column: String,
}

impl FilterTarget {
    /// Table is the query name up to its first `.`, column the display name.
    pub fn from_source(source: &ColumnSource) -> Result<Self> {
        let (table, _) = source.query_name.split_once('.').ok_or_else(|| {
            TimelineError::Filter(format!(
                "query name '{}' has no table qualifier",
                source.query_name
            ))
        })?;
        Ok(Self {
            table:  table.to_string(),
            column: source.display_name.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    In,
}

/// How the host combines a pushed filter with the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterAction {
    Merge,
}

/// Wire shape of a basic (value-list) filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicFilter {
    #[serde(rename = "$schema")]
    pub schema:      String,
    pub target:      FilterTarget,
    /// Always `1` (basic) for this shape.
    pub filter_type: u8,
    pub operator:    FilterOperator,
    pub values:      Vec<Value>,
}

impl BasicFilter {
    pub fn new(target: FilterTarget, operator: FilterOperator, values: Vec<Value>) -> Self {
        Self {
            schema: BASIC_SCHEMA.to_string(),
            target,
            filter_type: 1,
            operator,
            values,
        }
    }
}
