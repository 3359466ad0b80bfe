use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque host-issued token identifying a single category row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(String);

impl SelectionId {
    /// Build the identifier for row `index` of the column bound as `query_name`.
    pub fn with_category(query_name: &str, index: usize) -> Self {
        Self(format!("{query_name}#{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One selectable value of the bound timeline field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub display_value: String,
    pub selection_id:  SelectionId,
    /// 0-based position in host order.
    pub position:      usize,
}

/// Playback engine mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    Stopped,
    #[default]
    Paused,
    Playing,
}

impl RunStatus {
    #[inline]
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

// ── Host data view ────────────────────────────────────────────────────────────

/// Everything the host hands over on one update cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateOptions {
    pub data_views: Vec<DataView>,
    /// Filters the host currently has applied to this widget (bookmarks, undo).
    pub json_filters: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataView {
    pub categorical: Option<Categorical>,
    pub metadata:    DataViewMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataViewMetadata {
    /// Persisted format-pane objects, keyed by group then property.
    pub objects: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Categorical {
    pub categories: Vec<CategoryColumn>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryColumn {
    pub source: Option<ColumnSource>,
    pub values: Vec<Value>,
}

/// Metadata of the bound field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnSource {
    /// Qualified name, e.g. `"Sales.Period"`.
    pub query_name:   String,
    pub display_name: String,
}

impl UpdateOptions {
    /// The first category column and its source, if the binding is complete.
    pub fn category_column(&self) -> Option<(&CategoryColumn, &ColumnSource)> {
        let column = self.data_views.first()?.categorical.as_ref()?.categories.first()?;
        Some((column, column.source.as_ref()?))
    }

    pub fn objects(&self) -> Option<&Value> {
        self.data_views.first()?.metadata.objects.as_ref()
    }
}
