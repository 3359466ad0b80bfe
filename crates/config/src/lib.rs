pub mod enumerate;
pub mod resolve;
pub mod schema;
pub mod watcher;

pub use enumerate::{enumerate_object_instances, ObjectInstance};
pub use resolve::{get_value, resolve_settings};
pub use schema::{
    Align, CaptionSettings, ColorSelector, Fill, Settings, TransitionSettings, FONT_SIZE_RANGE,
    TIME_INTERVAL_RANGE,
};
pub use watcher::SettingsWatcher;

use serde_json::Value;
use std::path::{Path, PathBuf};
use timeplay_core::{Result, TimelineError};

/// Load persisted format-pane objects from a TOML file.
///
/// The file mirrors the host's object layout (`[transitionSettings]`,
/// `[colorSelector.playColor.solid]`, ...).  Returns an empty object if the
/// file doesn't exist so the widget always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Settings file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(Value::Object(Default::default()));
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| TimelineError::Config(format!("cannot read '{}': {e}", path.display())))?;

    let table: toml::Table =
        toml::from_str(&raw).map_err(|e| TimelineError::Config(format!("TOML parse error: {e}")))?;

    serde_json::to_value(table).map_err(|e| TimelineError::Config(format!("convert: {e}")))
}

/// Return the default settings path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("timeplay").join("timeplay.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_empty_objects() {
        let objects = load("/nonexistent/timeplay.toml").unwrap();
        assert_eq!(resolve_settings(Some(&objects)), Settings::default());
    }

    #[test]
    fn toml_file_feeds_the_resolver() {
        let path = std::env::temp_dir().join(format!("timeplay-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[transitionSettings]\nloop = true\ntimeInterval = 750\n\n\
             [colorSelector.playColor.solid]\ncolor = \"#ff0000\"\n",
        )
        .unwrap();

        let settings = resolve_settings(Some(&load(&path).unwrap()));
        std::fs::remove_file(&path).ok();

        assert!(settings.transition.looping);
        assert_eq!(settings.transition.time_interval_ms, 750);
        assert_eq!(settings.colors.play_color, "#ff0000");
    }
}
