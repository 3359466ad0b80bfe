//! Typed two-level lookup over the host's persisted object bag.

use crate::schema::{
    Align, CaptionSettings, ColorSelector, Fill, Settings, TransitionSettings, FONT_SIZE_RANGE,
    TIME_INTERVAL_RANGE,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Look up `objects[object][property]` and decode it as `T`.
///
/// Returns `None` on any missing link in the chain, and on a value of the
/// wrong shape (logged, then treated as absent).
pub fn get_value<T: DeserializeOwned>(
    objects: Option<&Value>,
    object: &str,
    property: &str,
) -> Option<T> {
    let raw = objects?.get(object)?.get(property)?;
    match T::deserialize(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring malformed setting {object}.{property}: {e}");
            None
        }
    }
}

/// Merge persisted objects over the defaults.  Never fails.
pub fn resolve_settings(objects: Option<&Value>) -> Settings {
    let d = Settings::default();

    let flag = |object: &str, property: &str, default: bool| {
        get_value::<bool>(objects, object, property).unwrap_or(default)
    };
    let color = |object: &str, property: &str, default: &str| {
        get_value::<Fill>(objects, object, property)
            .map(|fill| fill.solid.color)
            .unwrap_or_else(|| default.to_string())
    };
    let ranged = |object: &str, property: &str, default: u32, (min, max): (u32, u32)| {
        get_value::<f64>(objects, object, property)
            .filter(|v| v.is_finite())
            .map(|v| v.round().clamp(f64::from(min), f64::from(max)) as u32)
            .unwrap_or(default)
    };

    const T: &str = "transitionSettings";
    const C: &str = "colorSelector";
    const CAP: &str = "captionSettings";

    Settings {
        transition: TransitionSettings {
            auto_start: flag(T, "autoStart", d.transition.auto_start),
            looping:    flag(T, "loop", d.transition.looping),
            time_interval_ms: ranged(
                T,
                "timeInterval",
                d.transition.time_interval_ms,
                TIME_INTERVAL_RANGE,
            ),
        },
        colors: ColorSelector {
            picked_color:   color(C, "pickedColor", &d.colors.picked_color),
            show_all:       flag(C, "showAll", d.colors.show_all),
            play_color:     color(C, "playColor", &d.colors.play_color),
            pause_color:    color(C, "pauseColor", &d.colors.pause_color),
            stop_color:     color(C, "stopColor", &d.colors.stop_color),
            previous_color: color(C, "previousColor", &d.colors.previous_color),
            next_color:     color(C, "nextColor", &d.colors.next_color),
        },
        caption: CaptionSettings {
            show:      flag(CAP, "show", d.caption.show),
            color:     color(CAP, "captionColor", &d.caption.color),
            font_size: ranged(CAP, "fontSize", d.caption.font_size, FONT_SIZE_RANGE),
            align:     get_value::<Align>(objects, CAP, "align").unwrap_or(d.caption.align),
        },
    }
}
