//! Format-pane enumeration: the current values of each settings group.

use crate::schema::{Fill, Settings, FONT_SIZE_RANGE, TIME_INTERVAL_RANGE};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// One property-pane card as handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectInstance {
    pub object_name: String,
    pub properties:  Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_values: Option<Value>,
    /// Always `null`: every group applies to the whole widget.
    pub selector: Option<Value>,
}

impl ObjectInstance {
    fn new(object_name: &str, properties: Value, valid_values: Option<Value>) -> Self {
        let properties = match properties {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            object_name: object_name.to_string(),
            properties,
            valid_values,
            selector: None,
        }
    }
}

fn number_range((min, max): (u32, u32)) -> Value {
    json!({ "numberRange": { "min": min, "max": max } })
}

/// Enumerate the instances of `object_name` for the property pane.
///
/// `colorSelector` lists the five per-button colors when `show_all` is on and
/// only `pickedColor` otherwise.  Unknown names enumerate nothing.
pub fn enumerate_object_instances(object_name: &str, settings: &Settings) -> Vec<ObjectInstance> {
    let instance = match object_name {
        "transitionSettings" => {
            let t = &settings.transition;
            ObjectInstance::new(
                object_name,
                json!({
                    "autoStart":    t.auto_start,
                    "loop":         t.looping,
                    "timeInterval": t.time_interval_ms,
                }),
                Some(json!({ "timeInterval": number_range(TIME_INTERVAL_RANGE) })),
            )
        }
        "colorSelector" => {
            let c = &settings.colors;
            let properties = if c.show_all {
                json!({
                    "showAll":       true,
                    "playColor":     Fill::solid(&c.play_color),
                    "pauseColor":    Fill::solid(&c.pause_color),
                    "stopColor":     Fill::solid(&c.stop_color),
                    "previousColor": Fill::solid(&c.previous_color),
                    "nextColor":     Fill::solid(&c.next_color),
                })
            } else {
                json!({
                    "showAll":     false,
                    "pickedColor": Fill::solid(&c.picked_color),
                })
            };
            ObjectInstance::new(object_name, properties, None)
        }
        "captionSettings" => {
            let cap = &settings.caption;
            ObjectInstance::new(
                object_name,
                json!({
                    "show":         cap.show,
                    "captionColor": Fill::solid(&cap.color),
                    "align":        cap.align.as_str(),
                    "fontSize":     cap.font_size,
                }),
                Some(json!({ "fontSize": number_range(FONT_SIZE_RANGE) })),
            )
        }
        _ => return Vec::new(),
    };
    vec![instance]
}
