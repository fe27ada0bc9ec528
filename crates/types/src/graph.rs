use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The engine the host uses when a graph config doesn't name one.
pub const DEFAULT_RENDER_ENGINE: &str = "desmos";

/// Visible range of a 2-D coordinate system. Missing edges fall back to the
/// default `[-10, 10]` range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathBounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl MathBounds {
    /// A square viewport spanning `[-extent, extent]` on both axes.
    pub fn symmetric(extent: f64) -> Self {
        Self {
            left: -extent,
            right: extent,
            bottom: -extent,
            top: extent,
        }
    }
}

impl Default for MathBounds {
    fn default() -> Self {
        Self::symmetric(10.0)
    }
}

/// Where arrowheads are drawn on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArrowMode {
    None,
    Positive,
    Both,
}

/// Axis presentation options understood by the graph engine.
///
/// Keys this crate doesn't model are kept in `extra` so a config survives a
/// load/render/save cycle untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_arrow_mode: Option<ArrowMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_arrow_mode: Option<ArrowMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_numbers: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Configuration object handed to the external graph-drawing engine.
///
/// The renderer flips `print_mode` on the caller's value in place before the
/// config is dispatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphConfig {
    #[serde(default = "default_render_engine")]
    pub render_engine: String,
    #[serde(default)]
    pub math_bounds: MathBounds,
    #[serde(default)]
    pub options: GraphOptions,
    #[serde(default)]
    pub print_mode: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_render_engine() -> String {
    DEFAULT_RENDER_ENGINE.to_string()
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            render_engine: default_render_engine(),
            math_bounds: MathBounds::default(),
            options: GraphOptions::default(),
            print_mode: false,
            extra: Map::new(),
        }
    }
}

impl GraphConfig {
    /// The blank grid substituted for a hidden graph answer: `[-5, 5]` on both
    /// axes, arrows at both ends, no axis numbering, already in print mode.
    pub fn empty_coordinate() -> Self {
        Self {
            render_engine: default_render_engine(),
            math_bounds: MathBounds::symmetric(5.0),
            options: GraphOptions {
                x_axis_arrow_mode: Some(ArrowMode::Both),
                y_axis_arrow_mode: Some(ArrowMode::Both),
                x_axis_numbers: Some(false),
                y_axis_numbers: Some(false),
                extra: Map::new(),
            },
            print_mode: true,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_coordinate_serializes_to_fixed_config() {
        let value = serde_json::to_value(GraphConfig::empty_coordinate()).unwrap();
        assert_eq!(
            value,
            json!({
                "renderEngine": "desmos",
                "mathBounds": { "left": -5.0, "right": 5.0, "bottom": -5.0, "top": 5.0 },
                "options": {
                    "xAxisArrowMode": "BOTH",
                    "yAxisArrowMode": "BOTH",
                    "xAxisNumbers": false,
                    "yAxisNumbers": false
                },
                "printMode": true
            })
        );
    }

    #[test]
    fn test_unknown_keys_are_preserved() {
        let raw = json!({
            "renderEngine": "desmos",
            "mathBounds": { "left": -1, "right": 1, "bottom": -1, "top": 1 },
            "options": { "xAxisNumbers": true, "showGrid": false },
            "expressions": [{ "latex": "y=x^2" }]
        });

        let config: GraphConfig = serde_json::from_value(raw).unwrap();
        assert!(!config.print_mode);
        assert_eq!(config.options.x_axis_numbers, Some(true));
        assert_eq!(config.options.extra.get("showGrid"), Some(&json!(false)));
        assert!(config.extra.contains_key("expressions"));

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["expressions"][0]["latex"], "y=x^2");
        assert_eq!(back["options"]["showGrid"], false);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: GraphConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config.render_engine, DEFAULT_RENDER_ENGINE);
        assert_eq!(config.math_bounds, MathBounds::symmetric(10.0));
    }

    #[test]
    fn test_partial_bounds_are_completed() {
        let config: GraphConfig =
            serde_json::from_value(json!({ "mathBounds": { "left": -2, "right": 3 } })).unwrap();
        assert_eq!(
            config.math_bounds,
            MathBounds {
                left: -2.0,
                right: 3.0,
                bottom: -10.0,
                top: 10.0
            }
        );
    }
}
