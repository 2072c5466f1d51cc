// Per-instance globe settings.
//
// Defaults come from `constants.rs`. A host page can override a subset through
// `data-*` attributes on the canvas; see `GlobeConfig::apply_attribute`.

use super::constants::*;
use thiserror::Error;

/// Attributes read from the canvas element, in application order.
pub const CONFIG_ATTRIBUTES: &[&str] = &[
    "data-points",
    "data-texture",
    "data-dot-color",
    "data-highlight-color",
    "data-sensitivity",
    "data-decay",
];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
    #[error("`{name}`: cannot parse `{value}`")]
    Parse { name: String, value: String },
    #[error("`{name}`: {value} is out of range")]
    OutOfRange { name: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub point_count: usize,
    pub globe_fill: f32,
    pub dot_radius: f32,
    pub min_radius_ratio: f32,
    pub front_opacity: f32,
    pub edge_opacity: f32,
    pub cull_threshold: f32,
    pub drag_sensitivity: f32,
    pub momentum_decay: f32,
    pub momentum_threshold: f32,
    pub hover_radius: f32,
    pub hover_falloff: f32,
    pub hover_opacity_boost: f32,
    pub dot_color: [f32; 3],
    pub highlight_color: [f32; 3],
    pub plane_half_extent: f32,
    /// Texture drawn on the embedded plane; `None` renders dots only.
    pub texture_url: Option<String>,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            globe_fill: GLOBE_FILL,
            dot_radius: DOT_RADIUS,
            min_radius_ratio: MIN_RADIUS_RATIO,
            front_opacity: FRONT_OPACITY,
            edge_opacity: EDGE_OPACITY,
            cull_threshold: CULL_THRESHOLD,
            drag_sensitivity: DRAG_SENSITIVITY,
            momentum_decay: MOMENTUM_DECAY,
            momentum_threshold: MOMENTUM_THRESHOLD,
            hover_radius: HOVER_RADIUS,
            hover_falloff: HOVER_FALLOFF,
            hover_opacity_boost: HOVER_OPACITY_BOOST,
            dot_color: DOT_COLOR,
            highlight_color: HIGHLIGHT_COLOR,
            plane_half_extent: PLANE_HALF_EXTENT,
            texture_url: None,
        }
    }
}

impl GlobeConfig {
    /// Apply one `data-*` override. On error the config is left untouched.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let parse_err = || ConfigError::Parse {
            name: name.to_string(),
            value: value.to_string(),
        };
        let range_err = || ConfigError::OutOfRange {
            name: name.to_string(),
            value: value.to_string(),
        };
        match name {
            "data-points" => {
                let n: usize = value.parse().map_err(|_| parse_err())?;
                if n == 0 {
                    return Err(range_err());
                }
                self.point_count = n;
            }
            "data-texture" => {
                self.texture_url = (!value.is_empty()).then(|| value.to_string());
            }
            "data-dot-color" => {
                self.dot_color = parse_hex_color(value).ok_or_else(parse_err)?;
            }
            "data-highlight-color" => {
                self.highlight_color = parse_hex_color(value).ok_or_else(parse_err)?;
            }
            "data-sensitivity" => {
                let s: f32 = value.parse().map_err(|_| parse_err())?;
                if !(s.is_finite() && s > 0.0) {
                    return Err(range_err());
                }
                self.drag_sensitivity = s;
            }
            "data-decay" => {
                let d: f32 = value.parse().map_err(|_| parse_err())?;
                if !(d > 0.0 && d < 1.0) {
                    return Err(range_err());
                }
                self.momentum_decay = d;
            }
            _ => return Err(ConfigError::UnknownAttribute(name.to_string())),
        }
        Ok(())
    }
}

/// `#rrggbb` (leading `#` optional) to linear 0..1 RGB.
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}
