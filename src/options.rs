use serde::{Deserialize, Serialize};
use snowflakes::{Color, SnowConfig};

/// Options accepted by [`attach`](crate::attach). Every field may be omitted.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnowOptions {
    pub color: Option<Color>,
    pub thin_color: Option<Color>,
    /// Stroke widths are given in device pixels; they default to density-scaled 1.5 and 0.5.
    pub stroke: Option<f64>,
    pub thin_stroke: Option<f64>,
    pub inset_top: Option<f64>,
    pub density: Option<f64>,
}

impl SnowOptions {
    /// Fills the blanks, taking `device_density` when no density was given.
    pub fn into_config(self, device_density: f64) -> SnowConfig {
        let density = self.density.unwrap_or(device_density);

        SnowConfig::new(
            self.color.unwrap_or(Color::WHITE),
            self.thin_color.unwrap_or(Color::WHITE),
            self.inset_top.unwrap_or(0.0),
            density,
        )
        .with_strokes(
            self.stroke.unwrap_or(SnowConfig::DEFAULT_STROKE * density),
            self.thin_stroke.unwrap_or(SnowConfig::DEFAULT_THIN_STROKE * density),
        )
    }
}
