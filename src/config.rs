use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Stroke style of one drawing layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

impl StrokeStyle {
    fn new(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
        }
    }
}

/// Configuration of the bin renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Erosion step of the inland point search, in world units. Smaller is slower and more accurate
    pub erosion_step: f64,
    /// Label scale is the inscribed diameter divided by this
    pub label_size_divisor: f64,
    /// Glyph units the label is lowered by so it sits centered on the inland point
    pub label_baseline: f64,
    /// Added to the bin width and height to get the page size
    pub page_padding: f64,
    /// Position of the bin origin on the page (y measured from the page bottom)
    pub origin_offset: [f64; 2],
    pub bin_stroke: StrokeStyle,
    pub piece_stroke: StrokeStyle,
    pub label_stroke: StrokeStyle,
    /// Draw piece id labels
    pub labels: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            erosion_step: 10.0,
            label_size_divisor: 80.0,
            label_baseline: 10.0,
            page_padding: 50.0,
            origin_offset: [25.0, 48.0],
            bin_stroke: StrokeStyle::new("lightgrey", 1.0),
            piece_stroke: StrokeStyle::new("blue", 2.0),
            label_stroke: StrokeStyle::new("black", 1.0),
            labels: true,
        }
    }
}

impl RenderConfig {
    /// Load a JSON config. Missing fields take their default value.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("could not open config file {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("incorrect config file format: {}", path.display()))
    }
}
