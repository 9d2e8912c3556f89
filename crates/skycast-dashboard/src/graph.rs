//! Temperature graph layout
//!
//! Down-samples the hourly list and maps temperatures to canvas pixel
//! coordinates. The vertical scale is the batch's own min/max, not a global
//! one, so every graph uses the full drawable height.

use crate::icons::weather_icon;
use crate::round_half_up;
use serde::Serialize;
use skycast_core::ForecastEntry;

/// Canvas dimensions and padding shared with the frontend
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 500.0;
pub const PADDING: f64 = 100.0;

/// Every Nth entry is plotted (indices 0, N, 2N, ...)
pub const DOWNSAMPLE_STRIDE: usize = 4;

/// One plotted point with its labels
#[derive(Debug, Clone, Serialize)]
pub struct GraphPoint {
    pub x: f64,
    pub y: f64,
    /// Rounded temperature label drawn above the point
    pub temp_label: String,
    /// HH:MM slice of the timestamp drawn below the point
    pub time_label: String,
    /// Icon asset drawn above the point
    pub icon: String,
}

/// Full layout for the canvas line graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphLayout {
    pub width: f64,
    pub height: f64,
    pub points: Vec<GraphPoint>,
}

impl GraphLayout {
    /// Down-sample `entries` and lay the points out on the canvas
    ///
    /// Entries without a temperature are excluded: they have no vertical
    /// position. A flat batch (min == max) puts every point at mid-height
    /// instead of dividing by zero.
    pub fn build(entries: &[ForecastEntry]) -> Self {
        let sampled: Vec<&ForecastEntry> = entries
            .iter()
            .step_by(DOWNSAMPLE_STRIDE)
            .filter(|e| e.temperature.is_some())
            .collect();

        let graph_height = CANVAS_HEIGHT - PADDING * 2.0;
        let graph_width = CANVAS_WIDTH - PADDING * 2.0;

        let temps: Vec<f64> = sampled.iter().filter_map(|e| e.temperature).collect();
        let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
        let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let spacing = if sampled.len() > 1 {
            graph_width / (sampled.len() - 1) as f64
        } else {
            0.0
        };

        let temp_to_y = |temp: f64| -> f64 {
            if max > min {
                PADDING + graph_height - ((temp - min) / (max - min)) * graph_height
            } else {
                PADDING + graph_height / 2.0
            }
        };

        let points = sampled
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let temp = e.temperature.unwrap_or(min);
                GraphPoint {
                    x: PADDING + i as f64 * spacing,
                    y: temp_to_y(temp),
                    temp_label: format!("{}°", round_half_up(temp)),
                    time_label: hour_minute(&e.time),
                    icon: weather_icon(&e.weather_desc).to_string(),
                }
            })
            .collect();

        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            points,
        }
    }
}

/// Extract the HH:MM portion of an ISO-like timestamp
fn hour_minute(time: &str) -> String {
    time.split('T')
        .nth(1)
        .map(|t| t.chars().take(5).collect())
        .unwrap_or_default()
}
