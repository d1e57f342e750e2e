//! Headless line chart with a smooth path and selection hit-testing.
//!
//! The host hands in data points, a [`ChartStyle`] and a [`TextMeasurer`];
//! [`LineChart::render`] returns a [`ChartFrame`] display list the host draws
//! with whatever canvas it has. The same frame is what drag gestures are
//! hit-tested against.

pub mod line_chart;
pub mod path;

pub use line_chart::{ChartFrame, ChartPoint, Label, Line, LineChart, Marker, MarkerFill};
pub use path::{smooth_path, PathSegment};

use crate::domain::price_history::CoinPrice;
use crate::shared::fmt::num;
use chrono::Timelike;
use rust_decimal::prelude::ToPrimitive;

// ─── Geometry ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// From a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// Visual configuration. Every length is in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub chart_line_color: Color,
    pub unselected_color: Color,
    pub selected_color: Color,
    pub helper_lines_thickness: f32,
    pub axis_lines_thickness: f32,
    pub label_font_size: f32,
    pub min_y_label_spacing: f32,
    pub vertical_padding: f32,
    pub horizontal_padding: f32,
    pub x_axis_label_spacing: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            chart_line_color: Color::BLACK,
            unselected_color: Color::from_argb(0xFF7C7C7C),
            selected_color: Color::BLACK,
            helper_lines_thickness: 1.0,
            axis_lines_thickness: 5.0,
            label_font_size: 14.0,
            min_y_label_spacing: 25.0,
            vertical_padding: 8.0,
            horizontal_padding: 8.0,
            x_axis_label_spacing: 8.0,
        }
    }
}

// ─── Data ────────────────────────────────────────────────────────────────────

/// One plotted sample.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub x: f32,
    pub y: f32,
    pub x_label: String,
}

impl From<&CoinPrice> for DataPoint {
    /// Hour of day on x, price on y, labelled `"6PM\n10/17"`.
    fn from(price: &CoinPrice) -> Self {
        Self {
            x: price.date_time.hour() as f32,
            y: price.price_usd.to_f32().unwrap_or_default(),
            x_label: price.date_time.format("%-I%p\n%-m/%-d").to_string(),
        }
    }
}

/// A y value with its unit, formatted for an axis or a selection bubble.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel<'a> {
    pub value: f32,
    pub unit: &'a str,
}

impl ValueLabel<'_> {
    /// Fewer fraction digits the larger the value: `"6,930$"`, `"404.98$"`, `"0.123$"`.
    pub fn formatted(&self) -> String {
        let fraction_digits = if self.value > 1000.0 {
            0
        } else if self.value >= 2.0 {
            2
        } else {
            3
        };
        format!(
            "{}{}",
            num::display_with_max_decimals(self.value as f64, fraction_digits),
            self.unit
        )
    }
}

// ─── Text measurement ────────────────────────────────────────────────────────

/// Measured extent of a (possibly multi-line) label.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
    pub line_count: usize,
}

/// Supplied by the host: how big a label renders at a font size.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextSize;
}

/// Fixed-advance measurer for headless use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Glyph advance as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line height as a fraction of the font size.
    pub line_height_ratio: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextSize {
        let lines: Vec<&str> = text.split('\n').collect();
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        TextSize {
            width: widest as f32 * font_size * self.advance_ratio,
            height: lines.len() as f32 * font_size * self.line_height_ratio,
            line_count: lines.len(),
        }
    }
}
