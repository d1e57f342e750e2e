//! Chart layout pass and drag selection.

use std::ops::{Range, RangeInclusive};

use super::path::{smooth_path, PathSegment};
use super::{ChartStyle, Color, DataPoint, Point, Rect, Size, TextMeasurer, TextSize, ValueLabel};

/// Gap between the viewport top and the selected-value bubble above it.
const VALUE_LABEL_GAP: f32 = 10.0;
const LINE_STROKE_WIDTH: f32 = 3.0;
const MARKER_RADIUS: f32 = 10.0;
const SELECTED_MARKER_RADIUS: f32 = 15.0;
const SELECTED_HELPER_LINE_FACTOR: f32 = 1.5;

type SelectionCallback = Box<dyn FnMut(Option<&DataPoint>) + Send>;
type LabelWidthCallback = Box<dyn FnMut(f32) + Send>;

// ─── Display list ────────────────────────────────────────────────────────────

/// A text item, positioned by its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub origin: Point,
    pub size: TextSize,
    pub color: Color,
}

/// A straight helper line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub color: Color,
    pub thickness: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerFill {
    Filled,
    Outlined { stroke_width: f32 },
}

/// A circle drawn on a data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
    pub fill: MarkerFill,
}

/// A visible data point mapped into canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    /// Index into the chart's full data sequence.
    pub index: usize,
    pub position: Point,
}

/// Immutable result of one layout pass.
///
/// Draw items are listed back to front: helper lines, labels, path, markers,
/// then the selected-value label.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub canvas: Size,
    pub viewport: Rect,
    /// Horizontal stride between neighboring points.
    pub x_label_width: f32,
    /// Visible indices into the full data sequence.
    pub visible: Range<usize>,
    pub min_y: f32,
    pub max_y: f32,
    pub helper_lines: Vec<Line>,
    pub x_labels: Vec<Label>,
    pub y_labels: Vec<Label>,
    pub points: Vec<ChartPoint>,
    pub path: Vec<PathSegment>,
    pub line_color: Color,
    pub line_width: f32,
    pub markers: Vec<Marker>,
    pub value_label: Option<Label>,
}

impl ChartFrame {
    /// The point nearest to `touch_x` among those within half a label width of it.
    ///
    /// Returns the index into the full data sequence.
    pub fn hit_test(&self, touch_x: f32) -> Option<usize> {
        let tolerance = self.x_label_width / 2.0;
        self.points
            .iter()
            .map(|p| (p.index, (p.position.x - touch_x).abs()))
            .filter(|(_, distance)| *distance <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }
}

// ─── LineChart ───────────────────────────────────────────────────────────────

/// Interactive line chart over a window of data points.
pub struct LineChart {
    data_points: Vec<DataPoint>,
    style: ChartStyle,
    visible: RangeInclusive<usize>,
    unit: String,
    selected: Option<usize>,
    show_helper_lines: bool,
    showing_data_points: bool,
    x_label_width: f32,
    on_selected_data_point: Option<SelectionCallback>,
    on_x_label_width_change: Option<LabelWidthCallback>,
}

impl LineChart {
    pub fn new(
        data_points: Vec<DataPoint>,
        style: ChartStyle,
        visible: RangeInclusive<usize>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            data_points,
            style,
            visible,
            unit: unit.into(),
            selected: None,
            show_helper_lines: true,
            showing_data_points: false,
            x_label_width: 0.0,
            on_selected_data_point: None,
            on_x_label_width_change: None,
        }
    }

    /// Pre-select a point by index into the full sequence. Selecting shows the markers.
    pub fn with_selected(mut self, index: Option<usize>) -> Self {
        self.set_selected(index);
        self
    }

    pub fn with_helper_lines(mut self, show: bool) -> Self {
        self.show_helper_lines = show;
        self
    }

    /// Called with the new point when a drag selects one, `None` when it clears.
    pub fn on_selected_data_point(
        mut self,
        callback: impl FnMut(Option<&DataPoint>) + Send + 'static,
    ) -> Self {
        self.on_selected_data_point = Some(Box::new(callback));
        self
    }

    /// Called whenever a render computes a different x-label width.
    ///
    /// Hosts use it to work out how many points fit on screen.
    pub fn on_x_label_width_change(mut self, callback: impl FnMut(f32) + Send + 'static) -> Self {
        self.on_x_label_width_change = Some(Box::new(callback));
        self
    }

    pub fn set_selected(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.data_points.len());
        self.showing_data_points = self.selected.is_some();
    }

    pub fn set_visible(&mut self, visible: RangeInclusive<usize>) {
        self.visible = visible;
    }

    pub fn set_data_points(&mut self, data_points: Vec<DataPoint>) {
        self.data_points = data_points;
        self.selected = self.selected.filter(|i| *i < self.data_points.len());
    }

    pub fn data_points(&self) -> &[DataPoint] {
        &self.data_points
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_point(&self) -> Option<&DataPoint> {
        self.selected.and_then(|i| self.data_points.get(i))
    }

    pub fn is_showing_data_points(&self) -> bool {
        self.showing_data_points
    }

    pub fn x_label_width(&self) -> f32 {
        self.x_label_width
    }

    /// Visible window as a half-open range, clamped to the data.
    fn visible_range(&self) -> Range<usize> {
        let len = self.data_points.len();
        let start = (*self.visible.start()).min(len);
        let end = self.visible.end().saturating_add(1).min(len);
        if self.visible.is_empty() || start >= end {
            start..start
        } else {
            start..end
        }
    }

    fn update_x_label_width(&mut self, width: f32) {
        if width == self.x_label_width {
            return;
        }
        self.x_label_width = width;
        if let Some(callback) = self.on_x_label_width_change.as_mut() {
            callback(width);
        }
    }

    /// Lay the chart out on a `canvas` of the given size.
    pub fn render(&mut self, canvas: Size, measurer: &dyn TextMeasurer) -> ChartFrame {
        let visible = self.visible_range();
        let font_size = self.style.label_font_size;

        let (min_y, max_y) = {
            let visible_points = &self.data_points[visible.clone()];
            let max = visible_points.iter().map(|p| p.y).reduce(f32::max).unwrap_or(0.0);
            let min = visible_points.iter().map(|p| p.y).reduce(f32::min).unwrap_or(0.0);
            (min, max)
        };

        // ── X label metrics ──────────────────────────────────────────────
        let x_label_sizes: Vec<TextSize> = self.data_points[visible.clone()]
            .iter()
            .map(|p| measurer.measure(&p.x_label, font_size))
            .collect();
        let max_x_label_width = x_label_sizes.iter().map(|s| s.width).fold(0.0, f32::max);
        let max_x_label_height = x_label_sizes.iter().map(|s| s.height).fold(0.0, f32::max);
        let max_x_label_lines = x_label_sizes.iter().map(|s| s.line_count).max().unwrap_or(0);
        let line_height = if max_x_label_lines > 0 {
            max_x_label_height / max_x_label_lines as f32
        } else {
            0.0
        };

        let style = &self.style;
        let viewport_height = (canvas.height
            - (max_x_label_height
                + 2.0 * style.vertical_padding
                + line_height
                + style.x_axis_label_spacing))
            .max(0.0);

        // ── Y labels ─────────────────────────────────────────────────────
        let label_viewport_height = viewport_height + line_height;
        let label_stride = line_height + style.min_y_label_spacing;
        let label_count = if visible.is_empty() || label_stride <= 0.0 {
            0
        } else {
            (label_viewport_height / label_stride).floor() as usize
        };

        let y_label_texts: Vec<String> = if label_count == 0 {
            Vec::new()
        } else {
            let increment = (max_y - min_y) / label_count as f32;
            (0..=label_count)
                .map(|i| {
                    ValueLabel {
                        value: max_y - increment * i as f32,
                        unit: &self.unit,
                    }
                    .formatted()
                })
                .collect()
        };
        let y_label_sizes: Vec<TextSize> = y_label_texts
            .iter()
            .map(|t| measurer.measure(t, font_size))
            .collect();
        let max_y_label_width = y_label_sizes.iter().map(|s| s.width).fold(0.0, f32::max);

        // ── Viewport ─────────────────────────────────────────────────────
        let viewport = Rect {
            left: 2.0 * style.horizontal_padding + max_y_label_width,
            top: style.vertical_padding + line_height + VALUE_LABEL_GAP,
            right: canvas.width,
            bottom: style.vertical_padding + line_height + VALUE_LABEL_GAP + viewport_height,
        };

        let x_label_width = max_x_label_width + style.x_axis_label_spacing;
        let selected_offset = self
            .selected
            .filter(|i| visible.contains(i))
            .map(|i| i - visible.start);
        let last_offset = visible.len().checked_sub(1);

        // ── Data points → canvas ─────────────────────────────────────────
        let y_span = max_y - min_y;
        let points: Vec<ChartPoint> = visible
            .clone()
            .enumerate()
            .map(|(offset, index)| {
                let x = viewport.left + offset as f32 * x_label_width + x_label_width / 2.0;
                // [min_y, max_y] -> [0, 1]; a flat window has no span to divide by.
                let ratio = if y_span.is_finite() && y_span > 0.0 {
                    (self.data_points[index].y - min_y) / y_span
                } else {
                    0.0
                };
                let y = viewport.bottom - ratio * viewport_height;
                ChartPoint {
                    index,
                    position: Point::new(x, y),
                }
            })
            .collect();

        let mut helper_lines = Vec::new();

        // ── X labels ─────────────────────────────────────────────────────
        let mut x_labels = Vec::with_capacity(x_label_sizes.len());
        let mut value_label = None;
        for (offset, size) in x_label_sizes.iter().enumerate() {
            let is_selected = selected_offset == Some(offset);
            let color = if is_selected {
                style.selected_color
            } else {
                style.unselected_color
            };
            let x = viewport.left + style.x_axis_label_spacing / 2.0 + x_label_width * offset as f32;
            let y = viewport.bottom + style.x_axis_label_spacing;
            x_labels.push(Label {
                text: self.data_points[visible.start + offset].x_label.clone(),
                origin: Point::new(x, y),
                size: *size,
                color,
            });

            if self.show_helper_lines {
                let center_x = x + size.width / 2.0;
                helper_lines.push(Line {
                    start: Point::new(center_x, viewport.top),
                    end: Point::new(center_x, viewport.bottom),
                    color,
                    thickness: if is_selected {
                        style.helper_lines_thickness * SELECTED_HELPER_LINE_FACTOR
                    } else {
                        style.helper_lines_thickness
                    },
                });
            }

            if is_selected {
                let text = ValueLabel {
                    value: self.data_points[visible.start + offset].y,
                    unit: &self.unit,
                }
                .formatted();
                let text_size = measurer.measure(&text, font_size);
                let anchor_x = points[offset].position.x;
                let text_x = if Some(offset) == last_offset {
                    anchor_x - text_size.width
                } else {
                    anchor_x - text_size.width / 2.0
                };
                // Keep the bubble fully on the canvas.
                let text_x = text_x.min(canvas.width - text_size.width).max(0.0);
                value_label = Some(Label {
                    text,
                    origin: Point::new(text_x, viewport.top - text_size.height - VALUE_LABEL_GAP),
                    size: text_size,
                    color: style.selected_color,
                });
            }
        }

        // ── Y labels (right-aligned in the left gutter) ──────────────────
        let mut y_labels = Vec::with_capacity(y_label_texts.len());
        if label_count > 0 {
            let required_height = line_height * (label_count + 1) as f32;
            let space_between = (label_viewport_height - required_height) / label_count as f32;
            for (i, (text, size)) in y_label_texts.into_iter().zip(&y_label_sizes).enumerate() {
                let x = style.horizontal_padding + max_y_label_width - size.width;
                let y = viewport.top + i as f32 * (line_height + space_between) - line_height / 2.0;
                if self.show_helper_lines {
                    let center_y = y + size.height / 2.0;
                    helper_lines.push(Line {
                        start: Point::new(viewport.left, center_y),
                        end: Point::new(viewport.right, center_y),
                        color: style.unselected_color,
                        thickness: style.helper_lines_thickness,
                    });
                }
                y_labels.push(Label {
                    text,
                    origin: Point::new(x, y),
                    size: *size,
                    color: style.unselected_color,
                });
            }
        }

        // ── Path + markers ───────────────────────────────────────────────
        let positions: Vec<Point> = points.iter().map(|p| p.position).collect();
        let path = smooth_path(&positions);

        let mut markers = Vec::new();
        if self.showing_data_points {
            for (offset, point) in points.iter().enumerate() {
                markers.push(Marker {
                    center: point.position,
                    radius: MARKER_RADIUS,
                    color: style.selected_color,
                    fill: MarkerFill::Filled,
                });
                if selected_offset == Some(offset) {
                    markers.push(Marker {
                        center: point.position,
                        radius: SELECTED_MARKER_RADIUS,
                        color: Color::WHITE,
                        fill: MarkerFill::Filled,
                    });
                    markers.push(Marker {
                        center: point.position,
                        radius: SELECTED_MARKER_RADIUS,
                        color: style.selected_color,
                        fill: MarkerFill::Outlined {
                            stroke_width: LINE_STROKE_WIDTH,
                        },
                    });
                }
            }
        }

        let frame = ChartFrame {
            canvas,
            viewport,
            x_label_width,
            visible,
            min_y,
            max_y,
            helper_lines,
            x_labels,
            y_labels,
            points,
            path,
            line_color: style.chart_line_color,
            line_width: LINE_STROKE_WIDTH,
            markers,
            value_label,
        };

        self.update_x_label_width(x_label_width);
        frame
    }

    /// Handle a horizontal drag at `touch_x` against the last rendered `frame`.
    ///
    /// Selects the hit point and shows markers, or clears the selection and hides
    /// them when the touch lands on nothing visible. Returns the new selection.
    pub fn on_horizontal_drag(&mut self, frame: &ChartFrame, touch_x: f32) -> Option<&DataPoint> {
        let hit = frame
            .hit_test(touch_x)
            .filter(|i| frame.visible.contains(i) && *i < self.data_points.len());

        match hit {
            Some(index) => {
                self.showing_data_points = true;
                let changed = self.selected != Some(index);
                self.selected = Some(index);
                if changed {
                    if let Some(callback) = self.on_selected_data_point.as_mut() {
                        callback(self.data_points.get(index));
                    }
                }
            }
            None => {
                self.showing_data_points = false;
                if self.selected.take().is_some() {
                    if let Some(callback) = self.on_selected_data_point.as_mut() {
                        callback(None);
                    }
                }
            }
        }
        self.selected_point()
    }
}

impl std::fmt::Debug for LineChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineChart")
            .field("data_points", &self.data_points.len())
            .field("visible", &self.visible)
            .field("unit", &self.unit)
            .field("selected", &self.selected)
            .field("show_helper_lines", &self.show_helper_lines)
            .field("showing_data_points", &self.showing_data_points)
            .field("x_label_width", &self.x_label_width)
            .finish()
    }
}
