//! Chart surface contract
//!
//! Chart builders only ever mutate a surface through this trait. The crate's
//! own implementation is the retained [`Plot`](crate::plot::Plot) model, which
//! the SVG/HTML/JSON renderers read back.

use serde::Serialize;

/// One of the four axes around the data area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Bottom,
    Left,
    Right,
    Top,
}

/// Anchor of a tick label relative to its tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Alignment {
    #[default]
    UpperCenter,
    MiddleRight,
    MiddleLeft,
    MiddleCenter,
}

/// Labelled position on an axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

impl Tick {
    pub fn new(position: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Colour from hue (degrees), saturation and lightness in `[0, 1]`
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One pie slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fill: Color,
}

/// Presentation of a pie series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieStyle {
    /// Outward offset of each slice, as a fraction of the radius
    pub explode_fraction: f64,
    pub show_slice_labels: bool,
    /// Label distance from the centre, as a multiple of the radius
    pub slice_label_distance: f64,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            explode_fraction: 0.0,
            show_slice_labels: false,
            slice_label_distance: 1.2,
        }
    }
}

/// Rotation (degrees) and anchor of an axis' tick labels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TickLabelStyle {
    pub rotation: f32,
    pub alignment: Alignment,
}

/// Padding added around the data when an axis range is autoscaled, as a
/// fraction of the data span
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 0.05,
            right: 0.05,
            bottom: 0.1,
            top: 0.15,
        }
    }
}

/// Rendered size of a piece of text, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PixelSize {
    pub width: f32,
    pub height: f32,
}

/// Operations a plotting backend must provide to the chart builders
pub trait ChartSurface {
    /// Remove all series, ticks, limits and annotations
    fn clear(&mut self);

    /// Bars at x = 0, 1, 2... with the given heights
    fn add_bars(&mut self, heights: &[f64]);

    /// Points connected in order
    fn add_scatter(&mut self, xs: &[f64], ys: &[f64]);

    fn add_pie(&mut self, slices: Vec<PieSlice>, style: PieStyle);

    /// Replace automatic ticks on `axis` with exactly these
    fn set_manual_ticks(&mut self, axis: Axis, ticks: Vec<Tick>);

    /// Place a tick every `interval` data units on `axis`
    fn set_tick_interval(&mut self, axis: Axis, interval: f64);

    /// Visible data range of `axis`
    fn set_limits(&mut self, axis: Axis, min: f64, max: f64);

    /// Autoscale padding for axes without explicit limits
    fn set_margins(&mut self, margins: Margins);

    fn set_grid_visible(&mut self, axis: Axis, visible: bool);

    fn set_tick_label_style(&mut self, axis: Axis, style: TickLabelStyle);

    /// Size `text` would take as a tick label on `axis`
    fn measure_text(&self, axis: Axis, text: &str) -> PixelSize;

    /// Smallest pixel size the panel of `axis` may shrink to
    fn set_minimum_axis_size(&mut self, axis: Axis, size: f32);

    /// Hide every axis frame and the grid
    fn hide_axes_and_grid(&mut self);

    /// Free-floating caption over the data area
    fn add_annotation(&mut self, text: &str);
}
