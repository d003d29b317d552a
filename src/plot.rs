//! Retained chart model
//!
//! `Plot` records everything the chart builders ask of a surface. Renderers
//! read it back to produce SVG, HTML or JSON.

use crate::surface::{
    Axis, ChartSurface, Margins, PieSlice, PieStyle, PixelSize, Tick, TickLabelStyle,
};
use plotters::style::IntoFont;
use serde::Serialize;

/// Font family used for every piece of chart text
pub const FONT_FAMILY: &str = "sans-serif";

/// A data series on a plot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Series {
    Bars { heights: Vec<f64> },
    Scatter { xs: Vec<f64>, ys: Vec<f64> },
    Pie { slices: Vec<PieSlice>, style: PieStyle },
}

/// How an axis chooses its ticks
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TickSpec {
    #[default]
    Automatic,
    Manual { ticks: Vec<Tick> },
    Interval { step: f64 },
}

/// State of one axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisState {
    pub ticks: TickSpec,
    pub limits: Option<(f64, f64)>,
    pub grid_visible: bool,
    pub label_style: TickLabelStyle,
    pub minimum_size: f32,
}

impl Default for AxisState {
    fn default() -> Self {
        Self {
            ticks: TickSpec::Automatic,
            limits: None,
            grid_visible: true,
            label_style: TickLabelStyle::default(),
            minimum_size: 0.0,
        }
    }
}

/// One chart: its series, axes and captions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plot {
    pub series: Vec<Series>,
    pub bottom: AxisState,
    pub left: AxisState,
    pub right: AxisState,
    pub top: AxisState,
    pub annotations: Vec<String>,
    pub margins: Margins,
    pub frame_visible: bool,
    /// Tick label font size in pixels
    pub font_size: f32,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            bottom: AxisState::default(),
            left: AxisState::default(),
            right: AxisState::default(),
            top: AxisState::default(),
            annotations: Vec::new(),
            margins: Margins::default(),
            frame_visible: true,
            font_size: 12.0,
        }
    }
}

impl Plot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(&self, axis: Axis) -> &AxisState {
        match axis {
            Axis::Bottom => &self.bottom,
            Axis::Left => &self.left,
            Axis::Right => &self.right,
            Axis::Top => &self.top,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::Bottom => &mut self.bottom,
            Axis::Left => &mut self.left,
            Axis::Right => &mut self.right,
            Axis::Top => &mut self.top,
        }
    }

    pub fn has_data(&self) -> bool {
        self.series.iter().any(|s| match s {
            Series::Bars { heights } => !heights.is_empty(),
            Series::Scatter { xs, .. } => !xs.is_empty(),
            Series::Pie { slices, .. } => !slices.is_empty(),
        })
    }

    /// Pie series, if this plot holds one
    pub fn pie(&self) -> Option<(&[PieSlice], &PieStyle)> {
        self.series.iter().find_map(|s| match s {
            Series::Pie { slices, style } => Some((slices.as_slice(), style)),
            _ => None,
        })
    }
}

impl ChartSurface for Plot {
    fn clear(&mut self) {
        *self = Plot {
            font_size: self.font_size,
            ..Plot::default()
        };
    }

    fn add_bars(&mut self, heights: &[f64]) {
        self.series.push(Series::Bars {
            heights: heights.to_vec(),
        });
    }

    fn add_scatter(&mut self, xs: &[f64], ys: &[f64]) {
        let n = xs.len().min(ys.len());
        self.series.push(Series::Scatter {
            xs: xs[..n].to_vec(),
            ys: ys[..n].to_vec(),
        });
    }

    fn add_pie(&mut self, slices: Vec<PieSlice>, style: PieStyle) {
        self.series.push(Series::Pie { slices, style });
    }

    fn set_manual_ticks(&mut self, axis: Axis, ticks: Vec<Tick>) {
        self.axis_mut(axis).ticks = TickSpec::Manual { ticks };
    }

    fn set_tick_interval(&mut self, axis: Axis, interval: f64) {
        self.axis_mut(axis).ticks = TickSpec::Interval { step: interval };
    }

    fn set_limits(&mut self, axis: Axis, min: f64, max: f64) {
        self.axis_mut(axis).limits = Some((min, max));
    }

    fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    fn set_grid_visible(&mut self, axis: Axis, visible: bool) {
        self.axis_mut(axis).grid_visible = visible;
    }

    fn set_tick_label_style(&mut self, axis: Axis, style: TickLabelStyle) {
        self.axis_mut(axis).label_style = style;
    }

    fn measure_text(&self, _axis: Axis, text: &str) -> PixelSize {
        let font = (FONT_FAMILY, f64::from(self.font_size)).into_font();
        match font.box_size(text) {
            Ok((width, height)) => PixelSize {
                width: width as f32,
                height: height as f32,
            },
            Err(err) => {
                tracing::debug!("cannot measure {:?}: {}", text, err);
                PixelSize::default()
            }
        }
    }

    fn set_minimum_axis_size(&mut self, axis: Axis, size: f32) {
        self.axis_mut(axis).minimum_size = size;
    }

    fn hide_axes_and_grid(&mut self) {
        self.frame_visible = false;
        for axis in [Axis::Bottom, Axis::Left, Axis::Right, Axis::Top] {
            self.axis_mut(axis).grid_visible = false;
        }
    }

    fn add_annotation(&mut self, text: &str) {
        self.annotations.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Color;

    #[test]
    fn test_new_plot_is_empty() {
        let plot = Plot::new();
        assert!(plot.series.is_empty());
        assert!(!plot.has_data());
        assert!(plot.frame_visible);
        assert!(plot.left.grid_visible);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut plot = Plot::new();
        plot.add_bars(&[1.0, 2.0]);
        plot.set_limits(Axis::Left, 0.0, 3.0);
        plot.set_minimum_axis_size(Axis::Right, 40.0);
        plot.set_margins(Margins {
            bottom: 0.0,
            ..Margins::default()
        });
        plot.add_annotation("Count");
        plot.hide_axes_and_grid();

        plot.clear();
        assert_eq!(plot, Plot::new());
    }

    #[test]
    fn test_scatter_truncates_to_shorter_input() {
        let mut plot = Plot::new();
        plot.add_scatter(&[0.0, 1.0, 2.0], &[5.0, 6.0]);
        assert_eq!(
            plot.series[0],
            Series::Scatter {
                xs: vec![0.0, 1.0],
                ys: vec![5.0, 6.0]
            }
        );
    }

    #[test]
    fn test_axis_settings_land_on_the_right_axis() {
        let mut plot = Plot::new();
        plot.set_tick_interval(Axis::Left, 1.0);
        plot.set_manual_ticks(Axis::Bottom, vec![Tick::new(0.0, "CPU")]);
        plot.set_grid_visible(Axis::Bottom, false);

        assert_eq!(plot.left.ticks, TickSpec::Interval { step: 1.0 });
        assert!(matches!(plot.bottom.ticks, TickSpec::Manual { ref ticks } if ticks.len() == 1));
        assert!(!plot.bottom.grid_visible);
        assert!(plot.left.grid_visible);
        assert_eq!(plot.top.ticks, TickSpec::Automatic);
    }

    #[test]
    fn test_measure_text_grows_with_length() {
        let plot = Plot::new();
        let short = plot.measure_text(Axis::Bottom, "CPU");
        let long = plot.measure_text(Axis::Bottom, "TextureProcessor");
        assert!(long.width > short.width);
        assert_eq!(short.height, long.height);
        assert_eq!(plot.measure_text(Axis::Bottom, "").width, 0.0);
    }

    #[test]
    fn test_measure_text_grows_with_font_size() {
        let mut plot = Plot::new();
        let small = plot.measure_text(Axis::Bottom, "TextureProcessor");
        plot.font_size = 24.0;
        let large = plot.measure_text(Axis::Bottom, "TextureProcessor");
        assert!(large.width > small.width);
        assert!(large.height > small.height);
    }

    #[test]
    fn test_pie_accessor() {
        let mut plot = Plot::new();
        assert!(plot.pie().is_none());
        plot.add_pie(
            vec![PieSlice {
                label: "Texture 100.00 %".to_string(),
                value: 100.0,
                fill: Color::RED,
            }],
            PieStyle::default(),
        );
        let (slices, _) = plot.pie().unwrap();
        assert_eq!(slices.len(), 1);
        assert!(plot.has_data());
    }
}
