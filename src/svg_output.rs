//! SVG rendering of a [`Plot`] on the `plotters` SVG backend
//!
//! Framed plots (bars, scatter) become a cartesian chart with a mesh, category
//! tick labels and a frame; plots with a hidden frame (the pie) are drawn
//! centred with no coordinate system.

use crate::plot::{AxisState, Plot, Series, TickSpec, FONT_FAMILY};
use crate::surface::{self, Alignment, Axis, ChartSurface, PieSlice, PieStyle, Tick};
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::{
    ChartBuilder, Circle, DrawingArea, FontTransform, IntoDrawingArea, IntoFont, LineSeries,
    PathElement, Polygon, RGBColor, Rectangle, SVGBackend, TextStyle, WHITE,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::Color as _;
use std::f64::consts::PI;

type Canvas<'a> = DrawingArea<SVGBackend<'a>, Shift>;

const SERIES_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const GRID_COLOR: RGBColor = RGBColor(0xe5, 0xe7, 0xeb);
const TEXT_COLOR: RGBColor = RGBColor(0x37, 0x41, 0x51);
const NOTE_FILL: RGBColor = RGBColor(0xff, 0xff, 0xe0);
const NOTE_BORDER: RGBColor = RGBColor(0x9c, 0xa3, 0xaf);
const LEFT_MARGIN: u32 = 50;
const TOP_MARGIN: u32 = 20;
const MIN_RIGHT_MARGIN: u32 = 20;
const MIN_DATA_EXTENT: u32 = 40;
const TICK_LENGTH: i32 = 5;
const MAX_TICKS: usize = 25;
/// Arc resolution of pie slices, in points per full turn
const PIE_SEGMENTS: f64 = 360.0;

/// Escape text for use in SVG/HTML content and attributes
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Pixel sizes of the label areas around the data area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LabelAreas {
    left: u32,
    right: u32,
    bottom: u32,
}

/// Data range on one axis; both ends finite and `min < max`
#[derive(Debug, Clone, Copy, PartialEq)]
struct Range {
    min: f64,
    max: f64,
}

impl Range {
    fn new(min: f64, max: f64) -> Self {
        let min = if min.is_finite() { min } else { 0.0 };
        let max = if max.is_nan() { min } else { max.min(f64::MAX) };
        let span = max - min;
        if span.is_finite() && span > f64::EPSILON * min.abs().max(1.0) {
            Self { min, max }
        } else if span.is_finite() {
            Self {
                min,
                max: min + min.abs().max(1.0),
            }
        } else {
            // a span wider than f64 can hold: keep the upper end, start at 0
            Self {
                min: 0.0,
                max: max.max(1.0),
            }
        }
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }

    fn contains(&self, v: f64) -> bool {
        let eps = self.span() * 1e-9;
        v >= self.min - eps && v <= self.max + eps
    }

    /// Widen by fractions of the span on each side
    fn pad(&self, low: f64, high: f64) -> Self {
        let span = self.span();
        Range::new(self.min - span * low, self.max + span * high)
    }

    fn as_std(&self) -> std::ops::Range<f64> {
        self.min..self.max
    }
}

/// SVG renderer with a fixed canvas size
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render `plot` as an `<svg>` element
    pub fn render(&self, plot: &Plot) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height))
                .into_drawing_area();
            root.fill(&WHITE)?;

            let annotation_origin = if plot.frame_visible {
                self.draw_framed(&root, plot)?
            } else {
                if let Some((slices, style)) = plot.pie() {
                    self.draw_pie(&root, plot, slices, style)?;
                }
                (0, 0)
            };

            draw_annotations(&root, plot, annotation_origin)?;
            root.present()?;
        }
        Ok(svg)
    }

    fn label_areas(&self, plot: &Plot) -> LabelAreas {
        let extent = tick_label_extent(plot, &plot.bottom);
        let bottom = extent.max(plot.bottom.minimum_size.ceil() as u32);
        let right = MIN_RIGHT_MARGIN.max(plot.right.minimum_size.ceil() as u32);

        // never let reserved panels squeeze the data area away
        let max_right = self.width.saturating_sub(LEFT_MARGIN + MIN_DATA_EXTENT);
        let max_bottom = self.height.saturating_sub(TOP_MARGIN + MIN_DATA_EXTENT);

        LabelAreas {
            left: LEFT_MARGIN,
            right: right.min(max_right),
            bottom: bottom.min(max_bottom),
        }
    }

    /// Draw a cartesian chart; returns the data area's upper-left pixel
    fn draw_framed(&self, root: &Canvas<'_>, plot: &Plot) -> Result<(i32, i32)> {
        let areas = self.label_areas(plot);
        let x_range = x_range(plot);
        let y_range = y_range(plot);

        let mut chart = ChartBuilder::on(root)
            .margin_top(TOP_MARGIN)
            .y_label_area_size(areas.left)
            .right_y_label_area_size(areas.right)
            .x_label_area_size(areas.bottom)
            .build_cartesian_2d(x_range.as_std(), y_range.as_std())?;

        let label_style = text_style(plot.font_size);
        let value_label = |v: &f64| format_number(*v);
        let bottom_manual = matches!(plot.bottom.ticks, TickSpec::Manual { .. });

        {
            let mut mesh = chart.configure_mesh();
            mesh.label_style(label_style)
                .axis_style(TEXT_COLOR)
                .bold_line_style(GRID_COLOR)
                .max_light_lines(0)
                .y_labels(label_count(&plot.left, y_range))
                .y_label_formatter(&value_label)
                .x_label_formatter(&value_label);
            if !plot.left.grid_visible {
                mesh.disable_y_mesh();
            }
            if bottom_manual {
                // category labels are placed below, one per tick
                mesh.disable_x_mesh().x_labels(0);
            } else {
                mesh.x_labels(label_count(&plot.bottom, x_range));
                if !plot.bottom.grid_visible {
                    mesh.disable_x_mesh();
                }
            }
            mesh.draw()?;
        }

        let bottom_ticks = match &plot.bottom.ticks {
            TickSpec::Manual { ticks } => visible_ticks(ticks, x_range),
            _ => Vec::new(),
        };

        if plot.bottom.grid_visible {
            chart.draw_series(bottom_ticks.iter().map(|tick| {
                PathElement::new(
                    vec![(tick.position, y_range.min), (tick.position, y_range.max)],
                    GRID_COLOR,
                )
            }))?;
        }

        for series in &plot.series {
            match series {
                Series::Bars { heights } => {
                    let base = 0.0_f64.clamp(y_range.min, y_range.max);
                    chart.draw_series(heights.iter().enumerate().map(|(i, h)| {
                        let top = if h.is_finite() {
                            h.clamp(y_range.min, y_range.max)
                        } else {
                            base
                        };
                        Rectangle::new(
                            [(i as f64 - 0.4, base), (i as f64 + 0.4, top)],
                            SERIES_COLOR.filled(),
                        )
                    }))?;
                }
                Series::Scatter { xs, ys } => {
                    let points: Vec<(f64, f64)> = xs
                        .iter()
                        .zip(ys)
                        .filter(|(x, y)| x.is_finite() && y.is_finite())
                        .map(|(x, y)| (*x, y.clamp(y_range.min, y_range.max)))
                        .collect();
                    if points.is_empty() {
                        continue;
                    }
                    chart.draw_series(LineSeries::new(
                        points.iter().copied(),
                        SERIES_COLOR.stroke_width(2),
                    ))?;
                    chart.draw_series(
                        points
                            .iter()
                            .map(|p| Circle::new(*p, 3, SERIES_COLOR.filled())),
                    )?;
                }
                // pies are only drawn on frameless plots
                Series::Pie { .. } => {}
            }
        }

        chart.draw_series(std::iter::once(Rectangle::new(
            [(x_range.min, y_range.min), (x_range.max, y_range.max)],
            TEXT_COLOR.stroke_width(1),
        )))?;

        let tick_style = bottom_label_style(plot);
        for tick in &bottom_ticks {
            let (x, y) = chart.backend_coord(&(tick.position, y_range.min));
            root.draw(&PathElement::new(
                vec![(x, y), (x, y + TICK_LENGTH)],
                TEXT_COLOR,
            ))?;
            root.draw_text(&tick.label, &tick_style, (x, y + TICK_LENGTH + 3))?;
        }

        Ok(chart.plotting_area().get_base_pixel())
    }

    fn draw_pie(
        &self,
        root: &Canvas<'_>,
        plot: &Plot,
        slices: &[PieSlice],
        style: &PieStyle,
    ) -> Result<()> {
        let total: f64 = slices
            .iter()
            .map(|s| s.value)
            .filter(|v| v.is_finite() && *v > 0.0)
            .sum();
        if total <= 0.0 || !total.is_finite() {
            return Ok(());
        }

        let (width, height) = (f64::from(self.width), f64::from(self.height));
        let reach = style.slice_label_distance.max(1.0 + style.explode_fraction) + 0.15;
        let radius = (width.min(height) / 2.0 / reach).max(1.0);
        let (cx, cy) = (width / 2.0, height / 2.0);
        let point = |ox: f64, oy: f64, r: f64, a: f64| {
            ((ox + r * a.cos()).round() as i32, (oy - r * a.sin()).round() as i32)
        };
        let label_style = text_style(plot.font_size).pos(Pos::new(HPos::Center, VPos::Center));

        let mut start = 0.0_f64;
        for slice in slices {
            let value = slice.value;
            if !value.is_finite() || value <= 0.0 {
                continue;
            }
            let sweep = value / total * 2.0 * PI;
            let mid = start + sweep / 2.0;
            let ox = cx + style.explode_fraction * radius * mid.cos();
            let oy = cy - style.explode_fraction * radius * mid.sin();
            let fill = to_rgb(slice.fill);

            if sweep >= 2.0 * PI - 1e-9 {
                let center = (ox.round() as i32, oy.round() as i32);
                root.draw(&Circle::new(center, radius.round() as i32, fill.filled()))?;
            } else {
                let steps = ((sweep / (2.0 * PI)) * PIE_SEGMENTS).ceil().max(1.0) as usize;
                let mut outline = vec![(ox.round() as i32, oy.round() as i32)];
                outline.extend(
                    (0..=steps).map(|k| point(ox, oy, radius, start + sweep * k as f64 / steps as f64)),
                );
                root.draw(&Polygon::new(outline.clone(), fill.filled()))?;
                outline.push(outline[0]);
                root.draw(&PathElement::new(outline, WHITE))?;
            }

            if style.show_slice_labels {
                let at = point(cx, cy, style.slice_label_distance * radius, mid);
                root.draw_text(&slice.label, &label_style, at)?;
            }

            start += sweep;
        }
        Ok(())
    }
}

fn draw_annotations(root: &Canvas<'_>, plot: &Plot, origin: (i32, i32)) -> Result<()> {
    let style = text_style(plot.font_size).pos(Pos::new(HPos::Left, VPos::Center));
    for (i, text) in plot.annotations.iter().enumerate() {
        let size = plot.measure_text(Axis::Top, text);
        let line = size.height.ceil() as i32 + 8;
        let width = size.width.ceil() as i32 + 10;
        let x = origin.0 + 6;
        let y = origin.1 + 6 + i as i32 * (line + 4);

        root.draw(&Rectangle::new(
            [(x, y), (x + width, y + line)],
            NOTE_FILL.filled(),
        ))?;
        root.draw(&Rectangle::new(
            [(x, y), (x + width, y + line)],
            NOTE_BORDER.stroke_width(1),
        ))?;
        root.draw_text(text, &style, (x + 5, y + line / 2))?;
    }
    Ok(())
}

fn text_style(font_size: f32) -> TextStyle<'static> {
    (FONT_FAMILY, f64::from(font_size))
        .into_font()
        .color(&TEXT_COLOR)
}

/// Category label style: anchor from the alignment, rotation in quarter turns
fn bottom_label_style(plot: &Plot) -> TextStyle<'static> {
    let style = plot.bottom.label_style;
    let pos = match style.alignment {
        Alignment::MiddleRight => Pos::new(HPos::Right, VPos::Center),
        Alignment::MiddleLeft => Pos::new(HPos::Left, VPos::Center),
        Alignment::MiddleCenter => Pos::new(HPos::Center, VPos::Center),
        Alignment::UpperCenter => Pos::new(HPos::Center, VPos::Top),
    };
    text_style(plot.font_size)
        .pos(pos)
        .transform(quarter_turn(style.rotation))
}

/// The SVG backend rotates text in quarter turns only; any tilt picks the
/// quarter turn on the same side
fn quarter_turn(rotation: f32) -> FontTransform {
    let degrees = rotation.rem_euclid(360.0);
    if degrees == 0.0 {
        FontTransform::None
    } else if degrees < 180.0 {
        FontTransform::Rotate90
    } else if degrees > 180.0 {
        FontTransform::Rotate270
    } else {
        FontTransform::Rotate180
    }
}

fn to_rgb(color: surface::Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Pixels needed below the data area for tick marks and labels
fn tick_label_extent(plot: &Plot, axis: &AxisState) -> u32 {
    let (widest, height) = match &axis.ticks {
        TickSpec::Manual { ticks } => ticks.iter().fold((0.0_f32, 0.0_f32), |(w, h), t| {
            let size = plot.measure_text(Axis::Bottom, &t.label);
            (w.max(size.width), h.max(size.height))
        }),
        _ => {
            let size = plot.measure_text(Axis::Bottom, "0000");
            (size.width, size.height)
        }
    };
    let along = match quarter_turn(axis.label_style.rotation) {
        FontTransform::Rotate90 | FontTransform::Rotate270 => widest,
        _ => height,
    };
    TICK_LENGTH as u32 + 6 + along.ceil() as u32
}

fn visible_ticks(ticks: &[Tick], range: Range) -> Vec<Tick> {
    ticks
        .iter()
        .filter(|t| range.contains(t.position))
        .cloned()
        .collect()
}

/// Number of labels to ask the mesh for; never more than `MAX_TICKS`
fn label_count(axis: &AxisState, range: Range) -> usize {
    match &axis.ticks {
        TickSpec::Interval { step } if *step > 0.0 && step.is_finite() => {
            let steps = (range.span() / step).floor();
            if steps.is_finite() && steps < MAX_TICKS as f64 {
                steps as usize + 1
            } else {
                MAX_TICKS
            }
        }
        _ => 6,
    }
}

fn x_range(plot: &Plot) -> Range {
    if let Some((min, max)) = plot.bottom.limits {
        return Range::new(min, max);
    }

    let mut bounds: Option<(f64, f64)> = None;
    let mut widen = |lo: f64, hi: f64| {
        bounds = Some(match bounds {
            Some((a, b)) => (a.min(lo), b.max(hi)),
            None => (lo, hi),
        });
    };
    for series in &plot.series {
        match series {
            Series::Bars { heights } if !heights.is_empty() => {
                widen(-0.5, heights.len() as f64 - 0.5);
            }
            Series::Scatter { xs, .. } => {
                for x in xs.iter().filter(|x| x.is_finite()) {
                    widen(*x, *x);
                }
            }
            _ => {}
        }
    }

    match bounds {
        Some((lo, hi)) if hi > lo => {
            Range::new(lo, hi).pad(plot.margins.left, plot.margins.right)
        }
        Some((lo, _)) => Range::new(lo - 0.5, lo + 0.5),
        None => Range::new(0.0, 1.0),
    }
}

fn y_range(plot: &Plot) -> Range {
    if let Some((min, max)) = plot.left.limits {
        return Range::new(min, max);
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for series in &plot.series {
        let values = match series {
            Series::Bars { heights } => {
                // bars grow from zero
                lo = lo.min(0.0);
                hi = hi.max(0.0);
                heights.as_slice()
            }
            Series::Scatter { ys, .. } => ys.as_slice(),
            Series::Pie { .. } => &[][..],
        };
        for v in values.iter().filter(|v| v.is_finite()) {
            lo = lo.min(*v);
            hi = hi.max(*v);
        }
    }

    if lo.is_finite() && hi.is_finite() {
        Range::new(lo, hi).pad(plot.margins.bottom, plot.margins.top)
    } else {
        Range::new(0.0, 1.0)
    }
}

fn format_number(v: f64) -> String {
    if v.abs() >= 1e15 {
        format!("{:.1e}", v)
    } else if (v - v.round()).abs() < 1e-9 {
        format!("{:.0}", v.round())
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Color, Margins, TickLabelStyle};

    fn renderer() -> SvgRenderer {
        SvgRenderer::new(480, 360)
    }

    fn bar_plot() -> Plot {
        let mut plot = Plot::new();
        plot.add_bars(&[2.0, 1.0]);
        plot.set_manual_ticks(
            Axis::Bottom,
            vec![Tick::new(0.0, "CPU"), Tick::new(1.0, "GPU")],
        );
        plot.set_tick_label_style(
            Axis::Bottom,
            TickLabelStyle {
                rotation: -45.0,
                alignment: Alignment::MiddleRight,
            },
        );
        plot.set_limits(Axis::Left, 0.0, 3.0);
        plot.set_tick_interval(Axis::Left, 1.0);
        plot
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_markup("<script>"), "&lt;script&gt;");
        assert_eq!(escape_markup("a&b"), "a&amp;b");
        assert_eq!(escape_markup("\"q\""), "&quot;q&quot;");
        assert_eq!(escape_markup("'q'"), "&#39;q&#39;");
    }

    #[test]
    fn test_empty_plot_renders_svg() {
        let svg = renderer().render(&Plot::new()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_bars_and_category_labels() {
        let svg = renderer().render(&bar_plot()).unwrap();
        assert!(svg.to_uppercase().matches("#1F77B4").count() >= 2);
        assert!(svg.contains("CPU"));
        assert!(svg.contains("GPU"));
        assert!(svg.contains("rotate(270"));
        assert!(svg.contains("text-anchor=\"end\""));
    }

    #[test]
    fn test_hidden_grid_draws_no_grid_lines() {
        let mut plot = bar_plot();
        plot.set_grid_visible(Axis::Bottom, false);
        plot.set_grid_visible(Axis::Left, false);
        let svg = renderer().render(&plot).unwrap();
        assert!(!svg.to_uppercase().contains("#E5E7EB"));
    }

    #[test]
    fn test_scatter_line_and_markers() {
        let mut plot = Plot::new();
        plot.add_scatter(&[0.0, 1.0], &[3.0, 3.0]);
        plot.set_limits(Axis::Left, 0.0, 3.3);
        let svg = renderer().render(&plot).unwrap();
        assert!(svg.contains("<polyline"));
        assert_eq!(svg.matches("<circle").count(), 2);
    }

    #[test]
    fn test_huge_values_render() {
        let mut plot = Plot::new();
        plot.add_scatter(&[0.0], &[1.7e308]);
        plot.set_limits(Axis::Left, 0.0, f64::MAX);
        plot.set_tick_interval(Axis::Left, 1.0);
        let svg = renderer().render(&plot).unwrap();
        assert!(svg.contains("<circle"));
    }

    #[test]
    fn test_pie_slices_and_labels() {
        let mut plot = Plot::new();
        plot.add_pie(
            vec![
                PieSlice {
                    label: "Texture 42.86 %".to_string(),
                    value: 42.86,
                    fill: Color::RED,
                },
                PieSlice {
                    label: "Shader 57.14 %".to_string(),
                    value: 57.14,
                    fill: Color::BLUE,
                },
            ],
            PieStyle {
                explode_fraction: 0.1,
                show_slice_labels: true,
                slice_label_distance: 1.3,
            },
        );
        plot.hide_axes_and_grid();
        plot.add_annotation("Destination Files Sizes");

        let svg = renderer().render(&plot).unwrap();
        let upper = svg.to_uppercase();
        assert!(upper.contains("#FF0000"));
        assert!(upper.contains("#0000FF"));
        assert_eq!(svg.matches("<polygon").count(), 2);
        assert!(svg.contains("Texture 42.86 %"));
        assert!(svg.contains("Destination Files Sizes"));
    }

    #[test]
    fn test_single_slice_is_full_circle() {
        let mut plot = Plot::new();
        plot.add_pie(
            vec![PieSlice {
                label: "Font 100.00 %".to_string(),
                value: 100.0,
                fill: Color::GREEN,
            }],
            PieStyle::default(),
        );
        plot.hide_axes_and_grid();
        let svg = renderer().render(&plot).unwrap();
        assert!(svg.contains("<circle"));
        assert!(!svg.contains("<polygon"));
        assert!(!svg.contains("Font 100.00 %"));
    }

    #[test]
    fn test_annotation_is_escaped() {
        let mut plot = Plot::new();
        plot.add_annotation("<b>&");
        let svg = renderer().render(&plot).unwrap();
        assert!(!svg.contains("<b>"));
        assert!(svg.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_reserved_panels_grow_label_areas() {
        let mut plot = Plot::new();
        let plain = renderer().label_areas(&plot);
        plot.set_minimum_axis_size(Axis::Right, 120.0);
        plot.set_minimum_axis_size(Axis::Bottom, 150.0);
        let reserved = renderer().label_areas(&plot);
        assert_eq!(reserved.right, 120);
        assert_eq!(reserved.bottom, 150);
        assert!(reserved.right > plain.right);
        assert_eq!(reserved.left, plain.left);
    }

    #[test]
    fn test_reserved_panels_never_consume_canvas() {
        let mut plot = Plot::new();
        plot.set_minimum_axis_size(Axis::Right, 10_000.0);
        plot.set_minimum_axis_size(Axis::Bottom, 10_000.0);
        let areas = SvgRenderer::new(200, 150).label_areas(&plot);
        assert!(200 - areas.left - areas.right >= MIN_DATA_EXTENT);
        assert!(150 - TOP_MARGIN - areas.bottom >= MIN_DATA_EXTENT);
    }

    #[test]
    fn test_rotated_labels_need_their_width() {
        let plot = bar_plot();
        let widest = plot.measure_text(Axis::Bottom, "CPU").width.ceil() as u32;
        assert_eq!(
            tick_label_extent(&plot, &plot.bottom),
            TICK_LENGTH as u32 + 6 + widest
        );
    }

    #[test]
    fn test_range_sanitizing() {
        assert_eq!(Range::new(0.0, 0.0).span(), 1.0);
        let r = Range::new(0.0, f64::INFINITY);
        assert_eq!(r.max, f64::MAX);
        let r = Range::new(f64::NAN, f64::NAN);
        assert!(r.min.is_finite() && r.max > r.min);
        let r = Range::new(-f64::MAX, f64::MAX);
        assert!(r.span().is_finite());
    }

    #[test]
    fn test_label_count_is_bounded() {
        let axis = AxisState {
            ticks: TickSpec::Interval { step: 1.0 },
            ..AxisState::default()
        };
        assert_eq!(label_count(&axis, Range::new(0.0, 3.0)), 4);
        assert_eq!(label_count(&axis, Range::new(0.0, 1000.0)), MAX_TICKS);
        assert_eq!(label_count(&axis, Range::new(0.0, f64::MAX)), MAX_TICKS);
    }

    #[test]
    fn test_autoscale_uses_margins() {
        let mut plot = Plot::new();
        plot.add_bars(&[2.0, 4.0]);
        let padded = y_range(&plot);
        assert!(padded.min < 0.0);

        plot.set_margins(Margins {
            bottom: 0.0,
            ..Margins::default()
        });
        let flush = y_range(&plot);
        assert_eq!(flush.min, 0.0);
        assert!((flush.max - 4.6).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_turn() {
        assert!(matches!(quarter_turn(0.0), FontTransform::None));
        assert!(matches!(quarter_turn(-45.0), FontTransform::Rotate270));
        assert!(matches!(quarter_turn(45.0), FontTransform::Rotate90));
        assert!(matches!(quarter_turn(180.0), FontTransform::Rotate180));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.25), "1.25");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(1.7e308), "1.7e308");
    }
}
