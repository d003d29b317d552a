//! The four dashboard charts
//!
//! Each builder computes its own aggregation, clears its surface and fills it
//! again. Builders share no state.

use crate::aggregate::{self, CategoryCounts, CategorySums};
use crate::columns::ColumnMap;
use crate::config::{PaletteKind, RowPolicy};
use crate::error::Result;
use crate::reader::StatsTable;
use crate::surface::{
    Alignment, Axis, ChartSurface, Color, Margins, PieSlice, PieStyle, Tick, TickLabelStyle,
};

pub const PROCESSOR_TYPES_TITLE: &str = "Count of Processor Type";
pub const CONTENT_TYPES_TITLE: &str = "Count of Content Type";
pub const DESTINATION_SIZES_TITLE: &str = "Destination Files Sizes";
pub const BUILD_SECONDS_TITLE: &str = "Build Seconds";

/// The six colours of the classic palette, in assignment order
pub const CLASSIC_COLORS: [Color; 6] = [
    Color::RED,
    Color::BLUE,
    Color::GREEN,
    Color::YELLOW,
    Color::MAGENTA,
    Color::ORANGE,
];

const CATEGORY_LABEL_STYLE: TickLabelStyle = TickLabelStyle {
    rotation: -45.0,
    alignment: Alignment::MiddleRight,
};

/// Fill colour source for pie slices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    kind: PaletteKind,
}

impl Palette {
    pub fn new(kind: PaletteKind) -> Self {
        Self { kind }
    }

    /// Colour of category `index` out of `count`
    ///
    /// The classic palette repeats every six categories.
    pub fn color(&self, index: usize, count: usize) -> Color {
        match self.kind {
            PaletteKind::Classic => CLASSIC_COLORS[index % CLASSIC_COLORS.len()],
            PaletteKind::Hues => {
                let step = 360.0 / count.max(1) as f64;
                Color::from_hsl(index as f64 * step, 0.75, 0.5)
            }
        }
    }
}

/// Settings shared by all builders for one render pass
#[derive(Debug, Clone, Copy)]
pub struct ChartContext<'a> {
    pub table: &'a StatsTable,
    pub columns: ColumnMap,
    pub policy: RowPolicy,
    pub palette: Palette,
}

/// Bar chart of rows per processor type
///
/// The widest tick label is measured and reserved on the bottom and right
/// axis panels, so rotated labels are not clipped and the data area stays
/// centred. Bars sit directly on the bottom axis (no bottom margin).
pub fn draw_processor_types<S: ChartSurface>(
    surface: &mut S,
    ctx: &ChartContext<'_>,
) -> Result<CategoryCounts> {
    let counts = aggregate::count_by_category(ctx.table, ctx.columns.processor_type, ctx.policy)?;
    surface.clear();

    let ticks = draw_count_bars(surface, &counts);

    let widest = ticks
        .iter()
        .map(|t| surface.measure_text(Axis::Bottom, &t.label).width)
        .fold(0.0_f32, f32::max);
    surface.set_minimum_axis_size(Axis::Bottom, widest);
    surface.set_minimum_axis_size(Axis::Right, widest);

    surface.set_margins(Margins {
        bottom: 0.0,
        ..Margins::default()
    });

    surface.add_annotation(PROCESSOR_TYPES_TITLE);
    Ok(counts)
}

/// Bar chart of rows per content type
///
/// Unlike the processor chart, label widths are not reserved here.
pub fn draw_content_types<S: ChartSurface>(
    surface: &mut S,
    ctx: &ChartContext<'_>,
) -> Result<CategoryCounts> {
    let counts = aggregate::count_by_category(ctx.table, ctx.columns.content_type, ctx.policy)?;
    surface.clear();

    draw_count_bars(surface, &counts);

    surface.add_annotation(CONTENT_TYPES_TITLE);
    Ok(counts)
}

/// Shared bar layout: one bar per category, integer count axis, `[0, max+1]`
fn draw_count_bars<S: ChartSurface>(surface: &mut S, counts: &CategoryCounts) -> Vec<Tick> {
    let ticks = category_ticks(counts.iter().map(|(label, _)| label));

    if let Some(max) = counts.max() {
        let heights: Vec<f64> = counts.values().map(|c| c as f64).collect();
        surface.add_bars(&heights);
        surface.set_manual_ticks(Axis::Bottom, ticks.clone());
        surface.set_limits(Axis::Left, 0.0, max as f64 + 1.0);
    }

    surface.set_tick_interval(Axis::Left, 1.0);
    surface.set_grid_visible(Axis::Bottom, false);
    surface.set_grid_visible(Axis::Left, true);
    surface.set_tick_label_style(Axis::Bottom, CATEGORY_LABEL_STYLE);

    ticks
}

/// Pie chart of each content type's share of the total output size
pub fn draw_destination_sizes<S: ChartSurface>(
    surface: &mut S,
    ctx: &ChartContext<'_>,
) -> Result<CategorySums> {
    let sizes = aggregate::sum_by_category(
        ctx.table,
        ctx.columns.content_type,
        ctx.columns.destination_size,
        ctx.policy,
    )?;
    surface.clear();

    let shares = aggregate::percentages(&sizes);
    let count = shares.len();
    let slices: Vec<PieSlice> = shares
        .iter()
        .enumerate()
        .map(|(i, (category, percent))| PieSlice {
            label: slice_label(category, *percent),
            value: *percent,
            fill: ctx.palette.color(i, count),
        })
        .collect();

    if !slices.is_empty() {
        surface.add_pie(
            slices,
            PieStyle {
                explode_fraction: 0.1,
                show_slice_labels: true,
                slice_label_distance: 1.3,
            },
        );
    }
    surface.hide_axes_and_grid();

    surface.add_annotation(DESTINATION_SIZES_TITLE);
    Ok(sizes)
}

/// `"<category> <percent with two decimals> %"`
pub fn slice_label(category: &str, percent: f64) -> String {
    format!("{} {:.2} %", category, percent)
}

/// Line of total build seconds per content type, with 10% headroom
pub fn draw_build_seconds<S: ChartSurface>(
    surface: &mut S,
    ctx: &ChartContext<'_>,
) -> Result<CategorySums> {
    let seconds = aggregate::sum_by_category(
        ctx.table,
        ctx.columns.content_type,
        ctx.columns.build_seconds,
        ctx.policy,
    )?;
    surface.clear();

    if let Some(max) = seconds.max() {
        let xs: Vec<f64> = (0..seconds.len()).map(|i| i as f64).collect();
        let ys: Vec<f64> = seconds.values().collect();
        surface.add_scatter(&xs, &ys);
        surface.set_manual_ticks(
            Axis::Bottom,
            category_ticks(seconds.iter().map(|(label, _)| label)),
        );
        // 1.1 × max can leave the f64 range even when max itself is finite
        let upper = max * 1.1;
        surface.set_limits(Axis::Left, 0.0, if upper.is_finite() { upper } else { f64::MAX });
    }
    surface.set_tick_label_style(Axis::Bottom, CATEGORY_LABEL_STYLE);

    surface.add_annotation(BUILD_SECONDS_TITLE);
    Ok(seconds)
}

fn category_ticks<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<Tick> {
    labels
        .enumerate()
        .map(|(i, label)| Tick::new(i as f64, label))
        .collect()
}
