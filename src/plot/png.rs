//! Rasterise `BarChart`s to PNG with Plotters.
//!
//! Bars are drawn as a `Histogram` over a segmented category axis, so each
//! category label sits centred under (or beside) its bar.

use std::path::Path;

use plotters::coord::Shift;
use plotters::coord::ranged1d::SegmentedCoord;
use plotters::coord::types::RangedCoordu32;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

use crate::error::AppError;
use crate::plot::font::FONT_FAMILY;
use crate::plot::palette;
use crate::plot::series::{Bar, BarChart, Orientation};

/// Light grey for value-axis grid lines on the white background.
const GRID: RGBColor = RGBColor(0xdd, 0xdd, 0xdd);
const AXIS: RGBColor = RGBColor(0x33, 0x33, 0x33);

/// Category-axis tick length in pixels.
const TICK: i32 = 5;
/// Space between the x axis and the start of a rotated label.
const ROTATED_LABEL_GAP: i32 = 10;

/// Draw `chart` into a PNG at `path`, replacing any existing file.
///
/// The chart font must already be registered (see `plot::font::ensure_font`).
pub fn render_bar_chart(chart: &BarChart, path: &Path) -> Result<(), AppError> {
    draw_png(chart, path)
        .map_err(|e| AppError::render(format!("Failed to render chart '{}': {e}", path.display())))?;
    debug!(path = %path.display(), bars = chart.bars.len(), "chart rendered");
    Ok(())
}

fn draw_png(chart: &BarChart, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, chart.size).into_drawing_area();
    draw_chart(chart, &root)?;
    root.present()?;
    Ok(())
}

/// Category axis with exactly one segment per bar.
///
/// Plotters' integer ranges include their end and `into_segmented` adds a
/// trailing segment, so `n` bars need the range `0..n - 1`. A single-value
/// range cannot be mapped, so a lone bar keeps a second, empty slot.
fn category_axis(n_bars: usize) -> SegmentedCoord<RangedCoordu32> {
    let last = (n_bars as u32).max(2) - 1;
    (0u32..last).into_segmented()
}

/// Rotated labels read top to bottom and hang from their anchor point.
fn rotated_label_style() -> TextStyle<'static> {
    TextStyle::from((FONT_FAMILY, 14).into_font().transform(FontTransform::Rotate90))
        .pos(Pos::new(HPos::Left, VPos::Center))
}

/// Draw `chart` onto `root`.
///
/// Returns the anchor of every rotated category label in bar order (empty when
/// labels are not rotated).
fn draw_chart<DB>(
    chart: &BarChart,
    root: &DrawingArea<DB, Shift>,
) -> Result<Vec<(i32, i32)>, Box<dyn std::error::Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let n_bars = chart.bars.len();
    let slots = category_axis(n_bars).size() - 1;
    let value_max = chart.value_axis_max();
    let colors = palette::viridis(n_bars);
    let rotate = chart.rotate_category_labels && chart.orientation == Orientation::Vertical;
    let category_area = if rotate { 140 } else { 60 };

    let mut builder = ChartBuilder::on(root);
    builder.caption(&chart.title, (FONT_FAMILY, 26)).margin(20);

    let mut anchors = Vec::new();

    match chart.orientation {
        Orientation::Vertical => {
            let mut ctx = builder
                .x_label_area_size(category_area)
                .y_label_area_size(80)
                .build_cartesian_2d(category_axis(n_bars), 0u32..value_max)?;

            ctx.configure_mesh()
                .disable_x_mesh()
                .bold_line_style(&GRID)
                .light_line_style(&WHITE)
                .axis_style(&AXIS)
                .set_tick_mark_size(LabelAreaPosition::Bottom, TICK)
                .x_labels(slots + 1)
                // The mesh re-anchors its labels, so rotated ones are drawn below.
                .x_label_formatter(&|v| {
                    if rotate {
                        String::new()
                    } else {
                        category_label(&chart.bars, v, false)
                    }
                })
                .x_label_style((FONT_FAMILY, 16))
                .y_label_style((FONT_FAMILY, 14))
                .x_desc(chart.category_desc.as_str())
                .y_desc(chart.value_desc.as_str())
                .axis_desc_style((FONT_FAMILY, 18))
                .draw()?;

            ctx.draw_series(
                Histogram::vertical(&ctx)
                    .margin(8)
                    .style_func(|slot, _| bar_style(&colors, slot, slots, false))
                    .data(chart.bars.iter().enumerate().map(|(i, b)| (i as u32, b.value))),
            )?;

            if rotate {
                let style = rotated_label_style();
                for (i, bar) in chart.bars.iter().enumerate() {
                    let (x, y) = ctx.backend_coord(&(SegmentValue::CenterOf(i as u32), 0));
                    let anchor = (x, y + ROTATED_LABEL_GAP);
                    root.draw(&Text::new(bar.label.as_str(), anchor, style.clone()))?;
                    anchors.push(anchor);
                }
            }
        }
        Orientation::Horizontal => {
            let mut ctx = builder
                .x_label_area_size(60)
                .y_label_area_size(category_area)
                .build_cartesian_2d(0u32..value_max, category_axis(n_bars))?;

            ctx.configure_mesh()
                .disable_y_mesh()
                .bold_line_style(&GRID)
                .light_line_style(&WHITE)
                .axis_style(&AXIS)
                .y_labels(slots + 1)
                .y_label_formatter(&|v| category_label(&chart.bars, v, true))
                .y_label_style((FONT_FAMILY, 16))
                .x_label_style((FONT_FAMILY, 14))
                .x_desc(chart.value_desc.as_str())
                .y_desc(chart.category_desc.as_str())
                .axis_desc_style((FONT_FAMILY, 18))
                .draw()?;

            // Slot 0 is the bottom row; the first bar belongs on top.
            let top = slots - 1;
            ctx.draw_series(
                Histogram::horizontal(&ctx)
                    .margin(8)
                    .style_func(|slot, _| bar_style(&colors, slot, slots, true))
                    .data(
                        chart
                            .bars
                            .iter()
                            .enumerate()
                            .map(|(i, b)| ((top - i) as u32, b.value)),
                    ),
            )?;
        }
    }

    Ok(anchors)
}

/// Index into `bars` for a category-axis slot.
///
/// `top_down` axes count slots from the top, so the first bar sits highest.
fn bar_index(slot: &SegmentValue<u32>, n_bars: usize, n_slots: usize, top_down: bool) -> Option<usize> {
    let raw = match slot {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i as usize,
        SegmentValue::Last => return None,
    };
    if raw >= n_slots {
        return None;
    }
    let idx = if top_down { n_slots - 1 - raw } else { raw };
    (idx < n_bars).then_some(idx)
}

fn category_label(bars: &[Bar], slot: &SegmentValue<u32>, top_down: bool) -> String {
    // Tick marks at segment edges get no label; only centres are named.
    if !matches!(slot, SegmentValue::CenterOf(_)) {
        return String::new();
    }
    let n_slots = category_axis(bars.len()).size() - 1;
    bar_index(slot, bars.len(), n_slots, top_down)
        .map(|i| bars[i].label.clone())
        .unwrap_or_default()
}

fn bar_style(colors: &[RGBColor], slot: &SegmentValue<u32>, n_slots: usize, top_down: bool) -> ShapeStyle {
    let color = bar_index(slot, colors.len(), n_slots, top_down)
        .and_then(|i| colors.get(i).copied())
        .unwrap_or(AXIS);
    color.filled()
}
