//! # Static Image (plotters) Backend
//!
//! Figures are drawn as SVG. Text is emitted as SVG `<text>` elements, so
//! no font rasterizer is needed.

use std::path::Path;

use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    VSResult,
    VocabscopeError,
    charts::{
        Chart,
        length_figure::{
            HISTOGRAM_BAR_GAP,
            HISTOGRAM_OPACITY,
            LENGTH_AXIS_TITLE,
            LengthFigure,
            PERCENTAGE_AXIS_TITLE,
        },
        palette::{NamedColor, series_color},
        venn_figure::VennFigure,
    },
    venn::Bounds,
};

/// Segments used to approximate a circle outline.
const CIRCLE_SEGMENTS: usize = 180;

/// Font family for all chart text.
const FONT_FAMILY: &str = "sans-serif";

fn render_error<E: std::fmt::Display>(err: E) -> VocabscopeError {
    VocabscopeError::Render(err.to_string())
}

fn rgb(color: NamedColor) -> RGBColor {
    let (r, g, b) = color.rgb;
    RGBColor(r, g, b)
}

/// Draw `chart` into an SVG image at `path`.
pub fn write_svg<C: Chart>(
    chart: &C,
    path: &Path,
) -> VSResult<()> {
    log::debug!("drawing svg image: {}", path.display());
    let root = SVGBackend::new(path, chart.pixel_size()).into_drawing_area();
    chart.draw(&root)?;
    root.present().map_err(render_error)
}

/// Grow `bounds` so that one unit spans the same number of pixels on both axes.
///
/// This is the static equivalent of locking the y axis scale to the x axis.
pub fn equal_aspect_bounds(
    bounds: Bounds,
    (width, height): (u32, u32),
) -> Bounds {
    if width == 0 || height == 0 || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return bounds;
    }
    let (width, height) = (width as f64, height as f64);
    let scale = (width / bounds.width()).min(height / bounds.height());
    let (half_w, half_h) = (0.5 * width / scale, 0.5 * height / scale);
    let (cx, cy) = (
        0.5 * (bounds.x_min + bounds.x_max),
        0.5 * (bounds.y_min + bounds.y_max),
    );
    Bounds {
        x_min: cx - half_w,
        x_max: cx + half_w,
        y_min: cy - half_h,
        y_max: cy + half_h,
    }
}

/// Draw a Venn figure.
pub fn draw_venn<DB: DrawingBackend>(
    figure: &VennFigure,
    root: &DrawingArea<DB, Shift>,
) -> VSResult<()> {
    root.fill(&WHITE).map_err(render_error)?;

    let (width, _) = root.dim_in_pixel();
    if let Some(title) = figure.title() {
        let style = (FONT_FAMILY, 20)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(title, (width as i32 / 2, 20), style))
            .map_err(render_error)?;
    }

    // Same margins as the interactive layout.
    let area = root.margin(40, 0, 10, 10);
    let bounds = equal_aspect_bounds(figure.axis_bounds(), area.dim_in_pixel());

    let mut chart = ChartBuilder::on(&area)
        .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
        .map_err(render_error)?;

    for shape in figure.shapes() {
        let center = shape.center();
        let radius = shape.radius();
        let outline: Vec<(f64, f64)> = (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let theta = std::f64::consts::TAU * i as f64 / CIRCLE_SEGMENTS as f64;
                (
                    center.x + radius * theta.cos(),
                    center.y + radius * theta.sin(),
                )
            })
            .collect();
        let style = rgb(shape.color).mix(shape.opacity).filled();
        chart
            .draw_series(std::iter::once(Polygon::new(outline, style)))
            .map_err(render_error)?;
    }

    let label_style = (FONT_FAMILY, 15)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(
            figure
                .annotations()
                .iter()
                .filter(|a| !a.text.is_empty())
                .map(|a| Text::new(a.text.clone(), (a.x, a.y), label_style.clone())),
        )
        .map_err(render_error)?;

    Ok(())
}

/// Draw overlaid token length histograms.
pub fn draw_lengths<DB: DrawingBackend>(
    figure: &LengthFigure,
    root: &DrawingArea<DB, Shift>,
) -> VSResult<()> {
    root.fill(&WHITE).map_err(render_error)?;

    let histogram = figure.histogram();
    let bins = histogram.bins();
    let x_range = (*bins.start() as f64 - 0.5)..(*bins.end() as f64 + 0.5);
    let y_max = match histogram.max_percentage() {
        p if p > 0.0 => p * 1.1,
        _ => 1.0,
    };

    let mut chart = ChartBuilder::on(root)
        .caption(figure.title(), (FONT_FAMILY, 20).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, 0.0..y_max)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .x_desc(LENGTH_AXIS_TITLE)
        .y_desc(PERCENTAGE_AXIS_TITLE)
        .draw()
        .map_err(render_error)?;

    let half_width = 0.5 * (1.0 - HISTOGRAM_BAR_GAP);
    for (index, series) in figure.series().iter().enumerate() {
        let style = rgb(series_color(index)).mix(HISTOGRAM_OPACITY).filled();
        let bars = bins
            .clone()
            .zip(histogram.percentages(index).iter().copied())
            .filter(|&(_, pct)| pct > 0.0)
            .map(move |(length, pct)| {
                let x = length as f64;
                Rectangle::new([(x - half_width, 0.0), (x + half_width, pct)], style)
            });

        chart
            .draw_series(bars)
            .map_err(render_error)?
            .label(series.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], style));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_error)?;

    Ok(())
}
