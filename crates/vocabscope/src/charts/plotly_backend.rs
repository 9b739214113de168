//! # Interactive (plotly) Backend

use plotly::{
    Histogram,
    Layout,
    Plot,
    common::{Anchor, Title},
    histogram::{Bins, HistNorm},
    layout::{Annotation, Axis, BarMode, Margin, Shape, ShapeLine, ShapeType},
};

use crate::charts::{
    Chart,
    length_figure::{
        HISTOGRAM_BAR_GAP,
        HISTOGRAM_BAR_GROUP_GAP,
        HISTOGRAM_OPACITY,
        LENGTH_AXIS_TITLE,
        LengthFigure,
        PERCENTAGE_AXIS_TITLE,
    },
    venn_figure::VennFigure,
};

/// Build the plotly figure of a Venn diagram.
pub fn venn_plot(figure: &VennFigure) -> Plot {
    let shapes: Vec<Shape> = figure
        .shapes()
        .iter()
        .map(|shape| {
            Shape::new()
                .shape_type(ShapeType::Circle)
                .x_ref("x")
                .y_ref("y")
                .x0(shape.x0)
                .y0(shape.y0)
                .x1(shape.x1)
                .y1(shape.y1)
                .fill_color(shape.color.name)
                .line(ShapeLine::new().color(shape.color.name))
                .opacity(shape.opacity)
        })
        .collect();

    let annotations: Vec<Annotation> = figure
        .annotations()
        .iter()
        .map(|annotation| {
            Annotation::new()
                .x_ref("x")
                .y_ref("y")
                .x(annotation.x)
                .y(annotation.y)
                .text(annotation.text.as_str())
                .show_arrow(false)
        })
        .collect();

    let bounds = figure.axis_bounds();
    let x_axis = Axis::new()
        .range(vec![bounds.x_min, bounds.x_max])
        .show_tick_labels(false)
        .tick_length(0);
    let y_axis = Axis::new()
        .range(vec![bounds.y_min, bounds.y_max])
        .scale_anchor("x")
        .show_tick_labels(false)
        .tick_length(0);

    let (width, height) = figure_size(figure.pixel_size());
    let mut layout = Layout::new()
        .plot_background_color("white")
        .margin(Margin::new().bottom(0).left(10).pad(0).right(10).top(40))
        .width(width)
        .height(height)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .shapes(shapes)
        .annotations(annotations);
    if let Some(title) = figure.title() {
        layout = layout.title(Title::with_text(title).x(0.5).x_anchor(Anchor::Center));
    }

    let mut plot = Plot::new();
    plot.set_layout(layout);
    plot
}

/// Build the plotly figure of overlaid token length histograms.
///
/// The raw samples are emitted with `histnorm = percent`; the bins are pinned
/// to the shared unit bins of [`LengthFigure::histogram`].
pub fn length_plot(figure: &LengthFigure) -> Plot {
    let bins = figure.histogram().bins();
    let (start, end) = (*bins.start() as f64 - 0.5, *bins.end() as f64 + 0.5);

    let mut plot = Plot::new();
    for series in figure.series() {
        let trace = Histogram::new(series.lengths.clone())
            .name(series.name.as_str())
            .opacity(HISTOGRAM_OPACITY)
            .hist_norm(HistNorm::Percent)
            .x_bins(Bins::new(start, end, 1.0));
        plot.add_trace(trace);
    }

    let layout = Layout::new()
        .title(Title::with_text(figure.title()))
        .x_axis(Axis::new().title(Title::with_text(LENGTH_AXIS_TITLE)))
        .y_axis(Axis::new().title(Title::with_text(PERCENTAGE_AXIS_TITLE)))
        .bar_mode(BarMode::Overlay)
        .bar_gap(HISTOGRAM_BAR_GAP)
        .bar_group_gap(HISTOGRAM_BAR_GROUP_GAP);
    plot.set_layout(layout);
    plot
}

fn figure_size((width, height): (u32, u32)) -> (usize, usize) {
    (width as usize, height as usize)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::{
        TokenKind,
        Vocabulary,
        charts::length_figure::LENGTH_FIGURE_TITLE,
        types::VSHashSet,
    };

    fn plot_json(plot: &Plot) -> Value {
        serde_json::from_str(&plot.to_json()).unwrap()
    }

    #[test]
    fn test_venn_plot() {
        let a: VSHashSet<&str> = ["a", "ab"].into_iter().collect();
        let b: VSHashSet<&str> = ["ab", "abc"].into_iter().collect();
        let figure = VennFigure::from_sets(&[&a, &b], Some(&["A", "B"]), Some("Overlap")).unwrap();
        let json = plot_json(&venn_plot(&figure));
        let layout = &json["layout"];

        let shapes = layout["shapes"].as_array().unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0]["type"], "circle");
        assert_eq!(shapes[0]["xref"], "x");
        assert_eq!(shapes[0]["fillcolor"], "FireBrick");
        assert_eq!(shapes[1]["fillcolor"], "DodgerBlue");
        assert_eq!(shapes[1]["opacity"], 0.75);

        let annotations = layout["annotations"].as_array().unwrap();
        assert_eq!(annotations.len(), 5);
        assert!(annotations.iter().all(|a| a["showarrow"] == false));
        assert_eq!(annotations[0]["text"], "A");
        assert_eq!(annotations[4]["text"], "1");

        let bounds = figure.axis_bounds();
        assert_eq!(layout["xaxis"]["range"][0], bounds.x_min);
        assert_eq!(layout["yaxis"]["range"][1], bounds.y_max);
        assert_eq!(layout["yaxis"]["scaleanchor"], "x");
        // scaleratio defaults to 1 once the y axis is anchored to x.
        assert!(layout["yaxis"].get("scaleratio").is_none());
        assert!(layout["xaxis"].get("scaleanchor").is_none());
        assert_eq!(layout["xaxis"]["showticklabels"], false);
        assert_eq!(layout["width"], 800);
        assert_eq!(layout["height"], 400);
        assert_eq!(layout["title"]["text"], "Overlap");
        assert_eq!(layout["title"]["x"], 0.5);
        assert_eq!(layout["title"]["xanchor"], "center");
    }

    #[test]
    fn test_length_plot() {
        let vocabs = vec![
            Vocabulary::from_tokens(TokenKind::Bpe, ["a", "ab"]),
            Vocabulary::from_tokens(TokenKind::WordPiece, ["abcd"]),
        ];
        let figure = LengthFigure::from_vocabularies(&vocabs);
        let json = plot_json(&length_plot(&figure));

        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["type"], "histogram");
        assert_eq!(data[0]["name"], "BPE");
        assert_eq!(data[0]["histnorm"], "percent");
        assert_eq!(data[0]["opacity"], 0.6);
        assert_eq!(data[1]["x"], serde_json::json!([4]));
        assert_eq!(data[1]["xbins"]["start"], 0.5);
        assert_eq!(data[1]["xbins"]["end"], 4.5);

        let layout = &json["layout"];
        assert_eq!(layout["barmode"], "overlay");
        assert_eq!(layout["title"]["text"], LENGTH_FIGURE_TITLE);
        assert_eq!(layout["xaxis"]["title"]["text"], "Token Length");
        assert_eq!(layout["yaxis"]["title"]["text"], "Percentage");
    }
}
