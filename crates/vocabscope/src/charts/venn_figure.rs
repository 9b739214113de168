//! # Venn Figures
//!
//! Converts a [`VennLayout`] into chart primitives: one filled circle shape
//! per set, and borderless text annotations for the set and subset labels,
//! on a pair of 1:1 axes padded around the circles.

use std::{
    collections::HashSet,
    hash::{BuildHasher, Hash},
};

use plotters::{
    coord::Shift,
    prelude::{DrawingArea, DrawingBackend},
};

use crate::{
    VSResult,
    charts::{
        Chart,
        RenderOptions,
        display::show,
        palette::{NamedColor, venn_color},
        plotly_backend,
        static_backend,
    },
    venn::{Bounds, Point, VennLayout},
};

/// Opacity of the set circles.
pub const VENN_OPACITY: f64 = 0.75;

/// Padding between the circles and the axis edges, in layout units.
pub const VENN_AXIS_MARGIN: f64 = 0.2;

/// Pixel size of Venn figures.
pub const VENN_FIGURE_SIZE: (u32, u32) = (800, 400);

/// File stem of Venn figure outputs.
pub const VENN_FILE_STEM: &str = "venn";

/// A filled circle, by its bounding box in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    /// Left edge.
    pub x0: f64,

    /// Bottom edge.
    pub y0: f64,

    /// Right edge.
    pub x1: f64,

    /// Top edge.
    pub y1: f64,

    /// Fill and line color.
    pub color: NamedColor,

    /// Shape opacity.
    pub opacity: f64,
}

impl CircleShape {
    /// The circle's center.
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }

    /// The circle's radius.
    pub fn radius(&self) -> f64 {
        0.5 * (self.x1 - self.x0)
    }
}

/// Which label an annotation carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    /// The name of a set.
    SetLabel,

    /// The size of an exclusive region.
    SubsetLabel,
}

/// A borderless text annotation in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    /// x position of the text center.
    pub x: f64,

    /// y position of the text center.
    pub y: f64,

    /// The text; may be empty.
    pub text: String,

    /// The label kind.
    pub kind: AnnotationKind,
}

/// A Venn diagram, as chart shapes and annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct VennFigure {
    title: Option<String>,
    shapes: Vec<CircleShape>,
    annotations: Vec<TextAnnotation>,
    axis_bounds: Bounds,
    size: (u32, u32),
}

impl VennFigure {
    /// Convert a layout into a figure.
    pub fn from_layout(
        layout: &VennLayout,
        title: Option<&str>,
    ) -> Self {
        let shapes = layout
            .circles()
            .iter()
            .enumerate()
            .map(|(i, circle)| {
                let bounds = circle.bounds();
                CircleShape {
                    x0: bounds.x_min,
                    y0: bounds.y_min,
                    x1: bounds.x_max,
                    y1: bounds.y_max,
                    color: venn_color(i),
                    opacity: VENN_OPACITY,
                }
            })
            .collect();

        let set_labels = layout.set_labels().iter().map(|label| TextAnnotation {
            x: label.position.x,
            y: label.position.y,
            text: label.text.clone(),
            kind: AnnotationKind::SetLabel,
        });
        let subset_labels = layout.subset_labels().iter().map(|label| TextAnnotation {
            x: label.position.x,
            y: label.position.y,
            text: label.text.clone(),
            kind: AnnotationKind::SubsetLabel,
        });
        let annotations = set_labels.chain(subset_labels).collect();

        let axis_bounds = layout.bounds().padded(VENN_AXIS_MARGIN);
        log::debug!("venn axis bounds: {axis_bounds:?}");

        Self {
            title: title.map(str::to_string),
            shapes,
            annotations,
            axis_bounds,
            size: VENN_FIGURE_SIZE,
        }
    }

    /// Lay out `sets` and convert the layout into a figure.
    ///
    /// See [`VennLayout::from_sets`] for how `labels` are applied.
    pub fn from_sets<T, S>(
        sets: &[&HashSet<T, S>],
        labels: Option<&[&str]>,
        title: Option<&str>,
    ) -> VSResult<Self>
    where
        T: Eq + Hash,
        S: BuildHasher,
    {
        let layout = VennLayout::from_sets(sets, labels)?;
        Ok(Self::from_layout(&layout, title))
    }

    /// The figure title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// One circle shape per set.
    pub fn shapes(&self) -> &[CircleShape] {
        &self.shapes
    }

    /// All annotations: the set labels, then the subset labels.
    pub fn annotations(&self) -> &[TextAnnotation] {
        &self.annotations
    }

    /// The set label annotations.
    pub fn set_label_annotations(&self) -> impl Iterator<Item = &TextAnnotation> {
        self.annotations_of(AnnotationKind::SetLabel)
    }

    /// The subset label annotations.
    pub fn subset_label_annotations(&self) -> impl Iterator<Item = &TextAnnotation> {
        self.annotations_of(AnnotationKind::SubsetLabel)
    }

    fn annotations_of(
        &self,
        kind: AnnotationKind,
    ) -> impl Iterator<Item = &TextAnnotation> {
        self.annotations.iter().filter(move |a| a.kind == kind)
    }

    /// The x and y axis ranges; the y axis is scale-locked to the x axis.
    pub fn axis_bounds(&self) -> Bounds {
        self.axis_bounds
    }
}

impl Chart for VennFigure {
    fn file_stem(&self) -> &str {
        VENN_FILE_STEM
    }

    fn pixel_size(&self) -> (u32, u32) {
        self.size
    }

    fn to_plot(&self) -> plotly::Plot {
        plotly_backend::venn_plot(self)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> VSResult<()> {
        static_backend::draw_venn(self, root)
    }
}

/// Draw the Venn diagram of 2 or 3 sets, and display it.
///
/// `labels` are only applied when there is one per set; see [`VennLayout::from_sets`].
pub fn render_venn<T, S>(
    sets: &[&HashSet<T, S>],
    labels: Option<&[&str]>,
    title: Option<&str>,
    options: &RenderOptions,
) -> VSResult<()>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    let figure = VennFigure::from_sets(sets, labels, title)?;
    show(&figure, options)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{VocabscopeError, charts::palette::VENN_PALETTE, types::VSHashSet};

    fn set(items: &[&str]) -> VSHashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn texts<'a>(annotations: impl Iterator<Item = &'a TextAnnotation>) -> Vec<&'a str> {
        annotations.map(|a| a.text.as_str()).collect()
    }

    #[test]
    fn test_two_set_figure() {
        let a = set(&["a", "ab"]);
        let b = set(&["ab", "abc"]);
        let figure = VennFigure::from_sets(&[&a, &b], Some(&["A", "B"]), Some("Tokens")).unwrap();

        assert_eq!(figure.title(), Some("Tokens"));
        assert_eq!(figure.pixel_size(), (800, 400));
        assert_eq!(figure.shapes().len(), 2);
        assert_eq!(texts(figure.set_label_annotations()), vec!["A", "B"]);
        assert_eq!(texts(figure.subset_label_annotations()), vec!["1", "1", "1"]);
        assert_eq!(figure.annotations().len(), 5);

        for (i, shape) in figure.shapes().iter().enumerate() {
            assert_eq!(shape.color, VENN_PALETTE[i % 3]);
            assert_eq!(shape.opacity, 0.75);
            assert!((shape.x1 - shape.x0 - (shape.y1 - shape.y0)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_three_set_figure() {
        let a = set(&["a", "ab", "ac", "abc"]);
        let b = set(&["b", "ab", "bc", "abc"]);
        let c = set(&["c", "ac", "bc", "abc"]);
        let figure = VennFigure::from_sets(&[&a, &b, &c], None, None).unwrap();

        assert_eq!(figure.title(), None);
        assert_eq!(figure.shapes().len(), 3);
        assert_eq!(figure.set_label_annotations().count(), 3);
        assert_eq!(figure.subset_label_annotations().count(), 7);
        assert_eq!(
            texts(figure.subset_label_annotations()),
            vec!["1", "1", "1", "1", "1", "1", "1"]
        );
        let colors: Vec<&str> = figure.shapes().iter().map(|s| s.color.name).collect();
        assert_eq!(colors, vec!["FireBrick", "DodgerBlue", "DimGrey"]);
    }

    #[test]
    fn test_identical_vocabularies() {
        let v = set(&["the", "##ing", "▁a", "b"]);
        let figure = VennFigure::from_sets(&[&v, &v, &v], Some(&["BPE", "Wordpiece", "Unigram"]), None)
            .unwrap();
        let subsets = texts(figure.subset_label_annotations());
        assert_eq!(subsets.len(), 7);
        assert_eq!(subsets[6], "4");
        for text in &subsets[..6] {
            assert!(text.is_empty() || *text == "0", "{subsets:?}");
        }
    }

    #[test]
    fn test_arity_error() {
        let a = set(&["a"]);
        assert!(matches!(
            VennFigure::from_sets(&[&a], None, None),
            Err(VocabscopeError::Arity { count: 1 })
        ));
    }

    fn strictly_padded(figure: &VennFigure) -> bool {
        let axis = figure.axis_bounds();
        figure.shapes().iter().all(|s| {
            axis.x_min < s.x0 - VENN_AXIS_MARGIN + 1e-9
                && axis.x_max > s.x1 + VENN_AXIS_MARGIN - 1e-9
                && axis.y_min < s.y0 - VENN_AXIS_MARGIN + 1e-9
                && axis.y_max > s.y1 + VENN_AXIS_MARGIN - 1e-9
                && axis.x_min < s.x0
                && axis.x_max > s.x1
                && axis.y_min < s.y0
                && axis.y_max > s.y1
        })
    }

    proptest! {
        #[test]
        fn prop_axis_contains_padded_circles(sizes in proptest::collection::vec(0usize..50, 7)) {
            let figure = VennFigure::from_layout(
                &VennLayout::from_subset_sizes(&sizes, None).unwrap(),
                None,
            );
            prop_assert!(strictly_padded(&figure));

            let sizes2 = &sizes[..3];
            let figure = VennFigure::from_layout(
                &VennLayout::from_subset_sizes(sizes2, None).unwrap(),
                None,
            );
            prop_assert!(strictly_padded(&figure));
            prop_assert_eq!(figure.subset_label_annotations().count(), 3);
        }
    }
}
