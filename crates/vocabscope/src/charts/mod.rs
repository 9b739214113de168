//! # Charts
//!
//! Figures are backend-neutral descriptions of a chart. Each [`Chart`] can be
//! converted into an interactive [`plotly::Plot`], or drawn onto a plotters
//! [`DrawingArea`] for static output. [`show`] picks the backend from the
//! [`Renderer`] in a [`RenderOptions`].

use plotters::{
    coord::Shift,
    prelude::{DrawingArea, DrawingBackend},
};

use crate::VSResult;

pub mod display;
pub mod length_figure;
pub mod palette;
pub mod plotly_backend;
pub mod renderer;
pub mod static_backend;
pub mod venn_figure;

#[doc(inline)]
pub use display::{show, show_to};
#[doc(inline)]
pub use length_figure::{LengthFigure, LengthSeries};
#[doc(inline)]
pub use renderer::{ImageFormat, RenderOptions, RenderTarget, Renderer};
#[doc(inline)]
pub use venn_figure::{AnnotationKind, CircleShape, TextAnnotation, VennFigure, render_venn};

/// A figure which can be rendered by every backend.
pub trait Chart {
    /// File stem used for written artifacts.
    fn file_stem(&self) -> &str;

    /// Pixel size of static output.
    fn pixel_size(&self) -> (u32, u32);

    /// Build the interactive figure.
    fn to_plot(&self) -> plotly::Plot;

    /// Draw the static figure onto `root`.
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> VSResult<()>;
}
