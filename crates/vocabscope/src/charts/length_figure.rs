//! # Token Length Figures

use plotters::{
    coord::Shift,
    prelude::{DrawingArea, DrawingBackend},
};

use crate::{
    VSResult,
    Vocabulary,
    charts::{Chart, plotly_backend, static_backend},
    lengths::{LengthHistogram, token_lengths},
};

/// Title of the token length figure.
pub const LENGTH_FIGURE_TITLE: &str = "Token Length Distributions for BPE, WordPiece, and Unigram";

/// x axis title of the token length figure.
pub const LENGTH_AXIS_TITLE: &str = "Token Length";

/// y axis title of the token length figure.
pub const PERCENTAGE_AXIS_TITLE: &str = "Percentage";

/// Opacity of the overlaid histograms.
pub const HISTOGRAM_OPACITY: f64 = 0.6;

/// Gap between bars, as a fraction of the bin width.
pub const HISTOGRAM_BAR_GAP: f64 = 0.2;

/// Gap between bar groups, as a fraction of the bin width.
pub const HISTOGRAM_BAR_GROUP_GAP: f64 = 0.1;

/// Pixel size of static token length figures.
pub const LENGTH_FIGURE_SIZE: (u32, u32) = (700, 450);

/// File stem of token length figure outputs.
pub const LENGTH_FILE_STEM: &str = "token_lengths";

/// One named token length sample.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthSeries {
    /// The legend name.
    pub name: String,

    /// Token lengths, one per token.
    pub lengths: Vec<usize>,
}

/// Overlaid percent-normalized token length histograms.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthFigure {
    title: String,
    series: Vec<LengthSeries>,
    histogram: LengthHistogram,
}

impl LengthFigure {
    /// Build a figure over named samples.
    pub fn new<S: Into<String>>(
        title: S,
        series: Vec<LengthSeries>,
    ) -> Self {
        let samples: Vec<&[usize]> = series.iter().map(|s| s.lengths.as_slice()).collect();
        let histogram = LengthHistogram::new(&samples);
        Self {
            title: title.into(),
            series,
            histogram,
        }
    }

    /// One series per vocabulary, named by each vocabulary's token kind.
    pub fn from_vocabularies(vocabularies: &[Vocabulary]) -> Self {
        let series = vocabularies
            .iter()
            .map(|vocab| LengthSeries {
                name: vocab.kind().display_label().to_string(),
                lengths: token_lengths(vocab),
            })
            .collect();
        Self::new(LENGTH_FIGURE_TITLE, series)
    }

    /// The figure title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The samples, in legend order.
    pub fn series(&self) -> &[LengthSeries] {
        &self.series
    }

    /// The shared-bin histogram of all samples.
    pub fn histogram(&self) -> &LengthHistogram {
        &self.histogram
    }
}

impl Chart for LengthFigure {
    fn file_stem(&self) -> &str {
        LENGTH_FILE_STEM
    }

    fn pixel_size(&self) -> (u32, u32) {
        LENGTH_FIGURE_SIZE
    }

    fn to_plot(&self) -> plotly::Plot {
        plotly_backend::length_plot(self)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> VSResult<()> {
        static_backend::draw_lengths(self, root)
    }
}
