//! # Renderer Selection

use std::path::PathBuf;

/// An output renderer, named by its plotly renderer identifier.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum_macros::EnumString, strum_macros::EnumIter, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Renderer {
    /// Plotly mime-bundle output.
    PlotlyMimetype,

    /// `JupyterLab` mime-bundle output.
    Jupyterlab,

    /// nteract mime-bundle output.
    Nteract,

    /// VS Code notebook mime-bundle output.
    Vscode,

    /// PNG image.
    Png,

    /// JPEG image.
    Jpeg,

    /// JPEG image.
    Jpg,

    /// SVG image.
    Svg,

    /// PDF document.
    Pdf,

    /// The system's default browser.
    #[default]
    Browser,

    /// Firefox.
    Firefox,

    /// Chrome.
    Chrome,

    /// Chromium.
    Chromium,

    /// An html file referenced by an `<iframe>`.
    Iframe,

    /// An html file referenced by an `<iframe>`.
    IframeConnected,

    /// An inline html `<div>` fragment.
    SphinxGallery,

    /// The figure's plotly JSON.
    Json,

    /// Classic notebook html output.
    Notebook,

    /// Classic notebook html output.
    NotebookConnected,

    /// Static image output.
    Kaleido,
}

/// Static image encodings, exported through kaleido.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// PNG.
    Png,

    /// JPEG.
    Jpeg,

    /// PDF.
    Pdf,
}

impl ImageFormat {
    /// The file extension, which is also the kaleido format name.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Pdf => "pdf",
        }
    }
}

/// What a [`Renderer`] actually does with a figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Write a temporary html page and open it in a browser.
    Browser,

    /// Print notebook html display output to stdout.
    NotebookHtml,

    /// Print the plotly mime-bundle display output to stdout.
    MimeBundle,

    /// Write an html file, and print an `<iframe>` referencing it.
    Iframe,

    /// Print an inline html fragment.
    InlineHtml,

    /// Print the figure JSON.
    Json,

    /// Draw an SVG image.
    Svg,

    /// Export a static image of the interactive figure.
    Image(ImageFormat),
}

impl Renderer {
    /// The output behavior of this renderer.
    pub fn target(&self) -> RenderTarget {
        use Renderer::*;
        match self {
            Browser | Firefox | Chrome | Chromium => RenderTarget::Browser,
            Notebook | NotebookConnected => RenderTarget::NotebookHtml,
            PlotlyMimetype | Jupyterlab | Nteract | Vscode => RenderTarget::MimeBundle,
            Iframe | IframeConnected => RenderTarget::Iframe,
            SphinxGallery => RenderTarget::InlineHtml,
            Json => RenderTarget::Json,
            Svg => RenderTarget::Svg,
            Png | Kaleido => RenderTarget::Image(ImageFormat::Png),
            Jpeg | Jpg => RenderTarget::Image(ImageFormat::Jpeg),
            Pdf => RenderTarget::Image(ImageFormat::Pdf),
        }
    }

    /// The extension of files written by this renderer, if it writes one.
    pub fn file_extension(&self) -> Option<&'static str> {
        match self.target() {
            RenderTarget::Iframe => Some("html"),
            RenderTarget::Svg => Some("svg"),
            RenderTarget::Image(format) => Some(format.extension()),
            _ => None,
        }
    }
}

/// Where and how to display a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// The renderer.
    pub renderer: Renderer,

    /// Directory for renderers that write files.
    pub output_dir: PathBuf,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            renderer: Renderer::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl RenderOptions {
    /// Options for `renderer`, writing into the current directory.
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            ..Default::default()
        }
    }

    /// Set the output directory.
    pub fn with_output_dir<P: Into<PathBuf>>(
        self,
        output_dir: P,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..self
        }
    }
}
