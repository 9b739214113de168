//! # Figure Display
//!
//! Dispatch a [`Chart`] to the output named by its [`Renderer`].

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    VSResult,
    VocabscopeError,
    charts::{
        Chart,
        RenderOptions,
        RenderTarget,
        Renderer,
        static_backend,
    },
};

#[cfg(feature = "kaleido")]
use crate::charts::renderer::ImageFormat;

/// Directory, under the output directory, for iframe pages.
pub const IFRAME_DIR: &str = "iframe_figures";

/// Display `chart` per `options`, writing any text output to stdout.
pub fn show<C: Chart>(
    chart: &C,
    options: &RenderOptions,
) -> VSResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    show_to(chart, options, &mut out)?;
    Ok(())
}

/// Display `chart` per `options`, writing any text output to `out`.
///
/// ## Returns
/// The path of the written artifact, for renderers which write one.
pub fn show_to<C: Chart, W: Write>(
    chart: &C,
    options: &RenderOptions,
    out: &mut W,
) -> VSResult<Option<PathBuf>> {
    let renderer = options.renderer;
    log::debug!("rendering {} with {renderer}", chart.file_stem());

    match renderer.target() {
        RenderTarget::Browser => {
            chart.to_plot().show();
            Ok(None)
        }
        RenderTarget::NotebookHtml => {
            chart.to_plot().notebook_display();
            Ok(None)
        }
        RenderTarget::MimeBundle => {
            chart.to_plot().lab_display();
            Ok(None)
        }
        RenderTarget::InlineHtml => {
            let html = chart.to_plot().to_inline_html(Some(chart.file_stem()));
            write_text(out, &html)?;
            Ok(None)
        }
        RenderTarget::Json => {
            write_text(out, &chart.to_plot().to_json())?;
            Ok(None)
        }
        RenderTarget::Iframe => {
            let dir = options.output_dir.join(IFRAME_DIR);
            let path = artifact_path(&dir, chart, renderer)?;
            fs::write(&path, chart.to_plot().to_html())
                .map_err(|e| VocabscopeError::io(&path, e))?;

            let src = Path::new(IFRAME_DIR).join(file_name(&path));
            let height = chart.pixel_size().1 + 45;
            let tag = format!(
                r#"<iframe scrolling="no" width="100%" height="{height}px" src="{}" frameborder="0" allowfullscreen></iframe>"#,
                src.display()
            );
            write_text(out, &tag)?;
            log::info!("wrote {}", path.display());
            Ok(Some(path))
        }
        RenderTarget::Svg => {
            let path = artifact_path(&options.output_dir, chart, renderer)?;
            static_backend::write_svg(chart, &path)?;
            log::info!("wrote {}", path.display());
            Ok(Some(path))
        }
        #[cfg(feature = "kaleido")]
        RenderTarget::Image(format) => {
            let path = artifact_path(&options.output_dir, chart, renderer)?;
            write_image(chart, &path, format)?;
            log::info!("wrote {}", path.display());
            Ok(Some(path))
        }
        #[cfg(not(feature = "kaleido"))]
        RenderTarget::Image(_) => Err(VocabscopeError::UnsupportedRenderer(renderer)),
    }
}

/// Export `chart` through kaleido.
#[cfg(feature = "kaleido")]
fn write_image<C: Chart>(
    chart: &C,
    path: &Path,
    format: ImageFormat,
) -> VSResult<()> {
    let figure = serde_json::to_value(chart.to_plot())
        .map_err(|e| VocabscopeError::Render(e.to_string()))?;
    let (width, height) = chart.pixel_size();
    plotly_kaleido::Kaleido::new()
        .save(
            path,
            &figure,
            format.extension(),
            width as usize,
            height as usize,
            1.0,
        )
        .map_err(|e| VocabscopeError::Render(e.to_string()))
}

fn write_text<W: Write>(
    out: &mut W,
    text: &str,
) -> VSResult<()> {
    writeln!(out, "{text}")
        .and_then(|_| out.flush())
        .map_err(|e| VocabscopeError::io("<output>", e))
}

/// Create `dir` and name `renderer`'s artifact for `chart` inside it.
fn artifact_path<C: Chart>(
    dir: &Path,
    chart: &C,
    renderer: Renderer,
) -> VSResult<PathBuf> {
    let extension = renderer
        .file_extension()
        .ok_or(VocabscopeError::UnsupportedRenderer(renderer))?;
    fs::create_dir_all(dir).map_err(|e| VocabscopeError::io(dir, e))?;
    Ok(dir.join(format!("{}.{extension}", chart.file_stem())))
}

fn file_name(path: &Path) -> &Path {
    path.file_name().map(Path::new).unwrap_or(path)
}
