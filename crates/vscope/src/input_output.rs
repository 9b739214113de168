use std::path::PathBuf;

use vocabscope::{
    charts::{RenderOptions, Renderer},
    vocab::DEFAULT_VOCAB_DIR,
};

/// Vocabulary input argument group.
#[derive(clap::Args, Debug)]
pub struct DataArgs {
    /// Directory holding `bpe.json`, `wordpiece.json`, and `unigram.json`.
    #[clap(long, default_value = DEFAULT_VOCAB_DIR)]
    pub data_dir: PathBuf,
}

/// Figure output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Directory for renderers which write files (`iframe`, `svg`).
    #[clap(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl OutputArgs {
    /// Build the render options for `renderer`.
    pub fn render_options(
        &self,
        renderer: Renderer,
    ) -> RenderOptions {
        RenderOptions::new(renderer).with_output_dir(self.output_dir.clone())
    }
}
