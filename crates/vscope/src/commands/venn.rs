use vocabscope::{
    charts::Renderer,
    reports::venn_tokenizer::{VENN_TOKENIZER_RENDERER, run_venn_tokenizer},
};

use crate::{
    input_output::{DataArgs, OutputArgs},
    logging::{DEFAULT_VERBOSITY, LogArgs},
};

/// Args for the venn command.
#[derive(clap::Args, Debug)]
pub struct VennArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pub data: DataArgs,

    /// Figure renderer.
    #[arg(long, default_value_t = VENN_TOKENIZER_RENDERER)]
    pub renderer: Renderer,

    /// Figure title.
    #[arg(long)]
    pub title: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl VennArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(DEFAULT_VERBOSITY)?;

        log::info!("Charting vocab overlap: {}", self.data.data_dir.display());
        run_venn_tokenizer(
            &self.data.data_dir,
            self.title.as_deref(),
            &self.output.render_options(self.renderer),
        )?;

        Ok(())
    }
}
