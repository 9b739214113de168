use vocabscope::{charts::Renderer, reports::length_distribution::run_length_distribution};

use crate::{
    input_output::{DataArgs, OutputArgs},
    logging::{DEFAULT_VERBOSITY, LogArgs},
};

/// Args for the lengths command.
#[derive(clap::Args, Debug)]
pub struct LengthsArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[command(flatten)]
    pub data: DataArgs,

    /// Figure renderer.
    #[arg(long, default_value = "browser")]
    pub renderer: Renderer,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl LengthsArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(DEFAULT_VERBOSITY)?;

        log::info!("Charting token lengths: {}", self.data.data_dir.display());
        run_length_distribution(&self.data.data_dir, &self.output.render_options(self.renderer))?;

        Ok(())
    }
}
