mod lengths;
mod venn;

pub use lengths::LengthsArgs;
pub use venn::VennArgs;

/// Subcommands for vscope
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Overlay the token length distributions of every vocabulary.
    Lengths(LengthsArgs),

    /// Draw the overlap of every vocabulary as a Venn diagram.
    Venn(VennArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Lengths(cmd) => cmd.run(),
            Commands::Venn(cmd) => cmd.run(),
        }
    }
}
