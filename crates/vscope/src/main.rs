//! `vscope`: chart tokenizer vocabulary comparisons.

mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

/// vscope
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use vocabscope::{charts::Renderer, vocab::DEFAULT_VOCAB_DIR};

    use super::*;

    #[test]
    fn test_lengths_defaults() {
        let args = Args::try_parse_from(["vscope", "lengths"]).unwrap();
        let Commands::Lengths(cmd) = args.command else {
            panic!("expected lengths");
        };
        assert_eq!(cmd.renderer, Renderer::Browser);
        assert_eq!(cmd.data.data_dir, PathBuf::from(DEFAULT_VOCAB_DIR));
        assert_eq!(cmd.output.output_dir, PathBuf::from("."));
        assert!(!cmd.logging.quiet);
    }

    #[test]
    fn test_venn_args() {
        let args = Args::try_parse_from([
            "vscope",
            "venn",
            "--data-dir",
            "vocab/",
            "--renderer",
            "sphinx_gallery",
            "--output-dir",
            "out",
            "--title",
            "Overlap",
            "-vv",
            "-t",
        ])
        .unwrap();
        let Commands::Venn(cmd) = args.command else {
            panic!("expected venn");
        };
        assert_eq!(cmd.renderer, Renderer::SphinxGallery);
        assert_eq!(cmd.data.data_dir, PathBuf::from("vocab/"));
        assert_eq!(cmd.output.output_dir, PathBuf::from("out"));
        assert_eq!(cmd.title.as_deref(), Some("Overlap"));
        assert!(cmd.logging.ts);

        let args = Args::try_parse_from(["vscope", "venn"]).unwrap();
        let Commands::Venn(cmd) = args.command else {
            panic!("expected venn");
        };
        assert_eq!(cmd.renderer, Renderer::Iframe);
        assert_eq!(cmd.title, None);
    }

    #[test]
    fn test_bad_renderer() {
        assert!(Args::try_parse_from(["vscope", "venn", "--renderer", "gif"]).is_err());
        assert!(Args::try_parse_from(["vscope"]).is_err());
    }
}
