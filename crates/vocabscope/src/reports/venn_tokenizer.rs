//! # Tokenizer Vocabulary Venn Report

use std::path::Path;

use crate::{
    TokenKind,
    VSResult,
    charts::{RenderOptions, Renderer, render_venn},
    vocab::load_vocabularies,
};

/// Set labels, in [`TokenKind::ALL`] order.
pub const VENN_TOKENIZER_LABELS: [&str; 3] = ["BPE", "Wordpiece", "Unigram"];

/// Default renderer of the Venn report.
pub const VENN_TOKENIZER_RENDERER: Renderer = Renderer::Iframe;

/// Load every [`TokenKind`] vocabulary from `data_dir`, and display their
/// overlap as a 3-set Venn diagram.
pub fn run_venn_tokenizer<P: AsRef<Path>>(
    data_dir: P,
    title: Option<&str>,
    options: &RenderOptions,
) -> VSResult<()> {
    let vocabs = load_vocabularies(data_dir, &TokenKind::ALL)?;
    let sets: Vec<_> = vocabs.iter().map(|v| v.tokens()).collect();
    render_venn(&sets, Some(VENN_TOKENIZER_LABELS.as_slice()), title, options)
}
