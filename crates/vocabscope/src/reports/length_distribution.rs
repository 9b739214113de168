//! # Token Length Distribution Report

use std::path::Path;

use crate::{
    TokenKind,
    VSResult,
    Vocabulary,
    charts::{LengthFigure, RenderOptions, show},
    vocab::load_vocabularies,
};

/// Display the overlaid token length histograms of `vocabs`.
pub fn report_length_distribution(
    vocabs: &[Vocabulary],
    options: &RenderOptions,
) -> VSResult<()> {
    let figure = LengthFigure::from_vocabularies(vocabs);
    show(&figure, options)
}

/// Load every [`TokenKind`] vocabulary from `data_dir`, and report their
/// token length distributions.
pub fn run_length_distribution<P: AsRef<Path>>(
    data_dir: P,
    options: &RenderOptions,
) -> VSResult<()> {
    let vocabs = load_vocabularies(data_dir, &TokenKind::ALL)?;
    report_length_distribution(&vocabs, options)
}
