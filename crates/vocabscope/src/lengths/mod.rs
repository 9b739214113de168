//! # Token Length Distributions

mod length_histogram;

#[doc(inline)]
pub use length_histogram::*;

use crate::Vocabulary;

/// The length, in characters, of every token in `vocab`.
///
/// The sample has one entry per token, in the vocabulary's iteration order.
pub fn token_lengths(vocab: &Vocabulary) -> Vec<usize> {
    vocab.iter().map(|token| token.chars().count()).collect()
}
