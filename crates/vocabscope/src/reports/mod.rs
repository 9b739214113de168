//! # Reports
//!
//! The end-to-end vocabulary comparisons: load every vocabulary from a data
//! directory, build one figure, and display it.

pub mod length_distribution;
pub mod venn_tokenizer;
