//! # `vocabscope` Tokenizer Vocabulary Charts
//!
//! Compare the vocabularies produced by different tokenizer training
//! algorithms (BPE, WordPiece, Unigram).
//!
//! See:
//! * [`vocab`] to load vocabularies from tokenizer JSON files.
//! * [`lengths`] for token-length samples and shared-bin histograms.
//! * [`venn`] for the area-proportional 2- and 3-set Venn layout.
//! * [`charts`] to turn the above into figures, and to display them.
//! * [`reports`] for the two end-to-end reports.
//!
//! ## Renderers
//!
//! Every figure is displayed through a [`charts::Renderer`], named by the
//! same identifiers the plotly renderer registry uses (`browser`, `iframe`,
//! `json`, `svg`, `png`, ...). Interactive renderers go through `plotly`;
//! `svg` output is drawn with `plotters`. The `png`, `jpeg`, `jpg`,
//! `kaleido` and `pdf` renderers export through kaleido, and need the
//! `kaleido` feature.
//!
//! ```no_run
//! use vocabscope::{charts::RenderOptions, reports::venn_tokenizer::run_venn_tokenizer};
//!
//! run_venn_tokenizer("data/output/", None, &RenderOptions::default()).unwrap();
//! ```

pub mod charts;
pub mod errors;
pub mod lengths;
pub mod reports;
pub mod types;
pub mod venn;
pub mod vocab;

#[doc(inline)]
pub use errors::{VSResult, VocabscopeError};
#[doc(inline)]
pub use vocab::{TokenKind, Vocabulary};
