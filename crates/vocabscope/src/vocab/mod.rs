//! # Vocabulary Loading
//!
//! Tokenizer training runs leave behind a JSON file per algorithm;
//! the only part of that file we consume is the `model.vocab` container.
//!
//! ```no_run
//! use vocabscope::vocab::{DEFAULT_VOCAB_DIR, TokenKind, load_vocabularies};
//!
//! let vocabs = load_vocabularies(DEFAULT_VOCAB_DIR, &TokenKind::ALL).unwrap();
//! for vocab in &vocabs {
//!     println!("{}: {}", vocab.kind(), vocab.len());
//! }
//! ```

mod loader;
mod token_kind;
mod vocabulary;

#[doc(inline)]
pub use loader::*;
#[doc(inline)]
pub use token_kind::*;
#[doc(inline)]
pub use vocabulary::*;
