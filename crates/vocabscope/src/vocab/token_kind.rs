//! # Token Kinds

/// The tokenizer training algorithm a vocabulary came from.
///
/// Parses from, and displays as, the vocab file stem (`bpe`, `wordpiece`, `unigram`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum_macros::EnumString, strum_macros::EnumIter, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TokenKind {
    /// Byte-pair encoding.
    Bpe,

    /// WordPiece.
    WordPiece,

    /// Unigram language model.
    Unigram,
}

impl TokenKind {
    /// All token kinds, in report order.
    pub const ALL: [TokenKind; 3] = [TokenKind::Bpe, TokenKind::WordPiece, TokenKind::Unigram];

    /// The file stem of this kind's vocab file.
    pub fn file_stem(&self) -> &'static str {
        match self {
            TokenKind::Bpe => "bpe",
            TokenKind::WordPiece => "wordpiece",
            TokenKind::Unigram => "unigram",
        }
    }

    /// The human readable name, used for legends and set labels.
    pub fn display_label(&self) -> &'static str {
        match self {
            TokenKind::Bpe => "BPE",
            TokenKind::WordPiece => "WordPiece",
            TokenKind::Unigram => "Unigram",
        }
    }
}
