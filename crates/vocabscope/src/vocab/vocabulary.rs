//! # Vocabulary

use crate::{TokenKind, types::VSHashSet};

/// The set of distinct string tokens produced by one tokenizer training run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    kind: TokenKind,
    tokens: VSHashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from a token set.
    pub fn new(
        kind: TokenKind,
        tokens: VSHashSet<String>,
    ) -> Self {
        Self { kind, tokens }
    }

    /// Build a vocabulary from any token iterator; duplicates collapse.
    pub fn from_tokens<I, S>(
        kind: TokenKind,
        tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(kind, tokens.into_iter().map(Into::into).collect())
    }

    /// The token kind this vocabulary came from.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The underlying token set.
    pub fn tokens(&self) -> &VSHashSet<String> {
        &self.tokens
    }

    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Does the vocabulary contain `token`?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.tokens.contains(token)
    }

    /// Iterate over the tokens, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
