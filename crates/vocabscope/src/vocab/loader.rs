//! # Vocab File Loader
//!
//! The vocab contract is a JSON object with a `model` object holding
//! a `vocab` container of string tokens. Three container shapes are accepted:
//! * an array of tokens: `["a", "b"]`;
//! * an object keyed by token, as BPE and WordPiece write it: `{"a": 0, "b": 1}`;
//! * an array of `[token, score]` pairs, as Unigram writes it: `[["a", -1.5]]`.
//!
//! Everything else in the file is ignored.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{TokenKind, VSResult, Vocabulary, VocabscopeError, types::VSHashSet};

/// The directory tokenizer training writes its vocab files to.
pub const DEFAULT_VOCAB_DIR: &str = "data/output/";

/// The path of `kind`'s vocab file in `dir`: `<dir>/<kind>.json`.
pub fn vocab_path<P: AsRef<Path>>(
    dir: P,
    kind: TokenKind,
) -> PathBuf {
    dir.as_ref().join(format!("{}.json", kind.file_stem()))
}

/// Extract the token set from a parsed vocab document.
///
/// `path` is only used for error reporting.
pub fn parse_vocab_value(
    document: &Value,
    path: &Path,
) -> VSResult<VSHashSet<String>> {
    let vocab = document
        .get("model")
        .and_then(|model| model.get("vocab"))
        .ok_or_else(|| VocabscopeError::MissingVocab {
            path: path.to_path_buf(),
        })?;

    let invalid = |index: usize| VocabscopeError::InvalidVocab {
        path: path.to_path_buf(),
        index,
    };

    match vocab {
        Value::Object(entries) => Ok(entries.keys().cloned().collect()),
        Value::Array(entries) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::String(token) => Ok(token.clone()),
                Value::Array(pair) => match pair.first() {
                    Some(Value::String(token)) => Ok(token.clone()),
                    _ => Err(invalid(index)),
                },
                _ => Err(invalid(index)),
            })
            .collect(),
        _ => Err(invalid(0)),
    }
}

/// Read a vocab document from a reader.
///
/// `path` is only used for error reporting.
pub fn read_vocab_json<R: Read>(
    reader: R,
    path: &Path,
) -> VSResult<VSHashSet<String>> {
    let document: Value =
        serde_json::from_reader(reader).map_err(|source| VocabscopeError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    parse_vocab_value(&document, path)
}

/// Load the token set of a vocab file.
pub fn load_vocab_path<P: AsRef<Path>>(path: P) -> VSResult<VSHashSet<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| VocabscopeError::io(path, source))?;
    read_vocab_json(BufReader::new(file), path)
}

/// Load `kind`'s vocabulary from `<dir>/<kind>.json`.
pub fn load_vocab<P: AsRef<Path>>(
    dir: P,
    kind: TokenKind,
) -> VSResult<Vocabulary> {
    let path = vocab_path(dir, kind);
    let tokens = load_vocab_path(&path)?;
    log::info!("loaded {kind} vocab: {} ({} tokens)", path.display(), tokens.len());
    Ok(Vocabulary::new(kind, tokens))
}

/// Load one vocabulary per kind, in order.
///
/// The first failure aborts the whole load.
pub fn load_vocabularies<P: AsRef<Path>>(
    dir: P,
    kinds: &[TokenKind],
) -> VSResult<Vec<Vocabulary>> {
    kinds
        .iter()
        .map(|&kind| load_vocab(dir.as_ref(), kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn parse(text: &str) -> VSResult<VSHashSet<String>> {
        read_vocab_json(text.as_bytes(), Path::new("test.json"))
    }

    fn sorted(tokens: VSHashSet<String>) -> Vec<String> {
        let mut tokens = tokens.into_iter().collect::<Vec<_>>();
        tokens.sort_unstable();
        tokens
    }

    #[test]
    fn test_token_array() {
        let tokens = parse(r#"{"model": {"vocab": ["b", "a", "b", "ab"]}}"#).unwrap();
        assert_eq!(sorted(tokens), vec!["a", "ab", "b"]);
    }

    #[test]
    fn test_token_map() {
        let tokens = parse(
            r###"{"version": "1.0", "model": {"type": "BPE", "vocab": {"[UNK]": 0, "a": 1, "##b": 2}}}"###,
        )
        .unwrap();
        assert_eq!(sorted(tokens), vec!["##b", "[UNK]", "a"]);
    }

    #[test]
    fn test_scored_pairs() {
        let tokens =
            parse(r#"{"model": {"type": "Unigram", "vocab": [["<unk>", 0.0], ["▁the", -3.2]]}}"#)
                .unwrap();
        assert_eq!(sorted(tokens), vec!["<unk>", "▁the"]);
    }

    #[test]
    fn test_missing_vocab() {
        assert!(matches!(
            parse(r#"{"model": {"type": "BPE"}}"#),
            Err(VocabscopeError::MissingVocab { .. })
        ));
        assert!(matches!(
            parse(r#"{"vocab": ["a"]}"#),
            Err(VocabscopeError::MissingVocab { .. })
        ));
    }

    #[test]
    fn test_invalid_entries() {
        assert!(matches!(
            parse(r#"{"model": {"vocab": ["a", 7]}}"#),
            Err(VocabscopeError::InvalidVocab { index: 1, .. })
        ));
        assert!(matches!(
            parse(r#"{"model": {"vocab": [[3, "a"]]}}"#),
            Err(VocabscopeError::InvalidVocab { index: 0, .. })
        ));
        assert!(matches!(
            parse(r#"{"model": {"vocab": "a b c"}}"#),
            Err(VocabscopeError::InvalidVocab { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse(r#"{"model": {"vocab": ["a""#),
            Err(VocabscopeError::Json { .. })
        ));
    }

    #[test]
    fn test_vocab_path() {
        assert_eq!(
            vocab_path("data/output/", TokenKind::WordPiece),
            PathBuf::from("data/output/wordpiece.json")
        );
    }

    #[test]
    fn test_load_vocabularies() {
        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                fs::write(
                    vocab_path(dir.path(), TokenKind::Bpe),
                    r#"{"model": {"vocab": {"a": 0, "ab": 1}}}"#,
                )?;
                fs::write(
                    vocab_path(dir.path(), TokenKind::Unigram),
                    r#"{"model": {"vocab": [["a", -1.0], ["abc", -2.0]]}}"#,
                )?;

                let vocabs =
                    load_vocabularies(dir.path(), &[TokenKind::Bpe, TokenKind::Unigram]).unwrap();
                assert_eq!(vocabs.len(), 2);
                assert_eq!(vocabs[0].kind(), TokenKind::Bpe);
                assert_eq!(vocabs[0].len(), 2);
                assert_eq!(vocabs[1].kind(), TokenKind::Unigram);
                assert!(vocabs[1].contains("abc"));

                // wordpiece.json was never written.
                let err = load_vocabularies(dir.path(), &TokenKind::ALL).unwrap_err();
                match err {
                    VocabscopeError::Io { path, source } => {
                        assert_eq!(path, vocab_path(dir.path(), TokenKind::WordPiece));
                        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
                    }
                    other => panic!("unexpected error: {other}"),
                }

                Ok(())
            })
            .unwrap();
    }
}
