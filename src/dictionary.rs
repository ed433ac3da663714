//! Dictionary loading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::error::DictionaryError;
use crate::word::Word;
use crate::{WordList, WORD_LENGTH};

/// Read a newline-delimited word list.
///
/// Blank lines are ignored and surrounding whitespace is trimmed. Lines that are
/// not valid words are skipped with a warning rather than failing the load.
pub fn parse_dictionary<R: BufRead>(reader: R) -> Result<WordList, DictionaryError> {
    let mut words = WordList::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line?;
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        match Word::parse(entry) {
            Ok(word) => words.push(word),
            Err(err) => {
                debug!("skipping dictionary entry: {}", err);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(
            "skipped {} dictionary lines that are not {}-letter words",
            skipped, WORD_LENGTH
        );
    }
    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }
    Ok(words)
}

/// Load the dictionary file at `path`.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<WordList, DictionaryError> {
    let path = path.as_ref();
    let io_error = |source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let words = parse_dictionary(BufReader::new(file)).map_err(|err| match err {
        DictionaryError::Read(source) => io_error(source),
        other => other,
    })?;

    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
