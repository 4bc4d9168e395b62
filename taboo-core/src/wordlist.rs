//! Loading of the taboo word list.
//!
//! The word list is a CSV file without a header row. Every field of every row
//! is one term (a word or a phrase). Rows may carry any number of fields and
//! blank fields are dropped, so both "one term per line" files and long
//! comma-separated lines are accepted.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use crate::errors::TabooError;

/// The immutable, ordered collection of terms loaded at startup.
///
/// Cloning is cheap: the terms live behind an `Arc` and are never mutated
/// once loaded. Duplicates are kept as they appear in the source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermList {
    terms: Arc<[String]>,
}

impl TermList {
    /// Builds a term list from terms already held in memory, dropping empty ones.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        terms.into_iter().map(Into::into).collect()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }
}

impl Deref for TermList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.terms
    }
}

impl FromIterator<String> for TermList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let terms: Vec<String> = iter.into_iter().filter(|t| !t.is_empty()).collect();
        Self { terms: terms.into() }
    }
}

impl<'a> IntoIterator for &'a TermList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Loads the word list stored at `path`.
///
/// # Errors
///
/// * [`TabooError::ResourceNotFound`] if the file cannot be opened.
/// * [`TabooError::MalformedInput`] if a row is not valid CSV text.
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<TermList, TabooError> {
    let path = path.as_ref();
    info!("Loading word list from: {}", path.display());
    let file = File::open(path).map_err(|source| TabooError::ResourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let terms = load_wordlist_from_reader(file)?;
    info!("Loaded {} terms from {}.", terms.len(), path.display());
    Ok(terms)
}

/// Loads a word list from any reader producing CSV text.
///
/// Fields are flattened in row order, then field order. Fields are not
/// trimmed, so `" heck"` and `"heck"` are distinct terms.
pub fn load_wordlist_from_reader<R: Read>(reader: R) -> Result<TermList, TabooError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut terms = Vec::new();
    let mut skipped = 0usize;
    for record in csv_reader.records() {
        let record = record.map_err(TabooError::from_csv)?;
        for field in record.iter() {
            if field.is_empty() {
                skipped += 1;
            } else {
                terms.push(field.to_string());
            }
        }
    }

    if skipped > 0 {
        debug!("Dropped {} empty fields from the word list.", skipped);
    }
    Ok(TermList::from_terms(terms))
}
