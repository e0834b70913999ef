use super::{WordSource, Words};
use crate::error::LoadError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

/// Trait for the storage formats a word list can be read from
pub trait WordReader: Send + Sync {
    /// Read the words behind `source`, failing on any I/O or format problem
    fn read_words(&self, source: &WordSource) -> Result<Words, LoadError>;
}

const BOM: char = '\u{feff}';

/// Plain text, one word per line. `\n`, `\r\n` and a lone `\r` all end a line.
pub struct LineReader;

impl WordReader for LineReader {
    fn read_words(&self, source: &WordSource) -> Result<Words, LoadError> {
        let text = fs::read_to_string(source.location())?;
        Ok(split_lines(&text))
    }
}

fn split_lines(text: &str) -> Words {
    let text = text.strip_prefix(BOM).unwrap_or(text).replace("\r\n", "\n");
    let mut words: Words = text.split(['\n', '\r']).map(str::to_string).collect();
    while words.last().is_some_and(|w| w.trim().is_empty()) {
        words.pop();
    }
    words
}

/// On-disk shape of a structured dictionary.
/// Only `words` is required; `name` and `size` are informational.
#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
struct Dictionary {
    name: Option<String>,
    size: Option<u32>,
    words: Vec<String>,
}

/// JSON documents carrying a `words` array
pub struct JsonReader;

impl WordReader for JsonReader {
    fn read_words(&self, source: &WordSource) -> Result<Words, LoadError> {
        let bytes = fs::read(source.location())?;
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes[..]);
        let dictionary: Dictionary = serde_json::from_slice(bytes)?;
        Ok(dictionary.words)
    }
}

/// Picks a reader by the source location's file extension
#[derive(Default)]
pub struct ExtensionDispatch {
    readers: HashMap<String, Box<dyn WordReader>>,
}

impl ExtensionDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// `txt` files read line by line, `json` files as structured dictionaries
    pub fn standard() -> Self {
        Self::new()
            .with_reader("txt", Box::new(LineReader))
            .with_reader("json", Box::new(JsonReader))
    }

    pub fn with_reader(mut self, extension: &str, reader: Box<dyn WordReader>) -> Self {
        self.readers.insert(extension.to_ascii_lowercase(), reader);
        self
    }

    pub fn supports(&self, extension: &str) -> bool {
        self.readers.contains_key(&extension.to_ascii_lowercase())
    }
}

impl WordReader for ExtensionDispatch {
    fn read_words(&self, source: &WordSource) -> Result<Words, LoadError> {
        let extension = source.extension().unwrap_or_default();
        match self.readers.get(&extension) {
            Some(reader) => reader.read_words(source),
            None => Err(LoadError::UnsupportedFormat(extension)),
        }
    }
}
