pub mod cache;
pub mod reader;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::path::Path;

pub use cache::{WordCache, WordProvider};
pub use reader::{ExtensionDispatch, JsonReader, LineReader, WordReader};

/// Ordered tokens produced by loading a [`WordSource`]
pub type Words = Vec<String>;

/// A named, located list of words.
///
/// Identity is `name` + `location`; two descriptors that differ only in
/// language compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordSource {
    name: String,
    language: String,
    location: String,
}

impl WordSource {
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            location: location.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Lowercased file extension of the location, if it has one
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.location)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }

    fn identity(&self) -> (&str, &str) {
        (&self.name, &self.location)
    }
}

impl PartialEq for WordSource {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for WordSource {}

impl Hash for WordSource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl PartialOrd for WordSource {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordSource {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}
