use crate::source::WordSource;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

const SCANNED_EXTENSIONS: [&str; 2] = ["txt", "json"];

/// Resolves word source descriptors; never loads words
pub trait DictionaryCatalog {
    fn sources(&self) -> Vec<WordSource>;

    fn lookup(&self, name: &str) -> Option<WordSource>;

    fn by_language(&self, language: &str) -> Vec<WordSource> {
        self.sources()
            .into_iter()
            .filter(|s| s.language().eq_ignore_ascii_case(language))
            .collect()
    }
}

/// In-memory catalog keyed by source name
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, WordSource>,
}

impl Catalog {
    /// Later descriptors with a name already present replace the earlier one
    pub fn new(sources: impl IntoIterator<Item = WordSource>) -> Self {
        let entries = sources
            .into_iter()
            .map(|s| (s.name().to_string(), s))
            .collect();
        Self { entries }
    }

    /// Register every `.txt` and `.json` file directly inside `dir`, named by file stem.
    /// Files are taken in path order; when two share a stem the first one is kept.
    pub fn scan_dir<P: AsRef<Path>>(dir: P, language: &str) -> io::Result<Self> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            let supported = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| SCANNED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
            if supported && path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut entries: BTreeMap<String, WordSource> = BTreeMap::new();
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(kept) = entries.get(stem) {
                log::warn!(
                    "ignoring {}: dictionary {stem:?} already provided by {}",
                    path.display(),
                    kept.location()
                );
                continue;
            }
            let source = WordSource::new(stem, language, path.to_string_lossy());
            entries.insert(stem.to_string(), source);
        }
        log::debug!(
            "found {} word sources in {}",
            entries.len(),
            dir.as_ref().display()
        );
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordSource> {
        self.entries.values()
    }
}

impl DictionaryCatalog for Catalog {
    fn sources(&self) -> Vec<WordSource> {
        self.entries.values().cloned().collect()
    }

    fn lookup(&self, name: &str) -> Option<WordSource> {
        self.entries.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_lookup_and_language_filter() {
        let catalog = Catalog::new([
            WordSource::new("english", "english", "english.json"),
            WordSource::new("deutsch", "german", "deutsch.txt"),
            WordSource::new("code", "English", "code.txt"),
        ]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.lookup("deutsch").unwrap().location(), "deutsch.txt");
        assert!(catalog.lookup("french").is_none());

        let names: Vec<String> = catalog
            .by_language("english")
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, vec!["code", "english"]);
    }

    #[test]
    fn test_later_duplicates_win() {
        let catalog = Catalog::new([
            WordSource::new("common", "english", "old.txt"),
            WordSource::new("common", "english", "new.txt"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("common").unwrap().location(), "new.txt");
    }

    #[test]
    fn test_scan_dir_picks_supported_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("english.json"), "{}").unwrap();
        fs::write(dir.path().join("code.TXT"), "fn\n").unwrap();
        fs::write(dir.path().join("notes.md"), "# not words").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let catalog = Catalog::scan_dir(dir.path(), "english").unwrap();
        let names: Vec<&str> = catalog.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["code", "english"]);
        assert!(catalog.iter().all(|s| s.language() == "english"));
    }

    #[test]
    fn test_scan_dir_keeps_first_of_shared_stem() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("english.txt"), "from_txt\n").unwrap();
        fs::write(dir.path().join("english.json"), r#"{ "words": ["from_json"] }"#).unwrap();
        fs::write(dir.path().join("code.txt"), "fn\n").unwrap();

        for _ in 0..5 {
            let catalog = Catalog::scan_dir(dir.path(), "english").unwrap();
            assert_eq!(catalog.len(), 2);
            let english = catalog.lookup("english").unwrap();
            assert!(english.location().ends_with("english.json"));
        }
    }

    #[test]
    fn test_scan_missing_dir_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(Catalog::scan_dir(dir.path().join("absent"), "english").is_err());
    }
}
