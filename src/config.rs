use crate::app_dirs::AppDirs;
use crate::compose::{CompositionPlan, MergeStep};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory scanned for dictionaries; the platform data dir when unset
    pub dictionary_dir: Option<PathBuf>,
    pub language: String,
    pub plan: CompositionPlan,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_dir: None,
            language: "english".to_string(),
            plan: CompositionPlan {
                base: Some("english".to_string()),
                merges: Vec::new(),
                modifiers: Vec::new(),
            },
        }
    }
}

/// Values given on the command line; anything set replaces the stored value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dictionary_dir: Option<PathBuf>,
    pub language: Option<String>,
    pub base: Option<String>,
    pub merges: Vec<MergeStep>,
    pub modifiers: Vec<String>,
}

impl Config {
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.dictionary_dir.is_some() {
            self.dictionary_dir = overrides.dictionary_dir;
        }
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if overrides.base.is_some() {
            self.plan.base = overrides.base;
        }
        if !overrides.merges.is_empty() {
            self.plan.merges = overrides.merges;
        }
        if !overrides.modifiers.is_empty() {
            self.plan.modifiers = overrides.modifiers;
        }
        self
    }

    pub fn resolved_dictionary_dir(&self) -> PathBuf {
        self.dictionary_dir
            .clone()
            .or_else(AppDirs::dictionary_dir)
            .unwrap_or_else(|| PathBuf::from("dictionaries"))
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("wordloom_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => return cfg,
                Err(e) => log::warn!("ignoring malformed config {}: {e}", self.path.display()),
            },
            Err(e) => log::debug!("no config at {}: {e}", self.path.display()),
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn test_save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            dictionary_dir: Some(dir.path().to_path_buf()),
            language: "german".into(),
            plan: CompositionPlan {
                base: Some("deutsch".into()),
                merges: vec![MergeStep::new("interleave", "code")],
                modifiers: vec!["lowercase".into(), "limit:25".into()],
            },
        };
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn test_missing_or_malformed_config_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        assert_eq!(store.load(), Config::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "language": "german" }"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.language, "german");
        assert_eq!(cfg.plan, Config::default().plan);
    }

    #[test]
    fn test_overrides_replace_only_what_is_set() {
        let base = Config {
            dictionary_dir: Some(PathBuf::from("/dicts")),
            language: "english".into(),
            plan: CompositionPlan {
                base: Some("english".into()),
                merges: vec![MergeStep::new("concat", "code")],
                modifiers: vec!["trim".into()],
            },
        };

        let unchanged = base.clone().with_overrides(Overrides::default());
        assert_eq!(unchanged, base);

        let changed = base.with_overrides(Overrides {
            base: Some("english10k".into()),
            modifiers: vec!["uppercase".into()],
            ..Default::default()
        });
        assert_eq!(changed.plan.base.as_deref(), Some("english10k"));
        assert_eq!(changed.plan.merges, vec![MergeStep::new("concat", "code")]);
        assert_eq!(changed.plan.modifiers, vec!["uppercase"]);
        assert_eq!(changed.resolved_dictionary_dir(), PathBuf::from("/dicts"));
    }
}
