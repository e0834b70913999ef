use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "wordloom")
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::project().map(|pd| pd.config_dir().join("config.json"))
    }

    /// Default home of dictionary files, `$HOME/.local/share/wordloom/dictionaries` on Linux
    pub fn dictionary_dir() -> Option<PathBuf> {
        Self::project().map(|pd| pd.data_dir().join("dictionaries"))
    }
}
