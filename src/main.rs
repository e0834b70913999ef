use clap::Parser;
use std::{error::Error, path::PathBuf, sync::Arc};
use wordloom::{
    compose::{MergeKind, MergeStep},
    config::{ConfigStore, FileConfigStore, Overrides},
    source::{ExtensionDispatch, WordCache},
    Catalog,
};

/// compose typing-test word lists from dictionary files
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Compose the word list for a typing test: load a base dictionary, merge in further dictionaries with named strategies, run the result through a chain of modifiers and print the test definition as JSON."
)]
pub struct Cli {
    /// config file to read defaults from
    #[clap(long)]
    config: Option<PathBuf>,

    /// directory holding .txt and .json dictionaries
    #[clap(short = 'd', long = "dir")]
    dictionary_dir: Option<PathBuf>,

    /// language tag given to scanned dictionaries
    #[clap(short = 'l', long)]
    language: Option<String>,

    /// dictionary the test starts from
    #[clap(short = 'b', long)]
    base: Option<String>,

    /// additional dictionary as STRATEGY:NAME, e.g. interleave:code (repeatable)
    #[clap(short = 'm', long = "merge", value_parser = parse_merge_step)]
    merges: Vec<MergeStep>,

    /// modifier to apply, in order (repeatable): uppercase, lowercase, trim,
    /// capitalize, dedup, drop-empty, reverse, identity, limit:N, shuffle:SEED
    #[clap(long = "modifier")]
    modifiers: Vec<String>,

    /// list the dictionaries found and exit
    #[clap(long)]
    list: bool,

    /// store the effective settings as the new defaults once they compose
    #[clap(long)]
    save_config: bool,

    /// print single-line JSON
    #[clap(long)]
    compact: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            dictionary_dir: self.dictionary_dir.clone(),
            language: self.language.clone(),
            base: self.base.clone(),
            merges: self.merges.clone(),
            modifiers: self.modifiers.clone(),
        }
    }
}

fn parse_merge_step(s: &str) -> Result<MergeStep, String> {
    let step = MergeStep::parse(s).ok_or_else(|| format!("expected STRATEGY:NAME, got {s:?}"))?;
    if MergeKind::from_name(&step.strategy).is_none() {
        return Err(format!(
            "unknown merge strategy {:?} (one of: {})",
            step.strategy,
            MergeKind::names().join(", ")
        ));
    }
    Ok(step)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let config = store.load().with_overrides(cli.overrides());

    let dir = config.resolved_dictionary_dir();
    let catalog = Catalog::scan_dir(&dir, &config.language)
        .map_err(|e| format!("cannot read dictionaries in {}: {e}", dir.display()))?;

    if cli.list {
        for source in catalog.iter() {
            println!("{}\t{}\t{}", source.name(), source.language(), source.location());
        }
        return Ok(());
    }

    let cache = Arc::new(WordCache::new(ExtensionDispatch::standard()));
    let definition = config.plan.compose(&catalog, cache)?;

    // only settings that composed successfully become the new defaults
    if cli.save_config {
        store.save(&config)?;
        log::info!("saved config to {}", store.path().display());
    }

    let json = if cli.compact {
        serde_json::to_string(&definition)?
    } else {
        serde_json::to_string_pretty(&definition)?
    };
    println!("{json}");

    Ok(())
}
