use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use wordloom::compose::{CompletionInfo, MergeKind, TestComposer, WordModifier};
use wordloom::source::{ExtensionDispatch, WordCache, WordProvider, WordSource};
use wordloom::{Catalog, CompositionPlan, DictionaryCatalog};

// End-to-end: dictionary files on disk -> catalog -> cache -> composer.

fn write_fixtures(dir: &Path) {
    fs::write(dir.join("a.txt"), "alpha\nbeta\n\n").unwrap();
    fs::write(
        dir.join("b.json"),
        r#"{ "name": "b", "size": 1, "words": ["gamma"] }"#,
    )
    .unwrap();
    fs::write(dir.join("padded.txt"), " gamma \nbeta\n").unwrap();
    fs::write(dir.join("broken.json"), r#"{ "name": "broken", "words": [1, 2] }"#).unwrap();
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_files_compose_into_a_definition() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let catalog = Catalog::scan_dir(dir.path(), "english").unwrap();
    let cache = Arc::new(WordCache::new(ExtensionDispatch::standard()));

    let def = TestComposer::new()
        .with_loader(cache.clone())
        .with_base_source(catalog.lookup("a").unwrap())
        .with_merged_source(MergeKind::Concat, catalog.lookup("b").unwrap())
        .with_modifier(WordModifier::Uppercase)
        .build()
        .unwrap();

    assert_eq!(def.words(), ["ALPHA", "BETA", "GAMMA"]);
    assert_eq!(def.modifier_names(), ["uppercase"]);
    assert_eq!(def.completion(), &CompletionInfo::Pending);
    assert!(cache.contains("a") && cache.contains("b"));
}

#[test]
fn test_cached_words_survive_the_file_going_away() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let path = dir.path().join("a.txt");
    let source = WordSource::new("a", "english", path.to_string_lossy());
    let cache = WordCache::new(ExtensionDispatch::standard());

    let first = cache.load_words(&source);
    fs::remove_file(&path).unwrap();
    let second = cache.load_words(&source);

    assert_eq!(first, second);
    assert_eq!(second.as_slice(), ["alpha", "beta"]);
}

#[test]
fn test_failed_sources_degrade_to_empty() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let catalog = Catalog::scan_dir(dir.path(), "english").unwrap();
    let cache = Arc::new(WordCache::new(ExtensionDispatch::standard()));

    let ghost = dir.path().join("ghost.txt");
    let missing = WordSource::new("ghost", "english", ghost.to_string_lossy());
    assert!(cache.load_words(&missing).is_empty());

    let def = TestComposer::new()
        .with_loader(cache)
        .with_base_source(catalog.lookup("broken").unwrap())
        .with_merged_source(MergeKind::Interleave, missing)
        .build()
        .unwrap();

    assert!(def.words().is_empty());
    assert_eq!(def.sources().len(), 2);
}

#[test]
fn test_plan_drives_the_same_pipeline() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let catalog = Catalog::scan_dir(dir.path(), "english").unwrap();
    let cache = Arc::new(WordCache::new(ExtensionDispatch::standard()));

    let plan: CompositionPlan = serde_json::from_str(
        r#"{
            "base": "padded",
            "merges": [{ "strategy": "union", "source": "a" }],
            "modifiers": ["uppercase", "trim"]
        }"#,
    )
    .unwrap();
    let upper_then_trim = plan.compose(&catalog, cache.clone()).unwrap();

    let reordered = CompositionPlan {
        modifiers: vec!["trim".into(), "uppercase".into()],
        ..plan
    };
    let trim_then_upper = reordered.compose(&catalog, cache.clone()).unwrap();

    // union keeps " gamma " and the first "beta"; uppercase and trim commute here
    assert_eq!(upper_then_trim.words(), ["GAMMA", "BETA", "ALPHA"]);
    assert_eq!(trim_then_upper.words(), upper_then_trim.words());
    assert_eq!(upper_then_trim.modifier_names(), ["uppercase", "trim"]);
    assert_eq!(trim_then_upper.modifier_names(), ["trim", "uppercase"]);
}

#[test]
fn test_composers_share_one_cache_across_threads() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    let catalog = Arc::new(Catalog::scan_dir(dir.path(), "english").unwrap());
    let cache = Arc::new(WordCache::new(ExtensionDispatch::standard()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = catalog.clone();
            let cache = cache.clone();
            thread::spawn(move || {
                TestComposer::new()
                    .with_loader(cache)
                    .with_base_source(catalog.lookup("a").unwrap())
                    .with_merged_source(
                        MergeKind::ZipShortest,
                        catalog.lookup("padded").unwrap(),
                    )
                    .build()
                    .unwrap()
            })
        })
        .collect();

    let defs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(defs.iter().all(|d| d == &defs[0]));
    assert_eq!(defs[0].words(), ["alpha", " gamma ", "beta", "beta"]);
    assert_eq!(cache.len(), 2);
}
