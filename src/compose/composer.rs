use super::definition::TestDefinition;
use super::merge::MergeStrategy;
use super::modifier::{Modifier, ModifierChain};
use crate::error::ComposeError;
use crate::source::{WordProvider, WordSource};
use std::marker::PhantomData;
use std::sync::Arc;

/// Composer state before the base source is set
pub struct Unsourced;

/// Composer state once a base source exists
pub struct Sourced;

/// Builds a [`TestDefinition`] from a base source, merged sources and modifiers.
///
/// Ordering rules are enforced by the type: the base source can be set once,
/// merged sources need a base first, and `build` consumes the composer.
///
/// ```compile_fail
/// use wordloom::compose::{MergeKind, TestComposer};
/// use wordloom::source::WordSource;
///
/// let extra = WordSource::new("extra", "english", "extra.txt");
/// // no base source yet
/// let _ = TestComposer::new().with_merged_source(MergeKind::Concat, extra);
/// ```
///
/// ```compile_fail
/// use wordloom::compose::TestComposer;
/// use wordloom::source::WordSource;
///
/// let base = WordSource::new("base", "english", "base.txt");
/// let _ = TestComposer::new()
///     .with_base_source(base.clone())
///     .with_base_source(base);
/// ```
///
/// ```compile_fail
/// use std::sync::Arc;
/// use wordloom::compose::TestComposer;
/// use wordloom::source::{LineReader, WordCache, WordSource};
///
/// let composer = TestComposer::new()
///     .with_loader(Arc::new(WordCache::new(LineReader)))
///     .with_base_source(WordSource::new("base", "english", "base.txt"));
/// let _first = composer.build();
/// let _second = composer.build();
/// ```
pub struct TestComposer<S = Unsourced, T = String> {
    loader: Option<Arc<dyn WordProvider>>,
    sources: Vec<WordSource>,
    merges: Vec<Box<dyn MergeStrategy<T>>>,
    modifiers: ModifierChain<T>,
    _state: PhantomData<S>,
}

impl TestComposer {
    /// A composer producing plain string words
    pub fn new() -> Self {
        Self::typed()
    }
}

impl<T> TestComposer<Unsourced, T> {
    /// A composer for any element type buildable from a loaded word
    pub fn typed() -> Self {
        Self {
            loader: None,
            sources: Vec::new(),
            merges: Vec::new(),
            modifiers: ModifierChain::new(),
            _state: PhantomData,
        }
    }

    pub fn with_base_source(self, source: WordSource) -> TestComposer<Sourced, T> {
        let mut sources = self.sources;
        sources.push(source);
        TestComposer {
            loader: self.loader,
            sources,
            merges: self.merges,
            modifiers: self.modifiers,
            _state: PhantomData,
        }
    }
}

impl<T> Default for TestComposer<Unsourced, T> {
    fn default() -> Self {
        Self::typed()
    }
}

impl<S, T> TestComposer<S, T> {
    /// Set the word loader, replacing any previous one
    pub fn with_loader(mut self, loader: Arc<dyn WordProvider>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Append a modifier; modifiers run in the order they are added
    pub fn with_modifier(mut self, modifier: impl Modifier<T> + 'static) -> Self {
        self.modifiers.push(Box::new(modifier));
        self
    }

    pub fn with_boxed_modifier(mut self, modifier: Box<dyn Modifier<T>>) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn sources(&self) -> &[WordSource] {
        &self.sources
    }
}

impl<T> TestComposer<Sourced, T>
where
    T: From<String>,
{
    /// Add `source`, folded into the running sequence with `strategy`
    pub fn with_merged_source(
        self,
        strategy: impl MergeStrategy<T> + 'static,
        source: WordSource,
    ) -> Self {
        self.with_boxed_merge(Box::new(strategy), source)
    }

    pub fn with_boxed_merge(
        mut self,
        strategy: Box<dyn MergeStrategy<T>>,
        source: WordSource,
    ) -> Self {
        self.merges.push(strategy);
        self.sources.push(source);
        self
    }

    /// Load, merge and modify. Fails without touching storage if no loader is set.
    pub fn build(self) -> Result<TestDefinition<T>, ComposeError> {
        let loader = self.loader.ok_or(ComposeError::MissingLoader)?;

        let loaded: Vec<Vec<T>> = self
            .sources
            .iter()
            .map(|source| {
                loader
                    .load_words(source)
                    .iter()
                    .cloned()
                    .map(T::from)
                    .collect()
            })
            .collect();

        let mut loaded = loaded.into_iter();
        let base = loaded.next().unwrap_or_default();
        let merged = self
            .merges
            .iter()
            .zip(loaded)
            .fold(base, |acc, (strategy, next)| strategy.merge(acc, next));

        let (words, modifier_names) = self.modifiers.apply(merged);
        log::debug!(
            "composed {} words from {} sources (modifiers: {})",
            words.len(),
            self.sources.len(),
            modifier_names.join(", ")
        );

        Ok(TestDefinition::new(self.sources, words, modifier_names))
    }
}
