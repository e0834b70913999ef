use super::composer::TestComposer;
use super::definition::TestDefinition;
use super::merge::MergeKind;
use super::modifier::parse_modifier;
use crate::catalog::DictionaryCatalog;
use crate::error::ComposeError;
use crate::source::{WordProvider, WordSource};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One additional source and how it is merged in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStep {
    pub strategy: String,
    pub source: String,
}

impl MergeStep {
    pub fn new(strategy: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            source: source.into(),
        }
    }

    /// Parse `strategy:source`
    pub fn parse(s: &str) -> Option<Self> {
        let (strategy, source) = s.split_once(':')?;
        let (strategy, source) = (strategy.trim(), source.trim());
        if strategy.is_empty() || source.is_empty() {
            return None;
        }
        Some(Self::new(strategy, source))
    }
}

/// Name-based description of a composition, resolved against a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionPlan {
    pub base: Option<String>,
    pub merges: Vec<MergeStep>,
    pub modifiers: Vec<String>,
}

impl CompositionPlan {
    /// Resolve every name, then compose. No words are loaded unless
    /// all names resolve.
    pub fn compose(
        &self,
        catalog: &impl DictionaryCatalog,
        loader: Arc<dyn WordProvider>,
    ) -> Result<TestDefinition, ComposeError> {
        let base_name = self
            .base
            .as_deref()
            .ok_or(ComposeError::MissingBaseSource)?;
        let base = resolve_source(catalog, base_name)?;

        let merges = self
            .merges
            .iter()
            .map(|step| {
                let kind = MergeKind::from_name(&step.strategy)
                    .ok_or_else(|| ComposeError::UnknownMergeStrategy(step.strategy.clone()))?;
                Ok((kind, resolve_source(catalog, &step.source)?))
            })
            .collect::<Result<Vec<_>, ComposeError>>()?;

        let modifiers = self
            .modifiers
            .iter()
            .map(|name| {
                parse_modifier(name).ok_or_else(|| ComposeError::UnknownModifier(name.clone()))
            })
            .collect::<Result<Vec<_>, ComposeError>>()?;

        let composer = TestComposer::new()
            .with_loader(loader)
            .with_base_source(base);
        let composer = merges
            .into_iter()
            .fold(composer, |c, (kind, source)| c.with_merged_source(kind, source));
        modifiers
            .into_iter()
            .fold(composer, |c, modifier| c.with_boxed_modifier(modifier))
            .build()
    }
}

fn resolve_source(
    catalog: &impl DictionaryCatalog,
    name: &str,
) -> Result<WordSource, ComposeError> {
    catalog
        .lookup(name)
        .ok_or_else(|| ComposeError::UnknownSource(name.to_string()))
}
