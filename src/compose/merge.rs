use clap::ValueEnum;
use itertools::Itertools;
use std::hash::Hash;

/// Trait for folding the next source's words into the running sequence
pub trait MergeStrategy<T>: Send + Sync {
    fn name(&self) -> &str;

    /// Combine `accumulated` with `next`. Must be pure and deterministic.
    fn merge(&self, accumulated: Vec<T>, next: Vec<T>) -> Vec<T>;
}

/// Built-in strategies, addressable by name
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum MergeKind {
    /// `accumulated` followed by `next`
    Concat,
    /// Alternate elements, then the longer tail
    Interleave,
    /// Alternate pairs until the shorter side runs out
    ZipShortest,
    /// Concat keeping only the first occurrence of each element
    Union,
}

impl MergeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name.trim(), true).ok()
    }

    pub fn names() -> Vec<String> {
        Self::value_variants()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn as_str(&self) -> &'static str {
        match self {
            MergeKind::Concat => "concat",
            MergeKind::Interleave => "interleave",
            MergeKind::ZipShortest => "zip-shortest",
            MergeKind::Union => "union",
        }
    }
}

impl<T> MergeStrategy<T> for MergeKind
where
    T: Clone + Eq + Hash + Send + Sync,
{
    fn name(&self) -> &str {
        self.as_str()
    }

    fn merge(&self, accumulated: Vec<T>, next: Vec<T>) -> Vec<T> {
        match self {
            MergeKind::Concat => accumulated.into_iter().chain(next).collect(),
            MergeKind::Interleave => accumulated.into_iter().interleave(next).collect(),
            MergeKind::ZipShortest => accumulated
                .into_iter()
                .zip(next)
                .flat_map(|(a, b)| [a, b])
                .collect(),
            MergeKind::Union => accumulated.into_iter().chain(next).unique().collect(),
        }
    }
}

/// A named closure used as a merge strategy
pub struct FnMerge<F> {
    name: String,
    f: F,
}

pub fn merge_fn<T, F>(name: impl Into<String>, f: F) -> FnMerge<F>
where
    F: Fn(Vec<T>, Vec<T>) -> Vec<T> + Send + Sync,
{
    FnMerge {
        name: name.into(),
        f,
    }
}

impl<T, F> MergeStrategy<T> for FnMerge<F>
where
    F: Fn(Vec<T>, Vec<T>) -> Vec<T> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn merge(&self, accumulated: Vec<T>, next: Vec<T>) -> Vec<T> {
        (self.f)(accumulated, next)
    }
}
