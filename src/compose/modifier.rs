use clap::ValueEnum;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::marker::PhantomData;

/// Trait for transformations applied to the merged sequence
pub trait Modifier<T>: Send + Sync {
    fn name(&self) -> &str;

    /// Must be pure and deterministic
    fn apply(&self, words: Vec<T>) -> Vec<T>;
}

pub const IDENTITY: &str = "identity";

/// Passes every element through untouched; applied when no modifier is registered
pub struct Identity<T>(PhantomData<fn(T) -> T>);

impl<T> Identity<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Modifier<T> for Identity<T> {
    fn name(&self) -> &str {
        IDENTITY
    }

    fn apply(&self, words: Vec<T>) -> Vec<T> {
        words
    }
}

/// Parameterless modifiers over plain string words
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum WordModifier {
    Uppercase,
    Lowercase,
    /// Strip leading and trailing whitespace from each word
    Trim,
    /// Uppercase the first letter of each word
    Capitalize,
    /// Drop consecutive duplicates
    Dedup,
    DropEmpty,
    Reverse,
}

impl WordModifier {
    fn as_str(&self) -> &'static str {
        match self {
            WordModifier::Uppercase => "uppercase",
            WordModifier::Lowercase => "lowercase",
            WordModifier::Trim => "trim",
            WordModifier::Capitalize => "capitalize",
            WordModifier::Dedup => "dedup",
            WordModifier::DropEmpty => "drop-empty",
            WordModifier::Reverse => "reverse",
        }
    }
}

impl Modifier<String> for WordModifier {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn apply(&self, words: Vec<String>) -> Vec<String> {
        match self {
            WordModifier::Uppercase => words.iter().map(|w| w.to_uppercase()).collect(),
            WordModifier::Lowercase => words.iter().map(|w| w.to_lowercase()).collect(),
            WordModifier::Trim => words.iter().map(|w| w.trim().to_string()).collect(),
            WordModifier::Capitalize => words.iter().map(|w| capitalize_first_letter(w)).collect(),
            WordModifier::Dedup => words.into_iter().dedup().collect(),
            WordModifier::DropEmpty => words.into_iter().filter(|w| !w.is_empty()).collect(),
            WordModifier::Reverse => words.into_iter().rev().collect(),
        }
    }
}

fn capitalize_first_letter(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => first.to_uppercase().chain(chars).collect(),
        _ => word.to_string(),
    }
}

/// Keeps the first `count` words
pub struct Limit {
    count: usize,
    label: String,
}

impl Limit {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            label: format!("limit:{count}"),
        }
    }
}

impl<T> Modifier<T> for Limit {
    fn name(&self) -> &str {
        &self.label
    }

    fn apply(&self, mut words: Vec<T>) -> Vec<T> {
        words.truncate(self.count);
        words
    }
}

/// Seeded shuffle; the same seed always yields the same order
pub struct Shuffle {
    seed: u64,
    label: String,
}

impl Shuffle {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            label: format!("shuffle:{seed}"),
        }
    }
}

impl<T> Modifier<T> for Shuffle {
    fn name(&self) -> &str {
        &self.label
    }

    fn apply(&self, mut words: Vec<T>) -> Vec<T> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        words.shuffle(&mut rng);
        words
    }
}

/// A named closure used as a modifier
pub struct FnModifier<F> {
    name: String,
    f: F,
}

pub fn modifier_fn<T, F>(name: impl Into<String>, f: F) -> FnModifier<F>
where
    F: Fn(Vec<T>) -> Vec<T> + Send + Sync,
{
    FnModifier {
        name: name.into(),
        f,
    }
}

impl<T, F> Modifier<T> for FnModifier<F>
where
    F: Fn(Vec<T>) -> Vec<T> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, words: Vec<T>) -> Vec<T> {
        (self.f)(words)
    }
}

/// Resolve a modifier by name: a [`WordModifier`] name, `identity`,
/// `limit:<count>` or `shuffle:<seed>`.
pub fn parse_modifier(input: &str) -> Option<Box<dyn Modifier<String>>> {
    let input = input.trim();
    if let Some((name, arg)) = input.split_once(':') {
        return match name.to_ascii_lowercase().as_str() {
            "limit" => arg
                .trim()
                .parse()
                .ok()
                .map(|n| Box::new(Limit::new(n)) as Box<dyn Modifier<String>>),
            "shuffle" => arg
                .trim()
                .parse()
                .ok()
                .map(|s| Box::new(Shuffle::new(s)) as Box<dyn Modifier<String>>),
            _ => None,
        };
    }
    if input.eq_ignore_ascii_case(IDENTITY) {
        return Some(Box::new(Identity::<String>::new()));
    }
    <WordModifier as ValueEnum>::from_str(input, true)
        .ok()
        .map(|m| Box::new(m) as Box<dyn Modifier<String>>)
}

/// Ordered modifiers, applied as a left fold in registration order
pub struct ModifierChain<T> {
    modifiers: Vec<Box<dyn Modifier<T>>>,
}

impl<T> Default for ModifierChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ModifierChain<T> {
    pub fn new() -> Self {
        Self {
            modifiers: Vec::new(),
        }
    }

    pub fn push(&mut self, modifier: Box<dyn Modifier<T>>) {
        self.modifiers.push(modifier);
    }

    pub fn add_modifier(mut self, modifier: Box<dyn Modifier<T>>) -> Self {
        self.push(modifier);
        self
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.modifiers.iter().map(|m| m.name().to_string()).collect()
    }

    /// Run the chain, returning the output and the names of the modifiers
    /// that ran. An empty chain runs [`Identity`].
    pub fn apply(&self, words: Vec<T>) -> (Vec<T>, Vec<String>) {
        if self.modifiers.is_empty() {
            let identity = Identity::<T>::new();
            let name = identity.name().to_string();
            return (identity.apply(words), vec![name]);
        }

        let output = self
            .modifiers
            .iter()
            .fold(words, |acc, modifier| modifier.apply(acc));
        (output, self.names())
    }
}
