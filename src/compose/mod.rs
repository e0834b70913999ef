pub mod composer;
pub mod definition;
pub mod merge;
pub mod modifier;
pub mod plan;

// Re-export the main types for convenience
pub use composer::{Sourced, TestComposer, Unsourced};
pub use definition::{CompletionInfo, TestDefinition};
pub use merge::{merge_fn, MergeKind, MergeStrategy};
pub use modifier::{
    modifier_fn, parse_modifier, Identity, Limit, Modifier, ModifierChain, Shuffle, WordModifier,
};
pub use plan::{CompositionPlan, MergeStep};
