// Library surface for the binary and integration tests.
pub mod app_dirs;
pub mod catalog;
pub mod compose;
pub mod config;
pub mod error;
pub mod source;

pub use catalog::{Catalog, DictionaryCatalog};
pub use compose::{CompositionPlan, TestComposer, TestDefinition};
pub use error::{ComposeError, LoadError};
pub use source::{WordCache, WordProvider, WordSource, Words};
