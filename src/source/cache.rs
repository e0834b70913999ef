use super::{WordReader, WordSource, Words};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Infallible word lookup consumed by the composer
pub trait WordProvider: Send + Sync {
    /// Words for `source`; an unreadable source yields an empty list
    fn load_words(&self, source: &WordSource) -> Arc<Words>;
}

type Slot = Arc<OnceLock<Arc<Words>>>;

/// Memoizing front for a [`WordReader`].
///
/// Entries are keyed by source *name* only: two sources sharing a name but
/// pointing at different locations resolve to whichever was loaded first.
/// Concurrent loads of the same name wait on a single read.
pub struct WordCache<R: WordReader> {
    reader: R,
    slots: Mutex<HashMap<String, Slot>>,
}

impl<R: WordReader> WordCache<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Whether a load for `name` has completed
    pub fn contains(&self, name: &str) -> bool {
        self.slots()
            .get(name)
            .is_some_and(|slot| slot.get().is_some())
    }

    pub fn len(&self) -> usize {
        self.slots()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the entry for `name` so the next load reads storage again.
    /// Callers already waiting on the old entry still receive its value.
    pub fn invalidate(&self, name: &str) -> bool {
        self.slots().remove(name).is_some()
    }

    pub fn clear(&self) {
        self.slots().clear();
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot_for(&self, name: &str) -> Slot {
        self.slots()
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(OnceLock::new()))
            .clone()
    }

    fn read(&self, source: &WordSource) -> Arc<Words> {
        log::debug!(
            "reading word source {} from {}",
            source.name(),
            source.location()
        );
        match self.reader.read_words(source) {
            Ok(words) => Arc::new(words),
            Err(e) => {
                log::warn!(
                    "failed to load word source {} ({}): {e}",
                    source.name(),
                    source.location()
                );
                Arc::new(Words::new())
            }
        }
    }
}

impl<R: WordReader> WordProvider for WordCache<R> {
    fn load_words(&self, source: &WordSource) -> Arc<Words> {
        // The map lock is released before reading; only the per-name cell blocks.
        let slot = self.slot_for(source.name());
        slot.get_or_init(|| self.read(source)).clone()
    }
}
