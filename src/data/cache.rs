use std::path::Path;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::error::LoadError;
use super::loader::load_file;
use super::model::RacketTable;

// ---------------------------------------------------------------------------
// Compute-once holder for the session's table
// ---------------------------------------------------------------------------

/// Holds the table for the lifetime of the process.
///
/// The first successful load wins and is shared from then on. Concurrent first
/// callers block on one initialisation instead of loading twice. A failed load
/// stores nothing, so a later call tries again.
#[derive(Debug, Default)]
pub struct SessionCache {
    table: OnceCell<Arc<RacketTable>>,
}

impl SessionCache {
    pub const fn new() -> Self {
        Self {
            table: OnceCell::new(),
        }
    }

    /// Return the cached table, running `load` only if none is cached yet.
    pub fn get_or_load<F>(&self, load: F) -> Result<Arc<RacketTable>, LoadError>
    where
        F: FnOnce() -> Result<RacketTable, LoadError>,
    {
        self.table
            .get_or_try_init(|| load().map(Arc::new))
            .cloned()
    }

    pub fn get(&self) -> Option<Arc<RacketTable>> {
        self.table.get().cloned()
    }
}

static SESSION: SessionCache = SessionCache::new();

/// Process-wide table, loaded from `path` on first use.
///
/// Once a table is cached, later calls return it whatever `path` they pass;
/// there is no invalidation within a process.
pub fn session_table(path: &Path) -> Result<Arc<RacketTable>, LoadError> {
    SESSION.get_or_load(|| load_file(path))
}
