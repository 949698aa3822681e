//! Background bulk load.
//!
//! One named thread decodes the source, loads the corpus and builds the
//! index while the caller keeps serving. Foreground code either polls
//! `LoadTask::is_ready` or blocks in `LoadTask::wait`.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{error, info};

use crate::corpus::{CardDatabase, CardSource};
use crate::error::{Error, Result};
use crate::search::{IndexStats, SearchEngine};

const LOADER_THREAD_NAME: &str = "corpus-loader";

/// Handle to a running background load.
///
/// Dropping the handle detaches the thread; the engine still becomes ready
/// when it finishes.
#[derive(Debug)]
pub struct LoadTask<D: CardDatabase> {
    engine: Arc<SearchEngine<D>>,
    handle: JoinHandle<Result<IndexStats>>,
}

/// Start loading `source` into `engine` on a background thread.
///
/// Fails with `Io` only if the thread cannot be spawned.
pub fn spawn_load<D, S>(engine: Arc<SearchEngine<D>>, source: S) -> Result<LoadTask<D>>
where
    D: CardDatabase + 'static,
    S: CardSource + Send + 'static,
{
    let worker = Arc::clone(&engine);
    let handle = thread::Builder::new()
        .name(LOADER_THREAD_NAME.to_string())
        .spawn(move || {
            let result = worker
                .load_from(source)
                .and_then(|()| worker.create_index());
            match &result {
                Ok(stats) => info!(cards = stats.cards_indexed, "background load finished"),
                Err(e) => error!(error = %e, "background load failed"),
            }
            result
        })?;

    Ok(LoadTask { engine, handle })
}

impl<D: CardDatabase> LoadTask<D> {
    /// Non-blocking: true once the corpus is loaded and indexed.
    pub fn is_ready(&self) -> bool {
        self.engine.is_ready()
    }

    /// True once the thread has exited, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn engine(&self) -> &Arc<SearchEngine<D>> {
        &self.engine
    }

    /// Block until the load ends and return its outcome.
    pub fn wait(self) -> Result<IndexStats> {
        self.handle.join().map_err(|_| Error::LoadTaskPanicked)?
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::corpus::JsonCardSource;

    #[test]
    fn test_background_load_becomes_ready() {
        let engine = Arc::new(SearchEngine::new());
        let records: Vec<Value> = vec![
            json!({ "name": "A", "types": ["Creature"], "text": "flying" }),
            json!({ "name": "B", "types": ["Creature"], "text": "flying" }),
        ];

        let task = spawn_load(Arc::clone(&engine), records).unwrap();
        let stats = task.wait().unwrap();

        assert_eq!(stats.cards_indexed, 2);
        assert!(engine.is_ready());
        assert_eq!(engine.find_similar("A", 1).unwrap()[0].name(), "B");
    }

    #[test]
    fn test_background_load_reports_failure() {
        let engine = Arc::new(SearchEngine::new());
        let task = spawn_load(Arc::clone(&engine), JsonCardSource::from_slice(b"not json")).unwrap();

        assert!(matches!(task.wait(), Err(Error::Json(_))));
        assert!(!engine.is_ready());
    }
}
