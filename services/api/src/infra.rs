use metrics_exporter_prometheus::PrometheusHandle;
use pc_builder::assembly::{BuildId, BuildRecord, BuildRepository, RepositoryError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local build sessions. Each operation runs under the map lock.
#[derive(Default, Clone)]
pub(crate) struct InMemoryBuildRepository {
    records: Arc<Mutex<HashMap<BuildId, BuildRecord>>>,
}

impl InMemoryBuildRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<BuildId, BuildRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("build store lock poisoned".to_string()))
    }
}

impl BuildRepository for InMemoryBuildRepository {
    fn insert(&self, record: BuildRecord) -> Result<BuildRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &BuildId) -> Result<Option<BuildRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn modify<T, F>(&self, id: &BuildId, apply: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut BuildRecord) -> T,
    {
        let mut guard = self.lock()?;
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        Ok(apply(record))
    }
}
