use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::catalog::PartCatalog;
use super::domain::PartId;
use super::repository::{BuildId, BuildRecord, BuildRepository, RepositoryError};
use super::store::{BuildError, BuildSettings, BuildStore};
use super::zone::Zone;

/// Service that owns build sessions and applies store operations to them.
pub struct BuildSessionService<R> {
    repository: Arc<R>,
    catalog: Arc<PartCatalog>,
    settings: BuildSettings,
}

static BUILD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_build_id() -> BuildId {
    let id = BUILD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    BuildId(format!("build-{id:06}"))
}

impl<R> BuildSessionService<R>
where
    R: BuildRepository + 'static,
{
    pub fn new(repository: Arc<R>, catalog: Arc<PartCatalog>, settings: BuildSettings) -> Self {
        Self {
            repository,
            catalog,
            settings,
        }
    }

    pub fn catalog(&self) -> &PartCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> BuildSettings {
        self.settings
    }

    /// Open an empty build against the shared catalog.
    pub fn create(&self) -> Result<BuildRecord, BuildServiceError> {
        let record = BuildRecord {
            id: next_build_id(),
            created_at: Utc::now(),
            store: BuildStore::with_settings(Arc::clone(&self.catalog), self.settings),
        };

        let stored = self.repository.insert(record)?;
        info!(build_id = %stored.id, "build session created");
        Ok(stored)
    }

    pub fn get(&self, build_id: &BuildId) -> Result<BuildRecord, BuildServiceError> {
        let record = self
            .repository
            .fetch(build_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn place(
        &self,
        build_id: &BuildId,
        part_id: &PartId,
        zone: Zone,
    ) -> Result<BuildRecord, BuildServiceError> {
        self.apply(build_id, |store| store.place(part_id, zone))
    }

    pub fn remove(&self, build_id: &BuildId, zone: Zone) -> Result<BuildRecord, BuildServiceError> {
        self.apply(build_id, |store| store.remove(zone).map(|_| ()))
    }

    pub fn reset(&self, build_id: &BuildId) -> Result<BuildRecord, BuildServiceError> {
        self.apply(build_id, |store| {
            store.reset();
            Ok(())
        })
    }

    pub fn random_build(&self, build_id: &BuildId) -> Result<BuildRecord, BuildServiceError> {
        self.apply(build_id, |store| {
            store.random_build();
            Ok(())
        })
    }

    pub fn select_part(
        &self,
        build_id: &BuildId,
        part_id: &PartId,
    ) -> Result<BuildRecord, BuildServiceError> {
        self.apply(build_id, |store| store.select_part(part_id))
    }

    pub fn clear_selection(&self, build_id: &BuildId) -> Result<BuildRecord, BuildServiceError> {
        self.apply(build_id, |store| {
            store.clear_selection();
            Ok(())
        })
    }

    /// Place whatever part the build has selected. Without a selection this is a no-op.
    pub fn place_selected(
        &self,
        build_id: &BuildId,
        zone: Zone,
    ) -> Result<BuildRecord, BuildServiceError> {
        self.apply(build_id, |store| store.place_selected(zone).map(|_| ()))
    }

    // Rejections are still persisted so the stored validation error reflects them.
    fn apply<F>(&self, build_id: &BuildId, operation: F) -> Result<BuildRecord, BuildServiceError>
    where
        F: FnOnce(&mut BuildStore) -> Result<(), BuildError>,
    {
        let (outcome, snapshot) = self.repository.modify(build_id, |record| {
            let outcome = operation(&mut record.store);
            (outcome, record.clone())
        })?;

        outcome?;
        Ok(snapshot)
    }
}

/// Error raised by the build session service.
#[derive(Debug, thiserror::Error)]
pub enum BuildServiceError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
