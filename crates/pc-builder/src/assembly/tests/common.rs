use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assembly::catalog::PartCatalog;
use crate::assembly::domain::{Part, PartId};
use crate::assembly::repository::{BuildId, BuildRecord, BuildRepository, RepositoryError};
use crate::assembly::service::BuildSessionService;
use crate::assembly::store::{BuildSettings, BuildStore};
use crate::assembly::zone::{PlacementMap, Zone};
use crate::assembly::build_router;

pub(super) fn catalog() -> Arc<PartCatalog> {
    Arc::new(PartCatalog::standard())
}

pub(super) fn store() -> BuildStore {
    BuildStore::new(catalog())
}

pub(super) fn pid(id: &str) -> PartId {
    PartId::new(id)
}

pub(super) fn part(id: &str) -> Part {
    PartCatalog::standard()
        .find(&PartId::new(id))
        .cloned()
        .unwrap_or_else(|| panic!("standard catalog has {id}"))
}

/// Placement map built directly, bypassing the validator.
pub(super) fn placements(entries: &[(Zone, &str)]) -> PlacementMap {
    entries
        .iter()
        .map(|(zone, id)| (*zone, part(id)))
        .collect()
}

/// Store with the given parts installed in order through `place`.
pub(super) fn store_with(entries: &[(Zone, &str)]) -> BuildStore {
    let mut store = store();
    for (zone, id) in entries {
        store
            .place(&pid(id), *zone)
            .unwrap_or_else(|err| panic!("{id} into {zone}: {err}"));
    }
    store
}

pub(super) fn build_service() -> (BuildSessionService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service =
        BuildSessionService::new(repository.clone(), catalog(), BuildSettings::default());
    (service, repository)
}

pub(super) fn router_with_service(service: BuildSessionService<MemoryRepository>) -> axum::Router {
    build_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<BuildId, BuildRecord>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self, id: &BuildId) -> Option<BuildStore> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        guard.get(id).map(|record| record.store.clone())
    }
}

impl BuildRepository for MemoryRepository {
    fn insert(&self, record: BuildRecord) -> Result<BuildRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &BuildId) -> Result<Option<BuildRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn modify<T, F>(&self, id: &BuildId, apply: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut BuildRecord) -> T,
    {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        Ok(apply(record))
    }
}

pub(super) struct UnavailableRepository;

impl BuildRepository for UnavailableRepository {
    fn insert(&self, _record: BuildRecord) -> Result<BuildRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &BuildId) -> Result<Option<BuildRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn modify<T, F>(&self, _id: &BuildId, _apply: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut BuildRecord) -> T,
    {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
