use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::store::BuildStore;
use super::views::BuildStateView;

/// Identifier wrapper for build sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildId(pub String);

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A learner's build session as held by a repository.
#[derive(Debug, Clone)]
pub struct BuildRecord {
    pub id: BuildId,
    pub created_at: DateTime<Utc>,
    pub store: BuildStore,
}

impl BuildRecord {
    pub fn view(&self, now: DateTime<Utc>) -> BuildView {
        BuildView {
            build_id: self.id.clone(),
            created_at: self.created_at,
            state: BuildStateView::capture(&self.store, now),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildView {
    pub build_id: BuildId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub state: BuildStateView,
}

/// Storage abstraction so the service can be exercised in isolation.
pub trait BuildRepository: Send + Sync {
    fn insert(&self, record: BuildRecord) -> Result<BuildRecord, RepositoryError>;
    fn fetch(&self, id: &BuildId) -> Result<Option<BuildRecord>, RepositoryError>;
    /// Apply `apply` to the stored record while holding it exclusively.
    fn modify<T, F>(&self, id: &BuildId, apply: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut BuildRecord) -> T;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("build already exists")]
    Conflict,
    #[error("build not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
