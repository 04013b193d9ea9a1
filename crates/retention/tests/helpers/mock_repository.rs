#![allow(dead_code)]

use async_trait::async_trait;
use retention::{
    AccessToken, Artifact, ArtifactCollection, ArtifactId, ArtifactRepository, LogFormat,
    OwnerName, ProjectName, ProjectRef, RemoteOperation, RetentionPeriod, Settings, SweeperError,
    Timestamp,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

pub fn ts(value: &str) -> Timestamp {
    Timestamp::parse_rfc3339(value).unwrap()
}

pub fn artifact(id: u64, created_at: &str) -> Artifact {
    Artifact::new(ArtifactId::new(id), ts(created_at))
}

pub fn settings(retention_days: u32) -> Settings {
    Settings {
        retention: RetentionPeriod::days(retention_days),
        owner: OwnerName::new("octo-org").unwrap(),
        project: ProjectName::new("widgets").unwrap(),
        token: AccessToken::new("ghp_test").unwrap(),
        api_base_url: "https://api.github.com/repos".to_string(),
        dry_run: false,
        log_format: LogFormat::Text,
    }
}

pub enum ListBehaviour {
    Respond(ArtifactCollection),
    TransportError,
    ParseError,
}

pub struct MockArtifactRepository {
    list: ListBehaviour,
    failing_deletes: RwLock<HashSet<u64>>,
    delete_calls: RwLock<Vec<u64>>,
    list_calls: AtomicU64,
}

impl MockArtifactRepository {
    pub fn with_artifacts(artifacts: Vec<Artifact>) -> Self {
        let total_count = artifacts.len() as u64;
        Self::with_collection(ArtifactCollection {
            total_count,
            artifacts,
        })
    }

    pub fn with_collection(collection: ArtifactCollection) -> Self {
        Self::with_list_behaviour(ListBehaviour::Respond(collection))
    }

    pub fn with_list_behaviour(list: ListBehaviour) -> Self {
        Self {
            list,
            failing_deletes: RwLock::new(HashSet::new()),
            delete_calls: RwLock::new(Vec::new()),
            list_calls: AtomicU64::new(0),
        }
    }

    pub async fn fail_delete_of(&self, id: u64) {
        self.failing_deletes.write().await.insert(id);
    }

    /// Ids passed to `delete_artifact`, in call order, including failed calls.
    pub async fn delete_calls(&self) -> Vec<u64> {
        self.delete_calls.read().await.clone()
    }

    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ArtifactRepository for MockArtifactRepository {
    async fn list_artifacts(
        &self,
        _project: &ProjectRef,
    ) -> Result<ArtifactCollection, SweeperError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        match &self.list {
            ListBehaviour::Respond(collection) => Ok(collection.clone()),
            ListBehaviour::TransportError => Err(SweeperError::Transport {
                operation: RemoteOperation::ListArtifacts,
                message: "connection refused".to_string(),
            }),
            ListBehaviour::ParseError => Err(SweeperError::Parse {
                message: "expected value at line 1 column 1".to_string(),
            }),
        }
    }

    async fn delete_artifact(
        &self,
        _project: &ProjectRef,
        id: ArtifactId,
    ) -> Result<(), SweeperError> {
        self.delete_calls.write().await.push(id.as_u64());
        if self.failing_deletes.read().await.contains(&id.as_u64()) {
            return Err(SweeperError::Transport {
                operation: RemoteOperation::DeleteArtifact,
                message: "connection reset by peer".to_string(),
            });
        }
        Ok(())
    }
}
