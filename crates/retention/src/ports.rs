//! Port traits implemented by infrastructure crates.
//!
//! The sweeper depends only on [`ArtifactRepository`]; the `github` crate
//! supplies the REST implementation and tests supply in-memory fakes.

use async_trait::async_trait;

use crate::{ArtifactCollection, ArtifactId, OwnerName, ProjectName, SweeperError};

/// Coordinates of the repository whose artifacts are swept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub owner: OwnerName,
    pub project: ProjectName,
}

impl std::fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.project)
    }
}

/// Remote store of workflow artifacts.
///
/// Implementations must not retry: a failed call is reported once and the
/// sweep ends.
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// Fetches the artifacts of `project` in the order the remote returns them.
    ///
    /// # Errors
    ///
    /// [`SweeperError::Transport`] when the request fails,
    /// [`SweeperError::Parse`] when the body is not a valid artifact list.
    async fn list_artifacts(&self, project: &ProjectRef)
        -> Result<ArtifactCollection, SweeperError>;

    /// Deletes one artifact.
    ///
    /// Success means only that the request completed; the response status is
    /// not inspected.
    ///
    /// # Errors
    ///
    /// [`SweeperError::Transport`] when the request fails.
    async fn delete_artifact(&self, project: &ProjectRef, id: ArtifactId)
        -> Result<(), SweeperError>;
}
