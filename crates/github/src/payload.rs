//! Wire shapes of the artifacts endpoints.

use retention::{Artifact, ArtifactCollection, ArtifactId, Timestamp};
use serde::Deserialize;

/// Body of `GET /repos/{owner}/{repo}/actions/artifacts`.
///
/// Both fields are required so that an error document (e.g. `{"message":
/// "Not Found"}`) fails to decode instead of looking like an empty project.
#[derive(Debug, Deserialize)]
pub(crate) struct ListArtifactsResponse {
    pub total_count: u64,
    pub artifacts: Vec<ArtifactPayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArtifactPayload {
    pub id: u64,
    pub created_at: Timestamp,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size_in_bytes: Option<u64>,
}

impl From<ArtifactPayload> for Artifact {
    fn from(payload: ArtifactPayload) -> Self {
        Artifact {
            id: ArtifactId::new(payload.id),
            created_at: payload.created_at,
            name: payload.name,
            size_in_bytes: payload.size_in_bytes,
        }
    }
}

impl From<ListArtifactsResponse> for ArtifactCollection {
    fn from(response: ListArtifactsResponse) -> Self {
        ArtifactCollection {
            total_count: response.total_count,
            artifacts: response.artifacts.into_iter().map(Artifact::from).collect(),
        }
    }
}

/// Decodes a list response body.
pub(crate) fn decode_artifact_list(body: &[u8]) -> Result<ArtifactCollection, serde_json::Error> {
    serde_json::from_slice::<ListArtifactsResponse>(body).map(ArtifactCollection::from)
}
