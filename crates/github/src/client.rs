//! REST client for the Actions artifacts endpoints.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use retention::{
    AccessToken, ArtifactCollection, ArtifactId, ArtifactRepository, ProjectRef, RemoteOperation,
    Settings, SweeperError,
};
use tracing::{debug, info};

use crate::payload::decode_artifact_list;

/// Sent on every request; the GitHub API rejects requests without a user agent.
pub const USER_AGENT: &str = concat!("artifact-cleaner/", env!("CARGO_PKG_VERSION"));

const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

/// [`ArtifactRepository`] backed by the GitHub REST API.
///
/// One connection pool is reused for the list call and every delete call.
/// No request timeout is configured.
#[derive(Debug, Clone)]
pub struct GithubArtifactClient {
    http: reqwest::Client,
    base_url: String,
    token: AccessToken,
}

impl GithubArtifactClient {
    /// Builds a client for `base_url` (e.g. `https://api.github.com/repos`).
    pub fn new(base_url: impl Into<String>, token: AccessToken) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Builds a client from the run settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        Self::new(settings.api_base_url.clone(), settings.token.clone())
    }

    /// `{base}/{owner}/{project}/actions/artifacts`
    pub fn artifacts_url(&self, project: &ProjectRef) -> String {
        format!(
            "{}/{}/{}/actions/artifacts",
            self.base_url, project.owner, project.project
        )
    }

    /// `{base}/{owner}/{project}/actions/artifacts/{id}`
    pub fn artifact_url(&self, project: &ProjectRef, id: ArtifactId) -> String {
        format!("{}/{}", self.artifacts_url(project), id)
    }

    fn headers(&self) -> Result<HeaderMap, SweeperError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.token.expose())).map_err(
            |_| SweeperError::Configuration {
                message: "access token contains characters not allowed in an HTTP header"
                    .to_string(),
            },
        )?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_V3_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

fn transport(operation: RemoteOperation, error: reqwest::Error) -> SweeperError {
    SweeperError::Transport {
        operation,
        message: error.to_string(),
    }
}

#[async_trait]
impl ArtifactRepository for GithubArtifactClient {
    async fn list_artifacts(
        &self,
        project: &ProjectRef,
    ) -> Result<ArtifactCollection, SweeperError> {
        let url = self.artifacts_url(project);
        debug!(%url, "GET artifact list");

        let response = self
            .http
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| transport(RemoteOperation::ListArtifacts, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport(RemoteOperation::ListArtifacts, e))?;

        info!(%status, bytes = body.len(), "Parsing artifact list");
        decode_artifact_list(&body).map_err(|e| SweeperError::Parse {
            message: format!("{e} (HTTP status {status})"),
        })
    }

    async fn delete_artifact(
        &self,
        project: &ProjectRef,
        id: ArtifactId,
    ) -> Result<(), SweeperError> {
        let url = self.artifact_url(project, id);
        debug!(%url, "DELETE artifact");

        let response = self
            .http
            .delete(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| transport(RemoteOperation::DeleteArtifact, e))?;

        let status = response.status();
        // Drain the body so the connection can be reused for the next call.
        response
            .bytes()
            .await
            .map_err(|e| transport(RemoteOperation::DeleteArtifact, e))?;
        debug!(artifact_id = %id, %status, "DELETE completed");
        Ok(())
    }
}
