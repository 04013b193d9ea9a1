//! The single maintenance pass: list, filter by age, delete, report.

use tracing::{error, info, info_span, Instrument};

use crate::{
    ArtifactRepository, ProjectRef, RetentionDecision, RetentionPeriod, Settings, SweepOutcome,
    SweepReport, SweepRunId, SweeperError, Timestamp,
};

/// Runs one retention sweep against an [`ArtifactRepository`].
pub struct ArtifactSweeper<R> {
    repository: R,
    project: ProjectRef,
    retention: RetentionPeriod,
    dry_run: bool,
}

impl<R: ArtifactRepository> ArtifactSweeper<R> {
    pub fn new(repository: R, settings: &Settings) -> Self {
        Self {
            repository,
            project: ProjectRef {
                owner: settings.owner.clone(),
                project: settings.project.clone(),
            },
            retention: settings.retention,
            dry_run: settings.dry_run,
        }
    }

    /// Returns the repository the sweeper was built with.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Executes the sweep with `now` as the reference time for the cutoff.
    ///
    /// Artifacts are visited in list order. The first failed delete ends the
    /// sweep; artifacts after it are not visited and earlier deletions stand.
    pub async fn run(&self, now: Timestamp) -> Result<SweepOutcome, SweeperError> {
        let run_id = SweepRunId::new_random();
        let span = info_span!(
            "artifact_sweep",
            %run_id,
            owner = %self.project.owner,
            project = %self.project.project,
        );
        self.run_inner(now).instrument(span).await
    }

    async fn run_inner(&self, now: Timestamp) -> Result<SweepOutcome, SweeperError> {
        info!(retention = %self.retention, dry_run = self.dry_run, "Starting artifact sweep");

        info!("Fetching artifact list");
        let collection = self.repository.list_artifacts(&self.project).await?;

        if collection.is_empty() {
            info!(project = %self.project, "There are no artifacts to delete");
            return Ok(SweepOutcome::NothingToDelete);
        }

        let cutoff = self.retention.cutoff_from(now);
        info!(total = collection.total_count, %cutoff, "Artifacts found");

        let mut deleted = 0u64;
        let mut retained = 0u64;

        for artifact in &collection.artifacts {
            let id = artifact.id;
            match RetentionPeriod::decide(artifact.created_at, cutoff) {
                RetentionDecision::Retain => {
                    retained += 1;
                    info!(
                        artifact_id = %id,
                        name = artifact.name.as_deref().unwrap_or(""),
                        created_at = %artifact.created_at,
                        %cutoff,
                        "Artifact not deleted: newer than the retention cutoff"
                    );
                    continue;
                }
                RetentionDecision::Delete => {}
            }

            if self.dry_run {
                deleted += 1;
                info!(
                    artifact_id = %id,
                    name = artifact.name.as_deref().unwrap_or(""),
                    created_at = %artifact.created_at,
                    "Dry run: artifact would be deleted"
                );
                continue;
            }

            if let Err(e) = self.repository.delete_artifact(&self.project, id).await {
                error!(
                    artifact_id = %id,
                    deleted_so_far = deleted,
                    error = %e,
                    "Artifact deletion failed; remaining artifacts are not processed"
                );
                return Err(e);
            }

            deleted += 1;
            info!(
                artifact_id = %id,
                name = artifact.name.as_deref().unwrap_or(""),
                size_in_bytes = artifact.size_in_bytes.unwrap_or(0),
                "Artifact removed"
            );
        }

        let report = SweepReport {
            total_count: collection.total_count,
            deleted,
            retained,
            cutoff,
            dry_run: self.dry_run,
        };
        info!(
            deleted = report.deleted,
            retained = report.retained,
            total = report.total_count,
            dry_run = report.dry_run,
            "Total artifacts deleted: {}",
            report.deleted
        );
        Ok(SweepOutcome::Completed(report))
    }
}
