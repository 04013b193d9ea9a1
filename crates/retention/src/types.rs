//! Shared value types for the artifact retention domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! meaningful values with invariants and participate in the retention
//! computation.

use chrono::{DateTime, Days, Utc};
use serde::{Deserialize, Serialize};

use crate::ArtifactId;

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly; the underlying representation can change without affecting the
/// domain API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parses an RFC 3339 timestamp (e.g. `"2024-03-01T12:00:00Z"`).
    pub fn parse_rfc3339(value: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

// ---------------------------------------------------------------------------
// Retention
// ---------------------------------------------------------------------------

/// How many calendar days an artifact is kept before it becomes eligible for
/// deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RetentionPeriod(u32);

impl RetentionPeriod {
    /// Creates a retention period of `days` calendar days.
    pub fn days(days: u32) -> Self {
        Self(days)
    }

    /// Returns the number of days.
    pub fn as_days(self) -> u32 {
        self.0
    }

    /// Computes the retention cutoff: `now` minus this many calendar days.
    ///
    /// Clamps to the earliest representable instant when the subtraction
    /// leaves chrono's supported range.
    pub fn cutoff_from(self, now: Timestamp) -> Timestamp {
        let cutoff = now
            .as_datetime()
            .checked_sub_days(Days::new(u64::from(self.0)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Timestamp::from_utc(cutoff)
    }

    /// Decides whether an artifact created at `created_at` survives `cutoff`.
    ///
    /// Artifacts strictly newer than the cutoff are retained; everything else,
    /// including an artifact created exactly at the cutoff, is deleted.
    pub fn decide(created_at: Timestamp, cutoff: Timestamp) -> RetentionDecision {
        if created_at > cutoff {
            RetentionDecision::Retain
        } else {
            RetentionDecision::Delete
        }
    }
}

impl std::fmt::Display for RetentionPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.0)
    }
}

/// Outcome of comparing one artifact against the retention cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetentionDecision {
    /// Newer than the cutoff; left in place.
    Retain,
    /// At or older than the cutoff; removed from the remote project.
    Delete,
}

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

/// A stored workflow artifact as reported by the remote API.
///
/// Read-only within this program; deletion happens only on the remote side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Remote identifier used to address the delete call.
    pub id: ArtifactId,

    /// When the artifact was uploaded.
    pub created_at: Timestamp,

    /// Display name; only used in log lines.
    pub name: Option<String>,

    /// Stored size; only used in log lines.
    pub size_in_bytes: Option<u64>,
}

impl Artifact {
    /// Creates an artifact with only the fields the retention logic needs.
    pub fn new(id: ArtifactId, created_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            name: None,
            size_in_bytes: None,
        }
    }
}

/// The single page of artifacts returned by the list call.
///
/// `artifacts.len() == total_count` is assumed, never checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactCollection {
    /// Count reported by the remote API.
    pub total_count: u64,

    /// Artifacts in the order the API returned them.
    pub artifacts: Vec<Artifact>,
}

impl ArtifactCollection {
    /// Returns `true` when the remote API reports no artifacts at all.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

// ---------------------------------------------------------------------------
// Sweep results
// ---------------------------------------------------------------------------

/// Counters produced by a sweep that got past the empty check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Count reported by the list call.
    pub total_count: u64,

    /// Artifacts deleted (or, in dry-run mode, that would have been deleted).
    pub deleted: u64,

    /// Artifacts kept because they are newer than the cutoff.
    pub retained: u64,

    /// The cutoff the decisions were made against.
    pub cutoff: Timestamp,

    /// Whether DELETE calls were suppressed.
    pub dry_run: bool,
}

/// Terminal state of a successful sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    /// The project had no artifacts; nothing was filtered or deleted.
    NothingToDelete,
    /// Every artifact was considered.
    Completed(SweepReport),
}

impl SweepOutcome {
    /// Number of artifacts deleted by this sweep.
    pub fn deleted(&self) -> u64 {
        match self {
            SweepOutcome::NothingToDelete => 0,
            SweepOutcome::Completed(report) => report.deleted,
        }
    }
}
