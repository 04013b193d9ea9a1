//! Core domain for the artifact cleaner.
//!
//! This crate contains the identifiers, value types, error taxonomy,
//! configuration, and the sweep itself. Infrastructure crates implement the
//! [`ArtifactRepository`] port defined here; they never add retention rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; the `github` crate defines *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`ArtifactId`, `OwnerName`, `AccessToken`, etc.) |
//! | [`types`] | Value types (`Timestamp`, `RetentionPeriod`, `Artifact`, `SweepReport`, etc.) |
//! | [`errors`] | [`SweeperError`] and [`RemoteOperation`] |
//! | [`config`] | [`Settings`] loaded from `INPUT_*` variables |
//! | [`ports`] | [`ArtifactRepository`] and [`ProjectRef`] |
//! | [`sweep`] | [`ArtifactSweeper`], the list/filter/delete pass |

pub mod config;
pub mod errors;
pub mod identifiers;
pub mod ports;
pub mod sweep;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use config::{LogFormat, Settings};
pub use errors::{RemoteOperation, SweeperError};
pub use identifiers::{AccessToken, ArtifactId, OwnerName, ProjectName, SweepRunId};
pub use ports::{ArtifactRepository, ProjectRef};
pub use sweep::ArtifactSweeper;
pub use types::{
    Artifact, ArtifactCollection, RetentionDecision, RetentionPeriod, SweepOutcome, SweepReport,
    Timestamp,
};
