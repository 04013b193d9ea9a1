//! GitHub infrastructure adapter for the artifact cleaner.
//!
//! Implements the [`retention::ArtifactRepository`] port over the GitHub
//! Actions artifacts REST API using a single [`reqwest::Client`].
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain retention rules.
//! URL layout, headers, authentication, and response decoding live here; the
//! [`retention`] crate never sees them.
//!
//! Only the first page of the list endpoint is read.

mod client;
mod payload;

pub use client::{GithubArtifactClient, USER_AGENT};
