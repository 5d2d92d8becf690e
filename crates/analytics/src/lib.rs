//! # Sector Analytics Engine
//!
//! This crate turns the static sector catalog into the market-structure views the
//! service exposes: sector overviews, single-sector drill-downs, ranked company
//! lists and cross-sector comparisons.
//!
//! ## Architectural Principles
//!
//! - **Pure logic:** no HTTP, no I/O, no logging. The transport hands in
//!   already-decoded requests and gets back fully populated responses or an
//!   [`AnalyticsError`].
//! - **Injected randomness:** every synthetic value comes from a
//!   [`BoundedRandom`] passed in by the caller. A seeded [`UniformSource`] makes
//!   whole responses reproducible.
//! - **Validate first:** enum checks and sector lookups run before the first
//!   random draw.
//!
//! ## Public API
//!
//! - `SectorEngine`: the request-scoped entry point for every operation.
//! - `MetricSynthesizer`: the per-sector and per-company metric builders.
//! - `ranking`: market-cap share and the sort policies.
//! - `validation`: raw request types and their allow-list checks.

pub mod engine;
pub mod error;
pub mod random;
pub mod ranking;
pub mod report;
pub mod synthesizer;
pub mod validation;

// Re-export the key components to create a clean, public-facing API.
pub use engine::SectorEngine;
pub use error::AnalyticsError;
pub use random::{BoundedRandom, UniformSource};
pub use report::{
    HealthResponse, SectorCompaniesResponse, SectorCompareResponse, SectorDetailResponse,
    SectorsOverviewResponse, SERVICE_VERSION,
};
pub use synthesizer::MetricSynthesizer;
pub use validation::{CompareRequest, SectorsRequest};
