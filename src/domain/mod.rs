//! Domain layer containing the survey logic and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (scores, scenarios, ids, errors)
//! - `catalog` - The seven life areas and their prompt copy
//! - `scoring` - Per-scenario score collections and averages
//! - `wizard` - Step sequence and the session engine
//! - `analysis` - Summary, recommended actions and the shareable snapshot

pub mod analysis;
pub mod catalog;
pub mod foundation;
pub mod scoring;
pub mod wizard;
