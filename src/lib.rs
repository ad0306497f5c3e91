//! Client for a Solidity smart-contract security analyzer.
//!
//! The analyzer itself is a remote service; this crate owns the report
//! contract: the typed [`models::AnalysisReport`] structure, summary
//! derivation, validated JSON import/export, a deterministic HTML export,
//! and the HTTP client that talks to the service.

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod reporting;
