//! Deterministic matching and recruitment-intelligence scoring over
//! structured resume and job-description facts.
//!
//! The engine never reads the clock, never performs I/O, and never calls
//! out of process: every score is a pure function of the two fact records
//! and the immutable skill synonym table, so batch scoring parallelizes
//! without coordination.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
