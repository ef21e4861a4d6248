//! Sangam Algo - Compatibility matching engine for the Sangam matrimony platform
//!
//! This library decides, for any two profiles, whether they are mutually
//! eligible to be shown to each other and how well each satisfies the other's
//! stated partner preferences. Evaluation is tri-state per dimension
//! (pass / fail / vacuous), dealbreaker-aware, and deliberately tolerant of
//! missing or free-text data. The engine is pure and stateless: callers
//! supply profile and preference snapshots plus a reference date, and get a
//! transient verdict back.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{CandidateRecord, MatchEngine, RankedMatch, ShortlistResult, WeightError};
pub use crate::models::{
    DimensionOutcome, DimensionWeights, DirectionalResult, InterestFacts, InterestState,
    MatchResult, Outcome, PartnerPreferences, Profile,
};
