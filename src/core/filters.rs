//! Candidate gating and the dealbreaker aggregator.
//!
//! Gating decides which profiles enter dealbreaker evaluation at all; the
//! aggregator turns one direction's per-dimension outcomes into an
//! eligibility verdict.

use crate::models::{ApprovalStatus, DimensionOutcome, InterestFacts, Outcome, Profile};

/// Check whether `profile` is a candidate for `viewer` at all: not the viewer
/// themself, active, approved, opposite gender, and not already declined in
/// either direction. Profiles failing this gate never reach the evaluators.
#[inline]
pub fn is_candidate(viewer: &Profile, profile: &Profile, interests: &InterestFacts) -> bool {
    if profile.profile_id == viewer.profile_id {
        return false;
    }
    if !profile.is_active || profile.approval_status != ApprovalStatus::Approved {
        return false;
    }
    if profile.gender != viewer.gender.opposite() {
        return false;
    }
    if interests.declined.contains(&profile.profile_id) {
        return false;
    }
    true
}

/// Aggregate one direction's outcomes into an eligibility verdict: the
/// direction is ineligible iff some dimension failed *and* carries the
/// dealbreaker flag. A non-dealbreaker `Fail` only costs score; `Vacuous`
/// never excludes, whatever the flag says.
#[inline]
pub fn is_eligible(outcomes: &[DimensionOutcome]) -> bool {
    !outcomes
        .iter()
        .any(|o| o.outcome == Outcome::Fail && o.dealbreaker)
}
