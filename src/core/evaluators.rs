//! Dimension evaluators: one tri-state check per preference dimension.
//!
//! The policy applied uniformly across dimensions: an unset preference yields
//! `Vacuous` regardless of candidate data, and missing or unparsable candidate
//! data yields `Vacuous` rather than `Fail`. No evaluator can error.

use crate::core::normalize::{
    age_in_years, canon_token, education_level, parse_height_inches,
};
use crate::models::{
    Dimension, DimensionOutcome, EducationSpec, GotraSpec, Outcome, PartnerPreferences, Profile,
    RangeSpec, SetSpec, TokenSpec,
};
use chrono::NaiveDate;

/// Range check with inclusive bounds. Open bounds default to 0 / `u16::MAX`.
#[inline]
pub fn evaluate_range(value: Option<u16>, spec: &RangeSpec) -> Outcome {
    match spec {
        RangeSpec::Any => Outcome::Vacuous,
        RangeSpec::Within { min, max } => match value {
            None => Outcome::Vacuous,
            Some(v) => {
                if v >= min.unwrap_or(0) && v <= max.unwrap_or(u16::MAX) {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                }
            }
        },
    }
}

/// Case-insensitive set membership against canonical spec tokens.
#[inline]
pub fn evaluate_membership(value: Option<&str>, spec: &SetSpec) -> Outcome {
    match spec {
        SetSpec::Any => Outcome::Vacuous,
        SetSpec::OneOf(tokens) => match value.map(canon_token) {
            Some(v) if !v.is_empty() => {
                if tokens.iter().any(|t| *t == v) {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                }
            }
            _ => Outcome::Vacuous,
        },
    }
}

/// Diet check: pass on equality or when either token is a case-insensitive
/// substring of the other. The bidirectional containment lets "vegetarian"
/// match "strict vegetarian" in either direction and is relied upon by
/// existing preference data; do not tighten it to equality.
#[inline]
pub fn evaluate_diet(candidate: Option<&str>, spec: &TokenSpec) -> Outcome {
    match spec {
        TokenSpec::Any => Outcome::Vacuous,
        TokenSpec::Token(want) => match candidate.map(canon_token) {
            Some(have) if !have.is_empty() => {
                if have == *want || have.contains(want.as_str()) || want.contains(have.as_str()) {
                    Outcome::Pass
                } else {
                    Outcome::Fail
                }
            }
            _ => Outcome::Vacuous,
        },
    }
}

/// Gotra check. `MustDiffer` passes only when both gotras are present and
/// differ case-insensitively. When either side is blank the rule passes
/// vacuously — preserved upstream behavior, pending product sign-off
/// (see DESIGN.md), since it waives the dealbreaker on incomplete data.
#[inline]
pub fn evaluate_gotra(own: Option<&str>, candidate: Option<&str>, spec: &GotraSpec) -> Outcome {
    match spec {
        GotraSpec::Any => Outcome::Vacuous,
        GotraSpec::MustDiffer => {
            let own = own.map(canon_token).unwrap_or_default();
            let theirs = candidate.map(canon_token).unwrap_or_default();
            if own.is_empty() || theirs.is_empty() {
                Outcome::Pass
            } else if own != theirs {
                Outcome::Pass
            } else {
                Outcome::Fail
            }
        }
    }
}

/// Education check: ordinal comparison when both the candidate's
/// qualification and the preference resolve to a level; otherwise fall back
/// to raw bidirectional containment between the two strings.
#[inline]
pub fn evaluate_education(candidate: Option<&str>, spec: &EducationSpec) -> Outcome {
    match spec {
        EducationSpec::Any => Outcome::Vacuous,
        EducationSpec::AtLeast(want) => match candidate.map(canon_token) {
            Some(have) if !have.is_empty() => {
                match (education_level(&have), education_level(want)) {
                    (Some(candidate_level), Some(wanted_level)) => {
                        if candidate_level >= wanted_level {
                            Outcome::Pass
                        } else {
                            Outcome::Fail
                        }
                    }
                    _ => {
                        if have.contains(want.as_str()) || want.contains(have.as_str()) {
                            Outcome::Pass
                        } else {
                            Outcome::Fail
                        }
                    }
                }
            }
            _ => Outcome::Vacuous,
        },
    }
}

/// Candidate age from birth date (preferred) or the precomputed fallback.
#[inline]
fn candidate_age(profile: &Profile, now: NaiveDate) -> Option<u16> {
    profile
        .birth_date
        .map(|dob| age_in_years(dob, now))
        .or(profile.age)
}

/// Run every dimension of `prefs` (held by `holder`) against `candidate`'s
/// attributes for one viewing direction. The holder's own gotra feeds the
/// "must differ" rule; `now` anchors age computation.
pub fn evaluate_direction(
    holder: &Profile,
    prefs: &PartnerPreferences,
    candidate: &Profile,
    now: NaiveDate,
) -> Vec<DimensionOutcome> {
    let marital_token = candidate.marital_status.map(|m| m.token());

    Dimension::ALL
        .iter()
        .map(|&dimension| {
            let (outcome, dealbreaker) = match dimension {
                Dimension::Age => (
                    evaluate_range(candidate_age(candidate, now), &prefs.age.spec),
                    prefs.age.dealbreaker,
                ),
                Dimension::Height => (
                    evaluate_range(
                        candidate.height.as_deref().and_then(parse_height_inches),
                        &prefs.height.spec,
                    ),
                    prefs.height.dealbreaker,
                ),
                Dimension::Location => (
                    evaluate_membership(
                        candidate.current_location.as_deref(),
                        &prefs.location.spec,
                    ),
                    prefs.location.dealbreaker,
                ),
                Dimension::Religion => (
                    evaluate_membership(candidate.religion.as_deref(), &prefs.religion.spec),
                    prefs.religion.dealbreaker,
                ),
                Dimension::Community => (
                    evaluate_membership(candidate.community.as_deref(), &prefs.community.spec),
                    prefs.community.dealbreaker,
                ),
                Dimension::SubCommunity => (
                    evaluate_membership(
                        candidate.sub_community.as_deref(),
                        &prefs.sub_community.spec,
                    ),
                    prefs.sub_community.dealbreaker,
                ),
                Dimension::Gotra => (
                    evaluate_gotra(
                        holder.gotra.as_deref(),
                        candidate.gotra.as_deref(),
                        &prefs.gotra.spec,
                    ),
                    prefs.gotra.dealbreaker,
                ),
                Dimension::Diet => (
                    evaluate_diet(candidate.diet.as_deref(), &prefs.diet.spec),
                    prefs.diet.dealbreaker,
                ),
                Dimension::MaritalStatus => (
                    evaluate_membership(marital_token, &prefs.marital_status.spec),
                    prefs.marital_status.dealbreaker,
                ),
                Dimension::Education => (
                    evaluate_education(candidate.qualification.as_deref(), &prefs.education.spec),
                    prefs.education.dealbreaker,
                ),
                Dimension::Income => (
                    evaluate_membership(candidate.annual_income.as_deref(), &prefs.income.spec),
                    prefs.income.dealbreaker,
                ),
                Dimension::Smoking => (
                    evaluate_membership(candidate.smoking.as_deref(), &prefs.smoking.spec),
                    prefs.smoking.dealbreaker,
                ),
                Dimension::Drinking => (
                    evaluate_membership(candidate.drinking.as_deref(), &prefs.drinking.spec),
                    prefs.drinking.dealbreaker,
                ),
            };
            DimensionOutcome {
                dimension,
                outcome,
                dealbreaker,
            }
        })
        .collect()
}
