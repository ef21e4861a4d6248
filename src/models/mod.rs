// Model exports
pub mod domain;

pub use domain::{
    ApprovalStatus, Dimension, DimensionOutcome, DimensionWeights, DirectionalResult,
    EducationSpec, Gender, GotraSpec, InterestFacts, InterestState, MaritalStatus, MatchResult,
    Outcome, PartnerPreferences, Pref, Profile, RangeSpec, Score, SetSpec, TokenSpec,
};
