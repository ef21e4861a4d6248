// Core algorithm exports
pub mod evaluators;
pub mod filters;
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use evaluators::{
    evaluate_diet, evaluate_direction, evaluate_education, evaluate_gotra, evaluate_membership,
    evaluate_range,
};
pub use filters::{is_candidate, is_eligible};
pub use matcher::{CandidateRecord, MatchEngine, RankedMatch, ShortlistResult};
pub use normalize::{
    age_in_years, canon_token, education_level, parse_education_spec, parse_gotra_spec,
    parse_height_inches, parse_set_spec, parse_token_list, parse_token_spec,
};
pub use scoring::{calculate_score, validate_weights, WeightError};
