use crate::core::{
    evaluators::evaluate_direction,
    filters::{is_candidate, is_eligible},
    scoring::{calculate_score, validate_weights, WeightError},
};
use crate::models::{
    DimensionWeights, DirectionalResult, InterestFacts, InterestState, MatchResult,
    PartnerPreferences, Profile,
};
use chrono::NaiveDate;
use tracing::debug;

/// One candidate as handed over by the profile store: the profile snapshot
/// plus its attached partner preferences.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    pub profile: Profile,
    pub preferences: PartnerPreferences,
}

/// One surfaced match: the engine's verdict plus the pair's interest state,
/// ready for the listing layer to render.
#[derive(Debug, Clone)]
pub struct RankedMatch {
    pub profile_id: String,
    pub interest_state: InterestState,
    pub result: MatchResult,
}

/// Result of a shortlist computation.
#[derive(Debug)]
pub struct ShortlistResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// The compatibility engine: pure, stateless, synchronous.
///
/// Every evaluation is a function of its inputs and the caller-supplied
/// reference date — no clock reads, no I/O, no shared mutable state. One
/// pair's evaluation is independent of any other, so callers may fan
/// candidates out across workers freely.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: DimensionWeights,
}

impl MatchEngine {
    /// Build an engine with a custom weight table. An invalid table is a
    /// caller contract violation and fails here, loudly, rather than
    /// skewing every later ranking.
    pub fn new(weights: DimensionWeights) -> Result<Self, WeightError> {
        validate_weights(&weights)?;
        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: DimensionWeights::default(),
        }
    }

    /// Evaluate one viewing direction: `holder`'s preferences against
    /// `candidate`'s attributes.
    pub fn evaluate_direction(
        &self,
        holder: &Profile,
        prefs: &PartnerPreferences,
        candidate: &Profile,
        now: NaiveDate,
    ) -> DirectionalResult {
        let outcomes = evaluate_direction(holder, prefs, candidate, now);
        let eligible = is_eligible(&outcomes);
        let score = calculate_score(&outcomes, &self.weights);
        DirectionalResult {
            outcomes,
            eligible,
            score,
        }
    }

    /// Evaluate a pair in both directions and package the verdict.
    ///
    /// The two directional results are independent: each uses only one
    /// side's preference specification, and their percentages are not
    /// required to agree. Mutual eligibility needs both directions'
    /// dealbreaker checks to pass.
    pub fn evaluate_pair(
        &self,
        a: &Profile,
        a_prefs: &PartnerPreferences,
        b: &Profile,
        b_prefs: &PartnerPreferences,
        now: NaiveDate,
    ) -> MatchResult {
        let score_a_for_b = self.evaluate_direction(a, a_prefs, b, now);
        let score_b_for_a = self.evaluate_direction(b, b_prefs, a, now);
        MatchResult {
            mutually_eligible: score_a_for_b.eligible && score_b_for_a.eligible,
            score_a_for_b,
            score_b_for_a,
        }
    }

    /// Compute the viewer's shortlist over a candidate pool.
    ///
    /// Candidates are gated first (active, approved, opposite gender, not
    /// self, not declined), then evaluated in both directions. Only mutually
    /// eligible pairs whose interest state is not terminal are surfaced,
    /// ranked by how well the candidate satisfies the viewer's preferences
    /// (ties broken by raw total, then profile id for determinism).
    pub fn find_matches(
        &self,
        viewer: &Profile,
        viewer_prefs: &PartnerPreferences,
        candidates: Vec<CandidateRecord>,
        interests: &InterestFacts,
        now: NaiveDate,
        limit: usize,
    ) -> ShortlistResult {
        let total_candidates = candidates.len();

        let mut matches: Vec<RankedMatch> = candidates
            .into_iter()
            .filter(|c| is_candidate(viewer, &c.profile, interests))
            .filter_map(|c| {
                let result =
                    self.evaluate_pair(viewer, viewer_prefs, &c.profile, &c.preferences, now);
                if !result.mutually_eligible {
                    return None;
                }
                let interest_state = interests.state_with(&c.profile.profile_id);
                if interest_state.is_terminal() {
                    return None;
                }
                Some(RankedMatch {
                    profile_id: c.profile.profile_id,
                    interest_state,
                    result,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            let pa = a.result.score_a_for_b.percentage();
            let pb = b.result.score_a_for_b.percentage();
            pb.partial_cmp(&pa)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    let ta = a.result.score_a_for_b.score.total;
                    let tb = b.result.score_a_for_b.score.total;
                    tb.partial_cmp(&ta).unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.profile_id.cmp(&b.profile_id))
        });

        matches.truncate(limit);

        debug!(
            viewer = %viewer.profile_id,
            total_candidates,
            surfaced = matches.len(),
            "shortlist computed"
        );

        ShortlistResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize::parse_token_spec;
    use crate::models::{ApprovalStatus, Gender, Pref, RangeSpec};

    fn profile(id: &str, gender: Gender, age: u16) -> Profile {
        Profile {
            profile_id: id.to_string(),
            gender,
            birth_date: None,
            age: Some(age),
            height: None,
            current_location: None,
            religion: None,
            community: None,
            sub_community: None,
            gotra: None,
            diet: None,
            qualification: None,
            occupation: None,
            annual_income: None,
            marital_status: None,
            smoking: None,
            drinking: None,
            is_active: true,
            approval_status: ApprovalStatus::Approved,
        }
    }

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_evaluate_pair_mutual() {
        let engine = MatchEngine::with_default_weights();
        let a = profile("p1", Gender::Male, 30);
        let b = profile("p2", Gender::Female, 28);

        let mut a_prefs = PartnerPreferences::default();
        a_prefs.age = Pref::dealbreaker(RangeSpec::between(25, 32));
        let mut b_prefs = PartnerPreferences::default();
        b_prefs.age = Pref::dealbreaker(RangeSpec::between(28, 35));

        let result = engine.evaluate_pair(&a, &a_prefs, &b, &b_prefs, now());
        assert!(result.mutually_eligible);
        assert!(result.score_a_for_b.eligible);
        assert!(result.score_b_for_a.eligible);
    }

    #[test]
    fn test_evaluate_pair_one_direction_blocks() {
        let engine = MatchEngine::with_default_weights();
        let a = profile("p1", Gender::Male, 40); // outside B's range
        let b = profile("p2", Gender::Female, 28);

        let a_prefs = PartnerPreferences::default();
        let mut b_prefs = PartnerPreferences::default();
        b_prefs.age = Pref::dealbreaker(RangeSpec::between(28, 35));

        let result = engine.evaluate_pair(&a, &a_prefs, &b, &b_prefs, now());
        assert!(result.score_a_for_b.eligible);
        assert!(!result.score_b_for_a.eligible);
        assert!(!result.mutually_eligible);
    }

    #[test]
    fn test_find_matches_gates_and_ranks() {
        let engine = MatchEngine::with_default_weights();
        let viewer = profile("viewer", Gender::Male, 30);

        let mut viewer_prefs = PartnerPreferences::default();
        viewer_prefs.age = Pref::dealbreaker(RangeSpec::between(25, 32));
        viewer_prefs.diet = Pref::new(parse_token_spec(Some("vegetarian")));

        let mut veg = profile("c-veg", Gender::Female, 28);
        veg.diet = Some("Vegetarian".to_string());
        let mut egg = profile("c-egg", Gender::Female, 28);
        egg.diet = Some("Eggetarian".to_string());
        let too_old = profile("c-old", Gender::Female, 40);
        let wrong_gender = profile("c-male", Gender::Male, 28);

        let candidates = vec![
            CandidateRecord {
                profile: egg,
                preferences: PartnerPreferences::default(),
            },
            CandidateRecord {
                profile: veg,
                preferences: PartnerPreferences::default(),
            },
            CandidateRecord {
                profile: too_old,
                preferences: PartnerPreferences::default(),
            },
            CandidateRecord {
                profile: wrong_gender,
                preferences: PartnerPreferences::default(),
            },
        ];

        let result = engine.find_matches(
            &viewer,
            &viewer_prefs,
            candidates,
            &InterestFacts::default(),
            now(),
            10,
        );

        assert_eq!(result.total_candidates, 4);
        // Too-old fails the age dealbreaker; wrong gender never enters
        // evaluation. The vegetarian outranks the eggetarian (diet fails
        // non-fatally for the latter).
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].profile_id, "c-veg");
        assert_eq!(result.matches[1].profile_id, "c-egg");
        assert!(
            result.matches[0].result.score_a_for_b.percentage()
                > result.matches[1].result.score_a_for_b.percentage()
        );
    }

    #[test]
    fn test_find_matches_skips_terminal_interest_states() {
        let engine = MatchEngine::with_default_weights();
        let viewer = profile("viewer", Gender::Male, 30);
        let viewer_prefs = PartnerPreferences::default();

        let candidates = vec![
            CandidateRecord {
                profile: profile("c-fresh", Gender::Female, 28),
                preferences: PartnerPreferences::default(),
            },
            CandidateRecord {
                profile: profile("c-mutual", Gender::Female, 28),
                preferences: PartnerPreferences::default(),
            },
            CandidateRecord {
                profile: profile("c-declined", Gender::Female, 28),
                preferences: PartnerPreferences::default(),
            },
        ];

        let mut interests = InterestFacts::default();
        interests.accepted.insert("c-mutual".to_string());
        interests.declined.insert("c-declined".to_string());

        let result = engine.find_matches(
            &viewer,
            &viewer_prefs,
            candidates,
            &interests,
            now(),
            10,
        );

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].profile_id, "c-fresh");
        assert_eq!(result.matches[0].interest_state, InterestState::Fresh);
    }

    #[test]
    fn test_find_matches_respects_limit() {
        let engine = MatchEngine::with_default_weights();
        let viewer = profile("viewer", Gender::Male, 30);
        let viewer_prefs = PartnerPreferences::default();

        let candidates: Vec<CandidateRecord> = (0..20)
            .map(|i| CandidateRecord {
                profile: profile(&format!("c{i:02}"), Gender::Female, 25 + (i % 10)),
                preferences: PartnerPreferences::default(),
            })
            .collect();

        let result = engine.find_matches(
            &viewer,
            &viewer_prefs,
            candidates,
            &InterestFacts::default(),
            now(),
            5,
        );

        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_new_rejects_bad_weights() {
        let mut weights = DimensionWeights::default();
        weights.gotra = f64::INFINITY;
        assert!(MatchEngine::new(weights).is_err());
        assert!(MatchEngine::new(DimensionWeights::default()).is_ok());
    }
}
