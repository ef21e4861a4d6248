// Integration tests for Sangam Algo

use chrono::NaiveDate;
use sangam_algo::core::normalize::{
    parse_education_spec, parse_gotra_spec, parse_set_spec, parse_token_spec,
};
use sangam_algo::core::{CandidateRecord, MatchEngine};
use sangam_algo::models::{
    ApprovalStatus, Gender, InterestFacts, InterestState, MaritalStatus, PartnerPreferences, Pref,
    Profile, RangeSpec,
};

fn create_profile(id: &str, gender: Gender, birth_year: i32) -> Profile {
    Profile {
        profile_id: id.to_string(),
        gender,
        birth_date: NaiveDate::from_ymd_opt(birth_year, 3, 10),
        age: None,
        height: Some("5'6\"".to_string()),
        current_location: Some("Mumbai".to_string()),
        religion: Some("Hindu".to_string()),
        community: Some("Agarwal".to_string()),
        sub_community: None,
        gotra: Some("Kashyap".to_string()),
        diet: Some("Vegetarian".to_string()),
        qualification: Some("B.Tech".to_string()),
        occupation: Some("Engineer".to_string()),
        annual_income: Some("10-15 lakh".to_string()),
        marital_status: Some(MaritalStatus::NeverMarried),
        smoking: Some("no".to_string()),
        drinking: Some("no".to_string()),
        is_active: true,
        approval_status: ApprovalStatus::Approved,
    }
}

fn create_preferences() -> PartnerPreferences {
    let mut prefs = PartnerPreferences::default();
    prefs.age = Pref::dealbreaker(RangeSpec::between(25, 32));
    prefs.religion = Pref::dealbreaker(parse_set_spec(Some("Hindu")));
    prefs.diet = Pref::new(parse_token_spec(Some("vegetarian")));
    prefs.education = Pref::new(parse_education_spec(Some("bachelor")));
    prefs
}

fn now() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn test_end_to_end_diet_fails_non_fatally() {
    // Viewer 29, age [25,32] dealbreaker, vegetarian preference without the
    // flag; candidate 30, eggetarian: eligible but below 100%.
    let engine = MatchEngine::with_default_weights();
    let viewer = create_profile("viewer", Gender::Male, 1995); // 29
    let mut candidate = create_profile("candidate", Gender::Female, 1994); // 30
    candidate.diet = Some("Eggetarian".to_string());

    let mut viewer_prefs = PartnerPreferences::default();
    viewer_prefs.age = Pref::dealbreaker(RangeSpec::between(25, 32));
    viewer_prefs.diet = Pref::new(parse_token_spec(Some("vegetarian")));

    let result = engine.evaluate_pair(
        &viewer,
        &viewer_prefs,
        &candidate,
        &PartnerPreferences::default(),
        now(),
    );

    assert!(result.mutually_eligible);
    assert!(result.score_a_for_b.percentage() < 100.0);
    assert!(result.score_a_for_b.percentage() > 0.0);
}

#[test]
fn test_end_to_end_age_dealbreaker_excludes() {
    // Same viewer, candidate 35: excluded no matter what else matches.
    let engine = MatchEngine::with_default_weights();
    let viewer = create_profile("viewer", Gender::Male, 1995);
    let candidate = create_profile("candidate", Gender::Female, 1989); // 35

    let mut viewer_prefs = PartnerPreferences::default();
    viewer_prefs.age = Pref::dealbreaker(RangeSpec::between(25, 32));
    viewer_prefs.diet = Pref::new(parse_token_spec(Some("vegetarian")));

    let result = engine.evaluate_pair(
        &viewer,
        &viewer_prefs,
        &candidate,
        &PartnerPreferences::default(),
        now(),
    );

    assert!(!result.score_a_for_b.eligible);
    assert!(!result.mutually_eligible);
}

#[test]
fn test_gotra_dealbreaker_full_pipeline() {
    let engine = MatchEngine::with_default_weights();
    let viewer = create_profile("viewer", Gender::Male, 1995);

    let mut viewer_prefs = PartnerPreferences::default();
    viewer_prefs.gotra = Pref::dealbreaker(parse_gotra_spec(Some("must differ")));

    // Same gotra: excluded.
    let same_gotra = create_profile("same", Gender::Female, 1996);
    let result = engine.evaluate_pair(
        &viewer,
        &viewer_prefs,
        &same_gotra,
        &PartnerPreferences::default(),
        now(),
    );
    assert!(!result.mutually_eligible);

    // Different gotra: passes.
    let mut different = create_profile("different", Gender::Female, 1996);
    different.gotra = Some("Bharadwaj".to_string());
    let result = engine.evaluate_pair(
        &viewer,
        &viewer_prefs,
        &different,
        &PartnerPreferences::default(),
        now(),
    );
    assert!(result.mutually_eligible);

    // Blank gotra on the candidate: the rule passes vacuously even though it
    // is a dealbreaker. Preserved upstream behavior.
    let mut blank = create_profile("blank", Gender::Female, 1996);
    blank.gotra = None;
    let result = engine.evaluate_pair(
        &viewer,
        &viewer_prefs,
        &blank,
        &PartnerPreferences::default(),
        now(),
    );
    assert!(result.mutually_eligible);
}

#[test]
fn test_shortlist_end_to_end() {
    let engine = MatchEngine::with_default_weights();
    let viewer = create_profile("viewer", Gender::Male, 1995);
    let viewer_prefs = create_preferences();

    let good = create_profile("c-good", Gender::Female, 1996); // 28, all aligned

    let mut eggetarian = create_profile("c-egg", Gender::Female, 1996);
    eggetarian.diet = Some("Eggetarian".to_string()); // soft miss

    let too_old = create_profile("c-old", Gender::Female, 1985); // 39, hard miss

    let mut other_religion = create_profile("c-rel", Gender::Female, 1996);
    other_religion.religion = Some("Christian".to_string()); // hard miss

    let mut inactive = create_profile("c-inactive", Gender::Female, 1996);
    inactive.is_active = false;

    let declined = create_profile("c-declined", Gender::Female, 1996);

    let mut narrow_candidate = create_profile("c-narrow", Gender::Female, 1996);
    narrow_candidate.gotra = Some("Bharadwaj".to_string());
    // This candidate's own preferences reject the viewer's income tier.
    let mut narrow_prefs = PartnerPreferences::default();
    narrow_prefs.income = Pref::dealbreaker(parse_set_spec(Some("25 lakh and above")));

    let candidates = vec![
        CandidateRecord {
            profile: good,
            preferences: PartnerPreferences::default(),
        },
        CandidateRecord {
            profile: eggetarian,
            preferences: PartnerPreferences::default(),
        },
        CandidateRecord {
            profile: too_old,
            preferences: PartnerPreferences::default(),
        },
        CandidateRecord {
            profile: other_religion,
            preferences: PartnerPreferences::default(),
        },
        CandidateRecord {
            profile: inactive,
            preferences: PartnerPreferences::default(),
        },
        CandidateRecord {
            profile: declined,
            preferences: PartnerPreferences::default(),
        },
        CandidateRecord {
            profile: narrow_candidate,
            preferences: narrow_prefs,
        },
    ];

    let mut interests = InterestFacts::default();
    interests.declined.insert("c-declined".to_string());

    let result = engine.find_matches(&viewer, &viewer_prefs, candidates, &interests, now(), 10);

    assert_eq!(result.total_candidates, 7);

    let ids: Vec<&str> = result.matches.iter().map(|m| m.profile_id.as_str()).collect();
    assert_eq!(ids, vec!["c-good", "c-egg"]);

    // The full match ranks above the soft diet miss.
    assert!(
        result.matches[0].result.score_a_for_b.percentage()
            > result.matches[1].result.score_a_for_b.percentage()
    );

    // Both surfaced matches are fresh pairs.
    assert!(result
        .matches
        .iter()
        .all(|m| m.interest_state == InterestState::Fresh));
}

#[test]
fn test_diagnostic_breakdown_serializes() {
    // Admin tooling consumes the engine's own breakdown verbatim; the
    // directional result must round-trip through JSON.
    let engine = MatchEngine::with_default_weights();
    let viewer = create_profile("viewer", Gender::Male, 1995);
    let candidate = create_profile("candidate", Gender::Female, 1996);

    let result = engine.evaluate_pair(
        &viewer,
        &create_preferences(),
        &candidate,
        &PartnerPreferences::default(),
        now(),
    );

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("mutuallyEligible"));
    assert!(json.contains("scoreAForB") || json.contains("scoreAforB"));

    let parsed: sangam_algo::models::MatchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.mutually_eligible, result.mutually_eligible);
    assert_eq!(
        parsed.score_a_for_b.outcomes.len(),
        result.score_a_for_b.outcomes.len()
    );
}

#[test]
fn test_profile_snapshot_deserializes_loose_data() {
    // A snapshot with missing optional fields and an older loose marital
    // status string must load without error.
    let json = r#"{
        "profileId": "p9",
        "gender": "female",
        "birthDate": "1996-03-10",
        "height": "5'4\"",
        "maritalStatus": "Never Married"
    }"#;

    let profile: Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.profile_id, "p9");
    assert_eq!(profile.marital_status, Some(MaritalStatus::NeverMarried));
    assert!(profile.is_active);
    assert_eq!(profile.approval_status, ApprovalStatus::Pending);
    assert!(profile.religion.is_none());
}
