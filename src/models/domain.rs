use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Profile gender. The candidate pool for a viewer is always the opposite gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn opposite(self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// Marital status is a closed domain; upstream stores loose display strings,
/// so the common spellings are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    #[serde(alias = "Never Married", alias = "never married")]
    NeverMarried,
    #[serde(alias = "Divorced")]
    Divorced,
    #[serde(alias = "Widowed")]
    Widowed,
    #[serde(alias = "Awaiting Divorce", alias = "awaiting divorce")]
    AwaitingDivorce,
}

impl MaritalStatus {
    /// Canonical lowercase token used for set-membership evaluation.
    pub fn token(self) -> &'static str {
        match self {
            MaritalStatus::NeverMarried => "never married",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
            MaritalStatus::AwaitingDivorce => "awaiting divorce",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Profile snapshot consumed read-only by the engine.
///
/// Free-text fields stay `Option<String>`: missing or unparsable values are a
/// data-quality condition, never an error (they evaluate as `Vacuous`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "profileId")]
    pub profile_id: String,
    pub gender: Gender,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<NaiveDate>,
    /// Precomputed age fallback for older rows that lack a birth date.
    #[serde(default)]
    pub age: Option<u16>,
    /// Free-form imperial height string, e.g. `5'9"`.
    #[serde(default)]
    pub height: Option<String>,
    #[serde(rename = "currentLocation", default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub religion: Option<String>,
    #[serde(default)]
    pub community: Option<String>,
    #[serde(rename = "subCommunity", default)]
    pub sub_community: Option<String>,
    #[serde(default)]
    pub gotra: Option<String>,
    #[serde(rename = "dietaryPreference", default)]
    pub diet: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(rename = "annualIncome", default)]
    pub annual_income: Option<String>,
    #[serde(rename = "maritalStatus", default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(rename = "smokingHabit", default)]
    pub smoking: Option<String>,
    #[serde(rename = "drinkingHabit", default)]
    pub drinking: Option<String>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "approvalStatus", default)]
    pub approval_status: ApprovalStatus,
}

fn default_true() -> bool {
    true
}

/// A numeric range specification. Open bounds default to 0 / `u16::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeSpec {
    #[default]
    Any,
    Within {
        min: Option<u16>,
        max: Option<u16>,
    },
}

impl RangeSpec {
    pub fn between(min: u16, max: u16) -> Self {
        RangeSpec::Within {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: u16) -> Self {
        RangeSpec::Within {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: u16) -> Self {
        RangeSpec::Within {
            min: None,
            max: Some(max),
        }
    }
}

/// A set-membership specification over canonical (trimmed, lowercased) tokens.
///
/// Tokens are canonicalized exactly once, at construction
/// (see `core::normalize::parse_set_spec`), not inside every evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetSpec {
    #[default]
    Any,
    OneOf(Vec<String>),
}

/// A single-token specification evaluated with bidirectional substring
/// containment (diet: "vegetarian" matches "strict vegetarian" either way).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenSpec {
    #[default]
    Any,
    Token(String),
}

/// Minimum-education specification. The raw preference string is kept so the
/// containment fallback can compare it against an unleveled qualification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationSpec {
    #[default]
    Any,
    AtLeast(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GotraSpec {
    #[default]
    Any,
    MustDiffer,
}

/// One preference dimension: a target specification plus its dealbreaker flag.
///
/// A dealbreaker flag on an `Any` spec is non-binding: the evaluator yields
/// `Vacuous` before the flag is ever consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "S: serde::Deserialize<'de> + Default"))]
pub struct Pref<S> {
    #[serde(default)]
    pub spec: S,
    #[serde(rename = "isDealbreaker", default)]
    pub dealbreaker: bool,
}

impl<S> Pref<S> {
    pub fn new(spec: S) -> Self {
        Pref {
            spec,
            dealbreaker: false,
        }
    }

    pub fn dealbreaker(spec: S) -> Self {
        Pref {
            spec,
            dealbreaker: true,
        }
    }
}

/// What one profile's owner wants in a partner, one `Pref` per dimension.
/// Dimensions absent from older rows deserialize to `Any` (non-binding).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartnerPreferences {
    pub age: Pref<RangeSpec>,
    pub height: Pref<RangeSpec>,
    pub location: Pref<SetSpec>,
    pub religion: Pref<SetSpec>,
    pub community: Pref<SetSpec>,
    pub sub_community: Pref<SetSpec>,
    pub gotra: Pref<GotraSpec>,
    pub diet: Pref<TokenSpec>,
    pub marital_status: Pref<SetSpec>,
    pub education: Pref<EducationSpec>,
    pub income: Pref<SetSpec>,
    pub smoking: Pref<SetSpec>,
    pub drinking: Pref<SetSpec>,
}

/// The preference dimensions the engine evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Age,
    Height,
    Location,
    Religion,
    Community,
    SubCommunity,
    Gotra,
    Diet,
    MaritalStatus,
    Education,
    Income,
    Smoking,
    Drinking,
}

impl Dimension {
    pub const ALL: [Dimension; 13] = [
        Dimension::Age,
        Dimension::Height,
        Dimension::Location,
        Dimension::Religion,
        Dimension::Community,
        Dimension::SubCommunity,
        Dimension::Gotra,
        Dimension::Diet,
        Dimension::MaritalStatus,
        Dimension::Education,
        Dimension::Income,
        Dimension::Smoking,
        Dimension::Drinking,
    ];
}

/// Tri-state evaluation outcome for one dimension.
///
/// `Vacuous` means the dimension does not apply: the preference is unset, or
/// the candidate data is missing/unparsable. It never blocks eligibility and
/// contributes to neither side of the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Vacuous,
}

/// Per-dimension outcome plus the dealbreaker flag from the preference-holder's
/// side, as consumed by the aggregator, the scorer, and admin diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionOutcome {
    pub dimension: Dimension,
    pub outcome: Outcome,
    #[serde(rename = "isDealbreaker")]
    pub dealbreaker: bool,
}

/// Per-dimension scoring weights. Equal weighting is the documented default;
/// deployments may tune via configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DimensionWeights {
    pub age: f64,
    pub height: f64,
    pub location: f64,
    pub religion: f64,
    pub community: f64,
    pub sub_community: f64,
    pub gotra: f64,
    pub diet: f64,
    pub marital_status: f64,
    pub education: f64,
    pub income: f64,
    pub smoking: f64,
    pub drinking: f64,
}

impl DimensionWeights {
    pub fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Age => self.age,
            Dimension::Height => self.height,
            Dimension::Location => self.location,
            Dimension::Religion => self.religion,
            Dimension::Community => self.community,
            Dimension::SubCommunity => self.sub_community,
            Dimension::Gotra => self.gotra,
            Dimension::Diet => self.diet,
            Dimension::MaritalStatus => self.marital_status,
            Dimension::Education => self.education,
            Dimension::Income => self.income,
            Dimension::Smoking => self.smoking,
            Dimension::Drinking => self.drinking,
        }
    }
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            age: 1.0,
            height: 1.0,
            location: 1.0,
            religion: 1.0,
            community: 1.0,
            sub_community: 1.0,
            gotra: 1.0,
            diet: 1.0,
            marital_status: 1.0,
            education: 1.0,
            income: 1.0,
            smoking: 1.0,
            drinking: 1.0,
        }
    }
}

/// Weighted score for one direction. Vacuous dimensions appear in neither
/// `total` nor `max`, so sparse preferences are not penalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub total: f64,
    pub max: f64,
}

impl Score {
    /// Percentage of applicable weight satisfied; 100 when no dimension applied.
    pub fn percentage(&self) -> f64 {
        if self.max == 0.0 {
            100.0
        } else {
            100.0 * self.total / self.max
        }
    }
}

/// Outcome of evaluating one direction: A's preferences against B's attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionalResult {
    pub outcomes: Vec<DimensionOutcome>,
    pub eligible: bool,
    pub score: Score,
}

impl DirectionalResult {
    pub fn percentage(&self) -> f64 {
        self.score.percentage()
    }
}

/// The engine's verdict for one pair. The two directional results are computed
/// independently and are not required to agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub mutually_eligible: bool,
    pub score_a_for_b: DirectionalResult,
    pub score_b_for_a: DirectionalResult,
}

/// Interest-record classification for a pair, derived from externally-owned
/// facts. Transitions (sending/accepting/declining) happen outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterestState {
    Fresh,
    InterestSent,
    InterestReceived,
    Mutual,
    Declined,
}

impl InterestState {
    pub fn is_terminal(self) -> bool {
        matches!(self, InterestState::Mutual | InterestState::Declined)
    }
}

/// Interest-state facts for one viewer, keyed by the other profile's id.
/// Read from the interest store by the calling layer and passed in as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterestFacts {
    pub sent_to: HashSet<String>,
    pub received_from: HashSet<String>,
    pub accepted: HashSet<String>,
    pub declined: HashSet<String>,
}

impl InterestFacts {
    /// Classify the pair (viewer, other). Declines win over everything;
    /// mutuality arises from an explicit accept or interest in both directions.
    pub fn state_with(&self, other: &str) -> InterestState {
        if self.declined.contains(other) {
            InterestState::Declined
        } else if self.accepted.contains(other)
            || (self.sent_to.contains(other) && self.received_from.contains(other))
        {
            InterestState::Mutual
        } else if self.sent_to.contains(other) {
            InterestState::InterestSent
        } else if self.received_from.contains(other) {
            InterestState::InterestReceived
        } else {
            InterestState::Fresh
        }
    }
}
