//! Normalizers: pure functions turning free-text profile and preference data
//! into comparable values. None of them can fail — unparsable input maps to
//! `None`/`Any`, which downstream evaluation treats as "does not apply."

use crate::models::{EducationSpec, GotraSpec, SetSpec, TokenSpec};
use chrono::{Datelike, NaiveDate};

/// Sentinel strings meaning "no preference" in loose upstream data.
const ANY_SENTINELS: &[&str] = &["doesn't matter", "doesnt matter", "any", "anywhere"];

/// Sentinel strings selecting the "must differ" gotra rule.
const GOTRA_DIFFER_SENTINELS: &[&str] = &["must differ", "different", "must be different"];

/// Keyword buckets for ordinal education levels, highest level first so that
/// e.g. "post graduate diploma" resolves to level 3 before "diploma" can pull
/// it down to level 1.
const EDUCATION_LEVELS: &[(u8, &[&str])] = &[
    (
        4,
        &["phd", "ph.d", "doctorate", "doctoral", "post doc", "md"],
    ),
    (
        3,
        &[
            "master",
            "mba",
            "m.tech",
            "mtech",
            "m.sc",
            "msc",
            "m.com",
            "mcom",
            "mca",
            "pgdm",
            "post graduate",
            "postgraduate",
        ],
    ),
    (
        2,
        &[
            "bachelor",
            "b.tech",
            "btech",
            "b.e",
            "b.sc",
            "bsc",
            "b.com",
            "bcom",
            "bba",
            "bca",
            "undergraduate",
            "graduate",
            "engineering",
        ],
    ),
    (
        1,
        &[
            "high school",
            "higher secondary",
            "senior secondary",
            "hsc",
            "ssc",
            "10th",
            "12th",
            "diploma",
            "intermediate",
        ],
    ),
];

/// Trim and lowercase a raw token for comparison.
pub fn canon_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn is_any_sentinel(token: &str) -> bool {
    token.is_empty() || ANY_SENTINELS.contains(&token)
}

/// Parse a free-form imperial height string into total inches.
///
/// Accepts digits, a `'` or `.` separator, digits, with optional whitespace
/// and trailing quote marks: `5'9"`, `5'9`, `5.9` all parse to 69. Anything
/// that does not fit the pattern returns `None` — height unknown.
pub fn parse_height_inches(raw: &str) -> Option<u16> {
    let s = raw.trim().trim_start_matches(|c: char| !c.is_ascii_digit());
    let mut chars = s.chars().peekable();

    let mut feet = String::new();
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            feet.push(*c);
            chars.next();
        } else {
            break;
        }
    }
    if feet.is_empty() {
        return None;
    }

    while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
        chars.next();
    }
    match chars.next() {
        Some('\'') | Some('.') => {}
        _ => return None,
    }
    while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
        chars.next();
    }

    let mut inches = String::new();
    while let Some(c) = chars.peek() {
        if c.is_ascii_digit() {
            inches.push(*c);
            chars.next();
        } else {
            break;
        }
    }

    let feet: u32 = feet.parse().ok()?;
    let inches: u32 = if inches.is_empty() {
        0
    } else {
        inches.parse().ok()?
    };

    u16::try_from(feet * 12 + inches).ok()
}

/// Whole years elapsed between `dob` and `now`, decremented when the birthday
/// has not yet occurred this year. Pure in `(dob, now)`; a future date of
/// birth clamps to 0.
pub fn age_in_years(dob: NaiveDate, now: NaiveDate) -> u16 {
    let mut age = now.year() - dob.year();
    if (now.month(), now.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age.clamp(0, i32::from(u16::MAX)) as u16
}

/// Parse a loose preference list: a JSON-encoded array of strings, a
/// comma-separated string, or a single scalar token. The JSON parse is tried
/// first; comma-split covers both remaining shapes. Tokens come back trimmed
/// and lowercased with empties dropped. Never errors.
pub fn parse_token_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str(trimmed) {
        return items
            .iter()
            .filter_map(|v| v.as_str())
            .map(canon_token)
            .filter(|t| !t.is_empty())
            .collect();
    }

    trimmed
        .split(',')
        .map(canon_token)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Build a `SetSpec` from a loose preference field. Sentinel tokens are
/// stripped; a field that is missing, empty, or all-sentinel means `Any`.
pub fn parse_set_spec(raw: Option<&str>) -> SetSpec {
    let Some(raw) = raw else {
        return SetSpec::Any;
    };
    let tokens: Vec<String> = parse_token_list(raw)
        .into_iter()
        .filter(|t| !is_any_sentinel(t))
        .collect();
    if tokens.is_empty() {
        SetSpec::Any
    } else {
        SetSpec::OneOf(tokens)
    }
}

/// Build a single-token spec (diet) from a loose preference field.
pub fn parse_token_spec(raw: Option<&str>) -> TokenSpec {
    match raw.map(canon_token) {
        Some(token) if !is_any_sentinel(&token) => TokenSpec::Token(token),
        _ => TokenSpec::Any,
    }
}

/// Build a minimum-education spec from a loose preference field.
pub fn parse_education_spec(raw: Option<&str>) -> EducationSpec {
    match raw.map(canon_token) {
        Some(token) if !is_any_sentinel(&token) => EducationSpec::AtLeast(token),
        _ => EducationSpec::Any,
    }
}

/// Build a gotra spec from a loose preference field. Only the documented
/// "must differ" sentinels activate the rule.
pub fn parse_gotra_spec(raw: Option<&str>) -> GotraSpec {
    match raw.map(canon_token) {
        Some(token) if GOTRA_DIFFER_SENTINELS.contains(&token.as_str()) => GotraSpec::MustDiffer,
        _ => GotraSpec::Any,
    }
}

/// Map a free-text qualification to an ordinal education level via
/// case-insensitive keyword containment. `None` when no keyword matches;
/// callers fall back to raw containment comparison.
pub fn education_level(qualification: &str) -> Option<u8> {
    let q = canon_token(qualification);
    if q.is_empty() {
        return None;
    }
    for (level, keywords) in EDUCATION_LEVELS {
        if keywords.iter().any(|k| q.contains(k)) {
            return Some(*level);
        }
    }
    None
}
