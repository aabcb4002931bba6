use std::{ops::RangeInclusive, sync::LazyLock};

use regex::Regex;

pub const DEFAULT_SETS_PER_WEEK: RangeInclusive<u32> = 12..=18;
pub const DEFAULT_SETS_PER_SESSION: RangeInclusive<u32> = 3..=4;
pub const DEFAULT_REPS: RangeInclusive<u32> = 8..=12;

#[derive(
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Goal {
    Bulk,
    Cut,
    Maintain,
}

#[derive(
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Training volume bounds for one muscle group, goal and experience level.
///
/// All values are kept as the free text found in the knowledge base. Numeric ranges are derived
/// on access and fall back to fixed defaults if the text contains no usable numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeLandmarks {
    pub minimum_effective_volume: String,
    pub maximum_adaptive_volume: String,
    pub maximum_recoverable_volume: String,
    pub sets_per_session: String,
    pub rep_range: String,
    pub rest_period: String,
    pub notes: String,
}

impl VolumeLandmarks {
    #[must_use]
    pub fn sets_per_week_range(&self) -> RangeInclusive<u32> {
        parse_range(&self.maximum_adaptive_volume).unwrap_or(DEFAULT_SETS_PER_WEEK)
    }

    #[must_use]
    pub fn sets_per_session_range(&self) -> RangeInclusive<u32> {
        parse_range(&self.sets_per_session).unwrap_or(DEFAULT_SETS_PER_SESSION)
    }

    #[must_use]
    pub fn reps_range(&self) -> RangeInclusive<u32> {
        parse_range(&self.rep_range).unwrap_or(DEFAULT_REPS)
    }
}

static RANGE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(?:-|–|—|to)\s*(\d+)").ok());
static NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d+").ok());

/// Extracts the first numeric range (`12-18`, `12–18`, `12 to 18`) or single number from `text`.
#[must_use]
pub fn parse_range(text: &str) -> Option<RangeInclusive<u32>> {
    if let Some(captures) = RANGE.as_ref().and_then(|r| r.captures(text)) {
        let a = captures.get(1)?.as_str().parse::<u32>().ok()?;
        let b = captures.get(2)?.as_str().parse::<u32>().ok()?;
        return Some(a.min(b)..=a.max(b));
    }

    let n = NUMBER
        .as_ref()?
        .find(text)?
        .as_str()
        .parse::<u32>()
        .ok()?;
    Some(n..=n)
}
