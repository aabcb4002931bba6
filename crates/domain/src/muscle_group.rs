use std::str::FromStr;

use derive_more::{AsRef, Display};

/// Muscle group identifier as used in the knowledge base, e.g. `chest` or `upper_back`.
#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MuscleGroup(String);

impl MuscleGroup {
    pub const OTHER: &'static str = "other";

    pub fn new(name: &str) -> Result<Self, MuscleGroupError> {
        let normalized = name
            .trim()
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();

        if normalized.is_empty() {
            return Err(MuscleGroupError::Empty);
        }

        if let Some(c) = normalized
            .chars()
            .find(|c| !c.is_alphanumeric() && *c != '_')
        {
            return Err(MuscleGroupError::InvalidCharacter(c));
        }

        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn other() -> Self {
        Self(Self::OTHER.to_string())
    }
}

impl FromStr for MuscleGroup {
    type Err = MuscleGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Muscle group must not be empty")]
    Empty,
    #[error("Muscle group must not contain '{0}'")]
    InvalidCharacter(char),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("chest", Ok(MuscleGroup("chest".to_string())))]
    #[case("  Chest ", Ok(MuscleGroup("chest".to_string())))]
    #[case("Upper Back", Ok(MuscleGroup("upper_back".to_string())))]
    #[case("rear-delts", Ok(MuscleGroup("rear_delts".to_string())))]
    #[case("", Err(MuscleGroupError::Empty))]
    #[case("chest/back", Err(MuscleGroupError::InvalidCharacter('/')))]
    fn test_muscle_group_new(
        #[case] name: &str,
        #[case] expected: Result<MuscleGroup, MuscleGroupError>,
    ) {
        assert_eq!(MuscleGroup::new(name), expected);
    }

    #[test]
    fn test_muscle_group_other() {
        assert_eq!(MuscleGroup::other().to_string(), "other");
        assert_eq!("Other".parse(), Ok(MuscleGroup::other()));
    }
}
