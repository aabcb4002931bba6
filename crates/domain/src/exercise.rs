use crate::{Name, name::normalize, sanitize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDetail {
    pub name: Name,
    pub emg_activation: String,
    pub effectiveness: Effectiveness,
    pub injury_risk: String,
    pub equipment: String,
    pub prerequisites: String,
    pub progression: String,
}

impl ExerciseDetail {
    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        ExerciseKind::classify(self.name.as_str())
    }

    #[must_use]
    pub fn safety(&self) -> Safety {
        Safety::from_text(&self.injury_risk)
    }

    /// First sentence of the EMG activation notes, cleaned up for display.
    #[must_use]
    pub fn summary(&self) -> String {
        sanitize::first_sentence(&self.emg_activation)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effectiveness {
    pub hypertrophy: String,
    pub strength: String,
    pub power: String,
}

impl Effectiveness {
    #[must_use]
    pub fn hypertrophy_rating(&self) -> Rating {
        Rating::from_text(&self.hypertrophy)
    }

    #[must_use]
    pub fn strength_rating(&self) -> Rating {
        Rating::from_text(&self.strength)
    }

    #[must_use]
    pub fn power_rating(&self) -> Rating {
        Rating::from_text(&self.power)
    }
}

#[derive(strum::Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rating {
    #[strum(serialize = "low")]
    Low = 1,
    #[strum(serialize = "moderate")]
    Moderate = 2,
    #[strum(serialize = "high")]
    High = 3,
    #[strum(serialize = "very high")]
    VeryHigh = 4,
}

impl Rating {
    /// Maps a free-text rating to a score. The strongest keyword found in the text wins. Text
    /// without any known keyword is rated as moderate.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let words = words(text);

        if contains_any(&words, &["very high", "excellent", "exceptional", "superior"]) {
            Rating::VeryHigh
        } else if contains_any(&words, &["high", "good", "strong"]) {
            Rating::High
        } else if contains_any(&words, &["moderate", "medium", "fair"]) {
            Rating::Moderate
        } else if contains_any(&words, &["low", "minimal", "poor", "limited"]) {
            Rating::Low
        } else {
            Rating::Moderate
        }
    }

    #[must_use]
    pub fn score(self) -> u8 {
        self as u8
    }
}

#[derive(strum::Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[strum(serialize_all = "snake_case")]
pub enum Safety {
    Safe,
    Moderate,
    Caution,
}

impl Safety {
    /// Classifies injury-risk text. The riskiest keyword found in the text wins. Text without
    /// any known keyword is classified as moderate.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let words = words(text);

        if contains_any(&words, &["high", "significant", "severe", "dangerous"]) {
            Safety::Caution
        } else if contains_any(&words, &["moderate", "medium"]) {
            Safety::Moderate
        } else if contains_any(&words, &["low", "minimal", "safe"]) {
            Safety::Safe
        } else {
            Safety::Moderate
        }
    }
}

#[derive(strum::Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum ExerciseKind {
    Compound,
    Accessory,
}

const COMPOUND_KEYWORDS: [&str; 20] = [
    "press",
    "squat",
    "squats",
    "deadlift",
    "deadlifts",
    "row",
    "rows",
    "pull up",
    "pullup",
    "chin up",
    "chinup",
    "dip",
    "dips",
    "lunge",
    "lunges",
    "clean",
    "snatch",
    "thruster",
    "thrusters",
    "good morning",
];

impl ExerciseKind {
    /// Multi-joint movements are recognized by whole-word keywords in the exercise name.
    #[must_use]
    pub fn classify(name: &str) -> Self {
        if contains_any(&words(name), &COMPOUND_KEYWORDS) {
            ExerciseKind::Compound
        } else {
            ExerciseKind::Accessory
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseSubstitution {
    pub scenario: String,
    pub substitute: String,
    pub rationale: String,
}

impl ExerciseSubstitution {
    #[must_use]
    pub fn matches_scenario(&self, scenario: &str) -> bool {
        normalize(&self.scenario) == normalize(scenario)
    }
}

/// Lowercase words of `text`. Hyphens separate words, so `Pull-Up` matches the phrase `pull up`.
fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn contains_any(words: &[String], phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| {
        let phrase = phrase.split(' ').collect::<Vec<_>>();
        words
            .windows(phrase.len())
            .any(|window| window.iter().zip(&phrase).all(|(w, p)| w == p))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Very High", Rating::VeryHigh)]
    #[case("Excellent for mass", Rating::VeryHigh)]
    #[case("High", Rating::High)]
    #[case("Moderate to high", Rating::High)]
    #[case("Moderate", Rating::Moderate)]
    #[case("Low", Rating::Low)]
    #[case("Lower than barbell variations", Rating::Moderate)]
    #[case("Very-high", Rating::VeryHigh)]
    #[case("Moderate-to-high", Rating::High)]
    #[case("", Rating::Moderate)]
    fn test_rating_from_text(#[case] text: &str, #[case] expected: Rating) {
        assert_eq!(Rating::from_text(text), expected);
    }

    #[rstest]
    #[case(Rating::Low, 1)]
    #[case(Rating::Moderate, 2)]
    #[case(Rating::High, 3)]
    #[case(Rating::VeryHigh, 4)]
    fn test_rating_score(#[case] rating: Rating, #[case] score: u8) {
        assert_eq!(rating.score(), score);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::VeryHigh.to_string(), "very high");
    }

    #[rstest]
    #[case("Low when performed with proper form", Safety::Safe)]
    #[case("Minimal", Safety::Safe)]
    #[case("Low to moderate (shoulder strain)", Safety::Moderate)]
    #[case("Moderate - lower back", Safety::Moderate)]
    #[case("High risk of shoulder impingement", Safety::Caution)]
    #[case("High-risk movement", Safety::Caution)]
    #[case("Low-risk", Safety::Safe)]
    #[case("Unknown", Safety::Moderate)]
    fn test_safety_from_text(#[case] text: &str, #[case] expected: Safety) {
        assert_eq!(Safety::from_text(text), expected);
    }

    #[rstest]
    #[case("Barbell Bench Press", ExerciseKind::Compound)]
    #[case("Back Squat", ExerciseKind::Compound)]
    #[case("Romanian Deadlift", ExerciseKind::Compound)]
    #[case("Weighted Pull-Up", ExerciseKind::Compound)]
    #[case("Chin Up", ExerciseKind::Compound)]
    #[case("Barbell Good Morning", ExerciseKind::Compound)]
    #[case("Dumbbell Thruster", ExerciseKind::Compound)]
    #[case("Chin-Up", ExerciseKind::Compound)]
    #[case("Pullup", ExerciseKind::Compound)]
    #[case("Triceps Pressdown", ExerciseKind::Accessory)]
    #[case("Lat Pulldown", ExerciseKind::Accessory)]
    #[case("Straight-Arm Pulldown", ExerciseKind::Accessory)]
    #[case("Cable Fly", ExerciseKind::Accessory)]
    #[case("Lateral Raise", ExerciseKind::Accessory)]
    #[case("Face Pull", ExerciseKind::Accessory)]
    fn test_exercise_kind_classify(#[case] name: &str, #[case] expected: ExerciseKind) {
        assert_eq!(ExerciseKind::classify(name), expected);
    }

    #[test]
    fn test_exercise_detail() {
        let exercise = ExerciseDetail {
            name: Name::new("Barbell Bench Press").unwrap(),
            emg_activation: "High pectoralis major activation:contentReference[oaicite:1]{index=1}. Anterior deltoid assists.".to_string(),
            effectiveness: Effectiveness {
                hypertrophy: "Very High".to_string(),
                strength: "Very High".to_string(),
                power: "Moderate".to_string(),
            },
            injury_risk: "Moderate (shoulder)".to_string(),
            equipment: "Barbell, bench".to_string(),
            prerequisites: String::new(),
            progression: String::new(),
        };

        assert_eq!(exercise.kind(), ExerciseKind::Compound);
        assert_eq!(exercise.safety(), Safety::Moderate);
        assert_eq!(exercise.summary(), "High pectoralis major activation");
        assert_eq!(exercise.effectiveness.hypertrophy_rating(), Rating::VeryHigh);
        assert_eq!(exercise.effectiveness.strength_rating(), Rating::VeryHigh);
        assert_eq!(exercise.effectiveness.power_rating(), Rating::Moderate);
    }

    #[rstest]
    #[case("Shoulder pain", true)]
    #[case("  shoulder   PAIN ", true)]
    #[case("Shoulder", false)]
    fn test_exercise_substitution_matches_scenario(#[case] scenario: &str, #[case] expected: bool) {
        let substitution = ExerciseSubstitution {
            scenario: "Shoulder pain".to_string(),
            substitute: "Neutral-Grip Dumbbell Press".to_string(),
            rationale: String::new(),
        };
        assert_eq!(substitution.matches_scenario(scenario), expected);
    }
}
