//! JSON schema of the knowledge base
//!
//! The structs in this module mirror the JSON document. Every field carries its JSON key
//! explicitly, so the attributes below form the mapping table between the document and the
//! domain model. Conversion into the domain model validates muscle groups, goals, experience
//! levels and exercise names.

use std::{collections::BTreeMap, str::FromStr};

use repwise_domain as domain;

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    #[serde(rename = "version")]
    pub version: String,
    #[serde(rename = "volume_guidelines")]
    pub volume_guidelines: BTreeMap<String, BTreeMap<String, BTreeMap<String, VolumeLandmarks>>>,
    #[serde(rename = "general_principles")]
    pub general_principles: GeneralPrinciples,
    #[serde(rename = "exercise_selection")]
    pub exercise_selection: BTreeMap<String, ExerciseSelection>,
}

impl TryFrom<KnowledgeBase> for domain::KnowledgeBase {
    type Error = KnowledgeBaseError;

    fn try_from(value: KnowledgeBase) -> Result<Self, Self::Error> {
        let mut volume_guidelines = BTreeMap::new();
        for (muscle_group, goals) in value.volume_guidelines {
            let muscle_group = muscle_group_from_key(&muscle_group)?;
            for (goal, levels) in goals {
                let goal = domain::Goal::from_str(&goal)
                    .map_err(|_| KnowledgeBaseError::UnknownGoal(goal.clone()))?;
                for (level, landmarks) in levels {
                    let level = domain::ExperienceLevel::from_str(&level)
                        .map_err(|_| KnowledgeBaseError::UnknownExperienceLevel(level.clone()))?;
                    if volume_guidelines
                        .insert((muscle_group.clone(), goal, level), landmarks.into())
                        .is_some()
                    {
                        return Err(KnowledgeBaseError::DuplicateVolumeGuidelines(format!(
                            "{muscle_group} / {goal} / {level}"
                        )));
                    }
                }
            }
        }

        let mut exercise_selection = BTreeMap::new();
        for (key, selection) in value.exercise_selection {
            let muscle_group = muscle_group_from_key(&key)?;
            if exercise_selection
                .insert(muscle_group, domain::ExerciseSelection::try_from(selection)?)
                .is_some()
            {
                return Err(KnowledgeBaseError::DuplicateMuscleGroup(key));
            }
        }

        Ok(Self {
            version: value.version,
            volume_guidelines,
            general_principles: value.general_principles.into(),
            exercise_selection,
        })
    }
}

fn muscle_group_from_key(key: &str) -> Result<domain::MuscleGroup, KnowledgeBaseError> {
    domain::MuscleGroup::new(key)
        .map_err(|err| KnowledgeBaseError::InvalidMuscleGroup(key.to_string(), err))
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct VolumeLandmarks {
    #[serde(rename = "mev")]
    pub minimum_effective_volume: String,
    #[serde(rename = "mav")]
    pub maximum_adaptive_volume: String,
    #[serde(rename = "mrv")]
    pub maximum_recoverable_volume: String,
    #[serde(rename = "sets_per_session", default)]
    pub sets_per_session: String,
    #[serde(rename = "rep_range", default)]
    pub rep_range: String,
    #[serde(rename = "rest_period", default)]
    pub rest_period: String,
    #[serde(rename = "notes", default)]
    pub notes: String,
}

impl From<VolumeLandmarks> for domain::VolumeLandmarks {
    fn from(value: VolumeLandmarks) -> Self {
        Self {
            minimum_effective_volume: value.minimum_effective_volume,
            maximum_adaptive_volume: value.maximum_adaptive_volume,
            maximum_recoverable_volume: value.maximum_recoverable_volume,
            sets_per_session: value.sets_per_session,
            rep_range: value.rep_range,
            rest_period: value.rest_period,
            notes: value.notes,
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct GeneralPrinciples {
    #[serde(rename = "workout_split")]
    pub workout_split: String,
    #[serde(rename = "exercise_selection")]
    pub exercise_selection: String,
    #[serde(rename = "progressive_overload")]
    pub progressive_overload: String,
    #[serde(rename = "recovery")]
    pub recovery: String,
}

impl From<GeneralPrinciples> for domain::GeneralPrinciples {
    fn from(value: GeneralPrinciples) -> Self {
        Self {
            workout_split: value.workout_split,
            exercise_selection: value.exercise_selection,
            progressive_overload: value.progressive_overload,
            recovery: value.recovery,
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseSelection {
    #[serde(rename = "top_compound_exercises")]
    pub compound: Vec<ExerciseDetail>,
    #[serde(rename = "top_accessory_exercises")]
    pub accessory: Vec<ExerciseDetail>,
    #[serde(rename = "exercise_substitutions", default)]
    pub substitutions: Vec<ExerciseSubstitution>,
}

impl TryFrom<ExerciseSelection> for domain::ExerciseSelection {
    type Error = KnowledgeBaseError;

    fn try_from(value: ExerciseSelection) -> Result<Self, Self::Error> {
        Ok(Self {
            compound: value
                .compound
                .into_iter()
                .map(domain::ExerciseDetail::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            accessory: value
                .accessory
                .into_iter()
                .map(domain::ExerciseDetail::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            substitutions: value
                .substitutions
                .into_iter()
                .map(domain::ExerciseSubstitution::from)
                .collect(),
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseDetail {
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "emg_activation", default)]
    pub emg_activation: String,
    #[serde(rename = "effectiveness", default)]
    pub effectiveness: Effectiveness,
    #[serde(rename = "injury_risk", default)]
    pub injury_risk: String,
    #[serde(rename = "equipment", default)]
    pub equipment: String,
    #[serde(rename = "prerequisites", default)]
    pub prerequisites: String,
    #[serde(rename = "progression", default)]
    pub progression: String,
}

impl TryFrom<ExerciseDetail> for domain::ExerciseDetail {
    type Error = KnowledgeBaseError;

    fn try_from(value: ExerciseDetail) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)
                .map_err(|err| KnowledgeBaseError::InvalidExerciseName(value.name.clone(), err))?,
            emg_activation: value.emg_activation,
            effectiveness: value.effectiveness.into(),
            injury_risk: value.injury_risk,
            equipment: value.equipment,
            prerequisites: value.prerequisites,
            progression: value.progression,
        })
    }
}

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Effectiveness {
    #[serde(rename = "hypertrophy", default)]
    pub hypertrophy: String,
    #[serde(rename = "strength", default)]
    pub strength: String,
    #[serde(rename = "power", default)]
    pub power: String,
}

impl From<Effectiveness> for domain::Effectiveness {
    fn from(value: Effectiveness) -> Self {
        Self {
            hypertrophy: value.hypertrophy,
            strength: value.strength,
            power: value.power,
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ExerciseSubstitution {
    #[serde(rename = "scenario")]
    pub scenario: String,
    #[serde(rename = "substitute")]
    pub substitute: String,
    #[serde(rename = "rationale", default)]
    pub rationale: String,
}

impl From<ExerciseSubstitution> for domain::ExerciseSubstitution {
    fn from(value: ExerciseSubstitution) -> Self {
        Self {
            scenario: value.scenario,
            substitute: value.substitute,
            rationale: value.rationale,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum KnowledgeBaseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown goal \"{0}\"")]
    UnknownGoal(String),
    #[error("unknown experience level \"{0}\"")]
    UnknownExperienceLevel(String),
    #[error("duplicate muscle group \"{0}\"")]
    DuplicateMuscleGroup(String),
    #[error("duplicate volume guidelines for {0}")]
    DuplicateVolumeGuidelines(String),
    #[error("invalid muscle group \"{0}\": {1}")]
    InvalidMuscleGroup(String, domain::MuscleGroupError),
    #[error("invalid exercise name \"{0}\": {1}")]
    InvalidExerciseName(String, domain::NameError),
}

impl From<KnowledgeBaseError> for domain::ReadError {
    fn from(value: KnowledgeBaseError) -> Self {
        domain::ReadError::Other(Box::new(value))
    }
}

/// Parses and validates a knowledge base document.
pub fn parse(json: &str) -> Result<domain::KnowledgeBase, KnowledgeBaseError> {
    serde_json::from_str::<KnowledgeBase>(json)?.try_into()
}
