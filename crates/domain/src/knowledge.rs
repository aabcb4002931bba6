use std::{collections::BTreeMap, sync::OnceLock};

use log::{debug, warn};

use crate::{
    ExerciseDetail, ExerciseSubstitution, ExperienceLevel, Goal, MuscleGroup, ReadError,
    VolumeLandmarks,
};

pub trait KnowledgeRepository {
    fn read_knowledge_base(&self) -> Result<KnowledgeBase, ReadError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    pub version: String,
    pub volume_guidelines: BTreeMap<(MuscleGroup, Goal, ExperienceLevel), VolumeLandmarks>,
    pub general_principles: GeneralPrinciples,
    pub exercise_selection: BTreeMap<MuscleGroup, ExerciseSelection>,
}

impl KnowledgeBase {
    /// Searches the compound and accessory lists of all muscle groups for an exercise with the
    /// given name. Names are compared after normalizing case and whitespace.
    #[must_use]
    pub fn find_exercise(&self, name: &str) -> Option<&ExerciseDetail> {
        self.exercise_selection
            .values()
            .flat_map(ExerciseSelection::exercises)
            .find(|e| e.name.matches(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseSelection {
    pub compound: Vec<ExerciseDetail>,
    pub accessory: Vec<ExerciseDetail>,
    pub substitutions: Vec<ExerciseSubstitution>,
}

impl ExerciseSelection {
    pub fn exercises(&self) -> impl Iterator<Item = &ExerciseDetail> {
        self.compound.iter().chain(self.accessory.iter())
    }

    #[must_use]
    pub fn find_substitution(&self, scenario: &str) -> Option<&ExerciseSubstitution> {
        self.substitutions
            .iter()
            .find(|s| s.matches_scenario(scenario))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneralPrinciples {
    pub workout_split: String,
    pub exercise_selection: String,
    pub progressive_overload: String,
    pub recovery: String,
}

static FALLBACK_PRINCIPLES: OnceLock<GeneralPrinciples> = OnceLock::new();

impl GeneralPrinciples {
    /// Static guidance used when the knowledge base cannot be loaded.
    #[must_use]
    pub fn fallback() -> &'static GeneralPrinciples {
        FALLBACK_PRINCIPLES.get_or_init(|| GeneralPrinciples {
            workout_split: FALLBACK_WORKOUT_SPLIT.to_string(),
            exercise_selection: FALLBACK_EXERCISE_SELECTION.to_string(),
            progressive_overload: FALLBACK_PROGRESSIVE_OVERLOAD.to_string(),
            recovery: FALLBACK_RECOVERY.to_string(),
        })
    }

    #[must_use]
    pub fn sections(&self) -> [(&'static str, &str); 4] {
        [
            ("Workout split", self.workout_split.as_str()),
            ("Exercise selection", self.exercise_selection.as_str()),
            ("Progressive overload", self.progressive_overload.as_str()),
            ("Recovery", self.recovery.as_str()),
        ]
    }
}

const FALLBACK_WORKOUT_SPLIT: &str = "\
Train each muscle group at least twice per week. Beginners progress well on full-body sessions \
three times per week. Intermediate and advanced lifters can use upper/lower or push/pull/legs \
splits to distribute a higher weekly volume. Keep at least 48 hours between hard sessions for the \
same muscle group.";

const FALLBACK_EXERCISE_SELECTION: &str = "\
Build each session around one or two compound movements such as squats, presses, rows or \
deadlifts. Add accessory exercises afterwards to cover muscles the compounds train poorly. Prefer \
exercises that load the muscle in a lengthened position and that allow stable, repeatable \
technique. Keep the selection consistent for four to eight weeks before rotating.";

const FALLBACK_PROGRESSIVE_OVERLOAD: &str = "\
Increase the training stimulus gradually. Add repetitions within the target range first and \
increase the load once the top of the range is reached for all sets. Add sets only when progress \
stalls and recovery allows it. Most working sets should end one to three repetitions short of \
failure.";

const FALLBACK_RECOVERY: &str = "\
Sleep seven to nine hours per night and eat sufficient protein, around 1.6 to 2.2 g per kg of \
body weight. Reduce volume for a deload week every four to eight weeks or when performance drops \
across several sessions. Persistent joint pain is a reason to substitute the exercise.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeState {
    Loaded(KnowledgeBase),
    Fallback,
}

/// Read access to the knowledge base.
///
/// The knowledge base is read from the repository at most once, either by an explicit call to
/// `initialize` or by the first accessor that needs it. Concurrent callers wait for that single
/// load to finish. If the load fails, the service stays in fallback mode for its whole lifetime
/// and serves the static guidance from `GeneralPrinciples::fallback`.
pub struct KnowledgeService<R> {
    repository: R,
    state: OnceLock<KnowledgeState>,
}

impl<R: KnowledgeRepository> KnowledgeService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            state: OnceLock::new(),
        }
    }

    pub fn initialize(&self) -> &KnowledgeState {
        self.state.get_or_init(|| match self.repository.read_knowledge_base() {
            Ok(knowledge_base) => {
                debug!(
                    "loaded knowledge base version {} ({} muscle groups)",
                    knowledge_base.version,
                    knowledge_base.exercise_selection.len()
                );
                KnowledgeState::Loaded(knowledge_base)
            }
            Err(err) => {
                warn!("failed to load knowledge base, using fallback: {err}");
                KnowledgeState::Fallback
            }
        })
    }

    pub fn is_using_fallback(&self) -> bool {
        matches!(self.initialize(), KnowledgeState::Fallback)
    }

    pub fn knowledge_base(&self) -> Option<&KnowledgeBase> {
        match self.initialize() {
            KnowledgeState::Loaded(knowledge_base) => Some(knowledge_base),
            KnowledgeState::Fallback => None,
        }
    }

    pub fn version(&self) -> Option<&str> {
        self.knowledge_base().map(|kb| kb.version.as_str())
    }

    pub fn find_exercise(&self, name: &str) -> Option<&ExerciseDetail> {
        self.knowledge_base()?.find_exercise(name)
    }

    pub fn general_principles(&self) -> &GeneralPrinciples {
        match self.initialize() {
            KnowledgeState::Loaded(knowledge_base) => &knowledge_base.general_principles,
            KnowledgeState::Fallback => GeneralPrinciples::fallback(),
        }
    }

    pub fn muscle_groups(&self) -> Vec<&MuscleGroup> {
        self.knowledge_base()
            .map(|kb| kb.exercise_selection.keys().collect())
            .unwrap_or_default()
    }

    pub fn exercise_selection(&self, muscle_group: &MuscleGroup) -> Option<&ExerciseSelection> {
        self.knowledge_base()?.exercise_selection.get(muscle_group)
    }

    pub fn find_substitution(
        &self,
        muscle_group: &MuscleGroup,
        scenario: &str,
    ) -> Option<&ExerciseSubstitution> {
        self.exercise_selection(muscle_group)?
            .find_substitution(scenario)
    }

    pub fn volume_landmarks(
        &self,
        muscle_group: &MuscleGroup,
        goal: Goal,
        level: ExperienceLevel,
    ) -> Option<&VolumeLandmarks> {
        self.knowledge_base()?
            .volume_guidelines
            .get(&(muscle_group.clone(), goal, level))
    }
}
