use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{MuscleGroup, Name, ReadError};

/// Access to the workout data held by the remote backend.
#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_session(&self, id: SessionID) -> Result<WorkoutSession, ReadError>;
    async fn read_exercise_sets(&self, session_id: SessionID)
    -> Result<Vec<ExerciseSet>, ReadError>;
    async fn read_exercises(&self, ids: &[ExerciseID]) -> Result<Vec<Exercise>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_session(&self, id: SessionID) -> Result<WorkoutSession, ReadError>;
    async fn get_exercise_sets(&self, session_id: SessionID)
    -> Result<Vec<ExerciseSet>, ReadError>;
    async fn get_session_overview(&self, id: SessionID) -> Result<SessionOverview, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSession {
    pub id: SessionID,
    pub date: NaiveDate,
    pub notes: String,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionID(Uuid);

impl From<Uuid> for SessionID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SessionID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub muscle_group: MuscleGroup,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseSet {
    pub session_id: SessionID,
    pub exercise_id: ExerciseID,
    pub position: u32,
    pub reps: Option<u32>,
    pub weight: Option<f32>,
    pub rpe: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionOverview {
    pub session: WorkoutSession,
    pub sets: BTreeMap<MuscleGroup, Vec<ExerciseSet>>,
}

impl SessionOverview {
    #[must_use]
    pub fn set_count(&self, muscle_group: &MuscleGroup) -> usize {
        self.sets.get(muscle_group).map_or(0, Vec::len)
    }
}

#[must_use]
pub fn exercise_ids(sets: &[ExerciseSet]) -> Vec<ExerciseID> {
    sets.iter()
        .map(|s| s.exercise_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Groups the sets by the muscle group of their exercise, keeping the order of the sets. Sets of
/// unknown exercises are grouped under `other`.
#[must_use]
pub fn group_sets_by_muscle_group(
    sets: &[ExerciseSet],
    exercises: &[Exercise],
) -> BTreeMap<MuscleGroup, Vec<ExerciseSet>> {
    let muscle_groups = exercises
        .iter()
        .map(|e| (e.id, &e.muscle_group))
        .collect::<BTreeMap<_, _>>();
    let mut result: BTreeMap<MuscleGroup, Vec<ExerciseSet>> = BTreeMap::new();

    for set in sets {
        let muscle_group = muscle_groups
            .get(&set.exercise_id)
            .map_or_else(MuscleGroup::other, |m| (*m).clone());
        result.entry(muscle_group).or_default().push(set.clone());
    }

    result
}
