use log::{debug, error};

use crate::{
    ExerciseSet, ReadError, SessionID, SessionOverview, WorkoutRepository, WorkoutService,
    WorkoutSession, exercise_ids, group_sets_by_muscle_group,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_session(&self, id: SessionID) -> Result<WorkoutSession, ReadError> {
        log_on_error!(
            self.repository.read_session(id),
            ReadError,
            "get",
            "workout session"
        )
    }

    async fn get_exercise_sets(
        &self,
        session_id: SessionID,
    ) -> Result<Vec<ExerciseSet>, ReadError> {
        log_on_error!(
            self.repository.read_exercise_sets(session_id),
            ReadError,
            "get",
            "exercise sets"
        )
    }

    async fn get_session_overview(&self, id: SessionID) -> Result<SessionOverview, ReadError> {
        let session = self.get_session(id).await?;
        let sets = self.get_exercise_sets(id).await?;
        let exercises = log_on_error!(
            self.repository.read_exercises(&exercise_ids(&sets)),
            ReadError,
            "get",
            "exercises"
        )?;
        Ok(SessionOverview {
            session,
            sets: group_sets_by_muscle_group(&sets, &exercises),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::BTreeMap};

    use chrono::NaiveDate;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Exercise, ExerciseID, MuscleGroup, Name, StorageError};

    struct Backend {
        connected: bool,
        requested_exercises: RefCell<Vec<ExerciseID>>,
    }

    impl Backend {
        fn new(connected: bool) -> Self {
            Self {
                connected,
                requested_exercises: RefCell::new(vec![]),
            }
        }

        fn check_connection(&self) -> Result<(), ReadError> {
            if self.connected {
                Ok(())
            } else {
                Err(StorageError::NoConnection.into())
            }
        }
    }

    fn session() -> WorkoutSession {
        WorkoutSession {
            id: 1.into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            notes: "Push day".to_string(),
        }
    }

    fn set(exercise_id: u128, position: u32, reps: u32) -> ExerciseSet {
        ExerciseSet {
            session_id: 1.into(),
            exercise_id: exercise_id.into(),
            position,
            reps: Some(reps),
            weight: Some(80.0),
            rpe: Some(8.0),
        }
    }

    impl WorkoutRepository for Backend {
        async fn read_session(&self, id: SessionID) -> Result<WorkoutSession, ReadError> {
            self.check_connection()?;
            if id == session().id {
                Ok(session())
            } else {
                Err(StorageError::NotFound(format!("session {}", *id)).into())
            }
        }

        async fn read_exercise_sets(
            &self,
            session_id: SessionID,
        ) -> Result<Vec<ExerciseSet>, ReadError> {
            self.check_connection()?;
            if session_id == session().id {
                Ok(vec![set(2, 0, 8), set(1, 1, 10), set(2, 2, 6)])
            } else {
                Ok(vec![])
            }
        }

        async fn read_exercises(&self, ids: &[ExerciseID]) -> Result<Vec<Exercise>, ReadError> {
            self.check_connection()?;
            self.requested_exercises.borrow_mut().extend(ids);
            Ok(vec![
                Exercise {
                    id: 1.into(),
                    name: Name::new("Overhead Press").unwrap(),
                    muscle_group: MuscleGroup::new("shoulders").unwrap(),
                },
                Exercise {
                    id: 2.into(),
                    name: Name::new("Barbell Bench Press").unwrap(),
                    muscle_group: MuscleGroup::new("chest").unwrap(),
                },
            ])
        }
    }

    #[test]
    fn test_get_session() {
        let service = Service::new(Backend::new(true));

        assert_eq!(block_on(service.get_session(1.into())).unwrap(), session());
        assert!(matches!(
            block_on(service.get_session(2.into())),
            Err(ReadError::Storage(StorageError::NotFound(_)))
        ));
    }

    #[test]
    fn test_get_session_overview() {
        let backend = Backend::new(true);
        let service = Service::new(backend);

        let overview = block_on(service.get_session_overview(1.into())).unwrap();

        assert_eq!(overview.session, session());
        assert_eq!(
            overview.sets,
            BTreeMap::from([
                (
                    MuscleGroup::new("chest").unwrap(),
                    vec![set(2, 0, 8), set(2, 2, 6)]
                ),
                (MuscleGroup::new("shoulders").unwrap(), vec![set(1, 1, 10)]),
            ])
        );
        assert_eq!(overview.set_count(&MuscleGroup::new("chest").unwrap()), 2);
        assert_eq!(overview.set_count(&MuscleGroup::new("back").unwrap()), 0);
        assert_eq!(
            *service.repository.requested_exercises.borrow(),
            vec![ExerciseID::from(1), ExerciseID::from(2)]
        );
    }

    #[test]
    fn test_get_session_overview_no_connection() {
        let service = Service::new(Backend::new(false));

        assert!(matches!(
            block_on(service.get_session_overview(1.into())),
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
    }
}
