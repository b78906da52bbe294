use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, Mutex, MutexGuard},
};

use fitplan_domain::{
    self as domain, CreateError, ExerciseDefinition, ExerciseID, PlanID, ReadError, StorageError,
    UserID, WorkoutPlan,
};
use log::debug;

/// Keeps the exercise catalog and all plans in memory.
///
/// Exercise names are unique ignoring case. Concurrent creation of the same
/// name stores exactly one definition.
#[derive(Default)]
pub struct Memory {
    exercises: Mutex<BTreeMap<String, Arc<ExerciseDefinition>>>,
    plans: Mutex<Vec<WorkoutPlan>>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StorageError> {
    mutex
        .lock()
        .map_err(|err| StorageError::Other(err.to_string().into()))
}

impl domain::ExerciseRepository for Memory {
    fn read_exercises(&self) -> Result<Vec<Arc<ExerciseDefinition>>, ReadError> {
        Ok(lock(&self.exercises)?.values().cloned().collect())
    }

    fn find_exercise_by_name(
        &self,
        name: &domain::Name,
    ) -> Result<Option<Arc<ExerciseDefinition>>, ReadError> {
        Ok(lock(&self.exercises)?.get(&name.key()).cloned())
    }

    fn create_exercise(
        &self,
        exercise: ExerciseDefinition,
    ) -> Result<Arc<ExerciseDefinition>, CreateError> {
        let mut exercises = lock(&self.exercises)?;
        let key = exercise.name.key();

        if exercises.contains_key(&key) {
            return Err(CreateError::Conflict);
        }

        let exercise = Arc::new(ExerciseDefinition {
            id: ExerciseID::new_random(),
            ..exercise
        });
        debug!("stored exercise \"{}\"", exercise.name);
        exercises.insert(key, exercise.clone());

        Ok(exercise)
    }
}

impl domain::PlanRepository for Memory {
    fn read_plans(&self, user_id: UserID) -> Result<Vec<WorkoutPlan>, ReadError> {
        Ok(lock(&self.plans)?
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    fn save_plan(&self, plan: WorkoutPlan) -> Result<WorkoutPlan, CreateError> {
        self.save_plans(vec![plan])?
            .pop()
            .ok_or_else(|| CreateError::Other("plan not stored".into()))
    }

    fn save_plans(&self, plans: Vec<WorkoutPlan>) -> Result<Vec<WorkoutPlan>, CreateError> {
        let mut stored = lock(&self.plans)?;
        let mut ids = stored.iter().map(|p| p.id).collect::<BTreeSet<PlanID>>();

        let plans = plans
            .into_iter()
            .map(|plan| {
                let plan = if plan.id.is_nil() {
                    WorkoutPlan {
                        id: PlanID::new_random(),
                        ..plan
                    }
                } else {
                    plan
                };
                if ids.insert(plan.id) {
                    Ok(plan)
                } else {
                    Err(CreateError::Conflict)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        stored.extend(plans.iter().cloned());
        debug!("stored {} plans", plans.len());

        Ok(plans)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use domain::{ExerciseRepository, PlanRepository};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::tests::data::{EXERCISE, PLAN, USER, USER_2};

    #[test]
    fn test_create_exercise() {
        let memory = Memory::new();

        let exercise = memory.create_exercise(EXERCISE.clone()).unwrap();

        assert!(!exercise.id.is_nil());
        assert_eq!(exercise.name, EXERCISE.name);
        assert_eq!(memory.read_exercises().unwrap(), vec![exercise]);
    }

    #[rstest]
    #[case("Squat")]
    #[case("squat")]
    #[case("SQUAT")]
    fn test_create_exercise_conflict(#[case] name: &str) {
        let memory = Memory::new();
        memory.create_exercise(EXERCISE.clone()).unwrap();

        assert!(matches!(
            memory.create_exercise(ExerciseDefinition {
                name: domain::Name::new(name).unwrap(),
                ..EXERCISE.clone()
            }),
            Err(CreateError::Conflict)
        ));
        assert_eq!(memory.read_exercises().unwrap().len(), 1);
    }

    #[test]
    fn test_find_exercise_by_name_ignores_case() {
        let memory = Memory::new();
        let exercise = memory.create_exercise(EXERCISE.clone()).unwrap();

        let found = memory
            .find_exercise_by_name(&domain::Name::new("sQuAt").unwrap())
            .unwrap()
            .unwrap();

        assert!(Arc::ptr_eq(&found, &exercise));
        assert_eq!(
            memory
                .find_exercise_by_name(&domain::Name::new("Lunge").unwrap())
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_concurrent_create_or_get_exercise() {
        let memory = Memory::new();

        let exercises = thread::scope(|s| {
            let handles = (0..16)
                .map(|_| {
                    s.spawn(|| domain::create_or_get_exercise(&memory, EXERCISE.clone()).unwrap())
                })
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        });

        assert_eq!(memory.read_exercises().unwrap().len(), 1);
        assert_eq!(exercises.len(), 16);
        assert!(exercises.iter().all(|e| Arc::ptr_eq(e, &exercises[0])));
    }

    #[test]
    fn test_save_plan() {
        let memory = Memory::new();

        let plan = memory.save_plan(PLAN.clone()).unwrap();

        assert_eq!(plan, PLAN.clone());
        assert_eq!(memory.read_plans(USER.id).unwrap(), vec![plan]);
        assert_eq!(memory.read_plans(USER_2.id).unwrap(), vec![]);
    }

    #[test]
    fn test_save_plan_assigns_id() {
        let memory = Memory::new();

        let plan = memory
            .save_plan(WorkoutPlan {
                id: PlanID::nil(),
                ..PLAN.clone()
            })
            .unwrap();

        assert!(!plan.id.is_nil());
    }

    #[test]
    fn test_save_plans_all_or_nothing() {
        let memory = Memory::new();
        memory.save_plan(PLAN.clone()).unwrap();

        let result = memory.save_plans(vec![
            WorkoutPlan {
                id: 2.into(),
                user_id: USER_2.id,
                ..PLAN.clone()
            },
            PLAN.clone(),
        ]);

        assert!(matches!(result, Err(CreateError::Conflict)));
        assert_eq!(memory.read_plans(USER_2.id).unwrap(), vec![]);
    }

    #[test]
    fn test_save_plans() {
        let memory = Memory::new();
        let plans = vec![
            PLAN.clone(),
            WorkoutPlan {
                id: 2.into(),
                ..PLAN.clone()
            },
        ];

        assert_eq!(memory.save_plans(plans.clone()).unwrap(), plans);
        assert_eq!(memory.read_plans(USER.id).unwrap(), plans);
    }

    #[test]
    fn test_service_creates_and_stores_plans() {
        let service = domain::Service::new(Memory::new(), domain::PlanFactory::default());

        let plan = domain::PlanService::create_personalized_plan(
            &service,
            &USER_2,
            &domain::PlanRequest::default(),
        )
        .unwrap();

        assert_eq!(plan.plan_type, domain::PlanType::Cardio);
        assert_eq!(u32::from(plan.sessions_per_week), 3);
        assert!(u32::from(plan.session_minutes) <= 45);
        assert_eq!(
            domain::PlanService::get_plans(&service, USER_2.id).unwrap(),
            vec![plan]
        );
    }

    #[test]
    fn test_service_reuses_stored_exercises() {
        let service = domain::Service::new(Memory::new(), domain::PlanFactory::default());
        let request = domain::PlanRequest::of_type("hiit");

        let first = domain::PlanService::create_personalized_plan(&service, &USER, &request).unwrap();
        let second =
            domain::PlanService::create_personalized_plan(&service, &USER, &request).unwrap();

        assert_eq!(first.plan_type, domain::PlanType::Mixed);
        let catalog = domain::PlanService::get_exercises(&service).unwrap();
        for exercise in first.exercises.iter().chain(&second.exercises) {
            assert!(catalog.iter().any(|e| Arc::ptr_eq(e, &exercise.exercise)));
        }
    }
}
