use std::sync::Arc;

use log::{debug, error};

use crate::{
    AchievementEngine, CompletedSession, CreateError, ExerciseDefinition, ExerciseRepository,
    FitnessGoal, FitnessLevel, GenerationError, PlanFactory, PlanRepository, PlanRequest,
    PlanType, ProgressObserver, ProgressSubject, Profile, ReadError, UnlockedAchievement, User,
    UserID, UserStats, WorkoutPlan, create_or_get_exercise, resolve_plan_type,
    strategy::Strategy,
};

pub trait PlanService: Send + Sync + 'static {
    fn create_personalized_plan(
        &self,
        user: &User,
        request: &PlanRequest,
    ) -> Result<WorkoutPlan, GenerationError>;
    fn resolve_plan_type(
        &self,
        requested: Option<&str>,
        level: FitnessLevel,
        goal: FitnessGoal,
    ) -> PlanType;
    fn calculate_intensity(
        &self,
        plan_type: PlanType,
        profile: &Profile,
        plan: &WorkoutPlan,
    ) -> Result<f64, GenerationError>;
    fn create_or_get_exercise(
        &self,
        definition: ExerciseDefinition,
    ) -> Result<Arc<ExerciseDefinition>, CreateError>;
    fn get_exercises(&self) -> Result<Vec<Arc<ExerciseDefinition>>, ReadError>;
    fn get_plans(&self, user_id: UserID) -> Result<Vec<WorkoutPlan>, ReadError>;
}

pub trait ProgressService: Send + Sync + 'static {
    fn record_session_completed(
        &self,
        user_id: UserID,
        session: &CompletedSession,
    ) -> Vec<UnlockedAchievement>;
    fn record_weight_change(
        &self,
        user_id: UserID,
        old_kg: f64,
        new_kg: f64,
    ) -> Vec<UnlockedAchievement>;
    fn get_stats(&self, user_id: UserID) -> Option<UserStats>;
}

pub struct Service<R> {
    repository: R,
    factory: PlanFactory,
    progress: ProgressSubject,
    achievements: Arc<AchievementEngine>,
}

impl<R> Service<R>
where
    R: ExerciseRepository + PlanRepository,
{
    pub fn new(repository: R, factory: PlanFactory) -> Self {
        Self::with_achievements(repository, factory, AchievementEngine::new())
    }

    pub fn with_achievements(
        repository: R,
        factory: PlanFactory,
        achievements: AchievementEngine,
    ) -> Self {
        let achievements = Arc::new(achievements);
        let progress = ProgressSubject::new();
        progress.add_observer(achievements.clone());
        Self {
            repository,
            factory,
            progress,
            achievements,
        }
    }

    /// Additional observers receive every progress event after the
    /// achievement engine.
    pub fn add_observer(&self, observer: Arc<dyn ProgressObserver>) {
        self.progress.add_observer(observer);
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func;
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

impl<R> PlanService for Service<R>
where
    R: ExerciseRepository + PlanRepository,
{
    fn create_personalized_plan(
        &self,
        user: &User,
        request: &PlanRequest,
    ) -> Result<WorkoutPlan, GenerationError> {
        let plan = match self.factory.create_plan(user, request, &self.repository) {
            Ok(plan) => plan,
            Err(err) => {
                if err.is_bad_input() {
                    debug!("failed to create plan: {err}");
                } else {
                    error!("failed to create plan: {err}");
                }
                return Err(err);
            }
        };
        log_on_error!(
            self.repository.save_plan(plan),
            CreateError,
            "save",
            "plan"
        )
        .map_err(GenerationError::Persistence)
    }

    fn resolve_plan_type(
        &self,
        requested: Option<&str>,
        level: FitnessLevel,
        goal: FitnessGoal,
    ) -> PlanType {
        resolve_plan_type(requested, level, goal)
    }

    fn calculate_intensity(
        &self,
        plan_type: PlanType,
        profile: &Profile,
        plan: &WorkoutPlan,
    ) -> Result<f64, GenerationError> {
        self.factory
            .strategies()
            .get(plan_type)
            .map(|strategy| strategy.calculate_intensity(profile, plan))
            .ok_or(GenerationError::NoApplicableStrategy(plan_type))
    }

    fn create_or_get_exercise(
        &self,
        definition: ExerciseDefinition,
    ) -> Result<Arc<ExerciseDefinition>, CreateError> {
        log_on_error!(
            create_or_get_exercise(&self.repository, definition),
            CreateError,
            "create",
            "exercise"
        )
    }

    fn get_exercises(&self) -> Result<Vec<Arc<ExerciseDefinition>>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    fn get_plans(&self, user_id: UserID) -> Result<Vec<WorkoutPlan>, ReadError> {
        log_on_error!(
            self.repository.read_plans(user_id),
            ReadError,
            "get",
            "plans"
        )
    }
}

impl<R> ProgressService for Service<R>
where
    R: ExerciseRepository + PlanRepository,
{
    fn record_session_completed(
        &self,
        user_id: UserID,
        session: &CompletedSession,
    ) -> Vec<UnlockedAchievement> {
        self.progress.notify_session_completed(user_id, session)
    }

    fn record_weight_change(
        &self,
        user_id: UserID,
        old_kg: f64,
        new_kg: f64,
    ) -> Vec<UnlockedAchievement> {
        self.progress.notify_weight_changed(user_id, old_kg, new_kg)
    }

    fn get_stats(&self, user_id: UserID) -> Option<UserStats> {
        self.achievements.stats(user_id)
    }
}
