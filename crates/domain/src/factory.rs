use std::sync::Arc;

use log::{debug, info, warn};

use crate::{
    CreateError, DurationWeeks, ExerciseDefinition, ExerciseRepository, FitnessGoal,
    FitnessLevel, GenerationError, PlanExercise, PlanID, PlanRequestError, PlanType,
    PlannerConfig, Profile, Property, SessionMinutes, SessionsPerWeek, StrategyRegistry, User,
    WorkoutPlan, optimize_plan, resolve_plan_type,
    strategy::{HiitProtocol, Strategy, TrainingStrategy},
};

/// What a user asks for. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRequest {
    pub plan_type: Option<String>,
    pub duration_weeks: Option<u32>,
    pub sessions_per_week: Option<u32>,
    pub session_minutes: Option<u32>,
}

impl PlanRequest {
    #[must_use]
    pub fn of_type(plan_type: &str) -> Self {
        Self {
            plan_type: Some(plan_type.to_string()),
            ..Self::default()
        }
    }
}

pub struct PlanFactory {
    config: PlannerConfig,
    strategies: StrategyRegistry,
}

impl PlanFactory {
    #[must_use]
    pub fn new(config: PlannerConfig, strategies: StrategyRegistry) -> Self {
        Self { config, strategies }
    }

    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    #[must_use]
    pub fn strategies(&self) -> &StrategyRegistry {
        &self.strategies
    }

    /// Generates a complete, optimized plan for the user.
    ///
    /// Every exercise of the plan is resolved against the catalog, so the
    /// returned plan only references stored definitions. The plan itself is
    /// not saved.
    pub fn create_plan<E: ExerciseRepository + ?Sized>(
        &self,
        user: &User,
        request: &PlanRequest,
        exercises: &E,
    ) -> Result<WorkoutPlan, GenerationError> {
        let profile = Profile::try_from(user)?;
        let mut plan = self.build_skeleton(user, &profile, request)?;
        let strategy = self.select_strategy(plan.plan_type, &profile)?;

        plan.plan_type = strategy.plan_type();
        plan.name = plan_name(user, &profile, plan.plan_type);
        plan.description = plan_description(user, &profile, plan.plan_type);

        let mut rng = self.config.rng();
        let definitions = strategy.generate_exercises(&profile, &plan, &mut rng);
        let slot = self.config.slot;

        plan.exercises = (0..)
            .zip(definitions)
            .map(|(position, definition)| {
                let name = definition.name.to_string();
                let exercise = create_or_get_exercise(exercises, definition)
                    .map_err(|source| GenerationError::Catalog { name, source })?;
                Ok(PlanExercise {
                    position,
                    exercise,
                    sets: slot.sets,
                    reps: slot.reps,
                    duration_seconds: slot.duration_seconds,
                    rest_seconds: slot.rest_seconds,
                })
            })
            .collect::<Result<Vec<_>, GenerationError>>()?;
        plan.intensity = strategy.calculate_intensity(&profile, &plan);

        optimize_plan(&mut plan, &profile);

        info!(
            "created {} plan with {} exercises for user {}",
            plan.plan_type,
            plan.exercises.len(),
            *user.id
        );

        Ok(plan)
    }

    fn build_skeleton(
        &self,
        user: &User,
        profile: &Profile,
        request: &PlanRequest,
    ) -> Result<WorkoutPlan, PlanRequestError> {
        let defaults = self.config.level_defaults(profile.level);

        Ok(WorkoutPlan {
            id: PlanID::new_random(),
            user_id: user.id,
            name: String::new(),
            description: String::new(),
            plan_type: resolve_plan_type(request.plan_type.as_deref(), profile.level, profile.goal),
            difficulty: profile.level.into(),
            duration_weeks: request
                .duration_weeks
                .map(DurationWeeks::new)
                .transpose()
                .map_err(PlanRequestError::DurationWeeks)?
                .unwrap_or(defaults.duration_weeks),
            sessions_per_week: request
                .sessions_per_week
                .map(SessionsPerWeek::new)
                .transpose()
                .map_err(PlanRequestError::SessionsPerWeek)?
                .unwrap_or(defaults.sessions_per_week),
            session_minutes: request
                .session_minutes
                .map(SessionMinutes::new)
                .transpose()
                .map_err(PlanRequestError::SessionMinutes)?
                .unwrap_or(defaults.session_minutes),
            target_goal: profile.goal,
            intensity: 0.0,
            exercises: vec![],
        })
    }

    /// Falls back to a mixed plan if the requested type has no strategy or
    /// its strategy does not suit the user.
    fn select_strategy(
        &self,
        plan_type: PlanType,
        profile: &Profile,
    ) -> Result<&TrainingStrategy, GenerationError> {
        match self.strategies.get(plan_type) {
            Some(strategy) if strategy.is_applicable(profile) => return Ok(strategy),
            Some(_) => warn!(
                "{plan_type} plan not suitable for user {}, using {}",
                *profile.user_id,
                PlanType::Mixed
            ),
            None => warn!(
                "no strategy for {plan_type} plans, using {}",
                PlanType::Mixed
            ),
        }

        self.strategies
            .get(PlanType::Mixed)
            .ok_or(GenerationError::NoApplicableStrategy(plan_type))
    }
}

impl Default for PlanFactory {
    fn default() -> Self {
        Self::new(PlannerConfig::default(), StrategyRegistry::default())
    }
}

/// Returns the stored definition with the same name, creating it first if
/// necessary. If a concurrent caller wins the insert, its row is returned.
pub fn create_or_get_exercise<E: ExerciseRepository + ?Sized>(
    exercises: &E,
    definition: ExerciseDefinition,
) -> Result<Arc<ExerciseDefinition>, CreateError> {
    if let Some(existing) = exercises.find_exercise_by_name(&definition.name)? {
        return Ok(existing);
    }

    let name = definition.name.clone();

    match exercises.create_exercise(definition) {
        Err(CreateError::Conflict) => {
            debug!("exercise \"{name}\" was created concurrently, reusing it");
            exercises.find_exercise_by_name(&name)?.ok_or_else(|| {
                CreateError::Other(format!("exercise \"{name}\" missing after conflict").into())
            })
        }
        result => result,
    }
}

fn plan_type_description(plan_type: PlanType) -> &'static str {
    match plan_type {
        PlanType::Strength => "strength training",
        PlanType::Cardio => "cardio",
        PlanType::Hiit => "HIIT",
        PlanType::Yoga => "yoga",
        PlanType::Mixed => "mixed training",
    }
}

fn plan_name(user: &User, profile: &Profile, plan_type: PlanType) -> String {
    format!(
        "{}'s {} {} plan",
        user.name,
        level_description(profile.level),
        plan_type_description(plan_type)
    )
}

fn plan_description(user: &User, profile: &Profile, plan_type: PlanType) -> String {
    let mut description = format!(
        "A {} plan tailored to {}. Goal: {}. Suited to {} trainees.",
        plan_type_description(plan_type),
        user.name,
        goal_description(profile.goal),
        level_description(profile.level)
    );
    // Shared catalog rows may describe the timing of another level.
    if plan_type == PlanType::Hiit {
        let protocol = HiitProtocol::for_level(profile.level);
        description.push_str(&format!(
            " Intervals: {} rounds of {} s work and {} s rest.",
            protocol.rounds, protocol.work_seconds, protocol.rest_seconds
        ));
    }
    description
}

fn level_description(level: FitnessLevel) -> String {
    level.name().to_lowercase()
}

fn goal_description(goal: FitnessGoal) -> String {
    goal.name().to_lowercase()
}
