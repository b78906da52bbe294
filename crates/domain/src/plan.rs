use std::{fmt, sync::Arc};

use derive_more::{Deref, Display, Into};
use log::debug;
use uuid::Uuid;

use crate::{
    CreateError, ExerciseDefinition, FitnessGoal, FitnessLevel, ReadError, UserID,
};

pub trait PlanRepository: Send + Sync + 'static {
    fn read_plans(&self, user_id: UserID) -> Result<Vec<WorkoutPlan>, ReadError>;
    fn save_plan(&self, plan: WorkoutPlan) -> Result<WorkoutPlan, CreateError>;
    /// Saves all plans or none of them.
    fn save_plans(&self, plans: Vec<WorkoutPlan>) -> Result<Vec<WorkoutPlan>, CreateError>;
}

#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum PlanType {
    Strength,
    Cardio,
    Hiit,
    Yoga,
    Mixed,
}

/// Determines the plan type for a user.
///
/// An explicit request wins. It is matched ignoring case and surrounding
/// whitespace, and anything unrecognized becomes a mixed plan. Without a
/// request, the type follows from the fitness goal.
#[must_use]
pub fn resolve_plan_type(
    requested: Option<&str>,
    level: FitnessLevel,
    goal: FitnessGoal,
) -> PlanType {
    if let Some(requested) = requested {
        return requested.trim().parse().unwrap_or_else(|_| {
            debug!("unknown plan type \"{requested}\", using {}", PlanType::Mixed);
            PlanType::Mixed
        });
    }

    match goal {
        FitnessGoal::WeightLoss => {
            if level == FitnessLevel::Beginner {
                PlanType::Cardio
            } else {
                PlanType::Hiit
            }
        }
        FitnessGoal::MuscleGain | FitnessGoal::Strength => PlanType::Strength,
        FitnessGoal::Endurance => PlanType::Cardio,
        FitnessGoal::GeneralFitness => PlanType::Mixed,
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlanDifficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<FitnessLevel> for PlanDifficulty {
    fn from(value: FitnessLevel) -> Self {
        match value {
            FitnessLevel::Beginner => PlanDifficulty::Easy,
            FitnessLevel::Intermediate => PlanDifficulty::Medium,
            FitnessLevel::Advanced => PlanDifficulty::Expert,
        }
    }
}

impl fmt::Display for PlanDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PlanDifficulty::Easy => "easy",
                PlanDifficulty::Medium => "medium",
                PlanDifficulty::Hard => "hard",
                PlanDifficulty::Expert => "expert",
            }
        )
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("{value} is not in the range {min} to {max}")]
    OutOfRange { value: u32, min: u32, max: u32 },
}

fn check_range(value: u32, min: u32, max: u32) -> Result<u32, RangeError> {
    if !(min..=max).contains(&value) {
        return Err(RangeError::OutOfRange { value, min, max });
    }
    Ok(value)
}

#[derive(Debug, Display, Clone, Copy, Into, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DurationWeeks(u32);

impl DurationWeeks {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 52;

    pub fn new(value: u32) -> Result<Self, RangeError> {
        Ok(Self(check_range(value, Self::MIN, Self::MAX)?))
    }

    #[must_use]
    pub fn default_for(level: FitnessLevel) -> Self {
        match level {
            FitnessLevel::Beginner => Self(8),
            FitnessLevel::Intermediate => Self(12),
            FitnessLevel::Advanced => Self(16),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, Into, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionsPerWeek(u32);

impl SessionsPerWeek {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 7;

    pub fn new(value: u32) -> Result<Self, RangeError> {
        Ok(Self(check_range(value, Self::MIN, Self::MAX)?))
    }

    #[must_use]
    pub fn default_for(level: FitnessLevel) -> Self {
        match level {
            FitnessLevel::Beginner => Self(3),
            FitnessLevel::Intermediate => Self(4),
            FitnessLevel::Advanced => Self(5),
        }
    }

    /// Lowers the value to `limit` if it is above. Never raises it.
    #[must_use]
    pub fn at_most(self, limit: u32) -> Self {
        Self(self.0.min(limit.max(Self::MIN)))
    }
}

#[derive(Debug, Display, Clone, Copy, Into, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionMinutes(u32);

impl SessionMinutes {
    pub const MIN: u32 = 15;
    pub const MAX: u32 = 180;

    pub fn new(value: u32) -> Result<Self, RangeError> {
        Ok(Self(check_range(value, Self::MIN, Self::MAX)?))
    }

    #[must_use]
    pub fn default_for(level: FitnessLevel) -> Self {
        match level {
            FitnessLevel::Beginner => Self(45),
            FitnessLevel::Intermediate => Self(60),
            FitnessLevel::Advanced => Self(75),
        }
    }

    /// Lowers the value to `limit` if it is above. Never raises it.
    #[must_use]
    pub fn at_most(self, limit: u32) -> Self {
        Self(self.0.min(limit.max(Self::MIN)))
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanID(Uuid);

impl PlanID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPlan {
    pub id: PlanID,
    pub user_id: UserID,
    pub name: String,
    pub description: String,
    pub plan_type: PlanType,
    pub difficulty: PlanDifficulty,
    pub duration_weeks: DurationWeeks,
    pub sessions_per_week: SessionsPerWeek,
    pub session_minutes: SessionMinutes,
    pub target_goal: FitnessGoal,
    /// Informational only. Sets, reps and durations do not depend on it.
    pub intensity: f64,
    pub exercises: Vec<PlanExercise>,
}

impl WorkoutPlan {
    #[must_use]
    pub fn estimated_session_calories(&self) -> f64 {
        self.exercises
            .iter()
            .map(PlanExercise::estimated_calories)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanExercise {
    pub position: u32,
    pub exercise: Arc<ExerciseDefinition>,
    pub sets: u32,
    pub reps: u32,
    pub duration_seconds: u32,
    pub rest_seconds: u32,
}

impl PlanExercise {
    #[must_use]
    pub fn estimated_calories(&self) -> f64 {
        self.exercise.calories_per_minute
            * f64::from(self.duration_seconds)
            / 60.0
            * f64::from(self.sets)
    }
}
