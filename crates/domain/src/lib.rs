#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod strategy;

mod achievement;
mod config;
mod error;
mod exercise;
mod factory;
mod name;
mod optimizer;
mod plan;
mod service;
mod user;

pub use achievement::{
    Achievement, AchievementEngine, AchievementNotifier, CompletedSession, Metric,
    ProgressObserver, ProgressSubject, UnlockedAchievement, UserStats,
};
pub use config::{LevelDefaults, PlannerConfig, SlotDefaults};
pub use error::{
    BoxError, CreateError, GenerationError, InputError, PlanRequestError, ProfileError,
    ReadError, StorageError,
};
pub use exercise::{
    Equipment, ExerciseCategory, ExerciseDefinition, ExerciseDifficulty, ExerciseID,
    ExerciseRepository, MuscleGroup, Property,
};
pub use factory::{PlanFactory, PlanRequest, create_or_get_exercise};
pub use name::{Name, NameError};
pub use optimizer::optimize_plan;
pub use plan::{
    DurationWeeks, PlanDifficulty, PlanExercise, PlanID, PlanRepository, PlanType, RangeError,
    SessionMinutes, SessionsPerWeek, WorkoutPlan, resolve_plan_type,
};
pub use service::{PlanService, ProgressService, Service};
pub use strategy::{Strategy, StrategyRegistry, TrainingStrategy};
pub use user::{BmiBand, FitnessGoal, FitnessLevel, Profile, Sex, User, UserID};
