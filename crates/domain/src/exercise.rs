use std::{slice::Iter, sync::Arc};

use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Name, PlanDifficulty, ReadError};

/// Persisted catalog of exercise definitions. Names are unique ignoring case.
pub trait ExerciseRepository: Send + Sync + 'static {
    fn read_exercises(&self) -> Result<Vec<Arc<ExerciseDefinition>>, ReadError>;
    fn find_exercise_by_name(
        &self,
        name: &Name,
    ) -> Result<Option<Arc<ExerciseDefinition>>, ReadError>;
    /// Stores the definition under a fresh ID. Fails with
    /// [`CreateError::Conflict`] if the name is already taken.
    fn create_exercise(
        &self,
        exercise: ExerciseDefinition,
    ) -> Result<Arc<ExerciseDefinition>, CreateError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDefinition {
    pub id: ExerciseID,
    pub name: Name,
    pub description: String,
    pub category: ExerciseCategory,
    pub primary_muscle: MuscleGroup,
    pub secondary_muscles: Vec<MuscleGroup>,
    pub equipment: Equipment,
    pub difficulty: ExerciseDifficulty,
    pub calories_per_minute: f64,
    pub instructions: String,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
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

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExerciseCategory {
    Cardio,
    Strength,
    Flexibility,
    Balance,
}

impl Property for ExerciseCategory {
    fn iter() -> Iter<'static, ExerciseCategory> {
        static CATEGORY: [ExerciseCategory; 4] = [
            ExerciseCategory::Cardio,
            ExerciseCategory::Strength,
            ExerciseCategory::Flexibility,
            ExerciseCategory::Balance,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseCategory::Cardio => "Cardio",
            ExerciseCategory::Strength => "Strength",
            ExerciseCategory::Flexibility => "Flexibility",
            ExerciseCategory::Balance => "Balance",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Core,
    Legs,
    Glutes,
    FullBody,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 8] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Core,
            MuscleGroup::Legs,
            MuscleGroup::Glutes,
            MuscleGroup::FullBody,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::FullBody => "Full body",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    None,
    Dumbbells,
    Barbell,
    ResistanceBands,
    Kettlebell,
    PullUpBar,
    YogaMat,
    Treadmill,
    StationaryBike,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 9] = [
            Equipment::None,
            Equipment::Dumbbells,
            Equipment::Barbell,
            Equipment::ResistanceBands,
            Equipment::Kettlebell,
            Equipment::PullUpBar,
            Equipment::YogaMat,
            Equipment::Treadmill,
            Equipment::StationaryBike,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::None => "None",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Barbell => "Barbell",
            Equipment::ResistanceBands => "Resistance bands",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::PullUpBar => "Pull-up bar",
            Equipment::YogaMat => "Yoga mat",
            Equipment::Treadmill => "Treadmill",
            Equipment::StationaryBike => "Stationary bike",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ExerciseDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<PlanDifficulty> for ExerciseDifficulty {
    fn from(value: PlanDifficulty) -> Self {
        match value {
            PlanDifficulty::Easy => ExerciseDifficulty::Beginner,
            PlanDifficulty::Medium => ExerciseDifficulty::Intermediate,
            PlanDifficulty::Hard | PlanDifficulty::Expert => ExerciseDifficulty::Advanced,
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
