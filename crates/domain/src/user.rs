use std::{collections::BTreeSet, fmt, slice::Iter};

use derive_more::Deref;
use uuid::Uuid;

use crate::{Equipment, Name, ProfileError, Property};

const MAX_AGE: u32 = 150;

/// Snapshot of a user as delivered by the external profile store.
///
/// Every physiological attribute may be missing. A [`Profile`] is derived from
/// it before anything is generated.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserID,
    pub name: Name,
    pub sex: Sex,
    pub age: Option<u32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_level: Option<FitnessLevel>,
    pub fitness_goal: Option<FitnessGoal>,
    pub available_equipment: Option<BTreeSet<Equipment>>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserID(Uuid);

impl UserID {
    #[must_use]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for UserID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for UserID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    FEMALE,
    MALE,
}

impl From<u8> for Sex {
    fn from(value: u8) -> Self {
        match value {
            0 => Sex::FEMALE,
            _ => Sex::MALE,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Sex::FEMALE => "female",
                Sex::MALE => "male",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for FitnessLevel {
    fn iter() -> Iter<'static, FitnessLevel> {
        static LEVELS: [FitnessLevel; 3] = [
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Endurance,
    Strength,
    GeneralFitness,
}

impl Property for FitnessGoal {
    fn iter() -> Iter<'static, FitnessGoal> {
        static GOALS: [FitnessGoal; 5] = [
            FitnessGoal::WeightLoss,
            FitnessGoal::MuscleGain,
            FitnessGoal::Endurance,
            FitnessGoal::Strength,
            FitnessGoal::GeneralFitness,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight loss",
            FitnessGoal::MuscleGain => "Muscle gain",
            FitnessGoal::Endurance => "Endurance",
            FitnessGoal::Strength => "Strength",
            FitnessGoal::GeneralFitness => "General fitness",
        }
    }
}

/// Validated view of a [`User`] with every attribute generation depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: UserID,
    pub age: Option<u32>,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub level: FitnessLevel,
    pub goal: FitnessGoal,
    pub available_equipment: Option<BTreeSet<Equipment>>,
}

impl Profile {
    #[must_use]
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }

    #[must_use]
    pub fn bmi_band(&self) -> BmiBand {
        BmiBand::from(self.bmi())
    }

    /// An unknown age never satisfies an age rule.
    #[must_use]
    pub fn is_older_than(&self, years: u32) -> bool {
        self.age.is_some_and(|age| age > years)
    }

    #[must_use]
    pub fn is_younger_than(&self, years: u32) -> bool {
        self.age.is_some_and(|age| age < years)
    }

    /// Bodyweight exercises are always possible. Without a declared set,
    /// beginners are assumed to own dumbbells only and everyone else a full gym.
    #[must_use]
    pub fn has_equipment(&self, equipment: Equipment) -> bool {
        if equipment == Equipment::None {
            return true;
        }

        match &self.available_equipment {
            Some(available) => available.contains(&equipment),
            None => self.level != FitnessLevel::Beginner || equipment == Equipment::Dumbbells,
        }
    }
}

impl TryFrom<&User> for Profile {
    type Error = ProfileError;

    fn try_from(user: &User) -> Result<Self, Self::Error> {
        let level = user
            .fitness_level
            .ok_or(ProfileError::Missing("fitness level"))?;
        let goal = user
            .fitness_goal
            .ok_or(ProfileError::Missing("fitness goal"))?;
        let height_cm = positive(user.height_cm, "height")?;
        let weight_kg = positive(user.weight_kg, "weight")?;

        if user.age.is_some_and(|age| age > MAX_AGE) {
            return Err(ProfileError::Invalid("age"));
        }

        Ok(Self {
            user_id: user.id,
            age: user.age,
            height_cm,
            weight_kg,
            level,
            goal,
            available_equipment: user.available_equipment.clone(),
        })
    }
}

fn positive(value: Option<f64>, attribute: &'static str) -> Result<f64, ProfileError> {
    match value {
        None => Err(ProfileError::Missing(attribute)),
        Some(value) if value.is_finite() && value > 0.0 => Ok(value),
        Some(_) => Err(ProfileError::Invalid(attribute)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiBand {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl From<f64> for BmiBand {
    fn from(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiBand::Underweight
        } else if bmi < 24.0 {
            BmiBand::Normal
        } else if bmi < 28.0 {
            BmiBand::Overweight
        } else {
            BmiBand::Obese
        }
    }
}
