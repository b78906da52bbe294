use rand::RngCore;

use crate::{
    Equipment, ExerciseCategory, ExerciseDefinition, ExerciseDifficulty, ExerciseID,
    FitnessGoal, FitnessLevel, MuscleGroup, Name, PlanType, Profile, WorkoutPlan,
    catalog::{HIIT_COOL_DOWN, HIIT_EXERCISES, HIIT_REST, HIIT_WARM_UP, HiitBlock},
    strategy::Strategy,
};

const CALORIES_PER_MINUTE: f64 = 8.0;
const INSTRUCTIONS: &str = "Keep good form and control your breathing.";

/// Interval timing of a HIIT session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiitProtocol {
    pub work_seconds: u32,
    pub rest_seconds: u32,
    pub rounds: u32,
}

impl HiitProtocol {
    #[must_use]
    pub fn for_level(level: FitnessLevel) -> Self {
        match level {
            FitnessLevel::Beginner => Self {
                work_seconds: 20,
                rest_seconds: 40,
                rounds: 4,
            },
            FitnessLevel::Intermediate => Self {
                work_seconds: 30,
                rest_seconds: 30,
                rounds: 6,
            },
            FitnessLevel::Advanced => Self {
                work_seconds: 40,
                rest_seconds: 20,
                rounds: 8,
            },
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HiitStrategy;

impl Strategy for HiitStrategy {
    fn plan_type(&self) -> PlanType {
        PlanType::Hiit
    }

    /// Warm-up, then every round works through all interval exercises with a
    /// rest after each one, then cool-down. The final round ends without rest.
    fn generate_exercises(
        &self,
        profile: &Profile,
        _plan: &WorkoutPlan,
        _rng: &mut dyn RngCore,
    ) -> Vec<ExerciseDefinition> {
        let protocol = HiitProtocol::for_level(profile.level);
        let mut exercises = HIIT_WARM_UP.iter().map(timed_block).collect::<Vec<_>>();

        for round in 1..=protocol.rounds {
            for (i, name) in HIIT_EXERCISES.iter().enumerate() {
                exercises.push(definition(
                    name,
                    format!("High intensity for {} s", protocol.work_seconds),
                ));
                let last_block = round == protocol.rounds && i == HIIT_EXERCISES.len() - 1;
                if !last_block {
                    exercises.push(definition(
                        HIIT_REST,
                        format!("Active recovery for {} s", protocol.rest_seconds),
                    ));
                }
            }
        }

        exercises.extend(HIIT_COOL_DOWN.iter().map(timed_block));
        exercises
    }

    fn is_applicable(&self, profile: &Profile) -> bool {
        profile.level != FitnessLevel::Beginner
            && !profile.is_older_than(60)
            && matches!(
                profile.goal,
                FitnessGoal::WeightLoss | FitnessGoal::Endurance | FitnessGoal::GeneralFitness
            )
    }

    fn calculate_intensity(&self, profile: &Profile, _plan: &WorkoutPlan) -> f64 {
        let mut intensity: f64 = match profile.level {
            FitnessLevel::Beginner => 1.2,
            FitnessLevel::Intermediate => 1.3,
            FitnessLevel::Advanced => 1.6,
        };

        if profile.is_older_than(50) {
            intensity *= 0.8;
        } else if profile.is_younger_than(25) {
            intensity *= 1.1;
        }

        intensity.clamp(0.1, 2.0)
    }
}

fn timed_block(block: &HiitBlock) -> ExerciseDefinition {
    definition(block.name, format!("{} for {} s", block.description, block.seconds))
}

fn definition(name: &'static str, description: String) -> ExerciseDefinition {
    ExerciseDefinition {
        id: ExerciseID::nil(),
        name: Name::from_static(name),
        description,
        category: ExerciseCategory::Cardio,
        primary_muscle: MuscleGroup::FullBody,
        secondary_muscles: vec![],
        equipment: Equipment::None,
        difficulty: ExerciseDifficulty::Intermediate,
        calories_per_minute: CALORIES_PER_MINUTE,
        instructions: INSTRUCTIONS.to_string(),
    }
}
