use rand::{Rng, RngCore};

use crate::{
    ExerciseCategory, ExerciseDefinition, ExerciseID, FitnessGoal, FitnessLevel, MuscleGroup,
    Name, PlanDifficulty, PlanType, Profile, SessionMinutes, WorkoutPlan,
    catalog::{CARDIO_EXERCISES, CardioTemplate, Impact, WARM_UP_CARDIO},
    strategy::Strategy,
};

const HIGH_INTENSITY_CALORIES: f64 = 15.0;
const COOL_DOWN_CALORIES: f64 = 8.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CardioStrategy;

impl Strategy for CardioStrategy {
    fn plan_type(&self) -> PlanType {
        PlanType::Cardio
    }

    /// The first slot warms up and the last one cools down. Slots in between
    /// are drawn at random. No template is used twice.
    fn generate_exercises(
        &self,
        profile: &Profile,
        plan: &WorkoutPlan,
        rng: &mut dyn RngCore,
    ) -> Vec<ExerciseDefinition> {
        let mut remaining = CARDIO_EXERCISES
            .iter()
            .filter(|e| is_suitable(e, profile))
            .collect::<Vec<_>>();
        let count = exercise_count(profile.level, plan.session_minutes);
        let mut selected = Vec::with_capacity(count);

        for slot in 0..count {
            if remaining.is_empty() {
                break;
            }
            let index = if slot == 0 {
                remaining
                    .iter()
                    .position(|e| WARM_UP_CARDIO.contains(&e.name))
                    .unwrap_or(0)
            } else if slot == count - 1 {
                remaining
                    .iter()
                    .position(|e| e.calories_per_minute < COOL_DOWN_CALORIES)
                    .unwrap_or(remaining.len() - 1)
            } else {
                rng.gen_range(0..remaining.len())
            };
            selected.push(remaining.remove(index));
        }

        selected
            .into_iter()
            .map(|template| definition(template, plan.difficulty))
            .collect()
    }

    fn calculate_intensity(&self, profile: &Profile, _plan: &WorkoutPlan) -> f64 {
        let mut intensity: f64 = match profile.goal {
            FitnessGoal::WeightLoss => 1.2,
            FitnessGoal::Endurance => 1.1,
            _ => 1.0,
        };

        intensity *= match profile.level {
            FitnessLevel::Beginner => 0.7,
            FitnessLevel::Intermediate => 0.85,
            FitnessLevel::Advanced => 1.0,
        };

        if profile.bmi() > 30.0 {
            intensity *= 0.8;
        }

        if profile.is_older_than(50) {
            intensity *= 0.85;
        }

        intensity.clamp(0.5, 1.5)
    }
}

fn exercise_count(level: FitnessLevel, session_minutes: SessionMinutes) -> usize {
    let minutes = u32::from(session_minutes);
    let count = match level {
        FitnessLevel::Beginner => (minutes / 12).clamp(3, 5),
        FitnessLevel::Intermediate | FitnessLevel::Advanced => (minutes / 10).clamp(4, 6),
    };
    count as usize
}

fn is_suitable(template: &CardioTemplate, profile: &Profile) -> bool {
    if profile.level == FitnessLevel::Beginner
        && template.calories_per_minute >= HIGH_INTENSITY_CALORIES
    {
        return false;
    }

    if profile.is_older_than(55) && template.impact == Impact::High {
        return false;
    }

    if profile.bmi() > 30.0 && template.impact != Impact::Low {
        return false;
    }

    true
}

fn definition(template: &CardioTemplate, difficulty: PlanDifficulty) -> ExerciseDefinition {
    ExerciseDefinition {
        id: ExerciseID::nil(),
        name: Name::from_static(template.name),
        description: template.description.to_string(),
        category: ExerciseCategory::Cardio,
        primary_muscle: MuscleGroup::FullBody,
        secondary_muscles: vec![],
        equipment: template.equipment,
        difficulty: difficulty.into(),
        calories_per_minute: template.calories_per_minute,
        instructions: template.instructions.to_string(),
    }
}
