use log::debug;
use rand::{RngCore, seq::SliceRandom};

use crate::{
    BmiBand, ExerciseCategory, ExerciseDefinition, ExerciseID, FitnessLevel, MuscleGroup, Name,
    PlanDifficulty, PlanType, Profile, Property, SessionMinutes, WorkoutPlan,
    catalog::{STRENGTH_EXERCISES, StrengthTemplate},
    strategy::Strategy,
};

const MUSCLE_PRIORITY: [MuscleGroup; 8] = [
    MuscleGroup::Legs,
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Core,
    MuscleGroup::Arms,
    MuscleGroup::Arms,
    MuscleGroup::Glutes,
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StrengthStrategy;

impl Strategy for StrengthStrategy {
    fn plan_type(&self) -> PlanType {
        PlanType::Strength
    }

    fn generate_exercises(
        &self,
        profile: &Profile,
        plan: &WorkoutPlan,
        rng: &mut dyn RngCore,
    ) -> Vec<ExerciseDefinition> {
        MUSCLE_PRIORITY
            .iter()
            .take(exercise_count(plan.session_minutes))
            .filter_map(|muscle| {
                let template = select_template(*muscle, profile, rng);
                if template.is_none() {
                    debug!("no {} exercise available", muscle.name().to_lowercase());
                }
                template
            })
            .map(|template| definition(template, plan.difficulty))
            .collect()
    }

    fn calculate_intensity(&self, profile: &Profile, _plan: &WorkoutPlan) -> f64 {
        let mut intensity: f64 = match profile.level {
            FitnessLevel::Beginner => 0.6,
            FitnessLevel::Intermediate => 0.8,
            FitnessLevel::Advanced => 1.0,
        };

        if profile.is_older_than(50) {
            intensity *= 0.8;
        } else if profile.is_younger_than(25) {
            intensity *= 1.1;
        }

        if profile.bmi() > 30.0 {
            intensity *= 0.7;
        } else if profile.bmi_band() == BmiBand::Underweight {
            intensity *= 0.9;
        }

        intensity.clamp(0.3, 1.5)
    }
}

fn exercise_count(session_minutes: SessionMinutes) -> usize {
    (u32::from(session_minutes) / 8).clamp(4, 12) as usize
}

/// Picks a random template for the muscle group among those the user has the
/// equipment for. Bodyweight templates always qualify, so a group without
/// usable equipment falls back to them.
fn select_template(
    muscle: MuscleGroup,
    profile: &Profile,
    rng: &mut dyn RngCore,
) -> Option<&'static StrengthTemplate> {
    let candidates = STRENGTH_EXERCISES
        .iter()
        .filter(|e| e.muscle == muscle && profile.has_equipment(e.equipment))
        .collect::<Vec<_>>();
    candidates.choose(rng).copied()
}

fn definition(template: &StrengthTemplate, difficulty: PlanDifficulty) -> ExerciseDefinition {
    ExerciseDefinition {
        id: ExerciseID::nil(),
        name: Name::from_static(template.name),
        description: template.description.to_string(),
        category: ExerciseCategory::Strength,
        primary_muscle: template.muscle,
        secondary_muscles: template.secondary_muscles.to_vec(),
        equipment: template.equipment,
        difficulty: difficulty.into(),
        calories_per_minute: template.calories_per_minute,
        instructions: template.instructions.to_string(),
    }
}
