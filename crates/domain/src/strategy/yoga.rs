use rand::RngCore;

use crate::{
    Equipment, ExerciseCategory, ExerciseDefinition, ExerciseDifficulty, ExerciseID,
    FitnessLevel, MuscleGroup, Name, PlanType, Profile, WorkoutPlan,
    catalog::{Pose, yoga_sequence},
    strategy::Strategy,
};

const CALORIES_PER_MINUTE: f64 = 2.5;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct YogaStrategy;

impl Strategy for YogaStrategy {
    fn plan_type(&self) -> PlanType {
        PlanType::Yoga
    }

    fn generate_exercises(
        &self,
        profile: &Profile,
        _plan: &WorkoutPlan,
        _rng: &mut dyn RngCore,
    ) -> Vec<ExerciseDefinition> {
        yoga_sequence(profile.level)
            .iter()
            .map(definition)
            .collect()
    }

    fn calculate_intensity(&self, profile: &Profile, _plan: &WorkoutPlan) -> f64 {
        let intensity: f64 = match profile.level {
            FitnessLevel::Beginner => 0.4,
            FitnessLevel::Intermediate => 0.6,
            FitnessLevel::Advanced => 0.8,
        };
        intensity.clamp(0.1, 2.0)
    }
}

fn definition(pose: &Pose) -> ExerciseDefinition {
    ExerciseDefinition {
        id: ExerciseID::nil(),
        name: Name::from_static(pose.name),
        description: pose.description.to_string(),
        category: ExerciseCategory::Flexibility,
        primary_muscle: MuscleGroup::FullBody,
        secondary_muscles: vec![],
        equipment: Equipment::YogaMat,
        difficulty: ExerciseDifficulty::Beginner,
        calories_per_minute: CALORIES_PER_MINUTE,
        instructions: format!(
            "Hold for {} min. Breathe deeply and stay present.",
            pose.hold_minutes
        ),
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        FitnessGoal,
        strategy::tests::{names, plan, profile, rng},
    };

    #[rstest]
    #[case(FitnessLevel::Beginner, "Mountain Pose", "Hold for 5 min. Breathe deeply and stay present.")]
    #[case(FitnessLevel::Intermediate, "Sun Salutation A", "Hold for 8 min. Breathe deeply and stay present.")]
    #[case(FitnessLevel::Advanced, "Sun Salutation B", "Hold for 10 min. Breathe deeply and stay present.")]
    fn test_generate_exercises(
        #[case] level: FitnessLevel,
        #[case] first: &str,
        #[case] last_instructions: &str,
    ) {
        let profile = profile(level, FitnessGoal::GeneralFitness);
        let exercises =
            YogaStrategy.generate_exercises(&profile, &plan(&profile, PlanType::Yoga), &mut rng());

        assert_eq!(exercises.len(), 9);
        assert_eq!(names(&exercises)[0], first);
        assert_eq!(names(&exercises)[8], "Corpse Pose");
        assert_eq!(exercises[8].instructions, last_instructions);
        assert!(exercises
            .iter()
            .all(|e| e.category == ExerciseCategory::Flexibility));
    }

    #[test]
    fn test_generate_exercises_is_not_randomized() {
        let profile = profile(FitnessLevel::Intermediate, FitnessGoal::GeneralFitness);
        let plan = plan(&profile, PlanType::Yoga);
        let mut first_rng = rng();
        let mut other_rng = rand::rngs::mock::StepRng::new(0, 1);
        assert_eq!(
            names(&YogaStrategy.generate_exercises(&profile, &plan, &mut first_rng)),
            names(&YogaStrategy.generate_exercises(&profile, &plan, &mut other_rng))
        );
    }

    #[rstest]
    #[case(FitnessLevel::Beginner, 0.4)]
    #[case(FitnessLevel::Intermediate, 0.6)]
    #[case(FitnessLevel::Advanced, 0.8)]
    fn test_calculate_intensity(#[case] level: FitnessLevel, #[case] expected: f64) {
        let profile = Profile {
            age: Some(120),
            ..profile(level, FitnessGoal::GeneralFitness)
        };
        assert_approx_eq!(
            YogaStrategy.calculate_intensity(&profile, &plan(&profile, PlanType::Yoga)),
            expected
        );
    }
}
