use rand::RngCore;

use crate::{
    ExerciseDefinition, FitnessGoal, PlanType, Profile, WorkoutPlan,
    strategy::{CardioStrategy, Strategy, StrengthStrategy, YogaStrategy},
};

/// Share of each modality in a mixed plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixedWeights {
    pub strength: f64,
    pub cardio: f64,
    pub yoga: f64,
}

impl MixedWeights {
    #[must_use]
    pub fn for_goal(goal: FitnessGoal) -> Self {
        match goal {
            FitnessGoal::WeightLoss => Self {
                strength: 0.4,
                cardio: 0.4,
                yoga: 0.2,
            },
            FitnessGoal::MuscleGain => Self {
                strength: 0.6,
                cardio: 0.2,
                yoga: 0.2,
            },
            FitnessGoal::Endurance => Self {
                strength: 0.3,
                cardio: 0.5,
                yoga: 0.2,
            },
            FitnessGoal::Strength | FitnessGoal::GeneralFitness => Self {
                strength: 0.35,
                cardio: 0.35,
                yoga: 0.3,
            },
        }
    }
}

/// Blends strength, cardio and yoga. HIIT is never part of a mixed plan.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MixedStrategy {
    strength: StrengthStrategy,
    cardio: CardioStrategy,
    yoga: YogaStrategy,
}

impl Strategy for MixedStrategy {
    fn plan_type(&self) -> PlanType {
        PlanType::Mixed
    }

    fn generate_exercises(
        &self,
        profile: &Profile,
        plan: &WorkoutPlan,
        rng: &mut dyn RngCore,
    ) -> Vec<ExerciseDefinition> {
        let weights = MixedWeights::for_goal(profile.goal);
        let mut strength = self.strength.generate_exercises(profile, plan, rng);
        let mut cardio = self.cardio.generate_exercises(profile, plan, rng);
        let mut yoga = self.yoga.generate_exercises(profile, plan, rng);

        strength.truncate(share(strength.len(), weights.strength));
        cardio.truncate(share(cardio.len(), weights.cardio));
        yoga.truncate(share(yoga.len(), weights.yoga));

        strength.into_iter().chain(cardio).chain(yoga).collect()
    }

    fn calculate_intensity(&self, profile: &Profile, plan: &WorkoutPlan) -> f64 {
        let weights = MixedWeights::for_goal(profile.goal);
        let intensity = weights.strength * self.strength.calculate_intensity(profile, plan)
            + weights.cardio * self.cardio.calculate_intensity(profile, plan)
            + weights.yoga * self.yoga.calculate_intensity(profile, plan);
        intensity.clamp(0.1, 2.0)
    }
}

/// Number of leading exercises kept from a list of `len`. A non-empty list
/// always keeps at least one.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn share(len: usize, weight: f64) -> usize {
    if len == 0 {
        return 0;
    }
    ((len as f64 * weight).round() as usize).clamp(1, len)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        ExerciseCategory, FitnessLevel,
        strategy::tests::{names, plan, profile, rng},
    };

    #[rstest]
    #[case(0, 0.4, 0)]
    #[case(1, 0.2, 1)]
    #[case(9, 0.2, 2)]
    #[case(9, 0.3, 3)]
    #[case(5, 0.5, 3)]
    #[case(8, 0.35, 3)]
    #[case(4, 1.5, 4)]
    fn test_share(#[case] len: usize, #[case] weight: f64, #[case] expected: usize) {
        assert_eq!(share(len, weight), expected);
    }

    #[test]
    fn test_mixed_weights_sum_to_one() {
        for goal in [
            FitnessGoal::WeightLoss,
            FitnessGoal::MuscleGain,
            FitnessGoal::Endurance,
            FitnessGoal::Strength,
            FitnessGoal::GeneralFitness,
        ] {
            let weights = MixedWeights::for_goal(goal);
            assert_approx_eq!(weights.strength + weights.cardio + weights.yoga, 1.0);
        }
    }

    #[test]
    fn test_generate_exercises_order_and_sizes() {
        let profile = profile(FitnessLevel::Advanced, FitnessGoal::GeneralFitness);
        let plan = plan(&profile, PlanType::Mixed);
        let exercises = MixedStrategy::default().generate_exercises(&profile, &plan, &mut rng());

        // 8 strength, 6 cardio and 9 yoga exercises before blending.
        let categories = exercises.iter().map(|e| e.category).collect::<Vec<_>>();
        assert_eq!(
            categories,
            [
                vec![ExerciseCategory::Strength; 3],
                vec![ExerciseCategory::Cardio; 2],
                vec![ExerciseCategory::Flexibility; 3],
            ]
            .concat()
        );
        assert_eq!(
            &names(&exercises)[5..],
            ["Sun Salutation B", "Warrior III", "Dancer Pose"]
        );
    }

    #[test]
    fn test_generate_exercises_excludes_hiit() {
        let profile = profile(FitnessLevel::Intermediate, FitnessGoal::WeightLoss);
        let plan = plan(&profile, PlanType::Mixed);
        let names = names(&MixedStrategy::default().generate_exercises(&profile, &plan, &mut rng()));

        assert!(!names.iter().any(|n| n == "Rest" || n == "Squat Jumps"));
    }

    #[test]
    fn test_calculate_intensity() {
        let profile = profile(FitnessLevel::Advanced, FitnessGoal::Endurance);
        let plan = plan(&profile, PlanType::Mixed);
        // strength 1.0, cardio 1.1, yoga 0.8
        assert_approx_eq!(
            MixedStrategy::default().calculate_intensity(&profile, &plan),
            0.3 * 1.0 + 0.5 * 1.1 + 0.2 * 0.8
        );
    }
}
