use std::collections::BTreeMap;

use rand::RngCore;

use crate::{ExerciseDefinition, PlanType, Profile, WorkoutPlan};

mod cardio;
mod hiit;
mod mixed;
mod strength;
mod yoga;

pub use cardio::CardioStrategy;
pub use hiit::{HiitProtocol, HiitStrategy};
pub use mixed::{MixedStrategy, MixedWeights};
pub use strength::StrengthStrategy;
pub use yoga::YogaStrategy;

/// One training modality: how its exercises are chosen and how hard it is.
pub trait Strategy {
    fn plan_type(&self) -> PlanType;

    /// Ordered exercises for a session of `plan`. Slots without a suitable
    /// template are left out, so the result may be shorter than targeted.
    fn generate_exercises(
        &self,
        profile: &Profile,
        plan: &WorkoutPlan,
        rng: &mut dyn RngCore,
    ) -> Vec<ExerciseDefinition>;

    fn is_applicable(&self, _profile: &Profile) -> bool {
        true
    }

    fn calculate_intensity(&self, profile: &Profile, plan: &WorkoutPlan) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub enum TrainingStrategy {
    Strength(StrengthStrategy),
    Cardio(CardioStrategy),
    Hiit(HiitStrategy),
    Yoga(YogaStrategy),
    Mixed(MixedStrategy),
}

impl TrainingStrategy {
    #[must_use]
    pub fn for_plan_type(plan_type: PlanType) -> Self {
        match plan_type {
            PlanType::Strength => TrainingStrategy::Strength(StrengthStrategy),
            PlanType::Cardio => TrainingStrategy::Cardio(CardioStrategy),
            PlanType::Hiit => TrainingStrategy::Hiit(HiitStrategy),
            PlanType::Yoga => TrainingStrategy::Yoga(YogaStrategy),
            PlanType::Mixed => TrainingStrategy::Mixed(MixedStrategy::default()),
        }
    }

    fn inner(&self) -> &dyn Strategy {
        match self {
            TrainingStrategy::Strength(s) => s,
            TrainingStrategy::Cardio(s) => s,
            TrainingStrategy::Hiit(s) => s,
            TrainingStrategy::Yoga(s) => s,
            TrainingStrategy::Mixed(s) => s,
        }
    }
}

impl Strategy for TrainingStrategy {
    fn plan_type(&self) -> PlanType {
        self.inner().plan_type()
    }

    fn generate_exercises(
        &self,
        profile: &Profile,
        plan: &WorkoutPlan,
        rng: &mut dyn RngCore,
    ) -> Vec<ExerciseDefinition> {
        self.inner().generate_exercises(profile, plan, rng)
    }

    fn is_applicable(&self, profile: &Profile) -> bool {
        self.inner().is_applicable(profile)
    }

    fn calculate_intensity(&self, profile: &Profile, plan: &WorkoutPlan) -> f64 {
        self.inner().calculate_intensity(profile, plan)
    }
}

/// Strategies keyed by the plan type they generate.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: BTreeMap<PlanType, TrainingStrategy>,
}

impl StrategyRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            strategies: BTreeMap::new(),
        }
    }

    /// Returns the strategy previously registered for the same plan type.
    pub fn register(&mut self, strategy: TrainingStrategy) -> Option<TrainingStrategy> {
        self.strategies.insert(strategy.plan_type(), strategy)
    }

    #[must_use]
    pub fn get(&self, plan_type: PlanType) -> Option<&TrainingStrategy> {
        self.strategies.get(&plan_type)
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for plan_type in [
            PlanType::Strength,
            PlanType::Cardio,
            PlanType::Hiit,
            PlanType::Yoga,
            PlanType::Mixed,
        ] {
            registry.register(TrainingStrategy::for_plan_type(plan_type));
        }
        registry
    }
}
