use rand::{SeedableRng, rngs::StdRng};

use crate::{
    DurationWeeks, FitnessLevel, PlanRequestError, SessionMinutes, SessionsPerWeek,
};

/// Plan parameters used when a request does not override them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelDefaults {
    pub duration_weeks: DurationWeeks,
    pub sessions_per_week: SessionsPerWeek,
    pub session_minutes: SessionMinutes,
}

impl LevelDefaults {
    pub fn new(
        duration_weeks: u32,
        sessions_per_week: u32,
        session_minutes: u32,
    ) -> Result<Self, PlanRequestError> {
        Ok(Self {
            duration_weeks: DurationWeeks::new(duration_weeks)
                .map_err(PlanRequestError::DurationWeeks)?,
            sessions_per_week: SessionsPerWeek::new(sessions_per_week)
                .map_err(PlanRequestError::SessionsPerWeek)?,
            session_minutes: SessionMinutes::new(session_minutes)
                .map_err(PlanRequestError::SessionMinutes)?,
        })
    }

    #[must_use]
    pub fn for_level(level: FitnessLevel) -> Self {
        Self {
            duration_weeks: DurationWeeks::default_for(level),
            sessions_per_week: SessionsPerWeek::default_for(level),
            session_minutes: SessionMinutes::default_for(level),
        }
    }
}

/// Values every slot of a generated plan starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDefaults {
    pub sets: u32,
    pub reps: u32,
    pub duration_seconds: u32,
    pub rest_seconds: u32,
}

impl Default for SlotDefaults {
    fn default() -> Self {
        Self {
            sets: 3,
            reps: 12,
            duration_seconds: 60,
            rest_seconds: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub beginner: LevelDefaults,
    pub intermediate: LevelDefaults,
    pub advanced: LevelDefaults,
    pub slot: SlotDefaults,
    /// Makes every generated plan reproducible when set.
    pub random_seed: Option<u64>,
}

impl PlannerConfig {
    #[must_use]
    pub fn level_defaults(&self, level: FitnessLevel) -> &LevelDefaults {
        match level {
            FitnessLevel::Beginner => &self.beginner,
            FitnessLevel::Intermediate => &self.intermediate,
            FitnessLevel::Advanced => &self.advanced,
        }
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            beginner: LevelDefaults::for_level(FitnessLevel::Beginner),
            intermediate: LevelDefaults::for_level(FitnessLevel::Intermediate),
            advanced: LevelDefaults::for_level(FitnessLevel::Advanced),
            slot: SlotDefaults::default(),
            random_seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::RngCore;
    use rstest::rstest;

    use super::*;
    use crate::RangeError;

    #[rstest]
    #[case(FitnessLevel::Beginner, (8, 3, 45))]
    #[case(FitnessLevel::Intermediate, (12, 4, 60))]
    #[case(FitnessLevel::Advanced, (16, 5, 75))]
    fn test_planner_config_default_level_defaults(
        #[case] level: FitnessLevel,
        #[case] expected: (u32, u32, u32),
    ) {
        let config = PlannerConfig::default();
        let defaults = config.level_defaults(level);
        assert_eq!(
            (
                u32::from(defaults.duration_weeks),
                u32::from(defaults.sessions_per_week),
                u32::from(defaults.session_minutes)
            ),
            expected
        );
    }

    #[test]
    fn test_level_defaults_new() {
        assert_eq!(
            LevelDefaults::new(8, 3, 45),
            Ok(LevelDefaults::for_level(FitnessLevel::Beginner))
        );
        assert_eq!(
            LevelDefaults::new(8, 9, 45),
            Err(PlanRequestError::SessionsPerWeek(RangeError::OutOfRange {
                value: 9,
                min: 1,
                max: 7
            }))
        );
    }

    #[test]
    fn test_slot_defaults_default() {
        assert_eq!(
            SlotDefaults::default(),
            SlotDefaults {
                sets: 3,
                reps: 12,
                duration_seconds: 60,
                rest_seconds: 60
            }
        );
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = PlannerConfig {
            random_seed: Some(42),
            ..PlannerConfig::default()
        };
        assert_eq!(config.rng().next_u64(), config.rng().next_u64());
    }
}
