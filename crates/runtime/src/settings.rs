use anyhow::{Context, ensure};
use fitplan_domain::{LevelDefaults, PlannerConfig, SlotDefaults};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub trait SettingsRepository: Send + Sync + 'static {
    /// Returns the default settings if none have been stored yet.
    fn read_settings(&self) -> anyhow::Result<Settings>;
    fn write_settings(&self, settings: &Settings) -> anyhow::Result<()>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "LevelFilterDef")]
    pub log_level: LevelFilter,
    pub beginner: LevelSettings,
    pub intermediate: LevelSettings,
    pub advanced: LevelSettings,
    pub slot: SlotSettings,
    pub random_seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSettings {
    pub duration_weeks: u32,
    pub sessions_per_week: u32,
    pub session_minutes: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SlotSettings {
    pub sets: u32,
    pub reps: u32,
    pub duration_seconds: u32,
    pub rest_seconds: u32,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "LevelFilter")]
enum LevelFilterDef {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Settings {
    /// Validates the planner part of the settings.
    pub fn planner_config(&self) -> anyhow::Result<PlannerConfig> {
        Ok(PlannerConfig {
            beginner: self
                .beginner
                .level_defaults()
                .context("invalid beginner defaults")?,
            intermediate: self
                .intermediate
                .level_defaults()
                .context("invalid intermediate defaults")?,
            advanced: self
                .advanced
                .level_defaults()
                .context("invalid advanced defaults")?,
            slot: self.slot.slot_defaults().context("invalid slot defaults")?,
            random_seed: self.random_seed,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        let config = PlannerConfig::default();
        Self {
            log_level: LevelFilter::Info,
            beginner: config.beginner.into(),
            intermediate: config.intermediate.into(),
            advanced: config.advanced.into(),
            slot: config.slot.into(),
            random_seed: config.random_seed,
        }
    }
}

impl LevelSettings {
    fn level_defaults(self) -> anyhow::Result<LevelDefaults> {
        Ok(LevelDefaults::new(
            self.duration_weeks,
            self.sessions_per_week,
            self.session_minutes,
        )?)
    }
}

impl From<LevelDefaults> for LevelSettings {
    fn from(value: LevelDefaults) -> Self {
        Self {
            duration_weeks: value.duration_weeks.into(),
            sessions_per_week: value.sessions_per_week.into(),
            session_minutes: value.session_minutes.into(),
        }
    }
}

impl SlotSettings {
    fn slot_defaults(self) -> anyhow::Result<SlotDefaults> {
        ensure!(self.sets > 0, "sets must be positive");
        ensure!(self.reps > 0, "reps must be positive");
        ensure!(self.duration_seconds > 0, "duration must be positive");
        Ok(SlotDefaults {
            sets: self.sets,
            reps: self.reps,
            duration_seconds: self.duration_seconds,
            rest_seconds: self.rest_seconds,
        })
    }
}

impl Default for SlotSettings {
    fn default() -> Self {
        SlotDefaults::default().into()
    }
}

impl From<SlotDefaults> for SlotSettings {
    fn from(value: SlotDefaults) -> Self {
        Self {
            sets: value.sets,
            reps: value.reps,
            duration_seconds: value.duration_seconds,
            rest_seconds: value.rest_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_default_planner_config() {
        assert_eq!(
            Settings::default().planner_config().unwrap(),
            PlannerConfig::default()
        );
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"random_seed": 42, "log_level": "Debug"}"#).unwrap();

        assert_eq!(settings.random_seed, Some(42));
        assert_eq!(settings.log_level, LevelFilter::Debug);
        assert_eq!(settings.beginner, Settings::default().beginner);
        assert_eq!(settings.planner_config().unwrap().random_seed, Some(42));
    }

    #[rstest]
    #[case(
        LevelSettings { duration_weeks: 53, sessions_per_week: 3, session_minutes: 45 },
        "invalid beginner defaults"
    )]
    #[case(
        LevelSettings { duration_weeks: 8, sessions_per_week: 8, session_minutes: 45 },
        "invalid beginner defaults"
    )]
    #[case(
        LevelSettings { duration_weeks: 8, sessions_per_week: 3, session_minutes: 10 },
        "invalid beginner defaults"
    )]
    fn test_invalid_level_settings(#[case] beginner: LevelSettings, #[case] expected: &str) {
        let settings = Settings {
            beginner,
            ..Settings::default()
        };

        assert_eq!(
            settings.planner_config().unwrap_err().to_string(),
            expected
        );
    }

    #[test]
    fn test_invalid_slot_settings() {
        let settings = Settings {
            slot: SlotSettings {
                sets: 0,
                ..SlotSettings::default()
            },
            ..Settings::default()
        };

        let err = settings.planner_config().unwrap_err();

        assert_eq!(err.to_string(), "invalid slot defaults");
        assert_eq!(err.root_cause().to_string(), "sets must be positive");
    }
}
