#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;

use anyhow::Context;
use fitplan_domain::{PlanFactory, StrategyRegistry};

pub mod log;
pub mod settings;

pub use settings::{LevelSettings, Settings, SettingsRepository, SlotSettings};

/// Reads the stored settings and builds a plan factory with all strategies.
pub fn plan_factory(settings: &dyn SettingsRepository) -> anyhow::Result<PlanFactory> {
    let settings = settings
        .read_settings()
        .context("failed to read settings")?;
    Ok(PlanFactory::new(
        settings.planner_config()?,
        StrategyRegistry::default(),
    ))
}

/// Installs the global logger at the configured level.
pub fn init_logging(
    settings: &dyn SettingsRepository,
    storage: Arc<dyn log::Repository>,
) -> anyhow::Result<()> {
    let settings = settings
        .read_settings()
        .context("failed to read settings")?;
    log::init(storage, settings.log_level).context("failed to initialize logger")
}
