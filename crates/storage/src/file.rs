use std::{
    collections::VecDeque,
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use anyhow::Context;
use fitplan_runtime::{Settings, SettingsRepository, log};

/// Stores the settings as a JSON file. A missing file means default settings.
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsRepository for SettingsFile {
    fn read_settings(&self) -> anyhow::Result<Settings> {
        match read_optional(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?
        {
            Some(content) => serde_json::from_str(&content)
                .with_context(|| format!("failed to parse {}", self.path.display())),
            None => Ok(Settings::default()),
        }
    }

    fn write_settings(&self, settings: &Settings) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

/// Stores the newest log entries as a JSON file.
pub struct LogFile {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LogFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match read_optional(&self.path).map_err(|err| log::Error::Unknown(err.to_string()))? {
            Some(content) => serde_json::from_str(&content)
                .map_err(|err| log::Error::Unknown(err.to_string())),
            None => Ok(VecDeque::new()),
        }
    }
}

impl log::Repository for LogFile {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read()
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read()?;
        log::push_entry(&mut entries, entry);
        let content =
            serde_json::to_string(&entries).map_err(|err| log::Error::Unknown(err.to_string()))?;
        fs::write(&self.path, content).map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}
