use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, PoisonError},
};

use chrono::Utc;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

pub const MAX_ENTRIES: usize = 100;

pub static LOG: Mutex<Option<Arc<dyn Repository>>> = Mutex::new(None);

#[allow(clippy::missing_errors_doc)]
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Adds an entry in front of the newest ones, dropping the oldest beyond
/// [`MAX_ENTRIES`].
pub fn push_entry(entries: &mut VecDeque<Entry>, entry: Entry) {
    entries.push_front(entry);
    entries.truncate(MAX_ENTRIES);
}

/// Keeps the entries in memory only.
#[derive(Default)]
pub struct Memory {
    entries: Mutex<VecDeque<Entry>>,
}

impl Repository for Memory {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn write_entry(&self, entry: Entry) -> Result<(), Error> {
        push_entry(
            &mut self.entries.lock().unwrap_or_else(PoisonError::into_inner),
            entry,
        );
        Ok(())
    }
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(storage: Arc<dyn Repository>, level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(storage);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Entry {
            time: Utc::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        };

        eprintln!("{} {:<5} {}", entry.time, entry.level, entry.message);

        let storage = LOG
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(storage) = storage {
            let _ = storage.write_entry(entry);
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: "Jan 01 00:00:00".to_string(),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_memory_newest_first_and_capped() {
        let memory = Memory::default();

        for i in 0..=MAX_ENTRIES {
            memory.write_entry(entry(&i.to_string())).unwrap();
        }

        let entries = memory.read_entries().unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries.front().unwrap().message, MAX_ENTRIES.to_string());
        assert_eq!(entries.back().unwrap().message, "1");
    }

    #[test]
    fn test_entry_serialization() {
        let json = serde_json::to_string(&Entry {
            level: Level::Warn,
            ..entry("slow")
        })
        .unwrap();

        assert_eq!(
            json,
            r#"{"time":"Jan 01 00:00:00","level":"Warn","message":"slow"}"#
        );
        assert_eq!(
            serde_json::from_str::<Entry>(&json).unwrap().level,
            Level::Warn
        );
    }
}
