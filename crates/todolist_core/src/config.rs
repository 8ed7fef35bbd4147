//! Host-supplied configuration and core startup.
//!
//! # Responsibility
//! - Derive database and log locations from one app data directory.
//! - Start logging and open the database in the right order.
//!
//! # Invariants
//! - `data_dir` is absolute and valid UTF-8, so derived paths pass to the
//!   logger unchanged.
//! - `log_level` is always one of `trace|debug|info|warn|error`.

use crate::db::{open_db, DbError};
use crate::logging::{default_log_level, init_logging, normalize_level};
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "todolist.sqlite3";
pub const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDataDir,
    RelativeDataDir(PathBuf),
    NonUtf8DataDir(PathBuf),
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDataDir => write!(f, "data_dir cannot be empty"),
            Self::RelativeDataDir(path) => {
                write!(f, "data_dir must be absolute, got `{}`", path.display())
            }
            Self::NonUtf8DataDir(path) => {
                write!(f, "data_dir must be valid UTF-8, got `{}`", path.display())
            }
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
        }
    }
}

impl Error for ConfigError {}

/// Failure while bringing the core up.
#[derive(Debug)]
pub enum StartupError {
    Logging(String),
    Db(DbError),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging init failed: {message}"),
            Self::Db(err) => write!(f, "database open failed: {err}"),
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StartupError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Core configuration, built by the host at launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    data_dir: PathBuf,
    log_level: &'static str,
}

impl CoreConfig {
    /// Creates a config rooted at `data_dir` with the build's default level.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data_dir = data_dir.as_ref();
        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        if !data_dir.is_absolute() {
            return Err(ConfigError::RelativeDataDir(data_dir.to_path_buf()));
        }
        if data_dir.to_str().is_none() {
            return Err(ConfigError::NonUtf8DataDir(data_dir.to_path_buf()));
        }

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            log_level: default_log_level(),
        })
    }

    pub fn with_log_level(mut self, level: &str) -> Result<Self, ConfigError> {
        self.log_level = normalize_level(level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(self)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_level(&self) -> &'static str {
        self.log_level
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

/// Starts logging, then opens the task database.
///
/// # Errors
/// - `Logging` when the logger rejects the config (including a conflicting
///   earlier init in this process).
/// - `Db` when the database cannot be opened or migrated.
pub fn start_core(config: &CoreConfig) -> Result<Connection, StartupError> {
    let log_dir = config.log_dir();
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| StartupError::Logging("log_dir is not valid UTF-8".to_string()))?;
    init_logging(config.log_level(), log_dir).map_err(StartupError::Logging)?;

    let conn = open_db(config.db_path())?;
    info!("event=core_start module=config status=ok");
    Ok(conn)
}
