//! Configuration resolution
//!
//! Maps the application identity to the on-disk location of the to-do
//! database. The pointer lives in a small TOML file in the platform config
//! directory:
//!
//! ```toml
//! [General]
//! database = "/home/me/.me_todo.json"
//! ```

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lock;

/// Application name used for the platform config directory
pub const APP_NAME: &str = "clitodo";

/// Name of the configuration file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "General")]
    pub general: GeneralConfig,
}

/// The `[General]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Absolute path of the to-do database
    pub database: PathBuf,
}

impl Config {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            general: GeneralConfig {
                database: database.into(),
            },
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::NotInitialized(path.to_path_buf())
            } else {
                Error::ReadError {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        toml::from_str(&content).map_err(|err| Error::ConfigInvalid {
            path: path.to_path_buf(),
            message: err.message().to_string(),
        })
    }

    /// Save configuration, replacing any previous file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|err| Error::WriteError {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidData, err),
        })?;
        lock::write_atomic(path, content.as_bytes()).map_err(|source| Error::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Where the configuration file lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    dir: PathBuf,
    file: PathBuf,
}

impl ConfigPaths {
    /// Use an explicit configuration directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let file = dir.join(CONFIG_FILE_NAME);
        Self { dir, file }
    }

    /// Platform config directory for the application
    /// (e.g. `~/.config/clitodo` on Linux)
    pub fn platform() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", APP_NAME).ok_or_else(|| Error::DirectoryError {
            path: PathBuf::from(APP_NAME),
            source: io::Error::new(io::ErrorKind::NotFound, "no home directory found"),
        })?;
        Ok(Self::in_dir(dirs.config_dir()))
    }

    /// Explicit directory when given, platform directory otherwise
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self> {
        match dir {
            Some(dir) => Ok(Self::in_dir(dir)),
            None => Self::platform(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// Reads and writes the database pointer
#[derive(Debug, Clone)]
pub struct Resolver {
    paths: ConfigPaths,
}

impl Resolver {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Check whether a configuration file exists
    pub fn is_initialized(&self) -> bool {
        self.paths.file.exists()
    }

    /// Create the config directory and file, then record `storage_path`.
    ///
    /// Relative paths are made absolute against the current directory.
    /// Running this again overwrites the stored path.
    pub fn initialize(&self, storage_path: &Path) -> Result<PathBuf> {
        let storage_path =
            std::path::absolute(storage_path).map_err(|source| Error::WriteError {
                path: storage_path.to_path_buf(),
                source,
            })?;

        fs::create_dir_all(&self.paths.dir).map_err(|source| Error::DirectoryError {
            path: self.paths.dir.clone(),
            source,
        })?;

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.paths.file)
            .map_err(|source| Error::FileError {
                path: self.paths.file.clone(),
                source,
            })?;

        Config::new(storage_path.clone()).save(&self.paths.file)?;
        tracing::debug!(
            config = %self.paths.file.display(),
            database = %storage_path.display(),
            "config initialized"
        );

        Ok(storage_path)
    }

    /// Read the configured database path
    pub fn resolve_storage_path(&self) -> Result<PathBuf> {
        let config = Config::load(&self.paths.file)?;
        tracing::debug!(
            config = %self.paths.file.display(),
            database = %config.general.database.display(),
            "resolved database path"
        );
        Ok(config.general.database)
    }
}

/// Default database location: `<home>/.<home dir name>_todo.json`
pub fn default_storage_path() -> Result<PathBuf> {
    let dirs = BaseDirs::new().ok_or_else(|| Error::DirectoryError {
        path: PathBuf::from("~"),
        source: io::Error::new(io::ErrorKind::NotFound, "no home directory found"),
    })?;
    Ok(storage_path_in_home(dirs.home_dir()))
}

fn storage_path_in_home(home: &Path) -> PathBuf {
    let name = home
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| APP_NAME.to_string());
    home.join(format!(".{name}_todo.json"))
}
