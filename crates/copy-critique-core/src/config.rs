//! Layered configuration.
//!
//! Settings are merged from, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. the user file, `config.<ext>` in [`user_config_dir`]
//! 3. project files in the closest directory, walking up from the search
//!    root, that holds `.copy-critique.<ext>` or `copy-critique.<ext>`
//! 4. files added with [`ConfigLoader::with_file`], in order
//! 5. `COPY_CRITIQUE_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. Inside one directory the
//! dotfiles merge before the regular files, each in that extension order.
//! The walk stops at the first directory holding the boundary marker
//! (`.git` by default) so a repository never picks up a stray file above it.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use copy_critique_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)?;
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load()?;
//! println!("{:?} from {:?}", config.content_type, sources.primary_file());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::content_type::ContentType;
use crate::error::{ConfigError, ConfigResult};
use crate::keywords::KeywordTables;

/// Default cap on input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// The configuration for copy-critique.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files. No file logging when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Content type used when a command gets no `--content-type`.
    pub content_type: Option<ContentType>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Keyword table overrides. Categories left out keep the built-in lists.
    pub keywords: Option<KeywordTables>,
}

impl Config {
    /// Effective input size limit, `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }

    /// Keyword tables to analyze with.
    pub fn keyword_tables(&self) -> &KeywordTables {
        match &self.keywords {
            Some(tables) => tables,
            None => KeywordTables::builtin(),
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }

    /// Every loaded file, lowest precedence first.
    pub fn files(&self) -> impl Iterator<Item = &Utf8Path> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
            .map(Utf8PathBuf::as_path)
    }
}

/// Extensions tried for every file name, lowest precedence first.
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Project file names without extension, lowest precedence first.
const PROJECT_STEMS: [&str; 2] = [".copy-critique", "copy-critique"];

/// Application name for XDG directory lookup.
const APP_NAME: &str = "copy-critique";

/// Prefix of environment variable overrides.
const ENV_PREFIX: &str = "COPY_CRITIQUE_";

/// Builder for [`Config`].
#[derive(Debug)]
pub struct ConfigLoader {
    search_from: Option<Utf8PathBuf>,
    user_config: bool,
    stop_at: Option<String>,
    extra_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// User config on, no project search, `.git` as boundary marker.
    pub fn new() -> Self {
        Self {
            search_from: None,
            user_config: true,
            stop_at: Some(".git".to_string()),
            extra_files: Vec::new(),
        }
    }

    /// Look for project files from `dir` upward.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_from = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Stop the project walk at the directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.stop_at = Some(marker.into());
        self
    }

    /// Walk up to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.stop_at = None;
        self
    }

    /// Merge `path` above every discovered file. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.extra_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Discover the sources and merge them into a [`Config`].
    #[tracing::instrument(skip(self), fields(search_from = ?self.search_from))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let project_files = self
            .search_from
            .as_deref()
            .map(|dir| project_files(dir, self.stop_at.as_deref()))
            .unwrap_or_default();
        let sources = ConfigSources {
            project_files,
            user_file: if self.user_config { user_file() } else { None },
            explicit_files: self.extra_files,
        };

        let config: Config = sources
            .files()
            .fold(
                Figment::new().merge(Serialized::defaults(Config::default())),
                merge_file,
            )
            // COPY_CRITIQUE_CONTENT_TYPE=cta, COPY_CRITIQUE_MAX_INPUT_BYTES=1024, ...
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true))
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;

        tracing::debug!(
            files = sources.files().count(),
            content_type = ?config.content_type,
            custom_keywords = config.keywords.is_some(),
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Project files of the closest directory at or above `start` that has any.
fn project_files(start: &Utf8Path, stop_at: Option<&str>) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = PROJECT_STEMS
            .iter()
            .flat_map(|stem| EXTENSIONS.map(|ext| dir.join(format!("{stem}.{ext}"))))
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        if stop_at.is_some_and(|marker| dir.join(marker).exists()) {
            break;
        }
    }
    Vec::new()
}

fn user_file() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// Per-user config directory, e.g. `~/.config/copy-critique/` on Linux.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
