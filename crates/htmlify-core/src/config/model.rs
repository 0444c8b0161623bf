use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::consts::{
    CONFIG_FILE_NAME, DEFAULT_INPUT_EXTENSION, DEFAULT_OUTPUT_EXTENSION, DOTENV_FILE_NAME,
};
use crate::error::{HtmlifyError, Result};

/// htmlify.config.json schema
///
/// Every key is optional. Relative directories resolve against the working
/// directory once [`Config::resolved`] is called.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directory holding top-level documents and fragments
    pub target_dir: PathBuf,
    /// Directory compiled documents are written to
    pub out_dir: PathBuf,
    /// Keep running and rebuild on changes
    pub watch: bool,
    pub input_extension: String,
    pub output_extension: String,
    /// Enables `@env` lookups, optionally naming a dotenv file to load
    pub env_dir: EnvDir,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from("."),
            out_dir: PathBuf::from("."),
            watch: false,
            input_extension: DEFAULT_INPUT_EXTENSION.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            env_dir: EnvDir::default(),
        }
    }
}

/// `envDir` setting: `false`, `true`, or a path
///
/// A path names a dotenv file, or a directory containing `.env`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum EnvDir {
    Flag(bool),
    Path(PathBuf),
}

impl Default for EnvDir {
    fn default() -> Self {
        EnvDir::Flag(false)
    }
}

impl EnvDir {
    /// Whether `@env` directives read the process environment
    pub fn is_enabled(&self) -> bool {
        !matches!(self, EnvDir::Flag(false))
    }

    /// Dotenv file to load at startup, if any
    pub fn dotenv_path(&self, cwd: &Path) -> Option<PathBuf> {
        match self {
            EnvDir::Flag(false) => None,
            EnvDir::Flag(true) => Some(cwd.join(DOTENV_FILE_NAME)),
            EnvDir::Path(path) => {
                let path = cwd.join(path);
                if path.is_dir() {
                    Some(path.join(DOTENV_FILE_NAME))
                } else {
                    Some(path)
                }
            }
        }
    }
}

/// Values given on the command line, taking precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub target_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub watch: Option<bool>,
    pub input_extension: Option<String>,
    pub output_extension: Option<String>,
    pub env_dir: Option<EnvDir>,
}

impl Config {
    /// Read htmlify.config.json
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| HtmlifyError::ConfigParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| HtmlifyError::ConfigParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load the config for a run started in `cwd`
    ///
    /// An explicit `path` must exist. Without one, `htmlify.config.json` in
    /// `cwd` is used when present and defaults apply otherwise.
    pub fn load(cwd: &Path, path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(cwd.join(path));
        }

        let default_path = cwd.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            log::info!("Found config file {}", default_path.display());
            Self::from_file(&default_path)
        } else {
            log::info!("No {} found, using default settings", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(dir) = overrides.target_dir {
            self.target_dir = dir;
        }
        if let Some(dir) = overrides.out_dir {
            self.out_dir = dir;
        }
        if let Some(watch) = overrides.watch {
            self.watch = watch;
        }
        if let Some(ext) = overrides.input_extension {
            self.input_extension = ext;
        }
        if let Some(ext) = overrides.output_extension {
            self.output_extension = ext;
        }
        if let Some(env_dir) = overrides.env_dir {
            self.env_dir = env_dir;
        }
        self
    }

    /// Anchor relative directories at `cwd` and validate the result
    pub fn resolved(mut self, cwd: &Path) -> Result<Self> {
        self.target_dir = anchor(cwd, &self.target_dir);
        self.out_dir = anchor(cwd, &self.out_dir);
        self.validate()?;
        Ok(self)
    }

    /// Reject settings that would make outputs overwrite inputs
    pub fn validate(&self) -> Result<()> {
        for (field, ext) in [
            ("inputExtension", &self.input_extension),
            ("outputExtension", &self.output_extension),
        ] {
            if ext.is_empty() || ext.contains(['/', '\\']) {
                return Err(HtmlifyError::ConfigInvalidValue {
                    field: field.to_string(),
                    reason: format!("'{}' is not a valid file extension", ext),
                });
            }
        }

        if self.target_dir == self.out_dir && self.input_extension == self.output_extension {
            return Err(HtmlifyError::ConfigInvalidValue {
                field: "outDir".to_string(),
                reason: "targetDir and outDir are the same and inputExtension and \
                         outputExtension are the same; change one or the other"
                    .to_string(),
            });
        }

        Ok(())
    }

    /// Load the configured dotenv file into the process environment
    ///
    /// Must run before any compilation starts. A missing file is logged and
    /// ignored. Returns the loaded path.
    pub fn load_dotenv(&self, cwd: &Path) -> Option<PathBuf> {
        let path = self.env_dir.dotenv_path(cwd)?;
        match dotenvy::from_path(&path) {
            Ok(()) => {
                log::info!("Loaded environment from {}", path.display());
                Some(path)
            }
            Err(e) => {
                log::warn!("Could not load {}: {}", path.display(), e);
                None
            }
        }
    }
}

fn anchor(cwd: &Path, dir: &Path) -> PathBuf {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        cwd.to_path_buf()
    } else {
        cwd.join(dir)
    }
}
