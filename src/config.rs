use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HookError;
use crate::eval::Params;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// Environment variable naming a user config file.
pub const CONFIG_ENV_VAR: &str = "HOOKGUARD_CONFIG";

/// User config location when neither `--config` nor the env var is set.
const USER_CONFIG_PATH: &str = "~/.config/hookguard/config.toml";

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub branch: BranchConfig,
    #[serde(default)]
    pub commit: CommitConfig,
    #[serde(default)]
    pub filename: FilenameConfig,
    #[serde(default)]
    pub private_key: PrivateKeyConfig,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub record_outcomes: bool,
    #[serde(default)]
    pub log_level: String,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct BranchConfig {
    #[serde(default)]
    pub protected_main: bool,
    #[serde(default)]
    pub protected_dev: bool,
    #[serde(default)]
    pub protected_tags: bool,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CommitConfig {
    #[serde(default)]
    pub min_first_line: usize,
    #[serde(default)]
    pub max_first_line: usize,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct FilenameConfig {
    #[serde(default)]
    pub min_len: usize,
    #[serde(default)]
    pub max_len: usize,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PrivateKeyConfig {
    #[serde(default)]
    pub markers: Vec<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    branch: BranchOverlay,
    #[serde(default)]
    commit: CommitOverlay,
    #[serde(default)]
    filename: FilenameOverlay,
    #[serde(default)]
    private_key: PrivateKeyOverlay,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsOverlay {
    record_outcomes: Option<bool>,
    log_level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct BranchOverlay {
    protected_main: Option<bool>,
    protected_dev: Option<bool>,
    protected_tags: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct CommitOverlay {
    min_first_line: Option<usize>,
    max_first_line: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct FilenameOverlay {
    min_len: Option<usize>,
    max_len: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct PrivateKeyOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    markers: Vec<String>,
    #[serde(default)]
    remove_markers: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge the overlay from `explicit`, else `$HOOKGUARD_CONFIG`,
    ///    else `~/.config/hookguard/config.toml`
    ///
    /// Only the last location may be absent. A named file that is missing or
    /// any file that fails to parse is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, HookError> {
        let mut config = Self::default_config();
        let named = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var(CONFIG_ENV_VAR)
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        };
        let (path, required) = match named {
            Some(p) => (expand(&p)?, true),
            None => (
                PathBuf::from(shellexpand::tilde(USER_CONFIG_PATH).into_owned()),
                false,
            ),
        };
        if !required && !path.exists() {
            log::debug!("no user config at {}", path.display());
            return Ok(config);
        }
        let content = std::fs::read_to_string(&path).map_err(|e| HookError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;
        config.apply_overlay_str(&content).map_err(|message| HookError::Config {
            path: path.clone(),
            message,
        })?;
        log::debug!("merged user config from {}", path.display());
        Ok(config)
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let s = overlay.settings;
        set(&mut self.settings.record_outcomes, s.record_outcomes);
        set(&mut self.settings.log_level, s.log_level);

        let b = overlay.branch;
        set(&mut self.branch.protected_main, b.protected_main);
        set(&mut self.branch.protected_dev, b.protected_dev);
        set(&mut self.branch.protected_tags, b.protected_tags);

        let c = overlay.commit;
        set(&mut self.commit.min_first_line, c.min_first_line);
        set(&mut self.commit.max_first_line, c.max_first_line);

        let f = overlay.filename;
        set(&mut self.filename.min_len, f.min_len);
        set(&mut self.filename.max_len, f.max_len);

        let k = overlay.private_key;
        merge_list(
            &mut self.private_key.markers,
            k.markers,
            &k.remove_markers,
            k.replace,
        );
    }

    /// Parse `toml_str` as an overlay and apply it.
    fn apply_overlay_str(&mut self, toml_str: &str) -> Result<(), String> {
        let overlay: ConfigOverlay = toml::from_str(toml_str).map_err(|e| e.to_string())?;
        self.apply_overlay(overlay);
        Ok(())
    }

    pub fn branch_params(&self) -> Params {
        Params {
            protected_main: self.branch.protected_main,
            protected_dev: self.branch.protected_dev,
            protected_tags: self.branch.protected_tags,
            ..Params::default()
        }
    }

    pub fn subject_params(&self) -> Params {
        Params::lengths(self.commit.min_first_line, self.commit.max_first_line)
    }

    pub fn filename_params(&self) -> Params {
        Params::lengths(self.filename.min_len, self.filename.max_len)
    }
}

/// Expand `~` and `$VAR` in a user-supplied path.
fn expand(path: &Path) -> Result<PathBuf, HookError> {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .map(|p| PathBuf::from(p.into_owned()))
        .map_err(|e| HookError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
