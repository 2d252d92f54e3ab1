//! # Configuration
//!
//! [`Options`] is the fully resolved input of a run. It is assembled in layers:
//!
//! 1. built-in defaults ([`Options::new`])
//! 2. the persisted configuration file ([`Settings::load`])
//! 3. the command line (also expressed as [`Settings`])
//!
//! Every layer above the defaults is a [`Settings`] value where each field is optional,
//! so a layer only overrides what it actually sets. The same type is what gets written
//! back with `--store`.

use crate::error::{Result, TankobonError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TEMPLATE: &str = "%l%_%t%u %p%n%s";

/// What to do with the computed rename plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WorkMode {
    /// Print the old and new names side by side
    #[default]
    Report,
    /// Print the moves without touching the filesystem
    DryRun,
    /// Rename the directories
    Enable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Renumber {
    /// Keep the numbers found in the names
    #[default]
    Asis,
    /// Restart the chapter count in every volume
    Flat,
    /// Count chapters across volumes
    Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Quiet,
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkMode::Report => "report",
            WorkMode::DryRun => "dry-run",
            WorkMode::Enable => "enable",
        };
        f.write_str(s)
    }
}

/// Settings of one nesting level (volumes or chapters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOptions {
    /// Text placed before the number (`%p`)
    pub prefix: String,
    /// Series label for this level (`%l`); defaults to the series name
    pub label: Option<String>,
    /// Search roman numerals instead of arabic digits
    pub roman: bool,
    /// Number of the first element
    pub first: u32,
    /// Volumes: no chapter level. Chapters: restart the count in every volume.
    pub flat: bool,
    pub template: String,
    /// Tag of the parent level (`%t`)
    pub upper: Option<String>,
    /// Digits of the number, `None` for automatic
    pub width: Option<usize>,
    /// Always print a decimal part
    pub force_decimal: bool,
    /// Suffix for numbered elements out of the expected sequence
    pub special: Option<String>,
    /// Replacement for the number of elements without one
    pub bonus: Option<String>,
    /// Drop `.0` decimal parts
    pub normalize: bool,
}

impl LevelOptions {
    pub fn volume() -> Self {
        Self {
            prefix: "vol ".to_string(),
            label: None,
            roman: false,
            first: 1,
            flat: false,
            template: DEFAULT_TEMPLATE.to_string(),
            upper: None,
            width: None,
            force_decimal: false,
            special: Some(" Special".to_string()),
            bonus: Some("Bonus".to_string()),
            normalize: false,
        }
    }

    pub fn chapter() -> Self {
        Self {
            prefix: "c".to_string(),
            upper: Some("v".to_string()),
            special: Some(" oMake".to_string()),
            ..Self::volume()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Name the series shall have
    pub name: String,
    /// Series directory
    pub root: PathBuf,
    /// Glob expression selecting the directories of each level
    pub glob: String,
    /// The root directory is the only volume
    pub single: bool,
    pub action: WorkMode,
    pub log: LogLevel,
    /// Numbers to ignore at every level
    pub hoax: Vec<u32>,
    pub renumber: Renumber,
    pub volume: LevelOptions,
    pub chapter: LevelOptions,
}

impl Options {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            glob: "*".to_string(),
            single: false,
            action: WorkMode::Report,
            log: LogLevel::Info,
            hoax: Vec::new(),
            renumber: Renumber::Asis,
            volume: LevelOptions::volume(),
            chapter: LevelOptions::chapter(),
        }
    }

    /// Fill the values that depend on other options (labels default to the series name).
    pub fn resolved(mut self) -> Self {
        if self.volume.label.is_none() {
            self.volume.label = Some(self.name.clone());
        }
        if self.chapter.label.is_none() {
            self.chapter.label = Some(self.name.clone());
        }
        self
    }
}

/// Optional overrides for a [`LevelOptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LevelSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roman: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<String>,
    /// Negative values select the automatic width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wide: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_decimal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize: Option<bool>,
}

impl LevelSettings {
    pub fn capture(opts: &LevelOptions) -> Self {
        Self {
            prefix: Some(opts.prefix.clone()),
            label: opts.label.clone(),
            roman: Some(opts.roman),
            first: Some(opts.first),
            flat: Some(opts.flat),
            template: Some(opts.template.clone()),
            upper: opts.upper.clone(),
            wide: Some(opts.width.map_or(-1, |w| w as i32)),
            force_decimal: Some(opts.force_decimal),
            special: opts.special.clone(),
            bonus: opts.bonus.clone(),
            normalize: Some(opts.normalize),
        }
    }

    pub fn apply(&self, opts: &mut LevelOptions) {
        if let Some(prefix) = &self.prefix {
            opts.prefix = prefix.clone();
        }
        if let Some(label) = &self.label {
            opts.label = Some(label.clone());
        }
        if let Some(roman) = self.roman {
            opts.roman = roman;
        }
        if let Some(first) = self.first {
            opts.first = first;
        }
        if let Some(flat) = self.flat {
            opts.flat = flat;
        }
        if let Some(template) = &self.template {
            opts.template = template.clone();
        }
        if let Some(upper) = &self.upper {
            opts.upper = Some(upper.clone());
        }
        if let Some(wide) = self.wide {
            opts.width = usize::try_from(wide).ok();
        }
        if let Some(force) = self.force_decimal {
            opts.force_decimal = force;
        }
        if let Some(special) = &self.special {
            opts.special = Some(special.clone());
        }
        if let Some(bonus) = &self.bonus {
            opts.bonus = Some(bonus.clone());
        }
        if let Some(normalize) = self.normalize {
            opts.normalize = normalize;
        }
    }

    /// Overlay `other` on top of `self`.
    pub fn merge(self, other: LevelSettings) -> Self {
        Self {
            prefix: other.prefix.or(self.prefix),
            label: other.label.or(self.label),
            roman: other.roman.or(self.roman),
            first: other.first.or(self.first),
            flat: other.flat.or(self.flat),
            template: other.template.or(self.template),
            upper: other.upper.or(self.upper),
            wide: other.wide.or(self.wide),
            force_decimal: other.force_decimal.or(self.force_decimal),
            special: other.special.or(self.special),
            bonus: other.bonus.or(self.bonus),
            normalize: other.normalize.or(self.normalize),
        }
    }
}

/// One configuration layer, as stored in `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<WorkMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<LogLevel>,
    /// Added to the hoaxes of lower layers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hoax: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renumber: Option<Renumber>,
    pub volume: LevelSettings,
    pub chapter: LevelSettings,
}

impl Settings {
    /// Snapshot of the effective options, suitable for `--store`.
    pub fn capture(opts: &Options) -> Self {
        Self {
            glob: Some(opts.glob.clone()),
            single: Some(opts.single),
            action: Some(opts.action),
            log: Some(opts.log),
            hoax: opts.hoax.clone(),
            renumber: Some(opts.renumber),
            volume: LevelSettings::capture(&opts.volume),
            chapter: LevelSettings::capture(&opts.chapter),
        }
    }

    pub fn apply(&self, opts: &mut Options) {
        if let Some(glob) = &self.glob {
            opts.glob = glob.clone();
        }
        if let Some(single) = self.single {
            opts.single = single;
        }
        if let Some(action) = self.action {
            opts.action = action;
        }
        if let Some(log) = self.log {
            opts.log = log;
        }
        for n in &self.hoax {
            if !opts.hoax.contains(n) {
                opts.hoax.push(*n);
            }
        }
        if let Some(renumber) = self.renumber {
            opts.renumber = renumber;
        }
        self.volume.apply(&mut opts.volume);
        self.chapter.apply(&mut opts.chapter);
    }

    /// Overlay `other` on top of `self`. Hoaxes accumulate.
    pub fn merge(self, other: Settings) -> Self {
        let mut hoax = self.hoax;
        for n in other.hoax {
            if !hoax.contains(&n) {
                hoax.push(n);
            }
        }
        Self {
            glob: other.glob.or(self.glob),
            single: other.single.or(self.single),
            action: other.action.or(self.action),
            log: other.log.or(self.log),
            hoax,
            renumber: other.renumber.or(self.renumber),
            volume: self.volume.merge(other.volume),
            chapter: self.chapter.merge(other.chapter),
        }
    }

    /// Load from `config_dir/config.json`, or return an empty layer if there is none.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(config_path)
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TankobonError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(TankobonError::Serialization)?;
        Ok(settings)
    }

    /// Save to `config_dir/config.json`, creating the directory if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<PathBuf> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TankobonError::Io)?;
        }
        let path = config_dir.join(CONFIG_FILENAME);
        self.save_file(&path)?;
        Ok(path)
    }

    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(TankobonError::Serialization)?;
        fs::write(path, content).map_err(TankobonError::Io)?;
        Ok(())
    }
}
