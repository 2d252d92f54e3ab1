use clap::{Args, Parser};
use std::path::PathBuf;
use tankobon::config::{LevelSettings, LogLevel, Renumber, Settings, WorkMode};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

const TEMPLATE_HELP: &str = "\
Template codes (--vol-template, --ch-template):
  %l  label of the level (series name by default)
  %m  original directory name
  %n  number, or the bonus label
  %r  roman number, or the bonus label
  %p  prefix, numbered elements only
  %s  special label, numbered elements only
  %u  number of the parent volume
  %R  roman number of the parent volume
  %t  tag of the parent level (--ch-upper)
  %_  a space, only below a numbered volume
  %%  a literal %

Default template: '%l%_%t%u %p%n%s'";

/// Turn a `--x/--no-x` pair into an optional override.
fn toggle(yes: bool, no: bool) -> Option<bool> {
    match (yes, no) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "tankobon",
    bin_name = "tankobon",
    version = get_version(),
    about = "Infer volume and chapter numbers from directory names and rename them consistently",
    after_help = TEMPLATE_HELP
)]
pub struct Cli {
    /// Name of the series, used in the new names
    pub name: String,

    /// Series directory (volumes as subdirectories, chapters below them)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Glob selecting the directories of each level
    #[arg(long, value_name = "PATTERN")]
    pub glob: Option<String>,

    /// The series directory is a single volume of chapters
    #[arg(long, overrides_with = "no_single")]
    pub single: bool,

    #[arg(long, overrides_with = "single", hide = true)]
    pub no_single: bool,

    /// What to do with the computed names
    #[arg(long, value_enum, group = "mode")]
    pub action: Option<WorkMode>,

    /// Same as --action report
    #[arg(long, group = "mode")]
    pub report: bool,

    /// Same as --action dry-run
    #[arg(long, group = "mode")]
    pub dry_run: bool,

    /// Same as --action enable
    #[arg(long, group = "mode")]
    pub enable: bool,

    #[arg(long, value_enum)]
    pub log: Option<LogLevel>,

    /// Number never taken as a volume or chapter number (repeatable)
    #[arg(long, value_name = "N")]
    pub hoax: Vec<u32>,

    /// Rewrite chapter numbers after inference
    #[arg(long, value_enum)]
    pub renumber: Option<Renumber>,

    /// Read settings from FILE instead of the default configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Save the effective settings, to FILE or to the default configuration
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub store: Option<Option<PathBuf>>,

    #[command(flatten)]
    pub volume: VolumeArgs,

    #[command(flatten)]
    pub chapter: ChapterArgs,
}

impl Cli {
    pub fn action(&self) -> Option<WorkMode> {
        if self.report {
            Some(WorkMode::Report)
        } else if self.dry_run {
            Some(WorkMode::DryRun)
        } else if self.enable {
            Some(WorkMode::Enable)
        } else {
            self.action
        }
    }

    /// The command line as a configuration layer.
    pub fn settings(&self) -> Settings {
        Settings {
            glob: self.glob.clone(),
            single: toggle(self.single, self.no_single),
            action: self.action(),
            log: self.log,
            hoax: self.hoax.clone(),
            renumber: self.renumber,
            volume: self.volume.settings(),
            chapter: self.chapter.settings(),
        }
    }
}

#[derive(Args, Debug)]
#[command(next_help_heading = "Volumes")]
pub struct VolumeArgs {
    /// Drop .0 decimal parts from volume numbers
    #[arg(long, overrides_with = "no_vol_normalize")]
    pub vol_normalize: bool,
    #[arg(long, overrides_with = "vol_normalize", hide = true)]
    pub no_vol_normalize: bool,

    /// Read volume numbers as roman numerals
    #[arg(long, overrides_with = "no_vol_roman")]
    pub vol_roman: bool,
    #[arg(long, overrides_with = "vol_roman", hide = true)]
    pub no_vol_roman: bool,

    /// Number of the first volume
    #[arg(long, value_name = "N")]
    pub vol_first: Option<u32>,

    /// Volumes have no chapter directories
    #[arg(long, overrides_with = "no_vol_flat")]
    pub vol_flat: bool,
    #[arg(long, overrides_with = "vol_flat", hide = true)]
    pub no_vol_flat: bool,

    #[arg(long, value_name = "TEMPLATE")]
    pub vol_template: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub vol_prefix: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub vol_upper: Option<String>,

    /// Digits of volume numbers, negative for automatic
    #[arg(long, value_name = "W", allow_negative_numbers = true)]
    pub vol_wide: Option<i32>,

    /// Always print a decimal part
    #[arg(long)]
    pub vol_float: bool,

    #[arg(long, value_name = "TEXT")]
    pub vol_label: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub vol_special: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub vol_bonus: Option<String>,
}

impl VolumeArgs {
    fn settings(&self) -> LevelSettings {
        LevelSettings {
            prefix: self.vol_prefix.clone(),
            label: self.vol_label.clone(),
            roman: toggle(self.vol_roman, self.no_vol_roman),
            first: self.vol_first,
            flat: toggle(self.vol_flat, self.no_vol_flat),
            template: self.vol_template.clone(),
            upper: self.vol_upper.clone(),
            wide: self.vol_wide,
            force_decimal: self.vol_float.then_some(true),
            special: self.vol_special.clone(),
            bonus: self.vol_bonus.clone(),
            normalize: toggle(self.vol_normalize, self.no_vol_normalize),
        }
    }
}

#[derive(Args, Debug)]
#[command(next_help_heading = "Chapters")]
pub struct ChapterArgs {
    /// Drop .0 decimal parts from chapter numbers
    #[arg(long, overrides_with = "no_ch_normalize")]
    pub ch_normalize: bool,
    #[arg(long, overrides_with = "ch_normalize", hide = true)]
    pub no_ch_normalize: bool,

    /// Read chapter numbers as roman numerals
    #[arg(long, overrides_with = "no_ch_roman")]
    pub ch_roman: bool,
    #[arg(long, overrides_with = "ch_roman", hide = true)]
    pub no_ch_roman: bool,

    /// Number of the first chapter
    #[arg(long, value_name = "N")]
    pub ch_first: Option<u32>,

    /// Restart the chapter count in every volume
    #[arg(long, overrides_with = "no_ch_flat")]
    pub ch_flat: bool,
    #[arg(long, overrides_with = "ch_flat", hide = true)]
    pub no_ch_flat: bool,

    #[arg(long, value_name = "TEMPLATE")]
    pub ch_template: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub ch_prefix: Option<String>,

    /// Tag placed before the volume number (%t)
    #[arg(long, value_name = "TEXT")]
    pub ch_upper: Option<String>,

    /// Digits of chapter numbers, negative for automatic
    #[arg(long, value_name = "W", allow_negative_numbers = true)]
    pub ch_wide: Option<i32>,

    /// Always print a decimal part
    #[arg(long)]
    pub ch_float: bool,

    #[arg(long, value_name = "TEXT")]
    pub ch_label: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub ch_special: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub ch_bonus: Option<String>,
}

impl ChapterArgs {
    fn settings(&self) -> LevelSettings {
        LevelSettings {
            prefix: self.ch_prefix.clone(),
            label: self.ch_label.clone(),
            roman: toggle(self.ch_roman, self.no_ch_roman),
            first: self.ch_first,
            flat: toggle(self.ch_flat, self.no_ch_flat),
            template: self.ch_template.clone(),
            upper: self.ch_upper.clone(),
            wide: self.ch_wide,
            force_decimal: self.ch_float.then_some(true),
            special: self.ch_special.clone(),
            bonus: self.ch_bonus.clone(),
            normalize: toggle(self.ch_normalize, self.no_ch_normalize),
        }
    }
}
