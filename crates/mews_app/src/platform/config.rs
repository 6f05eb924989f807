//! Startup configuration: built-in defaults, then an optional RON file,
//! then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};
use mews_core::{Route, DEFAULT_PAGE_SIZE};
use mews_engine::{EnvelopeLayout, FetchSettings, DEFAULT_MAX_RESULTS};
use serde::{Deserialize, Serialize};

const DEFAULT_SNAPSHOT: &str = "cats.json";
const DEFAULT_PROXY_URL: &str = "http://localhost/jsCats/ngCats/proxy.php";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// Static JSON snapshot on disk.
    Local,
    /// Live listing proxy.
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Pets under element 1, `petfinder.pets.pet`.
    Proxy,
    /// Pets under element 2, `pets.pet`.
    Snapshot,
}

impl From<Layout> for EnvelopeLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Proxy => EnvelopeLayout::Proxy,
            Layout::Snapshot => EnvelopeLayout::Snapshot,
        }
    }
}

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "mews",
    version,
    about = "Browse adoptable shelter cats in the terminal",
    long_about = "Browse adoptable shelter cats from a local JSON snapshot or a live listing proxy.\n\nExamples:\n  mews --snapshot cats.json\n  mews --endpoint remote --proxy-url http://localhost/jsCats/ngCats/proxy.php --count 50\n  mews --route /cat/24151882/1 --once"
)]
pub struct CliArgs {
    #[arg(long, value_name = "FILE", help = "RON config file.")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, help_heading = "Source", help = "Where listings come from.")]
    pub endpoint: Option<Endpoint>,

    #[arg(long, value_name = "PATH", help_heading = "Source", help = "Local snapshot file.")]
    pub snapshot: Option<PathBuf>,

    #[arg(long, value_name = "URL", help_heading = "Source", help = "Listing proxy URL.")]
    pub proxy_url: Option<String>,

    #[arg(
        long,
        value_name = "N",
        help_heading = "Source",
        help = "Maximum listings to request from the proxy.",
    )]
    pub count: Option<u32>,

    #[arg(
        long,
        value_enum,
        help_heading = "Source",
        help = "Position of the pet list in the payload.",
    )]
    pub layout: Option<Layout>,

    #[arg(
        long,
        value_name = "SECS",
        help_heading = "Source",
        help = "Request timeout for the proxy.",
    )]
    pub timeout: Option<u64>,

    #[arg(long, value_name = "N", help_heading = "View", help = "Cats per list page.")]
    pub page_size: Option<usize>,

    #[arg(
        long,
        value_name = "PATH",
        help_heading = "View",
        help = "Start location, e.g. /cats/2 or /cat/<id>/1.",
    )]
    pub route: Option<String>,

    #[arg(long, help_heading = "View", help = "Render the start location once and exit.")]
    pub once: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase log verbosity (-v, -vv).",
    )]
    pub verbose: u8,

    #[arg(
        long,
        value_name = "PATH",
        help_heading = "Output",
        help = "Also write the log to this file.",
    )]
    pub log_file: Option<PathBuf>,
}

/// On-disk config. Every field is optional and overrides the default.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub endpoint: Option<Endpoint>,
    pub snapshot: Option<PathBuf>,
    pub proxy_url: Option<String>,
    pub count: Option<u32>,
    pub layout: Option<Layout>,
    pub timeout: Option<u64>,
    pub page_size: Option<usize>,
    pub route: Option<String>,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

/// Fully resolved settings, fixed for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: Endpoint,
    pub snapshot: PathBuf,
    pub proxy_url: String,
    pub count: u32,
    pub layout: Layout,
    pub timeout: Duration,
    pub page_size: usize,
    pub start: Route,
    pub once: bool,
    pub verbose: u8,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::Local,
            snapshot: PathBuf::from(DEFAULT_SNAPSHOT),
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            count: DEFAULT_MAX_RESULTS,
            layout: Layout::Proxy,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            start: Route::default(),
            once: false,
            verbose: 0,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn resolve(args: &CliArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Self::merge(file, args)
    }

    fn merge(file: ConfigFile, args: &CliArgs) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let settings = Settings {
            endpoint: args.endpoint.or(file.endpoint).unwrap_or(defaults.endpoint),
            snapshot: args
                .snapshot
                .clone()
                .or(file.snapshot)
                .unwrap_or(defaults.snapshot),
            proxy_url: args
                .proxy_url
                .clone()
                .or(file.proxy_url)
                .unwrap_or(defaults.proxy_url),
            count: args.count.or(file.count).unwrap_or(defaults.count),
            layout: args.layout.or(file.layout).unwrap_or(defaults.layout),
            timeout: args
                .timeout
                .or(file.timeout)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            page_size: args
                .page_size
                .or(file.page_size)
                .unwrap_or(defaults.page_size),
            start: args
                .route
                .as_deref()
                .or(file.route.as_deref())
                .map(Route::parse)
                .unwrap_or(defaults.start),
            once: args.once,
            verbose: args.verbose,
            log_file: args.log_file.clone().or(file.log_file),
        };

        if settings.page_size == 0 {
            return Err(ConfigError::Zero("page size"));
        }
        if settings.count == 0 {
            return Err(ConfigError::Zero("count"));
        }
        Ok(settings)
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: self.timeout,
            ..FetchSettings::default()
        }
    }
}
