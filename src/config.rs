//! Report configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use crate::models::SortingMethod;

/// Default values used when a variable is not set.
pub mod defaults {
    pub const OUTPUT_DIR: &str = "target";
    pub const REPORT_TITLE: &str = "Cucumber Reports";
    pub const SORTING_METHOD: &str = "natural";
    pub const TRENDS_LIMIT: i64 = 0; // 0 keeps every build
    pub const REPORT_DIRECTORY: &str = "cucumber-html-reports";
}

/// Report generation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory under which the report directory is created
    pub output_dir: PathBuf,
    /// Project name shown on every page
    pub project_name: String,
    /// Build number or label of the current run
    pub build_number: Option<String>,
    /// Title shown on every page
    pub report_title: String,
    /// Order applied to features, tags and steps
    pub sorting_method: SortingMethod,
    /// Persisted trends record; trends are disabled when unset
    pub trends_file: Option<PathBuf>,
    /// Maximum number of retained builds (<= 0 keeps every build)
    pub trends_limit: i64,
    /// Pages are embedded in a CI build page
    pub run_with_jenkins: bool,
    /// Step details start expanded
    pub expand_all_steps: bool,
    /// Suffix appended to the report directory and page links
    pub directory_suffix: Option<String>,
    /// Extra name/value pairs shown on the overview pages
    pub classifications: Vec<(String, String)>,
}

impl Config {
    /// Create a configuration with defaults for everything but the essentials.
    pub fn new(output_dir: impl Into<PathBuf>, project_name: impl Into<String>) -> Self {
        Config {
            output_dir: output_dir.into(),
            project_name: project_name.into(),
            build_number: None,
            report_title: defaults::REPORT_TITLE.to_string(),
            sorting_method: SortingMethod::default(),
            trends_file: None,
            trends_limit: defaults::TRENDS_LIMIT,
            run_with_jenkins: false,
            expand_all_steps: false,
            directory_suffix: None,
            classifications: Vec::new(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REPORT_PROJECT_NAME`: Project name - REQUIRED
    /// - `REPORT_OUTPUT_DIR`: Output directory (default: target)
    /// - `REPORT_BUILD_NUMBER`: Build number or label
    /// - `REPORT_TITLE`: Page title (default: Cucumber Reports)
    /// - `REPORT_SORTING_METHOD`: natural | alphabetical (default: natural)
    /// - `REPORT_TRENDS_FILE`: Trends record to read and update
    /// - `REPORT_TRENDS_LIMIT`: Retained builds, 0 or less for all (default: 0)
    /// - `REPORT_RUN_WITH_JENKINS`: true/false (default: false)
    /// - `REPORT_EXPAND_ALL_STEPS`: true/false (default: false)
    /// - `REPORT_DIRECTORY_SUFFIX`: Report directory suffix
    /// - `REPORT_CLASSIFICATIONS`: `name=value;name=value`
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_name = env::var("REPORT_PROJECT_NAME")
            .map_err(|_| ConfigError::MissingEnvVar("REPORT_PROJECT_NAME"))?;

        let output_dir =
            env::var("REPORT_OUTPUT_DIR").unwrap_or_else(|_| defaults::OUTPUT_DIR.to_string());

        let mut config = Config::new(output_dir, project_name);

        config.build_number = non_empty_var("REPORT_BUILD_NUMBER");
        if let Some(title) = non_empty_var("REPORT_TITLE") {
            config.report_title = title;
        }

        // Unknown strategies are kept and rejected when sorting
        config.sorting_method = SortingMethod::parse(
            &env::var("REPORT_SORTING_METHOD")
                .unwrap_or_else(|_| defaults::SORTING_METHOD.to_string()),
        );

        config.trends_file = non_empty_var("REPORT_TRENDS_FILE").map(PathBuf::from);

        config.trends_limit = env::var("REPORT_TRENDS_LIMIT")
            .unwrap_or_else(|_| defaults::TRENDS_LIMIT.to_string())
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidValue("REPORT_TRENDS_LIMIT must be a valid number"))?;

        config.run_with_jenkins = parse_flag("REPORT_RUN_WITH_JENKINS")?;
        config.expand_all_steps = parse_flag("REPORT_EXPAND_ALL_STEPS")?;
        config.directory_suffix = non_empty_var("REPORT_DIRECTORY_SUFFIX");

        if let Some(raw) = non_empty_var("REPORT_CLASSIFICATIONS") {
            config.classifications = parse_classifications(&raw)?;
        }

        Ok(config)
    }

    /// Directory the report pages are written to.
    pub fn report_directory(&self) -> PathBuf {
        let name = match &self.directory_suffix {
            Some(suffix) => format!("{}_{}", defaults::REPORT_DIRECTORY, suffix),
            None => defaults::REPORT_DIRECTORY.to_string(),
        };
        self.output_dir.join(name)
    }

    pub fn is_trends_enabled(&self) -> bool {
        self.trends_file.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(name: &'static str) -> Result<bool, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(false),
        Ok(value) => parse_bool(&value).ok_or(ConfigError::InvalidFlag(name)),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Parse `name=value;name=value` pairs, keeping their order.
fn parse_classifications(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    raw.split(';')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| {
            pair.split_once('=')
                .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
                .ok_or(ConfigError::InvalidValue(
                    "REPORT_CLASSIFICATIONS entries must look like name=value",
                ))
        })
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Invalid configuration value: {0} must be true or false")]
    InvalidFlag(&'static str),
}
