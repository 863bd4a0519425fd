use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use serde::Deserialize;

const ENV_PREFIX: &str = "PM_DASH_";

/// Command line flags; each one overrides its environment counterpart
#[derive(Debug, Default, Parser)]
#[command(name = "pm-dash", version, about = "Project management dashboard for the terminal")]
pub struct Args {
    /// CSV file with project records
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Maximum number of CSV rows to read
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Where to write the log
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Print the metrics and distributions, then exit
    #[arg(long, conflicts_with = "export")]
    pub summary: bool,

    /// Write chart descriptions as JSON to FILE, then exit
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,
}

/// What the binary should do once the data is loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Summary,
    Export(PathBuf),
}

/// Configuration for the application
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// CSV source read at startup
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    #[serde(default = "default_row_limit")]
    pub row_limit: usize,

    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    #[serde(skip, default = "default_mode")]
    pub mode: Mode,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("PM_Data.csv")
}

fn default_row_limit() -> usize {
    200
}

fn default_log_file() -> PathBuf {
    PathBuf::from("pm_dash.log")
}

fn default_mode() -> Mode {
    Mode::Interactive
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            row_limit: default_row_limit(),
            log_file: default_log_file(),
            mode: default_mode(),
        }
    }
}

impl Config {
    /// Load configuration from `PM_DASH_*` environment variables
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let config = envy::prefixed(ENV_PREFIX).from_env::<Config>()?;

        Ok(config)
    }

    /// Layer command line flags on top of the environment
    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(data) = args.data {
            self.data_path = data;
        }
        if let Some(rows) = args.rows {
            self.row_limit = rows;
        }
        if let Some(log_file) = args.log_file {
            self.log_file = log_file;
        }

        self.mode = match (args.summary, args.export) {
            (_, Some(path)) => Mode::Export(path),
            (true, None) => Mode::Summary,
            (false, None) => Mode::Interactive,
        };

        self
    }
}

/// Parse flags, read the environment and merge the two
pub fn init() -> Result<Config> {
    let args = Args::parse();
    let config = Config::load()?.with_args(args);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bundled_dataset() {
        let config = Config::default();

        assert_eq!(config.data_path, PathBuf::from("PM_Data.csv"));
        assert_eq!(config.row_limit, 200);
        assert_eq!(config.mode, Mode::Interactive);
    }

    #[test]
    fn env_values_are_read_with_prefix() {
        let vars = vec![
            ("PM_DASH_DATA_PATH".to_owned(), "data/projects.csv".to_owned()),
            ("PM_DASH_ROW_LIMIT".to_owned(), "50".to_owned()),
            ("DATA_PATH".to_owned(), "ignored.csv".to_owned()),
        ];

        let config: Config = envy::prefixed(ENV_PREFIX).from_iter(vars).unwrap();

        assert_eq!(config.data_path, PathBuf::from("data/projects.csv"));
        assert_eq!(config.row_limit, 50);
        assert_eq!(config.log_file, PathBuf::from("pm_dash.log"));
    }

    #[test]
    fn flags_override_environment() {
        let args = Args::parse_from(["pm-dash", "--rows", "10", "--export", "charts.json"]);

        let config = Config::default().with_args(args);

        assert_eq!(config.row_limit, 10);
        assert_eq!(config.data_path, PathBuf::from("PM_Data.csv"));
        assert_eq!(config.mode, Mode::Export(PathBuf::from("charts.json")));
    }

    #[test]
    fn summary_flag_selects_summary_mode() {
        let args = Args::parse_from(["pm-dash", "--summary"]);
        assert_eq!(Config::default().with_args(args).mode, Mode::Summary);
    }
}
