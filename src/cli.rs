use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, ValueHint};

use crate::config;

#[derive(Parser, Debug)]
#[command(
    version = concat!(
        env!("CARGO_PKG_VERSION"), " - ",
        env!("VERGEN_GIT_DESCRIBE"), "(",
        env!("VERGEN_BUILD_DATE"), ")"
    ),
    about
)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to a JSON array of person records, overrides `data-file` in config
    #[arg(short, long, value_name = "FILE", env = "PEOPLE_TUI_DATA")]
    pub data: Option<PathBuf>,

    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 60.0)]
    pub frame_rate: f64,
}

impl Args {
    /// Parses the process arguments, naming the default config location in `--config` help.
    pub fn parse_with_config_hint() -> Result<Self> {
        let help = match config::get_config_path() {
            Ok(path) => format!("Path to config file (default: {})", path.display()),
            Err(_) => "Path to config file".to_owned(),
        };
        let matches = Self::command()
            .mut_arg("config", |arg| {
                arg.help(help).value_hint(ValueHint::FilePath).next_line_help(true)
            })
            .get_matches();
        Ok(Self::from_arg_matches(&matches)?)
    }
}
