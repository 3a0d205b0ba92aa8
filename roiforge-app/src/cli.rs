use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "roiforge")]
#[command(version, about = "Estimate the return of automating workflow tasks with AI tools")]
pub struct Cli {
    /// Request file describing tasks, tools, team and revenue model (.yaml, .yml or .json)
    #[arg(short = 'r', long = "request", value_name = "PATH", default_value = "demos/request.yaml")]
    pub request: PathBuf,

    /// Directory for exported results (defaults to ./runs/roi_<timestamp>)
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// How to print the scenarios
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print only; do not write CSV/JSON exports
    #[arg(long = "no-export")]
    pub no_export: bool,

    /// Skip input range checks (the request was validated upstream)
    #[arg(long = "skip-validation")]
    pub skip_validation: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["roiforge"]);
        assert_eq!(cli.request, PathBuf::from("demos/request.yaml"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.output_dir.is_none());
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "roiforge", "-r", "demo.json", "--format", "json", "--no-export", "-vv",
        ]);
        assert_eq!(cli.request, PathBuf::from("demo.json"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_export);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }
}
