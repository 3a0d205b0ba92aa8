use anyhow::Result;

mod cli;
mod config;
mod workflow;

use cli::Cli;
use config::LoadedRequest;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let request = LoadedRequest::load(&cli.request, !cli.skip_validation)?;
    let scenarios = workflow::run_scenarios(&request, cli.format)?;

    if !cli.no_export {
        let output_dir = config::resolve_output_dir(cli.output_dir.as_deref());
        workflow::export_results(&request, &scenarios, &output_dir)?;
        eprintln!("Results written to '{}'", output_dir.display());
    }

    Ok(())
}
