use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use opticut::io::ext_repr::ExtJob;
use opticut_cli::config::OptiCutConfig;
use opticut_cli::io;
use opticut_cli::io::cli::Cli;
use opticut_cli::job::nest_job;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: OptiCutConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            OptiCutConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };

    info!("Successfully parsed OptiCutConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_job: ExtJob = io::read_json(args.input_file.as_path())?;
    let nested = nest_job(ext_job, config)?;

    let output_folder = args.solution_folder;
    io::write_json(
        &nested.output,
        &output_folder.join(format!("sol_{input_file_stem}.json")),
    )?;
    io::write_csv(
        &nested.csv,
        &output_folder.join(format!("sol_{input_file_stem}.csv")),
    )?;
    io::write_svg(
        &nested.svg,
        &output_folder.join(format!("sol_{input_file_stem}.svg")),
    )?;

    Ok(())
}
