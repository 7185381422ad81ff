mod catalog;
mod cli;
mod config;
mod core;
mod specimen;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use crate::core::report::{FinalReport, JsonReport};

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score(args) => {
            let (cfg, run) = load(&args.run)?;
            let specimen = core::build_specimen(&args, &cfg)?;
            let report = core::assess_one(specimen, &cfg);
            emit(&report, &run, &cfg)
        }
        Commands::Compare(args) => {
            let (cfg, run) = load(&args.run)?;
            let first = core::resolve_named(&args.first, &cfg)?;
            let second = core::resolve_named(&args.second, &cfg)?;
            let report = core::assess_pair(first, second, &cfg);
            emit(&report, &run, &cfg)
        }
        Commands::Batch(run) => {
            let (cfg, run) = load(&run)?;
            let report = core::assess_roster(&cfg)?;
            emit(&report, &run, &cfg)
        }
        Commands::Catalog => {
            core::report::print_catalog();
            Ok(0)
        }
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `paleoimpact init`; writing ./paleoimpact.toml"
                );
            }

            let path = std::env::current_dir()?.join("paleoimpact.toml");
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn load(run: &RunArgs) -> Result<(config::Config, RunArgs)> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(run.config.as_deref(), &cwd)?;
    Ok((loaded.config, run.clone()))
}

fn emit(report: &FinalReport, run: &RunArgs, cfg: &config::Config) -> Result<i32> {
    let output_json = run.json || cfg.general.json;
    if output_json {
        let json_report = JsonReport::from(report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}
