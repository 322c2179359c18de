use failure::Error;
use queue_sim::config::SimulationConfig;
use queue_sim::report;
use queue_sim::scenario::{run_scenarios, ScenarioComparison, Verdict};
use serde::Serialize;
use std::env;
use std::fs::File;

struct CliOptions {
    config_path: Option<String>,
    json: bool,
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        config_path: None,
        json: false,
    };

    for arg in args.iter().skip(1) {
        if arg == "--json" {
            options.json = true;
        } else {
            options.config_path = Some(arg.clone());
        }
    }

    options
}

fn get_config(path: String) -> Result<SimulationConfig, Error> {
    let file = File::open(&path)?;

    let config = serde_json::from_reader(file)?;

    Ok(config)
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    config: &'a SimulationConfig,
    comparison: &'a ScenarioComparison,
    verdict: Verdict,
}

fn run(options: CliOptions) -> Result<(), Error> {
    let config = match options.config_path {
        Some(path) => get_config(path)?,
        None => get_config(format!("{}/config.json", env!("CARGO_MANIFEST_DIR")))
            .unwrap_or(SimulationConfig::default()),
    };

    let comparison = run_scenarios(&config)?;

    if options.json {
        let output = JsonOutput {
            verdict: comparison.verdict(),
            config: &config,
            comparison: &comparison,
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        report::print_report(&config, &comparison);
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Err(error) = run(parse_args(&args)) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
