//! Command-line interface for dictgen
//! This binary regenerates the JavaScript dictionary constants from word list files.
//!
//! Usage:
//!   dictgen `<pipeline>` [--input `<path>`] [--output `<path>`]   - Run a named pipeline
//!   dictgen --list-pipelines                                    - List all available pipelines

use clap::{Arg, ArgAction, Command};
use dictgen::pipeline::{PipelineError, PipelineExecutor};
use std::path::PathBuf;

fn main() {
    let matches = Command::new("dictgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates JavaScript dictionary constants from word lists")
        .arg_required_else_help(true)
        .arg(
            Arg::new("pipeline")
                .help("Pipeline name (e.g., 'dictionary', 'validation')")
                .required_unless_present("list-pipelines")
                .index(1),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Word list file (default: the pipeline's configured input)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Generated file (default: the pipeline's configured output)"),
        )
        .arg(
            Arg::new("list-pipelines")
                .long("list-pipelines")
                .help("List available pipelines")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-pipelines") {
        handle_list_pipelines_command();
        return;
    }

    let pipeline = matches
        .get_one::<String>("pipeline")
        .expect("pipeline is required unless listing pipelines");
    let input = matches.get_one::<String>("input");
    let output = matches.get_one::<String>("output");
    handle_run_command(pipeline, input, output);
}

/// Handle the run command
fn handle_run_command(pipeline: &str, input: Option<&String>, output: Option<&String>) {
    let executor = PipelineExecutor::new();

    let result = match executor.configs().get(pipeline) {
        Some(config) => {
            let mut config = config.clone();
            if let Some(path) = input {
                config.input = PathBuf::from(path);
            }
            if let Some(path) = output {
                config.output = PathBuf::from(path);
            }
            executor.run_config(&config)
        }
        None => Err(PipelineError::ConfigNotFound(pipeline.to_string())),
    };

    // Failures report on stdout and the process still exits normally
    match result {
        Ok(report) => println!("{}", report.success_message()),
        Err(e) => println!("Error: {}", e),
    }
}

/// Handle the list-pipelines command
fn handle_list_pipelines_command() {
    let executor = PipelineExecutor::new();
    println!("Available pipelines:\n");

    for config in executor.configs().list_configs() {
        println!("  {}", config.name);
        println!("    {}", config.description);
        println!();
    }
}
