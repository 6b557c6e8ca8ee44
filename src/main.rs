use clap::{CommandFactory, Parser};
use colored::*;
use env_logger::{Builder, Env, Target};
use log::{info, warn};
use std::fs;
use std::time::Instant;

use kwscan::cli::{Cli, Commands, OutputFormat};
use kwscan::config::Config;
use kwscan::engine::{run_search, SearchOutcome, SearchRequest};
use kwscan::error::{KwscanError, Result};
use kwscan::progress::ProgressReporter;
use kwscan::{export, output};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;

    let start_time = Instant::now();

    match &cli.command {
        Commands::Search {
            keyword,
            path,
            extensions,
            output: destination,
            format,
            no_progress,
        } => {
            let config = match Config::load() {
                Ok(config) => config,
                Err(err) => {
                    warn!("Ignoring config file: {err:#}");
                    Config::default()
                }
            };

            let request = SearchRequest {
                root: path.clone(),
                keyword: keyword.clone(),
                extensions: extensions
                    .clone()
                    .unwrap_or_else(|| config.search.default_extensions.clone()),
            };
            info!(
                "Searching for '{}' under {}",
                request.keyword,
                request.root.display()
            );

            let reporter = ProgressReporter::new(!*no_progress && config.display.progress);
            let outcome = run_search(&request, |event| reporter.update(event))?;
            reporter.finish();

            match &outcome {
                SearchOutcome::NoFilesFound => {
                    println!("{}", "No files found with the selected extensions.".yellow());
                }
                outcome => {
                    let records = outcome.records();
                    if records.is_empty() {
                        println!("{}", "No matches found.".yellow());
                    } else {
                        match format {
                            OutputFormat::Json => {
                                println!("{}", output::render_json(&request, records));
                            }
                            OutputFormat::Text => {
                                println!(
                                    "\n{} {} {}",
                                    "Found".green(),
                                    records.len(),
                                    "matches:".green()
                                );
                                for line in output::render_text(records) {
                                    println!("{line}");
                                }
                            }
                        }
                    }

                    if let Some(destination) = destination {
                        export::export(destination, &output::render_text(records))?;
                        println!(
                            "{}",
                            format!("Results saved to {}", destination.display()).green()
                        );
                    }
                }
            }

            if config.display.show_timing {
                println!(
                    "{}",
                    format!("Search completed in {} ms", start_time.elapsed().as_millis())
                        .italic()
                );
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "kwscan", &mut std::io::stdout());
        }
    }

    info!(
        "Application finished. Total elapsed time: {:.2?}",
        start_time.elapsed()
    );
    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                fs::create_dir_all(parent_dir).map_err(KwscanError::Io)?;
            }
        }
        let log_file = fs::File::create(log_path).map_err(KwscanError::Io)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| KwscanError::Other(e.to_string()))?;
    Ok(())
}
