use anyhow::{Context, Result};
use clap::Parser;
use servicemap_core::config::AnalyzerConfig;
use servicemap_core::diagnostics::Diagnostics;
use servicemap_core::logging::{init_logging, parse_level, LoggingConfig, LOG_FILE_NAME};
use servicemap_core::output::{prepare_output_dir, save_data};
use servicemap_core::pipeline::{analyze, app_name};
use servicemap_core::services::{render_tree, ServiceTree};
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn, Level};

/// Discover the services of a Go code base and extract its declarations
#[derive(Parser, Debug)]
#[command(name = "servicemap", version, about)]
struct CliArgs {
    /// Root of the application source
    #[arg(short = 'p', long = "path")]
    path: PathBuf,

    /// Output directory; results go to <output>/<app>/
    #[arg(short = 'o', long = "output", default_value = "./data/go/")]
    output: PathBuf,

    /// Logging level: default, trace, debug, info, warning, error, fatal, panic
    #[arg(short = 'l', long = "log-level", default_value = "default")]
    log_level: String,

    /// Print the scanned directory tree and exit
    #[arg(short = 's', long = "print-tree")]
    print_tree: bool,

    /// Treat the whole root as a single service
    #[arg(short = 'm', long = "monolithic")]
    monolithic: bool,

    /// Fail a service on any file with syntax errors instead of keeping
    /// the declarations that could be recovered
    #[arg(long = "strict-syntax")]
    strict_syntax: bool,
}

fn main() {
    let args = CliArgs::parse();

    if let Err(err) = run(&args) {
        error!("{:#}", err);
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let (level, level_warning) = match parse_level(&args.log_level) {
        Ok(level) => (level, None),
        Err(message) => (Level::INFO, Some(message)),
    };

    if args.print_tree {
        init_logging(&LoggingConfig::with_level(level))?;
        if let Some(message) = level_warning {
            warn!("{}", message);
        }
        let tree = ServiceTree::build(&args.path, &mut Diagnostics::new())
            .with_context(|| format!("Failed to scan {}", args.path.display()))?;
        print!("{}", render_tree(&tree));
        return Ok(());
    }

    let app = app_name(&args.path);
    let output_dir = prepare_output_dir(&args.output, &app)?;
    init_logging(&LoggingConfig::with_level(level).with_log_file(output_dir.join(LOG_FILE_NAME)))?;
    if let Some(message) = level_warning {
        warn!("{}", message);
    }

    info!("Analyzing {} ({})", args.path.display(), app);
    let config = AnalyzerConfig::default()
        .with_monolith(args.monolithic)
        .with_strict_syntax(args.strict_syntax);
    let report = analyze(&args.path, &config)
        .with_context(|| format!("Failed to analyze {}", args.path.display()))?;

    info!("Services: {}", report.services.len());
    info!("Failed services: {}", report.failed_services());
    info!("Entities: {}", report.entities().count());
    info!("Executables: {}", report.executables().count());
    info!("Diagnostics: {}", report.diagnostics.len());

    save_data(&report, &output_dir)?;
    Ok(())
}
