//! Diagnostic CLI entry point.
//!
//! Runs the startup checks standalone against an unpacked code bundle, the
//! way the extension would at bootstrap. Useful for validating a deployment
//! locally before it ever reaches the platform.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lambda_handler_check::api::RegistrationResponse;
use lambda_handler_check::checks::{run_startup_checks, HandlerCheck};
use lambda_handler_check::config::Configuration;
use lambda_handler_check::runtime::{self, Runtime, DEFAULT_LANG_BIN};

/// Validate that a Lambda function's declared handler resolves to a file in
/// the deployment bundle.
#[derive(Debug, Parser)]
#[command(name = "lambda-handler-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Deployment root containing the unpacked code bundle
    #[arg(long, default_value = lambda_handler_check::checks::DEFAULT_TASK_ROOT)]
    task_root: String,

    /// Runtime to validate against (node, python); detected from the
    /// language installation when omitted
    #[arg(long)]
    runtime: Option<String>,

    /// Language installation directory used for runtime detection
    #[arg(long, default_value = DEFAULT_LANG_BIN)]
    lang_bin: PathBuf,

    /// Handler identifier to validate (defaults to what the platform set)
    #[arg(long, env = "_HANDLER")]
    handler: Option<String>,

    /// Disable environment-based bypasses so the real filesystem probe runs
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("lambda_handler_check=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("lambda_handler_check=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("handler check starting with args: {:?}", cli);

    let runtime = match &cli.runtime {
        Some(tag) => match tag.parse::<Runtime>() {
            Ok(rt) => Some(runtime::config_for(rt)),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
        None => runtime::detect(&cli.lang_bin),
    };

    if runtime.is_none() {
        println!("unknown runtime, nothing to validate");
        return ExitCode::SUCCESS;
    }

    let mut conf = Configuration::from_env();
    conf.testing_override = cli.strict;

    let reg = RegistrationResponse {
        handler: cli.handler.clone().unwrap_or_default(),
        ..RegistrationResponse::default()
    };

    let handler_check = HandlerCheck::with_task_root(cli.task_root.clone());

    match run_startup_checks(&[&handler_check], &conf, &reg, runtime) {
        Ok(()) => {
            println!("handler check passed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
