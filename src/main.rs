//! reliant CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use reliant::cli::{Cli, CommandDispatcher, GlobalOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so they never mix with the report. Level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("reliant=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reliant=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("reliant starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let dispatcher = CommandDispatcher::new(
        project_root,
        GlobalOptions {
            config: cli.config.clone(),
            ascii: cli.ascii,
        },
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = dispatcher.dispatch(&cli, &mut out);
    let _ = out.flush();

    match result {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
