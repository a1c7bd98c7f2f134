//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler,
//! wires the console collaborators and runs one flatten.

use anyhow::{Context, Result};
use std::env;
use std::process::ExitCode;
use tracing::{debug, info};

use flatten_move::cli::Args;
use flatten_move::config::{load_config, CONFIG_ENV};
use flatten_move::host::{ArgSelection, ConsoleNotifier, ConsolePrompt, FileSelection, FixedPrompt};
use flatten_move::output as out;
use flatten_move::{
    default_config_path, run_flatten, shutdown, Config, DestinationPrompt, FlattenContext,
    LogLevel, Outcome, SelectionClear, SelectionSource,
};

use crate::logging::init_tracing;

/// Exit status for runs rejected as a user-input problem.
const EXIT_REJECTED: u8 = 2;

fn print_config() {
    if let Some(explicit) = env::var_os(CONFIG_ENV) {
        out::print_info(&format!(
            "Using {CONFIG_ENV} (explicit):\n  {}",
            explicit.to_string_lossy()
        ));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default flatten_move config path:\n  {}", p.display()));
            if !p.exists() {
                out::print_info("No config file exists there; built-in defaults are used.");
            }
        }
        None => out::print_error("Could not determine a default config path"),
    }
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    if args.print_config {
        print_config();
        return Ok(ExitCode::SUCCESS);
    }

    // CLI flags win over config.xml values.
    let (cfg_path, mut cfg) = match load_config()? {
        Some((path, cfg)) => (Some(path), cfg),
        None => (None, Config::default()),
    };
    args.apply_overrides(&mut cfg);

    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json)
        .context("initialize logging")?;

    ctrlc::set_handler(|| {
        shutdown::request();
        out::print_warn("Interrupt received; a pending prompt is aborted, a running flatten completes.");
    })
    .context("install Ctrl-C handler")?;

    debug!(?args, config = ?cfg_path, "starting flatten_move");

    let working_dir = match &args.working_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("determine current directory")?,
    };

    let file_selection;
    let arg_selection;
    let selection: &dyn SelectionSource;
    let clear: &dyn SelectionClear;
    match &args.selection_file {
        Some(path) => {
            file_selection = FileSelection::new(path);
            selection = &file_selection;
            clear = &file_selection;
        }
        None => {
            arg_selection = ArgSelection::new(args.resolved_paths());
            selection = &arg_selection;
            clear = &arg_selection;
        }
    }

    let console_prompt;
    let fixed_prompt;
    let prompt: &dyn DestinationPrompt = if cfg.prompt {
        console_prompt = ConsolePrompt::new(cfg.destination.clone());
        &console_prompt
    } else {
        fixed_prompt = FixedPrompt::new(cfg.destination.clone());
        &fixed_prompt
    };

    let notifier = ConsoleNotifier::new(cfg.log_level == LogLevel::Quiet);
    let ctx = FlattenContext {
        selection,
        prompt,
        notifier: &notifier,
        clear,
        working_dir,
        options: cfg.flatten_options(),
    };

    // Failures were already surfaced through the notifier; only the exit
    // status is left to decide.
    let code = match run_flatten(&ctx) {
        Ok(Outcome::Completed(report)) => {
            info!(moved = report.moved, collisions = report.collisions.len(), "Run completed");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Aborted) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected(_)) => ExitCode::from(EXIT_REJECTED),
        Err(_) => ExitCode::FAILURE,
    };
    Ok(code)
}
