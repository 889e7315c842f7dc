//! # NumPeek Host Daemon
//!
//! Main entry point for the scripted number popup host.

use numpeekd::{load_settings, HostRuntime, HostRuntimeConfig};
use popup_settings::DisplayMode;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::process;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

struct CliOptions {
    config: HostRuntimeConfig,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("numpeekd");

    let options = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        print_usage(program);
        process::exit(1);
    });

    let level = if options.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    let mut config = options.config;
    if config.script.is_none() {
        match io::read_to_string(io::stdin()) {
            Ok(text) => config.script = Some(text),
            Err(e) => {
                eprintln!("Failed to read script from stdin: {}", e);
                process::exit(1);
            }
        }
    }

    let mut runtime = HostRuntime::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to create runtime: {}", e);
        process::exit(1);
    });

    if let Err(e) = runtime.run() {
        eprintln!("Runtime error: {}", e);
        process::exit(1);
    }

    println!("{}", runtime.transcript_text());
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut config = HostRuntimeConfig::default();
    let mut mode = None;
    let mut verbose = false;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --config".to_string());
                }
                config.settings = load_settings(Path::new(&args[i])).map_err(|e| e.to_string())?;
            }
            "--script" | "-s" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --script".to_string());
                }
                let script_text = fs::read_to_string(&args[i])
                    .map_err(|e| format!("Failed to read script file: {}", e))?;
                config.script = Some(script_text);
            }
            "--mode" | "-m" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --mode".to_string());
                }
                mode = Some(
                    DisplayMode::from_name(&args[i])
                        .ok_or_else(|| format!("Invalid mode: {}", args[i]))?,
                );
            }
            "--max-steps" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --max-steps".to_string());
                }
                config.max_steps = args[i]
                    .parse()
                    .map_err(|_| format!("Invalid max-steps value: {}", args[i]))?;
            }
            "--verbose" | "-v" => {
                verbose = true;
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                return Err(format!("Unknown option: {}", other));
            }
        }
        i += 1;
    }

    // The command line wins over the settings file
    if let Some(mode) = mode {
        config.settings.display_mode = mode;
    }

    Ok(CliOptions { config, verbose })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>      Settings overrides (JSON)");
    eprintln!("  -s, --script <FILE>      Event script (default: stdin)");
    eprintln!("  -m, --mode <MODE>        Display mode: basic, extended or tabled");
    eprintln!("  --max-steps <N>          Maximum events to run (0 = unlimited)");
    eprintln!("  -v, --verbose            Log popup decisions to stderr");
    eprintln!("  -h, --help               Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --script demos/toggle.npk", program);
    eprintln!("  {} --mode extended --config settings.json < events.npk", program);
}
