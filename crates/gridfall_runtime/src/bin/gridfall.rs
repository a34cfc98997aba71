//! Gridfall CLI entry point.

use std::env;
use std::process::ExitCode;

use gridfall_runtime::{Game, GameConfig};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    dev_mode: bool,
    plain: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut config = CliConfig::default();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--dev" => config.dev_mode = true,
            "--plain" => config.plain = true,
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(config)
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }
    if config.show_version {
        println!("gridfall {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut game = Game::new(GameConfig {
        dev_mode: config.dev_mode,
        plain_output: config.plain,
    })?;
    game.run()?;

    println!("\nGoodbye!");
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mGridfall\x1b[0m - a text adventure

\x1b[1mUSAGE:\x1b[0m
    gridfall [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    --dev            Start with developer mode enabled
    --plain          Disable typewriter pacing and delays

\x1b[1mIN-GAME:\x1b[0m
    help             List available commands
    help {{name}}      Show one command's help text
    Ctrl+D           Quit"
    );
}
