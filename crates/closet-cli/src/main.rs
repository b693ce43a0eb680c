use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use closet_core::outfit::rules;
use closet_core::{
    load_closet_dir, ClosetError, Config, OutfitGenerator, OutfitRequest, Result,
};

mod args;
mod render;
mod session;

use args::{Cli, Commands, ConfigAction, Shell};
use session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Session { dir, seed }) => handle_session(&base_dir, dir.as_deref(), seed),
        Some(Commands::Suggest {
            occasion,
            weather,
            dir,
            seed,
            json,
        }) => handle_suggest(&base_dir, &occasion, &weather, &dir, seed, json),
        Some(Commands::Rules { json }) => handle_rules(json),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "closet=debug,closet_core=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_env("CLOSET_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "closet", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("CLOSET_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".closet"))
        .unwrap_or_else(|| PathBuf::from(".closet"))
}

fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn handle_session(base_dir: &Path, dir: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let config = Config::load(base_dir)?;
    let mut store = config.new_store();

    if let Some(dir) = dir {
        let summary = load_closet_dir(&mut store, dir, &config)?;
        println!(
            "{} {} item(s) from {}",
            "Loaded:".green(),
            summary.added,
            dir.display()
        );
    }

    let mut session = Session::new(config, store, seed);
    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())
}

fn handle_suggest(
    base_dir: &Path,
    occasion: &str,
    weather: &str,
    dir: &Path,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = Config::load(base_dir)?;
    let mut store = config.new_store();
    let summary = load_closet_dir(&mut store, dir, &config)?;
    tracing::debug!(items = summary.added, dir = %dir.display(), "closet loaded");

    let request = OutfitRequest::parse(occasion, weather);
    let result = OutfitGenerator::new(&store).generate_with(&request, &mut new_rng(seed));

    if json {
        println!("{}", to_json(&result)?);
    } else {
        print!("{}", render::outfit_result(&result));
    }
    Ok(())
}

fn handle_rules(json: bool) -> Result<()> {
    let rules = rules();
    if json {
        println!("{}", to_json(&rules)?);
    } else {
        print!("{}", render::rules(&rules));
    }
    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(ClosetError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
