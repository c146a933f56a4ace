use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use sp_estimate::config::LoadedConfig;
use sp_estimate::scoring::EstimateResult;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_OUTPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer questions about each slice and get an estimate (default if no subcommand)
    Ask,
    /// Estimate a task described in a JSON or YAML file
    Score {
        /// Path to the task file (slices, hasTest, isRefactor)
        task: PathBuf,
    },
    /// Write the built-in defaults to a config file for tuning
    Init {
        /// Where to write the config (defaults to ./.spconfig.json)
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Config,
}

#[derive(Parser, Debug)]
#[command(name = "sp-estimate")]
#[command(about = "Estimate story points from architectural slices", long_about = None)]
#[command(version)]
struct Cli {
    /// Print the per-slice breakdown and diagnostics
    #[arg(short, long, global = true, visible_alias = "report")]
    verbose: bool,

    /// Path to config override file (defaults to ./.spconfig.json, then ~/.config/sp-estimate/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print the result and breakdown as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Ask);
    let config_path = cli.config.map(PathBuf::from);
    let start_time = Instant::now();

    let (config, task) = match command {
        Commands::Init { path, force } => run_init(path, force),
        Commands::Config => {
            let LoadedConfig { config, source } = load_effective_config(config_path, cli.verbose);
            let target = source.unwrap_or_else(|| PathBuf::from("config.yaml"));
            match sp_estimate::config::render_config(&config, &target) {
                Ok(text) => print!("{}", text),
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Commands::Score { task } => {
            let loaded = load_effective_config(config_path, cli.verbose);
            match sp_estimate::config::load_task(&task) {
                Ok(t) => (loaded.config, t),
                Err(e) => {
                    eprintln!("Task error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
        Commands::Ask => {
            // Fail on a broken config before asking any questions
            let loaded = load_effective_config(config_path, cli.verbose);
            let stdin = std::io::stdin();
            let mut prompter = sp_estimate::interview::Prompter::new(stdin.lock(), std::io::stdout());
            match sp_estimate::interview::run_interview(&mut prompter) {
                Ok(t) => (loaded.config, t),
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
    };

    if cli.verbose {
        eprintln!("Estimating {} slices", task.slices.len());
    }

    for warning in sp_estimate::scoring::validate_task(&task) {
        eprintln!("Warning: {}", warning);
    }

    let result = task.estimate(&config);
    print_result(&result, cli.verbose, cli.json);

    if cli.verbose {
        eprintln!();
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Write the defaults to `path` (or ./.spconfig.json) and exit.
fn run_init(path: Option<PathBuf>, force: bool) -> ! {
    let path = path.unwrap_or_else(|| PathBuf::from(sp_estimate::config::LOCAL_CONFIG_FILE));
    if let Err(e) = sp_estimate::config::write_default_config(&path, force) {
        eprintln!("Config error: {:#}", e);
        std::process::exit(EXIT_CONFIG);
    }
    println!("Config written to {}", path.display());
    std::process::exit(EXIT_SUCCESS);
}

/// Load and validate the effective config, exiting with EXIT_CONFIG on failure.
fn load_effective_config(path: Option<PathBuf>, verbose: bool) -> LoadedConfig {
    let loaded = match sp_estimate::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if verbose {
        match &loaded.source {
            Some(path) => eprintln!("Loaded config overrides from {}", path.display()),
            None => eprintln!("No config override found, using defaults"),
        }
    }

    if let Err(errors) = sp_estimate::scoring::validate_config(&loaded.config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    loaded
}

fn print_result(result: &EstimateResult, verbose: bool, json: bool) {
    if json {
        match sp_estimate::output::format_json(result) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_OUTPUT);
            }
        }
        return;
    }

    let use_colors = sp_estimate::output::should_use_colors();

    if verbose {
        println!();
        println!("{}", sp_estimate::output::format_report(result, use_colors));
    }

    println!();
    println!(
        "{}",
        sp_estimate::output::format_story_points(result.story_points, use_colors)
    );
}
