use crate::cli::{Cli, Commands};
use crossterm::{
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use quitpath::{config, habits, logging, ui};
use std::io;
use std::process;

pub fn run(cli: Cli) {
    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::Triggers => handle_triggers(),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {:#}", anyhow::Error::from(e));
            eprintln!("Using built-in defaults.");
            config::Config::default()
        }
    };

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    install_panic_hook();

    // Launch TUI (default behavior)
    let result = match ui::run_ui(&config) {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "ui failed");
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    if cli.print_results {
        print_results(result.as_ref());
    }
}

// Restore the terminal before the default hook prints the panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));
}

fn print_results(result: Option<&habits::SmokingHabits>) {
    let Some(habits) = result else {
        eprintln!("Quiz was not completed; no results to print.");
        process::exit(2);
    };

    match serde_json::to_string_pretty(habits) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: failed to serialize results: {}", e);
            process::exit(1);
        }
    }
}

fn handle_triggers() {
    for (i, trigger) in habits::TRIGGERS.iter().enumerate() {
        println!("{}. {}", i + 1, trigger);
    }
}

fn handle_init_config() {
    match config::Config::load() {
        Ok(cfg) => {
            match config::Config::config_path() {
                Ok(path) if config::Config::exists() => {
                    println!("Config loaded successfully from {}", path.display());
                    println!("{:#?}", cfg);
                    return;
                }
                Ok(_) => println!("No config file found, creating default config..."),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("Config invalid: {:#}", anyhow::Error::from(e));
            eprintln!("Fix or remove the file, then run init-config again.");
            process::exit(1);
        }
    }

    match config::Config::default().save() {
        Ok(path) => println!("Default config saved to {}", path.display()),
        Err(err) => {
            eprintln!("Failed to save default config: {:#}", err);
            process::exit(1);
        }
    }
}
