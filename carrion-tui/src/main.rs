mod config;
mod error;
mod library;
mod paths;
mod windows;

use std::fs::{self, File};
use std::process::ExitCode;

use simplelog::{LevelFilter, WriteLogger};
use termnav::{Terminal, Theme};

use config::AppConfig;
use error::Result;
use library::MemoryLibrary;
use windows::Controller;

/// Log to `latest.log` in the cache directory, archiving the previous one.
fn init_logging(level: LevelFilter) {
    let Some(log_file) = paths::log_file() else {
        eprintln!("No cache directory found, logging disabled");
        return;
    };

    paths::rotate_logs();
    if let Some(dir) = log_file.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create log directory {}: {}", dir.display(), e);
            return;
        }
    }

    match File::create(&log_file) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, simplelog::Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", log_file.display(), e),
    }
}

fn run(config: AppConfig) -> Result<()> {
    let mut terminal = Terminal::new()?;
    let size = terminal.size();
    let mut library = MemoryLibrary::demo();

    let mut controller = Controller::new(size, Theme::default(), config.keymaps);
    log::debug!("{} windows at {}x{}", controller.window_count(), size.0, size.1);
    let (screen, keyboard) = terminal.parts();
    controller.run(screen, keyboard, &mut library)
}

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.log_level);
    log::info!("carrion-manager {} starting", env!("CARGO_PKG_VERSION"));

    // The terminal is restored by the time run returns
    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
