mod config;
mod error;
mod paths;
mod render;

use std::fs::{self, File};

use regform::form::FormController;
use regform::messages::DefaultMessages;
use regform::validation::FormSchema;
use simplelog::{Config, WriteLogger};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::render::Terminal;

fn init_logging(config: &CliConfig) -> Result<(), CliError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(config.level_filter()?, Config::default(), log_file)?;
    Ok(())
}

async fn run() -> Result<(), CliError> {
    let config = CliConfig::load(paths::config_file().as_deref())?;
    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!("Starting registration form");

    let form = FormController::new(FormSchema::registration(), config.form_config())?;
    let mut terminal = Terminal::new(form, DefaultMessages, tokio::io::stdin());
    terminal.run().await?;

    log::info!("Registration form closed");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
