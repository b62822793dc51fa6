use anyhow::{Context, Result};
use clap::Parser;

use chefmenu::args::{Cli, Command};
use chefmenu::config::{seeded_menu, Config};
use chefmenu::logging::init_tracing;
use chefmenu::menu::MenuStateMachine;
use chefmenu::report::render_report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from '{}'", config_path.display()))?;

    let mut machine = if cli.no_seed {
        MenuStateMachine::new()
    } else {
        seeded_menu(&config.seed).context("Failed to load seed menu")?
    };

    match cli.command {
        Some(Command::Print { course }) => {
            machine.set_filter(course.into());
            print!("{}", render_report(&machine, &config.ui));
        }
        None => {
            init_tracing(&config.logging, cli.log_file.as_deref())
                .context("Failed to initialize logging")?;
            chefmenu::ui::run(machine, config.ui).context("Terminal UI failed")?;
        }
    }

    Ok(())
}
