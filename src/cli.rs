use std::{
    io,
    path::{Path, PathBuf},
};

mod init;
mod menu;
mod rooms;
mod terminal;

use clap::ArgAction;
use hotel::{Config, Registry};
use menu::Menu;
use terminal::Palette;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// A configuration file listing the hotel's rooms.
    ///
    /// Without one, rooms 101 (Single) and 102 (Double) are available.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or(Command::Menu)
            .run(self.config.as_deref())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout belongs to the menu
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Run the interactive front-desk menu (default)
    Menu,

    /// List the configured rooms and exit
    Rooms(rooms::Command),

    /// Write a configuration file with the default rooms
    Init(init::Command),
}

impl Command {
    fn run(self, config: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Self::Menu => run_menu(config)?,
            Self::Rooms(command) => command.run(&load_registry(config)?)?,
            Self::Init(command) => command.run()?,
        }
        Ok(())
    }
}

#[instrument]
fn run_menu(config: Option<&Path>) -> anyhow::Result<()> {
    let registry = load_registry(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(registry, stdin.lock(), stdout.lock())
        .with_palette(Palette::detect())
        .run()?;

    Ok(())
}

fn load_registry(path: Option<&Path>) -> anyhow::Result<Registry> {
    let config = match path {
        Some(path) => Config::load(path).map_err(|e| anyhow::anyhow!("{e}"))?,
        None => Config::default(),
    };
    Ok(Registry::from_config(&config)?)
}
