use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, ScreenKind};

#[derive(Debug, Parser)]
#[command(name = "flowlab", version, about = "Cold, state and broadcast streams side by side")]
pub struct Cli {
    /// Path to the config file (default: ~/.config/flowlab/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Screen shown at startup
    #[arg(long, value_enum)]
    pub screen: Option<ScreenArg>,

    /// Run the view model's collectors without the terminal UI, logging to stderr
    #[arg(long)]
    pub headless: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScreenArg {
    Countdown,
    Values,
}

impl From<ScreenArg> for ScreenKind {
    fn from(arg: ScreenArg) -> Self {
        match arg {
            ScreenArg::Countdown => ScreenKind::Countdown,
            ScreenArg::Values => ScreenKind::Values,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(screen) = self.screen {
            config.ui.start_screen = screen.into();
        }
    }
}
