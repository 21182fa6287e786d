//! These structs provide the CLI interface for the zdash CLI.

use crate::view::CardKind;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// zdash: A command-line dashboard for the Złotówka personal-finance service.
///
/// The program fetches your upcoming income and expense transactions from the
/// Złotówka backend and renders them as dashboard cards, caching and
/// deduplicating the underlying requests.
///
/// Run `zdash init` first to create the data directory and point the program
/// at your backend.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory and initialize the configuration file.
    ///
    /// Decide what directory you want to store configuration in and pass it
    /// as --dash-home (default: ~/.zlotowka-dash), and pass the base URL of
    /// your Złotówka backend as --backend-url.
    Init(InitArgs),
    /// Fetch and render a single dashboard card.
    Card(CardArgs),
    /// Fetch and render the whole dashboard: sidebar plus both cards.
    Dashboard(DashboardArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where zdash configuration is held.
    /// Defaults to ~/.zlotowka-dash
    #[arg(long, env = "ZLOTOWKA_DASH_HOME", default_value_t = default_dash_home())]
    dash_home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, dash_home: PathBuf) -> Self {
        Self {
            log_level,
            dash_home: dash_home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn dash_home(&self) -> &DisplayPath {
        &self.dash_home
    }
}

/// Args for the `zdash init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// The base URL of the Złotówka backend API, e.g.
    /// https://api.zlotowka.example/api/v1
    #[arg(long)]
    backend_url: String,

    /// A bearer token identifying you to the backend. Optional; without it
    /// the backend must accept anonymous requests.
    #[arg(long)]
    token: Option<String>,
}

impl InitArgs {
    pub fn new(backend_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            token,
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Args for the `zdash card` command.
#[derive(Debug, Parser, Clone)]
pub struct CardArgs {
    /// Which card to render: "next-income" or "next-expense"
    #[arg(value_enum)]
    kind: CardKind,
}

impl CardArgs {
    pub fn new(kind: CardKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }
}

/// Args for the `zdash dashboard` command.
#[derive(Debug, Parser, Clone)]
pub struct DashboardArgs {
    /// Savings-goal progress to show under the cards, from 0 to 1.
    #[arg(long)]
    progress: Option<f64>,
}

impl DashboardArgs {
    pub fn new(progress: Option<f64>) -> Self {
        Self { progress }
    }

    pub fn progress(&self) -> Option<f64> {
        self.progress
    }
}

fn default_dash_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join(".zlotowka-dash"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --dash-home or ZLOTOWKA_DASH_HOME instead of relying on the \
                default. If you continue using the program right now, you may have problems!",
            );
            PathBuf::from(".zlotowka-dash")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
