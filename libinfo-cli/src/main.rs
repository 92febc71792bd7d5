use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "libinfo-cli")]
#[command(about = "Inspect the identity descriptors of bundled library components")]
#[command(version)]
struct Cli {
    /// Path to config file (default: ~/.config/libinfo/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the about descriptor for a library component
    About {
        /// Library component to describe
        #[arg(long, value_enum)]
        library: LibraryKind,

        /// Package namespace of the hosting application (host-bound components)
        #[arg(long)]
        package: Option<String>,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List descriptors for every constructible library component
    List {
        /// Package namespace of the hosting application (host-bound components)
        #[arg(long)]
        package: Option<String>,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LibraryKind {
    Kotlin,
    Android,
}

impl LibraryKind {
    fn as_str(self) -> &'static str {
        match self {
            LibraryKind::Kotlin => "kotlin",
            LibraryKind::Android => "android",
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<u8> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::About {
            library,
            package,
            json,
        } => commands::about::run(library, package.as_deref(), &config, json),

        Commands::List { package, json } => {
            commands::list::run(package.as_deref(), &config, json)
        }
    }
}
