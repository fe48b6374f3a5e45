mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use landing_kit_core::Layout;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "landing-kit")]
#[command(version, about = "Static landing page generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Create a new landing page project with a commented page.toml
    Init {
        /// Project directory (created if missing)
        path: PathBuf,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Navigation layout: top-navbar, left-sidebar or right-sidebar
        #[arg(long)]
        layout: Option<Layout>,
    },

    /// Check page configuration
    Validate {
        /// Project directory containing page.toml or page.json
        path: PathBuf,
    },

    /// Preview the page locally with hot reload
    Preview {
        /// Project directory containing page.toml or page.json
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Export the static site
    Build {
        /// Project directory containing page.toml or page.json
        path: PathBuf,

        /// Output directory for generated files
        #[arg(short, long)]
        output: PathBuf,

        /// Also bundle the output into a zip archive
        #[arg(long)]
        zip: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default filter
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "landing_kit=info,landing_kit_generator=info,landing_kit_validator=info,tower_http=info"
            .into()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Init {
            path,
            title,
            layout,
        } => commands::init::run(path, title, layout).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Preview { path, port } => commands::preview::run(path, port).await,
        Command::Build { path, output, zip } => commands::build::run(path, output, zip).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "landing-kit", &mut io::stdout());
            Ok(())
        }
    }
}
