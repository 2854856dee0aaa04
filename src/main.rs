use clap::{Parser, Subcommand};
use oi_contribute::settings::{Overrides, Settings};
use oi_contribute::utils::setup_crypto_provider;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// Use jemalloc on musl x86_64 for better performance
#[cfg(all(target_env = "musl", target_arch = "x86_64"))]
#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser)]
#[command(
    name = "oi-contribute",
    about = "Opt-in sharing of local conversation history for model training",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\n",
        "Build Information:\n",
        "  Timestamp:         ", env!("VERGEN_BUILD_TIMESTAMP"), "\n",
        "  Target Triple:     ", env!("VERGEN_CARGO_TARGET_TRIPLE"), "\n",
        "\n",
        "Compiler:\n",
        "  Rustc Version:     ", env!("VERGEN_RUSTC_SEMVER"), "\n",
        "  Rustc Channel:     ", env!("VERGEN_RUSTC_CHANNEL"), "\n"
    ),
    disable_help_subcommand = true
)]
struct Cli {
    /// Consent cache file [default: $XDG_CACHE_HOME/open-interpreter/contribute.json]
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    cache_file: Option<PathBuf>,
    /// Directory holding past conversations as *.json files
    #[arg(long, global = true, value_hint = clap::ValueHint::DirPath)]
    history_dir: Option<PathBuf>,
    /// Profile that receives the future-contribution setting
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    profile: Option<PathBuf>,
    /// Contribution endpoint [env: OI_CONTRIBUTE_URL]
    #[arg(long, global = true)]
    endpoint: Option<String>,
    /// Version string sent along with contributions
    #[arg(long, global = true)]
    oi_version: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the launch-time consent flow.
    ///
    /// Without --contribute-conversation this shows the one-time announcement.
    /// With it, asks (once) whether to send past conversations and whether to
    /// contribute future ones.
    Launch {
        #[arg(long)]
        contribute_conversation: bool,
    },
    /// Send every past conversation without asking.
    SendPast,
    /// Send a single conversation file.
    ContributeFile {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,
    },
    /// List the conversations that would be contributed.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show which consent prompts have already been shown.
    Status {
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("OI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    setup_crypto_provider();

    let cli = Cli::parse();

    let overrides = Overrides {
        cache_file: cli.cache_file,
        history_dir: cli.history_dir,
        profile: cli.profile,
        endpoint: cli.endpoint,
        oi_version: cli.oi_version,
    };

    let result = match Settings::resolve(overrides) {
        Ok(settings) => match cli.command {
            Commands::Launch {
                contribute_conversation,
            } => oi_contribute::commands::launch::run(&settings, contribute_conversation).await,
            Commands::SendPast => oi_contribute::commands::send_past::run(&settings).await,
            Commands::ContributeFile { path } => {
                oi_contribute::commands::contribute_file::run(&settings, path).await
            }
            Commands::List { json } => oi_contribute::commands::list::run(&settings, json),
            Commands::Status { json } => oi_contribute::commands::status::run(&settings, json),
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
