use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use vitrine::api::{self, ApiClient};
use vitrine::commands;
use vitrine::config::Settings;
use vitrine::session::SelectionSession;
use vitrine::ui::{shell, spinner::LoadingIndicator};

#[derive(Parser)]
#[command(
    name = "vitrine",
    author,
    version,
    about = "Select promotional products and send them to the store backend",
    long_about = r#"vitrine — search products, browse the promotions listing, pick the products to publish and send them to the store backend.

Running without a subcommand opens the interactive shell. The backend location is read from API_BASE_URL (and API_TOKEN when the backend requires one); both may live in a .env file.

Examples:
  1) Interactive session:
      vitrine
  2) Page through promotions:
      vitrine promotions --page 2 --filter arroz
  3) Send products found by a search:
      vitrine submit --query arroz 101 102
"#,
    after_help = "Use `vitrine <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell
    Shell,
    /// Show or edit the scan-timing configuration
    Config {
        #[command(subcommand)]
        sub: ConfigCommands,
    },
    /// List sectors known to the backend
    Sectors,
    /// Search products by free text
    Search { query: String },
    /// Show a page of promotional products
    #[command(long_about = "Load the promotions listing. Use `--page` for a 1-based page number or `--offset` for a raw paginator offset (multiples of the page size). `--filter` narrows the loaded page by product name; it does not search other pages.")]
    Promotions {
        #[arg(long, short = 'p', conflicts_with = "offset")]
        page: Option<u32>,
        #[arg(long)]
        offset: Option<u64>,
        #[arg(long, short = 'f')]
        filter: Option<String>,
    },
    /// Search, select the given ids among the results and send them
    Submit {
        /// Search text used to find the products
        #[arg(long, short = 'q')]
        query: String,
        /// Ids of the products to send
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Ask the backend to resynchronize one product
    Sync { id: String },
    /// Validate configuration and backend connectivity
    CheckConfig,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the configuration
    Show,
    /// Set fields (key=value) and save
    #[command(long_about = "Fetch the configuration, apply each key=value pair and save it. Values that parse as JSON (numbers, booleans, objects) keep that type; anything else is stored as text.")]
    Set {
        #[arg(required = true)]
        pairs: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    if cli.silent {
        api::set_silent(true);
    }

    let settings = Settings::from_env(cli.env_file.as_deref());
    tracing::debug!(base_url = %settings.api_base_url, rows = settings.rows_per_page, "settings loaded");

    let api = match ApiClient::from_settings(&settings) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(%e, "cannot build API client");
            eprintln!("{}: {}", yansi::Paint::new("Invalid configuration").red(), e);
            process::exit(1);
        }
    };

    let loading = if std::io::stderr().is_terminal() {
        LoadingIndicator::visible()
    } else {
        LoadingIndicator::hidden()
    };
    let mut session = SelectionSession::new(api.clone(), settings.rows_per_page).with_loading(loading);

    let ok = match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => match shell::run(session).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(%e, "shell terminated");
                eprintln!("{}: {}", yansi::Paint::new("Shell error").red(), e);
                false
            }
        },
        Commands::Config { sub } => match sub {
            ConfigCommands::Show => commands::config_show(&mut session).await,
            ConfigCommands::Set { pairs } => match commands::parse_pairs(&pairs) {
                Ok(pairs) => commands::config_set(&mut session, &pairs).await,
                Err(msg) => {
                    eprintln!("{}", yansi::Paint::new(msg).red());
                    false
                }
            },
        },
        Commands::Sectors => commands::sectors(&mut session).await,
        Commands::Search { query } => commands::search(&mut session, &query).await,
        Commands::Promotions { page, offset, filter } => {
            commands::promotions(&mut session, page, offset, filter.as_deref()).await
        }
        Commands::Submit { query, ids } => commands::submit(&mut session, &query, &ids).await,
        Commands::Sync { id } => commands::sync(&mut session, &id).await,
        Commands::CheckConfig => commands::check_config(&api).await,
    };

    if !ok {
        process::exit(1);
    }
}
