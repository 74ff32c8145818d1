//! Housing Dashboard
//!
//! Serves the dashboard over HTTP and offers a few commands for inspecting
//! the dataset and the charts from the terminal.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use housing_dashboard::api::{serve, AppState};
use housing_dashboard::catalog::ClickCounter;
use housing_dashboard::config::{generate_default_config, Config, LogFormat};
use housing_dashboard::dashboard::Dashboard;
use housing_dashboard::dataset::DatasetLoader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "housing-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard for the California housing dataset")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dataset CSV, overrides the configured path
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web dashboard (default)
    Serve {
        /// Port to listen on, overrides the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the numeric columns and map styles
    Catalog,

    /// Print the chart shown after a number of clicks as JSON
    Render {
        #[arg(long, value_enum)]
        chart: ChartKind,
        /// Number of button presses
        #[arg(long, default_value = "0")]
        clicks: u64,
    },

    /// Walk one button through a full cycle of its options
    Tour {
        #[arg(long, value_enum)]
        chart: ChartKind,
    },

    /// Print a default configuration file
    InitConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChartKind {
    Histogram,
    Map,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::InitConfig) = cli.command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    // The configured subscriber depends on the config, so anything logged
    // while loading it goes to a plain stderr subscriber.
    let config = tracing::subscriber::with_default(bootstrap_subscriber(std::io::stderr), || {
        load_config(&cli)
    })?;

    init_logging(&config, cli.debug);

    tracing::info!("Housing dashboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {:?}", config.dataset.path);

    let report = DatasetLoader::new()
        .load(&config.dataset.path)
        .with_context(|| format!("loading dataset {}", config.dataset.path.display()))?;
    for error in &report.errors {
        tracing::debug!("{}", error);
    }
    let dashboard = Arc::new(Dashboard::new(Arc::new(report.dataset)));

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => {
            let mut api_config = config.api.clone();
            if let Some(port) = port {
                api_config.port = port;
            }

            let state = AppState::new(dashboard, api_config.clone())
                .with_page_size(config.dataset.page_size);
            serve(state, &api_config).await?;
        }
        Commands::Catalog => {
            println!("Numeric columns:");
            for (i, column) in dashboard.columns().iter().enumerate() {
                println!("  {:>2}  {}", i, column);
            }
            println!("Map styles:");
            for (i, style) in dashboard.styles().iter().enumerate() {
                println!("  {:>2}  {}", i, style);
            }
        }
        Commands::Render { chart, clicks } => {
            let spec = match chart {
                ChartKind::Histogram => dashboard.on_histogram_click(clicks)?,
                ChartKind::Map => dashboard.on_map_click(clicks)?,
            };
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
        Commands::Tour { chart } => {
            let period = match chart {
                ChartKind::Histogram => dashboard.columns().len(),
                ChartKind::Map => dashboard.styles().len(),
            };

            let mut counter = ClickCounter::new();
            for _ in 0..=period {
                let selection = match chart {
                    ChartKind::Histogram => dashboard.active_column(counter.value())?,
                    ChartKind::Map => dashboard.active_style(counter.value())?,
                };
                println!("{:>4} clicks -> {}", counter.value(), selection);
                counter.increment();
            }
        }
        Commands::InitConfig => {}
    }

    Ok(())
}

/// Load the config file (or the default locations) and apply CLI overrides
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(path) = &cli.dataset {
        config.dataset.path = path.clone();
    }
    Ok(config)
}

/// Subscriber used until the configured one is installed
fn bootstrap_subscriber<W>(make_writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "housing_dashboard=info".into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .with_ansi(false)
        .finish()
}

/// Install the tracing subscriber for the configured format
fn init_logging(config: &Config, debug: bool) {
    let level = if debug {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("housing_dashboard={level},tower_http={level}").into()
    });

    let json = config.logging.format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}
