use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use txlens::{
    RowContext, RowLayout, TxType, classify,
    config::AppConfig,
    domain::AssetType,
    filters::{TxPageTab, tx_page_dropdown_fields},
    format_rows,
    overview::StakingOverview,
    snapshot::WalletSnapshot,
    widgets::row_lines,
};

// txlens version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// txlens - classify and format wallet transactions
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rows of every transaction in a wallet snapshot
    Rows {
        /// Path to a wallet snapshot JSON file
        snapshot: PathBuf,
        /// Row layout (defaults to the configured layout)
        #[arg(short, long, value_enum)]
        layout: Option<LayoutArg>,
        /// Print rows as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Count tickets per lifecycle stage in a wallet snapshot
    Overview {
        /// Path to a wallet snapshot JSON file
        snapshot: PathBuf,
    },
    /// List the transaction filter dropdown for an asset and tab
    Filters {
        /// Asset ticker (btc, dcr, ltc)
        #[arg(short, long, value_parser = parse_asset)]
        asset: AssetType,
        /// Transactions page tab index (0 activity, 1 staking)
        #[arg(short, long, default_value_t = 0)]
        tab: usize,
    },
    /// Print the configuration file location
    ConfigPath,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Overview,
    TxPage,
}

impl From<LayoutArg> for RowLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Overview => RowLayout::Overview,
            LayoutArg::TxPage => RowLayout::TxPage,
        }
    }
}

fn parse_asset(s: &str) -> std::result::Result<AssetType, String> {
    AssetType::from_symbol(s)
        .ok_or_else(|| format!("unknown asset '{s}', expected btc, dcr or ltc"))
}

/// Application entry point
fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("txlens=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load();

    match cli.command {
        Commands::Rows {
            snapshot,
            layout,
            json,
        } => {
            let wallet = WalletSnapshot::load(&snapshot)?;
            let locale = config.locale();
            let layout = layout.map_or(config.layout, RowLayout::from);
            let ctx = RowContext::local(&locale, layout);
            let rows = format_rows(&wallet, &wallet.transactions, &ctx);

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                let palette = config.palette();
                for row in &rows {
                    for line in row_lines(row, &palette) {
                        println!("{line}");
                    }
                    println!();
                }
            }
            tracing::info!("Formatted {} rows for '{}'", rows.len(), wallet.name);
        }
        Commands::Overview { snapshot } => {
            let wallet = WalletSnapshot::load(&snapshot)?;
            let statuses: Vec<_> = wallet
                .transactions
                .iter()
                .filter(|tx| tx.tx_type == TxType::TicketPurchase)
                .map(|tx| classify(&wallet, tx))
                .collect();
            let overview = StakingOverview::tally(&statuses);
            println!("{}", serde_json::to_string_pretty(&overview)?);
            println!("total: {}", overview.total());
        }
        Commands::Filters { asset, tab } => {
            let tab = TxPageTab::from_index(tab).ok_or_else(|| eyre!("unknown tab index {tab}"))?;
            let locale = config.locale();
            for (label, filter) in tx_page_dropdown_fields(asset, tab) {
                println!("{}\t{}", locale.text(label), filter);
            }
        }
        Commands::ConfigPath => {
            println!("{}", AppConfig::config_path()?.display());
        }
    }

    Ok(())
}
