//! # stockroom
//!
//! Operator CLI over the inventory service and the rack locator lights.
//!
//! ```bash
//! stockroom scan 400123 2 --mode out
//! stockroom locate "Blue Hoodie"
//! stockroom box C3
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use stockroom::browser::Located;
use stockroom::config::StockroomConfig;
use stockroom::lifecycle::tracing::setup_tracing;
use stockroom::lifecycle::StockroomSystem;
use stockroom::model::ScanMode;
use stockroom::rack::RackCoordinate;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "stockroom",
    version,
    about = "Stock scanning and rack locator CLI",
    after_help = "Examples:\n  stockroom scan 400123 2 --mode out\n  stockroom locate \"Blue Hoodie\"\n  stockroom highlight C3"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Move stock in or out by barcode.
    Scan {
        barcode: String,
        /// Units to move (must be positive).
        quantity: u32,
        #[arg(long, value_enum, default_value = "in")]
        mode: ModeArg,
    },
    /// Find an item by name or barcode and light its box.
    Locate { query: String },
    /// Light one box and dim the rest.
    Highlight { coordinate: RackCoordinate },
    /// Dim every box.
    Reset,
    /// Run the ambient effect across the whole rack.
    Standby,
    /// Show every box with its item count.
    Grid,
    /// List the items in one box.
    Box { coordinate: RackCoordinate },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    In,
    Out,
}

impl From<ModeArg> for ScanMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::In => ScanMode::In,
            ModeArg::Out => ScanMode::Out,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let cli = Cli::parse();
    let config = StockroomConfig::from_env().context("loading configuration")?;
    info!(backend = %config.backend_url, locator = ?config.locator_url, "Loaded configuration");

    let mut system = StockroomSystem::new(&config).context("building the inventory client")?;
    let result = run(&mut system, cli.command).await;
    system.shutdown().await.context("stopping background tasks")?;
    result
}

async fn run(system: &mut StockroomSystem, command: Command) -> anyhow::Result<()> {
    let browser = &mut system.browser;
    match command {
        Command::Scan {
            barcode,
            quantity,
            mode,
        } => match browser.scan(&barcode, quantity, mode.into()).await? {
            Some(outcome) => println!(
                "{} ({} now {})",
                outcome.message, outcome.record.item_name, outcome.record.quantity
            ),
            None => println!("No item with barcode {barcode}"),
        },
        Command::Locate { query } => {
            browser.refresh().await.context("loading inventory")?;
            match browser.locate(&query).await? {
                Located::Highlighted { record, coordinate } => {
                    println!("{} is in {}", record.item_name, coordinate)
                }
                Located::Unplaced(record) => println!("{} has no rack location", record.item_name),
                Located::NotFound => println!("Nothing matches {query:?}"),
            }
        }
        Command::Highlight { coordinate } => browser.highlight(coordinate)?,
        Command::Reset => browser.reset()?,
        Command::Standby => browser.standby(),
        Command::Grid => {
            browser.refresh().await.context("loading inventory")?;
            let grid = browser.grid().await?;
            let columns = browser.layout().columns() as usize;
            for row in grid.chunks(columns) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|b| format!("{:>3}:{:<3}", b.coordinate.to_string(), b.member_count))
                    .collect();
                println!("{}", cells.join(" "));
            }
        }
        Command::Box { coordinate } => {
            browser.refresh().await.context("loading inventory")?;
            let members = browser.box_contents(coordinate).await?;
            if members.is_empty() {
                println!("{coordinate} is empty");
            }
            for record in members {
                println!(
                    "{:>10}  {:<30} x{}",
                    record.barcode, record.item_name, record.quantity
                );
            }
        }
    }
    Ok(())
}
