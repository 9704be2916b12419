use clap::{Parser, Subcommand};
use limit_order_book::cli::{self, DemoCommand};
use limit_order_book::simulate::{self, SimConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "lob-cli")]
#[command(version = "0.1", about = "A demo of a single-instrument limit order book")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add/cancel orders and inspect book state one step at a time.
    Demo {
        #[command(subcommand)]
        command: DemoCommand,
    },
    /// Drive the book with a synthetic random workload and check that
    /// it never crosses.
    Bench {
        #[arg(long, default_value_t = SimConfig::default().num_ops)]
        num_ops: u64,
        #[arg(long, default_value_t = SimConfig::default().cancel_prob_pct)]
        cancel_prob_pct: u8,
        #[arg(long, default_value_t = SimConfig::default().max_price)]
        max_price: i64,
        #[arg(long, default_value_t = SimConfig::default().max_qty)]
        max_qty: i64,
        /// Defaults to a random seed if omitted.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Demo { command } => {
            cli::run_demo(command);
        }
        Commands::Bench { num_ops, cancel_prob_pct, max_price, max_qty, seed } => {
            let cfg = SimConfig {
                num_ops,
                cancel_prob_pct,
                max_price,
                max_qty,
                seed: seed.unwrap_or_else(rand::random),
            };
            match simulate::run_simulation(cfg) {
                Ok(report) => {
                    println!("{report:#?}");
                }
                Err(err) => {
                    tracing::error!(%err, "synthetic workload failed");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
