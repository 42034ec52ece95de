use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use vpaygo_client::cli::{Cli, Command};
use vpaygo_client::detection::{DetectionGate, GateConfig};
use vpaygo_client::poller::{spawn_action_reader, Poller};
use vpaygo_client::render::{render_table, TerminalScreen};
use vpaygo_client::{feeder, ApiClient};
use vpaygo_core::FieldValue;
use vpaygo_products::Product;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    vpaygo_observability::init_pretty(if cli.verbose { "debug" } else { "info" });

    let client = ApiClient::new(cli.api_url);

    match cli.command.unwrap_or_default() {
        Command::Watch { interval_ms } => {
            let poller = Poller::new(client, Duration::from_millis(interval_ms));
            let actions = spawn_action_reader(std::io::BufReader::new(std::io::stdin()));
            let mut screen = TerminalScreen::stdout();

            tokio::select! {
                _ = poller.run(&mut screen, actions) => {}
                _ = tokio::signal::ctrl_c() => tracing::info!("interrupted"),
            }
        }
        Command::List => {
            let products = client
                .list_products()
                .await
                .context("failed to fetch products")?;
            print!("{}", render_table(&products));
        }
        Command::Checkout => {
            let msg = client.checkout().await.context("checkout failed")?;
            println!("{}", msg.message);
        }
        Command::Push {
            name,
            weight,
            price,
            image,
        } => {
            let product = Product::new(
                name,
                FieldValue::parse_lossy(&weight),
                FieldValue::parse_lossy(&price),
                image,
            );
            let msg = client
                .add_product(&product)
                .await
                .context("failed to add product")?;
            println!("{}", msg.message);
        }
        Command::Feed {
            cooldown_ms,
            min_confidence,
            min_weight,
        } => {
            let mut gate = DetectionGate::new(GateConfig {
                min_confidence,
                min_weight,
                cooldown: Duration::from_millis(cooldown_ms),
            });
            let summary = feeder::feed(&client, &mut gate, BufReader::new(tokio::io::stdin()))
                .await
                .context("failed to read detections")?;
            tracing::info!(
                added = summary.added,
                filtered = summary.filtered,
                malformed = summary.malformed,
                failed = summary.failed,
                "feed finished"
            );
        }
    }

    Ok(())
}
