//! Command-line definition.

use clap::{Parser, Subcommand};

use crate::api::DEFAULT_API_URL;
use crate::poller::DEFAULT_POLL_INTERVAL;

const DEFAULT_INTERVAL_MS: u64 = DEFAULT_POLL_INTERVAL.as_millis() as u64;

#[derive(Debug, Parser)]
#[command(name = "vpaygo-client")]
#[command(about = "Watch the VPayGo basket, check out, or feed detections")]
pub struct Cli {
    /// Base URL of the VPayGo server
    #[arg(long = "api-url", env = "VPAYGO_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Redraw the basket on a fixed interval; type `c` to check out, `q` to quit
    Watch {
        #[arg(long = "interval-ms", default_value_t = DEFAULT_INTERVAL_MS)]
        interval_ms: u64,
    },
    /// Print the basket once
    List,
    /// Empty the basket
    Checkout,
    /// Add one product
    Push {
        #[arg(long)]
        name: String,
        #[arg(long)]
        weight: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        image: String,
    },
    /// Read JSON detections from stdin and add the ones that pass the gate
    Feed {
        #[arg(long = "cooldown-ms", default_value_t = 3000)]
        cooldown_ms: u64,
        #[arg(long = "min-confidence", default_value_t = 0.7)]
        min_confidence: f64,
        #[arg(long = "min-weight", default_value_t = 2.0)]
        min_weight: f64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Watch {
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}
