//! Fixed-interval basket refresh with user-triggered checkout.

use std::io::BufRead;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::api::ApiClient;
use crate::render::Screen;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

pub const CHECKOUT_COMPLETE: &str = "Checkout Complete!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Checkout,
    Quit,
}

impl UserAction {
    /// Map an input line to an action; unknown input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "c" | "checkout" => Some(Self::Checkout),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Read actions line by line on a dedicated thread.
///
/// The channel closes at end of input. The thread exits once the receiver is
/// dropped and the next line arrives.
pub fn spawn_action_reader<R>(reader: R) -> mpsc::Receiver<UserAction>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(8);
    std::thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    tracing::warn!("failed to read input: {e}");
                    break;
                }
            };
            match UserAction::parse(&line) {
                Some(action) => {
                    if tx.blocking_send(action).is_err() {
                        break;
                    }
                }
                None if line.trim().is_empty() => {}
                None => tracing::debug!(input = %line, "ignoring unknown input"),
            }
        }
    });
    rx
}

#[derive(Debug, Clone)]
pub struct Poller {
    client: ApiClient,
    interval: Duration,
}

impl Poller {
    pub fn new(client: ApiClient, interval: Duration) -> Self {
        Self {
            client,
            interval: interval.max(MIN_POLL_INTERVAL),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch the full listing and redraw. A failed fetch is logged; the screen keeps its last frame.
    pub async fn refresh<S: Screen>(&self, screen: &mut S) -> bool {
        match self.client.list_products().await {
            Ok(products) => {
                screen.redraw(&products);
                true
            }
            Err(e) => {
                tracing::warn!("failed to fetch products: {e}");
                false
            }
        }
    }

    /// Check out, re-fetch, then tell the user. Nothing is announced if checkout fails.
    pub async fn checkout<S: Screen>(&self, screen: &mut S) -> bool {
        if let Err(e) = self.client.checkout().await {
            tracing::warn!("checkout failed: {e}");
            return false;
        }
        self.refresh(screen).await;
        screen.notify(CHECKOUT_COMPLETE);
        true
    }

    /// Poll until the user quits.
    ///
    /// A closed action channel only stops action handling; polling continues
    /// until `q` or the task is cancelled (Ctrl-C). Ticks never overlap: a slow fetch delays the next tick and missed ticks are skipped.
    pub async fn run<S: Screen>(&self, screen: &mut S, mut actions: mpsc::Receiver<UserAction>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            api = %self.client.base_url(),
            interval_ms = self.interval.as_millis() as u64,
            "poller started"
        );

        let mut input_open = true;
        loop {
            tokio::select! {
                biased;
                action = actions.recv(), if input_open => match action {
                    Some(UserAction::Checkout) => {
                        self.checkout(screen).await;
                    }
                    Some(UserAction::Quit) => break,
                    None => {
                        tracing::debug!("input closed; polling continues");
                        input_open = false;
                    }
                },
                _ = ticker.tick() => {
                    self.refresh(screen).await;
                }
            }
        }

        tracing::info!("poller stopped");
    }
}
