//! Checkout counter client for the VPayGo server.
//!
//! - `api`: typed HTTP bindings for the three endpoints
//! - `poller`: the fixed-interval refresh loop and user actions
//! - `render`: text table rendering and the `Screen` sink
//! - `detection` / `feeder`: producer side, gating edge detections before ingestion
//! - `cli`: command-line definition

pub mod api;
pub mod cli;
pub mod detection;
pub mod error;
pub mod feeder;
pub mod poller;
pub mod render;

pub use api::{ApiClient, ApiMessage};
pub use error::ClientError;
