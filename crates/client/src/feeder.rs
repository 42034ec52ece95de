//! Producer loop: newline-delimited detections in, ingestion calls out.

use std::time::Instant;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::ApiClient;
use crate::detection::{Detection, DetectionGate, Verdict};
use crate::error::ClientError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeedSummary {
    /// Detections the server stored.
    pub added: usize,
    /// Detections dropped by the gate.
    pub filtered: usize,
    /// Lines that were not valid detections.
    pub malformed: usize,
    /// Accepted detections the server did not store.
    pub failed: usize,
}

/// Read detections until end of input, posting the ones the gate admits.
///
/// Bad lines and failed posts are logged and counted; only an input read
/// error aborts the feed.
pub async fn feed<R>(
    client: &ApiClient,
    gate: &mut DetectionGate,
    reader: R,
) -> Result<FeedSummary, ClientError>
where
    R: AsyncBufRead + Unpin,
{
    let mut summary = FeedSummary::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let detection: Detection = match serde_json::from_str(line) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(input = %line, "skipping malformed detection: {e}");
                summary.malformed += 1;
                continue;
            }
        };

        match gate.check(&detection, Instant::now()) {
            Verdict::Accept => {}
            verdict => {
                tracing::debug!(label = %detection.label, ?verdict, "detection filtered");
                summary.filtered += 1;
                continue;
            }
        }

        let product = detection.into_product();
        match client.add_product(&product).await {
            Ok(msg) => {
                tracing::info!(name = %product.name, weight = %product.weight, "{}", msg.message);
                summary.added += 1;
            }
            Err(e) => {
                tracing::warn!(name = %product.name, "failed to add product: {e}");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
