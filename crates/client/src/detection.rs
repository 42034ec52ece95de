//! Gate for edge detections before they reach the basket.
//!
//! The counter camera reports the same item on many consecutive frames. A
//! detection is forwarded only when the classifier is confident, something
//! is actually on the scale, and it is not a repeat of the item just added.

use std::time::{Duration, Instant};

use serde::Deserialize;

use vpaygo_core::FieldValue;
use vpaygo_products::Product;

/// One classifier result paired with a scale reading (grams).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Detection {
    pub label: String,
    pub confidence: f64,
    pub weight: f64,
    pub price: FieldValue,
    #[serde(default)]
    pub image: Option<String>,
}

impl Detection {
    /// Ingestion payload for this detection. Weight is rounded to 0.1 g and
    /// the image defaults to `<label>.png`.
    pub fn into_product(self) -> Product {
        let weight = FieldValue::from_f64((self.weight * 10.0).round() / 10.0);
        let image = self.image.unwrap_or_else(|| format!("{}.png", self.label));
        Product::new(self.label, weight, self.price, image)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    /// Confidence must be strictly above this.
    pub min_confidence: f64,
    /// Weight in grams must be strictly above this.
    pub min_weight: f64,
    /// A repeated label is dropped until this much time has passed.
    pub cooldown: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.7,
            min_weight: 2.0,
            cooldown: Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accept,
    LowConfidence,
    TooLight,
    Repeat,
}

#[derive(Debug)]
pub struct DetectionGate {
    config: GateConfig,
    last: Option<(String, Instant)>,
}

impl DetectionGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config, last: None }
    }

    /// Judge a detection observed at `now`. Accepted detections become the
    /// new reference for repeat suppression.
    pub fn check(&mut self, detection: &Detection, now: Instant) -> Verdict {
        if !(detection.confidence > self.config.min_confidence) {
            return Verdict::LowConfidence;
        }
        if !(detection.weight > self.config.min_weight) {
            return Verdict::TooLight;
        }
        if let Some((label, at)) = &self.last {
            if *label == detection.label && now.saturating_duration_since(*at) <= self.config.cooldown {
                return Verdict::Repeat;
            }
        }

        self.last = Some((detection.label.clone(), now));
        Verdict::Accept
    }
}

impl Default for DetectionGate {
    fn default() -> Self {
        Self::new(GateConfig::default())
    }
}
