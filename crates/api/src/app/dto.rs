use serde::Serialize;

use vpaygo_products::Product;

// -------------------------
// Response DTOs
// -------------------------

pub const MSG_PRODUCT_ADDED: &str = "Product added";
pub const MSG_CHECKOUT_COMPLETE: &str = "Checkout complete";
pub const MSG_INVALID_DATA: &str = "Invalid data format";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// `{status, message}` envelope used by checkout and error responses.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: Status,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }
}

/// Successful ingestion: the stored record is echoed back.
#[derive(Debug, Serialize)]
pub struct ProductAddedResponse {
    pub status: Status,
    pub message: String,
    pub product: Product,
}

impl ProductAddedResponse {
    pub fn new(product: Product) -> Self {
        Self {
            status: Status::Success,
            message: MSG_PRODUCT_ADDED.to_string(),
            product,
        }
    }
}
