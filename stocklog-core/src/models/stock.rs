use serde::{Deserialize, Serialize};

/// The current on-hand quantity for a product.
///
/// Maintained incrementally: each registered movement overwrites the amount
/// with a freshly computed value rather than issuing a relative update. The
/// sale path refuses to drive the amount negative; the purchase path does
/// not clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    /// External id of the product
    pub product_id: String,
    /// On-hand quantity
    pub amount: i64,
}
