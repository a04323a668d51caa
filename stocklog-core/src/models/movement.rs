use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The direction of an inventory movement.
///
/// The wire and storage representation is the lowercase name. Parsing is
/// exact: any string other than `in` or `out` is rejected.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A purchase, increasing stock
    In,
    /// A sale, decreasing stock
    Out,
}

impl Operation {
    /// The canonical string form, as stored in the history table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::In => "in",
            Operation::Out => "out",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a recognized operation.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownOperation;

impl std::str::FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Operation::In),
            "out" => Ok(Operation::Out),
            _ => Err(UnknownOperation),
        }
    }
}

/// One movement from a product's append-only history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// External id of the product the movement belongs to
    pub product_id: String,
    /// When the movement happened (business time, not insertion time)
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// Quantity moved
    pub amount: i64,
    /// Movement direction
    pub operation: Operation,
}

/// Compute the stock level that results from applying a movement.
///
/// Purchases add to the current level and sales subtract from it. The
/// result is not clamped; it is the caller's job to refuse a sale that
/// would drive stock negative before calling this.
pub fn calculate_new_stock(current: i64, amount: i64, operation: Operation) -> i64 {
    match operation {
        Operation::In => current + amount,
        Operation::Out => current - amount,
    }
}
