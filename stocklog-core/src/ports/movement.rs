use super::{HistoryRepository, ProductRepository, StockRepository};
use std::future::Future;

/// Reasons a purchase is refused without mutating any state.
#[derive(Debug, PartialEq, Eq)]
pub enum PurchaseFailure {
    /// The business date does not match the configured format
    InvalidDate,
    /// The purchase would push the month's cumulative total past the cap
    CapExceeded,
}

/// Reasons a sale is refused without mutating any state.
#[derive(Debug, PartialEq, Eq)]
pub enum SaleFailure {
    /// The business date does not match the configured format
    InvalidDate,
    /// No product exists with the given id
    ProductNotFound,
    /// The requested amount exceeds the current stock level
    InsufficientStock,
}

/// Repository interface for registering inventory movements.
///
/// These two operations orchestrate the product, history, and stock
/// repositories inside a single atomic transaction: either every write of a
/// registration lands, or none do. Domain refusals come back in the inner
/// `Result`; storage errors (after which the transaction is rolled back) in
/// the outer one.
pub trait MovementRepository:
    ProductRepository + HistoryRepository + StockRepository
{
    /// Register a purchase: record an `in` movement and raise the stock
    /// level, creating the product and its stock row on first contact.
    ///
    /// The monthly-cap check runs before the transaction opens and sees
    /// committed history only.
    fn register_purchase(
        &self,
        product_id: &str,
        product_name: Option<&str>,
        date: &str,
        amount: i64,
    ) -> impl Future<Output = Result<Result<(), PurchaseFailure>, Self::Error>> + Send;

    /// Register a sale: record an `out` movement and lower the stock level.
    ///
    /// Unknown products and sales exceeding the current stock are refused
    /// with nothing written.
    fn register_sale(
        &self,
        product_id: &str,
        date: &str,
        amount: i64,
    ) -> impl Future<Output = Result<Result<(), SaleFailure>, Self::Error>> + Send;
}
