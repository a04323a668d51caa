use crate::models::StockRecord;
use std::future::Future;

/// Repository interface for per-product stock levels.
pub trait StockRepository: super::Repository {
    /// The current stock row for a product, or `None` if no movement has
    /// ever touched it.
    fn get_stock(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Option<StockRecord>, Self::Error>> + Send;

    /// Insert the initial stock row for a product.
    fn create_stock(
        &self,
        product_id: &str,
        amount: i64,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Overwrite a product's stock with a fully computed value.
    ///
    /// This is not an increment; the caller computes the new level from the
    /// current one.
    fn update_stock(
        &self,
        product_id: &str,
        amount: i64,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
