use crate::models::HistoryRecord;
use std::future::Future;
use time::{Date, OffsetDateTime};

/// Repository interface for the append-only movement history.
pub trait HistoryRepository: super::Repository {
    /// Append a movement to a product's history.
    ///
    /// `operation` is validated here: anything other than `in` or `out` is
    /// dropped without writing a row and without surfacing an error, so
    /// callers must not assume the write occurred. `date` is the business
    /// time of the movement, not the insertion time.
    fn add_history(
        &self,
        product_id: &str,
        amount: i64,
        operation: &str,
        date: OffsetDateTime,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// All recorded movements for a product, oldest first.
    fn product_history(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Vec<HistoryRecord>, Self::Error>> + Send;

    /// The cumulative purchased (`in`) amount for a product within the
    /// calendar month containing `date`, from committed history only.
    fn monthly_purchase_total(
        &self,
        product_id: &str,
        date: Date,
    ) -> impl Future<Output = Result<i64, Self::Error>> + Send;
}
