use crate::models::ProductRecord;
use std::future::Future;

/// Repository interface for the product catalog.
///
/// Products carry a caller-supplied external id. The registration flow
/// creates them on demand: the first purchase referencing an unknown id
/// inserts the row, and nothing ever updates or deletes it afterwards.
pub trait ProductRepository: super::Repository {
    /// Look up a product by its external id.
    ///
    /// An unknown id is not an error; it returns `None`.
    fn get_product(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Option<ProductRecord>, Self::Error>> + Send;

    /// Insert a new product row.
    ///
    /// If the id or the name is missing or empty, nothing is written and no
    /// error is raised; the refusal is only logged. The caller is also
    /// responsible for the existence check: inserting an id that already
    /// exists surfaces as a uniqueness violation in `Self::Error`.
    fn create_product(
        &self,
        product_id: &str,
        name: Option<&str>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
