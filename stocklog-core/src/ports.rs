mod history;
mod movement;
mod product;
mod stock;

pub use history::HistoryRepository;
pub use movement::{MovementRepository, PurchaseFailure, SaleFailure};
pub use product::ProductRepository;
pub use stock::StockRepository;

/// Base trait for storage backends.
///
/// A backend is a cheaply clonable handle (e.g. a connection pool) with a
/// single unified error type. The outer `Result` of every port method
/// carries this error; domain-level refusals travel in an inner `Result`
/// where the operation has any.
pub trait Repository: Clone + Send + Sync + 'static {
    /// The error produced when the backend itself fails.
    type Error: std::error::Error + Send + Sync + 'static;
}

/// The marker trait used everywhere a full backend is required; implementing
/// it implies implementation of all the above.
pub trait InventoryRepository: MovementRepository {}
