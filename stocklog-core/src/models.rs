mod movement;
mod product;
mod stock;

pub use movement::{HistoryRecord, Operation, UnknownOperation, calculate_new_stock};
pub use product::ProductRecord;
pub use stock::StockRecord;
