mod history;
mod movement;
mod product;
mod stock;

use crate::db;
use stocklog_core::ports::{InventoryRepository, Repository};

impl Repository for db::Database {
    type Error = db::Error;
}

impl InventoryRepository for db::Database {}
