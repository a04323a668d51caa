use crate::db;
use rusqlite::{Connection, OptionalExtension as _};
use stocklog_core::{models::StockRecord, ports::StockRepository};

impl StockRepository for db::Database {
    async fn get_stock(&self, product_id: &str) -> Result<Option<StockRecord>, Self::Error> {
        let ctx = self.connect(false)?;
        get_stock(&ctx, product_id)
    }

    async fn create_stock(&self, product_id: &str, amount: i64) -> Result<(), Self::Error> {
        let ctx = self.connect(true)?;
        create_stock(&ctx, product_id, amount)
    }

    async fn update_stock(&self, product_id: &str, amount: i64) -> Result<(), Self::Error> {
        let ctx = self.connect(true)?;
        update_stock(&ctx, product_id, amount)
    }
}

pub(crate) fn get_stock(
    ctx: &Connection,
    product_id: &str,
) -> Result<Option<StockRecord>, db::Error> {
    let record = ctx
        .query_row_and_then(
            r#"select product, amount from stock where product = ?"#,
            (product_id,),
            stock_from_row,
        )
        .optional()?;

    if record.is_none() {
        tracing::info!(product_id, "no stock exists for product");
    }

    Ok(record)
}

pub(crate) fn create_stock(
    ctx: &Connection,
    product_id: &str,
    amount: i64,
) -> Result<(), db::Error> {
    tracing::info!(product_id, "creating product stock");

    ctx.execute(
        r#"insert into stock (product, amount) values (?, ?)"#,
        (product_id, amount),
    )?;

    Ok(())
}

// An overwrite, not an increment: the caller passes the fully computed level.
pub(crate) fn update_stock(
    ctx: &Connection,
    product_id: &str,
    amount: i64,
) -> Result<(), db::Error> {
    tracing::info!(product_id, amount, "updating stock for product");

    ctx.execute(
        r#"update stock set amount = ?2, updated_at = current_timestamp where product = ?1"#,
        (product_id, amount),
    )?;

    Ok(())
}

fn stock_from_row(row: &rusqlite::Row) -> rusqlite::Result<StockRecord> {
    Ok(StockRecord {
        product_id: row.get("product")?,
        amount: row.get("amount")?,
    })
}
