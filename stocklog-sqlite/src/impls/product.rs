use crate::{DateTime, db};
use rusqlite::{Connection, OptionalExtension as _};
use stocklog_core::{models::ProductRecord, ports::ProductRepository};

impl ProductRepository for db::Database {
    async fn get_product(&self, product_id: &str) -> Result<Option<ProductRecord>, Self::Error> {
        let ctx = self.connect(false)?;
        get_product(&ctx, product_id)
    }

    async fn create_product(
        &self,
        product_id: &str,
        name: Option<&str>,
    ) -> Result<(), Self::Error> {
        let ctx = self.connect(true)?;
        create_product(&ctx, product_id, name)
    }
}

pub(crate) fn get_product(
    ctx: &Connection,
    product_id: &str,
) -> Result<Option<ProductRecord>, db::Error> {
    let record = ctx
        .query_row_and_then(
            r#"
            select
                product_id, name, created_at, updated_at
            from
                product
            where
                product_id = ?
            "#,
            (product_id,),
            product_from_row,
        )
        .optional()?;

    if record.is_none() {
        tracing::info!(product_id, "product not found");
    }

    Ok(record)
}

// Writes nothing when either field is missing. Repeat purchases legitimately
// omit the name, and such a request must not half-create a product.
pub(crate) fn create_product(
    ctx: &Connection,
    product_id: &str,
    name: Option<&str>,
) -> Result<(), db::Error> {
    let name = name.unwrap_or_default();
    if product_id.is_empty() || name.is_empty() {
        tracing::warn!("not enough info to create a product");
        return Ok(());
    }

    tracing::info!(product_id, "creating product");

    ctx.execute(
        r#"insert into product (product_id, name) values (?, ?)"#,
        (product_id, name),
    )?;

    Ok(())
}

fn product_from_row(row: &rusqlite::Row) -> rusqlite::Result<ProductRecord> {
    Ok(ProductRecord {
        product_id: row.get("product_id")?,
        name: row.get("name")?,
        created_at: row.get::<&str, DateTime>("created_at")?.into(),
        updated_at: row.get::<&str, DateTime>("updated_at")?.into(),
    })
}
