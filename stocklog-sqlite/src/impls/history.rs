use crate::{DateTime, db};
use rusqlite::Connection;
use stocklog_core::{
    models::{HistoryRecord, Operation},
    ports::HistoryRepository,
    validation,
};
use time::{Date, OffsetDateTime};

impl HistoryRepository for db::Database {
    async fn add_history(
        &self,
        product_id: &str,
        amount: i64,
        operation: &str,
        date: OffsetDateTime,
    ) -> Result<(), Self::Error> {
        let ctx = self.connect(true)?;
        add_history(&ctx, product_id, amount, operation, date)
    }

    async fn product_history(
        &self,
        product_id: &str,
    ) -> Result<Vec<HistoryRecord>, Self::Error> {
        let ctx = self.connect(false)?;
        product_history(&ctx, product_id)
    }

    async fn monthly_purchase_total(
        &self,
        product_id: &str,
        date: Date,
    ) -> Result<i64, Self::Error> {
        let ctx = self.connect(false)?;
        monthly_purchase_total(&ctx, product_id, date)
    }
}

// Disallowed operations are dropped without surfacing an error; callers must
// not assume the write occurred. Recognized operations are stored in their
// canonical lowercase form regardless of the input's case.
pub(crate) fn add_history(
    ctx: &Connection,
    product_id: &str,
    amount: i64,
    operation: &str,
    date: OffsetDateTime,
) -> Result<(), db::Error> {
    let Ok(operation) = operation.to_lowercase().parse::<Operation>() else {
        tracing::error!(operation, "operation not allowed, use in/out");
        return Ok(());
    };

    ctx.execute(
        r#"insert into history (product, date, amount, operation) values (?, ?, ?, ?)"#,
        (product_id, DateTime::from(date), amount, operation.as_str()),
    )?;

    Ok(())
}

pub(crate) fn product_history(
    ctx: &Connection,
    product_id: &str,
) -> Result<Vec<HistoryRecord>, db::Error> {
    let mut stmt = ctx.prepare(
        r#"
        select
            product, date, amount, operation
        from
            history
        where
            product = ?1
        order by
            date asc, id asc
        "#,
    )?;

    let records = stmt
        .query_and_then((product_id,), |row| -> Result<HistoryRecord, db::Error> {
            let operation: String = row.get("operation")?;
            Ok(HistoryRecord {
                product_id: row.get("product")?,
                date: row.get::<&str, DateTime>("date")?.into(),
                amount: row.get("amount")?,
                operation: operation.parse().map_err(|_| {
                    db::Error::Failure(format!("unrecognized operation {operation:?} in history"))
                })?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(records)
}

// Committed purchases only: when this runs ahead of a registration, rows
// from transactions still in flight are invisible to it.
pub(crate) fn monthly_purchase_total(
    ctx: &Connection,
    product_id: &str,
    date: Date,
) -> Result<i64, db::Error> {
    let (start, end) = validation::month_window(date);

    let total = ctx.query_row(
        r#"
        select
            coalesce(sum(amount), 0)
        from
            history
        where
            product = ?1
        and
            operation = ?2
        and
            date >= ?3
        and
            date < ?4
        "#,
        (
            product_id,
            Operation::In.as_str(),
            DateTime::start_of_day(start),
            DateTime::start_of_day(end),
        ),
        |row| row.get(0),
    )?;

    Ok(total)
}
