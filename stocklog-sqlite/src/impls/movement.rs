use crate::db;
use rusqlite::TransactionBehavior;
use stocklog_core::{
    models::{Operation, calculate_new_stock},
    ports::{MovementRepository, PurchaseFailure, SaleFailure},
    validation,
};

use super::{history, product, stock};

impl MovementRepository for db::Database {
    async fn register_purchase(
        &self,
        product_id: &str,
        product_name: Option<&str>,
        date: &str,
        amount: i64,
    ) -> Result<Result<(), PurchaseFailure>, Self::Error> {
        let config = self.config();

        let Some(day) = validation::parse_date(date, &config.date_format) else {
            return Ok(Err(PurchaseFailure::InvalidDate));
        };

        // The cap check runs against committed history, before the write
        // transaction opens: two in-flight purchases can each see the same
        // prior total and jointly overshoot the cap.
        {
            let ctx = self.connect(false)?;
            let prior = history::monthly_purchase_total(&ctx, product_id, day)?;
            if !validation::within_monthly_cap(prior, amount, config.monthly_purchase_cap) {
                tracing::error!(product_id, amount, prior, "max limit exceeded");
                return Ok(Err(PurchaseFailure::CapExceeded));
            }
        }

        let business_date = day.midnight().assume_utc();

        let mut ctx = self.connect(true)?;
        let tx = ctx.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if product::get_product(&tx, product_id)?.is_none() {
            product::create_product(&tx, product_id, product_name)?;
        }

        history::add_history(
            &tx,
            product_id,
            amount,
            Operation::In.as_str(),
            business_date,
        )?;

        match stock::get_stock(&tx, product_id)? {
            None => stock::create_stock(&tx, product_id, amount)?,
            Some(current) => {
                let new_stock = calculate_new_stock(current.amount, amount, Operation::In);
                stock::update_stock(&tx, product_id, new_stock)?;
            }
        }

        tx.commit()?;

        Ok(Ok(()))
    }

    async fn register_sale(
        &self,
        product_id: &str,
        date: &str,
        amount: i64,
    ) -> Result<Result<(), SaleFailure>, Self::Error> {
        let config = self.config();

        let Some(day) = validation::parse_date(date, &config.date_format) else {
            return Ok(Err(SaleFailure::InvalidDate));
        };

        let business_date = day.midnight().assume_utc();

        let mut ctx = self.connect(true)?;
        let tx = ctx.transaction_with_behavior(TransactionBehavior::Immediate)?;

        // Early returns drop the transaction, rolling back anything written.
        if product::get_product(&tx, product_id)?.is_none() {
            return Ok(Err(SaleFailure::ProductNotFound));
        }

        let current = match stock::get_stock(&tx, product_id)? {
            Some(stock) if stock.amount >= amount => stock.amount,
            _ => return Ok(Err(SaleFailure::InsufficientStock)),
        };

        history::add_history(
            &tx,
            product_id,
            amount,
            Operation::Out.as_str(),
            business_date,
        )?;

        let new_stock = calculate_new_stock(current, amount, Operation::Out);
        stock::update_stock(&tx, product_id, new_stock)?;

        tx.commit()?;

        Ok(Ok(()))
    }
}
