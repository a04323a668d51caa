mod common;

use stocklog_core::{
    models::Operation,
    ports::{HistoryRepository, ProductRepository, StockRepository},
};
use stocklog_sqlite::{Config, Database, Error, Storage};
use time::OffsetDateTime;

#[tokio::test]
async fn product_round_trip() -> anyhow::Result<()> {
    let db = common::open("product_round_trip")?;

    db.create_product("1", Some("Rice")).await?;

    let product = db.get_product("1").await?.expect("product was created");
    assert_eq!(product.product_id, "1");
    assert_eq!(product.name, "Rice");

    assert!(db.get_product("missing").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn create_product_without_enough_info_writes_nothing() -> anyhow::Result<()> {
    let db = common::open("create_product_without_enough_info")?;

    db.create_product("9", None).await?;
    assert!(db.get_product("9").await?.is_none());

    db.create_product("9", Some("")).await?;
    assert!(db.get_product("9").await?.is_none());

    db.create_product("", Some("Anonymous")).await?;
    assert!(db.get_product("").await?.is_none());

    // with both fields present the insert goes through
    db.create_product("9", Some("Beans")).await?;
    assert_eq!(db.get_product("9").await?.unwrap().name, "Beans");

    Ok(())
}

#[tokio::test]
async fn add_history_drops_disallowed_operations() -> anyhow::Result<()> {
    let db = common::open("add_history_drops_disallowed")?;
    let now = OffsetDateTime::now_utc();

    db.create_product("1", Some("Rice")).await?;

    for bad in ["sideways", "inout", "', 'injection", ""] {
        db.add_history("1", 5, bad, now).await?;
    }
    assert!(db.product_history("1").await?.is_empty());

    db.add_history("1", 5, "in", now).await?;
    let history = db.product_history("1").await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].amount, 5);
    assert_eq!(history[0].operation, Operation::In);

    db.add_history("1", 2, "out", now).await?;
    assert_eq!(db.product_history("1").await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn add_history_stores_mixed_case_operations_canonically() -> anyhow::Result<()> {
    let db = common::open("add_history_mixed_case")?;
    let now = OffsetDateTime::now_utc();

    db.create_product("1", Some("Rice")).await?;
    db.add_history("1", 3, "IN", now).await?;

    let history = db.product_history("1").await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].operation, Operation::In);

    Ok(())
}

#[tokio::test]
async fn monthly_total_only_counts_purchases_in_the_month() -> anyhow::Result<()> {
    let db = common::open("monthly_total_window")?;

    db.create_product("1", Some("Rice")).await?;

    let jan = |day| {
        time::Date::from_calendar_date(2022, time::Month::January, day)
            .unwrap()
            .midnight()
            .assume_utc()
    };
    let feb_first = time::Date::from_calendar_date(2022, time::Month::February, 1)
        .unwrap()
        .midnight()
        .assume_utc();

    db.add_history("1", 5, "in", jan(1)).await?;
    db.add_history("1", 7, "in", jan(31)).await?;
    db.add_history("1", 4, "out", jan(15)).await?; // sales never count
    db.add_history("1", 9, "in", feb_first).await?; // next month

    let date_in_january = time::Date::from_calendar_date(2022, time::Month::January, 20)?;
    assert_eq!(db.monthly_purchase_total("1", date_in_january).await?, 12);

    let date_in_february = time::Date::from_calendar_date(2022, time::Month::February, 20)?;
    assert_eq!(db.monthly_purchase_total("1", date_in_february).await?, 9);

    Ok(())
}

#[tokio::test]
async fn stock_levels_are_overwritten_not_incremented() -> anyhow::Result<()> {
    let db = common::open("stock_overwrite")?;

    db.create_product("1", Some("Rice")).await?;
    assert!(db.get_stock("1").await?.is_none());

    db.create_stock("1", 5).await?;
    assert_eq!(db.get_stock("1").await?.unwrap().amount, 5);

    db.update_stock("1", 3).await?;
    assert_eq!(db.get_stock("1").await?.unwrap().amount, 3);

    db.update_stock("1", 3).await?;
    assert_eq!(db.get_stock("1").await?.unwrap().amount, 3);

    Ok(())
}

#[tokio::test]
async fn reopening_with_a_different_config_is_refused() -> anyhow::Result<()> {
    let name = "config_conflict";

    // first open stores the default configuration
    let _db = common::open(name)?;

    let conflicting = Config {
        monthly_purchase_cap: 50,
        ..Config::default()
    };
    let reopened = Database::with_storage(Storage::Memory(name.to_owned()), Some(&conflicting));
    assert!(matches!(reopened, Err(Error::InconsistentConfig)));

    // while an identical configuration is fine
    let reopened = Database::with_storage(Storage::Memory(name.to_owned()), Some(&Config::default()));
    assert!(reopened.is_ok());

    Ok(())
}

#[tokio::test]
async fn a_config_with_a_broken_date_pattern_is_refused() -> anyhow::Result<()> {
    let config = Config {
        date_format: "[no-such-component]".to_owned(),
        ..Config::default()
    };
    let opened = Database::with_storage(Storage::Memory("broken_pattern".to_owned()), Some(&config));
    assert!(matches!(opened, Err(Error::Format(_))));

    Ok(())
}
