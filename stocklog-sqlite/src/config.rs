use rusqlite::{Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use stocklog_core::validation::{DEFAULT_DATE_FORMAT, DEFAULT_MONTHLY_CAP};
use time::format_description;

use crate::db;

/// Durable runtime configuration, stored inside the database it configures.
///
/// Movement registration is sensitive to both fields: reinterpreting old
/// history under a different date format or cap would silently change what
/// the data means. Storing the configuration next to the data lets
/// [`crate::Database::open`] refuse such a reopen instead.
///
/// ```
/// use stocklog_sqlite::Config;
///
/// let config = Config::default();
/// assert_eq!(config.date_format, "[day]/[month]/[year]");
/// assert_eq!(config.monthly_purchase_cap, 30);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The strict pattern request dates must match
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// The maximum cumulative purchased amount per product per calendar month
    #[serde(default = "default_monthly_cap")]
    pub monthly_purchase_cap: i64,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_owned()
}

fn default_monthly_cap() -> i64 {
    DEFAULT_MONTHLY_CAP
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            monthly_purchase_cap: default_monthly_cap(),
        }
    }
}

impl Config {
    pub fn get(conn: &Connection) -> Result<Option<Self>, db::Error> {
        let response: Option<serde_json::Value> = conn
            .query_row("select data from config where id = 0 limit 1", (), |row| {
                row.get(0)
            })
            .optional()?;

        if let Some(config_data) = response {
            let config: Config = serde_json::from_value(config_data)?;
            Ok(Some(config))
        } else {
            Ok(None)
        }
    }

    pub fn set(&self, conn: &Connection) -> Result<(), db::Error> {
        conn.execute("insert into config (id, data) values (0, ?1) on conflict (id) do update set data = excluded.data", (serde_json::to_value(self)?,))?;
        Ok(())
    }

    // A config is only written after it passes this; a pattern that does not
    // parse would otherwise reject every request date from then on.
    pub(crate) fn validate(&self) -> Result<(), db::Error> {
        format_description::parse(&self.date_format)?;

        if self.monthly_purchase_cap < 0 {
            return Err(db::Error::Failure(
                "monthly purchase cap must be non-negative".to_owned(),
            ));
        }

        Ok(())
    }
}
