use rusqlite::ToSql;
use rusqlite::types::FromSql;
use std::borrow::Borrow;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// This type acts as a bridge between the `OffsetDateTime` used by the core
/// models and how SQLite stores timestamps. Whenever we read or store a
/// timestamp, it should go through this wrapper to ensure consistency: every
/// stored value is UTC with one textual format, so the range comparisons in
/// the monthly-cap query stay meaningful.
pub struct DateTime(PrimitiveDateTime);

impl DateTime {
    /// Midnight UTC of a calendar date, the instant a request's business
    /// date is stored as.
    pub fn start_of_day(date: Date) -> Self {
        Self(date.midnight())
    }
}

impl<T: Borrow<OffsetDateTime>> From<T> for DateTime {
    fn from(value: T) -> Self {
        let utc = value.borrow().to_offset(UtcOffset::UTC);
        Self(PrimitiveDateTime::new(utc.date(), utc.time()))
    }
}

impl Into<OffsetDateTime> for DateTime {
    fn into(self) -> OffsetDateTime {
        self.0.assume_utc()
    }
}

impl ToSql for DateTime {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for DateTime {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        PrimitiveDateTime::column_result(value).map(|dt| Self(dt))
    }
}
