//! SQLite-backed storage for the stocklog inventory service.
//!
//! [`Database`] implements every port defined in `stocklog-core` on top of a
//! pair of `r2d2` connection pools. The schema is managed by embedded
//! `refinery` migrations, and the runtime configuration (date format and
//! monthly purchase cap) lives in the database itself so that a data file
//! cannot silently be reopened under different rules.

mod config;
pub mod db;
mod impls;

pub use config::Config;
pub use db::{Database, Error, Storage};

// Compiles the sql/ migration files into the binary
mod embedded {
    use refinery::embed_migrations;
    embed_migrations!("./sql");
}

mod datetime;
pub use datetime::DateTime;
