use crate::config::Config;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use refinery::Runner;
use rusqlite::OpenFlags;
use std::{ops::DerefMut, path::PathBuf};
use thiserror::Error;

// Everything that touches the database funnels its failures into this one
// type, so the port impls can return a single error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("pool error: {0}")]
    ConnectionPool(#[from] r2d2::Error),
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
    #[error("date format error: {0}")]
    Format(#[from] time::error::InvalidFormatDescription),
    #[error("migration error: {0}")]
    Migration(#[from] refinery::Error),
    #[error("sql error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("inconsistent configuration")]
    InconsistentConfig,
    #[error("failure: {0}")]
    Failure(String),
}

// Where the data lives. The daemon passes File; tests use named in-memory
// databases, which are shared process-wide by name.
pub enum Storage {
    File(PathBuf),
    Memory(String),
}

// Sqlite serializes writes, so rather than fight over one pool we keep two:
// an unbounded pool of read-only connections and a writer pool capped at a
// single connection. Every module holds a clone of this handle.
#[derive(Clone, Debug)]
pub struct Database {
    reader: Pool<SqliteConnectionManager>,
    writer: Pool<SqliteConnectionManager>,
    config: Config,
}

impl Database {
    /// Open the database at the given path, or a process-wide in-memory
    /// database when no path is given.
    ///
    /// A database that already carries a stored configuration must agree
    /// with the provided one; a fresh database stores the provided (or
    /// default) configuration for every later open to check against.
    pub fn open(db: Option<&PathBuf>, config: Option<&Config>) -> Result<Self, Error> {
        let storage = db
            .map(|path| Storage::File(path.clone()))
            .unwrap_or(Storage::Memory("stocklog".to_owned()));

        Self::with_storage(storage, config)
    }

    /// Like [`Database::open`], with explicit control over the storage
    /// location. Tests use this to get isolated in-memory databases.
    pub fn with_storage(storage: Storage, config: Option<&Config>) -> Result<Self, Error> {
        let writer = pool(
            &storage,
            Some(1),
            false,
            Some(crate::embedded::migrations::runner()),
        )?;
        let reader = pool(&storage, None, true, None)?;

        let config = {
            let conn = writer.get()?;

            match (Config::get(&conn)?, config) {
                (Some(stored), Some(provided)) => {
                    if stored != *provided {
                        return Err(Error::InconsistentConfig);
                    }
                    stored
                }
                (Some(stored), None) => stored,
                (None, provided) => {
                    let config = provided.cloned().unwrap_or_default();
                    config.validate()?;
                    config.set(&conn)?;
                    config
                }
            }
        };

        Ok(Database {
            reader,
            writer,
            config,
        })
    }

    /// The runtime configuration this database was opened with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // Check out a connection from the reader or writer pool. Writes must ask
    // for the writer explicitly; the reader connections are opened read-only.
    pub fn connect(&self, write: bool) -> Result<PooledConnection<SqliteConnectionManager>, Error> {
        let conn = if write {
            self.writer.get()
        } else {
            self.reader.get()
        };
        Ok(conn?)
    }
}

// Builds one of the two pools; the writer additionally runs the migrations.
fn pool(
    storage: &Storage,
    max_size: Option<u32>,
    readonly: bool,
    migration: Option<Runner>,
) -> Result<Pool<SqliteConnectionManager>, Error> {
    let mut flags = OpenFlags::default();
    if readonly {
        flags.set(OpenFlags::SQLITE_OPEN_READ_WRITE, false);
        flags.set(OpenFlags::SQLITE_OPEN_READ_ONLY, true);
        flags.set(OpenFlags::SQLITE_OPEN_CREATE, false);
    }

    let db = match storage {
        Storage::File(path) => SqliteConnectionManager::file(path),
        Storage::Memory(name) => {
            // a shared named in-memory database, addressable from both pools
            SqliteConnectionManager::file(format!("file:/{}?vfs=memdb", name))
        }
    }
    .with_flags(flags)
    .with_init(|c| {
        c.execute_batch(
            r#"
            PRAGMA journal_mode = WAL;
            PRAGMA busy_timeout = 5000;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = true;
            PRAGMA mmap_size = 134217728;
            PRAGMA journal_size_limit = 27103364;
            PRAGMA cache_size=2000;
            "#,
        )
    });

    let pool = if let Some(n) = max_size {
        r2d2::Pool::builder().max_size(n)
    } else {
        r2d2::Pool::builder()
    }
    .build(db)?;

    if let Some(runner) = migration {
        let mut conn = pool.get()?;
        runner.run(conn.deref_mut())?;
    }

    Ok(pool)
}
