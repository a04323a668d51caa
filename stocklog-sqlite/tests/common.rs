use stocklog_sqlite::{Database, Storage};

// Each test gets its own named in-memory database: memdb contents are shared
// process-wide by name, and live for as long as a pooled connection is open.
pub fn open(name: &str) -> anyhow::Result<Database> {
    Ok(Database::with_storage(
        Storage::Memory(name.to_owned()),
        None,
    )?)
}
