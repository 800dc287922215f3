use log::info;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, params_from_iter};
use std::time::Duration;

use crate::error::StoreError;
use crate::models::{StoredRecord, Submission};

/// One `CREATE TABLE IF NOT EXISTS` per record kind. Required columns are
/// NOT NULL; `data` is filled by the insert with `datetime('now')`.
const SCHEMA: [(&str, &str); 5] = [
    (
        "contatos",
        "CREATE TABLE IF NOT EXISTS contatos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT,
            email TEXT NOT NULL,
            telefone TEXT,
            mensagem TEXT NOT NULL,
            data TEXT
        )",
    ),
    (
        "acessos",
        "CREATE TABLE IF NOT EXISTS acessos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT,
            email TEXT NOT NULL,
            orgao TEXT NOT NULL,
            tipo TEXT NOT NULL,
            descricao TEXT NOT NULL,
            formato TEXT,
            finalidade TEXT,
            data TEXT
        )",
    ),
    (
        "feedbacks",
        "CREATE TABLE IF NOT EXISTS feedbacks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT,
            tipo TEXT NOT NULL,
            mensagem TEXT NOT NULL,
            data TEXT
        )",
    ),
    (
        "sugestoes",
        "CREATE TABLE IF NOT EXISTS sugestoes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT,
            categoria TEXT NOT NULL,
            mensagem TEXT NOT NULL,
            data TEXT
        )",
    ),
    (
        "denuncias",
        "CREATE TABLE IF NOT EXISTS denuncias (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT,
            email TEXT,
            telefone TEXT,
            tipo TEXT NOT NULL,
            descricao TEXT NOT NULL,
            endereco TEXT,
            data TEXT
        )",
    ),
];

/// Create and configure the SQLite connection pool
pub fn create_connection_pool(
    db_path: &str,
    max_size: u32,
    min_idle: u32,
    timeout_seconds: u64,
) -> Result<Pool<SqliteConnectionManager>, r2d2::Error> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = OFF;
             PRAGMA busy_timeout = 5000;",
        )
    });

    r2d2::Pool::builder()
        .max_size(max_size)
        .min_idle(Some(min_idle))
        .idle_timeout(Some(Duration::from_secs(300))) // 5 minutes idle timeout
        .connection_timeout(Duration::from_secs(timeout_seconds))
        .build(manager)
}

/// Ensures every record table exists. Safe to run on every start.
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    for (table, sql) in SCHEMA {
        conn.execute(sql, [])?;
        info!("Table '{table}' ready");
    }
    Ok(())
}

/// Insert one submission, stamping `data` on the database side.
/// Returns the id assigned by SQLite.
pub fn insert_submission<T: Submission>(
    conn: &Connection,
    submission: &T,
) -> rusqlite::Result<i64> {
    let fields = submission.fields();
    let columns = fields.iter().map(|f| f.column).collect::<Vec<_>>().join(", ");
    let placeholders = (1..=fields.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {table} ({columns}, data) VALUES ({placeholders}, datetime('now'))",
        table = T::TABLE,
    );

    let mut stmt = conn.prepare_cached(&sql)?;
    stmt.execute(params_from_iter(fields.iter().map(|f| f.value)))?;
    Ok(conn.last_insert_rowid())
}

/// Every row of the record's table, oldest first.
pub fn select_all<R: StoredRecord>(conn: &Connection) -> rusqlite::Result<Vec<R>> {
    let sql = format!("SELECT * FROM {table} ORDER BY id ASC", table = R::TABLE);
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt
        .query_map([], |row| R::from_row(row))?
        .collect::<rusqlite::Result<Vec<R>>>()?;
    Ok(rows)
}

/// Run a closure against a pooled connection on the blocking thread pool.
pub async fn with_connection<F, T>(
    pool: &Pool<SqliteConnectionManager>,
    f: F,
) -> Result<T, StoreError>
where
    F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<T, StoreError> {
        let conn = pool.get()?;
        Ok(f(&*conn)?)
    })
    .await?
}
