// src/db/domain_cache.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// Fetch the account id cached for `hostname`, ignoring expired rows.
pub fn get_account_id(
    conn: &Connection,
    hostname: &str,
    now: i64,
) -> Result<Option<String>, ServerError> {
    conn.query_row(
        r#"
        select account_id
        from domain_mappings
        where hostname = ?
          and expires_at > ?
        "#,
        params![hostname, now],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::Cache(format!("domain cache lookup failed: {e}")))
}

/// Insert or refresh a mapping. Last write wins.
pub fn put_account_id(
    conn: &Connection,
    hostname: &str,
    account_id: &str,
    now: i64,
    expires_at: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into domain_mappings (hostname, account_id, cached_at, expires_at)
        values (?, ?, ?, ?)
        on conflict(hostname) do update set
            account_id = excluded.account_id,
            cached_at  = excluded.cached_at,
            expires_at = excluded.expires_at
        "#,
        params![hostname, account_id, now, expires_at],
    )
    .map_err(|e| ServerError::Cache(format!("domain cache write failed: {e}")))?;

    Ok(())
}

pub fn purge_expired(conn: &Connection, now: i64) -> Result<usize, ServerError> {
    conn.execute(
        "delete from domain_mappings where expires_at <= ?",
        params![now],
    )
    .map_err(|e| ServerError::Cache(format!("domain cache purge failed: {e}")))
}
