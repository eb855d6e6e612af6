//! Thin key-value facade over the `kv_store` table. All domain records are
//! stored as JSONB values under string keys like `listing:<id>`.

use common::error::Res;
use serde::{Serialize, de::DeserializeOwned};
use sqlx::{Executor, Postgres};

pub async fn get<'e, T, E>(executor: E, key: &str) -> Res<Option<T>>
where
    T: DeserializeOwned,
    E: Executor<'e, Database = Postgres>,
{
    let row: Option<(serde_json::Value,)> =
        sqlx::query_as("SELECT value FROM kv_store WHERE key = $1")
            .bind(key)
            .fetch_optional(executor)
            .await?;

    match row {
        Some((value,)) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

pub async fn set<'e, T, E>(executor: E, key: &str, value: &T) -> Res<()>
where
    T: Serialize,
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query(
        r#"
        INSERT INTO kv_store (key, value)
        VALUES ($1, $2)
        ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
        "#,
    )
    .bind(key)
    .bind(serde_json::to_value(value)?)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn del<'e, E>(executor: E, key: &str) -> Res<()>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query("DELETE FROM kv_store WHERE key = $1")
        .bind(key)
        .execute(executor)
        .await?;
    Ok(())
}

/// Fetches every value whose key starts with `prefix`. Keys are plain
/// literals (`profile:`, `listing:`), never user input.
pub async fn get_by_prefix<'e, T, E>(executor: E, prefix: &str) -> Res<Vec<T>>
where
    T: DeserializeOwned,
    E: Executor<'e, Database = Postgres>,
{
    let rows: Vec<(serde_json::Value,)> =
        sqlx::query_as("SELECT value FROM kv_store WHERE key LIKE $1 || '%' ORDER BY key")
            .bind(prefix)
            .fetch_all(executor)
            .await?;

    rows.into_iter()
        .map(|(value,)| serde_json::from_value(value).map_err(Into::into))
        .collect()
}
