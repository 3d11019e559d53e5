//! Shared `sort_order` maintenance for the orderable catalog tables.

use folio_core::types::DbId;
use sqlx::PgPool;

/// Set `sort_order` of each row to its 1-based position in `ids`.
///
/// Runs as one statement inside a transaction. If any id does not exist the
/// transaction is rolled back and `false` is returned.
pub(crate) async fn reorder(
    pool: &PgPool,
    table: &'static str,
    ids: &[DbId],
) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let query = format!(
        "UPDATE {table} AS t SET sort_order = v.position::int \
         FROM UNNEST($1::bigint[]) WITH ORDINALITY AS v(id, position) \
         WHERE t.id = v.id"
    );
    let result = sqlx::query(&query).bind(ids).execute(&mut *tx).await?;

    if result.rows_affected() != ids.len() as u64 {
        tx.rollback().await?;
        return Ok(false);
    }

    tx.commit().await?;
    Ok(true)
}

/// Next `sort_order` value so a new row lands at the end of the list.
pub(crate) fn next_sort_order_sql(table: &'static str) -> String {
    format!("(SELECT COALESCE(MAX(sort_order), 0) + 1 FROM {table})")
}
